use actix_session::Session;
use actix_web::http::{StatusCode, header};
use actix_web::{HttpRequest, HttpResponse, web};

use crate::errors::{AppError, render, render_status};
use crate::models::application::ApplicationForm;
use crate::pipeline::{self, SubmitOutcome};
use crate::services::Services;
use crate::session::{csrf, form as form_session};
use crate::templates_structs::ApplicationFormTemplate;

/// Value of the `action` button that flips the minor toggle.
pub const TOGGLE_MINOR: &str = "toggle_minor";

/// Absolute URL of the incoming request, query string included.
fn request_url(req: &HttpRequest) -> String {
    let conn = req.connection_info();
    format!("{}://{}{}", conn.scheme(), conn.host(), req.uri())
}

fn referrer(req: &HttpRequest) -> String {
    req.headers()
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}

pub async fn form(req: HttpRequest, session: Session) -> Result<HttpResponse, AppError> {
    let mut state = form_session::load(&session);
    let error = state.take_error();
    if error.is_some() {
        form_session::save(&session, &state)?;
    }

    let csrf_token = csrf::get_or_create_token(&session)?;
    // Concurrent posts must share one id, so it is fixed before the first submit.
    form_session::form_id(&session)?;
    let tmpl = ApplicationFormTemplate::new(state, request_url(&req), referrer(&req), csrf_token)
        .with_error(error);
    render(tmpl)
}

pub async fn submit(
    session: Session,
    form: web::Form<ApplicationForm>,
    services: web::Data<Services>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let form = form.into_inner();

    let mut state = form_session::load(&session);
    state.apply_form(&form);
    let csrf_token = csrf::get_or_create_token(&session)?;

    if form.action.as_deref() == Some(TOGGLE_MINOR) {
        state.toggle_minor();
        form_session::save(&session, &state)?;
        let tmpl = ApplicationFormTemplate::new(state, form.page_url, form.referrer, csrf_token);
        return render(tmpl);
    }

    let form_id = form_session::form_id(&session)?;
    let Some(_permit) = services.in_flight.try_acquire(&form_id) else {
        log::warn!("Duplicate submit ignored while a submission is in flight");
        form_session::save(&session, &state)?;
        let tmpl = ApplicationFormTemplate::new(state, form.page_url, form.referrer, csrf_token)
            .submitting();
        return render_status(StatusCode::CONFLICT, tmpl);
    };

    let outcome = pipeline::submit(
        &mut state,
        &form.page_url,
        &form.referrer,
        services.store.as_ref(),
        services.notifier.as_ref(),
    )
    .await;

    match outcome {
        SubmitOutcome::Redirect(location) => {
            form_session::discard(&session);
            Ok(HttpResponse::SeeOther()
                .insert_header((header::LOCATION, location))
                .finish())
        }
        SubmitOutcome::Invalid(violations) => {
            form_session::save(&session, &state)?;
            let tmpl = ApplicationFormTemplate::new(state, form.page_url, form.referrer, csrf_token)
                .with_violations(violations);
            render(tmpl)
        }
        SubmitOutcome::Failed(e) => {
            log::warn!("Submission failed: {e}");
            form_session::save(&session, &state)?;
            let error = state.error.clone();
            let tmpl = ApplicationFormTemplate::new(state, form.page_url, form.referrer, csrf_token)
                .with_error(error);
            render(tmpl)
        }
        SubmitOutcome::AlreadySubmitting => {
            let tmpl = ApplicationFormTemplate::new(state, form.page_url, form.referrer, csrf_token)
                .submitting();
            render_status(StatusCode::CONFLICT, tmpl)
        }
    }
}
