//! HTTP tests: the route table served through actix-web's test harness.
//!
//! Uses in-memory collaborators, so no database or webhook is needed. A
//! browser session is simulated by carrying the session cookie and the CSRF
//! token from the rendered form into the next request.

mod common;

use std::sync::Arc;
use std::time::Duration;

use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};

use jovem_aprendiz::pipeline::{NOTIFICATION_FAILED, PERSISTENCE_FAILED};
use jovem_aprendiz::routes;
use common::*;

macro_rules! app {
    ($services:expr) => {
        test::init_service(
            App::new()
                .wrap(session_middleware())
                .app_data(web::Data::new($services))
                .configure(routes::configure)
                .default_service(web::to(routes::not_found)),
        )
        .await
    };
}

fn adult_fields<'a>(csrf: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("csrf_token", csrf),
        ("full_name", "Ana Silva"),
        ("whatsapp", "19912345678"),
        ("responsible_name", ""),
        ("responsible_phone", ""),
        ("region", "Campinas John Boyd Dunlop"),
        ("is_minor", "false"),
        ("action", "submit"),
        ("page_url", PAGE_URL),
        ("referrer", REFERRER),
    ]
}

fn body_text(bytes: &[u8]) -> String {
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[actix_web::test]
async fn test_form_page_renders_with_csrf_and_minor_default() {
    let store = Arc::new(RecordingStore::default());
    let notifier = Arc::new(RecordingNotifier::accepting());
    let app = app!(services(store, notifier));

    let req = test::TestRequest::get().uri("/?utm_source=tiktok").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(session_cookie(&resp).is_some());

    let html = body_text(&test::read_body(resp).await);
    assert_eq!(csrf_token(&html).len(), 64);
    assert!(html.contains(r#"name="is_minor" value="true""#));
    assert!(html.contains("Enviar Minha Inscrição"));
    assert!(html.contains("Sumaré - Centro"));
    assert!(html.contains("utm_source=tiktok"));
}

#[actix_web::test]
async fn test_submit_redirects_to_confirmation() {
    let store = Arc::new(RecordingStore::default());
    let notifier = Arc::new(RecordingNotifier::accepting());
    let app = app!(services(store.clone(), notifier.clone()));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let cookie = session_cookie(&resp).expect("session cookie");
    let csrf = csrf_token(&body_text(&test::read_body(resp).await));

    let req = test::TestRequest::post()
        .uri("/")
        .cookie(cookie)
        .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
        .set_payload(form_body(&adult_fields(&csrf)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let location = resp.headers().get(header::LOCATION).unwrap().to_str().unwrap();
    assert_eq!(location, "/obrigado?nome=Ana%20Silva");

    let records = store.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].whatsapp, "(19) 91234-5678");
    assert_eq!(records[0].region, "Campinas John Boyd Dunlop");

    let (payload, origin) = &notifier.calls()[0];
    assert_eq!(payload.whatsapp, "5519912345678");
    assert_eq!(payload.minor_flag, "NAO");
    assert_eq!(origin, PAGE_ORIGIN);
}

#[actix_web::test]
async fn test_submit_without_csrf_is_forbidden() {
    let store = Arc::new(RecordingStore::default());
    let notifier = Arc::new(RecordingNotifier::accepting());
    let app = app!(services(store.clone(), notifier));

    let req = test::TestRequest::post()
        .uri("/")
        .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
        .set_payload(form_body(&adult_fields("forged")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert!(store.records().is_empty());
}

#[actix_web::test]
async fn test_toggle_flips_minor_and_keeps_responsible_fields() {
    let store = Arc::new(RecordingStore::default());
    let notifier = Arc::new(RecordingNotifier::accepting());
    let app = app!(services(store.clone(), notifier.clone()));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let cookie = session_cookie(&resp).expect("session cookie");
    let csrf = csrf_token(&body_text(&test::read_body(resp).await));

    let fields = vec![
        ("csrf_token", csrf.as_str()),
        ("full_name", "Ana Silva"),
        ("whatsapp", ""),
        ("responsible_name", "Maria da Silva"),
        ("responsible_phone", ""),
        ("region", ""),
        ("is_minor", "true"),
        ("action", "toggle_minor"),
        ("page_url", PAGE_URL),
        ("referrer", ""),
    ];
    let req = test::TestRequest::post()
        .uri("/")
        .cookie(cookie)
        .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
        .set_payload(form_body(&fields))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_text(&test::read_body(resp).await);
    assert!(html.contains(r#"name="is_minor" value="false""#));
    assert!(html.contains(r#"value="Maria da Silva""#));
    assert!(store.records().is_empty());
    assert!(notifier.calls().is_empty());
}

#[actix_web::test]
async fn test_missing_responsible_party_rerenders_with_violations() {
    let store = Arc::new(RecordingStore::default());
    let notifier = Arc::new(RecordingNotifier::accepting());
    let app = app!(services(store.clone(), notifier.clone()));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let cookie = session_cookie(&resp).expect("session cookie");
    let csrf = csrf_token(&body_text(&test::read_body(resp).await));

    let mut fields = adult_fields(&csrf);
    for f in fields.iter_mut() {
        if f.0 == "is_minor" {
            f.1 = "true";
        }
    }
    let req = test::TestRequest::post()
        .uri("/")
        .cookie(cookie)
        .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
        .set_payload(form_body(&fields))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_text(&test::read_body(resp).await);
    assert!(html.contains("Nome do Responsável é obrigatório"));
    assert!(html.contains("Telefone do Responsável é obrigatório"));
    assert!(store.records().is_empty());
    assert!(notifier.calls().is_empty());
}

#[actix_web::test]
async fn test_oversized_name_rerenders_with_length_violation() {
    let store = Arc::new(RecordingStore::default());
    let notifier = Arc::new(RecordingNotifier::accepting());
    let app = app!(services(store.clone(), notifier.clone()));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let cookie = session_cookie(&resp).expect("session cookie");
    let csrf = csrf_token(&body_text(&test::read_body(resp).await));

    let long_name = "a".repeat(6000);
    let mut fields = adult_fields(&csrf);
    for f in fields.iter_mut() {
        if f.0 == "full_name" {
            f.1 = long_name.as_str();
        }
    }
    let req = test::TestRequest::post()
        .uri("/")
        .cookie(cookie)
        .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
        .set_payload(form_body(&fields))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_text(&test::read_body(resp).await);
    assert!(html.contains("Nome deve ter no máximo 120 caracteres"));
    assert!(store.records().is_empty());
    assert!(notifier.calls().is_empty());
}

#[actix_web::test]
async fn test_second_submit_while_first_runs_is_rejected() {
    let store = Arc::new(RecordingStore::default());
    let notifier = Arc::new(RecordingNotifier::new(NotifierMode::Slow(Duration::from_millis(300))));
    let app = app!(services(store.clone(), notifier.clone()));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let cookie = session_cookie(&resp).expect("session cookie");
    let csrf = csrf_token(&body_text(&test::read_body(resp).await));

    let post = || {
        test::TestRequest::post()
            .uri("/")
            .cookie(cookie.clone())
            .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
            .set_payload(form_body(&adult_fields(&csrf)))
            .to_request()
    };
    let (first, second) = tokio::join!(
        test::call_service(&app, post()),
        test::call_service(&app, post())
    );

    assert_eq!(first.status(), StatusCode::SEE_OTHER);
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let html = body_text(&test::read_body(second).await);
    assert!(html.contains("Enviando..."));
    assert_eq!(store.records().len(), 1);
    assert_eq!(notifier.calls().len(), 1);
}

#[actix_web::test]
async fn test_persistence_failure_shows_message_on_form() {
    let store = Arc::new(RecordingStore::failing());
    let notifier = Arc::new(RecordingNotifier::accepting());
    let app = app!(services(store, notifier.clone()));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let cookie = session_cookie(&resp).expect("session cookie");
    let csrf = csrf_token(&body_text(&test::read_body(resp).await));

    let req = test::TestRequest::post()
        .uri("/")
        .cookie(cookie)
        .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
        .set_payload(form_body(&adult_fields(&csrf)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_text(&test::read_body(resp).await);
    assert!(html.contains(PERSISTENCE_FAILED));
    // The submit button is usable again.
    assert!(html.contains("Enviar Minha Inscrição"));
    assert!(notifier.calls().is_empty());
}

#[actix_web::test]
async fn test_notification_failure_shows_message_on_form() {
    let store = Arc::new(RecordingStore::default());
    let notifier = Arc::new(RecordingNotifier::new(NotifierMode::Status(503)));
    let app = app!(services(store.clone(), notifier));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let cookie = session_cookie(&resp).expect("session cookie");
    let csrf = csrf_token(&body_text(&test::read_body(resp).await));

    let req = test::TestRequest::post()
        .uri("/")
        .cookie(cookie)
        .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
        .set_payload(form_body(&adult_fields(&csrf)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_text(&test::read_body(resp).await);
    assert!(html.contains(NOTIFICATION_FAILED));
    assert_eq!(store.records().len(), 1);
}

#[actix_web::test]
async fn test_confirmation_shows_first_name() {
    let app = app!(services(
        Arc::new(RecordingStore::default()),
        Arc::new(RecordingNotifier::accepting())
    ));

    let req = test::TestRequest::get().uri("/obrigado?nome=Ana%20Silva").to_request();
    let html = body_text(&test::call_and_read_body(&app, req).await);
    assert!(html.contains("Parabéns, Ana!"));
    assert!(!html.contains("Silva"));

    let req = test::TestRequest::get().uri("/obrigado?nome=Ana+Silva").to_request();
    let html = body_text(&test::call_and_read_body(&app, req).await);
    assert!(html.contains("Parabéns, Ana!"));
}

#[actix_web::test]
async fn test_confirmation_without_name_uses_placeholder() {
    let app = app!(services(
        Arc::new(RecordingStore::default()),
        Arc::new(RecordingNotifier::accepting())
    ));

    let req = test::TestRequest::get().uri("/obrigado").to_request();
    let html = body_text(&test::call_and_read_body(&app, req).await);
    assert!(html.contains("Parabéns, Candidato!"));
}

#[actix_web::test]
async fn test_static_pages_and_not_found() {
    let app = app!(services(
        Arc::new(RecordingStore::default()),
        Arc::new(RecordingNotifier::accepting())
    ));

    let req = test::TestRequest::get().uri("/termos-de-uso").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(&test::read_body(resp).await);
    assert!(html.contains("<h1>Termos de Uso</h1>"));

    let req = test::TestRequest::get().uri("/politica-de-privacidade").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(&test::read_body(resp).await);
    assert!(html.contains("<h1>Política de Privacidade</h1>"));

    let req = test::TestRequest::get().uri("/inscricoes").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
