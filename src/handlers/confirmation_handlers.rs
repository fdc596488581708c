use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::errors::{AppError, render};
use crate::templates_structs::ConfirmationTemplate;

pub const PLACEHOLDER_NAME: &str = "Candidato";

#[derive(Deserialize)]
pub struct ConfirmationQuery {
    pub nome: Option<String>,
}

/// First whitespace-delimited token of the submitted name, or the placeholder.
pub fn first_name(name: Option<&str>) -> &str {
    name.and_then(|n| n.split_whitespace().next())
        .unwrap_or(PLACEHOLDER_NAME)
}

pub async fn thanks(query: web::Query<ConfirmationQuery>) -> Result<HttpResponse, AppError> {
    let tmpl = ConfirmationTemplate::new(first_name(query.nome.as_deref()));
    render(tmpl)
}
