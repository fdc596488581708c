use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::phone;

/// Facility locations an applicant can choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    CampinasAmoreiras,
    CampinasJohnBoydDunlop,
    SumareCentro,
}

impl Region {
    pub const ALL: [Region; 3] = [
        Region::CampinasAmoreiras,
        Region::CampinasJohnBoydDunlop,
        Region::SumareCentro,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Region::CampinasAmoreiras => "Campinas Amoreiras",
            Region::CampinasJohnBoydDunlop => "Campinas John Boyd Dunlop",
            Region::SumareCentro => "Sumaré - Centro",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.label() == label)
    }
}

/// Form inputs addressable by a structural update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FullName,
    Whatsapp,
    ResponsibleName,
    ResponsiblePhone,
    Region,
}

impl Field {
    /// Human label used in validation messages.
    pub fn label(self) -> &'static str {
        match self {
            Field::FullName => "Nome",
            Field::Whatsapp => "WhatsApp",
            Field::ResponsibleName => "Nome do Responsável",
            Field::ResponsiblePhone => "Telefone do Responsável",
            Field::Region => "Região de Preferência",
        }
    }

    pub fn is_phone(self) -> bool {
        matches!(self, Field::Whatsapp | Field::ResponsiblePhone)
    }
}

/// Raw POST body of the application form.
#[derive(Debug, Deserialize)]
pub struct ApplicationForm {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub whatsapp: String,
    #[serde(default)]
    pub responsible_name: String,
    #[serde(default)]
    pub responsible_phone: String,
    #[serde(default)]
    pub region: String,
    /// Current value of the minor toggle, "true" or "false".
    #[serde(default)]
    pub is_minor: String,
    /// `toggle_minor` flips the toggle instead of submitting.
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub page_url: String,
    #[serde(default)]
    pub referrer: String,
    pub csrf_token: String,
}

/// Read-only copy of the form taken when a submission starts.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationSnapshot {
    pub full_name: String,
    pub whatsapp: String,
    pub is_minor: bool,
    pub responsible_name: String,
    pub responsible_phone: String,
    pub region: String,
}

/// Row inserted into `applications`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewApplication {
    pub full_name: String,
    pub whatsapp: String,
    pub responsible_name: String,
    pub responsible_phone: String,
    pub region: String,
    pub created_at: DateTime<Utc>,
}

impl NewApplication {
    /// Keeps the display mask on the whatsapp number and blanks the
    /// responsible party for adults.
    pub fn from_snapshot(snapshot: &ApplicationSnapshot, created_at: DateTime<Utc>) -> Self {
        let (responsible_name, responsible_phone) = if snapshot.is_minor {
            (snapshot.responsible_name.clone(), snapshot.responsible_phone.clone())
        } else {
            (String::new(), String::new())
        };
        Self {
            full_name: snapshot.full_name.clone(),
            whatsapp: snapshot.whatsapp.clone(),
            responsible_name,
            responsible_phone,
            region: snapshot.region.clone(),
            created_at,
        }
    }
}

/// Where the form was filled in: page URL, its query parameters and the referrer.
#[derive(Debug, Clone)]
pub struct SubmissionContext {
    pub page_url: url::Url,
    pub url_params: HashMap<String, String>,
    pub referrer: String,
}

impl SubmissionContext {
    pub fn capture(page_url: &str, referrer: &str) -> Result<Self, url::ParseError> {
        let page_url = url::Url::parse(page_url)?;
        // Repeated keys keep the last value.
        let url_params = page_url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Ok(Self {
            page_url,
            url_params,
            referrer: referrer.to_string(),
        })
    }

    /// Value sent in the webhook's `Origin` header.
    pub fn origin(&self) -> String {
        self.page_url.origin().ascii_serialization()
    }
}

/// Body of the webhook POST. Key names are part of the receiver's contract.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPayload {
    pub full_name: String,
    pub whatsapp: String,
    pub responsible_name: String,
    pub responsible_phone: String,
    pub region: String,
    #[serde(rename = "menor18anos")]
    pub minor_flag: &'static str,
    pub url: String,
    pub url_params: HashMap<String, String>,
    pub referrer: String,
}

impl NotificationPayload {
    pub fn build(snapshot: &ApplicationSnapshot, context: &SubmissionContext) -> Self {
        let (responsible_name, responsible_phone) = if snapshot.is_minor {
            (
                snapshot.responsible_name.clone(),
                phone::for_webhook(&snapshot.responsible_phone),
            )
        } else {
            (String::new(), String::new())
        };
        Self {
            full_name: snapshot.full_name.clone(),
            whatsapp: phone::for_webhook(&snapshot.whatsapp),
            responsible_name,
            responsible_phone,
            region: snapshot.region.clone(),
            minor_flag: if snapshot.is_minor { "SIM" } else { "NAO" },
            url: context.page_url.to_string(),
            url_params: context.url_params.clone(),
            referrer: context.referrer.clone(),
        }
    }
}

/// Stored row, as read back from `applications`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ApplicationRecord {
    pub id: i64,
    pub full_name: String,
    pub whatsapp: String,
    pub responsible_name: String,
    pub responsible_phone: String,
    pub region: String,
    pub created_at: DateTime<Utc>,
}
