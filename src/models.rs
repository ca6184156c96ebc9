use crate::expiry::ExpiryStatus;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_WARNING_THRESHOLD: i64 = 30;
pub const DEFAULT_DANGER_THRESHOLD: i64 = 7;

/// One tracked domain registration. Dates are kept as `YYYY-MM-DD` strings
/// and validated on intake.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainRecord {
    pub name: String,
    #[serde(default)]
    pub registrar: Option<String>,
    #[serde(default)]
    pub registration_date: Option<String>,
    pub expiration_date: String,
    #[serde(default)]
    pub renewal_period: Option<String>,
    #[serde(default)]
    pub renewal_price: Option<String>,
    #[serde(default)]
    pub renewal_url: Option<String>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_warning_threshold")]
    pub warning_threshold: i64,
    #[serde(default = "default_danger_threshold")]
    pub danger_threshold: i64,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_warning_threshold() -> i64 {
    DEFAULT_WARNING_THRESHOLD
}

fn default_danger_threshold() -> i64 {
    DEFAULT_DANGER_THRESHOLD
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RegistryData {
    pub next_id: u64,
    pub domains: BTreeMap<u64, DomainRecord>,
}

impl RegistryData {
    pub fn insert(&mut self, record: DomainRecord) -> u64 {
        self.next_id += 1;
        self.domains.insert(self.next_id, record);
        self.next_id
    }
}

/// Add/update request body. Empty strings are treated as absent fields.
#[derive(Debug, Deserialize)]
pub struct DomainPayload {
    pub name: String,
    #[serde(default)]
    pub registrar: Option<String>,
    #[serde(default)]
    pub registration_date: Option<String>,
    pub expiration_date: String,
    #[serde(default)]
    pub renewal_period: Option<String>,
    #[serde(default)]
    pub renewal_price: Option<String>,
    #[serde(default)]
    pub renewal_url: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub warning_threshold: Option<i64>,
    #[serde(default)]
    pub danger_threshold: Option<i64>,
}

/// Stored record plus the computed expiry view the dashboard renders.
#[derive(Debug, Serialize)]
pub struct DomainView {
    pub id: u64,
    pub name: String,
    pub registrar: Option<String>,
    pub registration_date: Option<String>,
    pub expiration_date: String,
    pub renewal_period: Option<String>,
    pub renewal_price: Option<String>,
    pub renewal_url: Option<String>,
    pub currency: String,
    pub warning_threshold: i64,
    pub danger_threshold: i64,
    pub days_remaining: i64,
    pub status: ExpiryStatus,
    pub status_color: &'static str,
    pub progress_percentage: f64,
}

/// Record shaped for the edit form: absent fields become empty strings and
/// the renewal period loses its unit suffix for numeric entry.
#[derive(Debug, Serialize)]
pub struct EditableDomain {
    pub id: u64,
    pub name: String,
    pub registrar: String,
    pub registration_date: String,
    pub expiration_date: String,
    pub renewal_period: String,
    pub renewal_price: String,
    pub renewal_url: String,
    pub currency: String,
    pub warning_threshold: i64,
    pub danger_threshold: i64,
}

#[derive(Debug, Deserialize)]
pub struct ProjectionRequest {
    pub expiration_date: String,
    #[serde(default)]
    pub renewal_period: String,
}

#[derive(Debug, Serialize)]
pub struct ProjectionResponse {
    pub current_expiration: String,
    pub projected_expiration: String,
    pub years_added: u32,
}
