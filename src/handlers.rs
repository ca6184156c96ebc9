use crate::errors::AppError;
use crate::expiry::{self, ExpiryStatus};
use crate::models::{
    DomainPayload, DomainRecord, DomainView, EditableDomain, ProjectionRequest,
    ProjectionResponse, DEFAULT_CURRENCY, DEFAULT_DANGER_THRESHOLD, DEFAULT_WARNING_THRESHOLD,
};
use crate::renewal;
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::render_dashboard;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate};

pub async fn dashboard(State(state): State<AppState>) -> Html<String> {
    let today = today();
    let data = state.data.lock().await;
    let tracked = data.domains.len();
    let expiring = data
        .domains
        .values()
        .filter_map(|record| domain_status(record, today))
        .filter(|status| *status != ExpiryStatus::Success)
        .count();
    Html(render_dashboard(tracked, expiring))
}

pub async fn list_domains(
    State(state): State<AppState>,
) -> Result<Json<Vec<DomainView>>, AppError> {
    let today = today();
    let data = state.data.lock().await;
    let mut views = Vec::with_capacity(data.domains.len());
    for (id, record) in &data.domains {
        views.push(domain_view(*id, record, today)?);
    }
    Ok(Json(views))
}

pub async fn get_domain(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<EditableDomain>, AppError> {
    let data = state.data.lock().await;
    let record = data
        .domains
        .get(&id)
        .ok_or_else(|| AppError::not_found(format!("no domain with id {id}")))?;

    Ok(Json(EditableDomain {
        id,
        name: record.name.clone(),
        registrar: record.registrar.clone().unwrap_or_default(),
        registration_date: record.registration_date.clone().unwrap_or_default(),
        expiration_date: record.expiration_date.clone(),
        renewal_period: renewal::editable_period(record.renewal_period.as_deref().unwrap_or("")),
        renewal_price: record.renewal_price.clone().unwrap_or_default(),
        renewal_url: record.renewal_url.clone().unwrap_or_default(),
        currency: record.currency.clone(),
        warning_threshold: record.warning_threshold,
        danger_threshold: record.danger_threshold,
    }))
}

pub async fn add_domain(
    State(state): State<AppState>,
    Json(payload): Json<DomainPayload>,
) -> Result<Json<DomainView>, AppError> {
    let record = validated_record(payload)?;
    let today = today();

    let mut data = state.data.lock().await;
    let id = data.insert(record);
    persist_data(&state.data_path, &data).await?;

    let record = &data.domains[&id];
    Ok(Json(domain_view(id, record, today)?))
}

pub async fn update_domain(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<DomainPayload>,
) -> Result<Json<DomainView>, AppError> {
    let record = validated_record(payload)?;
    let today = today();

    let mut data = state.data.lock().await;
    if !data.domains.contains_key(&id) {
        return Err(AppError::not_found(format!("no domain with id {id}")));
    }
    data.domains.insert(id, record);
    persist_data(&state.data_path, &data).await?;

    let record = &data.domains[&id];
    Ok(Json(domain_view(id, record, today)?))
}

pub async fn delete_domain(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    if data.domains.remove(&id).is_none() {
        return Err(AppError::not_found(format!("no domain with id {id}")));
    }
    persist_data(&state.data_path, &data).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Applies the stored renewal period to the stored expiration date and
/// persists the projected date as the new expiration.
pub async fn renew_domain(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<DomainView>, AppError> {
    let today = today();
    let mut data = state.data.lock().await;
    let record = data
        .domains
        .get_mut(&id)
        .ok_or_else(|| AppError::not_found(format!("no domain with id {id}")))?;

    let period = record.renewal_period.clone().unwrap_or_default();
    record.expiration_date = renewal::project(&record.expiration_date, &period)?;
    persist_data(&state.data_path, &data).await?;

    let record = &data.domains[&id];
    Ok(Json(domain_view(id, record, today)?))
}

/// Pure projection preview; nothing is stored.
pub async fn project_renewal(
    Json(payload): Json<ProjectionRequest>,
) -> Result<Json<ProjectionResponse>, AppError> {
    let projected = renewal::project(&payload.expiration_date, &payload.renewal_period)?;
    let years_added = renewal::years_in_period(&payload.renewal_period)?;

    Ok(Json(ProjectionResponse {
        current_expiration: payload.expiration_date,
        projected_expiration: projected,
        years_added,
    }))
}

fn validated_record(payload: DomainPayload) -> Result<DomainRecord, AppError> {
    let name = payload.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::bad_request("name must not be empty"));
    }

    let expiration_date = payload.expiration_date.trim().to_string();
    renewal::parse_date(&expiration_date)
        .map_err(|err| AppError::bad_request(format!("expiration_date: {err}")))?;

    let registration_date = match none_if_empty(payload.registration_date) {
        Some(value) => {
            renewal::parse_date(&value)
                .map_err(|err| AppError::bad_request(format!("registration_date: {err}")))?;
            Some(value)
        }
        None => None,
    };

    // Bare numbers like "3" are stored with their unit spelled out.
    let renewal_period =
        none_if_empty(payload.renewal_period).map(|period| renewal::display_period(&period));

    Ok(DomainRecord {
        name,
        registrar: none_if_empty(payload.registrar),
        registration_date,
        expiration_date,
        renewal_period,
        renewal_price: none_if_empty(payload.renewal_price),
        renewal_url: none_if_empty(payload.renewal_url),
        currency: none_if_empty(payload.currency)
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        warning_threshold: payload.warning_threshold.unwrap_or(DEFAULT_WARNING_THRESHOLD),
        danger_threshold: payload.danger_threshold.unwrap_or(DEFAULT_DANGER_THRESHOLD),
    })
}

fn none_if_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn domain_view(id: u64, record: &DomainRecord, today: NaiveDate) -> Result<DomainView, AppError> {
    // Stored dates are validated on intake; a failure here means the
    // registry file was edited by hand.
    let expiration = renewal::parse_date(&record.expiration_date).map_err(AppError::internal)?;
    let registration = match &record.registration_date {
        Some(value) => Some(renewal::parse_date(value).map_err(AppError::internal)?),
        None => None,
    };

    let days_remaining = expiry::days_remaining(expiration, today);
    let status = ExpiryStatus::classify(
        days_remaining,
        record.warning_threshold,
        record.danger_threshold,
    );

    Ok(DomainView {
        id,
        name: record.name.clone(),
        registrar: record.registrar.clone(),
        registration_date: record.registration_date.clone(),
        expiration_date: record.expiration_date.clone(),
        renewal_period: record.renewal_period.clone(),
        renewal_price: record.renewal_price.clone(),
        renewal_url: record.renewal_url.clone(),
        currency: record.currency.clone(),
        warning_threshold: record.warning_threshold,
        danger_threshold: record.danger_threshold,
        days_remaining,
        status,
        status_color: status.color(),
        progress_percentage: expiry::progress_percentage(registration, expiration, today),
    })
}

fn domain_status(record: &DomainRecord, today: NaiveDate) -> Option<ExpiryStatus> {
    let expiration = renewal::parse_date(&record.expiration_date).ok()?;
    Some(ExpiryStatus::classify(
        expiry::days_remaining(expiration, today),
        record.warning_threshold,
        record.danger_threshold,
    ))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
