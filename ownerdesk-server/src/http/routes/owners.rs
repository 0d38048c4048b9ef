//! Owner endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::db::OwnerRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{Owner, OwnerDraft};

/// Owner payload for create and update requests.
///
/// `registrationDate` accepts either an RFC 3339 timestamp or a plain
/// `YYYY-MM-DD` date (interpreted as midnight UTC).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerPayload {
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(deserialize_with = "de_registration_date")]
    pub registration_date: DateTime<Utc>,
    pub address: String,
}

impl OwnerPayload {
    fn into_draft(self) -> Result<OwnerDraft, ApiError> {
        OwnerDraft::new(
            &self.name,
            &self.phone,
            &self.email,
            self.registration_date,
            &self.address,
        )
        .map_err(ApiError::from)
    }
}

/// Owner response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerResponse {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub registration_date: String,
    pub address: String,
}

impl From<Owner> for OwnerResponse {
    fn from(o: Owner) -> Self {
        Self {
            id: o.id,
            name: o.name,
            phone: o.phone,
            email: o.email,
            registration_date: o.registration_date.to_rfc3339(),
            address: o.address,
        }
    }
}

/// GET /owners - list all owners
async fn list_owners(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<OwnerResponse>>, ApiError> {
    let owners = OwnerRepo::new(&state.pool).list().await?;
    Ok(Json(owners.into_iter().map(OwnerResponse::from).collect()))
}

/// POST /owners - create a new owner
async fn create_owner(
    State(state): State<Arc<AppState>>,
    Json(req): Json<OwnerPayload>,
) -> Result<(StatusCode, Json<OwnerResponse>), ApiError> {
    let draft = req.into_draft()?;
    let owner = OwnerRepo::new(&state.pool).create(&draft).await?;

    Ok((StatusCode::CREATED, Json(OwnerResponse::from(owner))))
}

/// PUT /owners/{id} - update all fields of an existing owner
///
/// A non-numeric id is rejected at extraction with 400; an id matching
/// no row comes back from the repository as 404.
async fn update_owner(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<OwnerPayload>,
) -> Result<Json<OwnerResponse>, ApiError> {
    let draft = req.into_draft()?;
    let owner = OwnerRepo::new(&state.pool).update(id, &draft).await?;

    Ok(Json(OwnerResponse::from(owner)))
}

/// Owner routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/owners", get(list_owners).post(create_owner))
        .route("/owners/{id}", put(update_owner))
}

/// Deserialize a registration date from either an RFC 3339 timestamp or
/// a bare date.
fn de_registration_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;

    if let Ok(ts) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(ts.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map(|d| d.and_hms_opt(0, 0, 0).expect("midnight is valid").and_utc())
        .map_err(|_| {
            serde::de::Error::custom(format!(
                "invalid registrationDate '{}': expected RFC 3339 or YYYY-MM-DD",
                raw
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn payload_accepts_bare_date() {
        let payload: OwnerPayload = serde_json::from_value(serde_json::json!({
            "name": "Ana",
            "phone": "111",
            "email": "a@x.com",
            "registrationDate": "2024-01-01",
            "address": "Rua 1"
        }))
        .unwrap();

        assert_eq!(
            payload.registration_date,
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn payload_accepts_rfc3339() {
        let payload: OwnerPayload = serde_json::from_value(serde_json::json!({
            "name": "Ana",
            "phone": "111",
            "email": "a@x.com",
            "registrationDate": "2024-01-01T15:30:00-03:00",
            "address": "Rua 1"
        }))
        .unwrap();

        assert_eq!(
            payload.registration_date,
            Utc.with_ymd_and_hms(2024, 1, 1, 18, 30, 0).unwrap()
        );
    }

    #[test]
    fn payload_rejects_garbage_date() {
        let result: Result<OwnerPayload, _> = serde_json::from_value(serde_json::json!({
            "name": "Ana",
            "phone": "111",
            "email": "a@x.com",
            "registrationDate": "not-a-date",
            "address": "Rua 1"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn blank_name_becomes_validation_error() {
        let payload: OwnerPayload = serde_json::from_value(serde_json::json!({
            "name": "  ",
            "phone": "111",
            "email": "a@x.com",
            "registrationDate": "2024-01-01",
            "address": "Rua 1"
        }))
        .unwrap();

        assert!(matches!(
            payload.into_draft(),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn response_uses_camel_case_date() {
        let owner = Owner {
            id: 1,
            name: "Ana".into(),
            phone: "111".into(),
            email: "a@x.com".into(),
            registration_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            address: "Rua 1".into(),
        };
        let json = serde_json::to_value(OwnerResponse::from(owner)).unwrap();
        assert_eq!(json["registrationDate"], "2024-01-01T00:00:00+00:00");
    }
}
