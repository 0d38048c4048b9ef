//! Owner entity and its transient draft form

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use super::ValidationError;

/// Maximum length for text fields (matches no DB constraint; keeps
/// pathological payloads out of the table)
const MAX_FIELD_LEN: usize = 256;

/// A persisted owner record. The id is assigned by the database; every
/// read produces a fresh instance mapped from its row.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Owner {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub registration_date: DateTime<Utc>,
    pub address: String,
}

/// A transient owner: the five user-supplied fields, validated, with no
/// id yet. The only way to build one is through [`OwnerDraft::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct OwnerDraft {
    name: String,
    phone: String,
    email: String,
    registration_date: DateTime<Utc>,
    address: String,
}

impl OwnerDraft {
    /// Validate the five owner fields into a draft.
    ///
    /// # Rules
    /// - name, phone, email, address must be non-blank after trimming
    /// - each text field is capped at 256 characters
    ///
    /// Leading/trailing whitespace is trimmed before storage.
    pub fn new(
        name: &str,
        phone: &str,
        email: &str,
        registration_date: DateTime<Utc>,
        address: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: checked_field("name", name)?,
            phone: checked_field("phone", phone)?,
            email: checked_field("email", email)?,
            registration_date,
            address: checked_field("address", address)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn registration_date(&self) -> DateTime<Utc> {
        self.registration_date
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

fn checked_field(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if trimmed.chars().count() > MAX_FIELD_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_FIELD_LEN,
        });
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn valid_draft() {
        let draft = OwnerDraft::new("Ana", "111", "a@x.com", date(), "Rua 1").unwrap();
        assert_eq!(draft.name(), "Ana");
        assert_eq!(draft.registration_date(), date());
    }

    #[test]
    fn blank_fields_rejected() {
        assert_eq!(
            OwnerDraft::new("", "111", "a@x.com", date(), "Rua 1"),
            Err(ValidationError::Empty { field: "name" })
        );
        assert_eq!(
            OwnerDraft::new("Ana", "   ", "a@x.com", date(), "Rua 1"),
            Err(ValidationError::Empty { field: "phone" })
        );
        assert_eq!(
            OwnerDraft::new("Ana", "111", "a@x.com", date(), "\t"),
            Err(ValidationError::Empty { field: "address" })
        );
    }

    #[test]
    fn overlong_field_rejected() {
        let long = "x".repeat(257);
        let err = OwnerDraft::new(&long, "111", "a@x.com", date(), "Rua 1").unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooLong {
                field: "name",
                max: 256
            }
        );
    }

    #[test]
    fn whitespace_trimmed() {
        let draft = OwnerDraft::new("  Ana  ", "111", " a@x.com ", date(), "Rua 1").unwrap();
        assert_eq!(draft.name(), "Ana");
        assert_eq!(draft.email(), "a@x.com");
    }

    #[test]
    fn owner_serializes_with_rfc3339_date() {
        let owner = Owner {
            id: 7,
            name: "Ana".into(),
            phone: "111".into(),
            email: "a@x.com".into(),
            registration_date: date(),
            address: "Rua 1".into(),
        };
        let json = serde_json::to_value(&owner).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["registration_date"], "2024-01-01T00:00:00Z");
    }
}
