//! Customer record and its strongly-typed identifier.
//!
//! `CustomerId` wraps the auto-incrementing primary key so ids cannot be
//! confused with arbitrary integers. `NewCustomer` and `CustomerUpdate`
//! carry request-supplied fields into the storage layer, which validates
//! them before any SQL runs.

use std::fmt;

use serde::{Deserialize, Serialize};

type PgDb = sqlx::Postgres;
type PgValueRef<'r> = sqlx::postgres::PgValueRef<'r>;
type PgTypeInfo = sqlx::postgres::PgTypeInfo;
type PgArgumentBuffer = sqlx::postgres::PgArgumentBuffer;
type EncodeResult =
    Result<sqlx::encode::IsNull, Box<dyn std::error::Error + Send + Sync + 'static>>;
type BoxDynError = sqlx::error::BoxDynError;

/// Strongly-typed customer identifier.
///
/// Wraps the `BIGSERIAL` primary key. Assigned once by the database at
/// insert time and never reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CustomerId(pub i64);

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CustomerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl sqlx::Type<PgDb> for CustomerId {
    fn type_info() -> PgTypeInfo {
        <i64 as sqlx::Type<PgDb>>::type_info()
    }
}

impl<'r> sqlx::Decode<'r, PgDb> for CustomerId {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let id = <i64 as sqlx::Decode<PgDb>>::decode(value)?;
        Ok(Self(id))
    }
}

impl sqlx::Encode<'_, PgDb> for CustomerId {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> EncodeResult {
        <i64 as sqlx::Encode<PgDb>>::encode_by_ref(&self.0, buf)
    }
}

/// A persisted customer row.
///
/// Every persisted customer satisfies the field constraints in
/// [`crate::validate`]; the storage layer rejects candidates that do not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Customer {
    /// Primary key, assigned by the database.
    pub id: CustomerId,
    /// Given name, at least 3 characters.
    pub first_name: String,
    /// Family name, at least 2 characters.
    pub last_name: String,
    /// One of the supported cities.
    pub city: String,
}

/// Fields for creating a customer. The id is assigned by the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCustomer {
    /// Given name, at least 3 characters.
    pub first_name: String,
    /// Family name, at least 2 characters.
    pub last_name: String,
    /// One of the supported cities.
    pub city: String,
}

/// Partial update for an existing customer. Absent fields keep their
/// current value; the merged record is re-validated before persisting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerUpdate {
    /// New given name, if changing.
    pub first_name: Option<String>,
    /// New family name, if changing.
    pub last_name: Option<String>,
    /// New city, if changing.
    pub city: Option<String>,
}

impl CustomerUpdate {
    /// Returns the customer with this update applied, leaving the id
    /// untouched.
    pub fn apply_to(&self, current: &Customer) -> Customer {
        Customer {
            id: current.id,
            first_name: self.first_name.clone().unwrap_or_else(|| current.first_name.clone()),
            last_name: self.last_name.clone().unwrap_or_else(|| current.last_name.clone()),
            city: self.city.clone().unwrap_or_else(|| current.city.clone()),
        }
    }

    /// True when no field is being changed.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.city.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Customer {
        Customer {
            id: CustomerId(7),
            first_name: "Paris".to_string(),
            last_name: "Hilton".to_string(),
            city: "Eindhoven".to_string(),
        }
    }

    #[test]
    fn customer_serializes_with_flat_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["first_name"], "Paris");
        assert_eq!(json["last_name"], "Hilton");
        assert_eq!(json["city"], "Eindhoven");
    }

    #[test]
    fn update_applies_only_present_fields() {
        let update = CustomerUpdate {
            first_name: Some("Billy".to_string()),
            last_name: Some("Elliot".to_string()),
            city: None,
        };
        let updated = update.apply_to(&sample());

        assert_eq!(updated.id, CustomerId(7));
        assert_eq!(updated.first_name, "Billy");
        assert_eq!(updated.last_name, "Elliot");
        assert_eq!(updated.city, "Eindhoven");
    }

    #[test]
    fn empty_update_is_identity() {
        let update = CustomerUpdate::default();
        assert!(update.is_empty());
        assert_eq!(update.apply_to(&sample()), sample());
    }

    #[test]
    fn partial_update_deserializes_missing_fields_as_none() {
        let update: CustomerUpdate = serde_json::from_str(r#"{"city": "Rotterdam"}"#).unwrap();
        assert!(update.first_name.is_none());
        assert!(update.last_name.is_none());
        assert_eq!(update.city.as_deref(), Some("Rotterdam"));
    }

    #[test]
    fn customer_id_displays_raw_integer() {
        assert_eq!(CustomerId(42).to_string(), "42");
    }
}
