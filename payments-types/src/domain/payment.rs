//! Payment record domain model.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::{
    PartialSchema, ToSchema,
    openapi::{
        RefOr,
        schema::{ObjectBuilder, OneOfBuilder, Schema, Type},
    },
};
use uuid::Uuid;

/// Opaque identifier of a payment record.
///
/// Newly created records get a random UUID, but any string read back from the
/// store or supplied by a caller is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = String, example = "3f2b8c1e-7d4a-4e6b-9a51-0c2d8e9f1a37")]
pub struct PaymentId(String);

impl PaymentId {
    /// Generates a fresh, random PaymentId.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps an existing identifier without checking its shape.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PaymentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for PaymentId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_owned()))
    }
}

/// Caller-supplied timestamp.
///
/// The service attaches no meaning to it: JSON numbers (integral or not) and
/// strings are both kept exactly as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Number(serde_json::Number),
    Text(String),
}

impl From<i64> for Timestamp {
    fn from(value: i64) -> Self {
        Timestamp::Number(value.into())
    }
}

impl From<&str> for Timestamp {
    fn from(value: &str) -> Self {
        Timestamp::Text(value.to_owned())
    }
}

impl From<String> for Timestamp {
    fn from(value: String) -> Self {
        Timestamp::Text(value)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Timestamp::Number(n) => write!(f, "{}", n),
            Timestamp::Text(s) => f.write_str(s),
        }
    }
}

/// Numeric text becomes a number, anything else is kept as text.
impl std::str::FromStr for Timestamp {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<serde_json::Number>()
            .map(Timestamp::Number)
            .unwrap_or_else(|_| Timestamp::Text(s.to_owned())))
    }
}

impl PartialSchema for Timestamp {
    fn schema() -> RefOr<Schema> {
        let number = ObjectBuilder::new().schema_type(Type::Number).build();
        let text = ObjectBuilder::new().schema_type(Type::String).build();
        RefOr::T(Schema::OneOf(
            OneOfBuilder::new()
                .item(RefOr::T(Schema::Object(number)))
                .item(RefOr::T(Schema::Object(text)))
                .build(),
        ))
    }
}

impl ToSchema for Timestamp {
    fn name() -> Cow<'static, str> {
        Cow::Borrowed("Timestamp")
    }
}

/// A payment tied to a user and to a reservation/borrow transaction.
///
/// Every field except `id` is caller-owned; the service neither validates nor
/// normalizes them. `reserve_id` and `borrow_id` are expected to be unique
/// among live records, but nothing enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    /// Server-assigned identifier
    pub id: PaymentId,
    #[schema(example = "u1")]
    pub user_id: String,
    #[schema(example = "r1")]
    pub reserve_id: String,
    #[schema(example = "active")]
    pub status: String,
    /// Caller-supplied timestamp, stored verbatim
    #[schema(example = 1000)]
    pub timestamp: Timestamp,
    #[schema(example = 9.99)]
    pub price: f64,
    #[schema(example = "b1")]
    pub borrow_id: String,
}

impl PaymentRecord {
    /// Returns the value of the attribute a filter targets.
    pub fn attribute(&self, attribute: PaymentAttribute) -> &str {
        match attribute {
            PaymentAttribute::UserId => &self.user_id,
            PaymentAttribute::ReserveId => &self.reserve_id,
            PaymentAttribute::BorrowId => &self.borrow_id,
        }
    }

    /// True when this record satisfies the equality filter.
    pub fn matches(&self, filter: &PaymentFilter) -> bool {
        self.attribute(filter.attribute()) == filter.value()
    }
}

/// Non-key attributes a scan can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentAttribute {
    UserId,
    ReserveId,
    BorrowId,
}

impl PaymentAttribute {
    /// Attribute name as stored in the table.
    pub fn name(self) -> &'static str {
        match self {
            PaymentAttribute::UserId => "userId",
            PaymentAttribute::ReserveId => "reserveId",
            PaymentAttribute::BorrowId => "borrowId",
        }
    }
}

impl std::fmt::Display for PaymentAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Equality filter applied during a table scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentFilter {
    UserId(String),
    ReserveId(String),
    BorrowId(String),
}

impl PaymentFilter {
    pub fn attribute(&self) -> PaymentAttribute {
        match self {
            PaymentFilter::UserId(_) => PaymentAttribute::UserId,
            PaymentFilter::ReserveId(_) => PaymentAttribute::ReserveId,
            PaymentFilter::BorrowId(_) => PaymentAttribute::BorrowId,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            PaymentFilter::UserId(v) | PaymentFilter::ReserveId(v) | PaymentFilter::BorrowId(v) => {
                v
            }
        }
    }
}

impl std::fmt::Display for PaymentFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.attribute(), self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PaymentRecord {
        PaymentRecord {
            id: PaymentId::from_string("p-1"),
            user_id: "u1".to_string(),
            reserve_id: "r1".to_string(),
            status: "active".to_string(),
            timestamp: 1000.into(),
            price: 9.99,
            borrow_id: "b1".to_string(),
        }
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        let a = PaymentId::new();
        let b = PaymentId::new();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn test_id_parses_any_string() {
        let id: PaymentId = "not-a-uuid".parse().unwrap();
        assert_eq!(id.as_str(), "not-a-uuid");
    }

    #[test]
    fn test_record_uses_camel_case_keys() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["id"], "p-1");
        assert_eq!(json["userId"], "u1");
        assert_eq!(json["reserveId"], "r1");
        assert_eq!(json["borrowId"], "b1");
        assert_eq!(json["timestamp"], 1000);
        assert_eq!(json["price"], 9.99);
    }

    #[test]
    fn test_timestamp_keeps_numbers_and_strings() {
        let text: Timestamp = serde_json::from_str(r#""2024-01-01T00:00:00Z""#).unwrap();
        assert_eq!(text, Timestamp::from("2024-01-01T00:00:00Z"));

        let fractional: Timestamp = serde_json::from_str("1700000000000.5").unwrap();
        assert!(matches!(fractional, Timestamp::Number(_)));
        assert_eq!(
            serde_json::to_value(&fractional).unwrap(),
            serde_json::json!(1700000000000.5)
        );

        let integral: Timestamp = serde_json::from_str("1000").unwrap();
        assert_eq!(integral, Timestamp::from(1000));
        assert_eq!(serde_json::to_value(&integral).unwrap(), serde_json::json!(1000));
    }

    #[test]
    fn test_timestamp_from_command_line_text() {
        assert_eq!("1000".parse::<Timestamp>().unwrap(), Timestamp::from(1000));
        assert_eq!(
            "2024-01-01".parse::<Timestamp>().unwrap(),
            Timestamp::from("2024-01-01")
        );
        assert_eq!("12.5".parse::<Timestamp>().unwrap().to_string(), "12.5");
    }

    #[test]
    fn test_filter_matches_only_its_attribute() {
        let record = sample();

        assert!(record.matches(&PaymentFilter::UserId("u1".into())));
        assert!(record.matches(&PaymentFilter::ReserveId("r1".into())));
        assert!(record.matches(&PaymentFilter::BorrowId("b1".into())));
        assert!(!record.matches(&PaymentFilter::UserId("r1".into())));
        assert!(!record.matches(&PaymentFilter::BorrowId("B1".into())));
    }

    #[test]
    fn test_attribute_names_match_stored_keys() {
        assert_eq!(PaymentAttribute::UserId.name(), "userId");
        assert_eq!(PaymentAttribute::ReserveId.name(), "reserveId");
        assert_eq!(PaymentAttribute::BorrowId.name(), "borrowId");
        assert_eq!(
            PaymentFilter::ReserveId("r9".into()).to_string(),
            "reserveId = r9"
        );
    }
}
