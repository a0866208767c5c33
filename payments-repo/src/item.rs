//! Conversions between `PaymentRecord` and DynamoDB attribute maps.

use std::collections::HashMap;
use std::str::FromStr;

use aws_sdk_dynamodb::types::AttributeValue;

use payments_types::{PaymentId, PaymentRecord, RepoError, Timestamp};

pub const ID: &str = "id";
pub const USER_ID: &str = "userId";
pub const RESERVE_ID: &str = "reserveId";
pub const STATUS: &str = "status";
pub const TIMESTAMP: &str = "timestamp";
pub const PRICE: &str = "price";
pub const BORROW_ID: &str = "borrowId";

pub type Item = HashMap<String, AttributeValue>;

/// Primary key attribute for `id`.
pub fn key(id: &PaymentId) -> AttributeValue {
    AttributeValue::S(id.as_str().to_owned())
}

pub fn string_value(value: &str) -> AttributeValue {
    AttributeValue::S(value.to_owned())
}

pub fn number_value(value: impl ToString) -> AttributeValue {
    AttributeValue::N(value.to_string())
}

/// Numbers are stored as `N`, text as `S`.
pub fn timestamp_value(value: &Timestamp) -> AttributeValue {
    match value {
        Timestamp::Number(n) => number_value(n),
        Timestamp::Text(s) => string_value(s),
    }
}

/// Full item for a put.
pub fn to_item(record: &PaymentRecord) -> Item {
    HashMap::from([
        (ID.to_owned(), key(&record.id)),
        (USER_ID.to_owned(), string_value(&record.user_id)),
        (RESERVE_ID.to_owned(), string_value(&record.reserve_id)),
        (STATUS.to_owned(), string_value(&record.status)),
        (TIMESTAMP.to_owned(), timestamp_value(&record.timestamp)),
        (PRICE.to_owned(), number_value(record.price)),
        (BORROW_ID.to_owned(), string_value(&record.borrow_id)),
    ])
}

/// Reads a scanned item back into a record.
pub fn from_item(item: &Item) -> Result<PaymentRecord, RepoError> {
    Ok(PaymentRecord {
        id: PaymentId::from_string(string_attr(item, ID)?),
        user_id: string_attr(item, USER_ID)?,
        reserve_id: string_attr(item, RESERVE_ID)?,
        status: string_attr(item, STATUS)?,
        timestamp: timestamp_attr(item, TIMESTAMP)?,
        price: number_attr(item, PRICE)?,
        borrow_id: string_attr(item, BORROW_ID)?,
    })
}

fn attr<'a>(item: &'a Item, name: &str) -> Result<&'a AttributeValue, RepoError> {
    item.get(name)
        .ok_or_else(|| RepoError::Malformed(format!("missing attribute `{}`", name)))
}

fn string_attr(item: &Item, name: &str) -> Result<String, RepoError> {
    attr(item, name)?
        .as_s()
        .cloned()
        .map_err(|_| RepoError::Malformed(format!("attribute `{}` is not a string", name)))
}

fn number_attr<T: FromStr>(item: &Item, name: &str) -> Result<T, RepoError> {
    let raw = attr(item, name)?
        .as_n()
        .map_err(|_| RepoError::Malformed(format!("attribute `{}` is not a number", name)))?;

    raw.parse().map_err(|_| {
        RepoError::Malformed(format!("attribute `{}` has unreadable value {}", name, raw))
    })
}

fn timestamp_attr(item: &Item, name: &str) -> Result<Timestamp, RepoError> {
    match attr(item, name)? {
        AttributeValue::N(_) => number_attr(item, name).map(Timestamp::Number),
        AttributeValue::S(s) => Ok(Timestamp::Text(s.clone())),
        _ => Err(RepoError::Malformed(format!(
            "attribute `{}` is neither a number nor a string",
            name
        ))),
    }
}
