//! Column codecs shared by repositories and procedures
//!
//! Ids are hyphenated UUID text, amounts are decimal text and timestamps are
//! UTC milliseconds.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use rusqlite::types::Type;
use rusqlite::Row;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::ColumnDecodeError;

fn conversion_failure(idx: usize, err: ColumnDecodeError) -> rusqlite::Error {
    let ty = match &err {
        ColumnDecodeError::Timestamp(_) => Type::Integer,
        _ => Type::Text,
    };
    rusqlite::Error::FromSqlConversionFailure(idx, ty, Box::new(err))
}

pub fn uuid_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<Uuid> {
    let text: String = row.get(idx)?;
    Uuid::parse_str(&text).map_err(|e| conversion_failure(idx, e.into()))
}

pub fn decimal_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<Decimal> {
    let text: String = row.get(idx)?;
    Decimal::from_str(&text).map_err(|e| conversion_failure(idx, e.into()))
}

pub fn timestamp_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let millis: i64 = row.get(idx)?;
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| conversion_failure(idx, ColumnDecodeError::Timestamp(millis)))
}

pub fn uuid_param(id: &Uuid) -> String {
    id.hyphenated().to_string()
}

pub fn decimal_param(amount: &Decimal) -> String {
    amount.to_string()
}

pub fn timestamp_param(at: &DateTime<Utc>) -> i64 {
    at.timestamp_millis()
}
