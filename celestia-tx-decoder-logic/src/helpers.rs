//! Typed lookups over the loosely typed key/value maps found in event logs and JSON
//! packet payloads. Missing keys fall back to zero values; malformed values are errors.

use crate::error::ParseError;
use bigdecimal::{num_bigint::BigInt, BigDecimal, Zero};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coin {
    pub amount: BigDecimal,
    pub denom: String,
}

pub fn string_from_map(map: &Map<String, Value>, key: &str) -> String {
    match map.get(key) {
        Some(Value::String(value)) => value.clone(),
        Some(Value::Null) | None => String::new(),
        Some(value) => value.to_string(),
    }
}

/// Reads a decimal amount, dropping a trailing unit such as `utia` in `"1000utia"`.
pub fn decimal_from_map(map: &Map<String, Value>, key: &str) -> Result<BigDecimal, ParseError> {
    let value = string_from_map(map, key);
    let (amount, _) = split_amount(&value);
    if amount.is_empty() {
        return Ok(BigDecimal::zero());
    }
    parse_decimal(amount).ok_or_else(|| ParseError::InvalidDecimal(value.clone()))
}

pub fn coin_from_map(map: &Map<String, Value>, key: &str) -> Result<Option<Coin>, ParseError> {
    let value = string_from_map(map, key);
    if value.is_empty() {
        return Ok(None);
    }
    parse_coin(&value).map(Some)
}

pub fn int64_from_map(map: &Map<String, Value>, key: &str) -> Result<i64, ParseError> {
    let value = string_from_map(map, key);
    if value.is_empty() {
        return Ok(0);
    }
    Ok(value.parse()?)
}

pub fn uint64_from_map(map: &Map<String, Value>, key: &str) -> Result<u64, ParseError> {
    let value = string_from_map(map, key);
    if value.is_empty() {
        return Ok(0);
    }
    Ok(value.parse()?)
}

pub fn time_from_map(
    map: &Map<String, Value>,
    key: &str,
) -> Result<Option<DateTime<Utc>>, ParseError> {
    let value = string_from_map(map, key);
    if value.is_empty() {
        return Ok(None);
    }
    DateTime::parse_from_rfc3339(&value)
        .map(|time| Some(time.with_timezone(&Utc)))
        .map_err(|_| ParseError::InvalidTime(value))
}

/// Parses a single coin string such as `"1000utia"`.
pub fn parse_coin(value: &str) -> Result<Coin, ParseError> {
    let (amount, denom) = split_amount(value.trim());
    if amount.is_empty() || denom.is_empty() {
        return Err(ParseError::InvalidCoin(value.to_string()));
    }
    let amount = parse_decimal(amount).ok_or_else(|| ParseError::InvalidCoin(value.to_string()))?;
    Ok(Coin {
        amount,
        denom: denom.to_string(),
    })
}

/// Parses a comma separated coin list such as `"10utia,5ibc/27394FB0"`.
pub fn parse_coins(value: &str) -> Result<Vec<Coin>, ParseError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|coin| !coin.is_empty())
        .map(parse_coin)
        .collect()
}

/// Parses an optionally signed run of ascii digits. Exponents, separators and
/// surrounding whitespace are rejected.
pub fn parse_integer(value: &str) -> Option<BigInt> {
    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    let magnitude = BigInt::from_str(digits).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Parses `[sign]digits[.digits]`. Exponent forms are rejected so the scale of the
/// result is bounded by the input length.
pub fn parse_decimal(value: &str) -> Option<BigDecimal> {
    let integer = match value.split_once('.') {
        Some((integer, fraction))
            if !fraction.is_empty() && fraction.bytes().all(|byte| byte.is_ascii_digit()) =>
        {
            integer
        }
        Some(_) => return None,
        None => value,
    };
    parse_integer(integer)?;
    BigDecimal::from_str(value).ok()
}

fn split_amount(value: &str) -> (&str, &str) {
    let end = value
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'))
        .unwrap_or(value.len());
    value.split_at(end)
}
