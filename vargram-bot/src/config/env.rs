//! Environment lookups shared by the config sections. Errors name the missing or bad variable.

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

pub(super) fn required(key: &str) -> Result<String> {
    env::var(key).with_context(|| format!("{} not set", key))
}

pub(super) fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.trim().is_empty())
}

pub(super) fn required_parsed<T>(key: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = required(key)?;
    raw.trim()
        .parse()
        .with_context(|| format!("{} is not valid: {:?}", key, raw))
}

/// Accepts `true`/`false`, `1`/`0`, `yes`/`no` (any case). Unset means `default`.
pub(super) fn flag(key: &str, default: bool) -> Result<bool> {
    match optional(key) {
        None => Ok(default),
        Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => anyhow::bail!("{} is not a boolean: {:?}", key, raw),
        },
    }
}
