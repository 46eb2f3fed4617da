/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use tracing::warn;

/// Reads an environment variable, trimmed
///
/// Unset, blank and non-UTF-8 values are all reported as `None`, so an
/// `EXTEND_EMAIL=` line in a `.env` file behaves like a missing variable.
pub fn env_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Parses an environment variable, falling back to `default` when it is
/// absent or does not parse
///
/// # Arguments
/// * `name` - The name of the environment variable
/// * `default` - Value used when the variable is unset, blank or invalid
pub fn env_parse_or<T>(name: &str, default: T) -> T
where
    T: FromStr,
    <T as FromStr>::Err: Display,
{
    match env_var(name) {
        Some(raw) => raw.parse::<T>().unwrap_or_else(|e| {
            warn!("Ignoring {}='{}': {}", name, raw, e);
            default
        }),
        None => default,
    }
}
