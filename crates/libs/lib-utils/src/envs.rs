//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables.
//!
//! Empty values are treated the same as unset ones, so `PYGLASS_API_URL=` in a
//! `.env` file falls back to the default instead of producing an empty URL.

use std::env;
use std::str::FromStr;

/// Get a non-empty environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    match env::var(name) {
        Ok(val) if !val.trim().is_empty() => Ok(val),
        _ => Err(Error::MissingEnv(name)),
    }
}

/// Get an environment variable, falling back to `default` when unset or empty.
pub fn get_env_or(name: &'static str, default: &str) -> String {
    get_env(name).unwrap_or_else(|_| default.to_string())
}

/// Get and parse an environment variable.
pub fn get_env_parse<T: FromStr>(name: &'static str) -> Result<T, Error> {
    let val = get_env(name)?;
    val.trim().parse::<T>().map_err(|_| Error::WrongFormat(name))
}

/// Parse an environment variable, using `default` only when it is unset.
///
/// A value that is present but malformed is still an error.
pub fn get_env_parse_or<T: FromStr>(name: &'static str, default: T) -> Result<T, Error> {
    match get_env_parse(name) {
        Err(Error::MissingEnv(_)) => Ok(default),
        other => other,
    }
}

// region:    --- Error
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("missing environment variable: {0}")]
    MissingEnv(&'static str),
    #[error("environment variable has wrong format: {0}")]
    WrongFormat(&'static str),
}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable name; the process environment is shared
    // between test threads.

    #[test]
    fn test_get_env_or_falls_back_when_unset() {
        assert_eq!(get_env_or("LIB_UTILS_TEST_UNSET_VAR", "fallback"), "fallback");
    }

    #[test]
    fn test_get_env_treats_empty_as_missing() {
        env::set_var("LIB_UTILS_TEST_EMPTY_VAR", "  ");
        assert_eq!(
            get_env("LIB_UTILS_TEST_EMPTY_VAR"),
            Err(Error::MissingEnv("LIB_UTILS_TEST_EMPTY_VAR"))
        );
    }

    #[test]
    fn test_get_env_parse_or() {
        env::set_var("LIB_UTILS_TEST_PARSE_VAR", "42");
        assert_eq!(get_env_parse_or("LIB_UTILS_TEST_PARSE_VAR", 7u32), Ok(42));
        assert_eq!(get_env_parse_or("LIB_UTILS_TEST_PARSE_UNSET", 7u32), Ok(7));

        env::set_var("LIB_UTILS_TEST_PARSE_BAD", "forty-two");
        assert_eq!(
            get_env_parse_or("LIB_UTILS_TEST_PARSE_BAD", 7u32),
            Err(Error::WrongFormat("LIB_UTILS_TEST_PARSE_BAD"))
        );
    }
}
