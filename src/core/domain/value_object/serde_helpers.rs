//! Serde helpers for lenient primitive decoding.
//!
//! The service documents integers and booleans, but some gateways hand them back
//! quoted. These helpers accept either the documented JSON type or a string that
//! parses to it.

use serde::{Deserialize, Deserializer};
use std::{fmt::Display, str::FromStr};

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Typed(T),
    Text(String),
}

fn resolve<T, E>(value: Lenient<T>) -> Result<T, E>
where
    T: FromStr,
    T::Err: Display,
    E: serde::de::Error,
{
    match value {
        Lenient::Typed(v) => Ok(v),
        Lenient::Text(text) => text
            .trim()
            .parse::<T>()
            .map_err(|e| E::custom(format!("invalid value {text:?}: {e}"))),
    }
}

/// Deserialize a required primitive from its JSON type or a parseable string.
pub mod lenient {
    use super::*;

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + FromStr,
        T::Err: Display,
    {
        resolve(Lenient::<T>::deserialize(deserializer)?)
    }
}

/// Deserialize an optional primitive from its JSON type, a parseable string or `null`.
pub mod lenient_option {
    use super::*;

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + FromStr,
        T::Err: Display,
    {
        Option::<Lenient<T>>::deserialize(deserializer)?
            .map(resolve)
            .transpose()
    }
}
