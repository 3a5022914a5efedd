//! External configuration, read from a credentials file or the environment.
//!
//! Keys are `<SERVICE_NAME>_<PROPERTY>`, e.g. `VMWARE_URL` or `VMWARE_APIKEY`.

use crate::core::domain::error::{ValidationError, VmwareResult};
use crate::core::domain::value_object::ServiceName;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const CREDENTIALS_FILE_ENV: &str = "IBM_CREDENTIALS_FILE";
const CREDENTIALS_FILE_NAME: &str = "ibm-credentials.env";

pub const PROPERTY_URL: &str = "URL";
pub const PROPERTY_AUTH_TYPE: &str = "AUTH_TYPE";
pub const PROPERTY_APIKEY: &str = "APIKEY";
pub const PROPERTY_BEARER_TOKEN: &str = "BEARER_TOKEN";
pub const PROPERTY_USERNAME: &str = "USERNAME";
pub const PROPERTY_PASSWORD: &str = "PASSWORD";
pub const PROPERTY_AUTH_URL: &str = "AUTH_URL";
pub const PROPERTY_CLIENT_ID: &str = "CLIENT_ID";
pub const PROPERTY_CLIENT_SECRET: &str = "CLIENT_SECRET";
pub const PROPERTY_SCOPE: &str = "SCOPE";
pub const PROPERTY_AUTH_DISABLE_SSL: &str = "AUTH_DISABLE_SSL";
pub const PROPERTY_DISABLE_SSL: &str = "DISABLE_SSL";
pub const PROPERTY_ENABLE_GZIP: &str = "ENABLE_GZIP";
pub const PROPERTY_ENABLE_RETRIES: &str = "ENABLE_RETRIES";
pub const PROPERTY_MAX_RETRIES: &str = "MAX_RETRIES";
pub const PROPERTY_RETRY_INTERVAL: &str = "RETRY_INTERVAL";

/// Properties configured for one service, keyed without the service prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceProperties {
    values: HashMap<String, String>,
}

impl ServiceProperties {
    /// Loads the properties of `service_name` from the first source that has any:
    /// the credentials file, then the process environment.
    ///
    /// # Errors
    /// Returns a validation error when the credentials file exists but cannot be parsed.
    pub fn load(service_name: &ServiceName) -> VmwareResult<Self> {
        Self::from_sources(service_name, credentials_file().as_deref(), std::env::vars())
    }

    pub(crate) fn from_sources(
        service_name: &ServiceName,
        credentials_file: Option<&Path>,
        environment: impl IntoIterator<Item = (String, String)>,
    ) -> VmwareResult<Self> {
        let prefix = service_name.property_prefix();

        if let Some(path) = credentials_file {
            let entries = dotenvy::from_path_iter(path).map_err(|e| {
                ValidationError::Format(format!(
                    "Failed to read credentials file {}: {e}",
                    path.display()
                ))
            })?;
            let mut pairs = Vec::new();
            for entry in entries {
                pairs.push(entry.map_err(|e| {
                    ValidationError::Format(format!(
                        "Malformed credentials file {}: {e}",
                        path.display()
                    ))
                })?);
            }
            let from_file = Self::from_pairs(&prefix, pairs);
            if !from_file.is_empty() {
                return Ok(from_file);
            }
        }

        Ok(Self::from_pairs(&prefix, environment))
    }

    fn from_pairs(prefix: &str, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let values = pairs
            .into_iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(prefix)
                    .filter(|property| !property.is_empty())
                    .map(|property| (property.to_string(), value))
            })
            .collect();
        Self { values }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns a property, ignoring blank values.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.values
            .get(property)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Returns a boolean property; only `true` (any case) is true.
    #[must_use]
    pub fn get_bool(&self, property: &str) -> bool {
        self.get(property)
            .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    }

    /// Returns a numeric property.
    ///
    /// # Errors
    /// Returns a validation error when the value is not a non-negative integer.
    pub fn get_u64(&self, property: &str) -> Result<Option<u64>, ValidationError> {
        self.get(property)
            .map(|v| {
                v.parse::<u64>().map_err(|_| ValidationError::Field {
                    field: property.to_string(),
                    message: format!("'{v}' is not a non-negative integer"),
                })
            })
            .transpose()
    }
}

/// Locates the credentials file: `$IBM_CREDENTIALS_FILE`, then the working
/// directory, then the home directory.
fn credentials_file() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CREDENTIALS_FILE_ENV).map(PathBuf::from) {
        return path.is_file().then_some(path);
    }

    let mut candidates = vec![PathBuf::from(CREDENTIALS_FILE_NAME)];
    if let Some(home) = std::env::var_os("HOME") {
        candidates.push(Path::new(&home).join(CREDENTIALS_FILE_NAME));
    }
    candidates.into_iter().find(|p| p.is_file())
}
