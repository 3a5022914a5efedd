use crate::core::domain::error::ValidationError;
use std::collections::{BTreeMap, HashMap};
use url::Url;

/// Default base URL of the VMware as a Service API.
pub const DEFAULT_SERVICE_URL: &str = "https://api.us-south.vmware.cloud.ibm.com/v1";

/// Base URL template parameterized by `{region}`.
pub const PARAMETERIZED_SERVICE_URL: &str = "https://api.{region}.vmware.cloud.ibm.com/v1";

/// Regions with a published endpoint, paired with their base URL.
const REGION_SERVICE_URLS: &[(&str, &str)] = &[
    ("us-south", "https://api.us-south.vmware.cloud.ibm.com/v1"),
    ("us-east", "https://api.us-east.vmware.cloud.ibm.com/v1"),
    ("eu-de", "https://api.eu-de.vmware.cloud.ibm.com/v1"),
    ("eu-gb", "https://api.eu-gb.vmware.cloud.ibm.com/v1"),
    ("jp-tok", "https://api.jp-tok.vmware.cloud.ibm.com/v1"),
    ("au-syd", "https://api.au-syd.vmware.cloud.ibm.com/v1"),
    ("ca-tor", "https://api.ca-tor.vmware.cloud.ibm.com/v1"),
    ("br-sao", "https://api.br-sao.vmware.cloud.ibm.com/v1"),
];

/// Template variables and their defaults.
const DEFAULT_URL_VARIABLES: &[(&str, &str)] = &[("region", "us-south")];

/// A validated base URL for the service.
///
/// Always absolute `http`/`https`, stored without a trailing slash so that
/// operation paths can be appended directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceUrl(String);

impl ServiceUrl {
    /// Parses and validates a base URL.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        validate_service_url(value)?;
        Ok(Self::new_unchecked(value))
    }

    /// Creates a new URL without validation.
    pub(crate) fn new_unchecked(value: &str) -> Self {
        Self(value.trim_end_matches('/').to_string())
    }

    /// Returns the URL as a string slice, without trailing slash.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ServiceUrl {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_SERVICE_URL)
    }
}

impl std::fmt::Display for ServiceUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validates a base URL and returns it parsed.
pub(crate) fn validate_service_url(url: &str) -> Result<Url, ValidationError> {
    if url.trim().is_empty() {
        return Err(ValidationError::empty("service_url"));
    }

    if url.contains('{') || url.contains('}') {
        return Err(ValidationError::Format(format!(
            "Service URL contains unresolved template variables: {url}"
        )));
    }

    let parsed = Url::parse(url)
        .map_err(|e| ValidationError::Format(format!("Invalid service URL '{url}': {e}")))?;

    match parsed.scheme() {
        "https" | "http" => {}
        other => {
            return Err(ValidationError::ConstraintViolation(format!(
                "Invalid scheme '{other}'. Must be one of: https, http"
            )));
        }
    }

    if parsed.host_str().is_none() {
        return Err(ValidationError::Format(format!(
            "Service URL has no host: {url}"
        )));
    }

    Ok(parsed)
}

/// Returns the base URL for a known region, or `None` for an unknown one.
#[must_use]
pub fn region_service_url(region: &str) -> Option<&'static str> {
    REGION_SERVICE_URLS
        .iter()
        .find(|(name, _)| *name == region)
        .map(|(_, url)| *url)
}

/// Builds a base URL from [`PARAMETERIZED_SERVICE_URL`].
///
/// Variables that are not provided fall back to their defaults; a provided
/// name that the template does not know is rejected.
///
/// ```
/// use std::collections::HashMap;
/// use vmware_aas::construct_service_url;
///
/// let vars = HashMap::from([("region".to_string(), "eu-de".to_string())]);
/// assert_eq!(
///     construct_service_url(&vars).unwrap(),
///     "https://api.eu-de.vmware.cloud.ibm.com/v1"
/// );
/// ```
pub fn construct_service_url(
    provided: &HashMap<String, String>,
) -> Result<String, ValidationError> {
    construct_from_template(PARAMETERIZED_SERVICE_URL, DEFAULT_URL_VARIABLES, provided)
}

pub(crate) fn construct_from_template(
    template: &str,
    defaults: &[(&str, &str)],
    provided: &HashMap<String, String>,
) -> Result<String, ValidationError> {
    let mut variables: BTreeMap<&str, &str> = defaults.iter().copied().collect();

    for (name, value) in provided {
        match variables.get_mut(name.as_str()) {
            Some(slot) => *slot = value.as_str(),
            None => {
                return Err(ValidationError::ConstraintViolation(format!(
                    "'{name}' is an invalid variable name. Valid variable names: [{}]",
                    defaults
                        .iter()
                        .map(|(n, _)| *n)
                        .collect::<Vec<_>>()
                        .join(", ")
                )));
            }
        }
    }

    let mut url = template.to_string();
    for (name, value) in variables {
        url = url.replace(&format!("{{{name}}}"), value);
    }
    Ok(url)
}
