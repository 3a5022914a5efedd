use crate::core::domain::error::ValidationError;

/// Default key used to look up external configuration.
pub const DEFAULT_SERVICE_NAME: &str = "vmware";

/// The name under which the service reads its external configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceName(String);

impl ServiceName {
    /// Creates a new service name without validation.
    pub(crate) fn new_unchecked(value: String) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Prefix of the configuration keys for this service, e.g. `VMWARE_`.
    #[must_use]
    pub fn property_prefix(&self) -> String {
        format!("{}_", self.0.to_ascii_uppercase().replace('-', "_"))
    }
}

impl Default for ServiceName {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_SERVICE_NAME.to_string())
    }
}

/// Validates a service name.
pub(crate) fn validate_service_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::empty("service_name"));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::Format(
            "Service name can only contain alphanumeric characters, hyphens and underscores"
                .to_string(),
        ));
    }
    Ok(())
}
