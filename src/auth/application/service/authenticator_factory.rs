use crate::{
    auth::{
        application::service::iam_authenticator::IamAuthenticator,
        domain::authenticator::{
            AUTHTYPE_BASIC, AUTHTYPE_BEARER_TOKEN, AUTHTYPE_IAM, AUTHTYPE_NOAUTH, Authenticator,
            BasicAuthenticator, BearerTokenAuthenticator, NoAuthAuthenticator,
        },
    },
    core::{
        domain::{
            error::{ValidationError, VmwareResult},
            value_object::{ServiceName, validate_service_name},
        },
        infrastructure::config::{
            PROPERTY_APIKEY, PROPERTY_AUTH_DISABLE_SSL, PROPERTY_AUTH_TYPE, PROPERTY_AUTH_URL,
            PROPERTY_BEARER_TOKEN, PROPERTY_CLIENT_ID, PROPERTY_CLIENT_SECRET, PROPERTY_PASSWORD,
            PROPERTY_SCOPE, PROPERTY_USERNAME, ServiceProperties,
        },
    },
};
use std::sync::Arc;

/// Builds the authenticator configured for `service_name` in the credentials
/// file or the environment.
///
/// # Errors
/// Returns a validation error when no usable configuration is found.
pub fn authenticator_from_environment(service_name: &str) -> VmwareResult<Arc<dyn Authenticator>> {
    validate_service_name(service_name)?;
    let service_name = ServiceName::new_unchecked(service_name.to_string());
    let properties = ServiceProperties::load(&service_name)?;
    if properties.is_empty() {
        return Err(ValidationError::ConstraintViolation(format!(
            "No configuration found for service '{}'",
            service_name.as_str()
        ))
        .into());
    }
    authenticator_from_properties(&properties)
}

pub(crate) fn authenticator_from_properties(
    properties: &ServiceProperties,
) -> VmwareResult<Arc<dyn Authenticator>> {
    let auth_type = match properties.get(PROPERTY_AUTH_TYPE) {
        Some(auth_type) => auth_type.to_string(),
        None if properties.get(PROPERTY_APIKEY).is_some() => AUTHTYPE_IAM.to_string(),
        None => {
            return Err(ValidationError::missing(PROPERTY_AUTH_TYPE).into());
        }
    };

    let authenticator: Arc<dyn Authenticator> = if auth_type.eq_ignore_ascii_case(AUTHTYPE_IAM) {
        let mut iam = IamAuthenticator::new(required(properties, PROPERTY_APIKEY)?)
            .with_disable_ssl_verification(properties.get_bool(PROPERTY_AUTH_DISABLE_SSL));
        if let Some(url) = properties.get(PROPERTY_AUTH_URL) {
            iam = iam.with_url(url);
        }
        if let (Some(id), Some(secret)) = (
            properties.get(PROPERTY_CLIENT_ID),
            properties.get(PROPERTY_CLIENT_SECRET),
        ) {
            iam = iam.with_client_id_and_secret(id, secret);
        }
        if let Some(scope) = properties.get(PROPERTY_SCOPE) {
            iam = iam.with_scope(scope);
        }
        Arc::new(iam)
    } else if auth_type.eq_ignore_ascii_case(AUTHTYPE_BEARER_TOKEN) {
        Arc::new(BearerTokenAuthenticator::new(required(
            properties,
            PROPERTY_BEARER_TOKEN,
        )?))
    } else if auth_type.eq_ignore_ascii_case(AUTHTYPE_BASIC) {
        Arc::new(BasicAuthenticator::new(
            required(properties, PROPERTY_USERNAME)?,
            required(properties, PROPERTY_PASSWORD)?,
        ))
    } else if auth_type.eq_ignore_ascii_case(AUTHTYPE_NOAUTH) {
        Arc::new(NoAuthAuthenticator::new())
    } else {
        return Err(ValidationError::ConstraintViolation(format!(
            "Unrecognized authentication type '{auth_type}'. Must be one of: \
             {AUTHTYPE_IAM}, {AUTHTYPE_BEARER_TOKEN}, {AUTHTYPE_BASIC}, {AUTHTYPE_NOAUTH}"
        ))
        .into());
    };

    authenticator.validate()?;
    Ok(authenticator)
}

fn required<'a>(properties: &'a ServiceProperties, property: &str) -> VmwareResult<&'a str> {
    properties
        .get(property)
        .ok_or_else(|| ValidationError::missing(property).into())
}
