//! Turns an operation description into a ready-to-send HTTP request.

use crate::core::domain::error::{ValidationError, VmwareError, VmwareResult};
use crate::core::domain::options::CallHeaders;
use crate::core::domain::value_object::{PathSegment, ServiceUrl};
use flate2::Compression;
use flate2::write::GzEncoder;
use reqwest::Method;
use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, CONTENT_ENCODING, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue,
    USER_AGENT,
};
use serde::Serialize;
use std::io::Write;
use url::Url;

pub(crate) const JSON: &str = "application/json";
pub(crate) const MERGE_PATCH_JSON: &str = "application/merge-patch+json";

const SERVICE_NAME: &str = "vmware";
const SERVICE_VERSION: &str = "V1";
const SDK_ANALYTICS_HEADER: &str = "x-ibmcloud-sdk-analytics";
const TRANSACTION_ID_HEADER: &str = "x-global-transaction-id";

/// Everything an operation knows about the request it is about to make.
#[derive(Debug)]
pub(crate) struct OperationRequest<'a> {
    operation_id: &'static str,
    method: Method,
    path_template: &'static str,
    path_params: Vec<(&'static str, &'a str)>,
    call_headers: &'a CallHeaders,
    body: Option<(Vec<u8>, &'static str)>,
}

/// A fully resolved request. Reused unchanged across retry attempts.
#[derive(Debug, Clone)]
pub(crate) struct PreparedRequest {
    pub(crate) operation_id: &'static str,
    pub(crate) method: Method,
    pub(crate) url: Url,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Option<Vec<u8>>,
}

impl<'a> OperationRequest<'a> {
    pub(crate) fn new(
        operation_id: &'static str,
        method: Method,
        path_template: &'static str,
        call_headers: &'a CallHeaders,
    ) -> Self {
        Self {
            operation_id,
            method,
            path_template,
            path_params: Vec::new(),
            call_headers,
            body: None,
        }
    }

    pub(crate) fn path_param(mut self, name: &'static str, value: &'a str) -> Self {
        self.path_params.push((name, value));
        self
    }

    /// Attaches a JSON body.
    pub(crate) fn json_body<B: Serialize>(self, body: &B) -> VmwareResult<Self> {
        self.with_body(body, JSON)
    }

    /// Attaches a merge-patch body.
    pub(crate) fn merge_patch_body<B: Serialize>(self, body: &B) -> VmwareResult<Self> {
        self.with_body(body, MERGE_PATCH_JSON)
    }

    fn with_body<B: Serialize>(mut self, body: &B, content_type: &'static str) -> VmwareResult<Self> {
        let bytes = serde_json::to_vec(body).map_err(|e| {
            ValidationError::Format(format!("Failed to serialize request body: {e}"))
        })?;
        self.body = Some((bytes, content_type));
        Ok(self)
    }

    /// Resolves the URL, composes headers and encodes the body.
    ///
    /// Header layers, later ones winning: client defaults, SDK headers,
    /// `Accept-Language`/`X-Global-Transaction-ID`, then the per-call map.
    pub(crate) fn prepare(
        self,
        service_url: &ServiceUrl,
        default_headers: &HeaderMap,
        gzip: bool,
    ) -> VmwareResult<PreparedRequest> {
        let path = resolve_path(self.path_template, &self.path_params)?;
        let url = Url::parse(&format!("{}{}", service_url.as_str(), path))
            .map_err(|e| ValidationError::Format(format!("Invalid request URL: {e}")))?;

        let mut headers = default_headers.clone();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON));
        headers.insert(USER_AGENT, header_value("User-Agent", &user_agent())?);
        headers.insert(
            HeaderName::from_static(SDK_ANALYTICS_HEADER),
            header_value(SDK_ANALYTICS_HEADER, &sdk_analytics(self.operation_id))?,
        );
        if let Some(language) = &self.call_headers.accept_language {
            headers.insert(ACCEPT_LANGUAGE, header_value("Accept-Language", language)?);
        }
        if let Some(transaction_id) = &self.call_headers.x_global_transaction_id {
            headers.insert(
                HeaderName::from_static(TRANSACTION_ID_HEADER),
                header_value("X-Global-Transaction-ID", transaction_id)?,
            );
        }

        let body = match self.body {
            Some((bytes, content_type)) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
                if gzip {
                    headers.insert(CONTENT_ENCODING, HeaderValue::from_static("gzip"));
                    Some(gzip_encode(&bytes)?)
                } else {
                    Some(bytes)
                }
            }
            None => None,
        };

        for (name, value) in &self.call_headers.headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
                ValidationError::Format(format!("Invalid header name '{name}'"))
            })?;
            headers.insert(name.clone(), header_value(name.as_str(), value)?);
        }

        Ok(PreparedRequest {
            operation_id: self.operation_id,
            method: self.method,
            url,
            headers,
            body,
        })
    }
}

/// Substitutes every `{name}` in `template` with its encoded parameter.
pub(crate) fn resolve_path(
    template: &str,
    params: &[(&'static str, &str)],
) -> Result<String, ValidationError> {
    let mut resolved = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let close = rest[open..].find('}').map(|i| open + i).ok_or_else(|| {
            ValidationError::Format(format!("Unterminated placeholder in path '{template}'"))
        })?;
        let name = &rest[open + 1..close];
        let value = params
            .iter()
            .find(|(param, _)| *param == name)
            .map(|(_, value)| *value)
            .ok_or_else(|| ValidationError::missing(name))?;
        resolved.push_str(&rest[..open]);
        resolved.push_str(PathSegment::new(name, value)?.as_str());
        rest = &rest[close + 1..];
    }
    resolved.push_str(rest);
    Ok(resolved)
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, ValidationError> {
    HeaderValue::from_str(value)
        .map_err(|_| ValidationError::Format(format!("Invalid value for header '{name}'")))
}

fn user_agent() -> String {
    format!(
        "vmware-rust-sdk/{} (lang=rust; arch={}; os={})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::ARCH,
        std::env::consts::OS
    )
}

fn sdk_analytics(operation_id: &str) -> String {
    format!(
        "service_name={SERVICE_NAME};service_version={SERVICE_VERSION};operation_id={operation_id}"
    )
}

fn gzip_encode(bytes: &[u8]) -> VmwareResult<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(bytes)
        .and_then(|()| encoder.finish())
        .map_err(|e| VmwareError::Transport(format!("Failed to compress request body: {e}")))
}
