use url::form_urlencoded;

pub(crate) const APIKEY_GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";
const RESPONSE_TYPE: &str = "cloud_iam";

/// Form body of `POST /identity/token`.
pub(crate) struct IamTokenRequest {
    pub grant_type: &'static str,
    pub apikey: String,
    pub response_type: &'static str,
    pub scope: Option<String>,
}

impl IamTokenRequest {
    pub(crate) fn new(apikey: impl Into<String>, scope: Option<String>) -> Self {
        Self {
            grant_type: APIKEY_GRANT_TYPE,
            apikey: apikey.into(),
            response_type: RESPONSE_TYPE,
            scope,
        }
    }

    /// Encodes the request as `application/x-www-form-urlencoded`.
    pub(crate) fn to_form(&self) -> String {
        let mut form = form_urlencoded::Serializer::new(String::new());
        form.append_pair("grant_type", self.grant_type)
            .append_pair("apikey", &self.apikey)
            .append_pair("response_type", self.response_type);
        if let Some(scope) = &self.scope {
            form.append_pair("scope", scope);
        }
        form.finish()
    }
}
