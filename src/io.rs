use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};

pub const DEFAULT_ENDPOINT: &str = "https://creativecontracts.ngrok.io/contrato/new";
pub const ACCEPT_VALUE: &str = "application/json, text/plain, */*";
pub const CONTENT_TYPE_VALUE: &str = "application/json";

/// Where records are posted to have their contract generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractEndpoint {
    pub url: String,
}

impl ContractEndpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Static headers sent with every request. No authentication.
    pub fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_VALUE));
        headers
    }
}

impl Default for ContractEndpoint {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}
