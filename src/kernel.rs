use std::time::Instant;

use serde_json::Value;
use tracing::{debug, error, info};

use crate::{ContractEndpoint, EnrichError, LEGAL_CONTRACT_HASH, LEGAL_CONTRACT_URL, Record};

/// The two fields the endpoint hands back. Either may be missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContractResponse {
    pub legal_contract_url: Option<Value>,
    pub legal_contract_hash: Option<Value>,
}

impl ContractResponse {
    /// Picks the contract fields out of any JSON body. Non-objects yield nothing.
    /// A `null` body never gets here, `request_contract` rejects it.
    pub fn from_body(body: &Value) -> Self {
        Self {
            legal_contract_url: body.get(LEGAL_CONTRACT_URL).cloned(),
            legal_contract_hash: body.get(LEGAL_CONTRACT_HASH).cloned(),
        }
    }

    /// Overwrites both fields on the record. An absent field removes the key.
    pub fn apply(self, record: &mut Record) {
        set_or_remove(record, LEGAL_CONTRACT_URL, self.legal_contract_url);
        set_or_remove(record, LEGAL_CONTRACT_HASH, self.legal_contract_hash);
    }
}

fn set_or_remove(record: &mut Record, key: &str, value: Option<Value>) {
    match value {
        Some(v) => {
            record.insert(key.to_string(), v);
        }
        None => {
            record.remove(key);
        }
    }
}

#[derive(Clone)]
pub struct ContractClient {
    http: reqwest::Client,
    endpoint: ContractEndpoint,
}

impl ContractClient {
    pub fn new(endpoint: ContractEndpoint) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Posts the record and decodes whatever JSON comes back. The status
    /// code is not checked: an error status with a JSON body is a response
    /// like any other.
    pub async fn request_contract(&self, record: &Record) -> Result<ContractResponse, EnrichError> {
        let body = serde_json::to_vec(record).map_err(EnrichError::Encode)?;
        let start = Instant::now();

        let response = self
            .http
            .post(&self.endpoint.url)
            .headers(self.endpoint.headers())
            .body(body)
            .send()
            .await?;

        let status = response.status();
        debug!(%status, elapsed_ms = start.elapsed().as_millis() as u64, "endpoint answered");

        let bytes = response.bytes().await?;
        let parsed: Value = serde_json::from_slice(&bytes).map_err(EnrichError::Decode)?;
        if parsed.is_null() {
            return Err(EnrichError::NullBody);
        }
        Ok(ContractResponse::from_body(&parsed))
    }

    /// Runs one enrichment. Every failure is logged and swallowed; the
    /// record is only touched when the exchange succeeds.
    pub async fn enrich<'a>(&self, record: &'a mut Record) -> Option<&'a Record> {
        match self.request_contract(record).await {
            Ok(response) => {
                response.apply(record);
                let merged = Value::Object(record.clone());
                info!(record = %merged, "contract attached");
                Some(record)
            }
            Err(e) => {
                error!(endpoint = %self.endpoint.url, error = %e, "enrichment failed");
                None
            }
        }
    }
}
