pub mod io;
pub mod kernel;
pub mod storage;
pub use io::ContractEndpoint;
pub use kernel::{ContractClient, ContractResponse};
pub use storage::load_record;

use thiserror::Error;

/// Key the endpoint fills with the location of the generated contract
pub const LEGAL_CONTRACT_URL: &str = "legalContractUrl";
/// Key the endpoint fills with the hash of the generated contract
pub const LEGAL_CONTRACT_HASH: &str = "legalContractHash";

/// The document being enriched. Loaded verbatim, no schema.
pub type Record = serde_json::Map<String, serde_json::Value>;

#[derive(Error, Debug)]
pub enum EnrichError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Response is not JSON: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("Response body is null")]
    NullBody,
    #[error("Record could not be serialized: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("Record file unreadable: {0}")]
    Io(#[from] std::io::Error),
    #[error("Record file is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("Record file must hold a JSON object, found {0}")]
    NotAnObject(&'static str),
}
