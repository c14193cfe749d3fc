use crate::{
    asserter::{self, AssertionError},
    ConstructionDeriveResponse, ConstructionMetadataResponse, ConstructionPayloadsResponse,
    ConstructionSubmitResponse, PublicKey, Signature, SigningPayload,
};
use serde::{Deserialize, de::DeserializeOwned};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Kind of construction document a response file holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    PublicKey,
    SigningPayload,
    /// A JSON array of signatures, as sent to `/construction/combine`
    Signatures,
    Metadata,
    Submit,
    Payloads,
    Derive,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Endpoint::PublicKey => "public_key",
            Endpoint::SigningPayload => "signing_payload",
            Endpoint::Signatures => "signatures",
            Endpoint::Metadata => "metadata",
            Endpoint::Submit => "submit",
            Endpoint::Payloads => "payloads",
            Endpoint::Derive => "derive",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("failed to decode {endpoint} document: {source}")]
    Decode {
        endpoint: Endpoint,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid {endpoint} document: {source}")]
    Assertion {
        endpoint: Endpoint,
        #[source]
        source: AssertionError,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Decode a JSON document for `endpoint` and run the matching check
pub fn check_document(endpoint: Endpoint, json: &str) -> Result<(), CheckError> {
    let result = match endpoint {
        Endpoint::PublicKey => {
            let key: Option<PublicKey> = decode(endpoint, json)?;
            asserter::public_key(key.as_ref())
        }
        Endpoint::SigningPayload => {
            let payload: Option<SigningPayload> = decode(endpoint, json)?;
            asserter::signing_payload(payload.as_ref())
        }
        Endpoint::Signatures => {
            let signatures: Vec<Signature> = decode(endpoint, json)?;
            asserter::signatures(&signatures)
        }
        Endpoint::Metadata => {
            let response: ConstructionMetadataResponse = decode(endpoint, json)?;
            asserter::construction_metadata(&response)
        }
        Endpoint::Submit => {
            let response: ConstructionSubmitResponse = decode(endpoint, json)?;
            asserter::construction_submit(&response)
        }
        Endpoint::Payloads => {
            let response: ConstructionPayloadsResponse = decode(endpoint, json)?;
            asserter::construction_payloads(&response)
        }
        Endpoint::Derive => {
            let response: ConstructionDeriveResponse = decode(endpoint, json)?;
            asserter::construction_derive(&response)
        }
    };

    result.map_err(|source| CheckError::Assertion { endpoint, source })
}

fn decode<T: DeserializeOwned>(endpoint: Endpoint, json: &str) -> Result<T, CheckError> {
    serde_json::from_str(json).map_err(|source| CheckError::Decode { endpoint, source })
}

/// A response file to check
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseSource {
    pub endpoint: Endpoint,
    pub path: PathBuf,
}

/// Result of checking one response file
#[derive(Debug)]
pub struct Outcome {
    pub source: ResponseSource,
    pub result: Result<(), CheckError>,
}

/// Outcomes of a conformance run, in source order
#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<Outcome>,
}

impl RunReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// Checks a set of response files concurrently
pub struct ConformanceRunner {
    sources: Vec<ResponseSource>,
}

impl ConformanceRunner {
    pub fn new(sources: Vec<ResponseSource>) -> Self {
        Self { sources }
    }

    /// Read and check every source
    ///
    /// A file that cannot be read is reported as a failed outcome; it never
    /// aborts the rest of the run.
    pub async fn run(&self) -> RunReport {
        let mut tasks = JoinSet::new();

        for (position, source) in self.sources.iter().cloned().enumerate() {
            tasks.spawn(async move {
                let result = check_file(&source).await;
                (position, Outcome { source, result })
            });
        }

        let mut indexed = Vec::with_capacity(self.sources.len());
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(entry) => indexed.push(entry),
                Err(e) => warn!("Response check task failed: {:?}", e),
            }
        }
        indexed.sort_by_key(|(position, _)| *position);

        let report = RunReport {
            outcomes: indexed.into_iter().map(|(_, outcome)| outcome).collect(),
        };
        info!(
            "Conformance run finished: {} passed, {} failed",
            report.passed(),
            report.failed()
        );
        report
    }
}

async fn check_file(source: &ResponseSource) -> Result<(), CheckError> {
    debug!("Checking {} response at {}", source.endpoint, source.path.display());

    let json = tokio::fs::read_to_string(&source.path)
        .await
        .map_err(|e| CheckError::Io {
            path: source.path.clone(),
            source: e,
        })?;

    let result = check_document(source.endpoint, &json);
    if let Err(e) = &result {
        warn!("{} rejected: {}", source.path.display(), e);
    }
    result
}
