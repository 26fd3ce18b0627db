//! Default port implementations.

use crate::ports::SourcePort;
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use std::collections::HashMap;

pub use schemasync_artifacts::FsWritePort;

#[cfg(feature = "http")]
pub use http::HttpGenerationGateway;

/// Reads documents from the filesystem.
#[derive(Debug, Clone, Default)]
pub struct FsSourcePort;

impl SourcePort for FsSourcePort {
    fn read_to_string(&self, path: &Utf8Path) -> anyhow::Result<String> {
        fs::read_to_string(path).with_context(|| format!("read {}", path))
    }
}

/// Serves documents from memory, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemorySourcePort {
    files: HashMap<Utf8PathBuf, String>,
}

impl InMemorySourcePort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<Utf8PathBuf>, contents: impl Into<String>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }
}

impl SourcePort for InMemorySourcePort {
    fn read_to_string(&self, path: &Utf8Path) -> anyhow::Result<String> {
        self.files
            .get(path)
            .cloned()
            .with_context(|| format!("read {}: not found in memory source", path))
    }
}

#[cfg(feature = "http")]
mod http {
    use crate::error::GenerationTransportError;
    use crate::ports::{GenerationGateway, GenerationRequest};
    use reqwest::blocking::Client;
    use schemasync_fixtures::wire::{ChatRequest, ChatResponse};
    use std::time::Duration;
    use tracing::{debug, info};

    /// Chat-completions gateway over blocking HTTP.
    ///
    /// One POST per call. A bearer token is sent only when the config
    /// carries an api key; no timeout is applied unless `timeout_secs` is set.
    #[derive(Debug, Clone, Default)]
    pub struct HttpGenerationGateway;

    impl HttpGenerationGateway {
        pub fn new() -> Self {
            Self
        }
    }

    fn transport(err: reqwest::Error) -> GenerationTransportError {
        GenerationTransportError::Transport {
            message: err.to_string(),
        }
    }

    impl GenerationGateway for HttpGenerationGateway {
        fn generate(
            &self,
            request: &GenerationRequest<'_>,
        ) -> Result<String, GenerationTransportError> {
            let config = request.config;
            let client = Client::builder()
                .timeout(config.timeout_secs.map(Duration::from_secs))
                .build()
                .map_err(transport)?;

            let body = ChatRequest::for_fixtures(config, request.request);
            let mut http = client.post(&config.api_url).json(&body);
            if let Some(key) = &config.api_key {
                http = http.bearer_auth(key);
            }

            info!(url = %config.api_url, model = %config.model, "requesting fixtures");
            let response = http.send().map_err(transport)?;
            let status = response.status();
            let text = response.text().map_err(transport)?;
            debug!(status = status.as_u16(), bytes = text.len(), "generation response");

            if !status.is_success() {
                return Err(GenerationTransportError::status(status.as_u16(), &text));
            }

            let parsed: ChatResponse = serde_json::from_str(&text).map_err(|e| {
                GenerationTransportError::ResponseShape {
                    message: format!("response body is not a chat completion: {e}"),
                }
            })?;
            parsed
                .into_first_content()
                .ok_or_else(|| GenerationTransportError::ResponseShape {
                    message: "response has no choices[0].message.content".to_string(),
                })
        }
    }
}
