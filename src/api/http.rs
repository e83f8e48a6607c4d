//! reqwest implementation of [`InsuranceApi`].

use std::time::Duration;

use reqwest::{Client, Response};

use crate::config::{Config, normalize_api_base};
use crate::error::{CoverdeskError, Result};
use crate::form::FormBuffer;
use crate::types::{Collection, EntityKind};

use super::InsuranceApi;

/// HTTP client bound to one API base URL
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base: String,
}

impl HttpApi {
    /// Create a client for `base`. `timeout` of `None` waits indefinitely.
    pub fn new(base: &str, timeout: Option<Duration>) -> Result<Self> {
        let base = normalize_api_base(base)?;
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base,
        })
    }

    /// Create a client from configuration, with an optional base override
    pub fn from_config(config: &Config, override_base: Option<&str>) -> Result<Self> {
        let base = config.resolve_api_base(override_base)?;
        Self::new(&base, config.timeout())
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn collection_url(&self, kind: EntityKind) -> String {
        format!("{}/{}", self.base, kind.path())
    }

    fn record_url(&self, kind: EntityKind, id: i64) -> String {
        format!("{}/{}/{}", self.base, kind.path(), id)
    }
}

/// Reject non-2xx responses; the failure body is discarded.
fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(CoverdeskError::Status(status.as_u16()))
    }
}

impl InsuranceApi for HttpApi {
    async fn list(&self, kind: EntityKind) -> Result<Collection> {
        let url = self.collection_url(kind);
        tracing::debug!("GET {}", url);

        let response = check_status(self.client.get(&url).send().await?)?;
        let body = response.text().await?;
        Collection::from_json(kind, &body)
    }

    async fn create(&self, form: &FormBuffer) -> Result<String> {
        let url = self.collection_url(form.kind());
        tracing::debug!("POST {}", url);

        let response = check_status(self.client.post(&url).json(form).send().await?)?;
        Ok(response.text().await?)
    }

    async fn delete(&self, kind: EntityKind, id: i64) -> Result<String> {
        if !kind.supports_delete() {
            return Err(CoverdeskError::NotDeletable(kind));
        }
        let url = self.record_url(kind, id);
        tracing::debug!("DELETE {}", url);

        let response = check_status(self.client.delete(&url).send().await?)?;
        Ok(response.text().await?)
    }
}
