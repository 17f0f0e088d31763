//! HTTP client for the internal site catalog.
//!
//! The catalog enumerates production and pre-release site URLs positionally.
//! Requests carry a unix-seconds `stime` header and a `token` header holding
//! the hex MD5 of the timestamp concatenated with a shared secret.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use md5::{Digest, Md5};
use reqwest::header::USER_AGENT;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::domain::entities::SitePair;
use crate::domain::repositories::{CatalogError, SiteCatalog};

const CATALOG_USER_AGENT: &str = "Mozilla/5.0";

#[derive(Debug, Deserialize)]
struct CatalogResponse {
    data: CatalogData,
}

#[derive(Debug, Deserialize)]
struct CatalogData {
    production_list: Vec<String>,
    pre_release_list: Vec<String>,
}

/// Site catalog over the internal HTTP API.
pub struct HttpSiteCatalog {
    client: reqwest::Client,
    endpoint: String,
    secret: String,
}

impl HttpSiteCatalog {
    /// Builds a catalog client with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying client cannot be
    /// constructed.
    pub fn new(
        endpoint: impl Into<String>,
        secret: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            secret: secret.into(),
        })
    }

    /// Hex MD5 over `stime` + secret, the catalog's request signature.
    fn sign(&self, stime: &str) -> String {
        let mut hasher = Md5::new();
        hasher.update(stime.as_bytes());
        hasher.update(self.secret.as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[async_trait]
impl SiteCatalog for HttpSiteCatalog {
    async fn fetch_pairs(&self) -> Result<Vec<SitePair>, CatalogError> {
        let stime = Utc::now().timestamp().to_string();
        let token = self.sign(&stime);

        let response = self
            .client
            .get(&self.endpoint)
            .header("stime", stime)
            .header("token", token)
            .header(USER_AGENT, CATALOG_USER_AGENT)
            .send()
            .await?
            .error_for_status()?;

        let body: CatalogResponse = response.json().await?;
        let CatalogData {
            production_list,
            pre_release_list,
        } = body.data;

        if production_list.len() != pre_release_list.len() {
            warn!(
                "catalog list length mismatch: {} production vs {} pre-release; extra tail dropped",
                production_list.len(),
                pre_release_list.len()
            );
        }

        let mut pairs = Vec::with_capacity(production_list.len().min(pre_release_list.len()));
        for (production, pre_release) in production_list.iter().zip(&pre_release_list) {
            match (hostname_of(production), hostname_of(pre_release)) {
                (Some(prod_host), Some(pre_host)) => {
                    pairs.push(SitePair::new(prod_host, pre_host));
                }
                _ => {
                    warn!("skipping catalog entry without hostname: '{production}' / '{pre_release}'");
                }
            }
        }

        debug!("catalog returned {} usable pairs", pairs.len());
        Ok(pairs)
    }
}

fn hostname_of(raw: &str) -> Option<String> {
    Url::parse(raw)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
}
