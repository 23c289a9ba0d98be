use crate::domain::model::{OrderConfirmation, OrderSubmission, Subject};
use crate::domain::ports::{CatalogSource, ConfigProvider, OrderGateway};
use crate::utils::error::{FunnelError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

#[derive(Debug, Deserialize)]
struct Rendered {
    rendered: String,
}

/// Wire shape of a course record as the content API publishes it.
#[derive(Debug, Deserialize)]
struct CourseRecord {
    id: serde_json::Number,
    title: Rendered,
    content: Rendered,
}

impl From<CourseRecord> for Subject {
    fn from(record: CourseRecord) -> Self {
        Subject {
            id: record.id.to_string(),
            title: record.title.rendered,
            content: record.content.rendered,
        }
    }
}

struct CachedCatalog {
    fetched_at: Instant,
    subjects: Vec<Subject>,
}

/// Reads the subject catalog from the content API.
///
/// Repeated calls inside the staleness window return the previously fetched
/// result instead of re-fetching; the window defaults to 60 seconds via
/// config. There is no pagination and no retry, a failed fetch surfaces
/// immediately and the user re-triggers the load.
pub struct WpCatalog<C: ConfigProvider> {
    config: C,
    client: Client,
    cache: Mutex<Option<CachedCatalog>>,
}

impl<C: ConfigProvider> WpCatalog<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
            cache: Mutex::new(None),
        }
    }

    fn stale_after(&self) -> Duration {
        Duration::from_secs(self.config.catalog_stale_secs())
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.config.request_timeout_secs())
    }
}

#[async_trait]
impl<C: ConfigProvider> CatalogSource for WpCatalog<C> {
    async fn fetch_subjects(&self) -> Result<Vec<Subject>> {
        {
            let cache = self.cache.lock().await;
            if let Some(cached) = cache.as_ref() {
                if cached.fetched_at.elapsed() < self.stale_after() {
                    tracing::debug!("serving {} subjects from cache", cached.subjects.len());
                    return Ok(cached.subjects.clone());
                }
            }
        }

        let endpoint = self.config.catalog_endpoint();
        tracing::debug!("fetching subject catalog from: {}", endpoint);
        let response = self
            .client
            .get(endpoint)
            .timeout(self.request_timeout())
            .send()
            .await?;

        tracing::debug!("catalog response status: {}", response.status());
        let response = response.error_for_status()?;
        let records: Vec<CourseRecord> = response.json().await?;
        let subjects: Vec<Subject> = records.into_iter().map(Subject::from).collect();

        let mut cache = self.cache.lock().await;
        *cache = Some(CachedCatalog {
            fetched_at: Instant::now(),
            subjects: subjects.clone(),
        });

        Ok(subjects)
    }
}

/// Posts a completed order to the submit endpoint.
pub struct WpOrderGateway<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> WpOrderGateway<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl<C: ConfigProvider> OrderGateway for WpOrderGateway<C> {
    async fn submit(&self, order: &OrderSubmission) -> Result<OrderConfirmation> {
        let endpoint = self.config.order_endpoint();
        tracing::debug!("submitting order to: {}", endpoint);
        let response = self
            .client
            .post(endpoint)
            .json(order)
            .timeout(Duration::from_secs(self.config.request_timeout_secs()))
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("submit response status: {}", status);
        if !status.is_success() {
            // The raw body is kept for diagnostics.
            let body = response.text().await.unwrap_or_default();
            return Err(FunnelError::Submission {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("Unexpected status")
                    .to_string(),
                body,
            });
        }

        let confirmation = response.json::<OrderConfirmation>().await?;
        Ok(confirmation)
    }
}
