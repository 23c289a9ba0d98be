use crate::domain::model::{OrderConfirmation, OrderSubmission, Subject};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn catalog_endpoint(&self) -> &str;
    fn order_endpoint(&self) -> &str;
    fn catalog_stale_secs(&self) -> u64;
    fn request_timeout_secs(&self) -> u64;
}

#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_subjects(&self) -> Result<Vec<Subject>>;
}

#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn submit(&self, order: &OrderSubmission) -> Result<OrderConfirmation>;
}
