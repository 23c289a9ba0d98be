pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "tutor-funnel")]
#[command(about = "Order funnel preview against a tutoring content API")]
pub struct CliConfig {
    #[arg(
        long,
        default_value = "http://gos-test.local/wp-json/wp/v2/course?_embed&_fields=id,title,content,meta"
    )]
    pub catalog_endpoint: String,

    #[arg(long, default_value = "http://gos-test.local/wp-json/gos/order/submit")]
    pub order_endpoint: String,

    #[arg(long, default_value = "60", help = "Catalog cache staleness window")]
    pub catalog_stale_secs: u64,

    #[arg(long, default_value = "30")]
    pub request_timeout_secs: u64,

    #[arg(long, help = "Load settings from a TOML file instead of flags")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn catalog_endpoint(&self) -> &str {
        &self.catalog_endpoint
    }

    fn order_endpoint(&self) -> &str {
        &self.order_endpoint
    }

    fn catalog_stale_secs(&self) -> u64 {
        self.catalog_stale_secs
    }

    fn request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("catalog_endpoint", &self.catalog_endpoint)?;
        validate_url("order_endpoint", &self.order_endpoint)?;
        Ok(())
    }
}
