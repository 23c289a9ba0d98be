pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::http::{WpCatalog, WpOrderGateway};
pub use crate::config::{toml_config::TomlConfig, CliConfig};
pub use crate::core::{funnel::Funnel, guard::GuardOutcome, selection::SelectionStore};
pub use crate::utils::error::{FunnelError, Result};
