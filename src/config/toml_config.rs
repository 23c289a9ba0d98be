use crate::domain::ports::ConfigProvider;
use crate::utils::error::{FunnelError, Result};
use crate::utils::validation::{validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub catalog_endpoint: String,
    pub order_endpoint: String,
    pub catalog_stale_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FunnelError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| FunnelError::InvalidConfigValue {
            field: "toml_parsing".to_string(),
            value: String::new(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values; unknown
    /// variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

impl ConfigProvider for TomlConfig {
    fn catalog_endpoint(&self) -> &str {
        &self.api.catalog_endpoint
    }

    fn order_endpoint(&self) -> &str {
        &self.api.order_endpoint
    }

    fn catalog_stale_secs(&self) -> u64 {
        self.api.catalog_stale_secs.unwrap_or(60)
    }

    fn request_timeout_secs(&self) -> u64 {
        self.api.request_timeout_secs.unwrap_or(30)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api.catalog_endpoint", &self.api.catalog_endpoint)?;
        validate_url("api.order_endpoint", &self.api.order_endpoint)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[api]
catalog_endpoint = "https://tutor.example.com/wp-json/wp/v2/course"
order_endpoint = "https://tutor.example.com/wp-json/gos/order/submit"
catalog_stale_secs = 120
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(
            config.catalog_endpoint(),
            "https://tutor.example.com/wp-json/wp/v2/course"
        );
        assert_eq!(config.catalog_stale_secs(), 120);
        assert_eq!(config.request_timeout_secs(), 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_FUNNEL_HOST", "https://funnel.test");

        let toml_content = r#"
[api]
catalog_endpoint = "${TEST_FUNNEL_HOST}/wp-json/wp/v2/course"
order_endpoint = "${TEST_FUNNEL_HOST}/wp-json/gos/order/submit"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.catalog_endpoint(),
            "https://funnel.test/wp-json/wp/v2/course"
        );

        std::env::remove_var("TEST_FUNNEL_HOST");
    }

    #[test]
    fn test_invalid_endpoint_fails_validation() {
        let toml_content = r#"
[api]
catalog_endpoint = "not-a-url"
order_endpoint = "https://tutor.example.com/wp-json/gos/order/submit"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[api]
catalog_endpoint = "https://tutor.example.com/wp-json/wp/v2/course"
order_endpoint = "https://tutor.example.com/wp-json/gos/order/submit"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert!(config.order_endpoint().ends_with("/gos/order/submit"));
    }
}
