use tracing::Level;

pub const DEFAULT_API_BASE: &str = "https://example-xmtc.onrender.com";

/// Settings baked in at build time. `EMPLOYEE_API_BASE` overrides the API
/// location, e.g. `EMPLOYEE_API_BASE=http://localhost:8080 trunk serve`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
    pub log_level: Level,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::with_api_base(option_env!("EMPLOYEE_API_BASE"))
    }

    pub fn with_api_base(api_base: Option<&str>) -> Self {
        let api_base = api_base
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .to_string();
        let log_level = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO };
        Self { api_base, log_level }
    }

    pub fn tracing(&self) -> tracing_wasm::WASMLayerConfig {
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(self.log_level)
            .build()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_api_base(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_override_falls_back_to_default() {
        assert_eq!(AppConfig::with_api_base(None).api_base, DEFAULT_API_BASE);
        assert_eq!(AppConfig::with_api_base(Some("   ")).api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn override_is_trimmed() {
        let config = AppConfig::with_api_base(Some(" http://localhost:8080/ "));
        assert_eq!(config.api_base, "http://localhost:8080/");
    }
}
