use shared_types::AppConfig;

const CONFIG_TOML: &str = include_str!("../../../config.toml");

/// Settings baked in from the workspace `config.toml`.
///
/// A malformed file falls back to defaults so the portal still starts.
pub fn load() -> AppConfig {
    parse(CONFIG_TOML)
}

fn parse(contents: &str) -> AppConfig {
    match AppConfig::from_toml(contents) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "invalid config.toml, using defaults");
            AppConfig::default()
        }
    }
}
