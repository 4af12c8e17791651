//! Embedded language configurations

use super::config::LanguageConfig;
use crate::error::{CoreError, Result};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

static LANGUAGE_CONFIGS: OnceLock<BTreeMap<&'static str, LanguageConfig>> = OnceLock::new();

macro_rules! embed_language_config {
    ($code:expr, $path:expr) => {
        ($code, include_str!($path))
    };
}

fn load_embedded_configs() -> BTreeMap<&'static str, LanguageConfig> {
    let mut configs = BTreeMap::new();

    let embedded_configs = [
        embed_language_config!("en", "../../configs/languages/english.toml"),
        embed_language_config!("ja", "../../configs/languages/japanese.toml"),
    ];

    for (code, toml_content) in embedded_configs {
        match LanguageConfig::from_toml_str(toml_content) {
            Ok(config) if config.metadata.code == code => {
                configs.insert(code, config);
            }
            Ok(config) => log::error!(
                "embedded config code mismatch: expected {}, got {}",
                code,
                config.metadata.code
            ),
            Err(e) => log::error!("failed to parse embedded {code} config: {e}"),
        }
    }

    configs
}

fn embedded() -> &'static BTreeMap<&'static str, LanguageConfig> {
    LANGUAGE_CONFIGS.get_or_init(load_embedded_configs)
}

/// Look up an embedded configuration by language code.
///
/// Accepts both codes (`en`) and lowercase names (`english`).
pub fn get_language_config(code: &str) -> Result<&'static LanguageConfig> {
    let configs = embedded();
    let wanted = code.trim().to_lowercase();

    configs
        .get(wanted.as_str())
        .or_else(|| {
            configs
                .values()
                .find(|c| c.metadata.name.to_lowercase() == wanted)
        })
        .ok_or_else(|| CoreError::UnsupportedLanguage(code.to_string()))
}

/// Codes of all embedded languages, sorted
pub fn list_available_languages() -> Vec<&'static str> {
    embedded().keys().copied().collect()
}

/// Load and validate a language configuration from a TOML file
pub fn load_from_file(path: impl AsRef<Path>) -> Result<LanguageConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    LanguageConfig::from_toml_str(&content).map_err(|e| match e {
        CoreError::LanguageConfig(msg) => {
            CoreError::LanguageConfig(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })
}
