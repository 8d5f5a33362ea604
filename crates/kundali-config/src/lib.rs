use anyhow::Context;
use kundali::{AyanamsaModel, DashaSettings, EngineSettings};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the config is looked for when no path is given, relative to the
/// working directory (repo root, or an app/crate directory two levels down).
pub const CONFIG_SEARCH_PATHS: [&str; 2] = ["configs/kundali.toml", "../../configs/kundali.toml"];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct EngineToml {
    #[serde(default)]
    ayanamsa_model: Option<String>,
    #[serde(default)]
    dasha: Option<DashaSettings>,
    #[serde(default)]
    apply_utc_offset: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    engine: Option<EngineToml>,
}

/// Read the config text.
///
/// An explicit path must exist. Without one, the first readable entry of
/// [`CONFIG_SEARCH_PATHS`] wins and `None` means no file was found.
pub fn read_config_text(path: Option<&Path>) -> anyhow::Result<Option<(PathBuf, String)>> {
    if let Some(path) = path {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        return Ok(Some((path.to_path_buf(), text)));
    }
    for p in &CONFIG_SEARCH_PATHS {
        if let Ok(text) = fs::read_to_string(p) {
            return Ok(Some((PathBuf::from(p), text)));
        }
    }
    Ok(None)
}

/// Parse config text; keys missing from `[engine]` keep their defaults.
pub fn parse_engine_settings(text: &str) -> anyhow::Result<EngineSettings> {
    let root: RootConfigToml =
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse [engine] settings: {e}"))?;
    let EngineToml {
        ayanamsa_model,
        dasha,
        apply_utc_offset,
    } = root.engine.unwrap_or_default();

    let mut settings = EngineSettings::default();
    if let Some(name) = ayanamsa_model {
        settings.ayanamsa_model = name.parse::<AyanamsaModel>()?;
    }
    if let Some(dasha) = dasha {
        settings.dasha = dasha;
    }
    if let Some(apply) = apply_utc_offset {
        settings.apply_utc_offset = apply;
    }
    settings.validate()?;
    Ok(settings)
}

/// Load settings from `path`, or from the conventional locations.
/// No config file at all yields the defaults.
pub fn load_engine_settings(path: Option<&Path>) -> anyhow::Result<EngineSettings> {
    match read_config_text(path)? {
        Some((source, text)) => {
            log::debug!("Loading engine settings from {}", source.display());
            parse_engine_settings(&text)
                .with_context(|| format!("Invalid config file {}", source.display()))
        }
        None => {
            log::debug!("No config file found in {:?}; using defaults", CONFIG_SEARCH_PATHS);
            Ok(EngineSettings::default())
        }
    }
}
