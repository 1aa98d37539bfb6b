use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;

use forgeiq_adapter_fixtures::FixtureAnalytics;
use forgeiq_application::Dashboard;
use forgeiq_domain::ForgeConfig;
use forgeiq_ports::PortSet;

pub const CONFIG_ENV: &str = "FORGEIQ_CONFIG_PATH";

/// Config file location: explicit path, then `FORGEIQ_CONFIG_PATH`, then
/// `~/.forgeiq/config.yaml`.
pub fn config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    if let Ok(path) = env::var(CONFIG_ENV) {
        return PathBuf::from(path);
    }

    if let Ok(home) = env::var("HOME") {
        return Path::new(&home).join(".forgeiq").join("config.yaml");
    }

    PathBuf::from("forgeiq-config.yaml")
}

/// An explicitly named config must exist; the discovered default may not.
pub fn load_config(explicit: Option<&Path>) -> Result<ForgeConfig> {
    let path = config_path(explicit);
    match explicit {
        Some(_) => ForgeConfig::load_from_path(&path),
        None => ForgeConfig::load_or_default(&path),
    }
}

/// Wire a dashboard over the demo datasets, or over a dataset file.
pub fn dashboard_from(config: &ForgeConfig, dataset: Option<&Path>) -> Result<Dashboard> {
    let analytics = match dataset {
        Some(path) => FixtureAnalytics::load_from_path(path)?,
        None => FixtureAnalytics::sample(),
    };
    Ok(Dashboard::new_with_ports(
        config,
        PortSet::new(Arc::new(analytics)),
    ))
}
