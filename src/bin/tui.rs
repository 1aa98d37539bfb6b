use std::env;
use std::path::PathBuf;

use forgeiq_ui_terminal::{dashboard_from, load_config};

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = load_config(None)?;
    let dataset = env::var_os("FORGEIQ_DATASET").map(PathBuf::from);
    let dashboard = dashboard_from(&config, dataset.as_deref())?;
    forgeiq_ui_tui::start(dashboard)
}
