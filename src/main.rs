use std::path::PathBuf;

use anyhow::Context;
use freeboard::{init_logging, run_demo, LogFormat, SettingsPersistence, BUILD_DATE, VERSION};
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    let mut format = LogFormat::Pretty;
    let mut config_path = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json-logs" => format = LogFormat::Json,
            "--config" => {
                let path = args.next().context("--config needs a path")?;
                config_path = Some(PathBuf::from(path));
            }
            other => anyhow::bail!("unknown argument: {other}"),
        }
    }

    init_logging(format)?;
    info!(version = VERSION, build_date = BUILD_DATE, "freeboard starting");

    let path = match config_path {
        Some(path) => path,
        None => SettingsPersistence::default_config_path()?,
    };
    let settings = match SettingsPersistence::load_or_default(&path) {
        Ok(settings) => settings,
        Err(err) => {
            warn!(%err, path = %path.display(), "unreadable settings, using defaults");
            SettingsPersistence::new()
        }
    };

    let summary = run_demo(settings.config())?;
    info!(
        elements = summary.elements,
        history = summary.history_len,
        "session complete"
    );
    Ok(())
}
