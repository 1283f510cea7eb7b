use crate::locales::Locales;
use crate::utils::config::AppConfig;
use anyhow::Context;
use log::debug;
use log4rs;
use std::path::Path;

/// Loads configuration, starts logging and reads the message catalogs.
///
/// The log4rs file is looked up next to the application config
/// (`config/log4rs.yml` for the default layout).
pub fn init(config_path: &str) -> anyhow::Result<(AppConfig, Locales)> {
    let log_config = Path::new(config_path).with_file_name("log4rs.yml");
    log4rs::init_file(&log_config, Default::default())
        .with_context(|| format!("failed to initialize logging from {}", log_config.display()))?;

    let config = AppConfig::load(config_path)
        .with_context(|| format!("failed to load configuration from {}", config_path))?;
    debug!("configuration loaded from {}", config_path);

    let mut locales = Locales::new(&config.locales.path)
        .with_context(|| format!("failed to load locales from {}", config.locales.path))?;
    locales.set_default(&config.locales.default)?;
    debug!("locales path: {}, default locale: {}", config.locales.path, config.locales.default);

    for model_id in config.download.catalog.keys() {
        debug!("model in catalog: {}", model_id);
    }

    Ok((config, locales))
}
