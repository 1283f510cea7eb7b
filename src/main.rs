use anyhow::Context;
use log::{debug, error, info};
use std::process::ExitCode;

use qgen_bootstrap::service::{Bootstrapper, StdinPrompt, SystemRunner};
use qgen_bootstrap::utils::config::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
use qgen_bootstrap::utils::{init, ModelDownloader};

const CONFIG_EXIT_CODE: u8 = 5;

fn main() -> ExitCode {
    let config_path =
        std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let (config, locales) = match init::init(&config_path) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("{:#}", e);
            return ExitCode::from(CONFIG_EXIT_CODE);
        }
    };

    let root = match std::env::current_dir().context("cannot resolve working directory") {
        Ok(root) => root,
        Err(e) => {
            error!("{:#}", e);
            return ExitCode::from(CONFIG_EXIT_CODE);
        }
    };

    let runner = SystemRunner;
    let prompt = StdinPrompt::stdin();
    let hub = ModelDownloader::new();
    let bootstrapper = Bootstrapper::new(&config, &locales, root, &runner, &prompt, &hub);

    match bootstrapper.run() {
        Ok(report) => {
            debug!("bootstrap report: {:?}", report);
            for line in bootstrapper.usage_hints() {
                info!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", locales.t_with(e.message_key(), &e.message_args()));
            match e.step() {
                Some(step) => error!("[{}] {}", step, e),
                None => error!("{}", e),
            }
            ExitCode::from(e.exit_code())
        }
    }
}
