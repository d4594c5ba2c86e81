//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `atlan_core` linkage and environment configuration.
//! - Keep output deterministic for quick local sanity checks.

use atlan_core::{init_logging_from_config, sdk_version, user_agent, ClientConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("atlan_core config error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match init_logging_from_config(&config) {
        Ok(true) => log::info!("event=cli_probe module=cli status=ok"),
        Ok(false) => {}
        Err(err) => {
            eprintln!("atlan_core logging error: {err}");
            return ExitCode::FAILURE;
        }
    }

    println!("atlan_core version={}", sdk_version());
    println!("atlan_core user_agent={}", user_agent());
    println!("atlan_core base_url={}", config.base_url);
    println!("atlan_core page_size={}", config.effective_page_size());
    ExitCode::SUCCESS
}
