//! `retreat-econ config` subcommands

use anyhow::Result;

use crate::cli::args::ConfigCommands;
use crate::config::EconomicsConfig;

pub fn run_config_command(command: ConfigCommands, config: &EconomicsConfig) -> Result<()> {
    match command {
        ConfigCommands::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                print!("{}", render_config(config));
            }
            Ok(())
        }
    }
}

fn render_config(config: &EconomicsConfig) -> String {
    format!(
        "platform_fee_rate = {} ({})\nunknown_fee_type  = {}\ncurrency_symbol   = {}\nlog_level         = {}\n",
        config.platform_fee_rate.value(),
        config.platform_fee_rate,
        config.unknown_fee_type,
        config.currency_symbol,
        config.log_level
    )
}
