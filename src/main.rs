use clap::Parser;
use retreat_economics::cli::{execute_command, log_filter, Cli};
use retreat_economics::config::load_config;
use retreat_economics::error::RetreatError;
use tracing::{debug, error, trace};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.clone()).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            std::process::exit(e.exit_code());
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose, &config.log_level))
        .with_writer(std::io::stderr)
        .with_target(cli.verbose >= 2) // Show target module for -vv and above
        .with_thread_ids(cli.verbose >= 3) // Show thread IDs for -vvv
        .with_line_number(cli.verbose >= 3) // Show line numbers for -vvv
        .init();

    debug!("retreat-econ started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    if let Err(e) = execute_command(cli.command, &config).await {
        error!("Fatal error: {:#}", e);
        let exit_code = match e.downcast_ref::<RetreatError>() {
            Some(retreat_error) => {
                eprintln!("Error: {}", retreat_error.user_message());
                retreat_error.exit_code()
            }
            None => {
                eprintln!("Error: {e}");
                1
            }
        };
        std::process::exit(exit_code);
    }
}
