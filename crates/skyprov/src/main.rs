mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use skyprov_core::ServicePackage;
use skyprov_core::kafkaconnect;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    if let Command::Completions(args) = cli.command {
        use clap::CommandFactory;
        use clap_complete::generate;

        let mut cmd = Cli::command();
        generate(args.shell, &mut cmd, "skyprov", &mut std::io::stdout());
        return Ok(());
    }

    let cfg = skyprov_config::load_config()?;
    let format = config::resolve_output(&cli.global, &cfg)?;

    match cli.command {
        // Offline commands: no profile or client needed
        Command::Services => commands::services::handle(&cli.global, format),
        Command::Policy(args) => commands::policy::handle(args, &cli.global, format),

        cmd => {
            let client_config = config::resolve_client_config(&cli.global, &cfg)?;
            let client = kafkaconnect::service_package().new_client(&client_config)?;

            tracing::debug!(command = ?cmd, endpoint = %client.base_url(), "dispatching command");
            commands::dispatch(cmd, &client, &cli.global, format).await
        }
    }
}
