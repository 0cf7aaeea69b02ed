//! Command dispatch: bridges CLI args -> service client -> output formatting.

pub mod endpoint;
pub mod kafkaconnect;
pub mod policy;
pub mod services;

use skyprov_api::KafkaConnectClient;

use crate::cli::{Command, GlobalOpts, OutputFormat};
use crate::error::CliError;

/// Dispatch a client-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    client: &KafkaConnectClient,
    global: &GlobalOpts,
    format: OutputFormat,
) -> Result<(), CliError> {
    match cmd {
        Command::Endpoint => endpoint::handle(client, global, format),
        Command::Kafkaconnect(args) => kafkaconnect::handle(client, args, global, format).await,
        Command::Services | Command::Policy(_) | Command::Completions(_) => {
            unreachable!("handled before a client is built")
        }
    }
}
