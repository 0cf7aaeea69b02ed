//! Kafka Connect read commands.

use std::collections::BTreeMap;

use tabled::Tabled;

use skyprov_api::KafkaConnectClient;
use skyprov_api::kafkaconnect::{
    ConnectorSummary, CustomPluginSummary, ListOptions, Page, WorkerConfigurationSummary,
};

use crate::cli::{GlobalOpts, KafkaConnectArgs, KafkaConnectCommand, ListFilter, OutputFormat};
use crate::error::CliError;
use crate::output;

// ── Table rows ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ConnectorRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Kafka Connect")]
    version: String,
    #[tabled(rename = "ARN")]
    arn: String,
}

fn connector_row(c: &ConnectorSummary) -> ConnectorRow {
    ConnectorRow {
        name: c.connector_name.clone(),
        state: output::or_dash(c.connector_state.as_deref()),
        version: output::or_dash(c.kafka_connect_version.as_deref()),
        arn: c.connector_arn.clone(),
    }
}

#[derive(Tabled)]
struct CustomPluginRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Revision")]
    revision: String,
    #[tabled(rename = "ARN")]
    arn: String,
}

fn custom_plugin_row(p: &CustomPluginSummary) -> CustomPluginRow {
    CustomPluginRow {
        name: p.name.clone(),
        state: output::or_dash(p.custom_plugin_state.as_deref()),
        revision: p
            .latest_revision
            .as_ref()
            .map_or_else(|| "-".into(), |r| r.revision.to_string()),
        arn: p.custom_plugin_arn.clone(),
    }
}

#[derive(Tabled)]
struct WorkerConfigurationRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Revision")]
    revision: String,
    #[tabled(rename = "ARN")]
    arn: String,
}

fn worker_configuration_row(w: &WorkerConfigurationSummary) -> WorkerConfigurationRow {
    WorkerConfigurationRow {
        name: w.name.clone(),
        revision: w
            .latest_revision
            .as_ref()
            .map_or_else(|| "-".into(), |r| r.revision.to_string()),
        arn: w.worker_configuration_arn.clone(),
    }
}

// ── Handler ──────────────────────────────────────────────────────────

pub async fn handle(
    client: &KafkaConnectClient,
    args: KafkaConnectArgs,
    global: &GlobalOpts,
    format: OutputFormat,
) -> Result<(), CliError> {
    let out = match args.command {
        KafkaConnectCommand::Connectors(filter) => {
            let page = client.list_connectors(&options(filter)).await?;
            note_truncation(&page);
            output::render_list(format, &page.items, connector_row, |c| {
                c.connector_arn.clone()
            })?
        }

        KafkaConnectCommand::CustomPlugins(filter) => {
            let page = client.list_custom_plugins(&options(filter)).await?;
            note_truncation(&page);
            output::render_list(format, &page.items, custom_plugin_row, |p| {
                p.custom_plugin_arn.clone()
            })?
        }

        KafkaConnectCommand::WorkerConfigurations(filter) => {
            let page = client.list_worker_configurations(&options(filter)).await?;
            note_truncation(&page);
            output::render_list(format, &page.items, worker_configuration_row, |w| {
                w.worker_configuration_arn.clone()
            })?
        }

        KafkaConnectCommand::Tags { arn } => {
            let tags = client
                .list_tags_for_resource(&arn)
                .await
                .map_err(|err| not_found_as(err, &arn))?;
            output::render_single(format, &tags, tag_lines, tag_lines)?
        }
    };

    output::print_output(&out, global.quiet);
    Ok(())
}

fn options(filter: ListFilter) -> ListOptions {
    ListOptions {
        name_prefix: filter.prefix,
        ..ListOptions::default()
    }
}

fn note_truncation<T>(page: &Page<T>) {
    if page.next_token.is_some() {
        tracing::warn!(
            shown = page.items.len(),
            "more results are available; narrow the listing with --prefix"
        );
    }
}

fn tag_lines(tags: &BTreeMap<String, String>) -> String {
    tags.iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn not_found_as(err: skyprov_api::Error, arn: &str) -> CliError {
    if err.is_not_found() {
        let list_command = if arn.contains(":custom-plugin/") {
            "custom-plugins"
        } else if arn.contains(":worker-configuration/") {
            "worker-configurations"
        } else {
            "connectors"
        };
        CliError::NotFound {
            identifier: arn.to_owned(),
            list_command: list_command.into(),
        }
    } else {
        err.into()
    }
}
