//! Registration table listing.

use tabled::Tabled;

use skyprov_core::kafkaconnect;
use skyprov_core::registry::{RegistrationEntry, entries};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Service")]
    service: &'static str,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Type")]
    type_name: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Tags")]
    tags: String,
}

fn entry_row(e: &RegistrationEntry) -> EntryRow {
    EntryRow {
        service: e.service,
        kind: e.kind.to_string(),
        type_name: output::or_dash(e.type_name),
        name: output::or_dash(e.name),
        tags: output::or_dash(e.tag_identifier),
    }
}

pub fn handle(global: &GlobalOpts, format: OutputFormat) -> Result<(), CliError> {
    let table = entries(&kafkaconnect::service_package());
    tracing::debug!(count = table.len(), "collected registration entries");

    let out = output::render_list(format, &table, entry_row, |e| {
        output::or_dash(e.type_name)
    })?;
    output::print_output(&out, global.quiet);
    Ok(())
}
