//! Resolved endpoint of the active profile.

use serde::Serialize;

use skyprov_api::KafkaConnectClient;
use skyprov_core::ServicePackage;
use skyprov_core::kafkaconnect;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

#[derive(Debug, Serialize)]
struct EndpointInfo<'a> {
    service: &'static str,
    region: &'a str,
    endpoint: &'a str,
}

pub fn handle(
    client: &KafkaConnectClient,
    global: &GlobalOpts,
    format: OutputFormat,
) -> Result<(), CliError> {
    let info = EndpointInfo {
        service: kafkaconnect::service_package().service_package_name(),
        region: client.region(),
        endpoint: client.base_url().as_str(),
    };

    let out = output::render_single(
        format,
        &info,
        |i| {
            output::detail_lines(&[
                ("Service", i.service.to_owned()),
                ("Region", i.region.to_owned()),
                ("Endpoint", i.endpoint.to_owned()),
            ])
        },
        |i| i.endpoint.to_owned(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
