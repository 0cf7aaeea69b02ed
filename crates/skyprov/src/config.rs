//! Profile resolution: config file + global flag overrides, translated into
//! the client configuration mapping a service package consumes.

use clap::ValueEnum;

use skyprov_api::ClientConfig;
use skyprov_config::{Config, ConfigError, Profile};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;

/// Profile selection order: `--profile` flag/env, then `default_profile`.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Output format: `--output` flag/env, then `defaults.output`.
pub fn resolve_output(global: &GlobalOpts, config: &Config) -> Result<OutputFormat, CliError> {
    if let Some(format) = global.output {
        return Ok(format);
    }
    OutputFormat::from_str(&config.defaults.output, true).map_err(|reason| {
        CliError::Config(ConfigError::Validation {
            field: "defaults.output".into(),
            reason,
        })
    })
}

/// Build the client configuration for the active profile.
///
/// Flags win over the profile; the profile wins over `[defaults]`.
pub fn resolve_client_config(
    global: &GlobalOpts,
    config: &Config,
) -> Result<ClientConfig, CliError> {
    let name = active_profile_name(global, config);
    let profile = lookup_profile(config, &name)?;
    let profile = apply_overrides(profile, global);

    tracing::debug!(profile = %name, region = ?profile.region, "resolved profile");
    Ok(profile.client_config(&config.defaults)?)
}

fn lookup_profile(config: &Config, name: &str) -> Result<Profile, CliError> {
    match config.profile(name) {
        Err(ConfigError::UnknownProfile { profile }) => {
            let mut names: Vec<&str> = config.profiles.keys().map(String::as_str).collect();
            names.sort_unstable();
            let available = if names.is_empty() {
                "(none)".to_owned()
            } else {
                names.join(", ")
            };
            Err(CliError::ProfileNotFound {
                name: profile,
                available,
                path: skyprov_config::config_path().display().to_string(),
            })
        }
        other => other.map_err(CliError::from),
    }
}

fn apply_overrides(mut profile: Profile, global: &GlobalOpts) -> Profile {
    if let Some(ref region) = global.region {
        profile.region = Some(region.clone());
    }
    if let Some(ref endpoint) = global.endpoint {
        profile.endpoint = Some(endpoint.clone());
    }
    if let Some(timeout) = global.timeout {
        profile.timeout = Some(timeout);
    }
    profile
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::Cli;

    fn global(args: &[&str]) -> GlobalOpts {
        let mut argv = vec!["skyprov"];
        argv.extend_from_slice(args);
        argv.push("services");
        Cli::try_parse_from(argv).unwrap().global
    }

    #[test]
    fn flag_profile_wins_over_default_profile() {
        let config = Config::default();
        assert_eq!(active_profile_name(&global(&["-p", "prod"]), &config), "prod");
        assert_eq!(active_profile_name(&global(&[]), &config), "default");
    }

    #[test]
    fn overrides_replace_profile_values() {
        let profile = Profile {
            region: Some("us-east-1".into()),
            timeout: Some(10),
            ..Profile::default()
        };
        let merged = apply_overrides(
            profile,
            &global(&["--region", "eu-central-1", "--timeout", "3"]),
        );
        assert_eq!(merged.region.as_deref(), Some("eu-central-1"));
        assert_eq!(merged.timeout, Some(3));
        assert_eq!(merged.endpoint, None);
    }

    #[test]
    fn output_falls_back_to_config_default() {
        let mut config = Config::default();
        assert_eq!(
            resolve_output(&global(&[]), &config).unwrap(),
            OutputFormat::Table
        );

        config.defaults.output = "json-compact".into();
        assert_eq!(
            resolve_output(&global(&[]), &config).unwrap(),
            OutputFormat::JsonCompact
        );
        assert_eq!(
            resolve_output(&global(&["-o", "yaml"]), &config).unwrap(),
            OutputFormat::Yaml
        );
    }

    #[test]
    fn unknown_config_output_is_a_config_error() {
        let mut config = Config::default();
        config.defaults.output = "xml".into();

        let err = resolve_output(&global(&[]), &config).unwrap_err();
        assert!(
            matches!(&err, CliError::Config(ConfigError::Validation { field, .. }) if field == "defaults.output"),
            "got: {err:?}"
        );
    }

    #[test]
    fn unknown_profile_lists_available() {
        let mut config = Config::default();
        config.profiles.insert("b".into(), Profile::default());
        config.profiles.insert("a".into(), Profile::default());

        let err = lookup_profile(&config, "c").unwrap_err();
        assert!(
            matches!(&err, CliError::ProfileNotFound { available, .. } if available == "a, b"),
            "got: {err:?}"
        );
    }
}
