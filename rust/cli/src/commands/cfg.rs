//! Configuration command handler.
//!
//! This module implements the `cfg` command, which displays the current
//! configuration settings with their sources (default, environment,
//! or configuration file).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "template": {
//!     "value": "custom",
//!     "source": "default"
//!   },
//!   "precision": {
//!     "value": 2,
//!     "source": "env"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// Loads the current configuration with source tracking and displays it
/// as formatted JSON to the output stream.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } =
        config::load_with_sources().map_err(|e| CliError::Config(e.to_string()))?;
    let display = serde_json::json!({
        "template": {
            "value": config.template,
            "source": sources.template,
        },
        "format": {
            "value": config.format,
            "source": sources.format,
        },
        "precision": {
            "value": config.precision,
            "source": sources.precision,
        },
        "max_groups": {
            "value": config.max_groups,
            "source": sources.max_groups,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            config::CONFIG_ENV,
            config::TEMPLATE_ENV,
            config::FORMAT_ENV,
            config::PRECISION_ENV,
            config::MAX_GROUPS_ENV,
        ] {
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    #[test]
    #[serial]
    fn test_cfg_displays_json_output() {
        clear_env();
        let mut out = Vec::new();

        let result = handle_cfg_command(&mut out);
        assert!(result.is_ok(), "cfg command should succeed");

        let output = String::from_utf8(out).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&output).expect("cfg output should be valid JSON");
        for key in ["template", "format", "precision", "max_groups"] {
            assert_eq!(json[key]["source"], "default", "{key}");
        }
        assert_eq!(json["template"]["value"], "custom");
        assert_eq!(json["max_groups"]["value"], 3);
        assert!(output.contains('\n'), "output should be pretty-printed");
    }

    #[test]
    #[serial]
    fn test_cfg_reports_env_source() {
        clear_env();
        unsafe {
            std::env::set_var(config::TEMPLATE_ENV, "pokemon");
        }
        let mut out = Vec::new();
        let result = handle_cfg_command(&mut out);
        clear_env();

        assert!(result.is_ok());
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["template"]["value"], "pokemon");
        assert_eq!(json["template"]["source"], "env");
    }

    #[test]
    #[serial]
    fn test_cfg_handles_config_error() {
        clear_env();
        unsafe {
            std::env::set_var(config::MAX_GROUPS_ENV, "none");
        }
        let mut out = Vec::new();
        let result = handle_cfg_command(&mut out);
        clear_env();

        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("max_groups")));
        assert!(out.is_empty());
    }
}
