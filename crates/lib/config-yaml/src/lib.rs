//! YAML configuration parsing.

use config_core::Config;

/// The YAML parser error type.
pub type ParseError = serde_yaml_bw::Error;

/// Parse configuration from a YAML string.
pub fn parse_str(contents: &str) -> Result<Config, ParseError> {
    serde_yaml_bw::from_str(contents)
}
