use crate::utils::error::{DefangError, Result};
use regex::Regex;
use std::sync::LazyLock;

pub const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];

static IPV4_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9][0-9]|[0-9])\.){3}(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9][0-9]|[0-9])$")
        .expect("IPv4 pattern is valid")
});

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DefangError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DefangError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_output_format(field_name: &str, format: &str) -> Result<()> {
    if !OUTPUT_FORMATS.contains(&format) {
        return Err(DefangError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format.to_string(),
            reason: format!(
                "Unsupported format. Valid formats: {}",
                OUTPUT_FORMATS.join(", ")
            ),
        });
    }
    Ok(())
}

pub fn validate_has_input(addresses: &[String], files: &[String]) -> Result<()> {
    if addresses.is_empty() && files.is_empty() {
        return Err(DefangError::MissingConfigError {
            field: "addresses or input files".to_string(),
        });
    }
    Ok(())
}

/// 檢查是否為點分十進位 IPv4 位址 (不接受前導零)
pub fn is_ipv4(address: &str) -> bool {
    IPV4_REGEX.is_match(address)
}

pub fn validate_ipv4(source_name: &str, line: usize, address: &str) -> Result<()> {
    if is_ipv4(address) {
        return Ok(());
    }
    Err(DefangError::InvalidAddressError {
        source_name: source_name.to_string(),
        line,
        value: address.to_string(),
        reason: "expected dotted-decimal IPv4".to_string(),
    })
}
