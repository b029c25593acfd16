use crate::utils::error::{GeneratorError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Longest label Kubernetes accepts for names and label values.
pub const MAX_LABEL_LENGTH: usize = 63;

static DNS_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("DNS label pattern"));

static LABEL_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9]([-A-Za-z0-9_.]*[A-Za-z0-9])?)?$").expect("label value pattern")
});

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Lowercase alphanumerics separated by single hyphens, no leading or
/// trailing hyphen.
pub fn is_dns_label(value: &str) -> bool {
    value.len() <= MAX_LABEL_LENGTH && DNS_LABEL.is_match(value)
}

pub fn validate_label_value(field_name: &str, value: &str) -> Result<()> {
    if value.len() > MAX_LABEL_LENGTH {
        return Err(GeneratorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("must be at most {} characters", MAX_LABEL_LENGTH),
        });
    }

    if !LABEL_VALUE.is_match(value) {
        return Err(GeneratorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "must consist of alphanumerics, '-', '_' or '.', and start and end with an alphanumeric"
                .to_string(),
        });
    }

    Ok(())
}
