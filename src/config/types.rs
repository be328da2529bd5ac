use std::time::Duration;

use serde::Deserialize;

use crate::args::{OutputFormat, parse_duration_arg};
use crate::error::{AppError, AppResult, ConfigError, ValidationError};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub rate: Option<u64>,
    pub burst: Option<usize>,
    pub timeout: Option<DurationValue>,
    pub duration: Option<DurationValue>,
    pub grace: Option<DurationValue>,
    pub wait_ongoing_requests_after_deadline: Option<bool>,
    pub output_format: Option<OutputFormat>,
}

/// A duration written either as whole seconds or as a suffixed string (`400ms`, `2m`).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self, field: &str) -> AppResult<Duration> {
        match self {
            DurationValue::Seconds(0) => Err(AppError::config(ConfigError::InvalidDuration {
                field: field.to_owned(),
                source: ValidationError::DurationZero,
            })),
            DurationValue::Seconds(secs) => Ok(Duration::from_secs(*secs)),
            DurationValue::Text(text) => parse_duration_arg(text).map_err(|err| match err {
                AppError::Validation(source) => AppError::config(ConfigError::InvalidDuration {
                    field: field.to_owned(),
                    source,
                }),
                other => other,
            }),
        }
    }
}
