use url::Url;

use crate::error::{AppError, AppResult, HttpError, ValidationError};

/// Parses the target, assuming `http://` when no scheme is given
/// (`localhost:8080/time` becomes `http://localhost:8080/time`).
///
/// # Errors
///
/// Returns an error when the value is empty, does not parse, or is not http(s).
pub fn normalize_target_url(raw: &str) -> AppResult<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(ValidationError::EmptyUrl));
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_owned()
    } else {
        format!("http://{}", trimmed)
    };

    let url = Url::parse(&candidate).map_err(|err| {
        AppError::http(HttpError::InvalidUrl {
            url: trimmed.to_owned(),
            source: err,
        })
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(AppError::http(HttpError::UnsupportedScheme {
            url: trimmed.to_owned(),
            scheme: scheme.to_owned(),
        })),
    }
}
