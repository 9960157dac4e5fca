use thiserror::Error;

/// User-facing message shown by the host whenever a color field is unparsable.
pub const INVALID_COLOR_MESSAGE: &str = "Please enter valid Hex color codes (e.g., #FFFFFF).";

/// Title of the host's error notification.
pub const INVALID_COLOR_TITLE: &str = "Input Error";

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid color format: {0:?} (expected 6 hex digits, optionally prefixed with '#')")]
    InvalidColorFormat(String),

    #[error("invalid weight: {0} (expected a finite number of grams >= 0)")]
    InvalidWeight(f64),

    #[error("food not found in inventory: {0}")]
    UnknownFood(String),

    #[error("invalid option: {0}")]
    InvalidOption(String),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for napi::Error {
    fn from(err: Error) -> Self {
        match err {
            // The host only ever shows the fixed message for bad colors.
            Error::InvalidColorFormat(_) => {
                napi::Error::new(napi::Status::InvalidArg, INVALID_COLOR_MESSAGE.to_string())
            }
            Error::InvalidWeight(_) | Error::UnknownFood(_) | Error::InvalidOption(_) => {
                napi::Error::new(napi::Status::InvalidArg, err.to_string())
            }
            Error::Serialize(_) => napi::Error::new(napi::Status::GenericFailure, err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_color_maps_to_fixed_message() {
        let err: napi::Error = Error::InvalidColorFormat("bad".to_string()).into();
        assert_eq!(err.status, napi::Status::InvalidArg);
        assert_eq!(err.reason, INVALID_COLOR_MESSAGE);
    }

    #[test]
    fn unknown_food_keeps_label() {
        let err: napi::Error = Error::UnknownFood("Unknown".to_string()).into();
        assert!(err.reason.contains("Unknown"));
    }

    #[test]
    fn display_includes_offending_input() {
        let msg = Error::InvalidColorFormat("#12345".to_string()).to_string();
        assert!(msg.contains("#12345"));
    }
}
