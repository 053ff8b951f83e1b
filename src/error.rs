// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Decode(String),
    Svg(String),
    Config(String),
}

impl Error {
    /// Returns the i18n message key used when this error is surfaced in the
    /// information dialog.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-load-image-io",
            Error::Decode(_) => "error-load-image-decode",
            Error::Svg(_) => "error-load-image-svg",
            Error::Config(_) => "error-config",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Svg(e) => write!(f, "SVG Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn i18n_keys_cover_load_failures() {
        assert_eq!(Error::Io(String::new()).i18n_key(), "error-load-image-io");
        assert_eq!(
            Error::Decode(String::new()).i18n_key(),
            "error-load-image-decode"
        );
        assert_eq!(Error::Svg(String::new()).i18n_key(), "error-load-image-svg");
    }
}
