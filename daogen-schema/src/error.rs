use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for configuration loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Keeps the configuration text and its filename together so every error
/// built from it can point back into the source.
#[derive(Debug, Clone)]
pub(crate) struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create an invalid identifier error, labelled at the first occurrence
    /// of the offending value when it can be found in the source.
    pub fn invalid_identifier_error(
        &self,
        value: &str,
        key: impl Into<String>,
        reason: impl Into<String>,
    ) -> Box<Error> {
        let span = (!value.is_empty())
            .then(|| self.src.find(value))
            .flatten()
            .map(|offset| SourceSpan::from((offset, value.len())));
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span,
            value: value.to_string(),
            key: key.into(),
            reason: reason.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(daogen::io_error))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse generator configuration")]
    #[diagnostic(code(daogen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid {key} '{value}'")]
    #[diagnostic(
        code(daogen::invalid_identifier),
        help("{reason}. Use only letters, numbers, and underscores, starting with a letter or underscore.")
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        value: String,
        key: String,
        reason: String,
    },
}
