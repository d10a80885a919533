mod metadata;

use metadata::HangarErrorMetadata;
pub use metadata::{HangarErrorCode, HangarErrorSuggestion};

pub type HangarResult<T> = std::result::Result<T, HangarError>;

use calm_io::stderr;
use hangar_std::Style;

use std::borrow::BorrowMut;
use std::fmt::{self, Display};
use std::io;

/// A specialized `Error` type for hangar that wraps `anyhow`
/// and provides some extra `Metadata` for end users depending
/// on the specific error they encountered.
#[derive(Debug)]
pub struct HangarError {
    error: anyhow::Error,
    metadata: HangarErrorMetadata,
}

impl HangarError {
    pub fn new<E>(error: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        let mut error = error.into();
        let metadata = HangarErrorMetadata::from(error.borrow_mut());

        Self { error, metadata }
    }

    pub fn set_suggestion(&mut self, suggestion: HangarErrorSuggestion) {
        self.metadata.suggestion = Some(suggestion);
    }

    pub fn with_suggestion(mut self, suggestion: HangarErrorSuggestion) -> Self {
        self.set_suggestion(suggestion);
        self
    }

    pub fn suggestion(&self) -> Option<HangarErrorSuggestion> {
        self.metadata.suggestion.clone()
    }

    pub fn message(&self) -> String {
        self.error.to_string()
    }

    pub fn code(&self) -> Option<HangarErrorCode> {
        self.metadata.code
    }

    pub fn print(&self) -> io::Result<()> {
        stderr!("{}", self)?;
        Ok(())
    }
}

impl Display for HangarError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let error_descriptor_message = if let Some(code) = &self.metadata.code {
            format!("error[{}]:", code)
        } else {
            "error:".to_string()
        };
        let error_descriptor = Style::ErrorPrefix.paint(&error_descriptor_message);

        writeln!(formatter, "{} {:#}", error_descriptor, &self.error)?;

        if let Some(suggestion) = &self.metadata.suggestion {
            writeln!(formatter, "        {}", suggestion)?;
        }
        Ok(())
    }
}

impl<E: Into<anyhow::Error>> From<E> for HangarError {
    fn from(error: E) -> Self {
        Self::new(error)
    }
}
