//! Error adapter for converting TracklaneError to miette diagnostics.
//!
//! This module provides the bridge between the library's error type and
//! miette's report formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use tracklane::TracklaneError;

/// Adapter that renders a [`TracklaneError`] through miette.
///
/// Each variant carries a stable diagnostic code, and input problems carry a
/// short hint on how to fix the file.
pub struct ErrorAdapter<'a>(pub &'a TracklaneError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            TracklaneError::Io(_) => "tracklane::io",
            TracklaneError::DuplicateId(_) => "tracklane::duplicate_id",
            TracklaneError::InvalidTolerance(_) => "tracklane::invalid_tolerance",
            TracklaneError::Config(_) => "tracklane::config",
            TracklaneError::Input(_) => "tracklane::input",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            TracklaneError::DuplicateId(_) => "give every interval a unique `id`",
            TracklaneError::InvalidTolerance(_) => "pass a tolerance of 0 or more",
            TracklaneError::Input(_) => {
                "expected `[[intervals]]` tables with `id`, `start` and `end` keys"
            }
            TracklaneError::Io(_) | TracklaneError::Config(_) => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
