//! Per-view error reporting.
//!
//! A view owns one error list. It clears the list before retrying an
//! operation and appends to it when an operation fails; nothing else reads
//! or writes that list.

use crate::response::{ApiError, ApiResponse};

/// Shown when a failure carries no usable backend message.
pub const FALLBACK_ERROR: &str = "Internal error!";

pub trait ErrorReporter {
    /// Drop every collected message.
    fn clear(&mut self);

    /// Append `message` after the existing ones. Duplicates are kept.
    fn add(&mut self, message: impl Into<String>);

    /// Append the backend message at `response.data.message`, or
    /// [`FALLBACK_ERROR`] when the response is missing or malformed.
    fn add_from_response(&mut self, response: Option<&ApiResponse>) {
        match response.and_then(ApiResponse::message) {
            Some(message) => self.add(message),
            None => self.add(FALLBACK_ERROR),
        }
    }

    /// Report a failed request. Client-side validation errors are shown as
    /// written; everything else goes through [`ErrorReporter::add_from_response`].
    fn add_from_error(&mut self, error: &ApiError) {
        match error {
            ApiError::Command(command) => self.add(command.to_string()),
            other => self.add_from_response(other.response()),
        }
    }

    /// Hand back the value of a successful operation, or report the failure
    /// and return `None`. Follow-up work such as a reload belongs on `Some`,
    /// since a reload starts by clearing the list.
    fn report<T>(&mut self, outcome: Result<T, ApiError>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(err) => {
                self.add_from_error(&err);
                None
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorList {
    messages: Vec<String>,
}

impl ErrorList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl ErrorReporter for ErrorList {
    fn clear(&mut self) {
        self.messages.clear();
    }

    fn add(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }
}
