//! Mock parse client for testing.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::media::{ParseClient, ParseError, ParsedRelease};

/// Mock implementation of the `ParseClient` trait.
///
/// Titles without a configured response parse as unrecognized media.
#[derive(Debug, Default)]
pub struct MockParseClient {
    responses: Mutex<HashMap<String, ParsedRelease>>,
    titles: Mutex<Vec<String>>,
    next_error: Mutex<Option<String>>,
}

impl MockParseClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the parse returned for `title`.
    pub fn set_response(&self, title: &str, parsed: ParsedRelease) {
        self.responses
            .lock()
            .unwrap()
            .insert(title.to_string(), parsed);
    }

    /// Make the next parse fail with an API error carrying `message`.
    pub fn fail_next(&self, message: &str) {
        *self.next_error.lock().unwrap() = Some(message.to_string());
    }

    /// Titles parsed so far, in call order.
    pub fn recorded_titles(&self) -> Vec<String> {
        self.titles.lock().unwrap().clone()
    }

    pub fn parse_count(&self) -> usize {
        self.titles.lock().unwrap().len()
    }
}

#[async_trait]
impl ParseClient for MockParseClient {
    fn name(&self) -> &str {
        "mock"
    }

    async fn parse(&self, title: &str) -> Result<ParsedRelease, ParseError> {
        self.titles.lock().unwrap().push(title.to_string());

        if let Some(message) = self.next_error.lock().unwrap().take() {
            return Err(ParseError::ApiError {
                status: 503,
                message,
            });
        }

        Ok(self
            .responses
            .lock()
            .unwrap()
            .get(title)
            .cloned()
            .unwrap_or_else(|| ParsedRelease::unrecognized(title)))
    }
}
