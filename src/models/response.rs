// src/models/response.rs
use roxmltree::Document;

use crate::errors::ParseError;
use crate::xml::{child_element, first_element, text_or_nil};

/// Result code and message from the response envelope.
///
/// The API wraps every payload in a `<message>` block carrying a numeric
/// `<code>` and a human-readable `<text>`. Code zero means success;
/// anything else, or a missing envelope, means the request failed.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ResponseStatus {
    code: Option<i64>,
    message: Option<String>,
}

impl ResponseStatus {
    pub(crate) fn from_document(doc: &Document<'_>) -> Self {
        let envelope = first_element(doc, "message");
        Self {
            code: envelope
                .and_then(|node| child_element(node, "code"))
                .and_then(|node| text_or_nil(Some(node)))
                .and_then(|code| code.parse().ok()),
            message: envelope
                .and_then(|node| child_element(node, "text"))
                .and_then(|node| text_or_nil(Some(node))),
        }
    }

    pub fn code(&self) -> Option<i64> {
        self.code
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

/// A model built from one API response.
///
/// `parse` drives the shared lifecycle: parse the XML, read the status
/// envelope, and only on success hand the document to the model's own
/// `extract_payload`. A failed response still produces a model, with its
/// status populated and every payload field left unset.
pub trait ResponseModel: Sized {
    /// Builds the model shell around an already-read status.
    fn from_status(status: ResponseStatus) -> Self;

    fn status(&self) -> &ResponseStatus;

    /// Pulls the model's fields out of a successful response document.
    fn extract_payload(&mut self, doc: &Document<'_>);

    fn is_success(&self) -> bool {
        self.status().is_success()
    }

    fn parse(raw: &str) -> Result<Self, ParseError> {
        let doc =
            Document::parse(raw).map_err(|e| ParseError::MalformedResponse(e.to_string()))?;
        let status = ResponseStatus::from_document(&doc);
        let mut model = Self::from_status(status);
        if model.is_success() {
            model.extract_payload(&doc);
        }
        Ok(model)
    }
}
