//! Utterance Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UtteranceError {
    #[error("Utterance text cannot be empty")]
    Empty,
}
