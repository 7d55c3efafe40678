//! Speech Query Handlers

use std::sync::Arc;

use crate::application::ports::UtteranceReader;
use crate::application::queries::{GetSpeech, GetSpeechResponse};

/// GetSpeech Handler
///
/// 每个请求独立处理，不在请求之间保存任何状态
pub struct GetSpeechHandler {
    reader: Arc<dyn UtteranceReader>,
}

impl GetSpeechHandler {
    pub fn new(reader: Arc<dyn UtteranceReader>) -> Self {
        Self { reader }
    }

    pub fn handle(&self, _query: GetSpeech) -> GetSpeechResponse {
        let captured = self.reader.get();
        tracing::info!(captured_speech = %captured, "Returning speech");
        GetSpeechResponse {
            captured_speech: captured.into(),
        }
    }
}
