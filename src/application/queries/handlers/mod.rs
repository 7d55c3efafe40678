//! Query Handlers

mod speech_handlers;

pub use speech_handlers::GetSpeechHandler;
