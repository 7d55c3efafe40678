//! Utterance Context
//!
//! 一条捕获到的用户语音，以纯文本表示

mod errors;
mod value_objects;

pub use errors::UtteranceError;
pub use value_objects::{Utterance, NOTHING_CAPTURED, NOT_YET_CAPTURED};
