//! HTTP Handlers

mod ping;
mod skill;

pub use ping::*;
pub use skill::*;
