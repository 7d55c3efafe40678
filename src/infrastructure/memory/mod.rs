//! Memory Layer - In-Memory State Management
//!
//! 实现 UtteranceStore：进程内唯一的共享可变状态

mod utterance_store;

pub use utterance_store::InMemoryUtteranceStore;
