//! In-Memory Utterance Store Implementation

use std::sync::{Arc, PoisonError, RwLock};

use crate::application::ports::{UtteranceReader, UtteranceWriter};
use crate::domain::Utterance;

/// 内存单槽语音存储
///
/// 临界区只做一次 `Arc<str>` 的替换或 clone，不会跨越 `.await`。
/// 锁保证读总是看到最近一次已完成的写；并发写以获得锁的先后为准（后完成者生效）
pub struct InMemoryUtteranceStore {
    current: RwLock<Utterance>,
}

impl InMemoryUtteranceStore {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Utterance::not_yet_captured()),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for InMemoryUtteranceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UtteranceWriter for InMemoryUtteranceStore {
    fn set(&self, value: Utterance) {
        // 写入的是整值替换，持锁 panic 也不会留下半写状态，直接恢复 poisoned 锁
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = value;
    }
}

impl UtteranceReader for InMemoryUtteranceStore {
    fn get(&self) -> Utterance {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NOTHING_CAPTURED, NOT_YET_CAPTURED};

    #[test]
    fn test_starts_with_sentinel() {
        let store = InMemoryUtteranceStore::new();
        assert_eq!(store.get().as_str(), NOT_YET_CAPTURED);
    }

    #[test]
    fn test_last_write_wins() {
        let store = InMemoryUtteranceStore::new();
        for text in ["one", "two", "three"] {
            store.set(Utterance::new(text).unwrap());
        }
        assert_eq!(store.get().as_str(), "three");

        store.set(Utterance::nothing_captured());
        assert_eq!(store.get().as_str(), NOTHING_CAPTURED);
    }

    #[test]
    fn test_concurrent_reads_never_torn() {
        let store = InMemoryUtteranceStore::new().arc();
        let a = "a".repeat(4096);
        let b = "b".repeat(4096);

        let writer = {
            let store = store.clone();
            let (a, b) = (a.clone(), b.clone());
            std::thread::spawn(move || {
                for i in 0..2000 {
                    let text = if i % 2 == 0 { &a } else { &b };
                    store.set(Utterance::new(text.as_str()).unwrap());
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let store = store.clone();
                let (a, b) = (a.clone(), b.clone());
                std::thread::spawn(move || {
                    for _ in 0..2000 {
                        let seen = store.get();
                        let seen = seen.as_str();
                        assert!(seen == NOT_YET_CAPTURED || seen == a || seen == b);
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }
    }
}
