use crate::decision::DecisionEngine;
use std::sync::{Arc, PoisonError, RwLock};

/// Swappable handle to the current engine.
///
/// Readers take an `Arc` snapshot and keep deciding against it; a configuration change builds a
/// complete new engine and swaps it in. The lock is held only for the pointer copy.
#[derive(Debug)]
pub struct SharedEngine {
    current: RwLock<Arc<DecisionEngine>>,
}

impl SharedEngine {
    pub fn new(engine: DecisionEngine) -> Self {
        Self {
            current: RwLock::new(Arc::new(engine)),
        }
    }

    pub fn snapshot(&self) -> Arc<DecisionEngine> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Install `engine` and return the one it replaced.
    pub fn replace(&self, engine: DecisionEngine) -> Arc<DecisionEngine> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(engine))
    }
}
