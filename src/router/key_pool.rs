//! API Key Pool Management
//!
//! Holds the keys of a managed endpoint and rotates among them. Keys that hit
//! their daily quota are dropped, except for the last one.

use parking_lot::Mutex;
use rand::seq::SliceRandom;

/// Outcome of removing a rate-limited key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// The key was removed from the pool
    Removed,

    /// The key is the only one left and stays in the pool
    KeptLast,

    /// The key was not in the pool (already removed by another caller)
    NotFound,
}

/// Pool of API keys with random selection
#[derive(Debug)]
pub struct KeyPool {
    /// Keys currently in rotation
    keys: Mutex<Vec<String>>,
}

impl KeyPool {
    /// Create a new key pool
    pub fn new(keys: Vec<String>) -> Self {
        Self {
            keys: Mutex::new(keys),
        }
    }

    /// Check if the pool is empty
    pub fn is_empty(&self) -> bool {
        self.keys.lock().is_empty()
    }

    /// Get the number of keys in the pool
    pub fn len(&self) -> usize {
        self.keys.lock().len()
    }

    /// Snapshot of the keys currently in rotation
    pub fn keys(&self) -> Vec<String> {
        self.keys.lock().clone()
    }

    /// Pick a key uniformly at random
    pub fn choose(&self) -> Option<String> {
        let keys = self.keys.lock();
        keys.choose(&mut rand::thread_rng()).cloned()
    }

    /// Remove `key` unless it is the last one left
    pub fn remove_unless_last(&self, key: &str) -> Removal {
        let mut keys = self.keys.lock();
        let Some(idx) = keys.iter().position(|k| k == key) else {
            return Removal::NotFound;
        };

        if keys.len() <= 1 {
            return Removal::KeptLast;
        }

        keys.remove(idx);
        Removal::Removed
    }
}
