use crate::{HighScoreStore, StoreError};

/// In-memory store. Lost when the process exits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    value: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: u32) -> Self {
        Self { value }
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}

impl HighScoreStore for MemoryStore {
    fn read_high_score(&self) -> Result<u32, StoreError> {
        Ok(self.value)
    }

    fn write_high_score(&mut self, value: u32) -> Result<(), StoreError> {
        self.value = value;
        Ok(())
    }
}
