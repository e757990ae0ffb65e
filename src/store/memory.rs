//! In-memory score store, for dry runs and tests

use super::{ScoreRecord, ScoreStore, StoreError};
use rustc_hash::FxHashMap;

/// Score store that forgets everything when dropped
#[derive(Debug, Default, Clone)]
pub struct MemoryScoreStore {
    records: FxHashMap<String, ScoreRecord>,
}

impl MemoryScoreStore {
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn get(&self, name: &str) -> Result<Option<ScoreRecord>, StoreError> {
        Ok(self.records.get(name).cloned())
    }

    fn put(&mut self, record: &ScoreRecord) -> Result<(), StoreError> {
        self.records.insert(record.name.clone(), record.clone());
        Ok(())
    }

    fn top(&self, limit: usize) -> Result<Vec<ScoreRecord>, StoreError> {
        let mut records: Vec<ScoreRecord> = self.records.values().cloned().collect();
        records.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
        records.truncate(limit);
        Ok(records)
    }
}
