//! Best-score record persistence
//!
//! A single integer survives across sessions. On the web it lives in
//! LocalStorage under the key the original browser build used; natively an
//! in-memory store keeps the same interface for tests and demos.

/// Storage for the persisted best score
pub trait RecordStore {
    /// Current record, 0 if absent
    fn load_record(&self) -> u32;
    /// Overwrite the record; callers only invoke this on a new record
    fn save_record(&mut self, record: u32);
}

/// Volatile store for native runs and tests
#[derive(Debug, Default)]
pub struct MemoryRecord {
    record: u32,
}

impl MemoryRecord {
    pub fn new(record: u32) -> Self {
        Self { record }
    }
}

impl RecordStore for MemoryRecord {
    fn load_record(&self) -> u32 {
        self.record
    }

    fn save_record(&mut self, record: u32) {
        self.record = record;
    }
}

/// LocalStorage-backed record (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct LocalStorageRecord;

#[cfg(target_arch = "wasm32")]
impl LocalStorageRecord {
    const STORAGE_KEY: &'static str = "fallpyBest";

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl RecordStore for LocalStorageRecord {
    fn load_record(&self) -> u32 {
        if let Some(storage) = Self::storage() {
            if let Ok(Some(raw)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(record) = raw.parse::<u32>() {
                    log::info!("Loaded best score {record}");
                    return record;
                }
            }
        }
        log::info!("No best score found, starting at 0");
        0
    }

    fn save_record(&mut self, record: u32) {
        if let Some(storage) = Self::storage() {
            match storage.set_item(Self::STORAGE_KEY, &record.to_string()) {
                Ok(()) => log::info!("Best score saved ({record})"),
                Err(err) => log::warn!("Failed to save best score: {err:?}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_record_round_trip() {
        let mut store = MemoryRecord::default();
        assert_eq!(store.load_record(), 0);
        store.save_record(17);
        assert_eq!(store.load_record(), 17);
    }
}
