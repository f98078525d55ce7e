//! Bounded, deduplicated, most-recent-first history of generated designs.
//!
//! The whole collection lives in a single key-value slot and is rewritten
//! after every mutation, so memory and storage never diverge.

use chrono::Utc;
use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::params::DesignParameters;
use crate::store::KeyValueStore;
use crate::utils::ids;

/// Name of the slot holding the serialized collection.
pub const COLLECTION_KEY: &str = "gengraphic_pro_collection";

/// Maximum number of designs kept.
pub const MAX_RECORDS: usize = 10;

pub const DEFAULT_RECORD_NAME: &str = "Pro Design";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub id: String,
    /// Rendered `data:` URL at the size the design was generated for.
    pub url: String,
    /// Raw base64 payload returned by the model.
    pub base64: String,
    pub name: String,
    /// `"WxH"`.
    pub dimensions: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<DesignParameters>,
}

impl HistoryRecord {
    pub fn new(
        url: String,
        base64: String,
        name: &str,
        dimensions: String,
        params: Option<DesignParameters>,
    ) -> Self {
        let name = if name.trim().is_empty() {
            DEFAULT_RECORD_NAME.to_string()
        } else {
            name.to_string()
        };
        Self {
            id: ids::random_id(),
            url,
            base64,
            name,
            dimensions,
            timestamp: Utc::now().timestamp_millis(),
            params,
        }
    }

    /// Short content fingerprint of the rendered image.
    pub fn fingerprint(&self) -> String {
        ids::fingerprint(self.url.as_bytes())
    }
}

pub struct HistoryCache<S: KeyValueStore> {
    store: S,
    records: Vec<HistoryRecord>,
}

impl<S: KeyValueStore> HistoryCache<S> {
    /// Read the persisted collection. Unreadable or corrupt contents yield an empty history.
    pub fn load(store: S) -> Self {
        let records = match store.get(COLLECTION_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<HistoryRecord>>(&raw) {
                Ok(mut records) => {
                    records.truncate(MAX_RECORDS);
                    records
                }
                Err(e) => {
                    error!("Error loading collection, starting empty: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                error!("Error reading collection, starting empty: {}", e);
                Vec::new()
            }
        };
        info!("Loaded {} saved designs", records.len());
        Self { store, records }
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&HistoryRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Prepend `record`, dropping earlier entries with the same URL and anything past the cap.
    pub fn insert(&mut self, record: HistoryRecord) -> Result<()> {
        let updated: Vec<HistoryRecord> = std::iter::once(record.clone())
            .chain(self.records.iter().filter(|r| r.url != record.url).cloned())
            .take(MAX_RECORDS)
            .collect();
        self.commit(updated)
    }

    /// Remove the record with `id`. Returns whether one was removed.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let updated: Vec<HistoryRecord> =
            self.records.iter().filter(|r| r.id != id).cloned().collect();
        if updated.len() == self.records.len() {
            return Ok(false);
        }
        self.commit(updated)?;
        Ok(true)
    }

    // The in-memory list only changes once the store accepted the write.
    fn commit(&mut self, updated: Vec<HistoryRecord>) -> Result<()> {
        let serialized = serde_json::to_string(&updated)?;
        self.store.set(COLLECTION_KEY, &serialized)?;
        self.records = updated;
        Ok(())
    }
}
