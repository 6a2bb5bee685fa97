//! Snapshot store backed by Apache OpenDAL.

use chrono::{DateTime, Utc};
use opendal::{ErrorKind, Operator, services};

use super::error::SnapshotError;
use super::migrate::migrate;
use super::types::SnapshotDocument;

/// Object key the snapshot document is written under.
const SNAPSHOT_KEY: &str = "snapshot.json";

/// Why a load fell back to the seed defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotRecovery {
    /// No snapshot document existed.
    Missing,
    /// The document existed but could not be used.
    Corrupt(String),
}

/// Result of loading the snapshot.
#[derive(Debug, Clone)]
pub struct LoadedSnapshot {
    /// The restored (or substituted) document.
    pub document: SnapshotDocument,
    /// Present when the seed defaults were substituted.
    pub recovery: Option<SnapshotRecovery>,
}

/// Persists the record set as a single versioned JSON document.
pub struct SnapshotStore {
    operator: Operator,
}

impl SnapshotStore {
    /// Creates a store rooted at the given directory.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError::Configuration` when the operator cannot be
    /// built.
    pub fn from_root(root: &str) -> Result<Self, SnapshotError> {
        let builder = services::Fs::default().root(root);
        let operator = Operator::new(builder)
            .map_err(|e| SnapshotError::Configuration(e.to_string()))?
            .finish();
        Ok(Self { operator })
    }

    /// Writes the snapshot document.
    ///
    /// Persistence is best effort: callers may log a failure and continue,
    /// since the in-memory store remains authoritative.
    ///
    /// # Errors
    ///
    /// Returns the serialization or storage failure.
    pub async fn save(&self, document: &SnapshotDocument) -> Result<(), SnapshotError> {
        let bytes = serde_json::to_vec_pretty(document)?;
        self.operator.write(SNAPSHOT_KEY, bytes).await?;
        Ok(())
    }

    /// Loads the snapshot document.
    ///
    /// Never fails: a missing or unusable document is replaced by the seed
    /// defaults and the substitution is reported alongside the result.
    pub async fn load(&self, now: DateTime<Utc>) -> LoadedSnapshot {
        let bytes = match self.operator.read(SNAPSHOT_KEY).await {
            Ok(buffer) => buffer.to_vec(),
            Err(error) if error.kind() == ErrorKind::NotFound => {
                return LoadedSnapshot {
                    document: SnapshotDocument::seeded(now),
                    recovery: Some(SnapshotRecovery::Missing),
                };
            }
            Err(error) => {
                return LoadedSnapshot {
                    document: SnapshotDocument::seeded(now),
                    recovery: Some(SnapshotRecovery::Corrupt(error.to_string())),
                };
            }
        };

        let parsed = serde_json::from_slice(&bytes)
            .map_err(SnapshotError::from)
            .and_then(|value| migrate(value, now));

        match parsed {
            Ok(document) => LoadedSnapshot {
                document,
                recovery: None,
            },
            Err(error) => LoadedSnapshot {
                document: SnapshotDocument::seeded(now),
                recovery: Some(SnapshotRecovery::Corrupt(error.to_string())),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_store() -> (SnapshotStore, std::path::PathBuf) {
        let root = std::env::temp_dir().join(format!("hearth-snapshot-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&root).unwrap();
        let store = SnapshotStore::from_root(root.to_str().unwrap()).unwrap();
        (store, root)
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let (store, root) = temp_store();
        let document = SnapshotDocument::seeded(Utc::now());

        store.save(&document).await.unwrap();
        let loaded = store.load(Utc::now()).await;

        assert!(loaded.recovery.is_none());
        assert_eq!(loaded.document.expenses, document.expenses);
        assert_eq!(loaded.document.debts, document.debts);

        std::fs::remove_dir_all(root).ok();
    }

    #[tokio::test]
    async fn test_load_missing_substitutes_seed() {
        let (store, root) = temp_store();

        let loaded = store.load(Utc::now()).await;

        assert_eq!(loaded.recovery, Some(SnapshotRecovery::Missing));
        assert_eq!(loaded.document.expenses.len(), 15);

        std::fs::remove_dir_all(root).ok();
    }

    #[tokio::test]
    async fn test_load_corrupt_substitutes_seed() {
        let (store, root) = temp_store();
        std::fs::write(root.join("snapshot.json"), b"{ not json").unwrap();

        let loaded = store.load(Utc::now()).await;

        assert!(matches!(
            loaded.recovery,
            Some(SnapshotRecovery::Corrupt(_))
        ));
        assert_eq!(loaded.document.income_streams.len(), 2);

        std::fs::remove_dir_all(root).ok();
    }

    #[tokio::test]
    async fn test_load_newer_version_substitutes_seed() {
        let (store, root) = temp_store();
        std::fs::write(root.join("snapshot.json"), br#"{ "version": 99 }"#).unwrap();

        let loaded = store.load(Utc::now()).await;

        assert!(matches!(
            loaded.recovery,
            Some(SnapshotRecovery::Corrupt(_))
        ));

        std::fs::remove_dir_all(root).ok();
    }
}
