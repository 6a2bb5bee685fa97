//! Export document assembly and parsing.

use chrono::{DateTime, Utc};

use crate::records::RecordStore;

use super::types::{EXPORT_VERSION, ExportDocument, ImportedRecords};

/// Builds and parses export documents.
pub struct ExportService;

impl ExportService {
    /// Assembles the export document from the current records.
    #[must_use]
    pub fn export(store: &RecordStore, export_date: DateTime<Utc>) -> ExportDocument {
        ExportDocument {
            version: EXPORT_VERSION,
            export_date,
            income_streams: store.income_streams().to_vec(),
            expenses: store.expenses().to_vec(),
            investments: store.investments().to_vec(),
            debts: store.debts().to_vec(),
            connected_accounts: store
                .connected_accounts()
                .iter()
                .map(crate::records::ConnectedAccount::redacted)
                .collect(),
        }
    }

    /// Serializes an export document as pretty-printed UTF-8 JSON.
    ///
    /// # Errors
    ///
    /// Returns the serialization failure.
    pub fn to_json(document: &ExportDocument) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(document)
    }

    /// Recovers the four record collections from an exported document.
    ///
    /// # Errors
    ///
    /// Returns the parse failure for a malformed document.
    pub fn import(json: &str) -> Result<ImportedRecords, serde_json::Error> {
        let document: ExportDocument = serde_json::from_str(json)?;
        Ok(ImportedRecords {
            income_streams: document.income_streams,
            expenses: document.expenses,
            investments: document.investments,
            debts: document.debts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{CREDENTIAL_PLACEHOLDER, ConnectAccountInput, LinkedSubAccount, seed};

    fn store_with_connection() -> RecordStore {
        let mut store = seed::seeded_store();
        store.connect_account(ConnectAccountInput {
            institution_name: "First Bank".to_string(),
            institution_id: "ins_1".to_string(),
            accounts: vec![LinkedSubAccount {
                account_id: "acc-1".to_string(),
                name: "Checking".to_string(),
                subtype: "checking".to_string(),
            }],
            link_credential: "public-sandbox-token".to_string(),
            connected_at: Utc::now(),
        });
        store
    }

    #[test]
    fn test_export_redacts_credentials() {
        let store = store_with_connection();
        let document = ExportService::export(&store, Utc::now());

        assert_eq!(document.connected_accounts.len(), 1);
        assert_eq!(
            document.connected_accounts[0].link_credential,
            CREDENTIAL_PLACEHOLDER
        );
        // The store itself keeps the real credential.
        assert_eq!(
            store.connected_accounts()[0].link_credential,
            "public-sandbox-token"
        );
    }

    #[test]
    fn test_export_import_round_trip_is_lossless_for_records() {
        let store = store_with_connection();
        let document = ExportService::export(&store, Utc::now());
        let json = ExportService::to_json(&document).unwrap();

        let imported = ExportService::import(&json).unwrap();

        assert_eq!(imported.income_streams, store.income_streams());
        assert_eq!(imported.expenses, store.expenses());
        assert_eq!(imported.investments, store.investments());
        assert_eq!(imported.debts, store.debts());
    }

    #[test]
    fn test_export_json_carries_version_and_date() {
        let store = RecordStore::new();
        let document = ExportService::export(&store, Utc::now());
        let json = ExportService::to_json(&document).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["version"], 1);
        assert!(value["export_date"].is_string());
    }

    #[test]
    fn test_import_rejects_malformed_json() {
        assert!(ExportService::import("{ not json").is_err());
    }
}
