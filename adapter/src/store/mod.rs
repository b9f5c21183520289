use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use shared::config::StorageConfig;
use shared::error::{AppError, AppResult};
use tokio::sync::{Mutex, MutexGuard};

use crate::store::model::registration::RegistrationRow;
use crate::store::model::space::{RoomRow, SpaceRow};

pub mod model;

/// The whole persisted state. Loaded and written as one unit; there are no
/// partial reads or writes.
///
/// `meeting_rooms` defaults to empty so documents written before meeting
/// rooms existed keep loading. `admins` is carried through untouched; the
/// session layer that consumes it is outside this service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub coworking_spaces: BTreeMap<String, SpaceRow>,
    #[serde(default)]
    pub meeting_rooms: BTreeMap<String, RoomRow>,
    #[serde(default)]
    pub admins: BTreeMap<String, String>,
    #[serde(default)]
    pub registrations: Vec<RegistrationRow>,
}

/// Whole-document JSON store. All mutating operations go through `begin`,
/// whose guard serializes the load-mutate-store cycle; two concurrent
/// submissions can therefore never both observe the same seat as free.
/// Read-only callers use `load` and work on a private snapshot.
#[derive(Clone)]
pub struct DataStore {
    path: Arc<PathBuf>,
    write_lock: Arc<Mutex<()>>,
}

impl DataStore {
    pub fn new(cfg: &StorageConfig) -> Self {
        Self {
            path: Arc::new(cfg.data_file.clone()),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Creates the data file with an empty document if it does not exist yet.
    pub async fn init(&self) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        match tokio::fs::try_exists(self.path.as_ref()).await {
            Ok(true) => Ok(()),
            Ok(false) => self.save(&Document::default()).await,
            Err(e) => Err(AppError::DataStoreReadError(e)),
        }
    }

    /// Reads and deserializes the full document. A missing file reads as the
    /// empty document.
    pub async fn load(&self) -> AppResult<Document> {
        match tokio::fs::read(self.path.as_ref()).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Document::default()),
            Err(e) => Err(AppError::DataStoreReadError(e)),
        }
    }

    /// Takes the write lock and loads a fresh document for mutation. The
    /// lock is held until the returned transaction is committed or dropped.
    pub async fn begin(&self) -> AppResult<DataStoreTx<'_>> {
        let guard = self.write_lock.lock().await;
        let document = self.load().await?;
        Ok(DataStoreTx {
            store: self,
            document,
            _guard: guard,
        })
    }

    async fn save(&self, document: &Document) -> AppResult<()> {
        let json = serde_json::to_vec_pretty(document)?;
        tokio::fs::write(self.path.as_ref(), json)
            .await
            .map_err(AppError::DataStoreWriteError)
    }
}

/// One mutation of the shared document. Dropping without `commit` discards
/// every change, which is how failed submissions leave no partial state.
pub struct DataStoreTx<'a> {
    store: &'a DataStore,
    document: Document,
    _guard: MutexGuard<'a, ()>,
}

impl DataStoreTx<'_> {
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub async fn commit(self) -> AppResult<()> {
        self.store.save(&self.document).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_at(dir: &tempfile::TempDir) -> DataStore {
        DataStore::new(&StorageConfig {
            data_file: dir.path().join("data.json"),
        })
    }

    #[tokio::test]
    async fn missing_file_loads_as_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_at(&dir);

        let doc = store.load().await.unwrap();
        assert!(doc.coworking_spaces.is_empty());
        assert!(doc.meeting_rooms.is_empty());
        assert!(doc.registrations.is_empty());
    }

    #[tokio::test]
    async fn init_creates_the_file_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_at(&dir);

        store.init().await.unwrap();
        assert!(dir.path().join("data.json").exists());

        // A second init must not wipe existing state.
        let mut tx = store.begin().await.unwrap();
        tx.document_mut()
            .admins
            .insert("admin".into(), "password".into());
        tx.commit().await.unwrap();
        store.init().await.unwrap();

        let doc = store.load().await.unwrap();
        assert_eq!(doc.admins.get("admin").map(String::as_str), Some("password"));
    }

    #[tokio::test]
    async fn commit_round_trips_the_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_at(&dir);

        let mut tx = store.begin().await.unwrap();
        tx.document_mut().coworking_spaces.insert(
            "1".into(),
            SpaceRow {
                name: "Hub".into(),
                location: "Downtown".into(),
                capacity: 20,
                current_occupancy: 3,
                equipment: vec![],
                seat_layout: Some(vec![vec!["1-1".into()]]),
                seats: None,
            },
        );
        tx.commit().await.unwrap();

        let doc = store.load().await.unwrap();
        let row = doc.coworking_spaces.get("1").unwrap();
        assert_eq!(row.name, "Hub");
        assert_eq!(row.current_occupancy, 3);
        assert_eq!(row.seat_layout.as_deref(), Some(&[vec!["1-1".to_string()]][..]));
    }

    #[tokio::test]
    async fn legacy_document_without_meeting_rooms_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(
            &path,
            r#"{
                "coworking_spaces": {
                    "1": {"name": "Old", "location": "Here", "capacity": 5, "current_occupancy": 0, "equipment": []}
                },
                "admins": {"admin": "password"},
                "registrations": []
            }"#,
        )
        .unwrap();

        let store = DataStore::new(&StorageConfig { data_file: path });
        let doc = store.load().await.unwrap();
        assert!(doc.meeting_rooms.is_empty());
        let row = doc.coworking_spaces.get("1").unwrap();
        assert_eq!(row.name, "Old");
        // Pre-seat-map spaces carry neither layout nor seats.
        assert!(row.seat_layout.is_none());
        assert!(row.seats.is_none());
    }

    #[tokio::test]
    async fn legacy_registration_with_naive_timestamp_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(
            &path,
            r#"{
                "coworking_spaces": {},
                "meeting_rooms": {},
                "admins": {},
                "registrations": [{
                    "id": 1,
                    "first_name": "Ada",
                    "last_name": "Lovelace",
                    "email": "ada@example.com",
                    "phone": "555-0100",
                    "company": "Analytical",
                    "space_id": "1",
                    "space_name": "Hub",
                    "membership_type": "hot-desk",
                    "start_date": "2025-10-01",
                    "additional_info": "",
                    "submitted_at": "2025-09-26T12:00:00.123456"
                }]
            }"#,
        )
        .unwrap();

        let store = DataStore::new(&StorageConfig { data_file: path });
        let doc = store.load().await.unwrap();
        let row = &doc.registrations[0];
        assert_eq!(row.first_name, "Ada");
        assert_eq!(
            row.submitted_at.naive_local().to_string(),
            "2025-09-26 12:00:00.123456"
        );
    }

    #[tokio::test]
    async fn dropped_transaction_leaves_the_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_at(&dir);
        store.init().await.unwrap();

        {
            let mut tx = store.begin().await.unwrap();
            tx.document_mut()
                .admins
                .insert("intruder".into(), "secret".into());
            // No commit.
        }

        let doc = store.load().await.unwrap();
        assert!(doc.admins.is_empty());
    }
}
