use async_trait::async_trait;
use derive_new::new;
use kernel::model::id::SpaceId;
use kernel::model::seat::{self, SeatMap};
use kernel::model::space::{
    event::{AddEquipment, CreateSpace, DeleteSpace, UpdateOccupancy, UpdateSpace},
    CoworkingSpace,
};
use kernel::repository::space::SpaceRepository;
use shared::error::{AppError, AppResult};

use crate::store::model::space::{EquipmentRow, SpaceRow};
use crate::store::DataStore;

#[derive(new)]
pub struct SpaceRepositoryImpl {
    store: DataStore,
}

#[async_trait]
impl SpaceRepository for SpaceRepositoryImpl {
    async fn create(&self, event: CreateSpace) -> AppResult<SpaceId> {
        if event.capacity <= 0 {
            return Err(AppError::UnprocessableEntity(
                "Capacity must be a positive number".into(),
            ));
        }

        let mut tx = self.store.begin().await?;
        let doc = tx.document_mut();

        // Kind-scoped counter: the next ID is the current number of spaces
        // plus one, stringified.
        let space_id = SpaceId::from((doc.coworking_spaces.len() + 1).to_string());

        // Every new space gets a seat map; absent dimensions fall back to
        // the default grid instead of failing. The seat count is not tied
        // to capacity.
        let (rows, cols) = match event.layout {
            Some(layout) => (layout.rows, layout.cols),
            None => (seat::DEFAULT_ROWS, seat::DEFAULT_COLS),
        };
        let space = CoworkingSpace {
            space_id: space_id.clone(),
            name: event.name,
            location: event.location,
            capacity: event.capacity,
            current_occupancy: 0,
            equipment: vec![],
            seat_map: Some(SeatMap::generate(rows, cols)),
        };
        doc.coworking_spaces
            .insert(space_id.to_string(), SpaceRow::from(space));

        tx.commit().await?;
        Ok(space_id)
    }

    async fn find_all(&self) -> AppResult<Vec<CoworkingSpace>> {
        let doc = self.store.load().await?;
        let mut entries: Vec<_> = doc.coworking_spaces.into_iter().collect();
        // Map keys are stringified integers; order listings numerically.
        entries.sort_by_key(|(id, _)| id.parse::<u64>().unwrap_or(u64::MAX));
        Ok(entries
            .into_iter()
            .map(|(id, row)| row.into_space(SpaceId::from(id)))
            .collect())
    }

    async fn find_by_id(&self, space_id: &SpaceId) -> AppResult<Option<CoworkingSpace>> {
        let doc = self.store.load().await?;
        Ok(doc
            .coworking_spaces
            .get(space_id.as_str())
            .cloned()
            .map(|row| row.into_space(space_id.clone())))
    }

    async fn update(&self, event: UpdateSpace) -> AppResult<()> {
        let mut tx = self.store.begin().await?;
        let row = tx
            .document_mut()
            .coworking_spaces
            .get_mut(event.space_id.as_str())
            .ok_or_else(|| {
                AppError::EntityNotFound(format!("Space ({}) not found", event.space_id))
            })?;

        if let Some(name) = event.name {
            row.name = name;
        }
        if let Some(location) = event.location {
            row.location = location;
        }
        if let Some(capacity) = event.capacity {
            // The seat layout is deliberately left as-is on capacity edits.
            row.capacity = capacity;
        }

        tx.commit().await
    }

    async fn delete(&self, event: DeleteSpace) -> AppResult<()> {
        let mut tx = self.store.begin().await?;
        // Ledger entries pointing at this space stay behind as history.
        tx.document_mut()
            .coworking_spaces
            .remove(event.space_id.as_str())
            .ok_or_else(|| {
                AppError::EntityNotFound(format!("Space ({}) not found", event.space_id))
            })?;
        tx.commit().await
    }

    async fn update_occupancy(&self, event: UpdateOccupancy) -> AppResult<()> {
        let mut tx = self.store.begin().await?;
        let row = tx
            .document_mut()
            .coworking_spaces
            .get_mut(event.space_id.as_str())
            .ok_or_else(|| {
                AppError::EntityNotFound(format!("Space ({}) not found", event.space_id))
            })?;

        if event.occupancy < 0 || event.occupancy > row.capacity {
            return Err(AppError::CapacityExceeded(format!(
                "Occupancy {} is outside [0, {}]",
                event.occupancy, row.capacity
            )));
        }
        row.current_occupancy = event.occupancy;

        tx.commit().await
    }

    async fn add_equipment(&self, event: AddEquipment) -> AppResult<()> {
        let mut tx = self.store.begin().await?;
        let row = tx
            .document_mut()
            .coworking_spaces
            .get_mut(event.space_id.as_str())
            .ok_or_else(|| {
                AppError::EntityNotFound(format!("Space ({}) not found", event.space_id))
            })?;
        row.equipment.push(EquipmentRow {
            name: event.name,
            quantity: event.quantity,
        });
        tx.commit().await
    }
}

#[cfg(test)]
mod tests {
    use kernel::model::id::SeatId;
    use kernel::model::space::event::LayoutRequest;
    use shared::config::StorageConfig;

    use super::*;

    fn repo_at(dir: &tempfile::TempDir) -> SpaceRepositoryImpl {
        SpaceRepositoryImpl::new(DataStore::new(&StorageConfig {
            data_file: dir.path().join("data.json"),
        }))
    }

    fn create_event(name: &str, capacity: i32, layout: Option<LayoutRequest>) -> CreateSpace {
        CreateSpace::new(name.into(), "Test Location".into(), capacity, layout)
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_at(&dir);

        let first = repo.create(create_event("One", 10, None)).await.unwrap();
        let second = repo.create(create_event("Two", 10, None)).await.unwrap();
        assert_eq!(first, SpaceId::from("1"));
        assert_eq!(second, SpaceId::from("2"));
    }

    #[tokio::test]
    async fn create_rejects_non_positive_capacity() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_at(&dir);

        for capacity in [0, -1] {
            let err = repo
                .create(create_event("Bad", capacity, None))
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::UnprocessableEntity(_)));
        }
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_without_layout_uses_default_grid() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_at(&dir);

        let id = repo.create(create_event("Default", 10, None)).await.unwrap();
        let space = repo.find_by_id(&id).await.unwrap().unwrap();
        let seat_map = space.seat_map.unwrap();
        assert_eq!(seat_map.seats.len(), 25);
        assert_eq!(seat_map.layout.len(), 5);
    }

    #[tokio::test]
    async fn create_with_layout_uses_requested_grid() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_at(&dir);

        let id = repo
            .create(create_event("Gridded", 4, Some(LayoutRequest::new(2, 2))))
            .await
            .unwrap();
        let space = repo.find_by_id(&id).await.unwrap().unwrap();
        let seat_map = space.seat_map.unwrap();
        let ids: Vec<_> = seat_map
            .layout
            .iter()
            .flatten()
            .map(|s| s.as_str().to_string())
            .collect();
        assert_eq!(ids, ["1-1", "1-2", "2-1", "2-2"]);
        assert!(seat_map.seats.values().all(|s| s.available));
    }

    #[tokio::test]
    async fn update_edits_fields_but_keeps_seat_layout() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_at(&dir);

        let id = repo
            .create(create_event("Before", 4, Some(LayoutRequest::new(2, 2))))
            .await
            .unwrap();
        repo.update(UpdateSpace {
            space_id: id.clone(),
            name: Some("After".into()),
            location: None,
            capacity: Some(100),
        })
        .await
        .unwrap();

        let space = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(space.name, "After");
        assert_eq!(space.capacity, 100);
        // 2x2 grid survives the capacity change untouched.
        assert_eq!(space.seat_map.unwrap().seats.len(), 4);
    }

    #[tokio::test]
    async fn update_missing_space_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_at(&dir);

        let err = repo
            .update(UpdateSpace {
                space_id: SpaceId::from("999"),
                name: Some("Ghost".into()),
                location: None,
                capacity: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EntityNotFound(_)));
    }

    #[tokio::test]
    async fn delete_reports_not_found_for_missing_space() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_at(&dir);

        let id = repo.create(create_event("Doomed", 10, None)).await.unwrap();
        repo.delete(DeleteSpace {
            space_id: id.clone(),
        })
        .await
        .unwrap();
        assert!(repo.find_by_id(&id).await.unwrap().is_none());

        let err = repo
            .delete(DeleteSpace { space_id: id })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EntityNotFound(_)));
    }

    #[tokio::test]
    async fn occupancy_is_bounded_by_capacity() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_at(&dir);
        let id = repo.create(create_event("Bounded", 5, None)).await.unwrap();

        repo.update_occupancy(UpdateOccupancy::new(id.clone(), 5))
            .await
            .unwrap();
        assert_eq!(
            repo.find_by_id(&id).await.unwrap().unwrap().current_occupancy,
            5
        );

        for bad in [-1, 6] {
            let err = repo
                .update_occupancy(UpdateOccupancy::new(id.clone(), bad))
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::CapacityExceeded(_)));
        }
        // The failed updates changed nothing.
        assert_eq!(
            repo.find_by_id(&id).await.unwrap().unwrap().current_occupancy,
            5
        );
    }

    #[tokio::test]
    async fn add_equipment_appends_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_at(&dir);
        let id = repo.create(create_event("Equipped", 10, None)).await.unwrap();

        repo.add_equipment(AddEquipment::new(id.clone(), "Projector".into(), 2))
            .await
            .unwrap();
        repo.add_equipment(AddEquipment::new(id.clone(), "Whiteboard".into(), 5))
            .await
            .unwrap();

        let space = repo.find_by_id(&id).await.unwrap().unwrap();
        let names: Vec<_> = space.equipment.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Projector", "Whiteboard"]);
    }

    #[tokio::test]
    async fn persisted_space_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = DataStore::new(&StorageConfig {
            data_file: dir.path().join("data.json"),
        });
        let repo = SpaceRepositoryImpl::new(store.clone());

        let id = repo
            .create(create_event("Round Trip", 4, Some(LayoutRequest::new(2, 3))))
            .await
            .unwrap();
        let before = repo.find_by_id(&id).await.unwrap().unwrap();

        // Reload through a second store instance over the same file.
        let reread = SpaceRepositoryImpl::new(DataStore::new(&StorageConfig {
            data_file: dir.path().join("data.json"),
        }))
        .find_by_id(&id)
        .await
        .unwrap()
        .unwrap();
        assert_eq!(before, reread);
        assert!(reread
            .seat_map
            .unwrap()
            .seat(&SeatId::new(2, 3))
            .is_some());
    }
}
