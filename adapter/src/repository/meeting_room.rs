use async_trait::async_trait;
use derive_new::new;
use kernel::model::id::RoomId;
use kernel::model::space::{
    event::{CreateMeetingRoom, DeleteMeetingRoom, UpdateMeetingRoom, UpdateRoomOccupancy},
    MeetingRoom,
};
use kernel::repository::meeting_room::MeetingRoomRepository;
use shared::error::{AppError, AppResult};

use crate::store::model::space::RoomRow;
use crate::store::DataStore;

#[derive(new)]
pub struct MeetingRoomRepositoryImpl {
    store: DataStore,
}

#[async_trait]
impl MeetingRoomRepository for MeetingRoomRepositoryImpl {
    async fn create(&self, event: CreateMeetingRoom) -> AppResult<RoomId> {
        if event.capacity <= 0 {
            return Err(AppError::UnprocessableEntity(
                "Capacity must be a positive number".into(),
            ));
        }

        let mut tx = self.store.begin().await?;
        let doc = tx.document_mut();

        // Rooms count from 1 on their own counter, independent of spaces.
        let room_id = RoomId::from((doc.meeting_rooms.len() + 1).to_string());
        doc.meeting_rooms.insert(
            room_id.to_string(),
            RoomRow {
                name: event.name,
                location: event.location,
                capacity: event.capacity,
                current_occupancy: 0,
            },
        );

        tx.commit().await?;
        Ok(room_id)
    }

    async fn find_all(&self) -> AppResult<Vec<MeetingRoom>> {
        let doc = self.store.load().await?;
        let mut entries: Vec<_> = doc.meeting_rooms.into_iter().collect();
        entries.sort_by_key(|(id, _)| id.parse::<u64>().unwrap_or(u64::MAX));
        Ok(entries
            .into_iter()
            .map(|(id, row)| row.into_room(RoomId::from(id)))
            .collect())
    }

    async fn find_by_id(&self, room_id: &RoomId) -> AppResult<Option<MeetingRoom>> {
        let doc = self.store.load().await?;
        Ok(doc
            .meeting_rooms
            .get(room_id.as_str())
            .cloned()
            .map(|row| row.into_room(room_id.clone())))
    }

    async fn update(&self, event: UpdateMeetingRoom) -> AppResult<()> {
        let mut tx = self.store.begin().await?;
        let row = tx
            .document_mut()
            .meeting_rooms
            .get_mut(event.room_id.as_str())
            .ok_or_else(|| {
                AppError::EntityNotFound(format!("Meeting room ({}) not found", event.room_id))
            })?;

        if let Some(name) = event.name {
            row.name = name;
        }
        if let Some(location) = event.location {
            row.location = location;
        }
        if let Some(capacity) = event.capacity {
            row.capacity = capacity;
        }

        tx.commit().await
    }

    async fn delete(&self, event: DeleteMeetingRoom) -> AppResult<()> {
        let mut tx = self.store.begin().await?;
        tx.document_mut()
            .meeting_rooms
            .remove(event.room_id.as_str())
            .ok_or_else(|| {
                AppError::EntityNotFound(format!("Meeting room ({}) not found", event.room_id))
            })?;
        tx.commit().await
    }

    async fn update_occupancy(&self, event: UpdateRoomOccupancy) -> AppResult<()> {
        let mut tx = self.store.begin().await?;
        let row = tx
            .document_mut()
            .meeting_rooms
            .get_mut(event.room_id.as_str())
            .ok_or_else(|| {
                AppError::EntityNotFound(format!("Meeting room ({}) not found", event.room_id))
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
}
