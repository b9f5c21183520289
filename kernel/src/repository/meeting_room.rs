use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::id::RoomId;
use crate::model::space::{
    event::{CreateMeetingRoom, DeleteMeetingRoom, UpdateMeetingRoom, UpdateRoomOccupancy},
    MeetingRoom,
};

#[async_trait]
pub trait MeetingRoomRepository: Send + Sync {
    async fn create(&self, event: CreateMeetingRoom) -> AppResult<RoomId>;
    async fn find_all(&self) -> AppResult<Vec<MeetingRoom>>;
    async fn find_by_id(&self, room_id: &RoomId) -> AppResult<Option<MeetingRoom>>;
    async fn update(&self, event: UpdateMeetingRoom) -> AppResult<()>;
    async fn delete(&self, event: DeleteMeetingRoom) -> AppResult<()>;
    async fn update_occupancy(&self, event: UpdateRoomOccupancy) -> AppResult<()>;
}
