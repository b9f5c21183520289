use derive_new::new;

use crate::model::id::{RoomId, SpaceId};

/// Requested grid shape for a new space's seat layout.
#[derive(Debug, Clone, Copy, new)]
pub struct LayoutRequest {
    pub rows: u32,
    pub cols: u32,
}

#[derive(Debug, new)]
pub struct CreateSpace {
    pub name: String,
    pub location: String,
    pub capacity: i32,
    /// `None` falls back to the default grid rather than failing.
    pub layout: Option<LayoutRequest>,
}

#[derive(Debug)]
pub struct UpdateSpace {
    pub space_id: SpaceId,
    pub name: Option<String>,
    pub location: Option<String>,
    // Capacity edits do not regenerate or truncate the seat layout.
    pub capacity: Option<i32>,
}

#[derive(Debug)]
pub struct DeleteSpace {
    pub space_id: SpaceId,
}

#[derive(Debug, new)]
pub struct UpdateOccupancy {
    pub space_id: SpaceId,
    pub occupancy: i32,
}

#[derive(Debug, new)]
pub struct AddEquipment {
    pub space_id: SpaceId,
    pub name: String,
    pub quantity: i32,
}

#[derive(Debug, new)]
pub struct CreateMeetingRoom {
    pub name: String,
    pub location: String,
    pub capacity: i32,
}

#[derive(Debug)]
pub struct UpdateMeetingRoom {
    pub room_id: RoomId,
    pub name: Option<String>,
    pub location: Option<String>,
    pub capacity: Option<i32>,
}

#[derive(Debug)]
pub struct DeleteMeetingRoom {
    pub room_id: RoomId,
}

#[derive(Debug, new)]
pub struct UpdateRoomOccupancy {
    pub room_id: RoomId,
    pub occupancy: i32,
}
