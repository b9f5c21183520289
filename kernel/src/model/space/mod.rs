pub mod event;

use shared::error::{AppError, AppResult};

use crate::model::id::{RoomId, SeatId, SpaceId};
use crate::model::seat::SeatMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoworkingSpace {
    pub space_id: SpaceId,
    pub name: String,
    pub location: String,
    pub capacity: i32,
    pub current_occupancy: i32,
    pub equipment: Vec<Equipment>,
    /// Absent on spaces persisted before seat maps existed.
    pub seat_map: Option<SeatMap>,
}

impl CoworkingSpace {
    /// Claims a seat on behalf of `holder`. A space without a seat map has
    /// no valid seat IDs, so any request against it is a seat-not-found.
    pub fn claim_seat(&mut self, seat_id: &SeatId, holder: &str) -> AppResult<()> {
        match self.seat_map.as_mut() {
            Some(seat_map) => seat_map.claim(seat_id, holder),
            None => Err(AppError::SeatNotFound(format!(
                "Space ({}) has no seat layout",
                self.space_id
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equipment {
    pub name: String,
    pub quantity: i32,
}

/// Meeting rooms are bookable as a whole; they never carry a seat layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingRoom {
    pub room_id: RoomId,
    pub name: String,
    pub location: String,
    pub capacity: i32,
    pub current_occupancy: i32,
}
