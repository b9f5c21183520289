use std::collections::BTreeMap;

use kernel::model::id::{RoomId, SeatId, SpaceId};
use kernel::model::seat::{Seat, SeatMap};
use kernel::model::space::{CoworkingSpace, Equipment, MeetingRoom};
use serde::{Deserialize, Serialize};

/// Persisted form of a coworking space. The ID is the document map key, not
/// a field, which is why conversion back to the kernel model takes it as an
/// argument.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceRow {
    pub name: String,
    pub location: String,
    pub capacity: i32,
    #[serde(default)]
    pub current_occupancy: i32,
    #[serde(default)]
    pub equipment: Vec<EquipmentRow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat_layout: Option<Vec<Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seats: Option<BTreeMap<String, SeatRow>>,
}

impl SpaceRow {
    pub fn into_space(self, space_id: SpaceId) -> CoworkingSpace {
        let SpaceRow {
            name,
            location,
            capacity,
            current_occupancy,
            equipment,
            seat_layout,
            seats,
        } = self;
        let seat_map = match (seat_layout, seats) {
            (Some(layout), Some(seats)) => Some(SeatMap {
                layout: layout
                    .into_iter()
                    .map(|line| line.into_iter().map(SeatId::from).collect())
                    .collect(),
                seats: seats
                    .into_iter()
                    .map(|(id, row)| (SeatId::from(id), Seat::from(row)))
                    .collect(),
            }),
            _ => None,
        };
        CoworkingSpace {
            space_id,
            name,
            location,
            capacity,
            current_occupancy,
            equipment: equipment.into_iter().map(Equipment::from).collect(),
            seat_map,
        }
    }
}

impl From<CoworkingSpace> for SpaceRow {
    fn from(value: CoworkingSpace) -> Self {
        let CoworkingSpace {
            space_id: _,
            name,
            location,
            capacity,
            current_occupancy,
            equipment,
            seat_map,
        } = value;
        let (seat_layout, seats) = match seat_map {
            Some(SeatMap { layout, seats }) => (
                Some(
                    layout
                        .into_iter()
                        .map(|line| line.into_iter().map(|id| id.to_string()).collect())
                        .collect(),
                ),
                Some(
                    seats
                        .into_iter()
                        .map(|(id, seat)| (id.to_string(), SeatRow::from(seat)))
                        .collect(),
                ),
            ),
            None => (None, None),
        };
        Self {
            name,
            location,
            capacity,
            current_occupancy,
            equipment: equipment.into_iter().map(EquipmentRow::from).collect(),
            seat_layout,
            seats,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentRow {
    pub name: String,
    pub quantity: i32,
}

impl From<EquipmentRow> for Equipment {
    fn from(value: EquipmentRow) -> Self {
        let EquipmentRow { name, quantity } = value;
        Self { name, quantity }
    }
}

impl From<Equipment> for EquipmentRow {
    fn from(value: Equipment) -> Self {
        let Equipment { name, quantity } = value;
        Self { name, quantity }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatRow {
    pub id: String,
    pub row: u32,
    pub col: u32,
    pub available: bool,
    pub reserved_by: Option<String>,
}

impl From<SeatRow> for Seat {
    fn from(value: SeatRow) -> Self {
        let SeatRow {
            id,
            row,
            col,
            available,
            reserved_by,
        } = value;
        Self {
            id: SeatId::from(id),
            row,
            col,
            available,
            reserved_by,
        }
    }
}

impl From<Seat> for SeatRow {
    fn from(value: Seat) -> Self {
        let Seat {
            id,
            row,
            col,
            available,
            reserved_by,
        } = value;
        Self {
            id: id.to_string(),
            row,
            col,
            available,
            reserved_by,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomRow {
    pub name: String,
    pub location: String,
    pub capacity: i32,
    #[serde(default)]
    pub current_occupancy: i32,
}

impl RoomRow {
    pub fn into_room(self, room_id: RoomId) -> MeetingRoom {
        let RoomRow {
            name,
            location,
            capacity,
            current_occupancy,
        } = self;
        MeetingRoom {
            room_id,
            name,
            location,
            capacity,
            current_occupancy,
        }
    }
}

impl From<MeetingRoom> for RoomRow {
    fn from(value: MeetingRoom) -> Self {
        let MeetingRoom {
            room_id: _,
            name,
            location,
            capacity,
            current_occupancy,
        } = value;
        Self {
            name,
            location,
            capacity,
            current_occupancy,
        }
    }
}
