use std::collections::BTreeMap;

use derive_new::new;
use garde::Validate;
use kernel::model::id::SpaceId;
use kernel::model::seat::{Seat, SeatMap};
use kernel::model::space::{
    event::{CreateSpace, LayoutRequest, UpdateSpace},
    CoworkingSpace, Equipment,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSpaceRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(length(min = 1))]
    pub location: String,
    #[garde(range(min = 1))]
    pub capacity: i32,
    #[garde(inner(range(min = 1, max = 100)))]
    pub rows: Option<u32>,
    #[garde(inner(range(min = 1, max = 100)))]
    pub cols: Option<u32>,
}

impl From<CreateSpaceRequest> for CreateSpace {
    fn from(value: CreateSpaceRequest) -> Self {
        let CreateSpaceRequest {
            name,
            location,
            capacity,
            rows,
            cols,
        } = value;
        // Only a fully specified grid counts as an explicit layout request;
        // anything less falls back to the default grid downstream.
        let layout = match (rows, cols) {
            (Some(rows), Some(cols)) => Some(LayoutRequest::new(rows, cols)),
            _ => None,
        };
        CreateSpace {
            name,
            location,
            capacity,
            layout,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceCreatedResponse {
    pub id: SpaceId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacesResponse {
    pub items: Vec<SpaceResponse>,
}

impl From<Vec<CoworkingSpace>> for SpacesResponse {
    fn from(value: Vec<CoworkingSpace>) -> Self {
        Self {
            items: value.into_iter().map(SpaceResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceResponse {
    pub id: SpaceId,
    pub name: String,
    pub location: String,
    pub capacity: i32,
    pub current_occupancy: i32,
    pub equipment: Vec<EquipmentResponse>,
    pub has_seat_layout: bool,
}

impl From<CoworkingSpace> for SpaceResponse {
    fn from(value: CoworkingSpace) -> Self {
        let CoworkingSpace {
            space_id,
            name,
            location,
            capacity,
            current_occupancy,
            equipment,
            seat_map,
        } = value;
        Self {
            id: space_id,
            name,
            location,
            capacity,
            current_occupancy,
            equipment: equipment.into_iter().map(EquipmentResponse::from).collect(),
            has_seat_layout: seat_map.is_some(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentResponse {
    pub name: String,
    pub quantity: i32,
}

impl From<Equipment> for EquipmentResponse {
    fn from(value: Equipment) -> Self {
        let Equipment { name, quantity } = value;
        Self { name, quantity }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSpaceRequest {
    #[garde(inner(length(min = 1)))]
    pub name: Option<String>,
    #[garde(inner(length(min = 1)))]
    pub location: Option<String>,
    #[garde(inner(range(min = 1)))]
    pub capacity: Option<i32>,
}

#[derive(new)]
pub struct UpdateSpaceRequestWithId(SpaceId, UpdateSpaceRequest);

impl From<UpdateSpaceRequestWithId> for UpdateSpace {
    fn from(value: UpdateSpaceRequestWithId) -> Self {
        let UpdateSpaceRequestWithId(
            space_id,
            UpdateSpaceRequest {
                name,
                location,
                capacity,
            },
        ) = value;
        UpdateSpace {
            space_id,
            name,
            location,
            capacity,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOccupancyRequest {
    #[garde(skip)]
    pub occupancy: i32,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddEquipmentRequest {
    #[garde(length(min = 1))]
    pub equipment_name: String,
    #[garde(range(min = 1))]
    pub quantity: i32,
}

/// Read-only seat projection. Kept in the persisted snake_case shape rather
/// than the camelCase of the other responses: the seat-map consumers read
/// the same `{seat_layout, seats}` structure the document stores.
#[derive(Debug, Serialize)]
pub struct SeatMapResponse {
    pub seat_layout: Option<Vec<Vec<String>>>,
    pub seats: Option<BTreeMap<String, SeatResponse>>,
}

impl From<Option<SeatMap>> for SeatMapResponse {
    fn from(value: Option<SeatMap>) -> Self {
        match value {
            None => Self {
                seat_layout: None,
                seats: None,
            },
            Some(SeatMap { layout, seats }) => Self {
                seat_layout: Some(
                    layout
                        .into_iter()
                        .map(|line| line.into_iter().map(|id| id.to_string()).collect())
                        .collect(),
                ),
                seats: Some(
                    seats
                        .into_iter()
                        .map(|(id, seat)| (id.to_string(), SeatResponse::from(seat)))
                        .collect(),
                ),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SeatResponse {
    pub id: String,
    pub row: u32,
    pub col: u32,
    pub available: bool,
    pub reserved_by: Option<String>,
}

impl From<Seat> for SeatResponse {
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
