use derive_new::new;
use garde::Validate;
use kernel::model::id::RoomId;
use kernel::model::space::{
    event::{CreateMeetingRoom, UpdateMeetingRoom},
    MeetingRoom,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMeetingRoomRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(length(min = 1))]
    pub location: String,
    #[garde(range(min = 1))]
    pub capacity: i32,
}

impl From<CreateMeetingRoomRequest> for CreateMeetingRoom {
    fn from(value: CreateMeetingRoomRequest) -> Self {
        let CreateMeetingRoomRequest {
            name,
            location,
            capacity,
        } = value;
        CreateMeetingRoom {
            name,
            location,
            capacity,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingRoomCreatedResponse {
    pub id: RoomId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingRoomsResponse {
    pub items: Vec<MeetingRoomResponse>,
}

impl From<Vec<MeetingRoom>> for MeetingRoomsResponse {
    fn from(value: Vec<MeetingRoom>) -> Self {
        Self {
            items: value.into_iter().map(MeetingRoomResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingRoomResponse {
    pub id: RoomId,
    pub name: String,
    pub location: String,
    pub capacity: i32,
    pub current_occupancy: i32,
}

impl From<MeetingRoom> for MeetingRoomResponse {
    fn from(value: MeetingRoom) -> Self {
        let MeetingRoom {
            room_id,
            name,
            location,
            capacity,
            current_occupancy,
        } = value;
        Self {
            id: room_id,
            name,
            location,
            capacity,
            current_occupancy,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMeetingRoomRequest {
    #[garde(inner(length(min = 1)))]
    pub name: Option<String>,
    #[garde(inner(length(min = 1)))]
    pub location: Option<String>,
    #[garde(inner(range(min = 1)))]
    pub capacity: Option<i32>,
}

#[derive(new)]
pub struct UpdateMeetingRoomRequestWithId(RoomId, UpdateMeetingRoomRequest);

impl From<UpdateMeetingRoomRequestWithId> for UpdateMeetingRoom {
    fn from(value: UpdateMeetingRoomRequestWithId) -> Self {
        let UpdateMeetingRoomRequestWithId(
            room_id,
            UpdateMeetingRoomRequest {
                name,
                location,
                capacity,
            },
        ) = value;
        UpdateMeetingRoom {
            room_id,
            name,
            location,
            capacity,
        }
    }
}
