use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use garde::Validate;
use kernel::model::id::RoomId;
use kernel::model::space::event::{DeleteMeetingRoom, UpdateRoomOccupancy};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::meeting_room::{
    CreateMeetingRoomRequest, MeetingRoomCreatedResponse, MeetingRoomResponse,
    MeetingRoomsResponse, UpdateMeetingRoomRequest, UpdateMeetingRoomRequestWithId,
};
use crate::model::space::UpdateOccupancyRequest;

pub async fn register_meeting_room(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateMeetingRoomRequest>,
) -> AppResult<(StatusCode, Json<MeetingRoomCreatedResponse>)> {
    req.validate(&())?;

    registry
        .meeting_room_repository()
        .create(req.into())
        .await
        .map(|id| (StatusCode::CREATED, Json(MeetingRoomCreatedResponse { id })))
}

pub async fn show_meeting_room_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MeetingRoomsResponse>> {
    registry
        .meeting_room_repository()
        .find_all()
        .await
        .map(MeetingRoomsResponse::from)
        .map(Json)
}

pub async fn show_meeting_room(
    Path(room_id): Path<RoomId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MeetingRoomResponse>> {
    registry
        .meeting_room_repository()
        .find_by_id(&room_id)
        .await
        .and_then(|room| match room {
            Some(room) => Ok(Json(room.into())),
            None => Err(AppError::EntityNotFound("Meeting room not found".into())),
        })
}

pub async fn update_meeting_room(
    Path(room_id): Path<RoomId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateMeetingRoomRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let update_room = UpdateMeetingRoomRequestWithId::new(room_id, req);
    registry
        .meeting_room_repository()
        .update(update_room.into())
        .await
        .map(|_| StatusCode::OK)
}

pub async fn delete_meeting_room(
    Path(room_id): Path<RoomId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .meeting_room_repository()
        .delete(DeleteMeetingRoom { room_id })
        .await
        .map(|_| StatusCode::OK)
}

pub async fn update_room_occupancy(
    Path(room_id): Path<RoomId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateOccupancyRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    registry
        .meeting_room_repository()
        .update_occupancy(UpdateRoomOccupancy::new(room_id, req.occupancy))
        .await
        .map(|_| StatusCode::OK)
}
