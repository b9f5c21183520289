use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use garde::Validate;
use kernel::model::id::SpaceId;
use kernel::model::space::event::{AddEquipment, DeleteSpace, UpdateOccupancy};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::space::{
    AddEquipmentRequest, CreateSpaceRequest, SeatMapResponse, SpaceCreatedResponse, SpaceResponse,
    SpacesResponse, UpdateOccupancyRequest, UpdateSpaceRequest, UpdateSpaceRequestWithId,
};

pub async fn register_space(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateSpaceRequest>,
) -> AppResult<(StatusCode, Json<SpaceCreatedResponse>)> {
    req.validate(&())?;

    registry
        .space_repository()
        .create(req.into())
        .await
        .map(|id| (StatusCode::CREATED, Json(SpaceCreatedResponse { id })))
}

pub async fn show_space_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SpacesResponse>> {
    registry
        .space_repository()
        .find_all()
        .await
        .map(SpacesResponse::from)
        .map(Json)
}

pub async fn show_space(
    Path(space_id): Path<SpaceId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SpaceResponse>> {
    registry
        .space_repository()
        .find_by_id(&space_id)
        .await
        .and_then(|space| match space {
            Some(space) => Ok(Json(space.into())),
            None => Err(AppError::EntityNotFound("Space not found".into())),
        })
}

pub async fn update_space(
    Path(space_id): Path<SpaceId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateSpaceRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let update_space = UpdateSpaceRequestWithId::new(space_id, req);
    registry
        .space_repository()
        .update(update_space.into())
        .await
        .map(|_| StatusCode::OK)
}

pub async fn delete_space(
    Path(space_id): Path<SpaceId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .space_repository()
        .delete(DeleteSpace { space_id })
        .await
        .map(|_| StatusCode::OK)
}

pub async fn update_occupancy(
    Path(space_id): Path<SpaceId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateOccupancyRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    registry
        .space_repository()
        .update_occupancy(UpdateOccupancy::new(space_id, req.occupancy))
        .await
        .map(|_| StatusCode::OK)
}

pub async fn add_equipment(
    Path(space_id): Path<SpaceId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<AddEquipmentRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    registry
        .space_repository()
        .add_equipment(AddEquipment::new(space_id, req.equipment_name, req.quantity))
        .await
        .map(|_| StatusCode::CREATED)
}

/// Read-only seat projection for the seat-picker UI.
pub async fn show_seat_map(
    Path(space_id): Path<SpaceId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SeatMapResponse>> {
    registry
        .space_repository()
        .find_by_id(&space_id)
        .await
        .and_then(|space| match space {
            Some(space) => Ok(Json(SeatMapResponse::from(space.seat_map))),
            None => Err(AppError::EntityNotFound("Space not found".into())),
        })
}
