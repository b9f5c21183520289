use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use garde::Validate;
use kernel::model::id::ResourceRef;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::registration::{
    CreateRegistrationRequest, RegistrationCreatedResponse, RegistrationListQuery,
    RegistrationsResponse, ResourceOptionResponse, ResourceOptionsResponse,
};

pub async fn submit_registration(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateRegistrationRequest>,
) -> AppResult<(StatusCode, Json<RegistrationCreatedResponse>)> {
    req.validate(&())?;

    registry
        .registration_repository()
        .create(req.into())
        .await
        .map(|id| {
            (
                StatusCode::CREATED,
                Json(RegistrationCreatedResponse { id }),
            )
        })
}

pub async fn show_registration_list(
    Query(query): Query<RegistrationListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RegistrationsResponse>> {
    query.validate(&())?;

    let repository = registry.registration_repository();
    let registrations = match query.space_id {
        Some(space_id) => {
            repository
                .find_by_resource(&ResourceRef::parse(&space_id))
                .await?
        }
        None => repository.find_all().await?,
    };
    Ok(Json(RegistrationsResponse::from(registrations)))
}

/// The combined selection list for the intake form: every coworking space
/// under its bare ID, every meeting room under its `mr_`-qualified ID.
pub async fn show_resource_options(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ResourceOptionsResponse>> {
    let spaces = registry.space_repository().find_all().await?;
    let rooms = registry.meeting_room_repository().find_all().await?;

    let items = spaces
        .into_iter()
        .map(ResourceOptionResponse::from)
        .chain(rooms.into_iter().map(ResourceOptionResponse::from))
        .collect();
    Ok(Json(ResourceOptionsResponse { items }))
}
