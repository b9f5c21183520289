use axum::routing::{delete, get, post, put};
use axum::Router;
use registry::AppRegistry;

use crate::handler::meeting_room::{
    delete_meeting_room, register_meeting_room, show_meeting_room, show_meeting_room_list,
    update_meeting_room, update_room_occupancy,
};

pub fn build_meeting_room_routers() -> Router<AppRegistry> {
    let rooms_routers = Router::new()
        .route("/", post(register_meeting_room))
        .route("/", get(show_meeting_room_list))
        .route("/:room_id", get(show_meeting_room))
        .route("/:room_id", put(update_meeting_room))
        .route("/:room_id", delete(delete_meeting_room))
        .route("/:room_id/occupancy", put(update_room_occupancy));

    Router::new().nest("/meeting-rooms", rooms_routers)
}
