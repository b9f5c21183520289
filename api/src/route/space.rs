use axum::routing::{delete, get, post, put};
use axum::Router;
use registry::AppRegistry;

use crate::handler::space::{
    add_equipment, delete_space, register_space, show_seat_map, show_space, show_space_list,
    update_occupancy, update_space,
};

pub fn build_space_routers() -> Router<AppRegistry> {
    let spaces_routers = Router::new()
        .route("/", post(register_space))
        .route("/", get(show_space_list))
        .route("/:space_id", get(show_space))
        .route("/:space_id", put(update_space))
        .route("/:space_id", delete(delete_space))
        .route("/:space_id/occupancy", put(update_occupancy))
        .route("/:space_id/equipment", post(add_equipment))
        .route("/:space_id/seats", get(show_seat_map));

    Router::new().nest("/spaces", spaces_routers)
}
