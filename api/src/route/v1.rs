use axum::Router;
use registry::AppRegistry;

use super::health::build_health_check_routers;
use super::meeting_room::build_meeting_room_routers;
use super::registration::build_registration_routers;
use super::space::build_space_routers;

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_space_routers())
        .merge(build_meeting_room_routers())
        .merge(build_registration_routers());
    Router::new().nest("/api/v1", router)
}
