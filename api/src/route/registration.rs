use axum::routing::{get, post};
use axum::Router;
use registry::AppRegistry;

use crate::handler::registration::{
    show_registration_list, show_resource_options, submit_registration,
};

pub fn build_registration_routers() -> Router<AppRegistry> {
    let registrations_routers = Router::new()
        .route("/", post(submit_registration))
        .route("/", get(show_registration_list));

    Router::new()
        .nest("/registrations", registrations_routers)
        .route("/resources", get(show_resource_options))
}
