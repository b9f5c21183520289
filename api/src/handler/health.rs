use axum::extract::State;
use axum::http::StatusCode;
use registry::AppRegistry;

pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

pub async fn health_check_store(State(registry): State<AppRegistry>) -> StatusCode {
    if registry.health_check_repository().check_store().await {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}
