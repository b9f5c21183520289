use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::id::{RegistrationId, ResourceRef};
use crate::model::registration::{event::CreateRegistration, Registration};

#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Validates the submission, claims the seat when one was selected, bumps
    /// the resource's occupancy and appends to the ledger — all or nothing.
    async fn create(&self, event: CreateRegistration) -> AppResult<RegistrationId>;
    /// All registrations in submission order.
    async fn find_all(&self) -> AppResult<Vec<Registration>>;
    /// Registrations targeting one resource, submission order preserved.
    async fn find_by_resource(&self, resource: &ResourceRef) -> AppResult<Vec<Registration>>;
}
