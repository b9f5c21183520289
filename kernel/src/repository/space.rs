use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::id::SpaceId;
use crate::model::space::{
    event::{AddEquipment, CreateSpace, DeleteSpace, UpdateOccupancy, UpdateSpace},
    CoworkingSpace,
};

#[async_trait]
pub trait SpaceRepository: Send + Sync {
    async fn create(&self, event: CreateSpace) -> AppResult<SpaceId>;
    async fn find_all(&self) -> AppResult<Vec<CoworkingSpace>>;
    async fn find_by_id(&self, space_id: &SpaceId) -> AppResult<Option<CoworkingSpace>>;
    async fn update(&self, event: UpdateSpace) -> AppResult<()>;
    async fn delete(&self, event: DeleteSpace) -> AppResult<()>;
    // Direct occupancy edits enforce the capacity ceiling.
    async fn update_occupancy(&self, event: UpdateOccupancy) -> AppResult<()>;
    async fn add_equipment(&self, event: AddEquipment) -> AppResult<()>;
}
