use async_trait::async_trait;
use derive_new::new;
use kernel::repository::health::HealthCheckRepository;

use crate::store::DataStore;

#[derive(new)]
pub struct HealthCheckRepositoryImpl {
    store: DataStore,
}

#[async_trait]
impl HealthCheckRepository for HealthCheckRepositoryImpl {
    async fn check_store(&self) -> bool {
        self.store.load().await.is_ok()
    }
}
