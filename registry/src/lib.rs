use std::sync::Arc;

use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::meeting_room::MeetingRoomRepositoryImpl;
use adapter::repository::registration::RegistrationRepositoryImpl;
use adapter::repository::space::SpaceRepositoryImpl;
use adapter::store::DataStore;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::meeting_room::MeetingRoomRepository;
use kernel::repository::registration::RegistrationRepository;
use kernel::repository::space::SpaceRepository;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    space_repository: Arc<dyn SpaceRepository>,
    meeting_room_repository: Arc<dyn MeetingRoomRepository>,
    registration_repository: Arc<dyn RegistrationRepository>,
}

impl AppRegistry {
    pub fn new(store: DataStore) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(store.clone()));
        let space_repository = Arc::new(SpaceRepositoryImpl::new(store.clone()));
        let meeting_room_repository = Arc::new(MeetingRoomRepositoryImpl::new(store.clone()));
        let registration_repository = Arc::new(RegistrationRepositoryImpl::new(store));
        Self {
            health_check_repository,
            space_repository,
            meeting_room_repository,
            registration_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn space_repository(&self) -> Arc<dyn SpaceRepository> {
        self.space_repository.clone()
    }

    pub fn meeting_room_repository(&self) -> Arc<dyn MeetingRoomRepository> {
        self.meeting_room_repository.clone()
    }

    pub fn registration_repository(&self) -> Arc<dyn RegistrationRepository> {
        self.registration_repository.clone()
    }
}
