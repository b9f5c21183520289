use async_trait::async_trait;
use chrono::Local;
use derive_new::new;
use kernel::model::id::{RegistrationId, ResourceRef};
use kernel::model::registration::{event::CreateRegistration, Registration};
use kernel::repository::registration::RegistrationRepository;
use shared::error::{AppError, AppResult};

use crate::store::model::registration::RegistrationRow;
use crate::store::model::space::SpaceRow;
use crate::store::DataStore;

#[derive(new)]
pub struct RegistrationRepositoryImpl {
    store: DataStore,
}

#[async_trait]
impl RegistrationRepository for RegistrationRepositoryImpl {
    // Resolution, seat claim, occupancy bump and ledger append all happen
    // against one transaction's document. Any failure before commit leaves
    // the file exactly as it was.
    async fn create(&self, event: CreateRegistration) -> AppResult<RegistrationId> {
        let mut tx = self.store.begin().await?;
        let doc = tx.document_mut();

        let (space_name, selected_seat) = match &event.resource {
            ResourceRef::CoworkingSpace(space_id) => {
                let row = doc
                    .coworking_spaces
                    .get(space_id.as_str())
                    .cloned()
                    .ok_or_else(|| {
                        AppError::InvalidResource(format!(
                            "No coworking space for id ({space_id})"
                        ))
                    })?;
                let mut space = row.into_space(space_id.clone());

                if let Some(seat_id) = &event.selected_seat {
                    space.claim_seat(seat_id, &event.holder_name())?;
                }
                // The ceiling is only enforced on direct occupancy edits;
                // registrations have always been allowed to push past it.
                space.current_occupancy += 1;

                let name = space.name.clone();
                doc.coworking_spaces
                    .insert(space_id.to_string(), SpaceRow::from(space));
                (name, event.selected_seat.clone())
            }
            ResourceRef::MeetingRoom(room_id) => {
                let row = doc
                    .meeting_rooms
                    .get_mut(room_id.as_str())
                    .ok_or_else(|| {
                        AppError::InvalidResource(format!("No meeting room for id ({room_id})"))
                    })?;
                row.current_occupancy += 1;
                // Seat selection does not apply to meeting rooms.
                (row.name.clone(), None)
            }
        };

        let registration_id = RegistrationId::new(doc.registrations.len() as i64 + 1);
        let registration = Registration {
            registration_id,
            first_name: event.first_name,
            last_name: event.last_name,
            email: event.email,
            phone: event.phone,
            company: event.company,
            resource: event.resource,
            space_name,
            membership_type: event.membership_type,
            start_date: event.start_date,
            additional_info: event.additional_info,
            selected_seat,
            submitted_at: Local::now(),
        };
        doc.registrations.push(RegistrationRow::from(registration));

        tx.commit().await?;
        Ok(registration_id)
    }

    async fn find_all(&self) -> AppResult<Vec<Registration>> {
        let doc = self.store.load().await?;
        Ok(doc
            .registrations
            .into_iter()
            .map(Registration::from)
            .collect())
    }

    async fn find_by_resource(&self, resource: &ResourceRef) -> AppResult<Vec<Registration>> {
        let qualified = resource.qualified();
        let doc = self.store.load().await?;
        Ok(doc
            .registrations
            .into_iter()
            .filter(|row| row.space_id == qualified)
            .map(Registration::from)
            .collect())
    }
}
