pub mod event;

use chrono::{DateTime, Local, NaiveDate};

use crate::model::id::{RegistrationId, ResourceRef, SeatId};

/// One submitted intake form. Immutable once appended to the ledger;
/// `space_name` is a snapshot of the resource's name at submission time and
/// is not kept in sync with later renames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub registration_id: RegistrationId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub resource: ResourceRef,
    pub space_name: String,
    pub membership_type: String,
    pub start_date: NaiveDate,
    pub additional_info: String,
    /// Only ever set when the target is a coworking space.
    pub selected_seat: Option<SeatId>,
    pub submitted_at: DateTime<Local>,
}

impl Registration {
    pub fn is_meeting_room(&self) -> bool {
        self.resource.is_meeting_room()
    }
}
