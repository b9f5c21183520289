use chrono::NaiveDate;
use derive_new::new;

use crate::model::id::{ResourceRef, SeatId};

#[derive(Debug, new)]
pub struct CreateRegistration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub resource: ResourceRef,
    pub membership_type: String,
    pub start_date: NaiveDate,
    pub additional_info: String,
    pub selected_seat: Option<SeatId>,
}

impl CreateRegistration {
    /// Display name recorded on a claimed seat.
    pub fn holder_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
