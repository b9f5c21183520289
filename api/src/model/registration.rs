use chrono::{DateTime, Local, NaiveDate};
use garde::Validate;
use kernel::model::id::{RegistrationId, ResourceRef, SeatId};
use kernel::model::registration::{event::CreateRegistration, Registration};
use kernel::model::space::{CoworkingSpace, MeetingRoom};
use serde::{Deserialize, Serialize};
use strum::VariantNames;

/// Field names mirror the intake form exactly, which is why this request is
/// camelCase like the form inputs (`firstName`, `selectedSeat`, ...).
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRegistrationRequest {
    #[garde(length(min = 1))]
    pub first_name: String,
    #[garde(length(min = 1))]
    pub last_name: String,
    #[garde(email)]
    pub email: String,
    #[garde(skip)]
    pub phone: String,
    #[garde(skip)]
    pub company: String,
    /// Qualified resource ID from the combined selection list.
    #[garde(length(min = 1))]
    pub space: String,
    #[garde(length(min = 1))]
    pub membership_type: String,
    #[garde(skip)]
    pub start_date: NaiveDate,
    #[garde(skip)]
    #[serde(default)]
    pub additional_info: String,
    #[garde(skip)]
    #[serde(default)]
    pub selected_seat: Option<String>,
}

impl From<CreateRegistrationRequest> for CreateRegistration {
    fn from(value: CreateRegistrationRequest) -> Self {
        let CreateRegistrationRequest {
            first_name,
            last_name,
            email,
            phone,
            company,
            space,
            membership_type,
            start_date,
            additional_info,
            selected_seat,
        } = value;
        CreateRegistration {
            first_name,
            last_name,
            email,
            phone,
            company,
            // The wire prefix is parsed here, once; nothing downstream
            // re-derives the kind from the raw string.
            resource: ResourceRef::parse(&space),
            membership_type,
            start_date,
            additional_info,
            // An empty seat field on the form means no seat was picked.
            selected_seat: selected_seat
                .filter(|seat| !seat.is_empty())
                .map(SeatId::from),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationCreatedResponse {
    pub id: RegistrationId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationsResponse {
    pub items: Vec<RegistrationResponse>,
}

impl From<Vec<Registration>> for RegistrationsResponse {
    fn from(value: Vec<Registration>) -> Self {
        Self {
            items: value.into_iter().map(RegistrationResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    pub id: RegistrationId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub space_id: String,
    pub space_name: String,
    pub is_meeting_room: bool,
    pub membership_type: String,
    pub start_date: NaiveDate,
    pub additional_info: String,
    pub selected_seat: Option<String>,
    pub submitted_at: DateTime<Local>,
}

impl From<Registration> for RegistrationResponse {
    fn from(value: Registration) -> Self {
        let Registration {
            registration_id,
            first_name,
            last_name,
            email,
            phone,
            company,
            resource,
            space_name,
            membership_type,
            start_date,
            additional_info,
            selected_seat,
            submitted_at,
        } = value;
        Self {
            id: registration_id,
            first_name,
            last_name,
            email,
            phone,
            company,
            space_id: resource.qualified(),
            space_name,
            is_meeting_room: resource.is_meeting_room(),
            membership_type,
            start_date,
            additional_info,
            selected_seat: selected_seat.map(|s| s.to_string()),
            submitted_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegistrationListQuery {
    /// Qualified resource ID (`mr_`-prefixed for meeting rooms).
    #[garde(skip)]
    pub space_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, VariantNames)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ResourceKindName {
    CoworkingSpace,
    MeetingRoom,
}

/// One entry of the combined selection list shown on the intake form.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceOptionResponse {
    /// Qualified ID, safe to submit back as `space`.
    pub id: String,
    pub name: String,
    pub location: String,
    pub kind: ResourceKindName,
}

impl From<CoworkingSpace> for ResourceOptionResponse {
    fn from(value: CoworkingSpace) -> Self {
        Self {
            id: ResourceRef::CoworkingSpace(value.space_id).qualified(),
            name: value.name,
            location: value.location,
            kind: ResourceKindName::CoworkingSpace,
        }
    }
}

impl From<MeetingRoom> for ResourceOptionResponse {
    fn from(value: MeetingRoom) -> Self {
        Self {
            id: ResourceRef::MeetingRoom(value.room_id).qualified(),
            name: value.name,
            location: value.location,
            kind: ResourceKindName::MeetingRoom,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceOptionsResponse {
    pub items: Vec<ResourceOptionResponse>,
}
