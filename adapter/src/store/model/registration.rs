use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone};
use kernel::model::id::{RegistrationId, ResourceRef, SeatId};
use kernel::model::registration::Registration;
use serde::{Deserialize, Deserializer, Serialize};

/// Persisted ledger entry. `space_id` holds the qualified identifier
/// (`mr_`-prefixed for meeting rooms); `is_meeting_room` is kept alongside
/// for the benefit of consumers that read the raw document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub space_id: String,
    pub space_name: String,
    #[serde(default)]
    pub is_meeting_room: bool,
    pub membership_type: String,
    pub start_date: NaiveDate,
    pub additional_info: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_seat: Option<String>,
    #[serde(deserialize_with = "deserialize_submitted_at")]
    pub submitted_at: DateTime<Local>,
}

/// Older documents hold naive local timestamps without a UTC offset; rows
/// written by this service carry one. Accept both.
fn deserialize_submitted_at<'de, D>(deserializer: D) -> Result<DateTime<Local>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(dt.with_timezone(&Local));
    }
    let naive = raw
        .parse::<NaiveDateTime>()
        .map_err(serde::de::Error::custom)?;
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Ok(dt),
        LocalResult::None => Err(serde::de::Error::custom(format!(
            "{raw} does not exist in the local timezone"
        ))),
    }
}

impl From<RegistrationRow> for Registration {
    fn from(value: RegistrationRow) -> Self {
        let RegistrationRow {
            id,
            first_name,
            last_name,
            email,
            phone,
            company,
            space_id,
            space_name,
            is_meeting_room: _,
            membership_type,
            start_date,
            additional_info,
            selected_seat,
            submitted_at,
        } = value;
        Self {
            registration_id: RegistrationId::new(id),
            first_name,
            last_name,
            email,
            phone,
            company,
            resource: ResourceRef::parse(&space_id),
            space_name,
            membership_type,
            start_date,
            additional_info,
            selected_seat: selected_seat.map(SeatId::from),
            submitted_at,
        }
    }
}

impl From<Registration> for RegistrationRow {
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
            id: registration_id.raw(),
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
