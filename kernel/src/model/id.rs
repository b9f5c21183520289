use serde::{Deserialize, Serialize};

/// Tag prepended to meeting-room IDs wherever both resource kinds share one
/// identifier space (the registration form's selection list, the ledger's
/// `space_id` column).
pub const MEETING_ROOM_PREFIX: &str = "mr_";

macro_rules! define_id {
    ($id_type:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $id_type(String);

        impl $id_type {
            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl From<String> for $id_type {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $id_type {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl std::fmt::Display for $id_type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

define_id!(SpaceId);
define_id!(RoomId);

/// Sequential ledger position, assigned as `ledger_len + 1` on append.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistrationId(i64);

impl RegistrationId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn raw(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for RegistrationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Composite seat key `"{row}-{col}"`, unique within its owning space.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatId(String);

impl SeatId {
    pub fn new(row: u32, col: u32) -> Self {
        Self(format!("{row}-{col}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SeatId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SeatId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Kind-qualified reference to a bookable resource. The `mr_` wire prefix is
/// parsed exactly once, at the boundary; everything below works on this enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceRef {
    CoworkingSpace(SpaceId),
    MeetingRoom(RoomId),
}

impl ResourceRef {
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix(MEETING_ROOM_PREFIX) {
            Some(id) => Self::MeetingRoom(RoomId::from(id)),
            None => Self::CoworkingSpace(SpaceId::from(raw)),
        }
    }

    /// The identifier as it appears in the combined selection list and in
    /// persisted ledger records.
    pub fn qualified(&self) -> String {
        match self {
            Self::CoworkingSpace(id) => id.to_string(),
            Self::MeetingRoom(id) => format!("{MEETING_ROOM_PREFIX}{id}"),
        }
    }

    pub fn is_meeting_room(&self) -> bool {
        matches!(self, Self::MeetingRoom(_))
    }
}

impl std::fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.qualified())
    }
}
