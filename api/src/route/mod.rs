pub mod health;
pub mod meeting_room;
pub mod registration;
pub mod space;
pub mod v1;
