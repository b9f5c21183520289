pub mod meeting_room;
pub mod registration;
pub mod space;
