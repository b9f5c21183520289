pub mod id;
pub mod registration;
pub mod seat;
pub mod space;
