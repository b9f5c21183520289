pub mod registration;
pub mod space;
