pub mod booking;
pub mod kitchen;
pub mod staff;
