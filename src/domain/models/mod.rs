pub mod booking;
pub mod contact;
pub mod corporate_booking;
pub mod newsletter;
pub mod package;
