pub mod api;
pub mod bookings;
pub mod health;
pub mod pages;
pub mod session;
