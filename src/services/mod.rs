pub mod booking_store;
pub mod export;
pub mod sessions;
pub mod trend;
