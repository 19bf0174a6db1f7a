pub mod appointments;
pub mod professionals;
