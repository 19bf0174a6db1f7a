pub mod appointments;
pub mod professionals;

#[cfg(test)]
pub mod mock;
