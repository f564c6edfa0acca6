//! Integration tests against engine-shaped sample data

pub mod e2e;
pub mod fixtures;
