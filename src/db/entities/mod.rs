//! Database entities

pub mod user_vehicles;
