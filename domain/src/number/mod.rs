//! Number evaluation: value objects, the property catalogue and profiles.

pub mod profile;
pub mod property;
pub mod value_objects;
