//! Domain layer modules

pub mod animal;
