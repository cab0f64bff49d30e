//! Shared fixtures for the cucumber suite

pub mod world;
