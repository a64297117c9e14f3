// src/api/handlers/mod.rs
pub mod generator;
pub mod education;
pub mod system;
