// src/core/mod.rs

pub mod engine;
pub mod normalize;
pub mod scorer;
pub mod types;
pub mod wordlists;
