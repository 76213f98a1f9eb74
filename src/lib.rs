//! SurfCheck Library
//!
//! Exposes the forecast engine, data providers, and CLI modules for use in
//! integration tests.

pub mod cache;
pub mod cli;
pub mod data;
pub mod direction;
pub mod engine;
pub mod render;
