//! Domain layer for haul-bid
//!
//! Pure models and services: no I/O happens below this crate.

pub mod export;
pub mod model;
pub mod service;
