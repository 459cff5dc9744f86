//! # gradex API
//!
//! actix-web REST surface for the essay grader.

pub mod rest;

pub use rest::{PayloadLimit, RestApi, DEFAULT_MAX_ESSAY_BYTES};
