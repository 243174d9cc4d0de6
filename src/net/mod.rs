//! Networking modules for the image-job backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls pages make; `types` defines the JSON bodies.
//! The session core never calls the network itself.

pub mod api;
pub mod types;
