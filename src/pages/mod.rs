//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is mounted by one entry of the route table and keeps its input
//! validation in plain functions next to the component.

pub mod login;
pub mod register;
pub mod submit_job;
