//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State structs are plain data with methods; `App` wraps them in `RwSignal`
//! and provides them as context so components stay testable without a
//! reactive runtime.

pub mod session;
