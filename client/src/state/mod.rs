//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`ui`, `payment`, `deletion`) so each component
//! owns one focused model and no two components write the same signal.

pub mod deletion;
pub mod payment;
pub mod ui;
