//! Networking modules for the payment and admin endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls and `types` defines the wire schema the
//! backend relays from the payment gateway.

pub mod api;
pub mod types;
