//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component owns exactly one concern's state: the theme toggle owns
//! the preference, the payment form its status line, the delete control its
//! own outcome.

pub mod delete_celebrity_button;
pub mod payment_form;
pub mod theme_toggle;
