//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render layout chrome and list items while reading shared state
//! from the auth and notification context providers.

pub mod draft_card;
pub mod navbar;
pub mod toaster;
