//! Plain state structs held in Leptos signals.
//!
//! DESIGN
//! ======
//! State types carry no signals themselves so their transitions can be unit
//! tested without a reactive owner.

pub mod auth;
pub mod toast;
