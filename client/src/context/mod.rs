//! Context providers shared across the component tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` wraps the identity provider and exposes session state plus the
//! sign-in/out operations; `notify` exposes toast triggers. Both are `Copy`
//! handles around signals so components can move them into closures freely.

pub mod auth;
pub mod notify;
