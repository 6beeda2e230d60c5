//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `root` is the layout every page renders inside. Each page owns its
//! route-scoped orchestration and delegates rendering details to
//! `components`.

pub mod drafts;
pub mod home;
pub mod login;
pub mod not_found;
pub mod register;
pub mod root;
