//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `toast`) and provided through Leptos
//! context, so pages read and write it without ambient globals.

pub mod auth;
pub mod toast;
