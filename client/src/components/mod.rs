//! Reusable UI component modules.

pub mod toaster;
