//! Networking modules for HTTP calls to the storefront API.

pub mod api;
