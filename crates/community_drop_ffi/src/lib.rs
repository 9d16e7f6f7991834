//! Flutter-facing bindings for the Community Drop core.

pub mod api;
