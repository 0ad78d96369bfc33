//! HTTP handlers for the group resource.

pub mod group;
pub use group::*;
