//! FFI crate exposing Wellnote core use-cases to the mobile host.

pub mod api;
