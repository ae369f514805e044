//! Flutter bridge crate for the Boardroom builder core.

pub mod api;
