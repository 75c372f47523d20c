//! HTTP surface of the app catalog

pub mod handlers;
