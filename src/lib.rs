//! Gatehouse - whitelisted static file server
//!
//! Core library for request handling, the public site and the listener.

pub mod config;
pub mod http;
pub mod server;
pub mod site;
