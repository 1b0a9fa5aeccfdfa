//! Data ingestion
//!
//! A blocking client for the public FPL API and typed views of its payloads.

pub mod client;
pub mod models;

pub use client::FplClient;
