//! image-to-code
//!
//! Converts images into RGB565 firmware assets: raw `.bin` blobs or Arduino
//! headers declaring a `PROGMEM` byte array. The pixel pipeline lives in the
//! `rgb565-codec` crate; this library adds ingestion, the session state
//! machine, artifact sinks, preferences and the HTTP API, and exposes them
//! for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
