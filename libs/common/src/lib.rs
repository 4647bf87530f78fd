//! Common library for the RepayKaro client
//!
//! This crate provides shared functionality used by the client SDK and the
//! terminal front-end: local key-value persistence (the device-storage analog
//! of the mobile app) and error handling.

pub mod error;
pub mod storage;
