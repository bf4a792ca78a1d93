#![cfg_attr(not(test), forbid(unsafe_code))]

//! Shared wire models and error types for the Present-Me super admin console.
//!
//! Everything the web client exchanges with the `sadmin` backend lives here:
//! the admin profile envelope, the institute review models, and the error
//! taxonomy surfaced by the API client.

pub mod models;
