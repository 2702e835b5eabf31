//! Pure domain logic for the Obramap platform.
//!
//! This crate has no database or HTTP dependencies so it can be used by the
//! repository layer, the API, and the ingestion job alike.

pub mod dedupe;
pub mod error;
pub mod extract;
pub mod moderation;
pub mod policy;
pub mod status;
pub mod types;
