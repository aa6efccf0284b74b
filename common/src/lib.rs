//! Shared core of the outreach console: contact-file ingestion, message
//! template tokens, campaign composition, and the typed contract with the
//! backend API.

pub mod api;
pub mod config;
pub mod forms;
pub mod import;
pub mod model;
pub mod requests;
pub mod session;
pub mod template;
