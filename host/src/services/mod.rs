//! HTTP surface of the host: the console's runtime configuration and the
//! embedded console bundle itself. Contacts and campaigns are served by the
//! backend API, never by this process.

pub mod assets;
pub mod console;
