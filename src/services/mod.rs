//! External Services
//!
//! This module contains services that run beside the UI loop:
//! - export: Share-card rasterization and file saving

pub mod export;

// Re-export commonly used types for convenience
pub use export::{spawn_export_service, ExportRequest, ExportResponse};
