//! # Jira API Endpoints
//!
//! Organized endpoint implementations for the resource groups the bridge
//! touches: issue operations and development-information ingestion.

pub mod devinfo;
pub mod issues;
