#![forbid(unsafe_code)]

//! Core decision logic for bladder-tumour risk stratification.
//!
//! This crate provides:
//! - Domain types (case descriptor, risk category)
//! - Risk classification rules
//! - Treatment recommendations
//! - Surveillance schedule generation
//! - Export serializers (plain-text report, iCalendar feed)
//!
//! Every operation is pure and synchronous: the caller supplies the case
//! fields and the anchor date and gets values back. Form rendering,
//! clipboard access and file I/O belong to the caller.

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod classify;
pub mod treatment;
pub mod schedule;
pub mod export;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use classify::classify;
pub use treatment::recommend;
pub use schedule::{generate_schedule, parse_anchor, surveillance_offsets};
pub use export::{calendar_feed, clipboard_summary, plain_text_report};
