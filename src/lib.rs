//! # memex-export
//!
//! One-way exporter mirroring a Memex account (bookmarks, spaces, and
//! annotations) to local disk as JSON records and cross-linked Markdown
//! notes. Batch sync with incremental resume, not a service.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                        SyncEngine                         │
//! │  spaces pages → space list → content pages → export loop  │
//! └───────────────────────────────────────────────────────────┘
//!          │               │                │
//!   ┌──────┴─────┐  ┌──────┴──────┐  ┌──────┴───────┐
//!   │ pagination │  │ http + cache│  │ export/state │
//!   ├────────────┤  ├─────────────┤  ├──────────────┤
//!   │ toWhen     │  │ GET + keys  │  │ JSON records │
//!   │ cursor,    │  │ URL-keyed   │  │ Markdown     │
//!   │ progress   │  │ disk cache  │  │ notes,       │
//!   │ guard      │  │             │  │ state.json   │
//!   └────────────┘  └─────────────┘  └──────────────┘
//! ```
//!
//! One outstanding request at a time: the run is a single logical stream
//! of work, resumable via the state file rather than cancellable.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Wire types for the personal API
pub mod types;

/// Run configuration
pub mod config;

/// HTTP client
pub mod http;

/// Response caching
pub mod cache;

/// Cursor pagination
pub mod pagination;

/// Resume state persistence
pub mod state;

/// JSON and Markdown exporters
pub mod export;

/// Sync engine
pub mod engine;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::Config;
pub use engine::{SyncEngine, SyncStats};
pub use error::{Error, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
