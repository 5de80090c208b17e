//! Resume state persistence
//!
//! A single JSON record holding the last successfully processed content
//! cursor. Saved after every exported page, so a killed run resumes from
//! the most recent page boundary instead of the beginning.

mod store;

pub use store::StateStore;

#[cfg(test)]
mod tests;
