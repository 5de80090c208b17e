//! Cursor pagination
//!
//! Both list endpoints page backwards through time: each request carries a
//! `toWhen` timestamp (exclusive upper bound) and returns the newest items
//! older than it. The next cursor is the terminal item's ordering key from
//! the page just fetched.
//!
//! A page that ends on the same key as its predecessor would be requested
//! again verbatim. That is an upstream pagination bug, and the tracker
//! turns it into a typed error instead of looping forever.

mod cursor;

pub use cursor::{now_ms, CursorTracker};

#[cfg(test)]
mod tests;
