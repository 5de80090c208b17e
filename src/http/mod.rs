//! HTTP client module
//!
//! A thin typed-JSON GET client over reqwest. Requests carry the personal
//! API key headers on every call and consult the response cache before
//! touching the network. The API is GET-only and body-less, which is what
//! makes URL-keyed caching sound.

mod client;

pub use client::{ApiClient, ApiClientConfig};

#[cfg(test)]
mod tests;
