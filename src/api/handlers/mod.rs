//! API request handlers.

/// Catalog category listing.
pub mod categories;
/// Chatbot delegation.
pub mod chatbot;
