//! Routed pages

pub mod catalog;
pub mod home;
pub mod info;
