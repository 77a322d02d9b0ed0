//! Data models for the albums service.

pub mod album;

pub use album::{AlbumCollection, AlbumRecord};
