//! In-memory storage backend for testing.
//!
//! This module provides an in-memory implementation of [`TodoRepository`]
//! that keeps todos in a HashMap wrapped in `Arc<RwLock<_>>`. Data is not
//! persisted and is lost when the process exits.
//!
//! [`TodoRepository`]: todos_core::storage::TodoRepository
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
