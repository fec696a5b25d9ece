//! Functional core for the todos service.
//!
//! Pure data types, validation and the storage/attachment contracts. Nothing
//! in this crate performs I/O; concrete backends live in the `todos` crate.

pub mod attachments;
pub mod storage;
pub mod todo;
