//! DynamoDB storage backend implementation.
//!
//! Todos live in a single table whose partition key is the `todoId`
//! attribute; there is no sort key.

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
