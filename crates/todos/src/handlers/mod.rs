pub mod attachments;
pub mod error;
pub mod fallback;
pub mod guard;
pub mod health;
pub mod response;
pub mod todos;
