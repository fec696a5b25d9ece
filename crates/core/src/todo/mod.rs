mod operations;
mod requests;
mod types;

pub use operations::attachment_url;
pub use requests::{CreateTodoRequest, UpdateTodoRequest};
pub use types::Todo;
