//! Resource wrappers over `ApiClient`.
//!
//! Each wrapper owns its own `ApiClient` and maps named operations onto a
//! verb and a path template. Nothing is validated locally: ids and payloads
//! go to the server as given.

mod comments;
mod posts;
mod users;

pub use comments::CommentApi;
pub use posts::PostApi;
pub use users::UserApi;
