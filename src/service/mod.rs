//! Model layer: one service per resource over the safe SQL builder, plus request validation.

mod articles;
mod comments;
mod query;
mod topics;
mod users;
pub mod validation;

pub use articles::{ArticleFilter, ArticleService, ARTICLE_NOT_FOUND};
pub use comments::{CommentFilter, CommentService, COMMENT_NOT_FOUND};
pub use topics::TopicService;
pub use users::UserService;
