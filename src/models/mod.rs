//! Row and request types for the four resources.

pub mod article;
pub mod comment;
pub mod topic;
pub mod user;

pub use article::{Article, ArticleDetail, ArticleSummary, NewArticle};
pub use comment::{Comment, NewComment};
pub use topic::Topic;
pub use user::User;
