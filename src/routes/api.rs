//! Resource routes under `/api`. Every path answers unsupported methods with 405.

use crate::handlers::fallback::method_not_allowed;
use crate::handlers::{api_root, articles, comments, topics, users};
use crate::state::AppState;
use axum::{
    routing::{get, patch},
    Router,
};

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(api_root).fallback(method_not_allowed))
        .route("/topics", get(topics::list).fallback(method_not_allowed))
        .route(
            "/articles",
            get(articles::list)
                .post(articles::create)
                .fallback(method_not_allowed),
        )
        .route(
            "/articles/:article_id",
            get(articles::read)
                .patch(articles::update_votes)
                .delete(articles::delete)
                .fallback(method_not_allowed),
        )
        .route(
            "/articles/:article_id/comments",
            get(comments::list_for_article)
                .post(comments::create)
                .fallback(method_not_allowed),
        )
        .route(
            "/comments/:comment_id",
            patch(comments::update_votes)
                .delete(comments::delete)
                .fallback(method_not_allowed),
        )
        .route("/users", get(users::list).fallback(method_not_allowed))
        .route("/users/:username", get(users::read).fallback(method_not_allowed))
}
