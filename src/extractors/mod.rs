//! Request extractors whose rejections go through `AppError`, so every failure renders as `{msg}`.

mod id;
mod json;

pub use id::ResourceId;
pub use json::{ApiJson, ApiQuery};
