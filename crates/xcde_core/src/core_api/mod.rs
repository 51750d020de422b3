mod error;
mod image;
mod types;

pub use error::{CoreError, CoreErrorCode};
pub use image::{SaveImage, path_with_suffix};
pub use types::{ArtEntry, LevelBatchReport, MemberEntry, MemberFailure};
