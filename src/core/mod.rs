pub mod engine;
pub mod html;
pub mod naming;
pub mod pipeline;

pub use crate::domain::model::{ImageIndex, ImageRef, PlannedImage, SetIndex, SetResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
