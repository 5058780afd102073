//! Data models exchanged with the organization site backend.
//!
//! Wire names are camelCase to match the backend's JSON contract.

mod attachment;
pub mod description;
mod envelope;
mod event;
mod image;
mod member;
mod project;
mod tag;
pub mod timestamp;

pub use attachment::*;
pub use description::{Block, BlockDocument};
pub use envelope::*;
pub use event::*;
pub use image::*;
pub use member::*;
pub use project::*;
pub use tag::*;
