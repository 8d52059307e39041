pub mod config;
pub mod constants;
pub mod draw;
pub mod engine;
pub mod geometry;
pub mod hover;
pub mod pools;
pub mod popup;
pub mod rain;
pub mod section;
pub mod tension;

pub use config::*;
pub use draw::*;
pub use engine::*;
pub use geometry::*;
pub use pools::*;
pub use section::*;
