mod component;
pub mod config;
pub mod connector;
pub mod drag;
pub mod geometry;
pub mod placement;
pub mod scene;
pub mod viewport;

pub use component::BlockCanvas;
