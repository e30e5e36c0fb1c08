#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod document;
pub mod error;
pub mod geometry;
pub mod id_generator;
pub mod input;
pub mod renderer;
pub mod shape;

pub use app::ShapeBoardApp;
pub use document::Document;
pub use error::ShapeBoardError;
pub use geometry::{Path, StrokeStyle, Transform};
pub use input::InputEvent;
pub use renderer::{Renderer, ShapeDataSource};
pub use shape::{Shape, ShapeKind};
