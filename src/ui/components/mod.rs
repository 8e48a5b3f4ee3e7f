//! UI components library

pub mod graph;

pub use graph::{GraphPathBuilder, RenderOutput};
