//! Dataset loading entry points.

pub mod loaders;

pub use loaders::{DatasetLoadResult, DatasetLoader};
