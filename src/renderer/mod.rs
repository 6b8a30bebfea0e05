//! Renderer Module
//!
//! Caching layer between define configurations and compiled shaders.

pub mod pipeline;

pub use pipeline::ShaderVariantCache;
