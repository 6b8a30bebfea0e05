//! Pipeline Module
//!
//! Shader variant deduplication:
//! - ShaderVariantCache: compiled variants keyed by `DefineList`

pub mod variant_cache;

pub use variant_cache::ShaderVariantCache;
