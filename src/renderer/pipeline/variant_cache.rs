//! Shader Variant Cache
//!
//! Deduplicates compiled shader variants by their [`DefineList`].
//!
//! Lookups hash only the define fingerprint (see [`DefineList::hash_code`]),
//! so bucket selection costs a couple of integer ops; collisions fall back to
//! the full value comparison in `DefineList::eq`.
//!
//! Keys are deep-cloned on insertion and never handed out mutably, so callers
//! are free to keep mutating the list they used for the lookup.

use rustc_hash::FxHashMap;

use crate::errors::DefineError;
use crate::resources::{DefineList, VarType};

/// Cache of compiled shader variants keyed by define configuration.
pub struct ShaderVariantCache<T> {
    variants: FxHashMap<DefineList, T>,
    hits: u64,
    misses: u64,
}

impl<T> Default for ShaderVariantCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ShaderVariantCache<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            variants: FxHashMap::default(),
            hits: 0,
            misses: 0,
        }
    }

    /// Looks up a variant without touching the hit/miss counters.
    #[inline]
    #[must_use]
    pub fn get(&self, defines: &DefineList) -> Option<&T> {
        self.variants.get(defines)
    }

    /// Returns the variant for `defines`, compiling it on a miss.
    ///
    /// On a miss the define source is generated from `names`/`types`, logged
    /// at debug level, and passed to `compile`. Nothing is inserted if source
    /// generation or compilation fails.
    pub fn get_or_try_insert_with<S, E, F>(
        &mut self,
        defines: &DefineList,
        names: &[S],
        types: Option<&[VarType]>,
        compile: F,
    ) -> Result<&T, E>
    where
        S: AsRef<str>,
        E: From<DefineError>,
        F: FnOnce(&str) -> Result<T, E>,
    {
        if self.variants.contains_key(defines) {
            self.hits += 1;
            log::trace!(
                "Shader variant cache hit (hash: {:#010x})",
                defines.hash_code()
            );
            // Checked above.
            return Ok(&self.variants[defines]);
        }

        self.misses += 1;
        let source = defines.to_source(names, types)?;
        log::debug!(
            "Compiling shader variant (hash: {:#010x}, {} defines):\n{}",
            defines.hash_code(),
            defines.active_count(),
            source
        );

        let variant = compile(&source)?;
        Ok(self.variants.entry(defines.deep_clone()).or_insert(variant))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    #[inline]
    #[must_use]
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Drops every cached variant and resets the counters.
    pub fn clear(&mut self) {
        log::debug!("Clearing {} shader variants", self.variants.len());
        self.variants.clear();
        self.hits = 0;
        self.misses = 0;
    }
}
