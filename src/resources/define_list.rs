//! Shader Define List
//!
//! A compact, fixed-capacity shader permutation key.
//!
//! Every define slot is addressed by an id assigned by the material's
//! parameter registry. Slot values are stored as raw `i32`s (booleans as
//! `0`/`1`, floats as their IEEE-754 bit pattern) next to a 64-bit
//! fingerprint whose bit `i` is set exactly when slot `i` is non-zero.
//!
//! The fingerprint doubles as a presence mask and as the hash discriminant,
//! so two define lists that differ in which slots are active are rejected
//! without touching the value table.
//!
//! # Usage
//!
//! ```rust,ignore
//! use myth_defines::{DefineList, VarType};
//!
//! let mut defines = DefineList::new(3)?;
//! defines.set_bool(0, true)?;
//! defines.set_float(2, 2.5)?;
//!
//! let names = ["USE_FOG", "USE_SPEC", "EXP"];
//! let types = [VarType::Boolean, VarType::Int, VarType::Float];
//! let source = defines.to_source(&names, Some(&types))?;
//! assert_eq!(source, "#define USE_FOG 1\n#define EXP 2.5\n");
//! ```

use std::fmt::Write as _;
use std::hash::{Hash, Hasher};

use crate::errors::{DefineError, Result};
use crate::resources::var_type::VarType;

/// Maximum number of define slots a single list can address.
pub const MAX_DEFINES: usize = 64;

/// Schema version for external encoders of [`DefineList`].
///
/// The fingerprint is fully derived from the values, so an encoder only needs
/// to persist the capacity and the raw value table.
pub const SAVABLE_VERSION: u32 = 1;

/// Fixed-capacity table of shader define values.
///
/// All writes go through [`DefineList::set_int`], which keeps the fingerprint
/// in sync with the value table.
#[derive(Debug, Clone)]
pub struct DefineList {
    fingerprint: u64,
    values: Box<[i32]>,
}

impl DefineList {
    /// Creates a define list with `capacity` zeroed slots.
    ///
    /// Fails with [`DefineError::InvalidCapacity`] unless
    /// `0 <= capacity <= MAX_DEFINES`.
    pub fn new(capacity: i32) -> Result<Self> {
        let len = usize::try_from(capacity)
            .ok()
            .filter(|&len| len <= MAX_DEFINES)
            .ok_or(DefineError::InvalidCapacity {
                capacity,
                max: MAX_DEFINES,
            })?;

        Ok(Self {
            fingerprint: 0,
            values: vec![0; len].into_boxed_slice(),
        })
    }

    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    /// Presence mask of the non-zero slots.
    #[inline]
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Returns `true` when no slot is active.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fingerprint == 0
    }

    /// Number of active (non-zero) slots.
    #[inline]
    #[must_use]
    pub fn active_count(&self) -> u32 {
        self.fingerprint.count_ones()
    }

    #[inline]
    fn check_id(&self, id: usize) -> Result<()> {
        if id < self.values.len() {
            Ok(())
        } else {
            Err(DefineError::OutOfRange {
                id,
                capacity: self.values.len(),
            })
        }
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Stores a raw integer value and updates the fingerprint bit for `id`.
    pub fn set_int(&mut self, id: usize, value: i32) -> Result<()> {
        self.check_id(id)?;

        let bit = 1u64 << id;
        if value == 0 {
            self.fingerprint &= !bit;
        } else {
            self.fingerprint |= bit;
        }
        self.values[id] = value;
        Ok(())
    }

    /// Stores the bit pattern of `value`.
    ///
    /// Non-finite values are accepted here and rejected by
    /// [`DefineList::generate_source`] when the slot is typed as a float.
    #[inline]
    pub fn set_float(&mut self, id: usize, value: f32) -> Result<()> {
        self.set_int(id, value.to_bits().cast_signed())
    }

    #[inline]
    pub fn set_bool(&mut self, id: usize, value: bool) -> Result<()> {
        self.set_int(id, i32::from(value))
    }

    /// Copies every active slot of `other` into this list.
    ///
    /// Inactive slots of `other` leave the corresponding slots here untouched.
    /// Nothing is written if `other` has an active slot beyond this capacity.
    pub fn set_all(&mut self, other: &DefineList) -> Result<()> {
        let overflow = other
            .fingerprint
            .checked_shr(self.capacity() as u32)
            .unwrap_or(0);
        if overflow != 0 {
            return Err(DefineError::OutOfRange {
                id: self.capacity() + overflow.trailing_zeros() as usize,
                capacity: self.capacity(),
            });
        }

        for (id, value) in other.iter_active() {
            self.set_int(id, value)?;
        }
        Ok(())
    }

    /// Resets every slot to zero.
    pub fn clear(&mut self) {
        self.values.fill(0);
        self.fingerprint = 0;
    }

    // ========================================================================
    // Access
    // ========================================================================

    #[inline]
    pub fn get_int(&self, id: usize) -> Result<i32> {
        self.check_id(id)?;
        Ok(self.values[id])
    }

    #[inline]
    pub fn get_float(&self, id: usize) -> Result<f32> {
        self.get_int(id).map(|raw| f32::from_bits(raw.cast_unsigned()))
    }

    #[inline]
    pub fn get_bool(&self, id: usize) -> Result<bool> {
        self.get_int(id).map(|raw| raw != 0)
    }

    /// Whether slot `id` holds a non-zero value.
    #[inline]
    pub fn is_set(&self, id: usize) -> Result<bool> {
        self.check_id(id)?;
        Ok(self.fingerprint & (1u64 << id) != 0)
    }

    /// Iterates `(id, raw value)` for every active slot in ascending id order.
    pub fn iter_active(&self) -> impl Iterator<Item = (usize, i32)> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value != 0)
            .map(|(id, &value)| (id, value))
    }

    // ========================================================================
    // Equality & Hashing
    // ========================================================================

    /// 32-bit hash folded from the fingerprint.
    ///
    /// Suitable as a bucket key for a permutation cache. Equal lists always
    /// share a hash code; distinct lists may collide.
    #[inline]
    #[must_use]
    pub fn hash_code(&self) -> u32 {
        ((self.fingerprint >> 32) ^ self.fingerprint) as u32
    }

    /// Returns an independent copy with its own value table.
    #[inline]
    #[must_use]
    pub fn deep_clone(&self) -> Self {
        self.clone()
    }

    // ========================================================================
    // Source Generation
    // ========================================================================

    /// Appends one `#define NAME VALUE` line per active slot to `out`.
    ///
    /// Slots are emitted in ascending id order. When `types` is given and a
    /// slot is typed [`VarType::Float`], its value is written as a float
    /// literal; everything else is written as a signed decimal integer.
    ///
    /// On error `out` is restored to its length before the call.
    pub fn generate_source<S: AsRef<str>>(
        &self,
        out: &mut String,
        names: &[S],
        types: Option<&[VarType]>,
    ) -> Result<()> {
        let start = out.len();
        let result = self.write_defines(out, names, types);
        if result.is_err() {
            out.truncate(start);
        }
        result
    }

    /// Convenience wrapper returning the generated source as a new `String`.
    pub fn to_source<S: AsRef<str>>(&self, names: &[S], types: Option<&[VarType]>) -> Result<String> {
        let mut out = String::with_capacity(self.active_count() as usize * 32);
        self.write_defines(&mut out, names, types)?;
        Ok(out)
    }

    fn write_defines<S: AsRef<str>>(
        &self,
        out: &mut String,
        names: &[S],
        types: Option<&[VarType]>,
    ) -> Result<()> {
        for (index, raw) in self.iter_active() {
            let name = names
                .get(index)
                .ok_or(DefineError::MissingDefineName { index })?
                .as_ref();

            let is_float = match types {
                Some(types) => {
                    *types
                        .get(index)
                        .ok_or(DefineError::MissingDefineType { index })?
                        == VarType::Float
                }
                None => false,
            };

            // Writing into a String cannot fail.
            if is_float {
                let value = f32::from_bits(raw.cast_unsigned());
                if !value.is_finite() {
                    return Err(DefineError::InvalidFloatLiteral {
                        name: name.to_owned(),
                        index,
                    });
                }
                // Debug keeps a fractional part or exponent, so the literal
                // always parses as a float.
                let _ = writeln!(out, "#define {name} {value:?}");
            } else {
                let _ = writeln!(out, "#define {name} {raw}");
            }
        }
        Ok(())
    }
}

impl PartialEq for DefineList {
    fn eq(&self, other: &Self) -> bool {
        // Fingerprint is derived from the values, so a mismatch settles it.
        self.fingerprint == other.fingerprint && self.values == other.values
    }
}

impl Eq for DefineList {}

impl Hash for DefineList {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash_code());
    }
}
