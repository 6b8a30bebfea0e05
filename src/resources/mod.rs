//! Resource Module
//!
//! Shader permutation keys and the type tags that describe their slots.
//!
//! - [`DefineList`]: fixed-capacity define table with a fingerprint hash
//! - [`VarType`]: declared type of the parameter bound to each slot

pub mod define_list;
pub mod var_type;

pub use define_list::{DefineList, MAX_DEFINES, SAVABLE_VERSION};
pub use var_type::VarType;
