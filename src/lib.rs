#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod errors;
pub mod renderer;
pub mod resources;

pub use errors::{DefineError, Result};
pub use renderer::ShaderVariantCache;
pub use resources::{DefineList, MAX_DEFINES, SAVABLE_VERSION, VarType};
