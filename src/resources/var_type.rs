/// Declared type of a material parameter bound to a define slot.
///
/// Only [`VarType::Float`] affects how a define is rendered; every other type
/// is emitted as an integer literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarType {
    Float,
    Vector2,
    Vector3,
    Vector4,
    Int,
    Boolean,
    Matrix3,
    Matrix4,
    Texture2D,
    TextureCubeMap,
}

impl VarType {
    /// GLSL type keyword for this variable type.
    #[must_use]
    pub const fn glsl_name(self) -> &'static str {
        match self {
            Self::Float => "float",
            Self::Vector2 => "vec2",
            Self::Vector3 => "vec3",
            Self::Vector4 => "vec4",
            Self::Int => "int",
            Self::Boolean => "bool",
            Self::Matrix3 => "mat3",
            Self::Matrix4 => "mat4",
            Self::Texture2D => "sampler2D",
            Self::TextureCubeMap => "samplerCube",
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_texture(self) -> bool {
        matches!(self, Self::Texture2D | Self::TextureCubeMap)
    }
}
