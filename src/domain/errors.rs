use derive_more::Display;

/// Everything that can stop a scene from being rendered.
///
/// All variants are raised before the first frame is produced; once a
/// [`SceneComposer`](crate::application::SceneComposer) exists, rendering a
/// finite frame cannot fail.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum SceneError {
    /// The scene JSON does not match the expected shape.
    #[display(fmt = "Schema Error: {} (line {}, column {})", message, line, column)]
    Schema {
        message: String,
        line: usize,
        column: usize,
    },
    /// A well-formed field carries a value the engine cannot animate.
    #[display(fmt = "Validation Error: `{}` {}", field, reason)]
    Validation { field: String, reason: String },
    /// Not enough price data to derive a scale.
    #[display(fmt = "Insufficient Data: {}", _0)]
    InsufficientData(String),
    /// Composition is smaller than the chart padding.
    #[display(fmt = "Invalid Dimensions: {}x{} leaves no drawable chart area", width, height)]
    InvalidDimensions { width: f64, height: f64 },
    /// Malformed interpolation ranges or spring parameters.
    #[display(fmt = "Animation Error: {}", _0)]
    Animation(String),
}

impl std::error::Error for SceneError {}

impl SceneError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation { field: field.into(), reason: reason.into() }
    }

    /// Dotted path of the offending field, when the error names one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SceneError {
    fn from(err: serde_json::Error) -> Self {
        Self::Schema { message: err.to_string(), line: err.line(), column: err.column() }
    }
}

pub type SceneResult<T> = Result<T, SceneError>;
