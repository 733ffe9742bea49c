use thiserror::Error;
use vecpix_svg::LoadError;

/// Result type for scene construction.
pub type Result<T> = std::result::Result<T, SceneError>;

/// Fatal problems found while turning a document into a [`Scene`](crate::Scene).
///
/// Anything recoverable (unknown tags, missing attributes, unknown colors) is
/// absorbed by the builder and never shows up here.
#[derive(Error, Debug)]
pub enum SceneError {
    /// The document itself could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// A numeric attribute is present but not a number.
    #[error("<{tag}> attribute `{attr}`: expected a number, got {value:?}")]
    InvalidNumber { tag: String, attr: String, value: String },

    /// A `points` token is not an `x,y` pair.
    #[error("<{tag}> points: malformed coordinate pair {token:?}")]
    InvalidPoints { tag: &'static str, token: String },

    /// A polyline/polygon has fewer points than it can be drawn with.
    #[error("<{tag}> needs at least {min} points, got {got}")]
    TooFewPoints { tag: &'static str, min: usize, got: usize },

    /// A `transform` attribute could not be parsed.
    #[error("invalid transform {input:?}: {reason}")]
    InvalidTransform { input: String, reason: String },

    /// A `transform-origin` attribute is not two coordinates.
    #[error("invalid transform-origin {0:?}: expected two coordinates")]
    InvalidOrigin(String),

    /// The root `width`/`height` is missing, zero or not a number.
    #[error("canvas {attr} must be a positive integer, got {value:?}")]
    InvalidCanvas { attr: &'static str, value: String },
}
