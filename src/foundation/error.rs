/// Convenience result type used across pitchglow.
pub type GlowResult<T> = Result<T, GlowError>;

/// Top-level error taxonomy.
///
/// Every failure is fatal to the run; there is no retry or recovery anywhere
/// in the pipeline. The taxonomy exists so callers can name what went wrong,
/// not so they can route around it.
#[derive(thiserror::Error, Debug)]
pub enum GlowError {
    /// Invalid user-provided configuration (theme, canvas, annotations).
    #[error("validation error: {0}")]
    Validation(String),

    /// Event data is missing or malformed.
    #[error("event data error: {0}")]
    Data(String),

    /// The requested team does not appear in the event data.
    #[error("team \"{team}\" not present in events (teams: {available:?})")]
    UnknownTeam {
        /// Team name that was requested.
        team: String,
        /// Team names actually present, in order of first appearance.
        available: Vec<String>,
    },

    /// Filtering produced zero completed passes.
    #[error("no completed passes for team \"{team}\"")]
    EmptySelection {
        /// Team name the filter ran for.
        team: String,
    },

    /// Errors while rasterizing or reading back a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlowError {
    /// Build a [`GlowError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GlowError::Data`] value.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    /// Build a [`GlowError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`GlowError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
