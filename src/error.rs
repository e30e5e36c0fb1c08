use egui::Rect;
use thiserror::Error;

/// Errors the core can raise.
///
/// Out-of-range selection and removal requests are clamped to "no selection"
/// rather than propagated; the factory is the only component with a hard
/// failure mode, since it cannot satisfy its contract inside too-small bounds.
#[derive(Debug, Error)]
pub enum ShapeBoardError {
    /// The factory was asked to generate inside bounds that cannot fit a
    /// minimum-size shape.
    #[error("bounds {bounds:?} cannot fit a {min}x{min} shape")]
    InvalidBounds { bounds: Rect, min: f32 },

    /// A shape was constructed with a non-positive or non-finite stroke width.
    #[error("degenerate stroke width {width}")]
    DegenerateGeometry { width: f32 },
}
