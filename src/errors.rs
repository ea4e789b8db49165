//! Error types with diagnostic metadata using miette
//!
//! Invalid geometry is not an error: a polygon that cannot be filled yet is
//! reported through [`DrawStatus`](crate::DrawStatus).

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Renderer Errors
// ============================================================================

/// Errors raised by a [`Renderer`](crate::Renderer) implementation
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("render surface is not ready")]
    #[diagnostic(
        code(scenery::render::surface_not_ready),
        help("the target surface must exist before a frame can begin")
    )]
    SurfaceNotReady,

    #[error("end_frame called without a matching begin_frame")]
    #[diagnostic(code(scenery::render::frame_not_begun))]
    FrameNotBegun,

    #[error("begin_frame called while a frame is already in progress")]
    #[diagnostic(code(scenery::render::frame_in_progress))]
    FrameInProgress,

    #[error("backend failure: {message}")]
    #[diagnostic(code(scenery::render::backend))]
    Backend { message: String },

    #[error("injected failure in {call}")]
    #[diagnostic(
        code(scenery::render::injected),
        help("failure injection is configured on the recording renderer")
    )]
    Injected { call: &'static str },
}

impl RenderError {
    /// Shorthand for a [`RenderError::Backend`] with a message
    pub fn backend(message: impl Into<String>) -> Self {
        RenderError::Backend {
            message: message.into(),
        }
    }
}

// ============================================================================
// Scene Errors
// ============================================================================

/// Errors that occur while editing or drawing a [`Scene`](crate::Scene)
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("shape index {index} out of bounds (scene holds {len} shapes)")]
    #[diagnostic(
        code(scenery::scene::index_out_of_bounds),
        help("shape indices are zero-based and must be smaller than the scene length")
    )]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("could not begin frame")]
    #[diagnostic(code(scenery::scene::begin_frame))]
    BeginFrame(#[source] RenderError),

    #[error("could not clear to the background color")]
    #[diagnostic(code(scenery::scene::clear))]
    Clear(#[source] RenderError),

    #[error("drawing shape {index} failed")]
    #[diagnostic(code(scenery::scene::draw))]
    Draw {
        index: usize,
        #[source]
        source: RenderError,
    },

    #[error("could not end frame")]
    #[diagnostic(code(scenery::scene::end_frame))]
    EndFrame(#[source] RenderError),
}

// ============================================================================
// Parse Errors
// ============================================================================

/// Errors from parsing a [`Color`](crate::Color) out of a string
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("empty color string")]
    #[diagnostic(code(scenery::color::empty))]
    Empty,

    #[error("invalid hex color: {input}")]
    #[diagnostic(
        code(scenery::color::invalid_hex),
        help("use #RRGGBB, #AARRGGBB or 0xAARRGGBB")
    )]
    InvalidHex { input: String },

    #[error("unknown color name: {input}")]
    #[diagnostic(code(scenery::color::unknown_name))]
    UnknownName { input: String },
}
