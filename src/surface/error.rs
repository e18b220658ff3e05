//! Render surface errors.

/// Errors that can occur while drawing to or polling a surface.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal is too small: {cols}x{rows}")]
    TooSmall { cols: u16, rows: u16 },
}
