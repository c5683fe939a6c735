use thiserror::Error;

/// Why a mount produced no background. Never shown to the user.
#[derive(Debug, Error)]
pub enum MountError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id {0:?}")]
    CanvasNotFound(String),
    #[error("element {0:?} is not a <canvas>")]
    NotACanvas(String),
    #[error("canvas has no 2d context")]
    NoContext,
    #[error("could not register the resize listener")]
    Listener,
}
