use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Too many mines")]
    TooManyMines,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Surface of {width}x{height} pixels is too small to lay out the board")]
    SurfaceTooSmall { width: u32, height: u32 },
}

pub type Result<T> = core::result::Result<T, GameError>;
