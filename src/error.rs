use std::backtrace::Backtrace;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors produced while decoding fufen puzzle notation.
///
/// The solving core never fails through this type: within a solve,
/// contradictions are values (a pruned branch, or a `Contradiction` outcome),
/// not errors. Everything here is a malformed-input precondition caught
/// before a solve state is ever constructed.
#[derive(Debug, thiserror::Error)]
pub enum NotationError {
    #[error("puzzle contains no cells")]
    EmptyGrid,
    #[error("grid is jagged: row {row} has {found} cells, expected {expected}")]
    JaggedGrid {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("grid is rectangular, not square: {width}x{height}")]
    NonSquareGrid { width: usize, height: usize },
    #[error("grid size {size} exceeds the supported maximum of {max}")]
    GridTooLarge { size: usize, max: usize },
    #[error("inequality outside of grid: ({low_row},{low_col}) < ({high_row},{high_col})")]
    InequalityOutsideGrid {
        low_row: isize,
        low_col: isize,
        high_row: isize,
        high_col: isize,
    },
    #[error("given value {value} is out of range for a {size}x{size} grid")]
    GivenOutOfRange { value: u8, size: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<NotationError>,
        backtrace: Box<Backtrace>,
    },
}

impl From<NotationError> for Error {
    fn from(inner: NotationError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}

impl Error {
    /// The notation error this wraps, without the captured backtrace.
    pub fn notation(&self) -> &NotationError {
        match self {
            Error::Inner { inner, .. } => inner,
        }
    }
}
