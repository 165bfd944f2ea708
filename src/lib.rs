/// Debug-level event logging, compiled out unless the `logging` feature is on.
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        #[cfg(feature = "logging")]
        {
            log::debug!($($arg)*);
        }
    }};
}
pub(crate) use debug_log;

pub mod board;
pub mod sync;

pub use board::{Color, Error, Move, Piece, Position, Square, Status};
pub use sync::SharedPosition;
