pub mod board;
pub mod column;
pub mod status;
pub mod task;

pub use board::{Board, BoardConfig, Promotion};
pub use column::Column;
pub use status::Status;
pub use task::Task;
