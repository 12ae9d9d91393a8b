/// State management module
///
/// This module handles all window state:
/// - Display slots owning their decoded thumbnails (slot.rs)
/// - The board of four slots and its randomize actions (board.rs)

pub mod board;
pub mod slot;

pub use board::Board;
pub use slot::{DisplaySlot, SlotImage, SlotKind};
