//! Error types for the model layer.

use crate::EquipmentSlotId;

/// Errors raised while building or editing a character record.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// A class name that is not in the class table.
    #[error("unknown class: {0}")]
    UnknownClass(String),

    /// A slot name that is not in the slot table.
    #[error("unknown equipment slot: {0}")]
    UnknownSlot(String),

    /// A level outside the game's level range.
    #[error("level {0} is outside 1..=230")]
    InvalidLevel(u16),

    /// A rune level outside the rune tier table.
    #[error("rune level {0} is outside 1..=11")]
    InvalidRuneLevel(u8),

    /// An operation on a slot that holds nothing.
    #[error("slot {0} is empty")]
    EmptySlot(EquipmentSlotId),

    /// A rune index past the last rune socket.
    #[error("rune socket {0} does not exist")]
    InvalidRuneSocket(usize),
}
