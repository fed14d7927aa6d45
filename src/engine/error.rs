// ==========================================
// Sistema de Asignación de Bodega - allocation error types
// ==========================================
// Shortage (pending > 0) is NOT an error: it is a normal, reportable
// outcome carried by the product summary.
// ==========================================

use crate::domain::slot::SlotAddress;
use thiserror::Error;

/// Malformed input, rejected before allocation begins. No partial run:
/// the catalog is untouched when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("slot {address}: usable height {height} is negative or not finite")]
    InvalidUsableHeight { address: SlotAddress, height: f64 },

    #[error("duplicate slot address: {0}")]
    DuplicateSlotAddress(SlotAddress),

    #[error("product '{name}': required height {height} is negative or not finite")]
    InvalidRequiredHeight { name: String, height: f64 },

    #[error("product at index {index}: name is empty")]
    EmptyProductName { index: usize },
}

/// Allocation run errors.
#[derive(Error, Debug)]
pub enum AllocationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    // Indicates an allocator bug, never expected in correct operation:
    // the candidate filter only yields free slots.
    #[error("slot {address} is already assigned to '{occupant}'")]
    SlotUnavailable {
        address: SlotAddress,
        occupant: String,
    },

    #[error("unknown slot address: {0}")]
    UnknownSlot(SlotAddress),
}

/// Result alias for the engine layer.
pub type AllocationResult<T> = Result<T, AllocationError>;
