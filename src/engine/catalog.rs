// ==========================================
// Sistema de Asignación de Bodega - slot catalog
// ==========================================
// In-memory slot inventory with mutable availability state. Insertion
// order is stable and observable: it is the final tie-breaker of the
// ordering policy, so the catalog never reorders its slots.
// ==========================================
// Only the allocator mutates availability during a run, exclusively
// through `mark_assigned`.
// ==========================================

use crate::domain::slot::{Slot, SlotAddress, SlotState};
use crate::engine::error::{AllocationError, AllocationResult};
use std::collections::HashMap;

// ==========================================
// SlotCatalog
// ==========================================
#[derive(Debug, Clone)]
pub struct SlotCatalog {
    slots: Vec<Slot>,
    // Identifier-based lookup over the composite address, replacing the
    // positional row-index mutation of the source sheets.
    index: HashMap<SlotAddress, usize>,
}

impl SlotCatalog {
    /// Build a catalog from slots in load order. Addresses are expected
    /// to be unique; duplicates are rejected by input validation before
    /// a catalog is built.
    pub fn new(slots: Vec<Slot>) -> Self {
        let index = slots
            .iter()
            .enumerate()
            .map(|(i, slot)| (slot.address.clone(), i))
            .collect();
        Self { slots, index }
    }

    /// Candidate slots for a product: free AND tall enough. Returns
    /// catalog indices in insertion order; no side effects.
    pub fn available_for(&self, required_height: f64) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_available() && slot.fits(required_height))
            .map(|(i, _)| i)
            .collect()
    }

    /// Consume a slot for a product: Free -> Assigned, one way.
    ///
    /// Returns `SlotUnavailable` if the slot is already assigned. The
    /// candidate filter only yields free slots, so hitting that arm
    /// means an allocator bug, not a data problem.
    pub fn mark_assigned(
        &mut self,
        address: &SlotAddress,
        product: &str,
    ) -> AllocationResult<()> {
        let idx = *self
            .index
            .get(address)
            .ok_or_else(|| AllocationError::UnknownSlot(address.clone()))?;
        let slot = &mut self.slots[idx];

        match &slot.state {
            SlotState::Free => {
                slot.state = SlotState::Assigned {
                    product: product.to_string(),
                };
                Ok(())
            }
            SlotState::Assigned { product: occupant } => Err(AllocationError::SlotUnavailable {
                address: address.clone(),
                occupant: occupant.clone(),
            }),
        }
    }

    pub fn slot(&self, index: usize) -> &Slot {
        &self.slots[index]
    }

    /// Final slot states, in load order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn available_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_available()).count()
    }
}
