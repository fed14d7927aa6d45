// ==========================================
// Sistema de Asignación de Bodega - Assignment records
// ==========================================
// One Assignment per unit placed: exactly one slot, exactly one product.
// Immutable once emitted; the run report owns the full set.
// ==========================================

use crate::domain::product::ProductSummary;
use crate::domain::slot::{Slot, SlotAddress};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// Assignment - single unit-to-slot placement
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub product_name: String,
    pub address: SlotAddress,
    pub usable_height: f64, // height of the consumed slot, echoed for the audit table
}

impl Assignment {
    pub fn new(product_name: impl Into<String>, slot: &Slot) -> Self {
        Self {
            product_name: product_name.into(),
            address: slot.address.clone(),
            usable_height: slot.usable_height,
        }
    }
}

// ==========================================
// AllocationReport - auditable run output
// ==========================================
// The three result tables of a run: assignments, product summaries and
// (via the catalog held by the caller) final slot states. Never mutated
// after the allocator returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub assignments: Vec<Assignment>,
    pub summaries: Vec<ProductSummary>,
}

impl AllocationReport {
    pub fn new(assignments: Vec<Assignment>, summaries: Vec<ProductSummary>) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            assignments,
            summaries,
        }
    }

    /// Total units placed across all products.
    pub fn total_assigned(&self) -> usize {
        self.assignments.len()
    }

    /// Total units that found no slot.
    pub fn total_pending(&self) -> u32 {
        self.summaries.iter().map(|s| s.pending).sum()
    }
}
