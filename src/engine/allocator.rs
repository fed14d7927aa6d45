// ==========================================
// Sistema de Asignación de Bodega - allocation engine
// ==========================================
// Greedy best-fit assignment of product units to storage slots.
// Input: slot catalog + product queue (input order is allocation order)
// Output: assignment list + product summaries; catalog availability
//         mutated in place
// ==========================================
// Single deterministic pass, no rollback, no retry. A product that
// cannot be fully satisfied ends with pending > 0, which is a normal
// reportable outcome.
// ==========================================

use crate::domain::assignment::{AllocationReport, Assignment};
use crate::domain::product::Product;
use crate::engine::catalog::SlotCatalog;
use crate::engine::error::AllocationResult;
use crate::engine::ordering::MatchOrderingPolicy;
use crate::engine::summary::SummaryBuilder;
use crate::engine::validation::{validate_products, validate_slots};
use tracing::{debug, instrument};

// ==========================================
// Allocator
// ==========================================
pub struct Allocator {
    policy: MatchOrderingPolicy,
    summary_builder: SummaryBuilder,
}

impl Allocator {
    /// # Arguments
    /// - `policy`: slot ranking policy (fit tightness + locality keys)
    /// - `track_racks`: whether summaries aggregate the rack dimension
    pub fn new(policy: MatchOrderingPolicy, track_racks: bool) -> Self {
        Self {
            policy,
            summary_builder: SummaryBuilder::new(track_racks),
        }
    }

    /// Run one allocation pass.
    ///
    /// Steps per product, in input order:
    /// 1. Filter the catalog to free slots tall enough for the product.
    /// 2. Rank candidates with the ordering policy.
    /// 3. Walk the ranking, consuming slots until the requested quantity
    ///    is reached or candidates run out.
    ///
    /// Inputs are validated before any slot is touched; a validation
    /// failure leaves the catalog unchanged.
    #[instrument(skip(self, catalog, products), fields(
        slots = catalog.len(),
        products = products.len()
    ))]
    pub fn allocate(
        &self,
        catalog: &mut SlotCatalog,
        products: &[Product],
    ) -> AllocationResult<AllocationReport> {
        validate_slots(catalog.slots())?;
        validate_products(products)?;

        let mut assignments: Vec<Assignment> = Vec::new();

        for product in products {
            let candidates = catalog.available_for(product.required_height);
            let candidate_count = candidates.len();
            let ranked = self
                .policy
                .rank(product.required_height, catalog, candidates);

            let mut fulfilled: u32 = 0;
            for slot_index in ranked {
                if fulfilled >= product.requested_quantity {
                    break;
                }
                let address = catalog.slot(slot_index).address.clone();
                // The filter above only yields free slots; an error here
                // is an allocator bug and aborts the run.
                catalog.mark_assigned(&address, &product.name)?;
                assignments.push(Assignment::new(&product.name, catalog.slot(slot_index)));
                fulfilled += 1;
            }

            debug!(
                product = %product.name,
                requested = product.requested_quantity,
                candidates = candidate_count,
                fulfilled,
                pending = product.requested_quantity - fulfilled,
                "product pass complete"
            );
        }

        let summaries = self.summary_builder.build(products, &assignments);
        Ok(AllocationReport::new(assignments, summaries))
    }
}

impl Default for Allocator {
    fn default() -> Self {
        Self::new(MatchOrderingPolicy::default(), false)
    }
}
