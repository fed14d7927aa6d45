// ==========================================
// Sistema de Asignación de Bodega - summary builder
// ==========================================
// Pure projection over the assignment list, grouped by product. Emits
// distinct-sorted sets of heights, levels and (when tracked) racks as
// comma-joined display strings. Never affects allocation.
// ==========================================

use crate::domain::assignment::Assignment;
use crate::domain::product::{Product, ProductSummary};

// ==========================================
// SummaryBuilder
// ==========================================
pub struct SummaryBuilder {
    // Rack aggregation only makes sense when the catalog carries racks;
    // the single-rack sheet variants leave it off.
    track_racks: bool,
}

impl SummaryBuilder {
    pub fn new(track_racks: bool) -> Self {
        Self { track_racks }
    }

    /// Build one summary per product, in product input order.
    ///
    /// Fulfilled counts are derived from the assignment list itself, so
    /// by construction `assignments per product == fulfilled` and
    /// `fulfilled + pending == requested_quantity`.
    pub fn build(&self, products: &[Product], assignments: &[Assignment]) -> Vec<ProductSummary> {
        products
            .iter()
            .map(|product| self.build_single(product, assignments))
            .collect()
    }

    fn build_single(&self, product: &Product, assignments: &[Assignment]) -> ProductSummary {
        let own: Vec<&Assignment> = assignments
            .iter()
            .filter(|a| a.product_name == product.name)
            .collect();

        let fulfilled = own.len() as u32;
        let pending = product.requested_quantity.saturating_sub(fulfilled);

        let heights_used = join_distinct_heights(own.iter().map(|a| a.usable_height));
        let levels_used = join_distinct_sorted(own.iter().map(|a| a.address.level));
        let racks_used = if self.track_racks {
            Some(join_distinct_sorted(
                own.iter().filter_map(|a| a.address.rack.clone()),
            ))
        } else {
            None
        };

        ProductSummary {
            name: product.name.clone(),
            required_height: product.required_height,
            requested_quantity: product.requested_quantity,
            fulfilled,
            pending,
            heights_used,
            levels_used,
            racks_used,
        }
    }
}

impl Default for SummaryBuilder {
    fn default() -> Self {
        Self::new(false)
    }
}

// ==========================================
// Display helpers
// ==========================================

/// Render a height without a trailing ".0" for whole numbers.
pub fn format_height(height: f64) -> String {
    if height.fract() == 0.0 {
        format!("{:.0}", height)
    } else {
        height.to_string()
    }
}

fn join_distinct_heights(heights: impl Iterator<Item = f64>) -> String {
    let mut values: Vec<f64> = heights.collect();
    values.sort_by(f64::total_cmp);
    values.dedup();
    values
        .into_iter()
        .map(format_height)
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_distinct_sorted<T: Ord + ToString>(values: impl Iterator<Item = T>) -> String {
    let mut values: Vec<T> = values.collect();
    values.sort();
    values.dedup();
    values
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
