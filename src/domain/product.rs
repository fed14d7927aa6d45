// ==========================================
// Sistema de Asignación de Bodega - Product domain model
// ==========================================
// A product is a lot of identical units to be placed. Input fields come
// from the product sheet; outcome fields are written once by the
// allocator and never mutated afterwards.
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Product - catalog entry to allocate
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,            // Producto: assumed unique within a run
    pub required_height: f64,    // Altura
    pub requested_quantity: u32, // Existencia: units to place
}

impl Product {
    pub fn new(name: impl Into<String>, required_height: f64, requested_quantity: u32) -> Self {
        Self {
            name: name.into(),
            required_height,
            requested_quantity,
        }
    }
}

// ==========================================
// ProductSummary - per-product fulfillment outcome
// ==========================================
// Projection over the assignment list; display strings are
// distinct-sorted, comma-joined (matching the source sheets).
// Invariant: fulfilled + pending == requested_quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub name: String,
    pub required_height: f64,
    pub requested_quantity: u32,
    pub fulfilled: u32,
    pub pending: u32,
    pub heights_used: String, // e.g. "8, 10.5"
    pub levels_used: String,  // e.g. "1, 2"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub racks_used: Option<String>, // only when the profile tracks racks
}

impl ProductSummary {
    /// True when every requested unit found a slot.
    pub fn is_fully_placed(&self) -> bool {
        self.pending == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fully_placed() {
        let summary = ProductSummary {
            name: "Caja A".to_string(),
            required_height: 8.0,
            requested_quantity: 3,
            fulfilled: 3,
            pending: 0,
            heights_used: "8, 9".to_string(),
            levels_used: "1".to_string(),
            racks_used: None,
        };
        assert!(summary.is_fully_placed());
        assert_eq!(summary.fulfilled + summary.pending, summary.requested_quantity);
    }
}
