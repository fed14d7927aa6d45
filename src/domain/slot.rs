// ==========================================
// Sistema de Asignación de Bodega - Slot domain model
// ==========================================
// A slot is a physical storage location identified by its composite
// address (rack/level/row/position). Availability is a tagged two-state
// field, not a raw boolean: an assigned slot always carries the product
// that consumed it.
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// SlotAddress - composite physical address
// ==========================================
// Identity key of a slot within the catalog. The rack dimension is
// optional: single-rack warehouses omit the column entirely.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotAddress {
    pub rack: Option<String>, // rack code, e.g. "R01" (None for single-rack layouts)
    pub level: u32,           // Nivel
    pub row: u32,             // Fila
    pub position: u32,        // Posición
}

impl SlotAddress {
    pub fn new(rack: Option<String>, level: u32, row: u32, position: u32) -> Self {
        Self {
            rack,
            level,
            row,
            position,
        }
    }
}

impl fmt::Display for SlotAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.rack {
            Some(rack) => write!(
                f,
                "{}/N{}-F{}-P{}",
                rack, self.level, self.row, self.position
            ),
            None => write!(f, "N{}-F{}-P{}", self.level, self.row, self.position),
        }
    }
}

// ==========================================
// SlotState - availability as a tagged state
// ==========================================
// One-way transition per run: Free -> Assigned, at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlotState {
    Free,
    Assigned { product: String },
}

impl SlotState {
    pub fn is_free(&self) -> bool {
        matches!(self, SlotState::Free)
    }

    /// Product currently occupying the slot, if any.
    pub fn assigned_product(&self) -> Option<&str> {
        match self {
            SlotState::Free => None,
            SlotState::Assigned { product } => Some(product.as_str()),
        }
    }
}

impl fmt::Display for SlotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotState::Free => write!(f, "FREE"),
            SlotState::Assigned { product } => write!(f, "ASSIGNED:{}", product),
        }
    }
}

// ==========================================
// Slot - storage location
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub address: SlotAddress,
    pub usable_height: f64, // Altura_útil: max product height the slot can hold
    pub state: SlotState,
}

impl Slot {
    pub fn new(address: SlotAddress, usable_height: f64) -> Self {
        Self {
            address,
            usable_height,
            state: SlotState::Free,
        }
    }

    /// A slot occupied on load (Disponible = false in the source sheet)
    /// without a known product reference.
    pub fn new_occupied(address: SlotAddress, usable_height: f64, product: Option<String>) -> Self {
        Self {
            address,
            usable_height,
            state: SlotState::Assigned {
                product: product.unwrap_or_default(),
            },
        }
    }

    pub fn is_available(&self) -> bool {
        self.state.is_free()
    }

    /// Height constraint check: the product fits if the usable height
    /// meets or exceeds its required height.
    pub fn fits(&self, required_height: f64) -> bool {
        self.usable_height >= required_height
    }

    /// Fit tightness: slack left over once the product is placed.
    /// Only meaningful when `fits` holds.
    pub fn slack(&self, required_height: f64) -> f64 {
        self.usable_height - required_height
    }
}

// ==========================================
// Tests
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    fn addr(level: u32, row: u32, position: u32) -> SlotAddress {
        SlotAddress::new(None, level, row, position)
    }

    #[test]
    fn test_slot_fits_boundary() {
        let slot = Slot::new(addr(1, 1, 1), 10.0);
        assert!(slot.fits(10.0), "exact height must fit");
        assert!(slot.fits(0.0), "zero-height product fits everywhere");
        assert!(!slot.fits(10.1));
    }

    #[test]
    fn test_slot_slack() {
        let slot = Slot::new(addr(1, 1, 1), 12.0);
        assert_eq!(slot.slack(7.0), 5.0);
    }

    #[test]
    fn test_slot_state_display_and_product() {
        let free = SlotState::Free;
        assert!(free.is_free());
        assert_eq!(free.assigned_product(), None);

        let taken = SlotState::Assigned {
            product: "Caja A".to_string(),
        };
        assert!(!taken.is_free());
        assert_eq!(taken.assigned_product(), Some("Caja A"));
        assert_eq!(taken.to_string(), "ASSIGNED:Caja A");
    }

    #[test]
    fn test_address_display_with_and_without_rack() {
        let with_rack = SlotAddress::new(Some("R03".to_string()), 2, 4, 1);
        assert_eq!(with_rack.to_string(), "R03/N2-F4-P1");

        let without = addr(2, 4, 1);
        assert_eq!(without.to_string(), "N2-F4-P1");
    }
}
