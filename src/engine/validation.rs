// ==========================================
// Sistema de Asignación de Bodega - input validation
// ==========================================
// Runs before allocation: a single violation rejects the whole run, so
// the catalog is never left half-mutated over bad input.
// ==========================================

use crate::domain::product::Product;
use crate::domain::slot::Slot;
use crate::engine::error::ValidationError;
use std::collections::HashSet;

/// Validate the slot inventory.
///
/// Rules:
/// - usable height must be finite and >= 0
/// - composite addresses must be unique (identifier-based lookup depends on it)
pub fn validate_slots(slots: &[Slot]) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(slots.len());
    for slot in slots {
        if !slot.usable_height.is_finite() || slot.usable_height < 0.0 {
            return Err(ValidationError::InvalidUsableHeight {
                address: slot.address.clone(),
                height: slot.usable_height,
            });
        }
        if !seen.insert(slot.address.clone()) {
            return Err(ValidationError::DuplicateSlotAddress(slot.address.clone()));
        }
    }
    Ok(())
}

/// Validate the product queue.
///
/// Rules:
/// - name must be non-empty
/// - required height must be finite and >= 0
///
/// Requested quantity is unsigned by construction; zero is a valid
/// request (no units to place).
pub fn validate_products(products: &[Product]) -> Result<(), ValidationError> {
    for (index, product) in products.iter().enumerate() {
        if product.name.trim().is_empty() {
            return Err(ValidationError::EmptyProductName { index });
        }
        if !product.required_height.is_finite() || product.required_height < 0.0 {
            return Err(ValidationError::InvalidRequiredHeight {
                name: product.name.clone(),
                height: product.required_height,
            });
        }
    }
    Ok(())
}

// ==========================================
// Tests
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::slot::SlotAddress;

    fn slot(level: u32, row: u32, position: u32, height: f64) -> Slot {
        Slot::new(SlotAddress::new(None, level, row, position), height)
    }

    #[test]
    fn test_valid_inputs_pass() {
        let slots = vec![slot(1, 1, 1, 10.0), slot(1, 1, 2, 0.0)];
        let products = vec![Product::new("Caja A", 0.0, 0)];
        assert!(validate_slots(&slots).is_ok());
        assert!(validate_products(&products).is_ok());
    }

    #[test]
    fn test_negative_usable_height_rejected() {
        let slots = vec![slot(1, 1, 1, -1.0)];
        assert!(matches!(
            validate_slots(&slots),
            Err(ValidationError::InvalidUsableHeight { .. })
        ));
    }

    #[test]
    fn test_nan_height_rejected() {
        let slots = vec![slot(1, 1, 1, f64::NAN)];
        assert!(validate_slots(&slots).is_err());

        let products = vec![Product::new("Caja A", f64::INFINITY, 1)];
        assert!(validate_products(&products).is_err());
    }

    #[test]
    fn test_duplicate_address_rejected() {
        let slots = vec![slot(1, 1, 1, 10.0), slot(1, 1, 1, 12.0)];
        assert!(matches!(
            validate_slots(&slots),
            Err(ValidationError::DuplicateSlotAddress(_))
        ));
    }

    #[test]
    fn test_empty_product_name_rejected() {
        let products = vec![Product::new("  ", 5.0, 1)];
        assert!(matches!(
            validate_products(&products),
            Err(ValidationError::EmptyProductName { index: 0 })
        ));
    }

    #[test]
    fn test_negative_required_height_rejected() {
        let products = vec![Product::new("Caja A", -0.5, 1)];
        assert!(matches!(
            validate_products(&products),
            Err(ValidationError::InvalidRequiredHeight { .. })
        ));
    }
}
