// ==========================================
// Sistema de Asignación de Bodega - domain layer
// ==========================================
// Entities and value types only: no catalog mutation logic, no
// allocation rules, no I/O.
// ==========================================

pub mod assignment;
pub mod product;
pub mod slot;

pub use assignment::{AllocationReport, Assignment};
pub use product::{Product, ProductSummary};
pub use slot::{Slot, SlotAddress, SlotState};
