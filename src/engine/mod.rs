// ==========================================
// Sistema de Asignación de Bodega - engine layer
// ==========================================
// Business rules: candidate filtering, slot ranking, greedy allocation,
// summary projection. No I/O in here.
// ==========================================

pub mod allocator;
pub mod catalog;
pub mod error;
pub mod ordering;
pub mod summary;
pub mod validation;

pub use allocator::Allocator;
pub use catalog::SlotCatalog;
pub use error::{AllocationError, AllocationResult, ValidationError};
pub use ordering::{LocalityKey, MatchOrderingPolicy};
pub use summary::SummaryBuilder;
