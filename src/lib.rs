// ==========================================
// Sistema de Asignación de Bodega - core library
// ==========================================
// Deterministic assignment of product lots to warehouse storage slots:
// greedy best-fit by height, configurable locality tie-breaks, full
// audit trail and per-product fulfillment summaries.
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer: entities and types
pub mod domain;

// Engine layer: allocation rules
pub mod engine;

// Import layer: spreadsheet collaborators (input side)
pub mod importer;

// Export layer: result tables (output side)
pub mod exporter;

// Configuration layer: allocation profiles
pub mod config;

// Logging setup
pub mod logging;

// ==========================================
// Re-exports
// ==========================================

pub use config::AllocationProfile;
pub use domain::{AllocationReport, Assignment, Product, ProductSummary, Slot, SlotAddress, SlotState};
pub use engine::{
    AllocationError, Allocator, LocalityKey, MatchOrderingPolicy, SlotCatalog, SummaryBuilder,
    ValidationError,
};
pub use exporter::{ExportError, ResultWriter};
pub use importer::{ImportError, ProductImporter, SlotImporter};

// ==========================================
// Constants
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = "Sistema de Asignación de Bodega";
