// ==========================================
// Sistema de Asignación de Bodega - import layer
// ==========================================
// External collaborator: turns the two input sheets (ubicaciones,
// productos) into typed records. The engine never touches files.
// ==========================================

pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod product_importer;
pub mod slot_importer;

pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMap;
pub use file_parser::{CsvParser, ExcelParser, RawRow, SheetParser, UniversalFileParser};
pub use product_importer::ProductImporter;
pub use slot_importer::SlotImporter;
