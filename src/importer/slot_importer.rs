// ==========================================
// Sistema de Asignación de Bodega - slot sheet importer
// ==========================================
// ubicaciones.xlsx / .csv -> Vec<Slot>, in sheet order. Sheet order is
// the catalog insertion order, which the ordering policy uses as its
// final tie-breaker, so rows are never reordered here.
// ==========================================
// Expected columns (accents optional): Rack (optional), Nivel, Fila,
// Posición, Altura_útil, Disponible, Producto_asignado (optional).
// ==========================================

use crate::domain::slot::{Slot, SlotAddress};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::{parse_count, parse_flag, parse_number, FieldMap};
use crate::importer::file_parser::{RawRow, UniversalFileParser};
use std::path::Path;
use tracing::debug;

pub struct SlotImporter;

impl SlotImporter {
    /// Parse and map a slot sheet from disk.
    pub fn import(path: &Path) -> ImportResult<Vec<Slot>> {
        let rows = UniversalFileParser::parse(path)?;
        let slots = Self::from_rows(&rows)?;
        debug!(file = %path.display(), slots = slots.len(), "slot sheet imported");
        Ok(slots)
    }

    /// Map parsed rows to slots. Row numbers in errors are 1-based data
    /// rows (header excluded), matching what a user sees in Excel minus
    /// the header line.
    pub fn from_rows(rows: &[RawRow]) -> ImportResult<Vec<Slot>> {
        let Some(first) = rows.first() else {
            return Ok(Vec::new());
        };
        let map = FieldMap::from_row(first);

        for column in ["nivel", "fila", "posicion", "altura_util", "disponible"] {
            if !map.has(column) {
                return Err(ImportError::MissingColumn {
                    sheet: "ubicaciones".to_string(),
                    column: column.to_string(),
                });
            }
        }
        let has_rack = map.has("rack");

        let mut slots = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            let row_number = i + 1;

            let rack = if has_rack {
                map.get(row, "rack").map(String::from)
            } else {
                None
            };
            let level = parse_count(
                row_number,
                "Nivel",
                map.require(row, row_number, "ubicaciones", "nivel")?,
            )?;
            let row_field = parse_count(
                row_number,
                "Fila",
                map.require(row, row_number, "ubicaciones", "fila")?,
            )?;
            let position = parse_count(
                row_number,
                "Posición",
                map.require(row, row_number, "ubicaciones", "posicion")?,
            )?;
            let usable_height = parse_number(
                row_number,
                "Altura_útil",
                map.require(row, row_number, "ubicaciones", "altura_util")?,
            )?;
            let available = parse_flag(
                row_number,
                "Disponible",
                map.require(row, row_number, "ubicaciones", "disponible")?,
            )?;

            let address = SlotAddress::new(rack, level, row_field, position);
            let slot = if available {
                Slot::new(address, usable_height)
            } else {
                let occupant = map.get(row, "producto_asignado").map(String::from);
                Slot::new_occupied(address, usable_height, occupant)
            };
            slots.push(slot);
        }

        Ok(slots)
    }
}
