// ==========================================
// Sistema de Asignación de Bodega - product sheet importer
// ==========================================
// productos.xlsx / .csv -> Vec<Product>, in sheet order. Sheet order is
// the allocation order.
// ==========================================
// Expected columns (accents optional): Producto, Altura, Existencia.
// ==========================================

use crate::domain::product::Product;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::{parse_count, parse_number, FieldMap};
use crate::importer::file_parser::{RawRow, UniversalFileParser};
use std::path::Path;
use tracing::debug;

pub struct ProductImporter;

impl ProductImporter {
    /// Parse and map a product sheet from disk.
    pub fn import(path: &Path) -> ImportResult<Vec<Product>> {
        let rows = UniversalFileParser::parse(path)?;
        let products = Self::from_rows(&rows)?;
        debug!(file = %path.display(), products = products.len(), "product sheet imported");
        Ok(products)
    }

    pub fn from_rows(rows: &[RawRow]) -> ImportResult<Vec<Product>> {
        let Some(first) = rows.first() else {
            return Ok(Vec::new());
        };
        let map = FieldMap::from_row(first);

        for column in ["producto", "altura", "existencia"] {
            if !map.has(column) {
                return Err(ImportError::MissingColumn {
                    sheet: "productos".to_string(),
                    column: column.to_string(),
                });
            }
        }

        let mut products = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            let row_number = i + 1;

            let name = map
                .require(row, row_number, "productos", "producto")?
                .to_string();
            let required_height = parse_number(
                row_number,
                "Altura",
                map.require(row, row_number, "productos", "altura")?,
            )?;
            let requested_quantity = parse_count(
                row_number,
                "Existencia",
                map.require(row, row_number, "productos", "existencia")?,
            )?;

            products.push(Product::new(name, required_height, requested_quantity));
        }

        Ok(products)
    }
}
