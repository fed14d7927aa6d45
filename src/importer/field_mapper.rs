// ==========================================
// Sistema de Asignación de Bodega - field mapping
// ==========================================
// Maps the source sheet headers onto canonical field names. The
// historical workbooks use accented Spanish headers ("Posición",
// "Altura_útil"); exports and hand-edited copies often drop the
// accents, so matching is done on a normalized form.
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::RawRow;
use std::collections::HashMap;

/// Normalize a header for matching: trim, lowercase, fold accents,
/// spaces to underscores. "Altura_útil" and "altura util" both map to
/// "altura_util".
pub fn normalize_header(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ñ' => 'n',
            ' ' => '_',
            other => other,
        })
        .collect()
}

// ==========================================
// FieldMap - normalized header -> actual header
// ==========================================
pub struct FieldMap {
    by_canonical: HashMap<String, String>,
}

impl FieldMap {
    /// Build the map from any data row (all rows share the same keys).
    pub fn from_row(row: &RawRow) -> Self {
        let by_canonical = row
            .keys()
            .map(|header| (normalize_header(header), header.clone()))
            .collect();
        Self { by_canonical }
    }

    pub fn has(&self, canonical: &str) -> bool {
        self.by_canonical.contains_key(canonical)
    }

    /// Non-empty value of a canonical field in a row.
    pub fn get<'a>(&self, row: &'a RawRow, canonical: &str) -> Option<&'a str> {
        self.by_canonical
            .get(canonical)
            .and_then(|header| row.get(header))
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Like `get`, but a missing or empty value is an error.
    pub fn require<'a>(
        &self,
        row: &'a RawRow,
        row_number: usize,
        sheet: &str,
        canonical: &str,
    ) -> ImportResult<&'a str> {
        self.get(row, canonical)
            .ok_or_else(|| ImportError::MissingColumn {
                sheet: format!("{} (row {})", sheet, row_number),
                column: canonical.to_string(),
            })
    }
}

// ==========================================
// Typed value parsers
// ==========================================

/// Parse a decimal number. Calamine stringifies numeric cells with a
/// dot, but hand-edited CSVs from es locales may carry a comma.
pub fn parse_number(row: usize, field: &str, value: &str) -> ImportResult<f64> {
    value
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| ImportError::TypeConversion {
            row,
            field: field.to_string(),
            value: value.to_string(),
            expected: "number",
        })
}

/// Parse a nonnegative integer count. Excel exports integer cells as
/// "3" or "3.0"; both are accepted, "3.5" is not.
pub fn parse_count(row: usize, field: &str, value: &str) -> ImportResult<u32> {
    let number = parse_number(row, field, value)?;
    if number < 0.0 {
        return Err(ImportError::NegativeValue {
            row,
            field: field.to_string(),
            value: number,
        });
    }
    if number.fract() != 0.0 || number > u32::MAX as f64 {
        return Err(ImportError::TypeConversion {
            row,
            field: field.to_string(),
            value: value.to_string(),
            expected: "integer",
        });
    }
    Ok(number as u32)
}

/// Parse an availability flag. The source sheets carry TRUE/FALSE from
/// pandas, VERDADERO/FALSO from Spanish Excel, or 1/0.
pub fn parse_flag(row: usize, field: &str, value: &str) -> ImportResult<bool> {
    match value.to_lowercase().as_str() {
        "true" | "verdadero" | "si" | "sí" | "1" => Ok(true),
        "false" | "falso" | "no" | "0" => Ok(false),
        _ => Err(ImportError::TypeConversion {
            row,
            field: field.to_string(),
            value: value.to_string(),
            expected: "boolean",
        }),
    }
}
