// ==========================================
// Sistema de Asignación de Bodega - result exporter
// ==========================================
// External collaborator: writes the three result tables of a run as
// CSV, with the same columns as the historical workbook sheets
// (Asignaciones, Resumen_Productos, Ubicaciones_Final).
// ==========================================

use crate::domain::assignment::AllocationReport;
use crate::engine::summary::format_height;
use crate::engine::SlotCatalog;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("cannot create output directory {0}: {1}")]
    CreateDir(String, #[source] std::io::Error),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("file write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Paths of the files produced by a run.
#[derive(Debug, Clone)]
pub struct WrittenFiles {
    pub assignments: PathBuf,
    pub summaries: PathBuf,
    pub slots: PathBuf,
}

// ==========================================
// ResultWriter
// ==========================================
pub struct ResultWriter {
    output_dir: PathBuf,
}

impl ResultWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Write all three result tables. The rack column is emitted only
    /// when the catalog actually carries racks.
    pub fn write_all(
        &self,
        report: &AllocationReport,
        catalog: &SlotCatalog,
    ) -> Result<WrittenFiles, ExportError> {
        std::fs::create_dir_all(&self.output_dir)
            .map_err(|e| ExportError::CreateDir(self.output_dir.display().to_string(), e))?;

        let with_rack = catalog.slots().iter().any(|s| s.address.rack.is_some());

        let files = WrittenFiles {
            assignments: self.output_dir.join("asignaciones.csv"),
            summaries: self.output_dir.join("resumen_productos.csv"),
            slots: self.output_dir.join("ubicaciones_final.csv"),
        };

        self.write_assignments(&files.assignments, report, with_rack)?;
        self.write_summaries(&files.summaries, report)?;
        self.write_final_slots(&files.slots, catalog, with_rack)?;

        info!(
            run_id = %report.run_id,
            dir = %self.output_dir.display(),
            "result tables written"
        );
        Ok(files)
    }

    fn write_assignments(
        &self,
        path: &Path,
        report: &AllocationReport,
        with_rack: bool,
    ) -> Result<(), ExportError> {
        let mut writer = csv::Writer::from_path(path)?;

        let mut header = vec!["Producto"];
        if with_rack {
            header.push("Rack");
        }
        header.extend(["Nivel", "Fila", "Posición", "Altura_útil"]);
        writer.write_record(&header)?;

        for a in &report.assignments {
            let mut record = vec![a.product_name.clone()];
            if with_rack {
                record.push(a.address.rack.clone().unwrap_or_default());
            }
            record.push(a.address.level.to_string());
            record.push(a.address.row.to_string());
            record.push(a.address.position.to_string());
            record.push(format_height(a.usable_height));
            writer.write_record(&record)?;
        }

        writer.flush()?;
        Ok(())
    }

    fn write_summaries(&self, path: &Path, report: &AllocationReport) -> Result<(), ExportError> {
        let mut writer = csv::Writer::from_path(path)?;

        let with_racks = report.summaries.iter().any(|s| s.racks_used.is_some());

        let mut header = vec![
            "Producto",
            "Altura",
            "Existencia",
            "Asignado",
            "Pendiente",
            "Alturas_útiles",
            "Niveles_asignados",
        ];
        if with_racks {
            header.push("Racks_asignados");
        }
        writer.write_record(&header)?;

        for s in &report.summaries {
            let mut record = vec![
                s.name.clone(),
                format_height(s.required_height),
                s.requested_quantity.to_string(),
                s.fulfilled.to_string(),
                s.pending.to_string(),
                s.heights_used.clone(),
                s.levels_used.clone(),
            ];
            if with_racks {
                record.push(s.racks_used.clone().unwrap_or_default());
            }
            writer.write_record(&record)?;
        }

        writer.flush()?;
        Ok(())
    }

    fn write_final_slots(
        &self,
        path: &Path,
        catalog: &SlotCatalog,
        with_rack: bool,
    ) -> Result<(), ExportError> {
        let mut writer = csv::Writer::from_path(path)?;

        let mut header = Vec::new();
        if with_rack {
            header.push("Rack");
        }
        header.extend([
            "Nivel",
            "Fila",
            "Posición",
            "Altura_útil",
            "Disponible",
            "Producto_asignado",
        ]);
        writer.write_record(&header)?;

        for slot in catalog.slots() {
            let mut record = Vec::new();
            if with_rack {
                record.push(slot.address.rack.clone().unwrap_or_default());
            }
            record.push(slot.address.level.to_string());
            record.push(slot.address.row.to_string());
            record.push(slot.address.position.to_string());
            record.push(format_height(slot.usable_height));
            let available = if slot.is_available() { "TRUE" } else { "FALSE" };
            record.push(available.to_string());
            record.push(slot.state.assigned_product().unwrap_or_default().to_string());
            writer.write_record(&record)?;
        }

        writer.flush()?;
        Ok(())
    }
}
