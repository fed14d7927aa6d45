// ==========================================
// Sistema de Asignación de Bodega - CLI entry point
// ==========================================
// Reads the slot and product sheets, runs one allocation pass and
// writes the three result tables as CSV.
// ==========================================

use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use warehouse_slotting::config::{AllocationProfile, ProfileError};
use warehouse_slotting::engine::SlotCatalog;
use warehouse_slotting::exporter::ResultWriter;
use warehouse_slotting::importer::{ProductImporter, SlotImporter};
use warehouse_slotting::logging;

struct CliArgs {
    slots_file: PathBuf,
    products_file: PathBuf,
    output_dir: PathBuf,
    profile: AllocationProfile,
}

fn print_usage() {
    eprintln!("Usage: warehouse-slotting <ubicaciones.xlsx|csv> <productos.xlsx|csv> [output_dir]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --profile <racked|by_level|insertion>   built-in allocation profile (default: by_level)");
    eprintln!("  --profile-file <file.json>              custom allocation profile");
}

fn parse_args() -> Result<CliArgs> {
    let mut positional: Vec<String> = Vec::new();
    let mut profile: Option<AllocationProfile> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--profile" => {
                let name = args.next().context("--profile requires a value")?;
                profile = Some(
                    AllocationProfile::builtin(&name).ok_or(ProfileError::Unknown(name))?,
                );
            }
            "--profile-file" => {
                let path = args.next().context("--profile-file requires a value")?;
                profile = Some(AllocationProfile::from_json_file(path.as_ref())?);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => positional.push(other.to_string()),
        }
    }

    if positional.len() < 2 {
        print_usage();
        bail!("expected the slot sheet and the product sheet");
    }

    Ok(CliArgs {
        slots_file: PathBuf::from(&positional[0]),
        products_file: PathBuf::from(&positional[1]),
        output_dir: positional
            .get(2)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("resultado")),
        profile: profile.unwrap_or_default(),
    })
}

fn main() -> Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", warehouse_slotting::APP_NAME);
    tracing::info!("version: {}", warehouse_slotting::VERSION);
    tracing::info!("==================================================");

    let args = parse_args()?;
    tracing::info!(profile = %args.profile.profile_id, "allocation profile selected");

    let slots = SlotImporter::import(&args.slots_file)
        .with_context(|| format!("importing {}", args.slots_file.display()))?;
    let products = ProductImporter::import(&args.products_file)
        .with_context(|| format!("importing {}", args.products_file.display()))?;
    tracing::info!(slots = slots.len(), products = products.len(), "sheets imported");

    let mut catalog = SlotCatalog::new(slots);
    let report = args
        .profile
        .allocator()
        .allocate(&mut catalog, &products)
        .context("allocation failed")?;

    tracing::info!(
        run_id = %report.run_id,
        assigned = report.total_assigned(),
        pending = report.total_pending(),
        free_slots = catalog.available_count(),
        "allocation complete"
    );

    let files = ResultWriter::new(&args.output_dir)
        .write_all(&report, &catalog)
        .context("writing result tables")?;

    println!("Asignaciones:      {}", files.assignments.display());
    println!("Resumen productos: {}", files.summaries.display());
    println!("Ubicaciones final: {}", files.slots.display());

    Ok(())
}
