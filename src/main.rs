//! Command-line entry point: collect the trip fields, render the
//! report and write it next to the caller.

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process;

use chrono::{Local, NaiveDate};
use clap::Parser;

use trip_report::assets::AssetLibrary;
use trip_report::layout::Layout;
use trip_report::model::{Customer, Material, TripRecord, DEFAULT_VEHICLE_NO};
use trip_report::render::ReportRenderer;

/// Generates a weighbridge trip report as a PDF document.
///
/// Image assets (logo, icons) are looked up under `--assets-dir`, the
/// `TRIP_REPORT_ASSETS_DIR` environment variable or an `assets/`
/// directory next to the binary; missing images are simply left out.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Print date (YYYY-MM-DD); defaults to today.
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Print time, free text ("HH:MM:SS").
    #[arg(long, default_value = "")]
    time: String,

    /// Ticket number.
    #[arg(long, default_value = "")]
    ticket: String,

    /// Vehicle number.
    #[arg(long, default_value = DEFAULT_VEHICLE_NO)]
    vehicle: String,

    /// Customer name.
    #[arg(long, default_value_t = Customer::AvenuesMall)]
    customer: Customer,

    /// Material name.
    #[arg(long, default_value_t = Material::BottleGlass)]
    material: Material,

    /// Gross weight in tons.
    #[arg(long, default_value_t = 0.0)]
    gross: f64,

    /// Tare weight in tons.
    #[arg(long, default_value_t = 0.0)]
    tare: f64,

    /// Float glass in tons.
    #[arg(long = "float-glass", default_value_t = 0.0)]
    float_glass: f64,

    /// Read the whole record from a JSON file instead of the flags above.
    #[arg(long, conflicts_with_all = ["date", "time", "ticket", "vehicle", "customer", "material", "gross", "tare", "float_glass"])]
    input: Option<PathBuf>,

    /// Directory containing the report images.
    #[arg(long)]
    assets_dir: Option<PathBuf>,

    /// Directory the report is written into.
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Use the tighter report layout.
    #[arg(long)]
    compact: bool,
}

fn build_record(cli: &Cli) -> Result<TripRecord, Box<dyn Error>> {
    if let Some(path) = &cli.input {
        let text = fs::read_to_string(path)?;
        return Ok(serde_json::from_str(&text)?);
    }

    for (name, value) in [
        ("--gross", cli.gross),
        ("--tare", cli.tare),
        ("--float-glass", cli.float_glass),
    ] {
        if value < 0.0 {
            return Err(format!("{name} must not be negative (got {value})").into());
        }
    }

    Ok(TripRecord {
        print_date: cli.date.unwrap_or_else(|| Local::now().date_naive()),
        print_time: cli.time.clone(),
        ticket_no: cli.ticket.clone(),
        vehicle_no: cli.vehicle.clone(),
        customer: cli.customer,
        material: cli.material,
        gross_weight: cli.gross,
        tare_weight: cli.tare,
        float_glass: cli.float_glass,
    })
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let record = build_record(cli)?;

    let assets = match &cli.assets_dir {
        Some(dir) => AssetLibrary::new(dir),
        None => AssetLibrary::discover(),
    };
    let layout = if cli.compact {
        Layout::compact()
    } else {
        Layout::standard()
    };

    let report = ReportRenderer::new(assets).with_layout(layout).render(&record)?;

    fs::create_dir_all(&cli.output_dir)?;
    let path = cli.output_dir.join(&report.file_name);
    fs::write(&path, &report.bytes)?;
    println!("Generated {} ({} bytes)", path.display(), report.bytes.len());
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {}", err);
        print_error_sources(err.as_ref());
        process::exit(1);
    }
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
