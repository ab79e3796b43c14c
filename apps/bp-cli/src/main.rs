use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use bp_app::{
    AppError, AppResult, SizingOptions, catalog_service, design_service, sizing_service,
};
use bp_catalog::SelectionCriterion;
use bp_report::{ReportFormat, ReportStore, render};

#[derive(Parser)]
#[command(name = "bp-cli")]
#[command(about = "Borewell pump sizing - hydraulics and catalog pump selection", long_about = None)]
struct Cli {
    /// Debug-level logging (RUST_LOG still takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a design file
    Validate {
        /// Path to the design YAML/JSON file
        design_path: PathBuf,
    },
    /// Write a starter design file with typical values
    Init {
        /// Where to write the design (YAML or JSON by extension)
        design_path: PathBuf,
        /// Design name
        #[arg(long, default_value = "New borewell scheme")]
        name: String,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Load a pump catalog and list its pumps
    Catalog {
        /// Path to the catalog (CSV, YAML or JSON)
        catalog_path: PathBuf,
    },
    /// Size the system and select a pump
    Size {
        /// Path to the design YAML/JSON file
        design_path: PathBuf,
        /// Catalog to use instead of the one named in the design
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Secondary selection criterion
        #[arg(long, value_enum)]
        criterion: Option<CriterionArg>,
        /// Output format: text, json or yaml
        #[arg(long, default_value = "text")]
        format: ReportFormat,
        /// Write the rendered report here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Persist report.txt / report.json under this directory
        #[arg(long)]
        store: Option<PathBuf>,
    },
    /// List stored reports for a design
    Reports {
        /// Report store directory
        store: PathBuf,
        /// Design name to filter by
        design_name: String,
    },
    /// Print a stored report
    ShowReport {
        /// Report store directory
        store: PathBuf,
        /// Report ID
        report_id: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum CriterionArg {
    FlowRange,
    StageCount,
}

impl From<CriterionArg> for SelectionCriterion {
    fn from(arg: CriterionArg) -> Self {
        match arg {
            CriterionArg::FlowRange => SelectionCriterion::FlowRange,
            CriterionArg::StageCount => SelectionCriterion::StageCount,
        }
    }
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Commands::Validate { design_path } => cmd_validate(&design_path),
        Commands::Init {
            design_path,
            name,
            force,
        } => cmd_init(&design_path, &name, force),
        Commands::Catalog { catalog_path } => cmd_catalog(&catalog_path),
        Commands::Size {
            design_path,
            catalog,
            criterion,
            format,
            out,
            store,
        } => cmd_size(
            &design_path,
            SizingOptions {
                catalog,
                criterion: criterion.map(Into::into),
                report_dir: store,
            },
            format,
            out.as_deref(),
        ),
        Commands::Reports { store, design_name } => cmd_reports(&store, &design_name),
        Commands::ShowReport { store, report_id } => cmd_show_report(&store, &report_id),
    }
}

fn init_tracing(verbose: bool) -> AppResult<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| AppError::InvalidInput(format!("Failed to create log filter: {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
    Ok(())
}

fn cmd_validate(design_path: &Path) -> AppResult<()> {
    println!("Validating design: {}", design_path.display());
    let design = design_service::load_design(design_path)?;
    let summary = design_service::summarize_design(&design);
    println!("✓ Design is valid");
    println!("  Name: {} (version {})", summary.name, summary.version);
    println!(
        "  Taps: {} ({} L/day)",
        summary.taps, summary.daily_demand_l
    );
    println!("  Pipe: {}", summary.pipe);
    println!(
        "  Catalog: {}",
        summary.catalog.as_deref().unwrap_or("(none)")
    );
    println!("  Criterion: {}", summary.criterion);
    Ok(())
}

fn cmd_init(design_path: &Path, name: &str, force: bool) -> AppResult<()> {
    design_service::init_design(design_path, name, force)?;
    println!("✓ Wrote design template: {}", design_path.display());
    Ok(())
}

fn cmd_catalog(catalog_path: &Path) -> AppResult<()> {
    let catalog = catalog_service::load_catalog(catalog_path)?;
    let summary = catalog_service::summarize_catalog(&catalog);

    println!(
        "{} pumps, {} - {} HP ({} with stage counts)",
        summary.pumps, summary.min_hp, summary.max_hp, summary.with_stage_counts
    );
    for pump in catalog.iter() {
        let stages = pump
            .stages
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<12} {:<7} {:>5} HP  {:>3} stages  {:>6}-{:<6} LPH  {:>4}-{:<4} m",
            pump.model,
            pump.phase,
            pump.hp,
            stages,
            pump.min_flow_lph,
            pump.max_flow_lph,
            pump.min_head_m,
            pump.max_head_m
        );
    }
    Ok(())
}

fn cmd_size(
    design_path: &Path,
    options: SizingOptions,
    format: ReportFormat,
    out: Option<&Path>,
) -> AppResult<()> {
    let response = sizing_service::run_sizing(design_path, &options)?;
    let rendered = render(&response.outcome.report, format)?;

    match out {
        Some(path) => {
            std::fs::write(path, rendered)?;
            println!("✓ Report written: {}", path.display());
        }
        None => print!("{rendered}"),
    }

    if let Some(dir) = &response.saved_to {
        eprintln!("✓ Report stored: {}", dir.display());
    }
    Ok(())
}

fn cmd_reports(store: &Path, design_name: &str) -> AppResult<()> {
    let store = ReportStore::new(store.to_path_buf())?;
    let reports = store.list_reports(design_name)?;

    if reports.is_empty() {
        println!("No stored reports for design: {design_name}");
    } else {
        println!("Stored reports for '{design_name}':");
        for report in reports {
            println!(
                "  {} ({}) {} [{}]",
                report.report_id,
                report.generated_at,
                report.pump.model,
                report.pump.match_kind
            );
        }
    }
    Ok(())
}

fn cmd_show_report(store: &Path, report_id: &str) -> AppResult<()> {
    let store = ReportStore::new(store.to_path_buf())?;
    print!("{}", store.load_text(report_id)?);
    Ok(())
}
