//! massclass: classify structural elements from exported geometry.

use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;

use massclass::{
    Config, ElementClassifier, ElementGeometry, MassclassError, OnnxCategoryModel, Point3,
    PredictionResult, extract,
};

/// Massclass CLI
#[derive(Parser)]
#[command(name = "massclass")]
#[command(version = massclass::PKG_VERSION)]
#[command(about = "Classify box-like solids as wall, floor, column or beam")]
struct Args {
    /// Path to configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify an element exported as JSON
    Classify {
        /// Element JSON file (or omit to read from stdin)
        file: Option<PathBuf>,
        /// ONNX model (overrides config)
        #[arg(short, long)]
        model: Option<PathBuf>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the extracted dimensions without classifying
    Extract {
        /// Element JSON file (or omit to read from stdin)
        file: Option<PathBuf>,
        /// Print the dimensions as JSON
        #[arg(long)]
        json: bool,
    },

    /// Classify an axis-aligned box given its size in the internal unit
    Box {
        dx: f64,
        dy: f64,
        dz: f64,
        /// ONNX model (overrides config)
        #[arg(short, long)]
        model: Option<PathBuf>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing (default: warn for CLI; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let mut config = Config::load(args.config.as_deref())?;

    match args.command {
        Command::Classify { file, model, json } => {
            let element = read_element(file.as_deref())?;
            let result = classifier(&mut config, model)?.predict_element(&element)?;
            print_result(&result, json)?;
        }
        Command::Extract { file, json } => {
            let element = read_element(file.as_deref())?;
            element.ensure_category(&config.geometry.accepted_categories)?;
            let features = extract(element.boundary_edges(), &config.geometry.internal_unit)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&features)?);
            } else {
                println!("Dim1: {}", features.x());
                println!("Dim2: {}", features.y());
                println!("Dim3: {}", features.z());
            }
        }
        Command::Box {
            dx,
            dy,
            dz,
            model,
            json,
        } => {
            let category = config
                .geometry
                .accepted_categories
                .first()
                .cloned()
                .unwrap_or_else(|| massclass::element::DEFAULT_CATEGORY.to_string());
            let element = ElementGeometry::box_from_dimensions(category, Point3::ZERO, dx, dy, dz);
            let result = classifier(&mut config, model)?.predict_element(&element)?;
            print_result(&result, json)?;
        }
    }

    Ok(())
}

/// Load the model and wrap it with the configured geometry settings.
fn classifier(
    config: &mut Config,
    model: Option<PathBuf>,
) -> Result<ElementClassifier<OnnxCategoryModel>, MassclassError> {
    if let Some(path) = model {
        config.model.path = Some(path);
    }
    let engine = OnnxCategoryModel::load(&config.model)?;
    info!(model = %engine.model_info().name, "model ready");
    Ok(ElementClassifier::builder(engine)
        .geometry(&config.geometry)
        .build())
}

/// Read element JSON from a file, or from stdin when no file is given.
fn read_element(file: Option<&Path>) -> Result<ElementGeometry, MassclassError> {
    match file {
        Some(path) => ElementGeometry::from_reader(BufReader::new(File::open(path)?)),
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                return Err(MassclassError::InvalidInput(
                    "no element file given and stdin is a terminal".to_string(),
                ));
            }
            ElementGeometry::from_reader(stdin.lock())
        }
    }
}

fn print_result(result: &PredictionResult, json: bool) -> Result<(), MassclassError> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        println!("{result}");
        println!();
        for (category, probability) in result.ranked() {
            println!("  {category:<7} {:>6.1}%", probability * 100.0);
        }
    }
    Ok(())
}
