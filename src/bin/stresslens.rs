//! Stresslens CLI - Command-line interface for Stresslens
//!
//! Commands:
//! - predict: Predict the stress category for one reading
//! - run: Process NDJSON readings from stdin (streaming mode)
//! - visualize: Report the confusion matrix diagnostic asset
//! - doctor: Diagnose artifact deployment health
//! - schema: Print input/output schema information

use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use stresslens::artifacts::{ArtifactPaths, DEFAULT_MODEL_FILE, DEFAULT_SCALER_FILE};
use stresslens::render::{render_home, render_prediction, render_visualization, PageConfig};
use stresslens::viz::{ConfusionMatrix, DEFAULT_IMAGE_FILE};
use stresslens::{
    InferenceError, Reading, StressEngine, TemperatureUnit, ENGINE_VERSION, PRODUCER_NAME,
};

/// Stresslens - Three-level stress classification from sensor readings
#[derive(Parser)]
#[command(name = "stresslens")]
#[command(version = ENGINE_VERSION)]
#[command(about = "Predict stress levels from humidity, temperature, and step count", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show what this tool does
    Home,

    /// Predict the stress category for one reading
    Predict {
        /// Relative humidity in percent (clamped to 0-100)
        #[arg(long)]
        humidity: f64,

        /// Temperature in the selected unit (clamped to the unit's range)
        #[arg(long)]
        temperature: f64,

        /// Daily step count
        #[arg(long)]
        steps: u32,

        /// Temperature unit the reading was taken in
        #[arg(long, default_value = "celsius")]
        unit: UnitArg,

        /// Classifier artifact path
        #[arg(long, default_value = DEFAULT_MODEL_FILE)]
        model: PathBuf,

        /// Scaler artifact path
        #[arg(long, default_value = DEFAULT_SCALER_FILE)]
        scaler: PathBuf,

        /// Output the full prediction report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Process NDJSON readings from stdin (streaming mode)
    Run {
        /// Temperature unit for readings that omit one
        #[arg(long, default_value = "celsius")]
        unit: UnitArg,

        /// Classifier artifact path
        #[arg(long, default_value = DEFAULT_MODEL_FILE)]
        model: PathBuf,

        /// Scaler artifact path
        #[arg(long, default_value = DEFAULT_SCALER_FILE)]
        scaler: PathBuf,

        /// Output format
        #[arg(long, default_value = "ndjson")]
        output_format: OutputFormat,

        /// Flush output after each prediction
        #[arg(long, default_value = "true")]
        flush: bool,
    },

    /// Report the confusion matrix diagnostic asset
    Visualize {
        /// Image file path
        #[arg(long, default_value = DEFAULT_IMAGE_FILE)]
        image: PathBuf,
    },

    /// Diagnose artifact deployment health
    Doctor {
        /// Classifier artifact path
        #[arg(long, default_value = DEFAULT_MODEL_FILE)]
        model: PathBuf,

        /// Scaler artifact path
        #[arg(long, default_value = DEFAULT_SCALER_FILE)]
        scaler: PathBuf,

        /// Image file path
        #[arg(long, default_value = DEFAULT_IMAGE_FILE)]
        image: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print schema information
    Schema {
        /// Schema to print (input or output)
        #[arg(value_enum)]
        schema_type: SchemaType,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitArg {
    /// Degrees Celsius (input range 0-100)
    Celsius,
    /// Degrees Fahrenheit (input range 30-130), converted before scaling
    Fahrenheit,
}

impl From<UnitArg> for TemperatureUnit {
    fn from(unit: UnitArg) -> Self {
        match unit {
            UnitArg::Celsius => TemperatureUnit::Celsius,
            UnitArg::Fahrenheit => TemperatureUnit::Fahrenheit,
        }
    }
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Newline-delimited JSON (one prediction per line)
    Ndjson,
    /// Rendered result lines
    Text,
}

#[derive(Clone, ValueEnum)]
enum SchemaType {
    /// Input schema (reading)
    Input,
    /// Output schema (prediction report)
    Output,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), LensCliError> {
    match cli.command {
        Commands::Home => {
            print!("{}", render_home(&PageConfig::default()));
            Ok(())
        }

        Commands::Predict {
            humidity,
            temperature,
            steps,
            unit,
            model,
            scaler,
            json,
        } => cmd_predict(humidity, temperature, steps, unit, model, scaler, json),

        Commands::Run {
            unit,
            model,
            scaler,
            output_format,
            flush,
        } => cmd_run(unit, model, scaler, output_format, flush),

        Commands::Visualize { image } => cmd_visualize(&image),

        Commands::Doctor {
            model,
            scaler,
            image,
            json,
        } => cmd_doctor(model, scaler, &image, json),

        Commands::Schema { schema_type } => cmd_schema(schema_type),
    }
}

fn cmd_predict(
    humidity: f64,
    temperature: f64,
    steps: u32,
    unit: UnitArg,
    model: PathBuf,
    scaler: PathBuf,
    json: bool,
) -> Result<(), LensCliError> {
    let paths = ArtifactPaths::new(model, scaler);
    let engine = StressEngine::load(&paths)?;

    let reading = Reading::new(humidity, temperature, unit.into(), steps);
    let prediction = engine.predict(&reading)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&prediction)?);
    } else {
        print!("{}", render_prediction(&PageConfig::default(), &prediction));
    }

    Ok(())
}

fn cmd_run(
    unit: UnitArg,
    model: PathBuf,
    scaler: PathBuf,
    output_format: OutputFormat,
    flush: bool,
) -> Result<(), LensCliError> {
    let paths = ArtifactPaths::new(model, scaler);
    // Load once up front; every line reuses the same artifacts.
    let engine = StressEngine::load(&paths)?;
    let config = PageConfig::default();

    if atty::is(atty::Stream::Stdin) {
        eprintln!("reading NDJSON from terminal; one reading per line, Ctrl-D to end");
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        let input: ReadingInput = serde_json::from_str(trimmed)
            .map_err(|e| LensCliError::ParseError(format!("Failed to parse reading: {}", e)))?;
        let reading = Reading::new(
            input.humidity_pct,
            input.temperature,
            input.temperature_unit.unwrap_or(unit.into()),
            input.step_count,
        );

        let prediction = engine.predict(&reading)?;

        match output_format {
            OutputFormat::Ndjson => writeln!(stdout, "{}", serde_json::to_string(&prediction)?)?,
            OutputFormat::Text => write!(stdout, "{}", render_prediction(&config, &prediction))?,
        }

        if flush {
            stdout.flush()?;
        }
    }

    Ok(())
}

fn cmd_visualize(image: &std::path::Path) -> Result<(), LensCliError> {
    match ConfusionMatrix::locate(image) {
        Ok(asset) => {
            print!("{}", render_visualization(&PageConfig::default(), &asset));
        }
        Err(InferenceError::ImageNotFound { path }) => {
            // Warning-grade: report and exit clean.
            eprintln!("warning: confusion matrix image not found: {}", path.display());
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn cmd_doctor(
    model: PathBuf,
    scaler: PathBuf,
    image: &std::path::Path,
    json: bool,
) -> Result<(), LensCliError> {
    let mut checks: Vec<DoctorCheck> = Vec::new();

    checks.push(DoctorCheck {
        name: "engine_version".to_string(),
        status: CheckStatus::Ok,
        message: format!("Stresslens version {}", ENGINE_VERSION),
    });

    let paths = ArtifactPaths::new(model, scaler);
    match paths.load() {
        Ok(_) => {
            checks.push(DoctorCheck {
                name: "artifacts".to_string(),
                status: CheckStatus::Ok,
                message: format!(
                    "model and scaler artifacts valid ({}, {})",
                    paths.model.display(),
                    paths.scaler.display()
                ),
            });
        }
        Err(InferenceError::ArtifactNotFound { path }) => {
            checks.push(DoctorCheck {
                name: "artifacts".to_string(),
                status: CheckStatus::Error,
                message: format!("model or scaler file not found: {}", path.display()),
            });
        }
        Err(e) => {
            checks.push(DoctorCheck {
                name: "artifacts".to_string(),
                status: CheckStatus::Error,
                message: format!("artifact decode failed: {}", e),
            });
        }
    }

    match ConfusionMatrix::locate(image) {
        Ok(asset) => {
            checks.push(DoctorCheck {
                name: "confusion_matrix".to_string(),
                status: CheckStatus::Ok,
                message: format!("image present ({} bytes)", asset.size_bytes),
            });
        }
        Err(_) => {
            checks.push(DoctorCheck {
                name: "confusion_matrix".to_string(),
                status: CheckStatus::Warning,
                message: format!("image not found: {}", image.display()),
            });
        }
    }

    let stdin_check = if atty::is(atty::Stream::Stdin) {
        DoctorCheck {
            name: "stdin".to_string(),
            status: CheckStatus::Ok,
            message: "stdin is a TTY (interactive mode)".to_string(),
        }
    } else {
        DoctorCheck {
            name: "stdin".to_string(),
            status: CheckStatus::Ok,
            message: "stdin is a pipe (streaming mode ready)".to_string(),
        }
    };
    checks.push(stdin_check);

    let report = DoctorReport {
        producer: PRODUCER_NAME.to_string(),
        version: ENGINE_VERSION.to_string(),
        checks,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Stresslens Doctor Report");
        println!("========================");
        println!("Producer: {}", report.producer);
        println!("Version:  {}", report.version);
        println!("\nChecks:");

        for check in &report.checks {
            let status_icon = match check.status {
                CheckStatus::Ok => "[OK]",
                CheckStatus::Warning => "[WARN]",
                CheckStatus::Error => "[ERR]",
            };
            println!("  {} {}: {}", status_icon, check.name, check.message);
        }
    }

    let has_errors = report
        .checks
        .iter()
        .any(|c| matches!(c.status, CheckStatus::Error));
    if has_errors {
        Err(LensCliError::DoctorFailed)
    } else {
        Ok(())
    }
}

fn cmd_schema(schema_type: SchemaType) -> Result<(), LensCliError> {
    match schema_type {
        SchemaType::Input => {
            println!("Input Schema: reading");
            println!();
            println!("One reading per prediction request:");
            println!();
            println!("- humidity_pct: number, percent, clamped to 0-100");
            println!("- temperature: number, clamped to the unit's range");
            println!("  (0-100 for celsius, 30-130 for fahrenheit)");
            println!("- temperature_unit: \"celsius\" | \"fahrenheit\" (default celsius)");
            println!("- step_count: non-negative integer");
            println!();
            println!("Fahrenheit readings are converted to Celsius before scaling;");
            println!("the artifacts are fitted on [humidity_pct, temperature_c, step_count].");
        }
        SchemaType::Output => {
            println!("Output Schema: prediction report");
            println!();
            println!("- outcome: {{ kind: \"label\", label: low|medium|high }} or");
            println!("           {{ kind: \"unrecognized\" }}");
            println!("- class: raw class id returned by the classifier");
            println!("- features: [humidity_pct, temperature_c, step_count]");
            println!("- scaled_features: the vector seen by the classifier");
            println!("- producer: {{ name, version, instance_id }}");
            println!("- provenance: {{ model_path, scaler_path, predicted_at_utc }}");
        }
    }

    Ok(())
}

/// Streamed reading line, with the CLI's unit flag as the fallback unit
#[derive(serde::Deserialize)]
struct ReadingInput {
    humidity_pct: f64,
    temperature: f64,
    temperature_unit: Option<TemperatureUnit>,
    step_count: u32,
}

// Error types

#[derive(Debug)]
enum LensCliError {
    Io(io::Error),
    Inference(InferenceError),
    Json(serde_json::Error),
    ParseError(String),
    DoctorFailed,
}

impl From<io::Error> for LensCliError {
    fn from(e: io::Error) -> Self {
        LensCliError::Io(e)
    }
}

impl From<InferenceError> for LensCliError {
    fn from(e: InferenceError) -> Self {
        LensCliError::Inference(e)
    }
}

impl From<serde_json::Error> for LensCliError {
    fn from(e: serde_json::Error) -> Self {
        LensCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<LensCliError> for CliError {
    fn from(e: LensCliError) -> Self {
        match e {
            LensCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            LensCliError::Inference(InferenceError::ArtifactNotFound { path }) => CliError {
                code: "ARTIFACT_NOT_FOUND".to_string(),
                message: format!("model or scaler file not found: {}", path.display()),
                hint: Some("Deploy model_stres.json and scaler_stres.json or pass --model/--scaler".to_string()),
            },
            LensCliError::Inference(InferenceError::ScalingError(msg)) => CliError {
                code: "SCALING_ERROR".to_string(),
                message: msg,
                hint: Some("Check that the scaler artifact matches the three-feature input".to_string()),
            },
            LensCliError::Inference(e) => CliError {
                code: "INFERENCE_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Run 'stresslens doctor' to check the artifact deployment".to_string()),
            },
            LensCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check JSON syntax".to_string()),
            },
            LensCliError::ParseError(msg) => CliError {
                code: "PARSE_ERROR".to_string(),
                message: msg,
                hint: Some("Run 'stresslens schema input' for the reading format".to_string()),
            },
            LensCliError::DoctorFailed => CliError {
                code: "DOCTOR_FAILED".to_string(),
                message: "One or more health checks failed".to_string(),
                hint: Some("Review the doctor report for details".to_string()),
            },
        }
    }
}

// Report types

#[derive(serde::Serialize)]
struct DoctorReport {
    producer: String,
    version: String,
    checks: Vec<DoctorCheck>,
}

#[derive(serde::Serialize)]
struct DoctorCheck {
    name: String,
    status: CheckStatus,
    message: String,
}

#[derive(serde::Serialize)]
enum CheckStatus {
    Ok,
    Warning,
    Error,
}
