//! Stride CLI - Command-line interface for Synheart Stride
//!
//! Commands:
//! - report: Compute summaries for a batch of sensor packages
//! - run: Process streaming packages from stdin
//! - validate: Validate sensor package input

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use synheart_stride::pipeline::{demo_packages, package_to_summary, process_packages};
use synheart_stride::report::ReportEncoder;
use synheart_stride::schema::{PackageReader, SensorPackage, SCHEMA_VERSION};
use synheart_stride::types::WorkoutSummary;
use synheart_stride::{MetricsError, STRIDE_VERSION};

/// Stride - Workout metrics engine for raw fitness sensor packages
#[derive(Parser)]
#[command(name = "stride")]
#[command(author = "Synheart AI Inc")]
#[command(version = STRIDE_VERSION)]
#[command(about = "Compute workout summaries from raw sensor packages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute summaries for a batch of sensor packages
    Report {
        /// Input file path (use - for stdin); omit to run the built-in demo batch
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file path (use - for stdout)
        #[arg(short, long, default_value = "-")]
        output: PathBuf,

        /// Input format
        #[arg(long, default_value = "ndjson")]
        input_format: InputFormat,

        /// Output format
        #[arg(long, default_value = "text")]
        output_format: OutputFormat,
    },

    /// Process streaming packages from stdin, one summary per line
    Run {
        /// Output format (text or ndjson)
        #[arg(long, default_value = "text")]
        output_format: OutputFormat,

        /// Flush output after each summary
        #[arg(long, default_value = "true")]
        flush: bool,

        /// Skip packages that fail to build instead of stopping
        #[arg(long)]
        skip_bad: bool,
    },

    /// Validate sensor package input
    Validate {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Input format
        #[arg(long, default_value = "ndjson")]
        input_format: InputFormat,

        /// Output validation report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum InputFormat {
    /// Newline-delimited JSON (one package per line)
    Ndjson,
    /// JSON array of packages
    Json,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// One rendered summary line per workout
    Text,
    /// Newline-delimited JSON (one summary per line)
    Ndjson,
    /// Report envelope as compact JSON
    Json,
    /// Report envelope as pretty-printed JSON
    JsonPretty,
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

fn run(cli: Cli) -> Result<(), StrideCliError> {
    match cli.command {
        Commands::Report {
            input,
            output,
            input_format,
            output_format,
        } => cmd_report(input.as_deref(), &output, input_format, output_format),

        Commands::Run {
            output_format,
            flush,
            skip_bad,
        } => cmd_run(output_format, flush, skip_bad),

        Commands::Validate {
            input,
            input_format,
            json,
        } => cmd_validate(&input, input_format, json),
    }
}

fn cmd_report(
    input: Option<&Path>,
    output: &Path,
    input_format: InputFormat,
    output_format: OutputFormat,
) -> Result<(), StrideCliError> {
    let packages = match input {
        None => demo_packages(),
        Some(path) => {
            let input_data = read_input(path)?;
            parse_packages(&input_data, &input_format)?
        }
    };

    if packages.is_empty() {
        return Err(StrideCliError::NoPackages);
    }

    let summaries = process_packages(&packages)?;
    let output_data = format_output(&summaries, &output_format)?;

    if output.to_string_lossy() == "-" {
        print!("{}", output_data);
    } else {
        fs::write(output, output_data)?;
    }

    Ok(())
}

fn cmd_run(output_format: OutputFormat, flush: bool, skip_bad: bool) -> Result<(), StrideCliError> {
    if matches!(output_format, OutputFormat::Json | OutputFormat::JsonPretty) {
        return Err(StrideCliError::UnsupportedStreamFormat);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        let package: SensorPackage = match serde_json::from_str(trimmed) {
            Ok(package) => package,
            Err(e) if skip_bad => {
                eprintln!("skipping unparseable package: {}", e);
                continue;
            }
            Err(e) => {
                return Err(StrideCliError::ParseError(format!(
                    "Failed to parse package: {}",
                    e
                )));
            }
        };

        let summary = match package_to_summary(&package) {
            Ok(summary) => summary,
            Err(e) if skip_bad => {
                eprintln!("skipping package ({}): {}", package.workout_type, e);
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        match output_format {
            OutputFormat::Text => writeln!(stdout, "{}", summary.message())?,
            OutputFormat::Ndjson => writeln!(stdout, "{}", serde_json::to_string(&summary)?)?,
            OutputFormat::Json | OutputFormat::JsonPretty => unreachable!(),
        }

        if flush {
            stdout.flush()?;
        }
    }

    Ok(())
}

fn cmd_validate(input: &Path, input_format: InputFormat, json: bool) -> Result<(), StrideCliError> {
    let input_data = read_input(input)?;
    let packages = parse_packages(&input_data, &input_format)?;

    let failures = PackageReader::validate_packages(&packages);

    let report = ValidationReport {
        schema: SCHEMA_VERSION.to_string(),
        total_packages: packages.len(),
        valid_packages: packages.len() - failures.len(),
        invalid_packages: failures.len(),
        errors: failures
            .iter()
            .map(|f| ValidationErrorDetail {
                index: f.index,
                workout_type: f.workout_type.clone(),
                error: f.error.to_string(),
            })
            .collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Validation Report");
        println!("=================");
        println!("Schema:           {}", report.schema);
        println!("Total packages:   {}", report.total_packages);
        println!("Valid packages:   {}", report.valid_packages);
        println!("Invalid packages: {}", report.invalid_packages);

        if !report.errors.is_empty() {
            println!("\nErrors:");
            for err in &report.errors {
                println!(
                    "  - Package {} (index {}): {}",
                    err.workout_type, err.index, err.error
                );
            }
        }
    }

    if report.invalid_packages > 0 {
        Err(StrideCliError::ValidationFailed(report.invalid_packages))
    } else {
        Ok(())
    }
}

// Helper functions

fn read_input(input: &Path) -> Result<String, StrideCliError> {
    if input.to_string_lossy() == "-" {
        if atty::is(atty::Stream::Stdin) {
            return Err(StrideCliError::StdinIsTty);
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}

fn parse_packages(
    input_data: &str,
    input_format: &InputFormat,
) -> Result<Vec<SensorPackage>, StrideCliError> {
    let packages = match input_format {
        InputFormat::Ndjson => PackageReader::parse_ndjson(input_data)?,
        InputFormat::Json => PackageReader::parse_array(input_data)?,
    };
    Ok(packages)
}

fn format_output(
    summaries: &[WorkoutSummary],
    format: &OutputFormat,
) -> Result<String, StrideCliError> {
    match format {
        OutputFormat::Text => {
            let mut lines: Vec<String> = Vec::new();
            for summary in summaries {
                lines.push(summary.message());
            }
            Ok(lines.join("\n") + "\n")
        }
        OutputFormat::Ndjson => {
            let mut lines: Vec<String> = Vec::new();
            for summary in summaries {
                lines.push(serde_json::to_string(summary)?);
            }
            Ok(lines.join("\n") + "\n")
        }
        OutputFormat::Json => {
            let payload = ReportEncoder::new().encode(summaries);
            Ok(serde_json::to_string(&payload)?)
        }
        OutputFormat::JsonPretty => {
            let payload = ReportEncoder::new().encode(summaries);
            Ok(serde_json::to_string_pretty(&payload)?)
        }
    }
}

// Error types

#[derive(Debug)]
enum StrideCliError {
    Io(io::Error),
    Metrics(MetricsError),
    Json(serde_json::Error),
    NoPackages,
    ValidationFailed(usize),
    ParseError(String),
    UnsupportedStreamFormat,
    StdinIsTty,
}

impl From<io::Error> for StrideCliError {
    fn from(e: io::Error) -> Self {
        StrideCliError::Io(e)
    }
}

impl From<MetricsError> for StrideCliError {
    fn from(e: MetricsError) -> Self {
        StrideCliError::Metrics(e)
    }
}

impl From<serde_json::Error> for StrideCliError {
    fn from(e: serde_json::Error) -> Self {
        StrideCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<StrideCliError> for CliError {
    fn from(e: StrideCliError) -> Self {
        match e {
            StrideCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            StrideCliError::Metrics(e) => CliError {
                code: "METRICS_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check the workout type code and its sensor values".to_string()),
            },
            StrideCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check JSON syntax".to_string()),
            },
            StrideCliError::NoPackages => CliError {
                code: "NO_PACKAGES".to_string(),
                message: "No sensor packages found in input".to_string(),
                hint: Some("Ensure input file is not empty".to_string()),
            },
            StrideCliError::ValidationFailed(count) => CliError {
                code: "VALIDATION_FAILED".to_string(),
                message: format!("{} packages failed validation", count),
                hint: Some("Fix validation errors and retry".to_string()),
            },
            StrideCliError::ParseError(msg) => CliError {
                code: "PARSE_ERROR".to_string(),
                message: msg,
                hint: Some(format!("Ensure input matches {}", SCHEMA_VERSION)),
            },
            StrideCliError::UnsupportedStreamFormat => CliError {
                code: "UNSUPPORTED_FORMAT".to_string(),
                message: "Streaming output supports text or ndjson".to_string(),
                hint: Some("Use 'stride report' for report envelopes".to_string()),
            },
            StrideCliError::StdinIsTty => CliError {
                code: "STDIN_IS_TTY".to_string(),
                message: "stdin is a TTY".to_string(),
                hint: Some("Pipe packages in, or pass --input <file>".to_string()),
            },
        }
    }
}

// Report types

#[derive(serde::Serialize)]
struct ValidationReport {
    schema: String,
    total_packages: usize,
    valid_packages: usize,
    invalid_packages: usize,
    errors: Vec<ValidationErrorDetail>,
}

#[derive(serde::Serialize)]
struct ValidationErrorDetail {
    index: usize,
    workout_type: String,
    error: String,
}
