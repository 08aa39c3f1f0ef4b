//! Extract command - extract fields from a single OCR transcript.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::{debug, info};

use mediscan_core::license::{ExtractionResult, LicenseParser, RuleBasedLicenseParser};
use mediscan_core::models::config::MediscanConfig;

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input transcript file ("-" for stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show extraction confidence scores
    #[arg(long)]
    show_confidence: bool,

    /// Report fields that could not be extracted
    #[arg(long)]
    check: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    // Load configuration
    let config = if let Some(path) = config_path {
        MediscanConfig::from_file(std::path::Path::new(path))?
    } else {
        MediscanConfig::default()
    };

    let text = read_transcript(&args.input)?;
    info!("Extracting fields from {} characters of transcript", text.len());

    let parser = build_parser(&config);
    let result = parser.parse(&text);

    // Report missing fields if requested; partial extraction is not an error
    if args.check && !result.metadata.missing_fields.is_empty() {
        eprintln!("{}", style("Missing fields:").yellow());
        for field in &result.metadata.missing_fields {
            eprintln!("  - {}", field);
        }
    }

    // Format output
    let output = format_result(&result, args.format)?;

    // Write output
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_confidence {
        println!();
        println!(
            "{} Extraction confidence: {:.1}%",
            style("ℹ").blue(),
            result.metadata.confidence * 100.0
        );
        if let Some(time_ms) = result.metadata.processing_time_ms {
            println!("{} Processing time: {}ms", style("ℹ").blue(), time_ms);
        }
    }

    Ok(())
}

/// Build a parser from the extraction config section.
pub fn build_parser(config: &MediscanConfig) -> RuleBasedLicenseParser {
    RuleBasedLicenseParser::new()
        .with_name_fallback(config.extraction.name_line_fallback)
        .with_min_name_length(config.extraction.min_name_length)
}

fn read_transcript(path: &PathBuf) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    debug!("Reading transcript from {}", path.display());
    Ok(fs::read_to_string(path)?)
}

pub fn format_result(result: &ExtractionResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(&result.profile)?),
        OutputFormat::Csv => format_csv(result),
        OutputFormat::Text => Ok(format_text(result)),
    }
}

fn format_csv(result: &ExtractionResult) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    // Write header
    wtr.write_record(["name", "license_number", "specialization", "experience_years"])?;

    // Write data
    let profile = &result.profile;
    wtr.write_record([
        profile.name.as_deref().unwrap_or_default(),
        profile.license_number.as_deref().unwrap_or_default(),
        profile.specialization.as_deref().unwrap_or_default(),
        profile.experience_years.as_deref().unwrap_or_default(),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(result: &ExtractionResult) -> String {
    let mut output = String::new();
    let profile = &result.profile;

    output.push_str("Extracted fields:\n");
    if let Some(name) = &profile.name {
        output.push_str(&format!("  Name:           {}\n", name));
    }
    if let Some(number) = &profile.license_number {
        output.push_str(&format!("  License number: {}\n", number));
    }
    if let Some(specialty) = &profile.specialization {
        output.push_str(&format!("  Specialization: {}\n", specialty));
    }
    if let Some(years) = &profile.experience_years {
        output.push_str(&format!("  Experience:     {} years\n", years));
    }

    if profile.is_empty() {
        output.push_str("  (none)\n");
    }

    if !result.metadata.missing_fields.is_empty() {
        output.push_str("\nMissing fields:\n");
        for field in &result.metadata.missing_fields {
            output.push_str(&format!("  - {}\n", field));
        }
    }

    output
}
