use clap::Parser;
use detset::{DetectedObject, DetectedObjectRef, DetectedObjectSet, DetectedObjectType, Selection};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "detset CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for selection diagnostics.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum QueryConfig {
    Confidence { threshold: f64 },
    Class { name: String, threshold: f64 },
}

impl From<QueryConfig> for Selection {
    fn from(value: QueryConfig) -> Self {
        match value {
            QueryConfig::Confidence { threshold } => Selection::confidence(threshold),
            QueryConfig::Class { name, threshold } => Selection::class(name, threshold),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Config {
    detections_path: String,
    output_path: Option<String>,
    queries: Vec<QueryConfig>,
}

#[derive(Debug, Deserialize)]
struct DetectionJson {
    confidence: f64,
    #[serde(default)]
    classes: Option<BTreeMap<String, f64>>,
}

impl From<DetectionJson> for DetectedObject {
    fn from(value: DetectionJson) -> Self {
        match value.classes {
            Some(classes) => {
                DetectedObject::with_type(value.confidence, DetectedObjectType::from_pairs(classes))
            }
            None => DetectedObject::new(value.confidence),
        }
    }
}

#[derive(Debug, Serialize)]
struct DetectionRecord {
    confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    most_likely: Option<String>,
}

impl DetectionRecord {
    fn new(obj: &DetectedObjectRef, selection: &Selection) -> Self {
        let detected_type = obj.detected_type();
        Self {
            confidence: obj.confidence(),
            score: selection
                .class_name()
                .zip(detected_type)
                .and_then(|(name, ty)| ty.try_score(name)),
            most_likely: detected_type
                .and_then(|ty| ty.most_likely())
                .map(|(name, _)| name.to_owned()),
        }
    }
}

#[derive(Debug, Serialize)]
struct QueryOutput {
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    threshold: f64,
    selected: Vec<DetectionRecord>,
}

#[derive(Debug, Serialize)]
struct Output {
    size: usize,
    queries: Vec<QueryOutput>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("detset=info".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.detections_path.is_empty() {
        return Err("detections_path must be set in the config".into());
    }

    let detections_text = fs::read_to_string(&config.detections_path)?;
    let detections: Vec<DetectionJson> = serde_json::from_str(&detections_text)?;
    let set: DetectedObjectSet = detections
        .into_iter()
        .map(|det| DetectedObject::from(det).into_ref())
        .collect();
    tracing::info!(size = set.size(), "loaded detections");

    let mut queries = Vec::with_capacity(config.queries.len());
    for query in config.queries {
        let selection = Selection::from(query);
        let selected = set
            .apply(&selection)
            .iter()
            .map(|obj| DetectionRecord::new(obj, &selection))
            .collect();
        let kind = match selection {
            Selection::Confidence { .. } => "confidence",
            Selection::Class { .. } => "class",
        };
        queries.push(QueryOutput {
            kind,
            name: selection.class_name().map(str::to_owned),
            threshold: selection.threshold(),
            selected,
        });
    }

    let output = Output {
        size: set.size(),
        queries,
    };
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
