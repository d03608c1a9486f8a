use clap::{Parser, Subcommand};
use plotunits::numeric::{self, Scalar};
use plotunits::rc::config::Config;
use plotunits::units::{SizeProcessor, SizeValue, Sizes, UnitConverter};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when --config isn't given
const LOCAL_CONFIG: &str = "plotunits.toml";

#[derive(Parser)]
#[command(name = "plotunits")]
#[command(about = "Size unit conversion and numeric helpers for plotting", long_about = None)]
struct Cli {
    /// Settings file (font sizes, DPI, default unit)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert sizes such as "1in", "72pt", "1.5em" or plain numbers
    Convert {
        /// Values to convert; plain numbers are taken to be in UNIT already
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,

        /// Unit of plain numbers and of the output
        #[arg(short, long)]
        unit: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show every known unit and its size in UNIT
    Table {
        #[arg(short, long)]
        unit: Option<String>,
    },

    /// Inclusive range: STOP, START STOP, or START STOP STEP
    Arange {
        #[arg(required = true, num_args = 1..=3, allow_negative_numbers = true)]
        args: Vec<String>,
    },

    /// Cell edges from cell centres
    Edges {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Convert the size strings in a TOML file and print it as JSON
    Process {
        /// TOML file to process
        path: PathBuf,

        #[arg(short, long)]
        unit: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Convert { values, unit, json } => {
            convert_values(&config, &values, unit.as_deref(), json)
        }
        Commands::Table { unit } => show_table(&config, unit.as_deref()),
        Commands::Arange { args } => show_arange(&args),
        Commands::Edges { values } => show_edges(&values),
        Commands::Process { path, unit, output } => {
            process_file(&config, &path, unit.as_deref(), output.as_deref())
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        log::info!("Loading config from {}", path.display());
        return Ok(Config::load_from_file(path)?);
    }

    let local = Path::new(LOCAL_CONFIG);
    if local.exists() {
        log::info!("Loading config from {}", local.display());
        Ok(Config::load_from_file(local)?)
    } else {
        Ok(Config::empty())
    }
}

fn parse_size(raw: &str) -> SizeValue {
    match raw.parse::<f64>() {
        Ok(number) => SizeValue::Number(number),
        Err(_) => SizeValue::Spec(raw.to_string()),
    }
}

fn convert_values(
    config: &Config,
    values: &[String],
    unit: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let unit = unit.unwrap_or(config.units.default.as_str());

    let input = match values {
        [single] => Sizes::One(parse_size(single)),
        many => Sizes::Many(many.iter().map(|v| parse_size(v)).collect()),
    };

    let converter = UnitConverter::new(&config.rc);
    let converted = converter
        .convert(Some(input), unit)?
        .ok_or("No sizes to convert")?;

    if json {
        println!("{}", serde_json::to_string(&converted)?);
    } else {
        for value in converted.into_vec() {
            println!("{}", value);
        }
    }

    Ok(())
}

fn show_table(config: &Config, unit: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let unit = unit.unwrap_or(config.units.default.as_str());

    let table = UnitConverter::new(&config.rc).table()?;
    let scale = table.scale(unit)?;

    println!("Units (in {}):", unit);
    for (name, factor) in table.iter() {
        println!("  {:<3} {}", name, factor / scale);
    }

    Ok(())
}

fn show_arange(raw: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let args = raw
        .iter()
        .map(|s| Scalar::parse(s).ok_or_else(|| format!("Invalid number: {}", s)))
        .collect::<Result<Vec<_>, _>>()?;

    let values = numeric::arange(&args)?;
    println!("{}", serde_json::to_string(&values)?);

    Ok(())
}

fn show_edges(values: &[f64]) -> Result<(), Box<dyn std::error::Error>> {
    let edges = numeric::edges(values)?;
    println!("{}", serde_json::to_string(&edges)?);

    Ok(())
}

fn process_file(
    config: &Config,
    path: &Path,
    unit: Option<&str>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let unit = unit.unwrap_or(config.units.default.as_str());

    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let document: toml::Table = toml::from_str(&content)?;

    let processor = SizeProcessor::new(&config.rc, unit)?;
    let processed = processor.process_value(&toml::Value::Table(document));

    let json = serde_json::to_string_pretty(&processed)?;

    if let Some(output_path) = output {
        std::fs::write(output_path, json)?;
        println!("Sizes in {} written to {}", processor.base_unit(), output_path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}
