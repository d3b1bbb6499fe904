use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use stargazer_chart::{background_stars, project, CelestialPosition, PlottedBody, SkyChart};
use stargazer_guide::config::GuideConfig;
use stargazer_guide::exposure::{max_exposure, max_exposure_seconds, IsoTier, SensorFormat};
use stargazer_guide::sky::assess_with;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Clone, Copy, ValueEnum)]
enum Sensor {
    FullFrame,
    Apsc,
    Mft,
}

impl From<Sensor> for SensorFormat {
    fn from(s: Sensor) -> Self {
        match s {
            Sensor::FullFrame => SensorFormat::FullFrame,
            Sensor::Apsc => SensorFormat::ApsC,
            Sensor::Mft => SensorFormat::MicroFourThirds,
        }
    }
}

#[derive(Parser)]
#[command(name = "stargazer")]
#[command(about = "Sky-chart projection, exposure limits and sky-brightness estimates")]
struct Cli {
    /// JSON config file (chart size, star field, reference points)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project one altitude/azimuth pair onto the chart
    Project {
        /// Altitude in degrees, (0, 90]
        #[arg(long, allow_negative_numbers = true)]
        alt: f64,
        /// Azimuth in degrees, clockwise from north
        #[arg(long, allow_negative_numbers = true)]
        az: f64,
    },
    /// Plot a JSON array of {name, ra, dec, altitude, azimuth} records
    Plot {
        /// Input file
        positions: PathBuf,
    },
    /// 500-rule exposure limit and ISO suggestion
    Exposure {
        /// Focal length in millimetres
        #[arg(long)]
        focal: f64,
        #[arg(long, value_enum, default_value = "full-frame")]
        sensor: Sensor,
    },
    /// Estimate the Bortle class at a location
    Bortle {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },
    /// Generate the decorative background star field
    Stars {
        /// Override the configured star count
        #[arg(long)]
        count: Option<usize>,
        /// Override the configured seed
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn init_logging(verbose: bool) {
    let base = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(base));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => GuideConfig::load(path)?,
        None => GuideConfig::default(),
    };
    let chart = SkyChart::from_config(&config.chart);
    debug!(?chart, "chart geometry");

    match cli.command {
        Commands::Project { alt, az } => {
            if !(alt > 0.0 && alt <= 90.0) {
                anyhow::bail!("altitude {alt} is not above the horizon (expected 0 < alt <= 90)");
            }
            let position = CelestialPosition::from_degrees("point", "", "", alt, az)?;
            let p = project(
                position.altitude_deg(),
                position.azimuth_deg(),
                chart.center_x,
                chart.center_y,
                chart.radius,
            );
            match cli.format {
                OutputFormat::Table => println!("x={:.4} y={:.4}", p.x, p.y),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&p)?),
                OutputFormat::Csv => println!("x,y\n{},{}", p.x, p.y),
            }
        }
        Commands::Plot { positions } => {
            let text = std::fs::read_to_string(&positions)?;
            let records: Vec<CelestialPosition> = serde_json::from_str(&text)
                .map_err(|e| anyhow::anyhow!("Cannot parse {}: {}", positions.display(), e))?;
            let plotted = chart.plot(&records);
            match cli.format {
                OutputFormat::Table => print_plot_table(&records, &plotted),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plotted)?),
                OutputFormat::Csv => print_plot_csv(&plotted),
            }
        }
        Commands::Exposure { focal, sensor } => {
            if focal <= 0.0 {
                anyhow::bail!("focal length must be positive, got {focal}");
            }
            let sensor = SensorFormat::from(sensor);
            let crop = sensor.crop_factor();
            let seconds = max_exposure_seconds(focal, crop);
            let tier = IsoTier::for_exposure(max_exposure(focal, crop));
            match cli.format {
                OutputFormat::Table => {
                    println!("Sensor:        {} (crop {})", sensor, crop);
                    println!("Focal length:  {}mm", focal);
                    println!("Max exposure:  {} seconds", seconds);
                    println!("Suggested ISO: {}", tier);
                }
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "sensor": sensor,
                        "crop_factor": crop,
                        "focal_length_mm": focal,
                        "max_exposure_seconds": seconds,
                        "iso": tier.recommendation(),
                    }))?
                ),
                OutputFormat::Csv => {
                    println!("sensor,crop_factor,focal_length_mm,max_exposure_seconds,iso");
                    println!("{},{},{},{},{}", sensor, crop, focal, seconds, tier);
                }
            }
        }
        Commands::Bortle { lat, lon } => {
            let sample = assess_with(lat, lon, config.reference_points(), config.distance_metric);
            match cli.format {
                OutputFormat::Table => {
                    println!("{}: {}", sample.bortle_class, sample.description());
                    println!("Recommendation: {}", sample.recommendation());
                    if let Some(nearest) = &sample.nearest {
                        println!(
                            "Nearest reference: {} ({:.2}°)",
                            nearest.name, nearest.distance_deg
                        );
                    }
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&sample)?),
                OutputFormat::Csv => {
                    println!("latitude,longitude,bortle_class,nearest,distance_deg");
                    let (name, dist) = sample
                        .nearest
                        .as_ref()
                        .map(|n| (n.name.as_str(), n.distance_deg.to_string()))
                        .unwrap_or(("", String::new()));
                    println!(
                        "{},{},{},{},{}",
                        sample.latitude,
                        sample.longitude,
                        sample.bortle_class.value(),
                        name,
                        dist
                    );
                }
            }
        }
        Commands::Stars { count, seed } => {
            let count = count.unwrap_or(config.chart.star_count);
            let seed = seed.unwrap_or(config.chart.star_seed);
            let stars = background_stars(&chart, count, seed);
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stars)?),
                OutputFormat::Table | OutputFormat::Csv => {
                    println!("x,y,radius,opacity");
                    for s in &stars {
                        println!("{:.4},{:.4},{:.4},{:.4}", s.x, s.y, s.radius, s.opacity);
                    }
                }
            }
        }
    }

    Ok(())
}

fn print_plot_table(records: &[CelestialPosition], plotted: &[PlottedBody]) {
    for (i, body) in plotted.iter().enumerate() {
        let p = &body.position;
        println!(
            "{:3}: {:>10} Alt={:6.2}° Az={:6.2}° RA={} Dec={} -> ({:.2}, {:.2})",
            i + 1,
            p.name(),
            p.altitude_deg(),
            p.azimuth_deg(),
            p.right_ascension(),
            p.declination(),
            body.point.x,
            body.point.y
        );
    }

    let hidden = records.len() - plotted.len();
    if plotted.is_empty() {
        println!("No bodies above the horizon.");
    } else {
        println!("\nAbove horizon: {}  Below horizon: {}", plotted.len(), hidden);
    }
}

fn print_plot_csv(plotted: &[PlottedBody]) {
    println!("name,altitude_deg,azimuth_deg,x,y");
    for b in plotted {
        println!(
            "{},{},{},{},{}",
            b.position.name(),
            b.position.altitude_deg(),
            b.position.azimuth_deg(),
            b.point.x,
            b.point.y
        );
    }
}
