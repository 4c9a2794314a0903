#[cfg(feature = "cairo-backend")]
use btc_charts::api::{OverlayFlags, PlotConfig, TickConfig};
#[cfg(feature = "cairo-backend")]
use btc_charts::core::ScaleKind;
#[cfg(feature = "cairo-backend")]
use std::fs;
#[cfg(feature = "cairo-backend")]
use std::path::PathBuf;

#[cfg(feature = "cairo-backend")]
const DEFAULT_DATA_PATH: &str = "data/bitcoinity_data.csv";
#[cfg(feature = "cairo-backend")]
const DEFAULT_OUTPUT_PATH: &str = "charts/chart.png";
#[cfg(feature = "cairo-backend")]
const DEFAULT_WIDTH: u32 = 1024;
#[cfg(feature = "cairo-backend")]
const DEFAULT_HEIGHT: u32 = 576;
#[cfg(feature = "cairo-backend")]
const DEFAULT_PADDING: u32 = 18;

#[cfg(feature = "cairo-backend")]
#[derive(Debug)]
struct CliArgs {
    data_path: PathBuf,
    output_path: PathBuf,
    config_path: Option<PathBuf>,
    scale: ScaleKind,
    overlays: OverlayFlags,
    watermark: Option<String>,
}

#[cfg(feature = "cairo-backend")]
fn main() {
    let _ = btc_charts::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cairo-backend"))]
fn main() {
    eprintln!("this tool requires feature `cairo-backend`");
    std::process::exit(1);
}

#[cfg(feature = "cairo-backend")]
fn run() -> Result<(), String> {
    use btc_charts::ChartBuilder;
    use btc_charts::render::CairoRenderer;

    let args = parse_args()?;
    let series = btc_charts::data::load_series(&args.data_path).map_err(|err| err.to_string())?;

    let config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read config `{}`: {err}", path.display()))?;
            PlotConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => {
            let (day_a, day_b) = series
                .day_range()
                .ok_or_else(|| format!("no rows in `{}`", args.data_path.display()))?;
            default_config(day_a, day_b, &args)
        }
    };

    let mut renderer =
        CairoRenderer::new(config.width, config.height).map_err(|err| err.to_string())?;
    let frame =
        ChartBuilder::render(config, &series, &mut renderer).map_err(|err| err.to_string())?;
    renderer
        .commit(&args.output_path)
        .map_err(|err| err.to_string())?;

    let stats = frame.stats();
    println!(
        "wrote {} ({} segments, {} bands, {} labels)",
        args.output_path.display(),
        stats.segments,
        stats.bands,
        stats.texts
    );
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn default_config(day_a: i64, day_b: i64, args: &CliArgs) -> PlotConfig {
    let (y_min, y_max, step) = match args.scale {
        ScaleKind::Linear => (0.0, 70_000.0, 10_000.0),
        ScaleKind::Logarithmic => (0.1, 1_000_000.0, 10.0),
    };
    let mut config = PlotConfig::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, day_a, day_b, y_min, y_max)
        .with_padding(DEFAULT_PADDING)
        .with_scale(args.scale)
        .with_overlays(args.overlays)
        .with_ticks(TickConfig {
            price_step: Some(step),
            year_ticks: true,
            ..TickConfig::default()
        });
    if let Some(watermark) = &args.watermark {
        config = config.with_watermark(watermark.clone());
    }
    config
}

#[cfg(feature = "cairo-backend")]
fn parse_args() -> Result<CliArgs, String> {
    let mut data_path = PathBuf::from(DEFAULT_DATA_PATH);
    let mut output_path = PathBuf::from(DEFAULT_OUTPUT_PATH);
    let mut config_path: Option<PathBuf> = None;
    let mut scale = ScaleKind::Logarithmic;
    let mut overlays = OverlayFlags {
        price: true,
        trend: true,
        stock_to_flow: false,
    };
    let mut watermark: Option<String> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--data" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --data".to_owned())?;
                data_path = PathBuf::from(value);
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output_path = PathBuf::from(value);
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--scale" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --scale".to_owned())?;
                scale = value.parse().map_err(|err: btc_charts::ChartError| err.to_string())?;
            }
            "--overlays" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --overlays".to_owned())?;
                overlays = parse_overlays(&value)?;
            }
            "--watermark" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --watermark".to_owned())?;
                watermark = Some(value);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                return Err(format!("unknown argument `{other}`\n\n{}", usage_message()));
            }
        }
    }

    Ok(CliArgs {
        data_path,
        output_path,
        config_path,
        scale,
        overlays,
        watermark,
    })
}

#[cfg(feature = "cairo-backend")]
fn parse_overlays(value: &str) -> Result<OverlayFlags, String> {
    let mut overlays = OverlayFlags::none();
    for name in value.split(',').map(str::trim).filter(|name| !name.is_empty()) {
        match name {
            "price" => overlays.price = true,
            "trend" => overlays.trend = true,
            "s2f" | "stock_to_flow" => overlays.stock_to_flow = true,
            other => return Err(format!("unknown overlay `{other}`")),
        }
    }
    Ok(overlays)
}

#[cfg(feature = "cairo-backend")]
fn print_usage() {
    println!("{}", usage_message());
}

#[cfg(feature = "cairo-backend")]
fn usage_message() -> String {
    format!(
        "Usage: cargo run --features cairo-backend --bin render_btc_chart -- [options]\n\nOptions:\n  --data <path>          Price CSV (default: {DEFAULT_DATA_PATH})\n  --output <path>        PNG output (default: {DEFAULT_OUTPUT_PATH})\n  --config <path>        JSON plot config, overrides the flags below\n  --scale <linear|log>   Price axis scale (default: log)\n  --overlays <list>      Comma list of price,trend,s2f (default: price,trend)\n  --watermark <text>     Text drawn in the plot corner\n  -h, --help             Show this message"
    )
}
