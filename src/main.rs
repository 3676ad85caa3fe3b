use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod chart;
mod metrics;
mod preset;
mod render;

pub type Result<T> = anyhow::Result<T>;

const WINDOW_TITLE: &str = "memtable metrics";

#[derive(Parser, Debug)]
#[command(name = "memtable-chart")]
#[command(about = "Plot load-test metrics on a dual-axis chart", long_about = None)]
struct Cli {
    /// Metrics CSV produced by the load generator.
    #[arg(long, default_value = "metrics.csv")]
    input: String,

    /// Which series go on which axis.
    #[arg(long, value_enum, default_value_t = preset::Preset::Full)]
    preset: preset::Preset,

    #[arg(long, default_value_t = 1024, value_parser = clap::value_parser!(u32).range(320..))]
    width: u32,

    #[arg(long, default_value_t = 768, value_parser = clap::value_parser!(u32).range(240..))]
    height: u32,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // 1) Load.
    let table = metrics::load_metrics_file(&cli.input)?;
    info!(input = %cli.input, rows = table.len(), "loaded metrics");

    // 2) Derive + lay out.
    let plan = chart::build_chart_plan(&table, &cli.preset.spec())?;
    info!(preset = ?cli.preset, lines = plan.legend().count(), "planned chart");

    // 3) Draw and block until the window is closed.
    render::show_chart(
        &plan,
        WINDOW_TITLE,
        render::WindowSize {
            width: cli.width,
            height: cli.height,
        },
    )?;

    Ok(())
}

/// Human-readable events on stderr, filtered by `RUST_LOG` (default `info`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
