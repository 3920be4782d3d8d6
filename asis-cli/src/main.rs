use arrow::util::pretty::pretty_format_batches;
use asis_dashboard::build_section;
use asis_schema::section::Section;
use asis_schema::{ColumnTable, DailyTrafficBatch, KeywordBatch, TrafficBatch};
use asis_synth::{DashboardConfig, SampleCache, SampleDataSynthesizer};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "asis", about = "Print the SEO dashboard sample tables")]
struct Cli {
    /// Seed for the traffic sampler (overrides ASIS_SEED / config file).
    #[arg(long, global = true)]
    seed: Option<u64>,
    #[arg(long, global = true, value_enum, default_value_t = Format::Table)]
    format: Format,
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// The tracked keyword fixture.
    Keywords,
    /// The synthesized traffic samples.
    Traffic,
    /// Organic traffic summed per date.
    Daily,
    /// Every table of one dashboard section.
    Section {
        #[arg(value_parser = parse_section)]
        name: Section,
    },
}

fn parse_section(s: &str) -> Result<Section, String> {
    Section::from_slug(s).ok_or_else(|| {
        let known: Vec<&str> = Section::ALL.iter().map(|s| s.slug()).collect();
        format!("unknown section '{s}' (expected one of: {})", known.join(", "))
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut cfg = DashboardConfig::from_env()?;
    if cli.seed.is_some() {
        cfg.seed = cli.seed;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cache = SampleCache::new(SampleDataSynthesizer::new(), cfg.seed);
    let data = cache.get()?;

    match cli.command {
        Command::Keywords => emit(cli.format, &KeywordBatch::from_table(&data.keywords)?)?,
        Command::Traffic => emit(cli.format, &TrafficBatch::from_table(&data.traffic)?)?,
        Command::Daily => emit(cli.format, &DailyTrafficBatch::from_rows(&data.daily())?)?,
        Command::Section { name } => {
            let view = build_section(name, &data)?;
            match cli.format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&view.to_json()?)?),
                Format::Table => {
                    println!("== {}", name.title());
                    for panel in &view.panels {
                        match &panel.chart {
                            Some(chart) => println!("\n{} ({})", panel.table.kind(), chart.title),
                            None => println!("\n{}", panel.table.kind()),
                        }
                        println!("{}", pretty_format_batches(&[panel.table.batch().clone()])?);
                    }
                }
            }
        }
    }

    Ok(())
}

fn emit(format: Format, table: &dyn ColumnTable) -> anyhow::Result<()> {
    match format {
        Format::Table => println!("{}", pretty_format_batches(&[table.batch().clone()])?),
        Format::Json => println!("{}", serde_json::to_string_pretty(&table.to_json()?)?),
    }
    Ok(())
}
