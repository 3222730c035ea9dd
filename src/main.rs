use std::{fs::File,
          io::{self, BufReader},
          path::PathBuf};
use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use colormap_sampler::{Builtin, Registry,
                       export::{self, ExportOptions, DEFAULT_OUTPUT, SAMPLE_COUNT},
                       snippet::{self, SnippetConfig}};

#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct SamplerArgs {
    /// Log filter (`warn`, `info`, `colormap_sampler=debug`, …).
    /// Defaults to `RUST_LOG`, or `info` when it is not set.
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Sample every known colormap and write them to a JSON file.
    Export(ExportArgs),
    /// Print one colormap as `Color.makeRGB(r, g, b)` lines.
    Snippet(SnippetArgs),
    /// List the known colormap names.
    List,
}

#[derive(Debug, Args)]
struct ExportArgs {
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    #[arg(short = 'n', long, default_value_t = SAMPLE_COUNT, value_parser = sample_count)]
    samples: usize,

    /// Order the colormaps by name instead of enumeration order.
    #[arg(long)]
    sort: bool,
}

#[derive(Debug, Args)]
struct SnippetArgs {
    /// Colormap to print; overrides the configuration file.
    colormap: Option<String>,

    /// JSON configuration, e.g. `{"colormap_name": "viridis"}`.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short = 'n', long, value_parser = sample_count)]
    samples: Option<usize>,
}

fn sample_count(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|e| format!("{e}"))?;
    if n < 2 { Err(format!("{n} samples, at least 2 are needed")) }
    else { Ok(n) }
}

fn init_logger(filters: Option<&str>) {
    let env = env_logger::Env::default().default_filter_or("info");
    let mut logger = env_logger::Builder::from_env(env);
    if let Some(filters) = filters {
        logger.parse_filters(filters);
    }
    logger.init();
}

fn run_export(args: ExportArgs) -> anyhow::Result<()> {
    let options = ExportOptions { output: args.output,
                                  samples: args.samples,
                                  sort: args.sort };
    let report = export::export_all(&Builtin, &options)
        .with_context(|| format!("cannot write {}", options.output.display()))?;
    println!("\nSaved {} palettes (of {} registered) to {}",
             report.saved(), report.registered, options.output.display());
    Ok(())
}

fn run_snippet(args: SnippetArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => {
            let fh = File::open(path)
                .with_context(|| format!("cannot open {}", path.display()))?;
            SnippetConfig::from_reader(BufReader::new(fh))
                .with_context(|| format!("cannot read {}", path.display()))?
        }
        None => SnippetConfig::default(),
    };
    if let Some(name) = args.colormap { config.colormap_name = name; }
    if let Some(n) = args.samples { config.samples = n; }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    snippet::export_snippet(&Builtin, &config, &mut out)
        .with_context(|| format!("cannot export `{}`", config.colormap_name))?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = SamplerArgs::parse();
    init_logger(args.log.as_deref());

    match args.command {
        Commands::Export(args) => run_export(args),
        Commands::Snippet(args) => run_snippet(args),
        Commands::List => {
            for name in Builtin.names() {
                println!("{name}");
            }
            Ok(())
        }
    }
}
