use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use rankforge::config::ViewParams;
use rankforge::source::DirectorySource;
use std::path::PathBuf;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dataset root, laid out as <root>/<period>/{live,locked}.{csv,json}
    #[arg(global = true, short, long, default_value = "data")]
    data: PathBuf,

    /// JSON file with view defaults; explicit flags still win.
    #[arg(global = true, long)]
    config: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Show(cmd::show::ShowArgs),
    Export(cmd::export::ExportArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let (cli_view, sub_matches) = match &cli.command {
        Commands::Show(args) => (&args.view, matches.subcommand_matches("show")),
        Commands::Export(args) => (&args.view, matches.subcommand_matches("export")),
    };

    let view = match &cli.config {
        Some(path) => {
            info!("⚙️  Loading view config from: {}", path.display());
            let mut file_view = ViewParams::load_from_file(path).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(1);
            });
            if let Some(sub) = sub_matches {
                file_view.merge_from_cli(cli_view, sub);
            }
            file_view
        }
        None => cli_view.clone(),
    };

    info!("📂 Reading datasets under: {}", cli.data.display());
    let source = DirectorySource::new(&cli.data);

    let outcome = match cli.command {
        Commands::Show(_) => cmd::show::run(&view, &source),
        Commands::Export(args) => cmd::export::run(&args, &view, &source),
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}
