use clap::Args;
use rankforge::board::export_ranked;
use rankforge::config::ViewParams;
use rankforge::error::RfResult;
use rankforge::session::load_board;
use rankforge::source::StatSource;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub view: ViewParams,

    /// Export the plain top N ranked rows instead of the display window.
    #[arg(long)]
    pub top: Option<usize>,

    /// Write JSON here instead of stdout.
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &ExportArgs, view: &ViewParams, source: &dyn StatSource) -> RfResult<()> {
    let filter = view.group_filter()?;
    let query = view.to_query();

    let json = match args.top {
        Some(n) => {
            let live = source.fetch_live(query.period, filter.as_ref())?;
            let locked = source.fetch_locked(query.period, filter.as_ref())?;
            serde_json::to_string_pretty(&export_ranked(&live, locked.as_deref(), &query, n))?
        }
        None => {
            let board = load_board(source, &query, filter.as_ref())?;
            serde_json::to_string_pretty(board.export_rows())?
        }
    };

    match &args.out {
        Some(path) => {
            fs::write(path, json)?;
            info!("💾 Export written to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
