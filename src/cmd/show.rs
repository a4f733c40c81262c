use crate::reports;
use clap::Args;
use rankforge::config::ViewParams;
use rankforge::error::RfResult;
use rankforge::session::load_board;
use rankforge::source::StatSource;

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    #[command(flatten)]
    pub view: ViewParams,
}

pub fn run(view: &ViewParams, source: &dyn StatSource) -> RfResult<()> {
    let filter = view.group_filter()?;
    let board = load_board(source, &view.to_query(), filter.as_ref())?;

    let metric = board.query.metric;
    reports::print_board(&format!("{} · live", board.query.period), &board.live, metric);

    match &board.locked {
        Some(rows) => {
            reports::print_board(&format!("{} · locked", board.query.period), rows, metric)
        }
        None if board.query.period.has_locked() => println!("\n(no locked results yet)"),
        None => {}
    }
    Ok(())
}
