//! Stale-result guard for callers that recompute boards concurrently.
//!
//! Each recompute takes a ticket before fetching. Only the holder of the
//! newest ticket may publish; anything older has been superseded.

use crate::board::{build_board, BoardView};
use crate::engine::{BoardQuery, GroupFilter};
use crate::error::RfResult;
use crate::source::StatSource;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: AtomicU64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

/// Holds the most recently accepted board.
#[derive(Debug, Default)]
pub struct BoardSlot {
    tracker: RequestTracker,
    current: RwLock<Option<BoardView>>,
}

impl BoardSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> RequestTicket {
        self.tracker.begin()
    }

    /// Stores `view` if `ticket` is still the newest one. Returns whether it
    /// was accepted.
    pub fn publish(&self, ticket: RequestTicket, view: BoardView) -> bool {
        let mut slot = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if !self.tracker.is_current(ticket) {
            warn!(
                "Discarding stale board from request {} (latest is {})",
                ticket.generation(),
                self.tracker.latest.load(Ordering::SeqCst)
            );
            return false;
        }
        *slot = Some(view);
        true
    }

    pub fn current(&self) -> Option<BoardView> {
        match self.current.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

/// Fetches both datasets for `query` and builds the board. A failed live
/// fetch means there is nothing to rank, so the error is returned as-is.
pub fn load_board(
    source: &dyn StatSource,
    query: &BoardQuery,
    filter: Option<&GroupFilter>,
) -> RfResult<BoardView> {
    let live = source.fetch_live(query.period, filter)?;
    let locked = source.fetch_locked(query.period, filter)?;
    Ok(build_board(&live, locked.as_deref(), query))
}

/// Ticketed recompute: fetch, build, and publish if still current.
pub fn refresh(
    slot: &BoardSlot,
    source: &dyn StatSource,
    query: &BoardQuery,
    filter: Option<&GroupFilter>,
) -> RfResult<bool> {
    let ticket = slot.begin();
    let view = load_board(source, query, filter)?;
    Ok(slot.publish(ticket, view))
}
