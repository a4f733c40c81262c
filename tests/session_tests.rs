mod common;

use common::descending_players;
use rankforge::board::build_board;
use rankforge::engine::{BoardQuery, GroupFilter};
use rankforge::error::RankForgeError;
use rankforge::model::{AggregationType, Period};
use rankforge::session::{load_board, refresh, BoardSlot, RequestTracker};
use rankforge::source::MemorySource;
use std::sync::Arc;
use std::thread;

#[test]
fn test_tickets_increase_and_only_latest_is_current() {
    let tracker = RequestTracker::new();
    let first = tracker.begin();
    let second = tracker.begin();
    assert!(second > first);
    assert_eq!(second.generation(), first.generation() + 1);
    assert!(!tracker.is_current(first));
    assert!(tracker.is_current(second));
}

#[test]
fn test_stale_result_is_discarded() {
    let slot = BoardSlot::new();
    let q_old = BoardQuery::builder().period(Period::Weekly).build();
    let q_new = BoardQuery::builder().period(Period::Monthly).build();
    let rows = descending_players(3);

    let old = slot.begin();
    let new = slot.begin();

    assert!(slot.publish(new, build_board(&rows, None, &q_new)));
    assert!(!slot.publish(old, build_board(&rows, None, &q_old)));
    assert_eq!(slot.current().unwrap().query.period, Period::Monthly);
}

#[test]
fn test_concurrent_refreshes_keep_latest_query() {
    let slot = Arc::new(BoardSlot::new());
    let rows = descending_players(50);
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let slot = Arc::clone(&slot);
            let rows = rows.clone();
            thread::spawn(move || {
                let ticket = slot.begin();
                let q = BoardQuery::builder().build();
                slot.publish(ticket, build_board(&rows, None, &q))
            })
        })
        .collect();

    let accepted = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();
    assert!(accepted <= 8);
    // A later request always supersedes: a fresh ticket publishes successfully.
    let ticket = slot.begin();
    let q = BoardQuery::builder().period(Period::AllTime).build();
    assert!(slot.publish(ticket, build_board(&rows, None, &q)));
    assert_eq!(slot.current().unwrap().query.period, Period::AllTime);
}

#[test]
fn test_load_board_and_refresh_from_memory_source() {
    let mut chile = descending_players(4);
    for row in &mut chile[..2] {
        row.country_name = Some("Chile".into());
    }
    let source = MemorySource::default()
        .with_live(Period::Weekly, chile.clone())
        .with_locked(Period::Weekly, chile);

    let q = BoardQuery::builder().period(Period::Weekly).build();
    let filter = GroupFilter::new(AggregationType::Country, "chile");
    let board = load_board(&source, &q, Some(&filter)).unwrap();
    assert_eq!(board.live.len(), 2);
    assert_eq!(board.locked.as_ref().map(|l| l.len()), Some(2));

    let slot = BoardSlot::new();
    assert!(refresh(&slot, &source, &q, None).unwrap());
    assert_eq!(slot.current().unwrap().live.len(), 4);
}

#[test]
fn test_missing_live_dataset_is_an_error() {
    let source = MemorySource::default();
    let q = BoardQuery::builder().period(Period::Monthly).build();
    let err = load_board(&source, &q, None).unwrap_err();
    assert!(matches!(err, RankForgeError::MissingDataset(_)));
}
