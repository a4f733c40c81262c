mod common;

use common::{descending_players, RowBuilder};
use rankforge::board::{build_board, export_ranked, select_export};
use rankforge::engine::BoardQuery;
use rankforge::model::{AggregationMode, DisplayLimit, Metric, Period};

fn query(period: Period, limit: DisplayLimit) -> BoardQuery {
    BoardQuery::builder()
        .metric(Metric::Experience)
        .period(period)
        .limit(limit)
        .viewer("p15")
        .build()
}

#[test]
fn test_live_and_locked_are_ranked_independently() {
    let live = descending_players(20);
    // Locked snapshot: same players, opposite order.
    let mut locked = descending_players(20);
    locked.reverse();
    for (i, row) in locked.iter_mut().enumerate() {
        row.stats.experience.delta = Some((20 - i) as f64);
    }

    let q = query(Period::Weekly, DisplayLimit::Top(10));
    let board = build_board(&live, Some(locked.as_slice()), &q);

    assert_eq!(board.live.len(), 11, "p15 is rank 15 live, appended");
    assert_eq!(board.live.last().unwrap().row.rank, 15);

    let locked_view = board.locked.as_ref().unwrap();
    assert_eq!(locked_view.len(), 10, "p15 is rank 6 locked, already visible");
    assert!(locked_view.iter().any(|w| w.row.is_current_user && w.row.rank == 6));
}

#[test]
fn test_all_time_has_no_locked_board_and_no_cap() {
    let live = descending_players(30);
    let locked = descending_players(5);
    let q = query(Period::AllTime, DisplayLimit::Top(10));
    let board = build_board(&live, Some(locked.as_slice()), &q);

    assert!(board.locked.is_none());
    assert_eq!(board.live.len(), 30);
    assert!(board.live.iter().all(|w| !w.is_separated));
}

#[test]
fn test_export_prefers_locked_when_present() {
    let live = vec![1, 2, 3];
    let locked = vec![9];
    assert_eq!(select_export(live.as_slice(), Some(locked.as_slice()), Period::Weekly), &[9]);
    assert_eq!(select_export(live.as_slice(), Some(locked.as_slice()), Period::Monthly), &[9]);
    assert_eq!(select_export(live.as_slice(), Some(locked.as_slice()), Period::AllTime), &[1, 2, 3]);
    assert_eq!(select_export(live.as_slice(), Some(&[][..]), Period::Weekly), &[1, 2, 3]);
    assert_eq!(select_export::<i32>(live.as_slice(), None, Period::Weekly), &[1, 2, 3]);
}

#[test]
fn test_board_export_rows() {
    let live = descending_players(12);
    let locked = vec![RowBuilder::player("p15").xp(1.0, 1.0).build()];
    let q = query(Period::Weekly, DisplayLimit::Top(10));
    let board = build_board(&live, Some(locked.as_slice()), &q);
    let export = board.export_rows();
    assert_eq!(export.len(), 1);
    assert_eq!(export[0].row.source_player_id.as_deref(), Some("p15"));

    let board = build_board(&live, None, &q);
    assert_eq!(board.export_rows().len(), 10);
}

#[test]
fn test_export_ranked_top_n_by_team() {
    let live = vec![
        RowBuilder::player("a").team("Valor").xp(5.0, 0.0).build(),
        RowBuilder::player("b").team("Mystic").xp(7.0, 0.0).build(),
        RowBuilder::player("c").team("valor").xp(5.0, 0.0).build(),
        RowBuilder::player("d").team("Instinct").xp(1.0, 0.0).build(),
    ];
    let q = BoardQuery::builder()
        .period(Period::Monthly)
        .mode(AggregationMode::ByTeam)
        .build();

    let top = export_ranked(&live, None, &q, 2);
    let names: Vec<_> = top.iter().map(|r| r.display_name.as_str()).collect();
    assert_eq!(names, vec!["Valor", "Mystic"]);
    assert_eq!(top[0].metric_value, 10.0);
}
