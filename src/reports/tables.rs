use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use rankforge::model::{Medal, Metric, WindowedRow};

fn medal_cell(medal: Option<Medal>) -> Cell {
    match medal {
        Some(Medal::Gold) => Cell::new("🥇").fg(Color::Yellow),
        Some(Medal::Silver) => Cell::new("🥈").fg(Color::White),
        Some(Medal::Bronze) => Cell::new("🥉").fg(Color::DarkYellow),
        None => Cell::new(""),
    }
}

fn format_value(metric: Metric, value: f64) -> String {
    match metric {
        Metric::Distance => format!("{:.1} km", value),
        _ => format!("{:.0}", value),
    }
}

pub fn board(title: &str, rows: &[WindowedRow], metric: Metric) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new("Name").add_attribute(Attribute::Bold),
        Cell::new("Country"),
        Cell::new("Team"),
        Cell::new(metric.label()).fg(Color::Cyan),
    ]);

    for i in [0, 5] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for w in rows {
        if w.is_separated {
            table.add_row(vec!["…", "", "…", "", "", ""]);
        }

        let r = &w.row;
        let mut name = Cell::new(&r.display_name);
        if r.is_current_user {
            name = name.fg(Color::Green).add_attribute(Attribute::Bold);
        }

        table.add_row(vec![
            Cell::new(r.rank),
            medal_cell(r.medal),
            name,
            Cell::new(r.country_name.as_deref().unwrap_or("-")),
            Cell::new(r.team_key.as_deref().unwrap_or("-")),
            Cell::new(format_value(metric, r.metric_value)).fg(Color::Cyan),
        ]);
    }

    println!("\n=== {} ===", title);
    if rows.is_empty() {
        println!("No rows to show.");
        return;
    }
    println!("{}", table);
}
