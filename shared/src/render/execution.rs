use std::fmt::Write as _;

use super::{EMPTY_STATE, empty_paragraph, empty_row, escape, name_and_tag};
use crate::execution::{AttackRow, DisciplineRow, LeaderboardCard, ScatterPoint};
use crate::format::format_number;

const DISCIPLINE_COLUMNS: usize = 5;
const ATTACK_COLUMNS: usize = 7;

pub fn render_leaderboards(cards: &[LeaderboardCard]) -> String {
    let mut out = String::new();
    for card in cards {
        let items: String = if card.rows.is_empty() {
            format!(r#"<li class="empty-state">{EMPTY_STATE}</li>"#)
        } else {
            card.rows
                .iter()
                .map(|row| {
                    format!(
                        "<li><div>{}</div><span>{}</span></li>",
                        name_and_tag(&row.name, &row.tag, ""),
                        escape(&row.value)
                    )
                })
                .collect()
        };
        let _ = write!(
            out,
            r#"<article class="panel"><h3>{}</h3><ol class="leaderboard-list">{items}</ol></article>"#,
            card.title
        );
    }
    out
}

pub fn render_scatter(points: &[ScatterPoint]) -> String {
    if points.is_empty() {
        return empty_paragraph("Sin datos para graficar.");
    }
    let mut out = String::new();
    for point in points {
        let _ = write!(
            out,
            r#"<span class="scatter-point" style="left:{}%;bottom:{}%" role="img" aria-label="{}" title="{}"></span>"#,
            format_number(point.x_pct),
            format_number(point.y_pct),
            escape(&point.aria_label),
            escape(&point.title)
        );
    }
    out
}

pub fn render_discipline_rows(rows: &[DisciplineRow]) -> String {
    if rows.is_empty() {
        return empty_row(DISCIPLINE_COLUMNS);
    }
    let mut out = String::new();
    for row in rows {
        let _ = write!(
            out,
            r#"<tr><td>{}</td><td><span class="badge {}">{}</span></td><td>{}</td><td>{}</td><td>{}</td></tr>"#,
            name_and_tag(&row.name, &row.tag, "<br />"),
            row.status.css_class(),
            row.attacks_label,
            row.stars,
            row.destruction,
            row.delta
        );
    }
    out
}

pub fn render_attack_rows(rows: &[AttackRow]) -> String {
    if rows.is_empty() {
        return empty_row(ATTACK_COLUMNS);
    }
    let mut out = String::new();
    for row in rows {
        let _ = write!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&row.order),
            name_and_tag(&row.attacker_name, &row.attacker_tag, "<br />"),
            name_and_tag(&row.defender_name, &row.defender_tag, "<br />"),
            row.stars,
            row.destruction,
            row.delta,
            row.mvp_score
        );
    }
    out
}
