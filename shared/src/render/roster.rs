use std::fmt::Write as _;

use super::{EMPTY_STATE, badge_class, empty_paragraph, empty_row, escape, name_and_tag};
use crate::format::format_number;
use crate::histogram::HistogramBar;
use crate::roster::{KpiCard, PlayerRow, ResearchLine, RosterKpis};

const PLAYER_COLUMNS: usize = 5;

pub fn render_kpis(kpis: &RosterKpis) -> String {
    let mut out: String = kpis.cards.iter().map(kpi_card).collect();

    out.push_str(r#"<div class="kpi-card kpi-card--compact"><span>Guerra</span><dl class="kpi-inline">"#);
    for stat in &kpis.war {
        let term = match stat.title {
            Some(title) => format!(r#"<abbr title="{title}">{}</abbr>"#, stat.label),
            None => stat.label.to_string(),
        };
        let _ = write!(
            out,
            r#"<div class="kpi-inline-item"><dt>{term}</dt><dd>{}</dd></div>"#,
            escape(&stat.value)
        );
    }
    out.push_str("</dl></div>");
    out
}

fn kpi_card(card: &KpiCard) -> String {
    format!(
        r#"<div class="kpi-card"><span>{}</span><strong>{}</strong></div>"#,
        card.label,
        escape(&card.value)
    )
}

pub fn render_th_chart(bars: &[HistogramBar]) -> String {
    if bars.is_empty() {
        return empty_paragraph(EMPTY_STATE);
    }
    let mut out = String::new();
    for bar in bars {
        let class = if bar.empty {
            "histogram-bar histogram-bar--empty"
        } else {
            "histogram-bar"
        };
        let _ = write!(
            out,
            r#"<div class="{class}" role="listitem"><span class="bar-value">{count}</span><div class="bar-area"><span class="bar" style="height:{height}%;--bar-color: var({token});"></span></div><span class="bar-label">TH {th}</span></div>"#,
            count = format_number(bar.count),
            height = format_number(bar.height_pct),
            token = bar.color_token,
            th = bar.th,
        );
    }
    out
}

pub fn render_player_rows(rows: &[PlayerRow]) -> String {
    if rows.is_empty() {
        return empty_row(PLAYER_COLUMNS);
    }
    let mut out = String::new();
    for row in rows {
        let research: String = row.research.iter().map(research_item).collect();
        let _ = write!(
            out,
            r#"<tr><td>{who}</td><td>{th}</td><td><span class="{badge}">{avg}</span></td><td><ul class="player-top-list">{research}</ul></td><td>{active}</td></tr>"#,
            who = name_and_tag(&row.name, &row.tag, "<br />"),
            th = escape(&row.th),
            badge = badge_class(row.heat),
            avg = row.avg_power_label,
            active = escape(&row.super_active),
        );
    }
    out
}

fn research_item(line: &ResearchLine) -> String {
    let display = if line.units.is_empty() {
        r#"<span class="muted">Sin datos</span>"#.to_string()
    } else {
        escape(&line.units.join(", "))
    };
    format!("<li><strong>{}:</strong> {display}</li>", line.label)
}
