use std::fmt::Write as _;

use super::{EMPTY_STATE, badge_class, empty_paragraph, empty_row, escape, power_bar_list};
use crate::war::{Comparison, GapSection, MatchupRow, ProfileCard, ThreatSection};

const MATCHUP_COLUMNS: usize = 4;

pub fn render_threats(sections: &[ThreatSection]) -> String {
    if sections.is_empty() {
        return empty_paragraph(EMPTY_STATE);
    }
    let mut out = String::new();
    for section in sections {
        let _ = write!(
            out,
            r#"<div class="threat-category"><h4>{}</h4><ul class="threat-list">"#,
            escape(&section.category)
        );
        for item in &section.items {
            let _ = write!(
                out,
                r#"<li><span>{}</span><span class="{}">{}</span><small>{}</small></li>"#,
                escape(&item.unit),
                badge_class(item.heat),
                item.pct_label,
                item.availability_label
            );
        }
        out.push_str("</ul></div>");
    }
    out
}

pub fn render_gaps(sections: &[GapSection]) -> String {
    if sections.is_empty() {
        return empty_paragraph(EMPTY_STATE);
    }
    let mut out = String::new();
    for section in sections {
        let _ = write!(
            out,
            r#"<div class="gap-category"><h4>{}</h4><ul class="gap-items">"#,
            escape(&section.category)
        );
        for item in &section.items {
            let _ = write!(
                out,
                r#"<li><span>{}</span><span class="badge {}">{}</span></li>"#,
                escape(&item.unit),
                item.polarity.css_class(),
                item.pct_label
            );
        }
        out.push_str("</ul></div>");
    }
    out
}

/// Profile card markup; `class` is the wrapper class.
fn profile(card: Option<&ProfileCard>, class: &str) -> String {
    match card {
        None => format!(r#"<div class="{class}">Sin datos</div>"#),
        Some(card) => format!(
            r#"<div class="{class}"><strong>{}</strong><small>{}</small>{}</div>"#,
            escape(&card.name),
            escape(&card.tag),
            power_bar_list(&card.bars)
        ),
    }
}

/// Matchup table body. Each row's button carries both tags for the compare dialog.
pub fn render_matchup_rows(rows: &[MatchupRow]) -> String {
    if rows.is_empty() {
        return empty_row(MATCHUP_COLUMNS);
    }
    let mut out = String::new();
    for row in rows {
        let _ = write!(
            out,
            r#"<tr><td>{position}</td><td class="cell-profile">{clan}</td><td class="cell-profile">{opponent}</td><td><button class="button" type="button" data-clan="{clan_tag}" data-opponent="{opponent_tag}">Comparar</button></td></tr>"#,
            position = row.position_label,
            clan = profile(row.clan.as_ref(), "profile-card"),
            opponent = profile(row.opponent.as_ref(), "profile-card"),
            clan_tag = escape(&row.clan_tag),
            opponent_tag = escape(&row.opponent_tag),
        );
    }
    out
}

pub fn render_comparison(comparison: &Comparison) -> String {
    [&comparison.clan, &comparison.opponent]
        .into_iter()
        .map(|card| profile(card.as_ref(), "compare-panel"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::WarActive;
    use crate::war::{build_compare, gap_sections, matchup_rows, threat_sections};
    use serde_json::json;

    fn war() -> WarActive {
        serde_json::from_value(json!({
            "derived": {
                "topThreats": {
                    "clan": { "Tropas": [{ "unit": "Dragón", "avgPct": 0.99, "availability": 0.25 }] }
                },
                "gaps": { "Héroes": [{ "unit": "Rey", "gapPct": 0.1 }, { "unit": "Reina", "gapPct": -0.01 }] }
            },
            "teams": [
                { "side": "clan", "members": [
                    { "tag": "#C\"1", "name": "Cid", "mapPosition": 1,
                      "profile": { "derived": { "powerIndex": { "heroes": 0.8 } } } }
                ] },
                { "side": "opponent", "members": [{ "tag": "#O1", "name": "<Oz>", "mapPosition": 2 }] }
            ]
        }))
        .expect("war")
    }

    #[test]
    fn threats_show_heat_badge_and_availability() {
        let war = war();
        let html = render_threats(&threat_sections(&war.derived.top_threats.clan));
        assert!(html.contains(r#"<h4>Tropas</h4>"#));
        assert!(html.contains(r#"<span>Dragón</span><span class="badge heat-high">99%</span><small>Disponibilidad 25%</small>"#));
        assert!(render_threats(&threat_sections(&war.derived.top_threats.opponent)).contains(EMPTY_STATE));
    }

    #[test]
    fn gaps_carry_polarity_classes() {
        let html = render_gaps(&gap_sections(&war().derived.gaps));
        assert!(html.contains(r#"<span>Rey</span><span class="badge gap-positive">10%</span>"#));
        assert!(html.contains(r#"<span>Reina</span><span class="badge gap-neutral">1%</span>"#));
    }

    #[test]
    fn matchup_rows_carry_escaped_tags_and_placeholders() {
        let html = render_matchup_rows(&matchup_rows(&war()));
        assert_eq!(html.matches("<tr>").count(), 2);
        assert!(html.contains(r##"data-clan="#C&quot;1" data-opponent="""##));
        assert!(html.contains(r##"data-clan="" data-opponent="#O1""##));
        assert!(html.contains(r#"<div class="profile-card">Sin datos</div>"#));
        assert!(html.contains("<strong>&lt;Oz&gt;</strong>"));
        assert!(html.contains(r#"<li><span>Héroes</span><span class="bar"><span style="width:80%"></span></span><span class="badge heat-low">80%</span></li>"#));
    }

    #[test]
    fn comparison_renders_two_panels() {
        let war = war();
        let html = render_comparison(&build_compare(&war, "#C\"1", "#nobody"));
        assert_eq!(html.matches("compare-panel").count(), 2);
        assert!(html.contains("<strong>Cid</strong>"));
        assert!(html.ends_with(r#"<div class="compare-panel">Sin datos</div>"#));
    }

    #[test]
    fn empty_matchups_show_placeholder() {
        assert!(render_matchup_rows(&[]).contains(r#"colspan="4""#));
    }
}
