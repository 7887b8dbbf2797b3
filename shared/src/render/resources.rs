use std::fmt::Write as _;

use super::{EMPTY_STATE, empty_paragraph, empty_row, escape};
use crate::format::{PLACEHOLDER, format_number};
use crate::resources::{CoverageSection, DonorRow, RecommendationCard, donor_level_label};

const DONOR_COLUMNS: usize = 3;

pub fn render_donor_rows(rows: &[DonorRow]) -> String {
    if rows.is_empty() {
        return empty_row(DONOR_COLUMNS);
    }
    let mut out = String::new();
    for row in rows {
        let donors = if row.donors.is_empty() {
            r#"<span class="empty-state">Sin donadores</span>"#.to_string()
        } else {
            let items: String = row
                .donors
                .iter()
                .map(|donor| {
                    format!(
                        r#"<li><strong>{}</strong><small>{}</small><span class="badge">{}</span></li>"#,
                        escape(donor.name.as_deref().unwrap_or(PLACEHOLDER)),
                        escape(donor.tag.as_deref().unwrap_or_default()),
                        escape(&donor_level_label(donor))
                    )
                })
                .collect();
            format!(r#"<ul class="donor-list">{items}</ul>"#)
        };
        let _ = write!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{donors}</td></tr>",
            escape(&row.unit),
            escape(&row.category)
        );
    }
    out
}

pub fn render_coverage(sections: &[CoverageSection]) -> String {
    if sections.is_empty() {
        return empty_paragraph(EMPTY_STATE);
    }
    let mut out = String::new();
    for section in sections {
        let _ = write!(
            out,
            r#"<section class="panel"><h3>{}</h3><ul class="coverage-list">"#,
            escape(&section.category)
        );
        if section.items.is_empty() {
            out.push_str(r#"<li class="empty-state">Sin gaps relevantes.</li>"#);
        }
        for item in &section.items {
            let _ = write!(
                out,
                r#"<li class="coverage-row"><div class="coverage-meta"><strong>{unit}</strong><span class="badge">{covered} con 90%+</span><span class="badge">{rate}</span></div><div class="coverage-bar" role="img" aria-label="Cobertura {rate}"><span style="width:{width}%"></span></div></li>"#,
                unit = escape(&item.unit),
                covered = escape(&item.coverage90),
                rate = item.rate_label,
                width = format_number(item.width_pct),
            );
        }
        out.push_str("</ul></section>");
    }
    out
}

pub fn render_recommendations(cards: &[RecommendationCard]) -> String {
    if cards.is_empty() {
        return empty_paragraph("Sin recomendaciones disponibles.");
    }
    let mut out = String::new();
    for card in cards {
        let suggestions: String = if card.suggestions.is_empty() {
            r#"<li class="empty-state">Sin sugerencias.</li>"#.to_string()
        } else {
            card.suggestions
                .iter()
                .map(|line| {
                    format!(
                        r#"<li><strong>{}</strong><span class="badge">{}</span><span class="badge">{}</span><span class="badge">{}</span></li>"#,
                        escape(&line.unit),
                        escape(&line.category),
                        line.pct_label,
                        line.coverage_label
                    )
                })
                .collect()
        };
        let _ = write!(
            out,
            r#"<article class="panel recommendation-card"><h3>{}</h3><p class="muted">{}</p><ul class="recommendation-list">{suggestions}</ul></article>"#,
            escape(&card.name),
            escape(&card.tag)
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{coverage_sections, donor_rows, recommendation_cards};
    use crate::snapshot::ResourceAggregates;
    use serde_json::json;

    fn resources() -> ResourceAggregates {
        serde_json::from_value(json!({
            "topDonors": {
                "Tropas": { "Mago": [{ "name": "Ash", "tag": "#A1", "level": 11, "maxLevel": 12 }] },
                "Hechizos": { "Rayo": [] }
            },
            "coverageGaps": {
                "Tropas": [{ "unit": "Mago", "coverage90": 4, "coverageRate": 0.2 }],
                "Asedio": []
            },
            "recommendations": [
                { "player": { "name": "Bo & Co", "tag": "#B2" }, "suggestions": [] }
            ]
        }))
        .expect("resources")
    }

    #[test]
    fn donor_table_lists_donors_or_a_notice() {
        let html = render_donor_rows(&donor_rows(&resources()));
        assert!(html.contains(r#"<strong>Ash</strong><small>#A1</small><span class="badge">11/12</span>"#));
        assert!(html.contains(r#"<td>Rayo</td><td>Hechizos</td><td><span class="empty-state">Sin donadores</span></td>"#));
        assert!(html.find("Mago").unwrap_or(usize::MAX) < html.find("Rayo").unwrap_or(0));
    }

    #[test]
    fn empty_donor_table_shows_placeholder() {
        assert!(render_donor_rows(&[]).contains("Sin datos disponibles."));
    }

    #[test]
    fn coverage_bars_and_empty_sections() {
        let html = render_coverage(&coverage_sections(&resources()));
        assert!(html.contains(r#"<span class="badge">4 con 90%+</span><span class="badge">20%</span>"#));
        assert!(html.contains(r#"aria-label="Cobertura 20%"><span style="width:20%">"#));
        assert!(html.contains(r#"<h3>Asedio</h3><ul class="coverage-list"><li class="empty-state">Sin gaps relevantes.</li>"#));
        assert!(render_coverage(&[]).contains("Sin datos disponibles."));
    }

    #[test]
    fn recommendation_cards_escape_names() {
        let html = render_recommendations(&recommendation_cards(&resources()));
        assert!(html.contains("<h3>Bo &amp; Co</h3>"));
        assert!(html.contains("Sin sugerencias."));
        assert_eq!(
            render_recommendations(&[]),
            r#"<p class="empty-state">Sin recomendaciones disponibles.</p>"#
        );
    }
}
