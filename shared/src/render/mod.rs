//! HTML fragments for each view.
//!
//! Every function here is pure: it takes a view model and returns the inner
//! markup of one container. All snapshot-derived text goes through [`escape`].

pub mod execution;
pub mod resources;
pub mod roster;
pub mod war;

use crate::format::format_number;
use crate::heat::{HeatTier, heat_class};
use crate::power::PowerBar;

pub const EMPTY_STATE: &str = "Sin datos disponibles.";

/// Escape text for element content and double-quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Placeholder row spanning a whole table.
pub(crate) fn empty_row(colspan: usize) -> String {
    format!(r#"<tr><td colspan="{colspan}" class="empty-state">{EMPTY_STATE}</td></tr>"#)
}

pub(crate) fn empty_paragraph(text: &str) -> String {
    format!(r#"<p class="empty-state">{text}</p>"#)
}

/// `badge` plus an optional heat class.
pub(crate) fn badge_class(heat: Option<HeatTier>) -> String {
    match heat_class(heat) {
        "" => "badge".to_string(),
        class => format!("badge {class}"),
    }
}

/// Strong name over a small tag, the way people are shown in every table.
pub(crate) fn name_and_tag(name: &str, tag: &str, separator: &str) -> String {
    format!(
        "<strong>{}</strong>{separator}<small>{}</small>",
        escape(name),
        escape(tag)
    )
}

pub(crate) fn power_bar_list(bars: &[PowerBar]) -> String {
    let items: String = bars
        .iter()
        .map(|bar| {
            format!(
                r#"<li><span>{}</span><span class="bar"><span style="width:{}%"></span></span><span class="{}">{}</span></li>"#,
                bar.label,
                format_number(bar.width_pct),
                badge_class(bar.heat),
                bar.pct_label
            )
        })
        .collect();
    format!(r#"<ul class="power-bars">{items}</ul>"#)
}
