//! Resources view: donor table, coverage gaps and upgrade recommendations.

use crate::collate::locale_cmp;
use crate::filter::SearchFields;
use crate::format::{PLACEHOLDER, format_fraction_pct, round_half_up, text_or_placeholder};
use crate::snapshot::{Donor, Recommendation, ResourceAggregates};

/// One (category, unit) pair of the donor table.
#[derive(Debug, Clone, PartialEq)]
pub struct DonorRow {
    pub category: String,
    pub unit: String,
    pub donors: Vec<Donor>,
}

impl SearchFields for DonorRow {
    fn search_fields(&self) -> [Option<&str>; 2] {
        [Some(self.unit.as_str()), Some(self.category.as_str())]
    }
}

/// Flatten `category → unit → donors` into rows ordered by unit name.
///
/// Every pair yields exactly one row, even with no donors. The sort is stable,
/// so units sharing a name keep their document order.
pub fn donor_rows(resources: &ResourceAggregates) -> Vec<DonorRow> {
    let mut rows: Vec<DonorRow> = resources
        .top_donors
        .iter()
        .flat_map(|(category, units)| {
            units.iter().map(move |(unit, donors)| DonorRow {
                category: category.clone(),
                unit: unit.clone(),
                donors: donors.clone(),
            })
        })
        .collect();
    rows.sort_by(|a, b| locale_cmp(&a.unit, &b.unit));
    rows
}

/// `level/maxLevel` badge text for one donor.
pub fn donor_level_label(donor: &Donor) -> String {
    format!(
        "{}/{}",
        donor.level.as_deref().unwrap_or(PLACEHOLDER),
        donor.max_level.as_deref().unwrap_or(PLACEHOLDER)
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoverageItem {
    pub unit: String,
    pub coverage90: String,
    pub rate_label: String,
    /// Bar width in percent, `round(rate × 100)`.
    pub width_pct: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoverageSection {
    pub category: String,
    pub items: Vec<CoverageItem>,
}

pub fn coverage_sections(resources: &ResourceAggregates) -> Vec<CoverageSection> {
    resources
        .coverage_gaps
        .iter()
        .map(|(category, gaps)| CoverageSection {
            category: category.clone(),
            items: gaps
                .iter()
                .map(|gap| {
                    let rate = gap.coverage_rate.unwrap_or(0.0);
                    CoverageItem {
                        unit: text_or_placeholder(gap.unit.as_deref()),
                        coverage90: gap.coverage90.clone().unwrap_or_else(|| "0".to_string()),
                        rate_label: format_fraction_pct(rate),
                        width_pct: round_half_up(rate * 100.0),
                    }
                })
                .collect(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionLine {
    pub unit: String,
    pub category: String,
    pub pct_label: String,
    pub coverage_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationCard {
    pub name: String,
    pub tag: String,
    pub suggestions: Vec<SuggestionLine>,
}

impl RecommendationCard {
    pub fn from_recommendation(rec: &Recommendation) -> Self {
        Self {
            name: text_or_placeholder(rec.player.name.as_deref()),
            tag: rec.player.tag.clone().unwrap_or_default(),
            suggestions: rec
                .suggestions
                .iter()
                .map(|item| SuggestionLine {
                    unit: text_or_placeholder(item.unit.as_deref()),
                    category: text_or_placeholder(item.category.as_deref()),
                    pct_label: format_fraction_pct(item.pct.unwrap_or(0.0)),
                    coverage_label: format!(
                        "Cobertura {}",
                        format_fraction_pct(item.coverage_rate.unwrap_or(0.0))
                    ),
                })
                .collect(),
        }
    }
}

pub fn recommendation_cards(resources: &ResourceAggregates) -> Vec<RecommendationCard> {
    resources
        .recommendations
        .iter()
        .map(RecommendationCard::from_recommendation)
        .collect()
}
