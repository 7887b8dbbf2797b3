//! Active-war view: threat and gap panels, the matchup table and the
//! side-by-side comparison.
//!
//! Matchup rows are keyed by `mapPosition`. A member without a position
//! still contributes key `0` to the row set, but only a member whose position
//! is explicitly `0` is paired into that row, so an unpositioned member never
//! shows up in the table.

use crate::format::{PLACEHOLDER, format_fraction_pct, format_number, text_or_placeholder};
use crate::heat::{GapPolarity, HeatTier};
use crate::lenient::CategoryLists;
use crate::power::{PowerBar, power_bars};
use crate::snapshot::{GapUnit, ThreatUnit, WarActive, WarMember};

pub const CLAN_SIDE: &str = "clan";
pub const OPPONENT_SIDE: &str = "opponent";

const THREATS_PER_CATEGORY: usize = 5;
const GAPS_PER_CATEGORY: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarState {
    NotInWar,
    Preparation,
    WarEnded,
    Unknown,
    Other,
}

impl WarState {
    pub fn from_meta(state: Option<&str>) -> Self {
        match state {
            Some("notInWar") => Self::NotInWar,
            Some("preparation") => Self::Preparation,
            Some("warEnded") => Self::WarEnded,
            Some("unknown") => Self::Unknown,
            _ => Self::Other,
        }
    }

    /// Status line for the state; empty for in-progress or unrecognised states.
    pub fn message(self) -> &'static str {
        match self {
            Self::NotInWar => "El clan no está en guerra activa actualmente.",
            Self::Preparation => "La guerra está en preparación. Los datos pueden estar incompletos.",
            Self::WarEnded => "La guerra terminó. Usa esta vista como referencia histórica.",
            Self::Unknown => "Estado de guerra no disponible.",
            Self::Other => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThreatItem {
    pub unit: String,
    pub heat: Option<HeatTier>,
    pub pct_label: String,
    pub availability_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThreatSection {
    pub category: String,
    pub items: Vec<ThreatItem>,
}

/// Top threats per category, truncated to the first five in document order.
pub fn threat_sections(threats: &CategoryLists<ThreatUnit>) -> Vec<ThreatSection> {
    threats
        .iter()
        .map(|(category, units)| ThreatSection {
            category: category.clone(),
            items: units
                .iter()
                .take(THREATS_PER_CATEGORY)
                .map(|unit| {
                    let avg = unit.avg_pct.unwrap_or(0.0);
                    ThreatItem {
                        unit: text_or_placeholder(unit.unit.as_deref()),
                        heat: HeatTier::classify(avg),
                        pct_label: format_fraction_pct(avg),
                        availability_label: format!(
                            "Disponibilidad {}%",
                            format_number(unit.availability.unwrap_or(0.0) * 100.0)
                        ),
                    }
                })
                .collect(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct GapItem {
    pub unit: String,
    pub polarity: GapPolarity,
    /// Magnitude only; direction is carried by `polarity`.
    pub pct_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GapSection {
    pub category: String,
    pub items: Vec<GapItem>,
}

pub fn gap_sections(gaps: &CategoryLists<GapUnit>) -> Vec<GapSection> {
    gaps.iter()
        .map(|(category, units)| GapSection {
            category: category.clone(),
            items: units
                .iter()
                .take(GAPS_PER_CATEGORY)
                .map(|unit| {
                    let gap = unit.gap_pct.unwrap_or(0.0);
                    GapItem {
                        unit: text_or_placeholder(unit.unit.as_deref()),
                        polarity: GapPolarity::classify(gap),
                        pct_label: format_fraction_pct(gap.abs()),
                    }
                })
                .collect(),
        })
        .collect()
}

/// Name, tag and power bars for one war member.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileCard {
    pub name: String,
    pub tag: String,
    pub bars: Vec<PowerBar>,
}

impl ProfileCard {
    pub fn from_member(member: &WarMember) -> Self {
        Self {
            name: text_or_placeholder(member.name.as_deref()),
            tag: member.tag.clone().unwrap_or_default(),
            bars: power_bars(&member.profile.derived.power_index),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchupRow {
    pub position: f64,
    pub position_label: String,
    pub clan: Option<ProfileCard>,
    pub opponent: Option<ProfileCard>,
    /// Tags carried by the row's compare button; empty when the side is missing.
    pub clan_tag: String,
    pub opponent_tag: String,
}

/// Members of the first team on `side`; empty when no such team exists.
pub fn team_members<'a>(war: &'a WarActive, side: &str) -> &'a [WarMember] {
    war.teams
        .iter()
        .find(|team| team.side.as_deref() == Some(side))
        .map(|team| team.members.as_slice())
        .unwrap_or_default()
}

/// One row per distinct map position across both rosters, ascending.
pub fn pair_positions(clan: &[WarMember], opponent: &[WarMember]) -> Vec<MatchupRow> {
    let mut positions: Vec<f64> = clan
        .iter()
        .chain(opponent)
        .map(|member| member.map_position.unwrap_or(0.0))
        .collect();
    positions.sort_by(f64::total_cmp);
    positions.dedup();

    let at = |members: &[WarMember], position: f64| -> Option<ProfileCard> {
        members
            .iter()
            .find(|member| member.map_position == Some(position))
            .map(ProfileCard::from_member)
    };

    positions
        .into_iter()
        .map(|position| {
            let clan = at(clan, position);
            let opponent = at(opponent, position);
            MatchupRow {
                position,
                position_label: if position == 0.0 {
                    PLACEHOLDER.to_string()
                } else {
                    format_number(position)
                },
                clan_tag: clan.as_ref().map(|card| card.tag.clone()).unwrap_or_default(),
                opponent_tag: opponent
                    .as_ref()
                    .map(|card| card.tag.clone())
                    .unwrap_or_default(),
                clan,
                opponent,
            }
        })
        .collect()
}

pub fn matchup_rows(war: &WarActive) -> Vec<MatchupRow> {
    pair_positions(
        team_members(war, CLAN_SIDE),
        team_members(war, OPPONENT_SIDE),
    )
}

/// First member with `tag` across all teams. An empty tag matches nobody.
pub fn find_member<'a>(war: &'a WarActive, tag: &str) -> Option<&'a WarMember> {
    if tag.is_empty() {
        return None;
    }
    war.teams
        .iter()
        .flat_map(|team| team.members.iter())
        .find(|member| member.tag.as_deref() == Some(tag))
}

/// Contents of the comparison dialog; a missing side renders as "Sin datos".
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub clan: Option<ProfileCard>,
    pub opponent: Option<ProfileCard>,
}

pub fn build_compare(war: &WarActive, clan_tag: &str, opponent_tag: &str) -> Comparison {
    Comparison {
        clan: find_member(war, clan_tag).map(ProfileCard::from_member),
        opponent: find_member(war, opponent_tag).map(ProfileCard::from_member),
    }
}
