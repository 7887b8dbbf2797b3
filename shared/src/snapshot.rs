//! Schema of the JSON snapshots produced by the upstream exporter.
//!
//! Every field is optional. Wrong-typed values degrade to their defaults
//! (see [`crate::lenient`]), so a snapshot only fails to parse when the body
//! is not JSON at all.

use serde::Deserialize;
use serde_json::Value;

use crate::lenient::{self, CategoryLists, NestedCategoryLists};

/// `meta` block shared by all three documents.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotMeta {
    #[serde(default, deserialize_with = "lenient::text")]
    pub generated_at: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub note: Option<String>,
}

// ---------------------------------------------------------------------------
// clan_snapshot.json
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ClanSnapshot {
    #[serde(default, deserialize_with = "lenient::record")]
    pub meta: SnapshotMeta,
    #[serde(default, deserialize_with = "lenient::record")]
    pub clan: ClanSummary,
    #[serde(default, deserialize_with = "lenient::record")]
    pub aggregates: Aggregates,
    #[serde(default, deserialize_with = "lenient::list")]
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClanSummary {
    /// Member count as reported by the game API.
    #[serde(default, deserialize_with = "lenient::text")]
    pub members: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub war_wins: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub war_ties: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub war_losses: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub war_win_streak: Option<f64>,
    /// Opaque; only its truthiness matters.
    #[serde(default)]
    pub warlog: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregates {
    #[serde(default, deserialize_with = "lenient::text")]
    pub th_avg: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub th_distribution: Vec<ThCount>,
    #[serde(default, deserialize_with = "lenient::record")]
    pub resources: ResourceAggregates,
}

/// Raw, possibly sparse histogram entry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ThCount {
    #[serde(default, deserialize_with = "lenient::number")]
    pub th: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub count: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceAggregates {
    /// category → unit → donors
    #[serde(default, deserialize_with = "lenient::nested_category_lists")]
    pub top_donors: NestedCategoryLists<Donor>,
    #[serde(default, deserialize_with = "lenient::category_lists")]
    pub coverage_gaps: CategoryLists<CoverageGap>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub recommendations: Vec<Recommendation>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donor {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub tag: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub level: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub max_level: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageGap {
    #[serde(default, deserialize_with = "lenient::text")]
    pub unit: Option<String>,
    /// Members holding the unit at 90%+ of max level.
    #[serde(default, deserialize_with = "lenient::text")]
    pub coverage90: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub coverage_rate: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Recommendation {
    #[serde(default, deserialize_with = "lenient::record")]
    pub player: PlayerRef,
    #[serde(default, deserialize_with = "lenient::list")]
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PlayerRef {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub tag: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    #[serde(default, deserialize_with = "lenient::text")]
    pub unit: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub pct: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub coverage_rate: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Member {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub tag: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub th: Option<String>,
    #[serde(default, deserialize_with = "lenient::record")]
    pub derived: MemberDerived,
}

/// Exporter-computed stats for one player.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDerived {
    #[serde(default, deserialize_with = "lenient::record")]
    pub power_index: PowerIndex,
    #[serde(default, deserialize_with = "lenient::record")]
    pub top_research_by_cat: TopResearch,
    #[serde(default, deserialize_with = "lenient::text")]
    pub super_active_count: Option<String>,
}

/// Per-category progress fractions in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerIndex {
    #[serde(default, deserialize_with = "lenient::number")]
    pub troops: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub spells: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub heroes: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub hero_equipment: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TopResearch {
    #[serde(default, deserialize_with = "lenient::list")]
    pub troops: Vec<ResearchedUnit>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub pets: Vec<ResearchedUnit>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub spells: Vec<ResearchedUnit>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResearchedUnit {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub level: Option<String>,
}

// ---------------------------------------------------------------------------
// war_active.json
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WarActive {
    #[serde(default, deserialize_with = "lenient::record")]
    pub meta: SnapshotMeta,
    #[serde(default, deserialize_with = "lenient::record")]
    pub derived: WarDerived,
    #[serde(default, deserialize_with = "lenient::list")]
    pub teams: Vec<Team>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarDerived {
    #[serde(default, deserialize_with = "lenient::record")]
    pub top_threats: TopThreats,
    #[serde(default, deserialize_with = "lenient::category_lists")]
    pub gaps: CategoryLists<GapUnit>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TopThreats {
    #[serde(default, deserialize_with = "lenient::category_lists")]
    pub clan: CategoryLists<ThreatUnit>,
    #[serde(default, deserialize_with = "lenient::category_lists")]
    pub opponent: CategoryLists<ThreatUnit>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatUnit {
    #[serde(default, deserialize_with = "lenient::text")]
    pub unit: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub avg_pct: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub availability: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapUnit {
    #[serde(default, deserialize_with = "lenient::text")]
    pub unit: Option<String>,
    /// Signed clan-minus-opponent difference.
    #[serde(default, deserialize_with = "lenient::number")]
    pub gap_pct: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Team {
    #[serde(default, deserialize_with = "lenient::text")]
    pub side: Option<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub members: Vec<WarMember>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarMember {
    #[serde(default, deserialize_with = "lenient::text")]
    pub tag: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub map_position: Option<f64>,
    #[serde(default, deserialize_with = "lenient::record")]
    pub profile: MemberProfile,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MemberProfile {
    #[serde(default, deserialize_with = "lenient::record")]
    pub derived: MemberDerived,
}

// ---------------------------------------------------------------------------
// war_execution.json
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WarExecution {
    #[serde(default, deserialize_with = "lenient::record")]
    pub meta: SnapshotMeta,
    #[serde(default, deserialize_with = "lenient::record")]
    pub leaderboards: Leaderboards,
    #[serde(default, deserialize_with = "lenient::list")]
    pub scatter: Vec<ScatterSample>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub players: Vec<PlayerExecution>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub attacks: Vec<AttackRecord>,
}

/// Pre-ranked lists; display order is the document order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboards {
    #[serde(default, deserialize_with = "lenient::list")]
    pub mvp: Vec<LeaderboardEntry>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub stars: Vec<LeaderboardEntry>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub destruction: Vec<LeaderboardEntry>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub attacks_used: Vec<LeaderboardEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub tag: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub mvp_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_stars: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub avg_destruction: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub attacks_used: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterSample {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub avg_delta: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub avg_stars: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerExecution {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub tag: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub attacks_used: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_stars: Option<f64>,
    /// Already on a 0-100 scale.
    #[serde(default, deserialize_with = "lenient::number")]
    pub avg_destruction: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub avg_delta: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttackRecord {
    #[serde(default, deserialize_with = "lenient::text")]
    pub order: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub attacker_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub attacker_tag: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub defender_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub defender_tag: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub stars: Option<f64>,
    /// Already on a 0-100 scale.
    #[serde(default, deserialize_with = "lenient::number")]
    pub destruction: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub delta: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub mvp_score: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_clan_snapshot_with_nested_resources() {
        let snapshot: ClanSnapshot = serde_json::from_value(json!({
            "meta": { "generatedAt": "2026-10-01T12:00:00Z" },
            "clan": { "members": 42, "warWins": 10, "warTies": 1, "warLosses": 3, "warlog": [] },
            "aggregates": {
                "thAvg": 13.4,
                "thDistribution": [{ "th": 12, "count": 4 }],
                "resources": {
                    "topDonors": { "Tropas": { "Mago": [{ "name": "Ash", "maxLevel": 12 }] } },
                    "note": "Top 3 por unidad."
                }
            },
            "members": [{
                "name": "Ash",
                "tag": "#A1",
                "th": 14,
                "derived": { "powerIndex": { "troops": 0.9, "heroEquipment": 0.5 } }
            }]
        }))
        .expect("snapshot should parse");

        assert_eq!(snapshot.meta.generated_at.as_deref(), Some("2026-10-01T12:00:00Z"));
        assert_eq!(snapshot.clan.members.as_deref(), Some("42"));
        assert_eq!(snapshot.clan.war_wins, Some(10.0));
        assert_eq!(snapshot.aggregates.th_avg.as_deref(), Some("13.4"));
        let donors = &snapshot.aggregates.resources.top_donors;
        assert_eq!(donors[0].0, "Tropas");
        assert_eq!(donors[0].1[0].0, "Mago");
        assert_eq!(donors[0].1[0].1[0].max_level.as_deref(), Some("12"));
        let member = &snapshot.members[0];
        assert_eq!(member.th.as_deref(), Some("14"));
        assert_eq!(member.derived.power_index.hero_equipment, Some(0.5));
        assert_eq!(member.derived.power_index.spells, None);
    }

    #[test]
    fn parses_war_active_teams_and_threats() {
        let war: WarActive = serde_json::from_value(json!({
            "meta": { "state": "inWar" },
            "derived": {
                "topThreats": { "clan": { "Tropas": [{ "unit": "Globo", "avgPct": 0.95 }] } },
                "gaps": { "Hechizos": [{ "unit": "Rayo", "gapPct": -0.1 }] }
            },
            "teams": [{
                "side": "clan",
                "members": [{ "tag": "#A1", "mapPosition": 1, "profile": { "derived": { "powerIndex": { "heroes": 1 } } } }]
            }]
        }))
        .expect("war snapshot should parse");

        assert_eq!(war.meta.state.as_deref(), Some("inWar"));
        assert_eq!(war.derived.top_threats.clan[0].1[0].avg_pct, Some(0.95));
        assert!(war.derived.top_threats.opponent.is_empty());
        assert_eq!(war.derived.gaps[0].1[0].gap_pct, Some(-0.1));
        let member = &war.teams[0].members[0];
        assert_eq!(member.map_position, Some(1.0));
        assert_eq!(member.profile.derived.power_index.heroes, Some(1.0));
    }

    #[test]
    fn empty_object_parses_to_defaults() {
        let execution: WarExecution = serde_json::from_str("{}").expect("empty document");
        assert_eq!(execution, WarExecution::default());
        let clan: ClanSnapshot = serde_json::from_str(r#"{"members": null, "clan": 3}"#)
            .expect("wrong-typed sections");
        assert!(clan.members.is_empty());
        assert_eq!(clan.clan, ClanSummary::default());
    }

    #[test]
    fn non_json_body_is_rejected() {
        assert!(serde_json::from_str::<ClanSnapshot>("<html>").is_err());
    }
}
