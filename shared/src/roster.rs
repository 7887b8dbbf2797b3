//! Roster view: KPI cards, TH histogram input and one row per member.

use crate::filter::SearchFields;
use crate::format::{PLACEHOLDER, format_fraction_pct, format_number, text_or_placeholder};
use crate::heat::HeatTier;
use crate::snapshot::{ClanSnapshot, Member, ResearchedUnit};

#[derive(Debug, Clone, PartialEq)]
pub struct KpiCard {
    pub label: &'static str,
    pub value: String,
}

/// One term of the compact war card. `title` expands an abbreviated label.
#[derive(Debug, Clone, PartialEq)]
pub struct WarStat {
    pub label: &'static str,
    pub value: String,
    pub title: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RosterKpis {
    pub cards: Vec<KpiCard>,
    pub war: Vec<WarStat>,
}

pub fn build_kpis(snapshot: &ClanSnapshot) -> RosterKpis {
    let cards = vec![
        KpiCard {
            label: "TH promedio",
            value: text_or_placeholder(snapshot.aggregates.th_avg.as_deref()),
        },
        KpiCard {
            label: "Miembros",
            value: text_or_placeholder(snapshot.clan.members.as_deref()),
        },
    ];
    RosterKpis {
        cards,
        war: war_stats(snapshot),
    }
}

fn war_stats(snapshot: &ClanSnapshot) -> Vec<WarStat> {
    let clan = &snapshot.clan;
    let total = match (clan.war_wins, clan.war_ties, clan.war_losses) {
        (Some(wins), Some(ties), Some(losses)) => Some(wins + ties + losses),
        _ => None,
    };
    let win_rate = match (clan.war_wins, total) {
        (Some(wins), Some(total)) if total > 0.0 => format_fraction_pct(wins / total),
        _ => PLACEHOLDER.to_string(),
    };
    let shown = |value: Option<f64>| value.map(format_number).unwrap_or_else(|| PLACEHOLDER.to_string());

    let mut stats = vec![
        WarStat {
            label: "Guerras",
            value: shown(total),
            title: None,
        },
        WarStat {
            label: "V",
            value: shown(clan.war_wins),
            title: Some("Victorias"),
        },
        WarStat {
            label: "D",
            value: shown(clan.war_losses),
            title: Some("Derrotas"),
        },
        WarStat {
            label: "E",
            value: shown(clan.war_ties),
            title: Some("Empates"),
        },
        WarStat {
            label: "%",
            value: win_rate,
            title: Some("Porcentaje de victorias"),
        },
    ];
    if let Some(streak) = clan.war_win_streak.filter(|streak| *streak >= 1.0) {
        stats.push(WarStat {
            label: "Streak",
            value: format_number(streak),
            title: None,
        });
    }
    stats
}

/// Top-researched units of one category; an empty list renders as "Sin datos".
#[derive(Debug, Clone, PartialEq)]
pub struct ResearchLine {
    pub label: &'static str,
    pub units: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRow {
    pub name: String,
    pub tag: String,
    pub th: String,
    pub avg_power: f64,
    pub avg_power_label: String,
    pub heat: Option<HeatTier>,
    pub research: Vec<ResearchLine>,
    pub super_active: String,
}

impl PlayerRow {
    pub fn from_member(member: &Member) -> Self {
        let derived = &member.derived;
        let avg_power = derived.power_index.average();
        let top = &derived.top_research_by_cat;
        Self {
            name: text_or_placeholder(member.name.as_deref()),
            tag: member.tag.clone().unwrap_or_default(),
            th: text_or_placeholder(member.th.as_deref()),
            avg_power,
            avg_power_label: format_fraction_pct(avg_power),
            heat: HeatTier::classify(avg_power),
            research: vec![
                research_line("Tropas", &top.troops),
                research_line("Mascotas", &top.pets),
                research_line("Hechizos", &top.spells),
            ],
            super_active: derived
                .super_active_count
                .clone()
                .unwrap_or_else(|| "0".to_string()),
        }
    }
}

fn research_line(label: &'static str, units: &[ResearchedUnit]) -> ResearchLine {
    ResearchLine {
        label,
        units: units
            .iter()
            .map(|unit| {
                format!(
                    "{} (Nv. {})",
                    unit.name.as_deref().unwrap_or(PLACEHOLDER),
                    unit.level.as_deref().unwrap_or(PLACEHOLDER)
                )
            })
            .collect(),
    }
}

pub fn player_rows<'a>(members: impl IntoIterator<Item = &'a Member>) -> Vec<PlayerRow> {
    members.into_iter().map(PlayerRow::from_member).collect()
}

impl SearchFields for Member {
    fn search_fields(&self) -> [Option<&str>; 2] {
        [self.name.as_deref(), self.tag.as_deref()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::filter_by_query;
    use serde_json::json;

    fn snapshot(value: serde_json::Value) -> ClanSnapshot {
        serde_json::from_value(value).expect("clan snapshot")
    }

    fn stat<'a>(kpis: &'a RosterKpis, label: &str) -> Option<&'a WarStat> {
        kpis.war.iter().find(|stat| stat.label == label)
    }

    #[test]
    fn kpis_from_full_clan_record() {
        let kpis = build_kpis(&snapshot(json!({
            "clan": { "members": 48, "warWins": 30, "warTies": 2, "warLosses": 8, "warWinStreak": 4 },
            "aggregates": { "thAvg": 14.2 }
        })));
        assert_eq!(kpis.cards[0].label, "TH promedio");
        assert_eq!(kpis.cards[0].value, "14.2");
        assert_eq!(kpis.cards[1].value, "48");
        assert_eq!(stat(&kpis, "Guerras").map(|s| s.value.as_str()), Some("40"));
        assert_eq!(stat(&kpis, "%").map(|s| s.value.as_str()), Some("75%"));
        assert_eq!(stat(&kpis, "V").and_then(|s| s.title), Some("Victorias"));
        assert_eq!(stat(&kpis, "Streak").map(|s| s.value.as_str()), Some("4"));
    }

    #[test]
    fn kpis_degrade_to_placeholders() {
        let kpis = build_kpis(&snapshot(json!({ "clan": { "warWins": 3, "warLosses": 1 } })));
        assert_eq!(kpis.cards[0].value, "--");
        assert_eq!(kpis.cards[1].value, "--");
        assert_eq!(stat(&kpis, "Guerras").map(|s| s.value.as_str()), Some("--"));
        assert_eq!(stat(&kpis, "V").map(|s| s.value.as_str()), Some("3"));
        assert_eq!(stat(&kpis, "E").map(|s| s.value.as_str()), Some("--"));
        assert_eq!(stat(&kpis, "%").map(|s| s.value.as_str()), Some("--"));
        assert!(stat(&kpis, "Streak").is_none());
    }

    #[test]
    fn zero_wars_has_no_win_rate_and_short_streak_is_hidden() {
        let kpis = build_kpis(&snapshot(json!({
            "clan": { "warWins": 0, "warTies": 0, "warLosses": 0, "warWinStreak": 0 }
        })));
        assert_eq!(stat(&kpis, "Guerras").map(|s| s.value.as_str()), Some("0"));
        assert_eq!(stat(&kpis, "%").map(|s| s.value.as_str()), Some("--"));
        assert_eq!(kpis.war.len(), 5);
    }

    #[test]
    fn player_row_summarises_derived_stats() {
        let member: Member = serde_json::from_value(json!({
            "name": "Ash",
            "tag": "#A1",
            "th": 15,
            "derived": {
                "powerIndex": { "troops": 1.0, "spells": 0.96, "heroes": 1.0, "heroEquipment": 1.0 },
                "topResearchByCat": {
                    "troops": [{ "name": "Mago", "level": 12 }, { "name": "Globo", "level": 10 }],
                    "spells": []
                },
                "superActiveCount": 2
            }
        }))
        .expect("member");
        let row = PlayerRow::from_member(&member);
        assert_eq!(row.th, "15");
        assert_eq!(row.avg_power_label, "99%");
        assert_eq!(row.heat, Some(HeatTier::High));
        assert_eq!(row.research[0].units, vec!["Mago (Nv. 12)", "Globo (Nv. 10)"]);
        assert_eq!(row.research[1].label, "Mascotas");
        assert!(row.research[1].units.is_empty());
        assert!(row.research[2].units.is_empty());
        assert_eq!(row.super_active, "2");
    }

    #[test]
    fn bare_member_renders_placeholders() {
        let row = PlayerRow::from_member(&Member::default());
        assert_eq!(row.name, "--");
        assert_eq!(row.tag, "");
        assert_eq!(row.th, "--");
        assert_eq!(row.avg_power, 0.0);
        assert_eq!(row.avg_power_label, "0%");
        assert_eq!(row.heat, None);
        assert_eq!(row.super_active, "0");
    }

    #[test]
    fn members_filter_by_name_or_tag() {
        let snapshot = snapshot(json!({
            "members": [{ "name": "Ash", "tag": "#A1" }, { "name": "Bo", "tag": "#B2" }]
        }));
        let kept = filter_by_query(&snapshot.members, "a1");
        let rows = player_rows(kept);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Ash");
        assert_eq!(player_rows(filter_by_query(&snapshot.members, "")).len(), 2);
    }
}
