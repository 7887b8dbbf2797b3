//! War-execution view. Destruction values here are already percentages
//! (0-100), so they go through [`format_pct`] rather than the fraction formatter.

use crate::filter::SearchFields;
use crate::format::{PLACEHOLDER, format_fixed2, format_number, format_pct, format_signed, text_or_placeholder};
use crate::snapshot::{AttackRecord, LeaderboardEntry, Leaderboards, PlayerExecution, ScatterSample};

#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardRow {
    pub name: String,
    pub tag: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardCard {
    pub title: &'static str,
    pub rows: Vec<LeaderboardRow>,
}

fn leaderboard(
    title: &'static str,
    entries: &[LeaderboardEntry],
    value: impl Fn(&LeaderboardEntry) -> String,
) -> LeaderboardCard {
    LeaderboardCard {
        title,
        rows: entries
            .iter()
            .map(|entry| LeaderboardRow {
                name: text_or_placeholder(entry.name.as_deref()),
                tag: entry.tag.clone().unwrap_or_default(),
                value: value(entry),
            })
            .collect(),
    }
}

/// The four leaderboards in display order, each in the order received.
pub fn leaderboard_cards(boards: &Leaderboards) -> Vec<LeaderboardCard> {
    vec![
        leaderboard("MVP Score", &boards.mvp, |e| {
            format_fixed2(e.mvp_score.unwrap_or(0.0))
        }),
        leaderboard("Estrellas", &boards.stars, |e| {
            format_number(e.total_stars.unwrap_or(0.0))
        }),
        leaderboard("Destrucción prom.", &boards.destruction, |e| {
            format_pct(e.avg_destruction.unwrap_or(0.0))
        }),
        leaderboard("Ataques usados", &boards.attacks_used, |e| {
            format_number(e.attacks_used.unwrap_or(0.0))
        }),
    ]
}

/// A dot on the delta-vs-stars plot, positioned in percent of the plot box.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub x_pct: f64,
    pub y_pct: f64,
    pub aria_label: String,
    pub title: String,
}

/// Scale samples into the plot box. x spans the observed delta range, y is
/// stars relative to the best average (never below 1 star).
pub fn scatter_points(samples: &[ScatterSample]) -> Vec<ScatterPoint> {
    if samples.is_empty() {
        return Vec::new();
    }
    let deltas: Vec<f64> = samples.iter().map(|s| s.avg_delta.unwrap_or(0.0)).collect();
    let min_delta = deltas.iter().copied().fold(f64::INFINITY, f64::min);
    let max_delta = deltas.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let max_stars = samples
        .iter()
        .map(|s| s.avg_stars.unwrap_or(0.0))
        .fold(1.0, f64::max);
    let spread = max_delta - min_delta;
    let range = if spread == 0.0 { 1.0 } else { spread };

    samples
        .iter()
        .zip(deltas)
        .map(|(sample, delta)| {
            let stars = sample.avg_stars.unwrap_or(0.0);
            let signed = format_signed(delta);
            let stars_label = format_number(stars);
            ScatterPoint {
                x_pct: (delta - min_delta) / range * 100.0,
                y_pct: stars / max_stars * 100.0,
                aria_label: format!(
                    "{}: delta {signed}, estrellas {stars_label}",
                    sample.name.as_deref().unwrap_or("Jugador")
                ),
                title: format!(
                    "{} ({signed}, {stars_label}★)",
                    sample.name.as_deref().unwrap_or(PLACEHOLDER)
                ),
            }
        })
        .collect()
}

/// How many of a player's two attacks were used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisciplineStatus {
    Miss,
    One,
    Full,
}

impl DisciplineStatus {
    pub fn classify(attacks_used: f64) -> Self {
        if attacks_used <= 0.0 {
            Self::Miss
        } else if attacks_used == 1.0 {
            Self::One
        } else {
            Self::Full
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Miss => "status-miss",
            Self::One => "status-one",
            Self::Full => "status-full",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisciplineRow {
    pub name: String,
    pub tag: String,
    pub status: DisciplineStatus,
    pub attacks_label: String,
    pub stars: String,
    pub destruction: String,
    pub delta: String,
}

impl DisciplineRow {
    pub fn from_player(player: &PlayerExecution) -> Self {
        let used = player.attacks_used.unwrap_or(0.0);
        Self {
            name: text_or_placeholder(player.name.as_deref()),
            tag: player.tag.clone().unwrap_or_default(),
            status: DisciplineStatus::classify(used),
            attacks_label: format!("{}/2", format_number(used)),
            stars: format_number(player.total_stars.unwrap_or(0.0)),
            destruction: format_pct(player.avg_destruction.unwrap_or(0.0)),
            delta: format_signed(player.avg_delta.unwrap_or(0.0)),
        }
    }
}

pub fn discipline_rows<'a>(players: impl IntoIterator<Item = &'a PlayerExecution>) -> Vec<DisciplineRow> {
    players.into_iter().map(DisciplineRow::from_player).collect()
}

impl SearchFields for PlayerExecution {
    fn search_fields(&self) -> [Option<&str>; 2] {
        [self.name.as_deref(), self.tag.as_deref()]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttackRow {
    pub order: String,
    pub attacker_name: String,
    pub attacker_tag: String,
    pub defender_name: String,
    pub defender_tag: String,
    pub stars: String,
    pub destruction: String,
    pub delta: String,
    pub mvp_score: String,
}

impl AttackRow {
    pub fn from_record(attack: &AttackRecord) -> Self {
        Self {
            order: text_or_placeholder(attack.order.as_deref()),
            attacker_name: text_or_placeholder(attack.attacker_name.as_deref()),
            attacker_tag: attack.attacker_tag.clone().unwrap_or_default(),
            defender_name: text_or_placeholder(attack.defender_name.as_deref()),
            defender_tag: attack.defender_tag.clone().unwrap_or_default(),
            stars: format_number(attack.stars.unwrap_or(0.0)),
            destruction: format_pct(attack.destruction.unwrap_or(0.0)),
            delta: format_signed(attack.delta.unwrap_or(0.0)),
            mvp_score: format_number(attack.mvp_score.unwrap_or(0.0)),
        }
    }
}

pub fn attack_rows(attacks: &[AttackRecord]) -> Vec<AttackRow> {
    attacks.iter().map(AttackRow::from_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::filter_by_query;
    use crate::snapshot::WarExecution;
    use serde_json::json;

    fn execution(value: serde_json::Value) -> WarExecution {
        serde_json::from_value(value).expect("war execution")
    }

    #[test]
    fn leaderboards_keep_received_order_and_format_values() {
        let snapshot = execution(json!({
            "leaderboards": {
                "mvp": [{ "name": "Bo", "mvpScore": 3.14159 }, { "name": "Ash", "mvpScore": 9 }, { "name": "Cid", "mvpScore": 1.625 }],
                "destruction": [{ "name": "Cid", "tag": "#C", "avgDestruction": 87.5 }]
            }
        }));
        let cards = leaderboard_cards(&snapshot.leaderboards);
        let titles: Vec<_> = cards.iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["MVP Score", "Estrellas", "Destrucción prom.", "Ataques usados"]);
        assert_eq!(cards[0].rows[0].name, "Bo");
        assert_eq!(cards[0].rows[0].value, "3.14");
        assert_eq!(cards[0].rows[1].value, "9.00");
        assert_eq!(cards[0].rows[2].value, "1.63");
        assert!(cards[1].rows.is_empty());
        assert_eq!(cards[2].rows[0].value, "88%");
        assert_eq!(cards[2].rows[0].tag, "#C");
    }

    #[test]
    fn scatter_scales_to_delta_range_and_best_stars() {
        let samples: Vec<ScatterSample> = serde_json::from_value(json!([
            { "name": "Ash", "avgDelta": -2, "avgStars": 1.5 },
            { "name": "Bo", "avgDelta": 2, "avgStars": 3 },
            { "avgDelta": 0 }
        ]))
        .expect("samples");
        let points = scatter_points(&samples);
        assert_eq!(points[0].x_pct, 0.0);
        assert_eq!(points[0].y_pct, 50.0);
        assert_eq!(points[1].x_pct, 100.0);
        assert_eq!(points[1].y_pct, 100.0);
        assert_eq!(points[2].x_pct, 50.0);
        assert_eq!(points[0].aria_label, "Ash: delta -2, estrellas 1.5");
        assert_eq!(points[1].title, "Bo (+2, 3★)");
        assert_eq!(points[2].aria_label, "Jugador: delta 0, estrellas 0");
        assert_eq!(points[2].title, "-- (0, 0★)");
    }

    #[test]
    fn scatter_with_flat_delta_and_low_stars() {
        let samples: Vec<ScatterSample> =
            serde_json::from_value(json!([{ "avgDelta": 1, "avgStars": 0.5 }])).expect("samples");
        let points = scatter_points(&samples);
        assert_eq!(points[0].x_pct, 0.0);
        assert_eq!(points[0].y_pct, 50.0);
        assert!(scatter_points(&[]).is_empty());
    }

    #[test]
    fn discipline_classes() {
        assert_eq!(DisciplineStatus::classify(0.0), DisciplineStatus::Miss);
        assert_eq!(DisciplineStatus::classify(-1.0), DisciplineStatus::Miss);
        assert_eq!(DisciplineStatus::classify(1.0), DisciplineStatus::One);
        assert_eq!(DisciplineStatus::classify(2.0), DisciplineStatus::Full);
        assert_eq!(DisciplineStatus::classify(0.5), DisciplineStatus::Full);
        assert_eq!(DisciplineStatus::One.css_class(), "status-one");
    }

    #[test]
    fn discipline_rows_and_filter() {
        let snapshot = execution(json!({
            "players": [
                { "name": "Ash", "tag": "#A1", "attacksUsed": 2, "totalStars": 5, "avgDestruction": 92.4, "avgDelta": 1 },
                { "name": "Bo", "tag": "#B2" }
            ]
        }));
        let rows = discipline_rows(&snapshot.players);
        assert_eq!(rows[0].attacks_label, "2/2");
        assert_eq!(rows[0].status, DisciplineStatus::Full);
        assert_eq!(rows[0].destruction, "92%");
        assert_eq!(rows[0].delta, "+1");
        assert_eq!(rows[1].attacks_label, "0/2");
        assert_eq!(rows[1].status, DisciplineStatus::Miss);
        assert_eq!(rows[1].stars, "0");

        let kept = discipline_rows(filter_by_query(&snapshot.players, "b2"));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "Bo");
    }

    #[test]
    fn attack_rows_fill_placeholders() {
        let snapshot = execution(json!({
            "attacks": [
                { "order": 1, "attackerName": "Ash", "attackerTag": "#A1", "stars": 3, "destruction": 100, "delta": -1, "mvpScore": 4.5 },
                {}
            ]
        }));
        let rows = attack_rows(&snapshot.attacks);
        assert_eq!(rows[0].order, "1");
        assert_eq!(rows[0].defender_name, "--");
        assert_eq!(rows[0].destruction, "100%");
        assert_eq!(rows[0].delta, "-1");
        assert_eq!(rows[0].mvp_score, "4.5");
        assert_eq!(rows[1].order, "--");
        assert_eq!(rows[1].attacker_tag, "");
        assert_eq!(rows[1].mvp_score, "0");
    }
}
