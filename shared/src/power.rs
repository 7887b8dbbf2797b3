use crate::format::{format_fraction_pct, round_half_up};
use crate::heat::HeatTier;
use crate::snapshot::PowerIndex;

impl PowerIndex {
    /// Sub-scores in display order: troops, spells, heroes, hero equipment.
    pub fn scores(&self) -> [Option<f64>; 4] {
        [self.troops, self.spells, self.heroes, self.hero_equipment]
    }

    /// Mean of the numeric sub-scores; 0 when there are none.
    pub fn average(&self) -> f64 {
        let present: Vec<f64> = self.scores().into_iter().flatten().collect();
        if present.is_empty() {
            return 0.0;
        }
        present.iter().sum::<f64>() / present.len() as f64
    }
}

/// One labelled progress bar in a profile card.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerBar {
    pub label: &'static str,
    pub width_pct: f64,
    pub pct_label: String,
    pub heat: Option<HeatTier>,
}

const POWER_LABELS: [&str; 4] = ["Tropas", "Hechizos", "Héroes", "Equipamiento"];

/// Bars for all four categories; missing scores show as 0.
pub fn power_bars(index: &PowerIndex) -> Vec<PowerBar> {
    POWER_LABELS
        .into_iter()
        .zip(index.scores())
        .map(|(label, score)| {
            let value = score.unwrap_or(0.0);
            PowerBar {
                label,
                width_pct: round_half_up(value * 100.0),
                pct_label: format_fraction_pct(value),
                heat: HeatTier::classify(value),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(
        troops: Option<f64>,
        spells: Option<f64>,
        heroes: Option<f64>,
        hero_equipment: Option<f64>,
    ) -> PowerIndex {
        PowerIndex {
            troops,
            spells,
            heroes,
            hero_equipment,
        }
    }

    #[test]
    fn average_uses_only_present_scores() {
        let avg = index(Some(0.5), None, Some(0.7), None).average();
        assert!((avg - 0.6).abs() < 1e-12);
    }

    #[test]
    fn average_of_nothing_is_zero() {
        assert_eq!(PowerIndex::default().average(), 0.0);
    }

    #[test]
    fn average_of_all_four() {
        let avg = index(Some(1.0), Some(0.5), Some(0.5), Some(0.0)).average();
        assert_eq!(avg, 0.5);
    }

    #[test]
    fn bars_cover_every_category_in_order() {
        let bars = power_bars(&index(Some(0.99), None, Some(0.8), Some(0.333)));
        let labels: Vec<_> = bars.iter().map(|b| b.label).collect();
        assert_eq!(labels, vec!["Tropas", "Hechizos", "Héroes", "Equipamiento"]);
        assert_eq!(bars[0].heat, Some(HeatTier::High));
        assert_eq!(bars[0].pct_label, "99%");
        assert_eq!(bars[1].width_pct, 0.0);
        assert_eq!(bars[1].heat, None);
        assert_eq!(bars[2].heat, Some(HeatTier::Low));
        assert_eq!(bars[3].width_pct, 33.0);
    }
}
