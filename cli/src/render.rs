//! Plain-text panels for records, fusions and damage profiles

use std::fmt;

use fusedex_dex::Dex;
use fusedex_engine::{
    ability_summary, effectiveness_for_names, CreatureRecord, DamageProfile, Fusion, StatBlock,
};

pub const FILTER_HELP: &str = "\
Search filters:
  name:TERM       match name substring
  type:TYPE       match type1 or type2 (e.g. type:fire)
  ability:NAME    match any listed ability
  passive:NAME    match passive ability
  id:NNN or #NNN  match dex number prefix, or exact with #
  Numeric: hp|attack|defense|sp.atk|sp.def|speed|bst with >, <, >=, <=, =
    examples: hp>=100  speed<120  bst>500
  Anything else matches name, type, ability or passive text.
";

/// Trim a trailing ".0": 75.0 -> "75", 87.5 -> "87.5"
pub fn format_number(value: f64) -> String {
    trim_zeros(format!("{value:.1}"))
}

/// Multiplier to three decimals, trailing zeros dropped: 0.250 -> "0.25"
pub fn format_multiplier(value: f32) -> String {
    trim_zeros(format!("{value:.3}"))
}

fn trim_zeros(text: String) -> String {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

/// Grouped damage lines, immunities first
pub struct DamageTaken<'a>(pub &'a DamageProfile);

impl fmt::Display for DamageTaken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for group in self.0.grouped() {
            let names = group
                .types
                .iter()
                .map(|t| t.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            if group.multiplier == 0.0 {
                writeln!(f, "Immune: {names}")?;
            } else {
                writeln!(f, "{}x damage: {names}", format_multiplier(group.multiplier))?;
            }
        }
        Ok(())
    }
}

/// Six stats followed by a total, values in one column
pub struct StatSection<'a> {
    pub stats: &'a StatBlock<f64>,
    pub total_label: &'a str,
    pub total: f64,
}

impl fmt::Display for StatSection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self
            .stats
            .iter()
            .map(|(stat, _)| format!("{}:", stat.label()))
            .chain(std::iter::once(format!("{}:", self.total_label)))
            .collect();
        let width = labels.iter().map(String::len).max().unwrap_or(0);

        for ((_, value), label) in self.stats.iter().zip(&labels) {
            writeln!(f, "{label:<width$} {}", format_number(value))?;
        }
        writeln!(f)?;
        writeln!(f, "{:<width$} {}", labels[6], format_number(self.total))
    }
}

const RULE: &str = "------------------------";

/// Single record panel
pub struct RecordPanel<'a> {
    pub dex: &'a Dex,
    pub record: &'a CreatureRecord,
    pub flip: bool,
}

impl fmt::Display for RecordPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.record;
        writeln!(f, "{} (#{})", record.name, record.id)?;
        writeln!(f, "Type: {}", record.type_label())?;
        writeln!(f)?;

        let visible = record.visible_abilities();
        if !visible.is_empty() {
            writeln!(f, "Abilities: {}", visible.join(", "))?;
        }
        if let Some(hidden) = record.hidden_ability() {
            writeln!(f, "Hidden Ability: {hidden}")?;
        }
        if let Some(passive) = &record.passive {
            writeln!(f, "Passive: {passive}")?;
        }
        writeln!(f)?;

        writeln!(f, "BST:")?;
        writeln!(f, "{RULE}")?;
        let stats = record.stats.map(f64::from).display(self.flip);
        write!(
            f,
            "{}",
            StatSection {
                stats: &stats,
                total_label: "Total BST",
                total: f64::from(record.bst),
            }
        )?;
        writeln!(f)?;

        if !record.evolution_line.is_empty() {
            let line = self
                .dex
                .evolution_line(record)
                .zip(&record.evolution_line)
                .map(|(found, name)| match found {
                    Ok(_) => name.clone(),
                    Err(_) => format!("{name} (not found)"),
                })
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(f, "Evolution: {line}")?;
            writeln!(f)?;
        }

        let profile = effectiveness_for_names(
            &record.primary_type,
            record.secondary_type.as_deref(),
            None,
            record.passive.as_deref(),
        );
        writeln!(f, "Damage Taken:")?;
        writeln!(f)?;
        write!(f, "{}", DamageTaken(&profile))
    }
}

/// Fusion result panel
pub struct FusionPanel<'a>(pub &'a Fusion);

impl fmt::Display for FusionPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fusion = self.0;
        writeln!(f, "{} + {}", fusion.first, fusion.second)?;
        writeln!(f, "Fused Type: {}", fusion.type_label())?;
        writeln!(f)?;

        writeln!(f, "BST:")?;
        writeln!(f, "{RULE}")?;
        write!(
            f,
            "{}",
            StatSection {
                stats: &fusion.shown_stats(),
                total_label: "Total BST",
                total: fusion.stats.total,
            }
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "Difference from {}: {}",
            fusion.first,
            format_number(fusion.difference_from_first)
        )?;
        writeln!(
            f,
            "Difference from {}: {}",
            fusion.second,
            format_number(fusion.difference_from_second)
        )?;
        writeln!(f)?;

        writeln!(f, "Abilities: {}", fusion.abilities.join(", "))?;
        if let Some(active) = &fusion.active_ability {
            writeln!(f, "Active Ability: {active}")?;
            if fusion.hidden_ability_active {
                writeln!(f, "Hidden Ability: {active}")?;
            }
        }
        if let Some(passive) = &fusion.passive {
            writeln!(f, "Passive (from {}): {passive} (active)", fusion.first)?;
        }

        let effects = [
            ("Active effect", fusion.active_ability.as_deref()),
            ("Passive effect", fusion.passive.as_deref()),
        ];
        for (label, ability) in effects {
            if let Some(summary) = ability.and_then(ability_summary) {
                writeln!(f, "{label}: {summary}")?;
            }
        }
        writeln!(f)?;

        writeln!(f, "Damage Taken:")?;
        writeln!(f)?;
        write!(f, "{}", DamageTaken(&fusion.damage_taken))
    }
}

/// One line per matching record, cut off after `limit`
pub struct SearchResults<'a> {
    pub records: Vec<&'a CreatureRecord>,
    pub limit: Option<usize>,
}

impl fmt::Display for SearchResults<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.records.len();
        let shown = self.limit.map_or(total, |limit| limit.min(total));
        for record in &self.records[..shown] {
            writeln!(
                f,
                "#{:<5} {:<20} {:<18} BST {}",
                record.id,
                record.name,
                record.type_label(),
                record.bst
            )?;
        }
        if shown < total {
            writeln!(f, "... {} more", total - shown)?;
        }
        writeln!(f, "{total} match(es)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fusedex_engine::{effectiveness, FusionOptions, Type};

    fn charizard() -> CreatureRecord {
        CreatureRecord::new(
            6,
            "Charizard",
            "Fire",
            Some("Flying"),
            StatBlock {
                hp: 78,
                attack: 84,
                defense: 78,
                sp_atk: 109,
                sp_def: 85,
                speed: 100,
            },
        )
        .with_abilities(["Blaze", "Solar Power"])
        .with_passive(Some("Beast Boost"))
        .with_evolution_line(["Charmander", "Charmeleon", "Charizard"])
    }

    fn swampert() -> CreatureRecord {
        CreatureRecord::new(
            260,
            "Swampert",
            "Water",
            Some("Ground"),
            StatBlock {
                hp: 100,
                attack: 110,
                defense: 90,
                sp_atk: 85,
                sp_def: 90,
                speed: 60,
            },
        )
        .with_abilities(["Torrent", "Damp", "Levitate"])
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(75.0), "75");
        assert_eq!(format_number(87.5), "87.5");
        assert_eq!(format_number(-0.5), "-0.5");
        assert_eq!(format_number(450.0), "450");
    }

    #[test]
    fn test_format_multiplier() {
        assert_eq!(format_multiplier(0.25), "0.25");
        assert_eq!(format_multiplier(2.0), "2");
        assert_eq!(format_multiplier(1.25), "1.25");
        assert_eq!(format_multiplier(0.0), "0");
    }

    #[test]
    fn test_damage_taken_lines() {
        let profile = effectiveness(Type::Normal, None, None, None);
        let text = DamageTaken(&profile).to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Immune: Ghost");
        assert_eq!(lines[1], "2x damage: Fighting");
        assert!(lines[2].starts_with("1x damage: Bug, Dark, Dragon"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_stat_section_alignment() {
        let stats = StatBlock::from_fn(|_| 75.0);
        let text = StatSection {
            stats: &stats,
            total_label: "Total BST",
            total: 450.0,
        }
        .to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "HP:        75");
        assert_eq!(lines[3], "Sp. Atk:   75");
        assert_eq!(lines[6], "");
        assert_eq!(lines[7], "Total BST: 450");
    }

    #[test]
    fn test_record_panel() {
        let dex = Dex::new([charizard()]);
        let text = RecordPanel {
            dex: &dex,
            record: dex.get("Charizard").unwrap(),
            flip: false,
        }
        .to_string();
        assert!(text.contains("Type: Fire/Flying"));
        assert!(text.contains("Abilities: Blaze\n"));
        assert!(text.contains("Hidden Ability: Solar Power"));
        assert!(text.contains("Passive: Beast Boost"));
        assert!(text.contains("Total BST: 534"));
        assert!(text.contains("Evolution: Charmander (not found), Charmeleon (not found), Charizard"));
        assert!(text.contains("4x damage: Rock"));
        assert!(text.contains("Immune: Ground"));
    }

    #[test]
    fn test_record_panel_flip() {
        let dex = Dex::new([charizard()]);
        let text = RecordPanel {
            dex: &dex,
            record: dex.get("Charizard").unwrap(),
            flip: true,
        }
        .to_string();
        assert!(text.contains("HP:        100"));
        assert!(text.contains("Speed:     78"));
    }

    #[test]
    fn test_fusion_panel() {
        let options = FusionOptions {
            active_ability: Some("Levitate".to_string()),
            ..FusionOptions::default()
        };
        let fusion = Fusion::new(&charizard(), &swampert(), &options);
        let text = FusionPanel(&fusion).to_string();
        assert!(text.contains("Fused Type: Fire/Ground"));
        assert!(text.contains("Total BST: 534.5"));
        assert!(text.contains("Difference from Charizard: 0.5"));
        assert!(text.contains("Difference from Swampert: -0.5"));
        assert!(text.contains("Abilities: Torrent, Levitate"));
        assert!(text.contains("Active Ability: Levitate"));
        assert!(!text.contains("Hidden Ability"));
        assert!(text.contains("Passive (from Charizard): Beast Boost (active)"));
        assert!(text.contains("Active effect: immunities: Ground"));
        assert!(!text.contains("Passive effect"));
        assert!(text.contains("Immune: Electric, Ground"));
    }

    #[test]
    fn test_search_results_limit() {
        let records = [charizard(), swampert()];
        let text = SearchResults {
            records: records.iter().collect(),
            limit: Some(1),
        }
        .to_string();
        assert!(text.contains("Charizard"));
        assert!(!text.contains("Swampert"));
        assert!(text.contains("... 1 more"));
        assert!(text.contains("2 match(es)"));
    }
}
