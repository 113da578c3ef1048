//! Heuristic configuration: rule toggles and tuned thresholds.
//!
//! The empirical thresholds are named parameters so they can be
//! recalibrated without touching the pruning logic. Every struct
//! deserializes with `#[serde(default)]`, so a partial JSON document only
//! overrides what it mentions.

use serde::{Deserialize, Serialize};

use crate::cards::Rank;

/// The root pruning rule families, in evaluation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PruneRule {
    /// Passing is dominant: drop plays that expose the next empty field.
    PassDominance,
    /// Passing is dominant: hold back plays that spend the strongest rank.
    ExtremalHoldback,
    /// Empty field plays that can safely wait.
    DeferredPlay,
    /// Interchangeable same-shape plays across an empty rank span.
    RankContraction,
    /// Same-shape dominant plays under a settled order.
    PriorityDominance,
    /// Keep the joker while the hand is long.
    JokerRetention,
    /// Identical card sets with different joker substitutions.
    JokerConjugate,
    /// Plays that make the hand harder to empty.
    PartitionDegradation,
    /// Dominant opening leads while weak cards remain.
    OpeningLead,
}

impl PruneRule {
    pub const COUNT: usize = 9;

    pub const ALL: [PruneRule; PruneRule::COUNT] = [
        PruneRule::PassDominance,
        PruneRule::ExtremalHoldback,
        PruneRule::DeferredPlay,
        PruneRule::RankContraction,
        PruneRule::PriorityDominance,
        PruneRule::JokerRetention,
        PruneRule::JokerConjugate,
        PruneRule::PartitionDegradation,
        PruneRule::OpeningLead,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Rules that may discard a non-dominated alternative to save search.
    #[must_use]
    pub const fn is_empirical(self) -> bool {
        matches!(
            self,
            PruneRule::ExtremalHoldback
                | PruneRule::JokerRetention
                | PruneRule::PartitionDegradation
                | PruneRule::OpeningLead
        )
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PruneRule::PassDominance => "pass_dominance",
            PruneRule::ExtremalHoldback => "extremal_holdback",
            PruneRule::DeferredPlay => "deferred_play",
            PruneRule::RankContraction => "rank_contraction",
            PruneRule::PriorityDominance => "priority_dominance",
            PruneRule::JokerRetention => "joker_retention",
            PruneRule::JokerConjugate => "joker_conjugate",
            PruneRule::PartitionDegradation => "partition_degradation",
            PruneRule::OpeningLead => "opening_lead",
        }
    }
}

impl std::fmt::Display for PruneRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hand-size and remaining-card cutoffs for joker retention.
///
/// A non-sequence joker play is dropped while the own hand holds more than
/// `hand_min` cards and more than `remaining_min` cards remain in play, or,
/// while every seat is still in the hand, more than `full_table_hand_min`
/// and `full_table_remaining_min`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JokerRetention {
    pub hand_min: usize,
    pub remaining_min: usize,
    pub full_table_hand_min: usize,
    pub full_table_remaining_min: usize,
}

impl Default for JokerRetention {
    fn default() -> Self {
        Self {
            hand_min: 9,
            remaining_min: 20,
            full_table_hand_min: 7,
            full_table_remaining_min: 23,
        }
    }
}

/// Root pruning configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PruneConfig {
    pub pass_dominance: bool,
    pub extremal_holdback: bool,
    pub deferred_play: bool,
    pub rank_contraction: bool,
    pub priority_dominance: bool,
    pub joker_retention: bool,
    pub joker_conjugate: bool,
    pub partition_degradation: bool,
    pub opening_lead: bool,

    /// Thresholds for `PruneRule::JokerRetention`.
    pub joker_thresholds: JokerRetention,

    /// Partition degradation only applies to plays whose (order-adjusted)
    /// rank is below this.
    pub partition_rank_cutoff: Rank,

    /// On an empty field with at least this many cards in play, any
    /// increase of the partition count is pruned.
    pub partition_relaxed_min_remaining: usize,

    /// Opening lead pruning needs more than this many cards left after a
    /// non-sequence play.
    pub opening_lead_min_rest_single: usize,

    /// Same, after a sequence play.
    pub opening_lead_min_rest_sequence: usize,
}

impl Default for PruneConfig {
    fn default() -> Self {
        Self {
            pass_dominance: true,
            extremal_holdback: true,
            deferred_play: true,
            rank_contraction: true,
            priority_dominance: true,
            joker_retention: true,
            joker_conjugate: true,
            partition_degradation: true,
            opening_lead: true,
            joker_thresholds: JokerRetention::default(),
            partition_rank_cutoff: Rank::JACK,
            partition_relaxed_min_remaining: 15,
            opening_lead_min_rest_single: 4,
            opening_lead_min_rest_sequence: 6,
        }
    }
}

impl PruneConfig {
    /// Every rule family switched off.
    #[must_use]
    pub fn none() -> Self {
        PruneRule::ALL
            .into_iter()
            .fold(Self::default(), |config, rule| config.with_rule(rule, false))
    }

    #[must_use]
    pub fn is_enabled(&self, rule: PruneRule) -> bool {
        match rule {
            PruneRule::PassDominance => self.pass_dominance,
            PruneRule::ExtremalHoldback => self.extremal_holdback,
            PruneRule::DeferredPlay => self.deferred_play,
            PruneRule::RankContraction => self.rank_contraction,
            PruneRule::PriorityDominance => self.priority_dominance,
            PruneRule::JokerRetention => self.joker_retention,
            PruneRule::JokerConjugate => self.joker_conjugate,
            PruneRule::PartitionDegradation => self.partition_degradation,
            PruneRule::OpeningLead => self.opening_lead,
        }
    }

    /// Enable or disable one rule family.
    #[must_use]
    pub fn with_rule(mut self, rule: PruneRule, enabled: bool) -> Self {
        let slot = match rule {
            PruneRule::PassDominance => &mut self.pass_dominance,
            PruneRule::ExtremalHoldback => &mut self.extremal_holdback,
            PruneRule::DeferredPlay => &mut self.deferred_play,
            PruneRule::RankContraction => &mut self.rank_contraction,
            PruneRule::PriorityDominance => &mut self.priority_dominance,
            PruneRule::JokerRetention => &mut self.joker_retention,
            PruneRule::JokerConjugate => &mut self.joker_conjugate,
            PruneRule::PartitionDegradation => &mut self.partition_degradation,
            PruneRule::OpeningLead => &mut self.opening_lead,
        };
        *slot = enabled;
        self
    }

    /// Only the rules that never discard the optimal play.
    #[must_use]
    pub fn logical_only(self) -> Self {
        PruneRule::ALL
            .into_iter()
            .filter(|rule| rule.is_empirical())
            .fold(self, |config, rule| config.with_rule(rule, false))
    }

    #[must_use]
    pub fn with_joker_thresholds(mut self, thresholds: JokerRetention) -> Self {
        self.joker_thresholds = thresholds;
        self
    }

    #[must_use]
    pub fn with_partition_rank_cutoff(mut self, rank: Rank) -> Self {
        self.partition_rank_cutoff = rank;
        self
    }
}

/// Mate selection configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Steer mate choice by whether a revolution hurts the rival players.
    pub defeat_rival: bool,
}

impl SelectorConfig {
    #[must_use]
    pub fn with_defeat_rival(mut self, enabled: bool) -> Self {
        self.defeat_rival = enabled;
        self
    }
}

/// Complete heuristic configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicConfig {
    pub prune: PruneConfig,
    pub selector: SelectorConfig,
}

impl HeuristicConfig {
    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PruneConfig::default();
        assert!(PruneRule::ALL.iter().all(|&rule| config.is_enabled(rule)));
        assert_eq!(config.joker_thresholds.hand_min, 9);
        assert_eq!(config.joker_thresholds.full_table_remaining_min, 23);
        assert_eq!(config.partition_rank_cutoff, Rank::JACK);
        assert_eq!(config.partition_relaxed_min_remaining, 15);
        assert!(!SelectorConfig::default().defeat_rival);
    }

    #[test]
    fn test_rule_toggles() {
        let config = PruneConfig::default().with_rule(PruneRule::OpeningLead, false);
        assert!(!config.is_enabled(PruneRule::OpeningLead));
        assert!(config.is_enabled(PruneRule::JokerConjugate));

        let none = PruneConfig::none();
        assert!(PruneRule::ALL.iter().all(|&rule| !none.is_enabled(rule)));
    }

    #[test]
    fn test_logical_only() {
        let config = PruneConfig::default().logical_only();
        for rule in PruneRule::ALL {
            assert_eq!(config.is_enabled(rule), !rule.is_empirical(), "{rule}");
        }
        assert!(config.is_enabled(PruneRule::PassDominance));
        assert!(!config.is_enabled(PruneRule::ExtremalHoldback));
        assert!(!config.is_enabled(PruneRule::OpeningLead));
    }

    #[test]
    fn test_rule_indices_match_order() {
        for (i, rule) in PruneRule::ALL.iter().enumerate() {
            assert_eq!(rule.index(), i);
        }
    }

    #[test]
    fn test_json_round_trip() {
        let config = HeuristicConfig {
            prune: PruneConfig::default().with_rule(PruneRule::JokerRetention, false),
            selector: SelectorConfig::default().with_defeat_rival(true),
        };
        let json = config.to_json_string().unwrap();
        let parsed = HeuristicConfig::from_json_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let parsed = HeuristicConfig::from_json_str(
            r#"{ "prune": { "opening_lead": false, "joker_thresholds": { "hand_min": 11 } } }"#,
        )
        .unwrap();
        assert!(!parsed.prune.opening_lead);
        assert!(parsed.prune.pass_dominance);
        assert!(parsed.prune.extremal_holdback);
        assert_eq!(parsed.prune.joker_thresholds.hand_min, 11);
        assert_eq!(parsed.prune.joker_thresholds.remaining_min, 20);
        assert!(!parsed.selector.defeat_rival);
    }
}
