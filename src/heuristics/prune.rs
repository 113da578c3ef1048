//! Root candidate pruning.
//!
//! Removes root moves that are dominated by another candidate, or that
//! are very unlikely to be best, before the search spends time on them.
//! Rules are evaluated per candidate in `PruneRule::ALL` order and the
//! first one that fires prunes it. Rules that compare against other moves
//! only look at the candidates still active, so re-running the pruner on
//! its own output removes nothing further.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Cards, Order, Rank};
use crate::field::{FieldInfo, FieldView};
use crate::moves::{CandidateBuffer, MoveInfo};

use super::analysis::{
    deferred_win_cards, extremal_rank_cards, has_deferred_win_or_lead, is_independent,
    touches_s3_guard, RUN_MIN_LEN,
};
use super::config::{PruneConfig, PruneRule};

/// Outcome of one pruning pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PruneReport {
    /// Candidates left active.
    pub survivors: usize,
    counts: [usize; PruneRule::COUNT],
}

impl PruneReport {
    /// Candidates removed by `rule`.
    #[must_use]
    pub fn pruned_by(&self, rule: PruneRule) -> usize {
        self.counts[rule.index()]
    }

    #[must_use]
    pub fn total_pruned(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Per-rule counts, in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (PruneRule, usize)> + '_ {
        PruneRule::ALL.into_iter().zip(self.counts.iter().copied())
    }

    fn record(&mut self, rule: PruneRule) {
        self.counts[rule.index()] += 1;
    }
}

/// What the deferred-play rule concluded about one candidate.
#[derive(Clone, Copy, Debug, Default)]
struct DeferredVerdict {
    deferred: bool,
    constrained: bool,
    prune: bool,
}

/// Values shared by every rule during one call.
struct RootContext<'a> {
    config: &'a PruneConfig,
    order: Order,
    order_settled: bool,
    empty_field: bool,
    pass_dominant: bool,
    all_alive: bool,
    hand: Cards,
    ops: Cards,
    remaining: Cards,
    own_count: usize,
    remaining_count: usize,
    deferred_win: Cards,
    extremal: Cards,
    runs: Cards,
    /// Active joker plays per card set, to skip conjugate scans for
    /// card sets that appear once.
    joker_sets: FxHashMap<Cards, usize>,
}

impl<'a> RootContext<'a> {
    fn new(
        config: &'a PruneConfig,
        field: &FieldView,
        info: &FieldInfo,
        active: &[MoveInfo],
    ) -> Self {
        let order = field.board().temp_order();
        let hand = field.my_cards();
        let ops = field.ops_cards();
        let remaining = field.remaining_cards();

        let mut joker_sets = FxHashMap::default();
        for mv in active.iter().filter(|mv| mv.uses_joker()) {
            *joker_sets.entry(mv.cards()).or_insert(0) += 1;
        }

        Self {
            config,
            order,
            order_settled: info.temp_order_settled,
            empty_field: field.board().is_empty_field(),
            pass_dominant: info.pass_dominant,
            all_alive: field.all_alive(),
            hand,
            ops,
            remaining,
            own_count: field.card_count(field.me()),
            remaining_count: remaining.count(),
            deferred_win: deferred_win_cards(hand, ops, order, info.temp_order_settled),
            extremal: extremal_rank_cards(hand, order),
            runs: hand.run_cards(RUN_MIN_LEN),
            joker_sets,
        }
    }

    fn independent(&self, mv: &MoveInfo) -> bool {
        is_independent(mv, self.hand, self.runs)
    }

    /// S3 beats a lone joker, so plays spending it stay out of the
    /// pairwise reductions while the joker is still out.
    fn plays_s3_against_joker(&self, mv: &MoveInfo) -> bool {
        mv.cards().intersects(Cards::S3) && self.remaining.has_joker()
    }

    fn pass_dominance(&self, mv: &MoveInfo) -> bool {
        self.pass_dominant && mv.flags().exposes_empty_field
    }

    fn extremal_holdback(&self, mv: &MoveInfo) -> bool {
        self.pass_dominant && mv.cards().intersects(self.extremal)
    }

    fn deferred_play<'m>(
        &self,
        mv: &MoveInfo,
        mut others: impl Iterator<Item = &'m MoveInfo>,
    ) -> DeferredVerdict {
        let mut verdict = DeferredVerdict::default();
        if !self.empty_field || mv.changes_persistent_state() {
            return verdict;
        }
        let rest = self.hand - mv.cards();
        if !has_deferred_win_or_lead(rest, self.ops, self.order, self.order_settled) {
            return verdict;
        }
        verdict.deferred = true;

        if !mv.flags().holds_empty_field {
            return verdict;
        }
        verdict.constrained = true;

        if !self.deferred_win.is_empty() {
            verdict.prune = mv.cards().is_disjoint(self.deferred_win)
                || others.any(|other| {
                    other.flags().holds_empty_field
                        && !other.changes_persistent_state()
                        && other.cards().is_disjoint(mv.cards())
                });
        }
        verdict
    }

    fn rank_contraction<'m>(&self, mv: &MoveInfo, mut others: impl Iterator<Item = &'m MoveInfo>) -> bool {
        if mv.is_sequence()
            || mv.uses_joker()
            || mv.cards().intersects(Cards::EIGHTS)
            || mv.qty() >= 4
            || self.plays_s3_against_joker(mv)
        {
            return false;
        }
        let independent = self.independent(mv);
        let own_at_rank = self.hand & Cards::of_rank(mv.rank());

        others.any(|other| {
            if !other.same_shape(mv)
                || other.uses_joker()
                || other.rank() == Rank::EIGHT
                || !self.independent(other)
                || !mv.rank().is_stronger_than(other.rank(), self.order)
            {
                return false;
            }
            let both = mv.cards() | other.cards();
            let (Some(low), Some(high)) = (both.lowest_rank(), both.highest_rank()) else {
                return false;
            };
            let span = Cards::rank_range(low, high);
            span.is_disjoint(self.remaining - both)
                || (!independent && span.is_disjoint(self.remaining - both - own_at_rank))
        })
    }

    fn priority_dominance<'m>(&self, mv: &MoveInfo, mut others: impl Iterator<Item = &'m MoveInfo>) -> bool {
        if !self.order_settled
            || !mv.flags().dominates_others
            || mv.uses_joker()
            || self.plays_s3_against_joker(mv)
        {
            return false;
        }
        others.any(|other| {
            other.same_shape(mv)
                && other.flags().dominates_others
                && !other.uses_joker()
                && self.independent(other)
                && mv.rank().is_stronger_than(other.rank(), self.order)
                && (self.deferred_win & (mv.cards() - other.cards())).count()
                    >= (self.deferred_win & (other.cards() - mv.cards())).count()
        })
    }

    fn joker_retention(&self, mv: &MoveInfo) -> bool {
        if !mv.uses_joker() || mv.changes_persistent_state() || mv.is_sequence() {
            return false;
        }
        let t = &self.config.joker_thresholds;
        (self.own_count > t.hand_min && self.remaining_count > t.remaining_min)
            || (self.all_alive
                && self.own_count > t.full_table_hand_min
                && self.remaining_count > t.full_table_remaining_min)
    }

    fn joker_conjugate<'m>(&self, mv: &MoveInfo, mut others: impl Iterator<Item = &'m MoveInfo>) -> bool {
        if !mv.uses_joker() || self.joker_sets.get(&mv.cards()).copied().unwrap_or(0) < 2 {
            return false;
        }
        let after = mv.order_after(self.order);
        others.any(|other| {
            if other.cards() != mv.cards() {
                return false;
            }
            if mv.flags().dominates_others && other.flags().dominates_others {
                return true;
            }
            mv.rank() != other.rank()
                && (other.flags().dominates_inevitably || other.rank().is_stronger_than(mv.rank(), after))
        })
    }

    fn partition_degradation(&self, mv: &MoveInfo) -> bool {
        let mut r = usize::from(mv.rank().strength(self.order));
        if mv.is_sequence() {
            r += mv.qty();
        }
        if r >= self.config.partition_rank_cutoff.index()
            || mv.flags().dominates_others
            || touches_s3_guard(mv, self.hand, self.remaining)
        {
            return false;
        }
        let delta = mv.min_melds_delta();
        delta > 1
            || (self.empty_field
                && self.remaining_count >= self.config.partition_relaxed_min_remaining
                && delta >= 1)
    }

    fn opening_lead(&self, mv: &MoveInfo) -> bool {
        if !self.empty_field || !mv.flags().dominates_inevitably {
            return false;
        }
        let threshold = if mv.is_sequence() {
            self.config.opening_lead_min_rest_sequence
        } else {
            self.config.opening_lead_min_rest_single
        };
        if self.own_count.saturating_sub(mv.qty()) <= threshold {
            return false;
        }
        let band = match self.order {
            Order::Normal => Cards::rank_range(Rank::THREE, Rank::SEVEN),
            Order::Reversed => Cards::rank_range(Rank::NINE, Rank::TWO),
        };
        ((self.hand - mv.cards()) & band).distinct_ranks() >= 2
            && !((self.hand - self.runs) & band).is_empty()
    }
}

/// Other active real plays.
fn others(active: &[MoveInfo], index: usize) -> impl Iterator<Item = &MoveInfo> {
    active
        .iter()
        .enumerate()
        .filter(move |&(i, mv)| i != index && !mv.is_pass())
        .map(|(_, mv)| mv)
}

/// Heuristic pruning of root candidates.
#[derive(Clone, Debug, Default)]
pub struct RootPruner {
    config: PruneConfig,
}

impl RootPruner {
    #[must_use]
    pub fn new(config: PruneConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &PruneConfig {
        &self.config
    }

    /// Prune `buffer` in place and report what was removed.
    ///
    /// The pass move is never pruned and the pass stops once a single
    /// candidate is left. Surviving moves may gain the `deferred_win` and
    /// `constrained` markers.
    pub fn prune(&self, buffer: &mut CandidateBuffer, field: &FieldView, info: &FieldInfo) -> PruneReport {
        let ctx = RootContext::new(&self.config, field, info, buffer.active());
        let mut report = PruneReport::default();

        let mut index = buffer.active_len();
        while index > 0 && buffer.active_len() > 1 {
            index -= 1;
            if buffer.get(index).is_pass() {
                continue;
            }
            if let Some(rule) = self.evaluate(&ctx, buffer, index) {
                tracing::debug!(
                    target: "rust_daifugo::prune",
                    rule = rule.as_str(),
                    play = %buffer.get(index),
                    "pruned root candidate"
                );
                buffer.prune(index);
                report.record(rule);
            }
        }

        report.survivors = buffer.active_len();
        if tracing::enabled!(target: "rust_daifugo::prune", tracing::Level::DEBUG) {
            let by_rule = report
                .iter()
                .filter(|&(_, count)| count > 0)
                .map(|(rule, count)| format!("{rule}={count}"))
                .collect::<Vec<_>>()
                .join(" ");
            tracing::debug!(
                target: "rust_daifugo::prune",
                survivors = report.survivors,
                pruned = report.total_pruned(),
                by_rule = %by_rule,
                "root pruning done"
            );
        }
        report
    }

    /// First enabled rule that prunes the candidate at `index`, if any.
    fn evaluate(&self, ctx: &RootContext<'_>, buffer: &mut CandidateBuffer, index: usize) -> Option<PruneRule> {
        let mv = *buffer.get(index);

        PruneRule::ALL
            .into_iter()
            .filter(|&rule| self.config.is_enabled(rule))
            .find(|&rule| {
                let active = buffer.active();
                match rule {
                    PruneRule::PassDominance => ctx.pass_dominance(&mv),
                    PruneRule::ExtremalHoldback => ctx.extremal_holdback(&mv),
                    PruneRule::DeferredPlay => {
                        let verdict = ctx.deferred_play(&mv, others(active, index));
                        let slot = buffer.get_mut(index);
                        if verdict.deferred {
                            slot.set_deferred_win();
                        }
                        if verdict.constrained {
                            slot.set_constrained();
                        }
                        verdict.prune
                    }
                    PruneRule::RankContraction => ctx.rank_contraction(&mv, others(active, index)),
                    PruneRule::PriorityDominance => ctx.priority_dominance(&mv, others(active, index)),
                    PruneRule::JokerRetention => ctx.joker_retention(&mv),
                    PruneRule::JokerConjugate => ctx.joker_conjugate(&mv, others(active, index)),
                    PruneRule::PartitionDegradation => ctx.partition_degradation(&mv),
                    PruneRule::OpeningLead => ctx.opening_lead(&mv),
                }
            })
    }
}

/// Prune with the default configuration and return the surviving count.
pub fn prune_root_candidates(buffer: &mut CandidateBuffer, field: &FieldView, info: &FieldInfo) -> usize {
    RootPruner::default().prune(buffer, field, info).survivors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Suit};
    use crate::core::PlayerId;
    use crate::field::Board;
    use crate::moves::Play;

    fn cards(text: &str) -> Cards {
        text.parse().unwrap()
    }

    fn single(text: &str) -> MoveInfo {
        MoveInfo::new(Play::single(text.parse().unwrap()))
    }

    fn group(text: &str) -> MoveInfo {
        MoveInfo::new(Play::group(cards(text)))
    }

    fn heart_run(text: &str, low: Rank) -> MoveInfo {
        MoveInfo::new(Play::sequence(cards(text), low, Suit::HEART))
    }

    fn view(hand: &str, ops: &str, board: Board) -> FieldView {
        FieldView::new(4, PlayerId::new(0))
            .with_my_cards(cards(hand))
            .with_ops_cards(cards(ops))
            .with_board(board)
    }

    fn buffer(moves: impl IntoIterator<Item = MoveInfo>) -> CandidateBuffer {
        std::iter::once(MoveInfo::pass()).chain(moves).collect()
    }

    fn contains(buffer: &CandidateBuffer, mv: &MoveInfo) -> bool {
        buffer.active().iter().any(|m| m.play() == mv.play())
    }

    #[test]
    fn test_extremal_holdback_drops_strongest_rank() {
        let field = view("S4 H7 D9 CK HK", "S5 DQ SA", Board::contested(Order::Normal));
        let info = FieldInfo::default().with_pass_dominant(true);
        let kings = group("CK HK");
        let mut buf = buffer([single("S4"), single("H7"), single("D9"), kings]);

        let report = RootPruner::default().prune(&mut buf, &field, &info);

        assert_eq!(report.survivors, 4);
        assert_eq!(report.pruned_by(PruneRule::ExtremalHoldback), 1);
        assert_eq!(report.pruned_by(PruneRule::PassDominance), 0);
        assert!(!contains(&buf, &kings));
    }

    #[test]
    fn test_logical_only_keeps_strongest_rank() {
        let field = view("S4 H7 D9 CK HK", "S5 DQ SA", Board::contested(Order::Normal));
        let info = FieldInfo::default().with_pass_dominant(true);
        let kings = group("CK HK");
        let exposing = single("D9").exposing_empty_field();
        let mut buf = buffer([single("S4"), exposing, kings]);

        let pruner = RootPruner::new(PruneConfig::default().logical_only());
        let report = pruner.prune(&mut buf, &field, &info);

        assert!(contains(&buf, &kings));
        assert!(!contains(&buf, &exposing));
        assert_eq!(report.pruned_by(PruneRule::PassDominance), 1);
        assert_eq!(report.pruned_by(PruneRule::ExtremalHoldback), 0);
    }

    #[test]
    fn test_pass_dominance_drops_empty_field_exposure() {
        let field = view("S4 H7 D9", "S5 DQ SA", Board::contested(Order::Normal));
        let info = FieldInfo::default().with_pass_dominant(true);
        let exposing = single("S4").exposing_empty_field();
        let mut buf = buffer([exposing, single("H7")]);

        RootPruner::default().prune(&mut buf, &field, &info);
        assert!(!contains(&buf, &exposing));
        assert!(contains(&buf, &single("H7")));
    }

    #[test]
    fn test_deferred_play_marks_and_prunes() {
        let field = view("S4 H4 D2", "HK SA", Board::empty(Order::Normal));
        let info = FieldInfo::default().with_temp_order_settled(true);
        let pair = group("S4 H4").holding_empty_field();
        let mut buf = buffer([single("S4"), pair]);

        let report = RootPruner::default().prune(&mut buf, &field, &info);

        assert_eq!(report.pruned_by(PruneRule::DeferredPlay), 1);
        assert!(!contains(&buf, &pair));
        let kept = buf.position(|m| m.play() == single("S4").play()).unwrap();
        assert!(buf.get(kept).is_deferred_win());
        assert!(!buf.get(kept).is_constrained());
    }

    #[test]
    fn test_deferred_play_keeps_one_of_two_disjoint_holders() {
        let field = view("S4 D2 C2", "HK SA", Board::empty(Order::Normal));
        let info = FieldInfo::default().with_temp_order_settled(true);
        let mut buf = buffer([
            single("D2").holding_empty_field(),
            single("C2").holding_empty_field(),
        ]);

        let report = RootPruner::default().prune(&mut buf, &field, &info);

        assert_eq!(report.pruned_by(PruneRule::DeferredPlay), 1);
        assert_eq!(report.survivors, 2);
        let holder = buf.position(|m| !m.is_pass()).unwrap();
        assert!(buf.get(holder).is_constrained());
    }

    #[test]
    fn test_rank_contraction() {
        let field = view("S5 S9 H3", "C3 DK", Board::contested(Order::Normal));
        let mut buf = buffer([single("S5"), single("S9")]);
        let report = RootPruner::default().prune(&mut buf, &field, &FieldInfo::default());
        assert_eq!(report.pruned_by(PruneRule::RankContraction), 1);
        assert!(contains(&buf, &single("S5")));

        // An outside card inside the span keeps both.
        let field = view("S5 S9 H3", "C3 D7 DK", Board::contested(Order::Normal));
        let mut buf = buffer([single("S5"), single("S9")]);
        let report = RootPruner::default().prune(&mut buf, &field, &FieldInfo::default());
        assert_eq!(report.total_pruned(), 0);
    }

    #[test]
    fn test_rank_contraction_reversed_keeps_higher_rank() {
        let field = view("S5 S9 H3", "C3 DK", Board::contested(Order::Reversed));
        let mut buf = buffer([single("S5"), single("S9")]);
        RootPruner::default().prune(&mut buf, &field, &FieldInfo::default());
        assert!(contains(&buf, &single("S9")));
        assert!(!contains(&buf, &single("S5")));
    }

    #[test]
    fn test_rank_contraction_dependent_play() {
        // S9 shares its rank with H9, so only the own nines inside the
        // span are tolerated.
        let field = view("S5 S9 H9", "DK", Board::contested(Order::Normal));
        let mut buf = buffer([single("S5"), single("S9")]);
        let report = RootPruner::default().prune(&mut buf, &field, &FieldInfo::default());
        assert_eq!(report.pruned_by(PruneRule::RankContraction), 1);
        assert!(!contains(&buf, &single("S9")));
    }

    #[test]
    fn test_priority_dominance_needs_settled_order() {
        let field = view("SA S2 H4", "D5 CK HA", Board::contested(Order::Normal));
        let moves = [single("SA").dominating(), single("S2").dominating()];

        let mut buf = buffer(moves);
        let report = RootPruner::default().prune(&mut buf, &field, &FieldInfo::default());
        assert_eq!(report.total_pruned(), 0);

        let settled = FieldInfo::default().with_temp_order_settled(true);
        let mut buf = buffer(moves);
        let report = RootPruner::default().prune(&mut buf, &field, &settled);
        assert_eq!(report.pruned_by(PruneRule::PriorityDominance), 1);
        assert!(contains(&buf, &single("SA")));
    }

    #[test]
    fn test_joker_retention() {
        let board = Board::contested(Order::Normal);
        let ops = "S4 S6 H7 D9 HT CJ DQ HK DA C2 H2";
        let joker = MoveInfo::new(Play::single(Card::JOKER));

        let field = view("H4 H6 D7 C9 ST DJ HQ CK SA JK", ops, board);
        let mut buf = buffer([joker, single("H4")]);
        let report = RootPruner::default().prune(&mut buf, &field, &FieldInfo::default());
        assert_eq!(report.pruned_by(PruneRule::JokerRetention), 1);

        let field = view("H4 H6 D7 C9 ST SA JK", ops, board);
        let mut buf = buffer([joker, single("H4")]);
        let report = RootPruner::default().prune(&mut buf, &field, &FieldInfo::default());
        assert_eq!(report.total_pruned(), 0);
    }

    #[test]
    fn test_joker_conjugates() {
        let field = view("H5 H6 JK C9", "S4 DK", Board::empty(Order::Normal));
        let low = heart_run("H5 H6 JK", Rank::FOUR);
        let high = heart_run("H5 H6 JK", Rank::FIVE);

        let mut buf = buffer([low.dominating(), high.dominating()]);
        let report = RootPruner::default().prune(&mut buf, &field, &FieldInfo::default());
        assert_eq!(report.pruned_by(PruneRule::JokerConjugate), 1);

        let mut buf = buffer([low, high.inevitable()]);
        RootPruner::default().prune(&mut buf, &field, &FieldInfo::default());
        assert!(contains(&buf, &high) && !contains(&buf, &low));

        // Without flags the stronger substitution is kept.
        let mut buf = buffer([high, low]);
        RootPruner::default().prune(&mut buf, &field, &FieldInfo::default());
        assert!(contains(&buf, &high) && !contains(&buf, &low));
    }

    #[test]
    fn test_partition_degradation() {
        let field = view("S4 H4 D4 H9 CQ", "S5 DK", Board::contested(Order::Normal));
        let pair = group("S4 H4").with_min_melds_delta(2);

        let mut buf = buffer([pair, single("CQ").with_min_melds_delta(2)]);
        let report = RootPruner::default().prune(&mut buf, &field, &FieldInfo::default());
        assert_eq!(report.pruned_by(PruneRule::PartitionDegradation), 1);
        assert!(contains(&buf, &single("CQ")));

        let mut buf = buffer([pair.dominating(), single("H9")]);
        let report = RootPruner::default().prune(&mut buf, &field, &FieldInfo::default());
        assert_eq!(report.total_pruned(), 0);
    }

    #[test]
    fn test_partition_degradation_spares_s3_guard() {
        let field = view("S3 H3 H9", "JK D5", Board::contested(Order::Normal));
        let mut buf = buffer([single("H3").with_min_melds_delta(2), single("H9")]);
        let report = RootPruner::default().prune(&mut buf, &field, &FieldInfo::default());
        assert_eq!(report.total_pruned(), 0);
    }

    #[test]
    fn test_partition_degradation_relaxed_on_empty_field() {
        let ops = "S5 D6 C7 HT SJ DQ CK SA C2 H2";
        let single_step = single("H4").with_min_melds_delta(1);

        let field = view("H4 D9 CJ SQ DA", ops, Board::empty(Order::Normal));
        let mut buf = buffer([single_step, single("D9")]);
        let report = RootPruner::default().prune(&mut buf, &field, &FieldInfo::default());
        assert_eq!(report.pruned_by(PruneRule::PartitionDegradation), 1);

        let field = view("H4 D9 CJ SQ DA", ops, Board::contested(Order::Normal));
        let mut buf = buffer([single_step, single("D9")]);
        let report = RootPruner::default().prune(&mut buf, &field, &FieldInfo::default());
        assert_eq!(report.total_pruned(), 0);
    }

    #[test]
    fn test_opening_lead() {
        let lead = single("D2").inevitable();

        let field = view("S3 H4 D5 C6 S7 H9 DT CJ SK D2", "HA", Board::empty(Order::Normal));
        let mut buf = buffer([lead]);
        let report = RootPruner::default().prune(&mut buf, &field, &FieldInfo::default());
        assert_eq!(report.pruned_by(PruneRule::OpeningLead), 1);

        let field = view("H4 D5 SK D2", "HA", Board::empty(Order::Normal));
        let mut buf = buffer([lead]);
        let report = RootPruner::default().prune(&mut buf, &field, &FieldInfo::default());
        assert_eq!(report.total_pruned(), 0);
    }

    #[test]
    fn test_opening_lead_sequence_needs_longer_rest() {
        let clubs = MoveInfo::new(Play::sequence(cards("C9 CT CJ"), Rank::NINE, Suit::CLUB)).inevitable();
        let lead = single("D2").inevitable();

        // Nine cards left after the sequence: above the sequence threshold.
        let field = view("S3 H4 D5 C6 S7 C9 CT CJ SK DA D2 HQ", "HA", Board::empty(Order::Normal));
        let mut buf = buffer([clubs]);
        let report = RootPruner::default().prune(&mut buf, &field, &FieldInfo::default());
        assert_eq!(report.pruned_by(PruneRule::OpeningLead), 1);

        // Six left after the sequence, eight after the single.
        let field = view("S3 H4 D5 C9 CT CJ SK DA D2", "HA", Board::empty(Order::Normal));
        let mut buf = buffer([clubs, lead]);
        let report = RootPruner::default().prune(&mut buf, &field, &FieldInfo::default());
        assert_eq!(report.pruned_by(PruneRule::OpeningLead), 1);
        assert!(contains(&buf, &clubs));
        assert!(!contains(&buf, &lead));

        let config = PruneConfig {
            opening_lead_min_rest_sequence: 5,
            ..PruneConfig::default()
        };
        let mut buf = buffer([clubs]);
        let report = RootPruner::new(config).prune(&mut buf, &field, &FieldInfo::default());
        assert_eq!(report.pruned_by(PruneRule::OpeningLead), 1);
        assert!(!contains(&buf, &clubs));
    }

    #[test]
    fn test_long_hand_three_seats() {
        let hand = cards("S3 H3 D4 C4 S5 H6 D6 C7 S8 H9 DT CJ SQ HK DA C2 S2 JK");
        assert_eq!(hand.count(), 18);
        for order in [Order::Normal, Order::Reversed] {
            let field = FieldView::new(3, PlayerId::new(0))
                .with_my_cards(hand)
                .with_ops_cards(cards("C3 S4 H5 D7 H8 C9 ST HJ DQ CK SA H2"))
                .with_board(Board::empty(order));
            let mut buf = buffer([
                single("S3"),
                single("H6").holding_empty_field(),
                group("D6 H6"),
                single("C7").with_min_melds_delta(2),
                single("JK"),
                group("S2 C2").inevitable(),
            ]);

            let pruner = RootPruner::default();
            let first = pruner.prune(&mut buf, &field, &FieldInfo::default());
            assert!(first.survivors >= 1);
            assert!(buf.active().iter().any(MoveInfo::is_pass));
            assert_eq!(first.survivors + first.total_pruned(), 7);

            let second = pruner.prune(&mut buf, &field, &FieldInfo::default());
            assert_eq!(second.total_pruned(), 0);
        }
    }

    #[test]
    fn test_disabled_rule_does_not_fire() {
        let field = view("S4 H7 D9 CK HK", "S5 DQ SA", Board::contested(Order::Normal));
        let info = FieldInfo::default().with_pass_dominant(true);
        let pruner = RootPruner::new(PruneConfig::default().with_rule(PruneRule::ExtremalHoldback, false));
        let mut buf = buffer([single("S4"), group("CK HK")]);

        let report = pruner.prune(&mut buf, &field, &info);
        assert_eq!(report.total_pruned(), 0);
        assert_eq!(report.survivors, 3);
    }

    #[test]
    fn test_single_candidate_is_never_pruned() {
        let field = view("S4 CK HK", "S5 SA", Board::contested(Order::Normal));
        let info = FieldInfo::default().with_pass_dominant(true);
        let mut buf: CandidateBuffer = [group("CK HK")].into_iter().collect();

        assert_eq!(prune_root_candidates(&mut buf, &field, &info), 1);
        let mut empty = CandidateBuffer::new();
        assert_eq!(prune_root_candidates(&mut empty, &field, &info), 0);
    }

    #[test]
    fn test_report_iter_follows_rule_order() {
        let report = PruneReport::default();
        let rules: Vec<_> = report.iter().map(|(rule, _)| rule).collect();
        assert_eq!(rules, PruneRule::ALL.to_vec());
    }
}
