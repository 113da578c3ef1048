//! Candidate move buffer with an active prefix and a pruned suffix.
//!
//! Pruning swaps a candidate with the last active one and shrinks the
//! active region, so pruned moves stay in the arena and can be restored.
//! Relative order of the active moves is not preserved by a prune.
//!
//! ```
//! use rust_daifugo::moves::{CandidateBuffer, MoveInfo, Play};
//!
//! let mut buffer: CandidateBuffer = [
//!     MoveInfo::pass(),
//!     MoveInfo::new(Play::single("S3".parse().unwrap())),
//!     MoveInfo::new(Play::single("H9".parse().unwrap())),
//! ]
//! .into_iter()
//! .collect();
//!
//! buffer.prune(1);
//! assert_eq!(buffer.active_len(), 2);
//! assert_eq!(buffer.pruned().len(), 1);
//!
//! buffer.restore();
//! assert_eq!(buffer.active_len(), 3);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::info::MoveInfo;

/// Inline capacity; typical root move counts fit without allocating.
const INLINE_MOVES: usize = 32;

/// Caller-owned candidate buffer for one decision point.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CandidateBuffer {
    moves: SmallVec<[MoveInfo; INLINE_MOVES]>,
    active: usize,
}

impl CandidateBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a candidate to the active region.
    pub fn push(&mut self, mv: MoveInfo) {
        self.moves.push(mv);
        let last = self.moves.len() - 1;
        self.moves.swap(self.active, last);
        self.active += 1;
    }

    /// Total number of stored moves, active and pruned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Number of active candidates.
    #[inline]
    #[must_use]
    pub fn active_len(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn active(&self) -> &[MoveInfo] {
        &self.moves[..self.active]
    }

    #[must_use]
    pub fn pruned(&self) -> &[MoveInfo] {
        &self.moves[self.active..]
    }

    /// Active candidate at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the active region.
    #[must_use]
    pub fn get(&self, index: usize) -> &MoveInfo {
        assert!(index < self.active, "candidate {index} is not active");
        &self.moves[index]
    }

    /// Mutable active candidate at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the active region.
    pub fn get_mut(&mut self, index: usize) -> &mut MoveInfo {
        assert!(index < self.active, "candidate {index} is not active");
        &mut self.moves[index]
    }

    /// Move the active candidate at `index` into the pruned region.
    ///
    /// The last active candidate takes its slot.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the active region.
    pub fn prune(&mut self, index: usize) {
        assert!(index < self.active, "candidate {index} is not active");
        self.active -= 1;
        self.moves.swap(index, self.active);
    }

    /// Reactivate every pruned candidate.
    pub fn restore(&mut self) {
        self.active = self.moves.len();
    }

    /// Index of the first active candidate matching `pred`.
    pub fn position(&self, pred: impl Fn(&MoveInfo) -> bool) -> Option<usize> {
        self.active().iter().position(pred)
    }
}

impl FromIterator<MoveInfo> for CandidateBuffer {
    fn from_iter<I: IntoIterator<Item = MoveInfo>>(iter: I) -> Self {
        let moves: SmallVec<[MoveInfo; INLINE_MOVES]> = iter.into_iter().collect();
        let active = moves.len();
        Self { moves, active }
    }
}

impl Extend<MoveInfo> for CandidateBuffer {
    fn extend<I: IntoIterator<Item = MoveInfo>>(&mut self, iter: I) {
        for mv in iter {
            self.push(mv);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Play;

    fn single(text: &str) -> MoveInfo {
        MoveInfo::new(Play::single(text.parse().unwrap()))
    }

    #[test]
    fn test_prune_swaps_with_last_active() {
        let mut buffer: CandidateBuffer =
            [single("S3"), single("S4"), single("S5"), single("S6")].into_iter().collect();

        buffer.prune(1);
        assert_eq!(buffer.active_len(), 3);
        assert_eq!(buffer.get(1), &single("S6"));
        assert_eq!(buffer.pruned(), &[single("S4")]);

        buffer.prune(2);
        assert_eq!(buffer.active(), &[single("S3"), single("S6")]);
        assert_eq!(buffer.len(), 4);
    }

    #[test]
    fn test_push_after_prune_stays_active() {
        let mut buffer: CandidateBuffer = [single("S3"), single("S4")].into_iter().collect();
        buffer.prune(0);
        buffer.push(single("H9"));

        assert_eq!(buffer.active_len(), 2);
        assert!(buffer.active().contains(&single("H9")));
        assert_eq!(buffer.pruned(), &[single("S3")]);
    }

    #[test]
    fn test_restore() {
        let mut buffer: CandidateBuffer = [single("S3"), single("S4")].into_iter().collect();
        buffer.prune(0);
        buffer.prune(0);
        assert_eq!(buffer.active_len(), 0);
        buffer.restore();
        assert_eq!(buffer.active_len(), 2);
    }

    #[test]
    fn test_position() {
        let buffer: CandidateBuffer = [single("S3"), MoveInfo::pass()].into_iter().collect();
        assert_eq!(buffer.position(MoveInfo::is_pass), Some(1));
    }

    #[test]
    #[should_panic(expected = "is not active")]
    fn test_get_pruned_panics() {
        let mut buffer: CandidateBuffer = [single("S3")].into_iter().collect();
        buffer.prune(0);
        let _ = buffer.get(0);
    }
}
