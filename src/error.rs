//! Error type for contract violations at the heuristic entry points.
//!
//! Every failure here means the calling search or move-generation layer
//! broke a precondition; nothing in this crate fails on well-formed input.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeuristicError {
    #[error("no mate-flagged move among {candidates} candidates")]
    NoMateCandidate { candidates: usize },

    #[error("exchange pool holds {available} cards but {requested} were requested")]
    ExchangeShortfall { requested: usize, available: usize },

    #[error("candidate buffer has no active moves")]
    EmptyCandidateSet,
}

pub type Result<T> = std::result::Result<T, HeuristicError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = HeuristicError::ExchangeShortfall { requested: 2, available: 1 };
        assert_eq!(
            err.to_string(),
            "exchange pool holds 1 cards but 2 were requested"
        );
        assert_eq!(
            HeuristicError::NoMateCandidate { candidates: 4 }.to_string(),
            "no mate-flagged move among 4 candidates"
        );
    }
}
