//! Conviction rule

use super::tally::AccusationTally;
use crate::game::constants::GUILTY_THRESHOLD;

/// Outcome of accusing a suspect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub suspect: String,
    pub evidence_count: u32,
    pub guilty: bool,
}

/// Judge `suspect` against the current tally. Pure: reads the tally, changes nothing.
pub fn accuse(tally: &AccusationTally, suspect: &str) -> Verdict {
    let evidence_count = tally.count_for(suspect);
    let verdict = Verdict {
        suspect: suspect.to_string(),
        evidence_count,
        guilty: evidence_count >= GUILTY_THRESHOLD,
    };
    tracing::info!(
        suspect,
        evidence_count,
        guilty = verdict.guilty,
        "accusation judged"
    );
    verdict
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally_with(suspect: &str, n: u32) -> AccusationTally {
        let mut tally = AccusationTally::new();
        for _ in 0..n {
            tally.increment(suspect, 1);
        }
        tally
    }

    #[test]
    fn test_threshold() {
        for (n, guilty) in [(0, false), (1, false), (2, true), (3, true)] {
            let verdict = accuse(&tally_with("Ana", n), "Ana");
            assert_eq!(verdict.evidence_count, n);
            assert_eq!(verdict.guilty, guilty, "count {}", n);
        }
    }

    #[test]
    fn test_accuse_is_idempotent() {
        let tally = tally_with("Sofia", 2);
        assert_eq!(accuse(&tally, "Sofia"), accuse(&tally, "Sofia"));
        assert_eq!(tally.count_for("Sofia"), 2);
    }

    #[test]
    fn test_unknown_suspect() {
        let verdict = accuse(&tally_with("Ana", 3), "Carlos");
        assert_eq!(
            verdict,
            Verdict {
                suspect: "Carlos".to_string(),
                evidence_count: 0,
                guilty: false,
            }
        );
    }
}
