//! Evidence accumulation and the verdict
//!
//! - [`ledger`]: [`ClueLedger`], the ordered set of distinct clues found so far
//! - [`index`]: [`SuspectIndex`], static clue → suspect facts
//! - [`tally`]: [`AccusationTally`], per-suspect count of implicating clues
//! - [`verdict`]: [`accuse`], the conviction rule over the tally
//!
//! # Invariant
//!
//! The tally only moves when the ledger accepts a clue it has not seen before,
//! so for every suspect `X`:
//!
//! ```text
//! tally.count_for(X) == |{ c in ledger : index.lookup(c) == Some(X) }|
//! ```

pub mod index;
pub mod ledger;
pub mod tally;
pub mod verdict;

pub use index::SuspectIndex;
pub use ledger::ClueLedger;
pub use tally::AccusationTally;
pub use verdict::{accuse, Verdict};
