//! Actor ranking for the event query endpoints.
//!
//! Pure, synchronous computation over snapshots of the event and actor
//! tables: no I/O, no shared state. The ranking contract orders actors by
//! score descending, then most-recent event timestamp descending, then
//! login ascending.

mod rank;
mod streak;

pub use rank::{RankMode, rank_actors};
pub use streak::longest_streak;
