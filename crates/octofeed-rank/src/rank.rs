//! Actor ranking over a snapshot of the event and actor tables.

use chrono::{DateTime, Utc};

use octofeed_store::{Actor, Event, PUSH_EVENT};

use crate::streak::longest_streak;

/// How actors are scored when ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankMode {
    /// Score by the total number of events.
    ByCount,
    /// Score by the longest run of consecutive-day push activity.
    ByStreak,
}

/// Per-actor score built while ranking; never leaves this module.
struct ActorScore {
    actor: Actor,
    score: usize,
    last: DateTime<Utc>,
}

/// Rank actors over the full event set.
///
/// Events are grouped by actor id. In [`RankMode::ByStreak`] only
/// `PushEvent`s qualify, and an actor with exactly one qualifying event
/// scores 0. Actors with no qualifying event at all are dropped rather
/// than scored as zero.
///
/// The result is ordered by score descending, then by the timestamp of
/// the actor's most recent qualifying event descending, then by login
/// ascending. Empty inputs yield an empty vector.
pub fn rank_actors(events: &[Event], actors: &[Actor], mode: RankMode) -> Vec<Actor> {
    let mut scored: Vec<ActorScore> = Vec::new();

    for actor in actors {
        let mut own: Vec<&Event> = events
            .iter()
            .filter(|event| event.actor.id == actor.id)
            .filter(|event| match mode {
                RankMode::ByCount => true,
                RankMode::ByStreak => event.kind == PUSH_EVENT,
            })
            .collect();
        if own.is_empty() {
            continue;
        }
        own.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let last = own[0].created_at;
        let score = match mode {
            RankMode::ByCount => own.len(),
            // A single push can never form a streak.
            RankMode::ByStreak if own.len() == 1 => 0,
            RankMode::ByStreak => {
                let times: Vec<DateTime<Utc>> =
                    own.iter().map(|event| event.created_at).collect();
                longest_streak(&times)
            }
        };

        scored.push(ActorScore {
            actor: actor.clone(),
            score,
            last,
        });
    }

    scored.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| b.last.cmp(&a.last))
            .then_with(|| a.actor.login.cmp(&b.actor.login))
    });

    scored.into_iter().map(|entry| entry.actor).collect()
}
