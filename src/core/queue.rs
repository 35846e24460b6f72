//! Sequential review triage.
//!
//! A [`ReviewQueue`] presents entries one at a time and records a decision
//! for the entry under the cursor. It is generic over the payload so the same
//! machine serves sellers reviewing ranked agents and agents reviewing leads.
//!
//! # Defer bound
//!
//! Deferring re-queues the entry at the tail. Each entry may be deferred at
//! most `max_defers` times; deferring it again parks it in the undecided
//! bucket instead. Every entry is therefore presented at most
//! `max_defers + 1` times and any decision sequence reaches the end.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Default number of times a single entry may be deferred
pub const DEFAULT_MAX_DEFERS: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Reject,
    Accept,
    PriorityAccept,
    Defer,
    /// Stop reviewing; everything not yet decided stays undecided
    SkipToEnd,
}

/// What a decision did to the queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionOutcome {
    Rejected,
    Accepted,
    PriorityAccepted,
    /// Re-queued at the tail
    Deferred,
    /// Defer limit reached; moved to undecided
    Parked,
    Skipped { count: usize },
    /// The queue was already at its end; nothing changed
    Exhausted,
}

/// An accepted entry and whether it was accepted with priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accepted<T> {
    pub item: T,
    pub priority: bool,
}

/// Borrowed view of the queue state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueueSnapshot<'a, T> {
    pub cursor: usize,
    pub len: usize,
    pub rejected: Vec<&'a T>,
    pub accepted: Vec<Accepted<&'a T>>,
    pub undecided: Vec<&'a T>,
    /// Entries still waiting to be presented, in presentation order
    pub remaining: Vec<&'a T>,
}

/// Terminal buckets handed back once review is over
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewOutcome<T> {
    pub rejected: Vec<T>,
    pub accepted: Vec<Accepted<T>>,
    pub undecided: Vec<T>,
}

#[derive(Debug, Clone)]
pub struct ReviewQueue<T> {
    items: Vec<T>,
    defers: Vec<u32>,
    /// Presentation order as indices into `items`; grows on defer
    order: Vec<usize>,
    cursor: usize,
    rejected: Vec<usize>,
    accepted: VecDeque<(usize, bool)>,
    undecided: Vec<usize>,
    max_defers: u32,
}

impl<T> ReviewQueue<T> {
    pub fn new(entries: Vec<T>) -> Self {
        Self::with_max_defers(entries, DEFAULT_MAX_DEFERS)
    }

    pub fn with_max_defers(entries: Vec<T>, max_defers: u32) -> Self {
        let len = entries.len();
        Self {
            items: entries,
            defers: vec![0; len],
            order: (0..len).collect(),
            cursor: 0,
            rejected: Vec::new(),
            accepted: VecDeque::new(),
            undecided: Vec::new(),
            max_defers,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current length of the presentation order, including deferred repeats
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.order.len()
    }

    /// Entry under the cursor, if any
    pub fn current(&self) -> Option<&T> {
        self.order.get(self.cursor).map(|&idx| &self.items[idx])
    }

    pub fn max_defers(&self) -> u32 {
        self.max_defers
    }

    /// Apply a decision to the entry under the cursor
    pub fn decide(&mut self, decision: Decision) -> DecisionOutcome {
        let Some(&idx) = self.order.get(self.cursor) else {
            tracing::debug!(?decision, "Review queue exhausted");
            return DecisionOutcome::Exhausted;
        };

        let outcome = match decision {
            Decision::Reject => {
                self.rejected.push(idx);
                DecisionOutcome::Rejected
            }
            Decision::Accept => {
                self.accepted.push_back((idx, false));
                DecisionOutcome::Accepted
            }
            Decision::PriorityAccept => {
                self.accepted.push_front((idx, true));
                DecisionOutcome::PriorityAccepted
            }
            Decision::Defer if self.defers[idx] < self.max_defers => {
                self.defers[idx] += 1;
                self.order.push(idx);
                DecisionOutcome::Deferred
            }
            Decision::Defer => {
                self.undecided.push(idx);
                DecisionOutcome::Parked
            }
            Decision::SkipToEnd => {
                let skipped = &self.order[self.cursor..];
                self.undecided.extend_from_slice(skipped);
                let count = skipped.len();
                self.cursor = self.order.len();
                tracing::debug!(count, "Skipped remaining entries");
                return DecisionOutcome::Skipped { count };
            }
        };

        self.cursor += 1;
        tracing::debug!(
            ?decision,
            ?outcome,
            cursor = self.cursor,
            len = self.order.len(),
            "Review decision applied"
        );
        outcome
    }

    pub fn snapshot(&self) -> QueueSnapshot<'_, T> {
        let item = |&idx: &usize| &self.items[idx];
        QueueSnapshot {
            cursor: self.cursor,
            len: self.order.len(),
            rejected: self.rejected.iter().map(item).collect(),
            accepted: self
                .accepted
                .iter()
                .map(|&(idx, priority)| Accepted {
                    item: &self.items[idx],
                    priority,
                })
                .collect(),
            undecided: self.undecided.iter().map(item).collect(),
            remaining: self.order[self.cursor.min(self.order.len())..]
                .iter()
                .map(item)
                .collect(),
        }
    }

    /// Consume the queue into its buckets
    ///
    /// Entries not yet decided when review stops count as undecided.
    pub fn into_outcome(self) -> ReviewOutcome<T> {
        let ReviewQueue {
            items,
            order,
            cursor,
            rejected,
            accepted,
            mut undecided,
            ..
        } = self;

        undecided.extend_from_slice(&order[cursor.min(order.len())..]);

        let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
        let mut take = |idx: usize| slots[idx].take();

        ReviewOutcome {
            rejected: rejected.into_iter().filter_map(&mut take).collect(),
            accepted: accepted
                .into_iter()
                .filter_map(|(idx, priority)| take(idx).map(|item| Accepted { item, priority }))
                .collect(),
            undecided: undecided.into_iter().filter_map(&mut take).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue(names: &[&'static str]) -> ReviewQueue<&'static str> {
        ReviewQueue::new(names.to_vec())
    }

    #[test]
    fn test_reject_and_accept_advance() {
        let mut q = queue(&["a", "b"]);

        assert_eq!(q.current(), Some(&"a"));
        assert_eq!(q.decide(Decision::Reject), DecisionOutcome::Rejected);
        assert_eq!(q.decide(Decision::Accept), DecisionOutcome::Accepted);
        assert!(q.is_exhausted());

        let snap = q.snapshot();
        assert_eq!(snap.cursor, 2);
        assert_eq!(snap.rejected, vec![&"a"]);
        assert_eq!(snap.accepted, vec![Accepted { item: &"b", priority: false }]);
        assert!(snap.undecided.is_empty());
    }

    #[test]
    fn test_priority_accept_goes_to_head() {
        let mut q = queue(&["x", "y"]);
        q.decide(Decision::Accept);
        q.decide(Decision::PriorityAccept);

        let accepted: Vec<&str> = q.snapshot().accepted.iter().map(|a| *a.item).collect();
        assert_eq!(accepted, vec!["y", "x"]);
    }

    #[test]
    fn test_defer_requeues_at_tail() {
        let mut q = queue(&["a", "b"]);

        assert_eq!(q.decide(Decision::Defer), DecisionOutcome::Deferred);
        assert_eq!(q.len(), 3);
        assert_eq!(q.current(), Some(&"b"));
        q.decide(Decision::Accept);
        assert_eq!(q.current(), Some(&"a"));
        q.decide(Decision::Reject);

        assert!(q.is_exhausted());
        assert_eq!(q.snapshot().rejected, vec![&"a"]);
    }

    #[test]
    fn test_second_defer_parks_entry() {
        let mut q = queue(&["a"]);

        assert_eq!(q.decide(Decision::Defer), DecisionOutcome::Deferred);
        assert_eq!(q.decide(Decision::Defer), DecisionOutcome::Parked);
        assert!(q.is_exhausted());
        assert_eq!(q.snapshot().undecided, vec![&"a"]);
    }

    #[test]
    fn test_zero_defer_budget_parks_immediately() {
        let mut q = ReviewQueue::with_max_defers(vec![1, 2], 0);
        assert_eq!(q.decide(Decision::Defer), DecisionOutcome::Parked);
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn test_skip_to_end() {
        let mut q = queue(&["a", "b", "c", "d", "e"]);
        q.decide(Decision::Accept);
        q.decide(Decision::Reject);

        assert_eq!(q.decide(Decision::SkipToEnd), DecisionOutcome::Skipped { count: 3 });

        let snap = q.snapshot();
        assert_eq!(snap.cursor, 5);
        assert_eq!(snap.undecided, vec![&"c", &"d", &"e"]);
        assert!(snap.remaining.is_empty());
    }

    #[test]
    fn test_exhausted_is_noop() {
        let mut q = queue(&["a"]);
        q.decide(Decision::Reject);
        let before = q.snapshot().rejected.len();

        for decision in [
            Decision::Reject,
            Decision::Accept,
            Decision::PriorityAccept,
            Decision::Defer,
            Decision::SkipToEnd,
        ] {
            assert_eq!(q.decide(decision), DecisionOutcome::Exhausted);
        }
        assert_eq!(q.snapshot().rejected.len(), before);
        assert_eq!(q.cursor(), 1);
    }

    #[test]
    fn test_empty_queue_is_exhausted() {
        let mut q: ReviewQueue<u32> = ReviewQueue::new(vec![]);
        assert!(q.is_empty());
        assert!(q.is_exhausted());
        assert_eq!(q.current(), None);
        assert_eq!(q.decide(Decision::Accept), DecisionOutcome::Exhausted);
    }

    #[test]
    fn test_is_empty_agrees_with_len() {
        let mut q = queue(&["a"]);
        assert!(!q.is_empty());
        assert_eq!(q.len(), 1);

        q.decide(Decision::Defer);
        assert_eq!(q.len(), 2);
        assert_eq!(q.is_empty(), q.len() == 0);
    }

    #[test]
    fn test_into_outcome_moves_items() {
        let mut q = ReviewQueue::new(vec![
            "a".to_string(),
            "b".to_string(),
            "c".to_string(),
            "d".to_string(),
        ]);
        q.decide(Decision::Accept);
        q.decide(Decision::PriorityAccept);
        q.decide(Decision::Defer);

        let outcome = q.into_outcome();

        assert!(outcome.rejected.is_empty());
        assert_eq!(
            outcome.accepted,
            vec![
                Accepted { item: "b".to_string(), priority: true },
                Accepted { item: "a".to_string(), priority: false },
            ]
        );
        // "d" is pending, then the deferred "c"
        assert_eq!(outcome.undecided, vec!["d".to_string(), "c".to_string()]);
    }
}
