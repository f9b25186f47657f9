#![allow(dead_code)]

//! Pending confidence writes.
//!
//! Slider edits land here first and only leave once committed, either after a
//! settle period (`FlushPolicy::Debounce`) or on an explicit commit. The
//! readiness engine never reads this queue; it only sees committed values.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::readiness::models::{SkillObservation, SkillSource};
use crate::readiness::normalize::{clamp_confidence, skill_key};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlushPolicy {
    /// Edits commit once they have been left untouched for this long.
    Debounce(Duration),
    /// Edits commit only through `commit`.
    ExplicitCommit,
}

/// A user's edit of one skill observation's confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceEdit {
    pub user_id: Uuid,
    pub skill: String,
    pub source: SkillSource,
    pub confidence: f64,
}

#[derive(Debug, Clone)]
struct PendingEdit {
    edit: ConfidenceEdit,
    queued_at: DateTime<Utc>,
}

type EditKey = (Uuid, String, SkillSource);

#[derive(Debug)]
pub struct PendingWriteQueue {
    policy: FlushPolicy,
    pending: BTreeMap<EditKey, PendingEdit>,
}

impl PendingWriteQueue {
    pub fn new(policy: FlushPolicy) -> Self {
        Self {
            policy,
            pending: BTreeMap::new(),
        }
    }

    pub fn policy(&self) -> FlushPolicy {
        self.policy
    }

    /// Queues an edit, replacing any pending edit for the same user, skill
    /// identity, and source. Replacing restarts the settle timer.
    /// Returns the number of edits pending for that user.
    pub fn enqueue(&mut self, mut edit: ConfidenceEdit, now: DateTime<Utc>) -> usize {
        edit.confidence = clamp_confidence(edit.confidence);
        let key = (edit.user_id, skill_key(&edit.skill), edit.source);
        let user_id = edit.user_id;

        if self
            .pending
            .insert(key, PendingEdit { edit, queued_at: now })
            .is_some()
        {
            debug!("Coalesced pending confidence edit for user {user_id}");
        }
        self.pending_for(user_id)
    }

    /// Drains `user_id`'s edits whose settle period has elapsed. Always
    /// empty under `ExplicitCommit`.
    ///
    /// There is no background timer: the client calls this once its slider
    /// has been idle for the settle period.
    pub fn flush_due(&mut self, user_id: Uuid, now: DateTime<Utc>) -> Vec<ConfidenceEdit> {
        let settle = match self.policy {
            FlushPolicy::Debounce(d) => d,
            FlushPolicy::ExplicitCommit => return Vec::new(),
        };

        let due: Vec<EditKey> = self
            .pending
            .iter()
            .filter(|((uid, _, _), p)| *uid == user_id && p.queued_at + settle <= now)
            .map(|(k, _)| k.clone())
            .collect();

        due.into_iter()
            .filter_map(|k| self.pending.remove(&k))
            .map(|p| p.edit)
            .collect()
    }

    /// Drains every pending edit for `user_id` regardless of policy.
    pub fn commit(&mut self, user_id: Uuid) -> Vec<ConfidenceEdit> {
        let keys: Vec<EditKey> = self
            .pending
            .keys()
            .filter(|(uid, _, _)| *uid == user_id)
            .cloned()
            .collect();

        keys.into_iter()
            .filter_map(|k| self.pending.remove(&k))
            .map(|p| p.edit)
            .collect()
    }

    pub fn pending_for(&self, user_id: Uuid) -> usize {
        self.pending.keys().filter(|(uid, _, _)| *uid == user_id).count()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Applies committed edits: updates the observation with the same skill
/// identity and source, or appends a new one when none exists.
pub fn apply_committed(observations: &mut Vec<SkillObservation>, edits: &[ConfidenceEdit]) {
    for edit in edits {
        let key = skill_key(&edit.skill);
        let confidence = clamp_confidence(edit.confidence);
        match observations
            .iter_mut()
            .find(|o| o.source == edit.source && skill_key(&o.name) == key)
        {
            Some(existing) => existing.confidence = confidence,
            None => observations.push(SkillObservation::new(
                edit.skill.trim(),
                confidence,
                edit.source,
            )),
        }
    }
}
