//! Safe deletion: look up dependents, let the user confirm, then delete.
//!
//! One attempt at a time. Starting a new attempt replaces the outstanding one, and
//! every network result carries the [`Ticket`] of the attempt that issued it so late
//! results from a replaced attempt cannot move the machine.

use std::future::Future;

use crate::alerts::AlertBoard;
use crate::model::{Related, ResourceDescriptor};
use crate::remote::ResourceService;

/// What the protocol needs from the backend.
pub trait DeletionBackend {
    fn list_related(&self, name: &str) -> impl Future<Output = Result<Related, String>> + Send;

    fn remove(
        &self,
        target: &ResourceDescriptor,
    ) -> impl Future<Output = Result<String, String>> + Send;
}

impl DeletionBackend for ResourceService {
    fn list_related(&self, name: &str) -> impl Future<Output = Result<Related, String>> + Send {
        ResourceService::list_related(self, name)
    }

    fn remove(
        &self,
        target: &ResourceDescriptor,
    ) -> impl Future<Output = Result<String, String>> + Send {
        ResourceService::remove(self, target)
    }
}

/// Whether dependents only warn or actually block a deletion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlockerPolicy {
    #[default]
    Advisory,
    Enforce,
}

impl BlockerPolicy {
    pub fn from_enforce(enforce: bool) -> Self {
        if enforce {
            BlockerPolicy::Enforce
        } else {
            BlockerPolicy::Advisory
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingDeletion {
    pub target: ResourceDescriptor,
    pub blockers: Vec<String>,
    ticket: Ticket,
}

impl PendingDeletion {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DeletionState {
    #[default]
    Idle,
    Checking {
        ticket: Ticket,
        target: ResourceDescriptor,
    },
    Confirming(PendingDeletion),
    Deleting {
        ticket: Ticket,
        target: ResourceDescriptor,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfirmError {
    #[error("nothing is awaiting confirmation")]
    NotConfirming,

    #[error("'{name}' is still used by: {}", blockers.join(", "))]
    Blocked { name: String, blockers: Vec<String> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeletionOutcome {
    /// The server deleted the target; the list showing it should be refreshed.
    Deleted { message: String },
    Failed { message: String },
}

impl DeletionOutcome {
    pub fn needs_refresh(&self) -> bool {
        matches!(self, DeletionOutcome::Deleted { .. })
    }
}

#[derive(Clone, Debug, Default)]
pub struct SafeDeletion {
    state: DeletionState,
    policy: BlockerPolicy,
    last_ticket: u64,
}

impl SafeDeletion {
    pub fn new(policy: BlockerPolicy) -> Self {
        Self {
            state: DeletionState::Idle,
            policy,
            last_ticket: 0,
        }
    }

    pub fn state(&self) -> &DeletionState {
        &self.state
    }

    pub fn policy(&self) -> BlockerPolicy {
        self.policy
    }

    pub fn is_idle(&self) -> bool {
        self.state == DeletionState::Idle
    }

    pub fn pending(&self) -> Option<&PendingDeletion> {
        match &self.state {
            DeletionState::Confirming(p) => Some(p),
            _ => None,
        }
    }

    /// Idle (or any state) → Checking. Replaces an outstanding attempt.
    pub fn request(&mut self, target: ResourceDescriptor) -> Ticket {
        self.last_ticket += 1;
        let ticket = Ticket(self.last_ticket);
        if !self.is_idle() {
            tracing::debug!(?ticket, "replacing outstanding deletion attempt");
        }
        tracing::debug!(?ticket, name = %target.name, "checking dependents");
        self.state = DeletionState::Checking { ticket, target };
        ticket
    }

    /// Checking → Confirming. A failed lookup still moves on, with no blockers and a
    /// danger alert. Returns false when `ticket` no longer matches the current attempt.
    pub fn blockers_loaded(
        &mut self,
        ticket: Ticket,
        result: Result<Related, String>,
        alerts: &mut AlertBoard,
    ) -> bool {
        let target = match &self.state {
            DeletionState::Checking { ticket: current, target } if *current == ticket => {
                target.clone()
            }
            _ => {
                tracing::debug!(?ticket, "dropping stale dependents lookup");
                return false;
            }
        };
        let blockers = match result {
            Ok(related) => related.instances,
            Err(message) => {
                alerts.danger(message);
                Vec::new()
            }
        };
        self.state = DeletionState::Confirming(PendingDeletion {
            target,
            blockers,
            ticket,
        });
        true
    }

    /// The refusal `confirm` would return for the pending attempt under the
    /// current policy, if any. Lets callers refuse before asking the user.
    pub fn blocked(&self) -> Option<ConfirmError> {
        let pending = self.pending()?;
        (self.policy == BlockerPolicy::Enforce && !pending.blockers.is_empty()).then(|| {
            ConfirmError::Blocked {
                name: pending.target.name.clone(),
                blockers: pending.blockers.clone(),
            }
        })
    }

    /// Confirming → Deleting. Returns what to delete.
    pub fn confirm(&mut self) -> Result<(Ticket, ResourceDescriptor), ConfirmError> {
        if let Some(refusal) = self.blocked() {
            return Err(refusal);
        }
        let pending = match &self.state {
            DeletionState::Confirming(p) => p,
            _ => return Err(ConfirmError::NotConfirming),
        };
        let ticket = pending.ticket;
        let target = pending.target.clone();
        self.state = DeletionState::Deleting {
            ticket,
            target: target.clone(),
        };
        Ok((ticket, target))
    }

    /// Confirming (or Checking) → Idle without touching the network.
    pub fn cancel(&mut self) -> Option<PendingDeletion> {
        match std::mem::take(&mut self.state) {
            DeletionState::Confirming(p) => Some(p),
            DeletionState::Deleting { ticket, target } => {
                // The request is already out; keep tracking it.
                self.state = DeletionState::Deleting { ticket, target };
                None
            }
            _ => None,
        }
    }

    /// Deleting → Idle. The alert is raised even for a replaced attempt, since the
    /// server-side effect happened regardless.
    pub fn deletion_finished(
        &mut self,
        ticket: Ticket,
        result: Result<String, String>,
        alerts: &mut AlertBoard,
    ) -> DeletionOutcome {
        if matches!(&self.state, DeletionState::Deleting { ticket: current, .. } if *current == ticket)
        {
            self.state = DeletionState::Idle;
        }
        match result {
            Ok(message) => {
                alerts.success(message.clone());
                DeletionOutcome::Deleted { message }
            }
            Err(message) => {
                alerts.danger(message.clone());
                DeletionOutcome::Failed { message }
            }
        }
    }

    /// Starts an attempt and waits for the dependents lookup.
    pub async fn begin<B: DeletionBackend>(
        &mut self,
        backend: &B,
        target: ResourceDescriptor,
        alerts: &mut AlertBoard,
    ) -> Option<&PendingDeletion> {
        let ticket = self.request(target.clone());
        let related = backend.list_related(&target.name).await;
        self.blockers_loaded(ticket, related, alerts);
        self.pending()
    }

    /// Confirms the pending attempt and performs the delete.
    pub async fn confirm_and_delete<B: DeletionBackend>(
        &mut self,
        backend: &B,
        alerts: &mut AlertBoard,
    ) -> Result<DeletionOutcome, ConfirmError> {
        let (ticket, target) = self.confirm()?;
        let result = backend.remove(&target).await;
        Ok(self.deletion_finished(ticket, result, alerts))
    }
}

#[cfg(test)]
#[path = "tests/deletion_tests.rs"]
mod tests;
