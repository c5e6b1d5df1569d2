//! Rule chain editor state
//!
//! Owns the step list being edited together with load/save status. Every
//! list mutation goes through `apply` or `try_apply` so the dirty flag
//! follows the mutation outcome.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use novelist_domain::{DomainError, RuleChainId, StepList, StepListChange};

use crate::application::dto::{LoadedRuleChain, StepTemplateSummary};
use crate::ports::outbound::DragCoordinator;

#[derive(Clone, Copy)]
pub struct RuleChainState {
    pub chain_id: Signal<Option<RuleChainId>>,
    pub chain_name: Signal<String>,
    pub chain_description: Signal<Option<String>>,
    pub steps: Signal<StepList>,
    /// Local list differs from what was last loaded or saved
    pub dirty: Signal<bool>,
    pub loading: Signal<bool>,
    pub saving: Signal<bool>,
    pub error: Signal<Option<String>>,
    pub templates: Signal<Vec<StepTemplateSummary>>,
    pub updated_at: Signal<Option<DateTime<Utc>>>,
    pub drag: Signal<Box<dyn DragCoordinator>>,
    /// Chain id of the most recent load request
    pub requested_chain: Signal<Option<RuleChainId>>,
}

/// What to do with a save response once it arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveAdoption {
    /// Nothing changed locally; take the stored list and its backend ids
    Replace,
    /// Same chain, but edited while the request was in flight
    KeepLocalEdits,
    /// Another chain is open now; the response is ignored
    Stale,
}

/// Decide how a save response for `saved_chain` applies to the open editor.
pub fn save_adoption(
    open_chain: Option<RuleChainId>,
    current: &StepList,
    saved_chain: RuleChainId,
    sent: &StepList,
) -> SaveAdoption {
    if open_chain != Some(saved_chain) {
        SaveAdoption::Stale
    } else if current == sent {
        SaveAdoption::Replace
    } else {
        SaveAdoption::KeepLocalEdits
    }
}

/// A load response is only applied if it answers the latest request.
pub fn load_is_current(requested: Option<RuleChainId>, loaded: RuleChainId) -> bool {
    requested == Some(loaded)
}

/// Opening a chain discards the open list, so unsaved edits need consent.
pub fn open_needs_confirmation(dirty: bool, has_chain: bool) -> bool {
    dirty && has_chain
}

impl RuleChainState {
    /// Must be called inside an active Dioxus runtime.
    pub fn new(drag: Box<dyn DragCoordinator>) -> Self {
        Self {
            chain_id: Signal::new(None),
            chain_name: Signal::new(String::new()),
            chain_description: Signal::new(None),
            steps: Signal::new(StepList::new()),
            dirty: Signal::new(false),
            loading: Signal::new(false),
            saving: Signal::new(false),
            error: Signal::new(None),
            templates: Signal::new(Vec::new()),
            updated_at: Signal::new(None),
            drag: Signal::new(drag),
            requested_chain: Signal::new(None),
        }
    }

    /// Replace everything with a freshly loaded chain
    pub fn load(&mut self, chain: LoadedRuleChain) {
        if self.drag.read().is_dragging() {
            self.drag.write().cancel();
        }
        self.chain_id.set(Some(chain.id));
        self.chain_name.set(chain.name);
        self.chain_description.set(chain.description);
        self.steps.set(chain.steps);
        self.updated_at.set(chain.updated_at);
        self.dirty.set(false);
        self.loading.set(false);
        self.error.set(None);
    }

    /// Start loading `id`; responses for earlier requests are dropped.
    pub fn begin_load(&mut self, id: RuleChainId) {
        self.requested_chain.set(Some(id));
        self.loading.set(true);
        self.error.set(None);
    }

    /// Apply a load response if it answers the latest request.
    pub fn finish_load(&mut self, chain: LoadedRuleChain) {
        if !load_is_current(*self.requested_chain.read(), chain.id) {
            tracing::debug!(chain_id = %chain.id, "Ignoring superseded rule chain load");
            return;
        }
        self.load(chain);
    }

    pub fn fail_load(&mut self, id: RuleChainId, message: impl Into<String>) {
        if !load_is_current(*self.requested_chain.read(), id) {
            return;
        }
        self.loading.set(false);
        self.set_error(message);
    }

    /// Record a completed save of `sent` to `saved.id`.
    ///
    /// The stored chain replaces the local list only if nothing was edited
    /// while the request was in flight. A response for a chain that is no
    /// longer open only ends the saving state.
    pub fn finish_save(&mut self, sent: &StepList, saved: LoadedRuleChain) {
        self.saving.set(false);
        let adoption = save_adoption(*self.chain_id.read(), &self.steps.read(), saved.id, sent);
        match adoption {
            SaveAdoption::Replace => self.load(saved),
            SaveAdoption::KeepLocalEdits => {
                tracing::debug!("Steps changed during save, keeping local edits");
                self.updated_at.set(saved.updated_at);
            }
            SaveAdoption::Stale => {
                tracing::debug!(chain_id = %saved.id, "Save finished for a chain no longer open");
            }
        }
    }

    /// A failed save never touches the list; it stays dirty for a retry.
    pub fn fail_save(&mut self, message: impl Into<String>) {
        self.saving.set(false);
        self.set_error(message);
    }

    pub fn apply(
        &mut self,
        mutate: impl FnOnce(&mut StepList) -> StepListChange,
    ) -> StepListChange {
        let change = mutate(&mut *self.steps.write());
        self.record(change);
        change
    }

    /// Like `apply`, for mutations that can be rejected. A rejection is shown
    /// in the error banner and leaves the list untouched.
    pub fn try_apply(
        &mut self,
        mutate: impl FnOnce(&mut StepList) -> Result<StepListChange, DomainError>,
    ) -> Option<StepListChange> {
        let result = mutate(&mut *self.steps.write());
        match result {
            Ok(change) => {
                self.record(change);
                Some(change)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Step list change rejected");
                self.set_error(e.to_string());
                None
            }
        }
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error.set(Some(message.into()));
    }

    pub fn clear_error(&mut self) {
        self.error.set(None);
    }

    fn record(&mut self, change: StepListChange) {
        if change.is_mutation() {
            tracing::debug!(?change, "Step list changed");
            self.dirty.set(true);
        } else {
            tracing::trace!(?change, "Step list unchanged");
        }
    }
}
