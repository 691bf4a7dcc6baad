use crate::domain::model::LoanPolicy;
use crate::domain::ports::LibraryStore;

/// Stateless library operations over an injected store. Payment operations
/// additionally take the gateway collaborator per call.
pub struct LibraryService<S: LibraryStore> {
    pub(crate) store: S,
    pub(crate) policy: LoanPolicy,
}

impl<S: LibraryStore> LibraryService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            policy: LoanPolicy::default(),
        }
    }

    pub fn with_policy(store: S, policy: LoanPolicy) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> &LoanPolicy {
        &self.policy
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
