//! Session tracking and account authentication
//!
//! The planner never keeps a global "current user": every operation goes
//! through a [`Planner`] engine whose [`SessionContext`] records which
//! account, if any, is active. The session holds only the username; the
//! account itself always lives in the store.

use tracing::warn;

use crate::error::{PlannerError, PlannerResult};
use crate::models::Account;
use crate::storage::{AccountStore, PersistenceGateway};

/// Which account, if any, is currently logged in
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    active_username: Option<String>,
}

impl SessionContext {
    /// Create a logged-out session
    pub fn new() -> Self {
        Self::default()
    }

    /// The active username, if logged in
    pub fn active_username(&self) -> Option<&str> {
        self.active_username.as_deref()
    }

    /// Check whether an account is logged in
    pub fn is_active(&self) -> bool {
        self.active_username.is_some()
    }

    fn set_active(&mut self, username: String) {
        self.active_username = Some(username);
    }

    fn clear(&mut self) {
        self.active_username = None;
    }
}

/// The planner engine: the account store, its persistence gateway, and the
/// session every operation is checked against
pub struct Planner {
    store: AccountStore,
    gateway: PersistenceGateway,
    session: SessionContext,
}

impl Planner {
    /// Open the planner against the given gateway, loading saved data
    ///
    /// A corrupt data file is logged and replaced in memory with an empty
    /// store; the broken file itself is left on disk untouched until the
    /// next save.
    pub fn open(gateway: PersistenceGateway) -> PlannerResult<Self> {
        let store = match gateway.load() {
            Ok(store) => store,
            Err(err) if err.is_corrupt_store() => {
                warn!("{}; starting with an empty account store", err);
                AccountStore::new()
            }
            Err(err) => return Err(err),
        };

        Ok(Self {
            store,
            gateway,
            session: SessionContext::new(),
        })
    }

    /// The in-memory account store
    pub fn store(&self) -> &AccountStore {
        &self.store
    }

    /// The current session
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Create a new account and make it the active session
    ///
    /// Fails with [`PlannerError::DuplicateAccount`] when the username is
    /// taken, checked before [`PlannerError::InvalidCredentials`] for empty
    /// fields.
    pub fn signup(&mut self, username: &str, password: &str) -> PlannerResult<()> {
        if self.store.contains(username) {
            return Err(PlannerError::DuplicateAccount(username.to_string()));
        }
        if username.is_empty() || password.is_empty() {
            return Err(PlannerError::InvalidCredentials);
        }

        self.store.insert(username.to_string(), Account::new(password));
        self.session.set_active(username.to_string());
        Ok(())
    }

    /// Authenticate against a stored account and make it active
    ///
    /// An unknown username and a wrong password report the same error.
    pub fn login(&mut self, username: &str, password: &str) -> PlannerResult<()> {
        let matches = self
            .store
            .get(username)
            .map(|account| account.verify_password(password))
            .unwrap_or(false);

        if !matches {
            return Err(PlannerError::InvalidCredentials);
        }

        self.session.set_active(username.to_string());
        Ok(())
    }

    /// Flush the store to disk and clear the active session
    ///
    /// The session is cleared even when the flush fails; the error is
    /// returned so the caller can report it, and nothing in memory is lost.
    /// Logging out while already logged out is a no-op.
    pub fn logout(&mut self) -> PlannerResult<()> {
        let flush = if self.session.is_active() {
            self.save()
        } else {
            Ok(())
        };
        self.session.clear();
        flush
    }

    /// Persist every account, active or not
    pub fn save(&self) -> PlannerResult<()> {
        self.gateway.save(&self.store)
    }

    /// The account the session points at
    pub(crate) fn active_account(&self) -> PlannerResult<&Account> {
        let username = self
            .session
            .active_username()
            .ok_or(PlannerError::NoActiveSession)?;
        self.store.get(username).ok_or(PlannerError::NoActiveSession)
    }

    /// The account the session points at, for mutation
    pub(crate) fn active_account_mut(&mut self) -> PlannerResult<&mut Account> {
        let username = self
            .session
            .active_username
            .as_deref()
            .ok_or(PlannerError::NoActiveSession)?;
        self.store
            .get_mut(username)
            .ok_or(PlannerError::NoActiveSession)
    }
}
