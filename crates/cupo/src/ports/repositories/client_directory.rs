//! Client Directory Port
//!
//! Abstract interface for the directory owning client identity records.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Client, IdType, Person};

/// Directory of registered clients, keyed by identifier pair.
///
/// The directory owns the uniqueness invariant on (id_type, id_value). It
/// does not serialize concurrent callers: the check-then-insert sequence in
/// [`create`](ClientDirectory::create) is not atomic from the caller's view.
#[async_trait]
pub trait ClientDirectory: Send + Sync {
    /// True iff exactly one client matches the identifier pair.
    /// Zero matches is an ordinary `false`, never an error.
    async fn exists(&self, id_type: IdType, id_value: &str) -> Result<bool, DomainError>;

    /// Register a new client and assign its surrogate id.
    /// Fails with [`DomainError::AlreadyExists`] when the pair is taken.
    async fn create(&self, person: &Person) -> Result<(), DomainError>;

    /// Find the single client for an identifier pair, or `None`.
    /// More than one match breaks the uniqueness invariant and fails with
    /// [`DomainError::LookupAmbiguous`].
    async fn find(&self, id_type: IdType, id_value: &str)
        -> Result<Option<Client>, DomainError>;
}
