//! Account repository trait defining the interface for account persistence.
//!
//! This module defines the repository pattern interface for Account
//! entities. The trait is async-first and uses Result types so that
//! commit-time constraint failures surface as values, not panics.

use async_trait::async_trait;

use crate::domain::entities::account::Account;
use crate::errors::DomainResult;

/// Repository trait for Account entity persistence operations
///
/// Implementations stand between the domain and the actual store. All
/// constraint checking on committed data happens behind this boundary:
/// a rejected commit returns a [`crate::errors::ConstraintViolation`]
/// and leaves the caller's entity uncommitted.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Submit a new account for commit
    ///
    /// The store checks the username rules (present, unique) and assigns
    /// the identity in the same atomic step.
    ///
    /// # Arguments
    /// * `account` - The uncommitted account to persist
    ///
    /// # Returns
    /// * `Ok(Account)` - The committed account with its assigned id
    /// * `Err(DomainError)` - Constraint violation or database error
    ///
    /// # Example
    /// ```no_run
    /// # use potluck_core::repositories::AccountRepository;
    /// # use potluck_core::domain::entities::account::Account;
    /// # async fn example(repo: &impl AccountRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let account = Account::new("Liz").with_bio("British-American actress");
    ///
    /// let committed = repo.create(account).await?;
    /// println!("Assigned id: {:?}", committed.id);
    /// # Ok(())
    /// # }
    /// ```
    async fn create(&self, account: Account) -> DomainResult<Account>;

    /// Re-submit a committed account with updated fields
    ///
    /// The update passes through the same constraint checks as the
    /// original commit.
    ///
    /// # Arguments
    /// * `account` - The committed account with updated fields
    ///
    /// # Returns
    /// * `Ok(Account)` - The updated account
    /// * `Err(DomainError)` - Not found, constraint violation, or
    ///   database error
    async fn update(&self, account: Account) -> DomainResult<Account>;

    /// Find an account by its store-assigned identifier
    ///
    /// # Arguments
    /// * `id` - The identifier assigned at commit
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account with the given id
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Account>>;

    /// Find an account by its exact username
    ///
    /// The comparison is case-sensitive, matching the uniqueness rule
    /// the store enforces.
    ///
    /// # Arguments
    /// * `username` - The username to look up
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account with the given username
    /// * `Err(DomainError)` - Database error occurred
    ///
    /// # Example
    /// ```no_run
    /// # use potluck_core::repositories::AccountRepository;
    /// # async fn example(repo: &impl AccountRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// match repo.find_by_username("Liz").await? {
    ///     Some(account) => println!("Found account {:?}", account.id),
    ///     None => println!("No such account"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn find_by_username(&self, username: &str) -> DomainResult<Option<Account>>;

    /// Check whether an account exists with the given username
    ///
    /// # Arguments
    /// * `username` - The username to check
    ///
    /// # Returns
    /// * `Ok(true)` - An account with this username exists
    /// * `Ok(false)` - Username is free
    /// * `Err(DomainError)` - Database error occurred
    async fn exists_by_username(&self, username: &str) -> DomainResult<bool>;

    /// Delete an account from the store
    ///
    /// Fails with a foreign key violation while committed recipes still
    /// reference the account.
    ///
    /// # Arguments
    /// * `id` - The identifier of the account to delete
    ///
    /// # Returns
    /// * `Ok(true)` - Account was deleted
    /// * `Ok(false)` - Account not found
    /// * `Err(DomainError)` - Deletion failed
    async fn delete(&self, id: i64) -> DomainResult<bool>;

    /// Delete every account in the store
    ///
    /// # Returns
    /// * `Ok(count)` - Number of accounts removed
    /// * `Err(DomainError)` - Deletion failed
    async fn delete_all(&self) -> DomainResult<u64>;

    /// Count all committed accounts
    ///
    /// # Returns
    /// * `Ok(count)` - Number of accounts in the store
    /// * `Err(DomainError)` - Database error occurred
    async fn count(&self) -> DomainResult<u64>;
}
