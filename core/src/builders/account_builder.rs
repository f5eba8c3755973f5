//! Type-safe builder for account records.

use std::marker::PhantomData;

use serde::Deserialize;
use serde::Serialize;
use tracing::debug;
use tracing::trace;

use super::AccessSet;
use super::AccessState;
use super::AccessUnset;
use super::IdSet;
use super::IdState;
use super::IdUnset;
use super::NameSet;
use super::NameState;
use super::NameUnset;
use super::SealState;
use super::Sealed;
use super::Unsealed;
use crate::types::AccessLevel;
use crate::types::Phone;
use crate::types::PhoneKind;

/// A fully-formed account record.
///
/// Values of this type only come out of [`AccountBuilder::build`], which
/// the compiler refuses to resolve until every required field has been
/// supplied. The record is read-only afterward: fields are reached through
/// accessors and nothing mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    id: u64,
    display_name: String,
    access_level: AccessLevel,
    email: Option<String>,
    phones: Vec<Phone>,
}

impl Account {
    /// Create a new builder with every required slot unset
    pub const fn builder() -> AccountBuilder<IdUnset, NameUnset, AccessUnset, Unsealed> {
        AccountBuilder::new()
    }

    /// Numeric identifier
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Human-readable name
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Access granted to this account
    pub const fn access_level(&self) -> AccessLevel {
        self.access_level
    }

    /// Contact address, if one was supplied
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Contact numbers, in the order they were added
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Whether the account carries more than standard access
    pub const fn is_privileged(&self) -> bool {
        self.access_level.is_privileged()
    }
}

/// Type-safe account builder.
///
/// The four type parameters are the builder's state: one marker per
/// required field plus the seal tag. Each required slot stores whichever
/// marker currently tags it: nothing for an unset slot, the field's value
/// for a set one. The optional email and the phone list are typed
/// concretely and carried unchanged through every state.
///
/// Every operation consumes the builder and returns a new one, so a partly
/// built value can be cloned to fork two independent chains from a shared
/// prefix.
#[derive(Debug, Clone)]
pub struct AccountBuilder<I: IdState, N: NameState, A: AccessState, S: SealState> {
    id: I,
    display_name: N,
    access_level: A,
    email: Option<String>,
    phones: Vec<Phone>,
    _seal: PhantomData<S>,
}

impl AccountBuilder<IdUnset, NameUnset, AccessUnset, Unsealed> {
    /// Create a builder with all required slots unset and no seal
    pub const fn new() -> Self {
        Self {
            id: IdUnset,
            display_name: NameUnset,
            access_level: AccessUnset,
            email: None,
            phones: Vec::new(),
            _seal: PhantomData,
        }
    }
}

impl Default for AccountBuilder<IdUnset, NameUnset, AccessUnset, Unsealed> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IdState, N: NameState, A: AccessState> AccountBuilder<I, N, A, Unsealed> {
    /// Supply the numeric identifier.
    ///
    /// Calling this again before `build` replaces the previous value.
    pub fn id(self, id: u64) -> AccountBuilder<IdSet, N, A, Unsealed> {
        AccountBuilder {
            id: IdSet(id),
            display_name: self.display_name,
            access_level: self.access_level,
            email: self.email,
            phones: self.phones,
            _seal: PhantomData,
        }
    }

    /// Supply the display name.
    ///
    /// Calling this again before `build` replaces the previous value.
    pub fn display_name(self, name: impl Into<String>) -> AccountBuilder<I, NameSet, A, Unsealed> {
        AccountBuilder {
            id: self.id,
            display_name: NameSet(name.into()),
            access_level: self.access_level,
            email: self.email,
            phones: self.phones,
            _seal: PhantomData,
        }
    }

    /// Supply the access level.
    ///
    /// Calling this again before `build` replaces the previous value.
    pub fn access_level(self, level: AccessLevel) -> AccountBuilder<I, N, AccessSet, Unsealed> {
        AccountBuilder {
            id: self.id,
            display_name: self.display_name,
            access_level: AccessSet(level),
            email: self.email,
            phones: self.phones,
            _seal: PhantomData,
        }
    }

    /// Set or replace the contact address
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Append a contact number
    pub fn phone(mut self, kind: PhoneKind, number: impl Into<String>) -> Self {
        self.phones.push(Phone::new(kind, number));
        self
    }

    /// Lock the builder against further changes.
    ///
    /// Only the seal tag changes; every slot and field is carried over
    /// verbatim. There is no inverse: a sealed builder can only be built
    /// (once complete) or dropped.
    pub fn seal(self) -> AccountBuilder<I, N, A, Sealed> {
        trace!("sealing account builder");
        AccountBuilder {
            id: self.id,
            display_name: self.display_name,
            access_level: self.access_level,
            email: self.email,
            phones: self.phones,
            _seal: PhantomData,
        }
    }
}

impl<S: SealState> AccountBuilder<IdSet, NameSet, AccessSet, S> {
    /// Assemble the final record.
    ///
    /// Resolvable only once all three required slots are set; the seal tag
    /// is unconstrained. There is no failure path: a builder missing a
    /// required field has no `build` method at all.
    pub fn build(self) -> Account {
        let account = Account {
            id: self.id.0,
            display_name: self.display_name.0,
            access_level: self.access_level.0,
            email: self.email,
            phones: self.phones,
        };
        debug!(
            id = account.id,
            access_level = %account.access_level,
            "assembled account record"
        );
        account
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::mem;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_account_builder_flow() {
        let account = Account::builder()
            .access_level(AccessLevel::Elevated)
            .display_name("Gabriel")
            .id(0)
            .build();

        assert_eq!(account.id(), 0);
        assert_eq!(account.display_name(), "Gabriel");
        assert_eq!(account.access_level(), AccessLevel::Elevated);
        assert_eq!(account.email(), None);
        assert!(account.phones().is_empty());
        assert!(account.is_privileged());
    }

    #[test]
    fn test_optional_email() {
        let account = Account::builder()
            .access_level(AccessLevel::Elevated)
            .display_name("Gabriel")
            .id(0)
            .email("email@email.com")
            .build();

        assert_eq!(account.email(), Some("email@email.com"));
    }

    #[test]
    fn test_phones_keep_call_order() {
        let account = Account::builder()
            .access_level(AccessLevel::Elevated)
            .display_name("Gabriel")
            .id(0)
            .email("email@email.com")
            .phone(PhoneKind::Mobile, "99999-9999")
            .phone(PhoneKind::Work, "3333-3333")
            .build();

        assert_eq!(
            account.phones(),
            &[
                Phone::new(PhoneKind::Mobile, "99999-9999"),
                Phone::new(PhoneKind::Work, "3333-3333"),
            ]
        );
    }

    #[test]
    fn test_sealed_builder_builds_the_same_record() {
        let unsealed = Account::builder()
            .access_level(AccessLevel::Elevated)
            .display_name("Gabriel")
            .id(0)
            .build();

        let sealed = Account::builder()
            .id(0)
            .display_name("Gabriel")
            .access_level(AccessLevel::Elevated)
            .seal()
            .build();

        assert_eq!(sealed, unsealed);
    }

    #[test]
    fn test_required_setters_overwrite() {
        let account = Account::builder()
            .id(1)
            .display_name("draft")
            .access_level(AccessLevel::Standard)
            .id(2)
            .display_name("final")
            .access_level(AccessLevel::Administrative)
            .build();

        assert_eq!(account.id(), 2);
        assert_eq!(account.display_name(), "final");
        assert_eq!(account.access_level(), AccessLevel::Administrative);
    }

    #[test]
    fn test_email_replaced_not_accumulated() {
        let account = Account::builder()
            .id(1)
            .display_name("x")
            .access_level(AccessLevel::Standard)
            .email("old@email.com")
            .email("new@email.com")
            .build();

        assert_eq!(account.email(), Some("new@email.com"));
    }

    #[test]
    fn test_forked_prefix_builds_independent_records() {
        let prefix = Account::builder()
            .display_name("Gabriel")
            .access_level(AccessLevel::Standard);

        let first = prefix.clone().id(1).build();
        let second = prefix.id(2).email("email@email.com").build();

        assert_eq!(first.id(), 1);
        assert_eq!(first.email(), None);
        assert_eq!(second.id(), 2);
        assert_eq!(second.email(), Some("email@email.com"));
        assert_eq!(first.display_name(), second.display_name());
    }

    #[test]
    fn test_unset_markers_are_zero_sized() {
        assert_eq!(mem::size_of::<IdUnset>(), 0);
        assert_eq!(mem::size_of::<NameUnset>(), 0);
        assert_eq!(mem::size_of::<AccessUnset>(), 0);
        assert_eq!(mem::size_of::<Unsealed>(), 0);
        assert_eq!(mem::size_of::<Sealed>(), 0);
    }

    #[test]
    fn test_sealing_has_no_runtime_representation() {
        assert_eq!(
            mem::size_of::<AccountBuilder<IdSet, NameSet, AccessSet, Unsealed>>(),
            mem::size_of::<AccountBuilder<IdSet, NameSet, AccessSet, Sealed>>()
        );
    }
}
