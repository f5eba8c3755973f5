//! Compile-time-checked construction of account records.
//!
//! This crate builds account records through a builder whose progress is
//! encoded in its type parameters: each required field has an "unset" and a
//! "set" marker type, and `build` only resolves once every required slot
//! reads "set". A builder can also be sealed, after which no setter or
//! appender exists on it. Both rules are enforced by the compiler, so an
//! incomplete or post-seal construction chain is a type error rather than a
//! runtime failure, and `build` has no error to return.
//!
//! ```
//! use provision_core::AccessLevel;
//! use provision_core::Account;
//! use provision_core::PhoneKind;
//!
//! let account = Account::builder()
//!     .access_level(AccessLevel::Elevated)
//!     .display_name("Gabriel")
//!     .id(0)
//!     .email("email@email.com")
//!     .phone(PhoneKind::Mobile, "99999-9999")
//!     .build();
//!
//! assert_eq!(account.display_name(), "Gabriel");
//! assert!(account.is_privileged());
//! ```

pub mod builders;
pub mod types;

pub use builders::AccessSet;
pub use builders::AccessState;
pub use builders::AccessUnset;
pub use builders::Account;
pub use builders::AccountBuilder;
pub use builders::IdSet;
pub use builders::IdState;
pub use builders::IdUnset;
pub use builders::NameSet;
pub use builders::NameState;
pub use builders::NameUnset;
pub use builders::SealState;
pub use builders::Sealed;
pub use builders::Unsealed;
pub use types::AccessLevel;
pub use types::Phone;
pub use types::PhoneKind;
pub use types::Result;
pub use types::ValidationError;
