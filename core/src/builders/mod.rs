//! Builder pattern for type-safe construction of account records.
//!
//! The builder tracks its own progress in its type parameters. Every
//! required field owns a pair of marker types: the "unset" marker carries
//! nothing, while the "set" marker wraps exactly that field's value. A
//! third, payload-free pair records whether the builder has been sealed
//! against further changes. An operation that would be invalid in the
//! current state simply does not exist on that type, so a bad construction
//! chain is a type error rather than a runtime failure.
//!
//! # Compile-time rejections
//!
//! The following chains demonstrate what the compiler refuses to accept.
//!
//! An incomplete builder has no `build` to call:
//!
//! ```compile_fail,E0599
//! use provision_core::Account;
//!
//! // ERROR: no method named `build` found; the id and access level
//! // were never supplied.
//! let account = Account::builder().display_name("Gabriel").build();
//! ```
//!
//! A sealed builder accepts no further mutation, complete or not:
//!
//! ```compile_fail,E0599
//! use provision_core::AccessLevel;
//! use provision_core::Account;
//!
//! let sealed = Account::builder()
//!     .id(0)
//!     .display_name("Gabriel")
//!     .access_level(AccessLevel::Standard)
//!     .seal();
//!
//! // ERROR: no setters or appenders exist for the sealed type.
//! let sealed = sealed.email("email@email.com");
//! ```
//!
//! `build` itself stays available on a sealed builder once every required
//! slot is set; sealing forbids mutation, not completion.

pub mod account_builder;

pub use account_builder::*;

use crate::types::AccessLevel;

/// Trait for the identifier slot markers
pub trait IdState {}

/// The identifier has not been supplied
#[derive(Debug, Clone, Copy)]
pub struct IdUnset;

/// The identifier slot, holding the supplied value
#[derive(Debug, Clone, Copy)]
pub struct IdSet(pub(crate) u64);

impl IdState for IdUnset {}
impl IdState for IdSet {}

/// Trait for the display-name slot markers
pub trait NameState {}

/// The display name has not been supplied
#[derive(Debug, Clone, Copy)]
pub struct NameUnset;

/// The display-name slot, holding the supplied value
#[derive(Debug, Clone)]
pub struct NameSet(pub(crate) String);

impl NameState for NameUnset {}
impl NameState for NameSet {}

/// Trait for the access-level slot markers
pub trait AccessState {}

/// The access level has not been supplied
#[derive(Debug, Clone, Copy)]
pub struct AccessUnset;

/// The access-level slot, holding the supplied value
#[derive(Debug, Clone, Copy)]
pub struct AccessSet(pub(crate) AccessLevel);

impl AccessState for AccessUnset {}
impl AccessState for AccessSet {}

/// Trait for the seal markers
///
/// Both states are zero-sized: the seal exists only in the builder's type.
pub trait SealState {}

/// The builder still accepts changes
#[derive(Debug, Clone, Copy)]
pub struct Unsealed;

/// The builder is locked; only `build` remains
#[derive(Debug, Clone, Copy)]
pub struct Sealed;

impl SealState for Unsealed {}
impl SealState for Sealed {}
