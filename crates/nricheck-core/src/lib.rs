//! # nricheck-core — Foundational Types for the NRICHECK Stack
//!
//! This crate defines the answer model shared by every other crate in the
//! workspace: the questionnaire record, the closed taxonomies it is built
//! from (asset kinds, income kinds, immigration status, filing status, US
//! state), bucketed amount bands, and the four-valued compliance flags.
//! Every other crate depends on `nricheck-core`; it depends on nothing
//! internal.
//!
//! ## Key Design Principles
//!
//! 1. **Closed enums for every answer vocabulary.** `AssetKind`,
//!    `IncomeKind`, `UsStatus`, `FilingStatus`, `UsState`, `AmountBand`,
//!    `TriState` — all closed enums with `as_str()`/`FromStr` pairs. No bare
//!    strings for answer values; an unrecognized wire value is rejected at
//!    the boundary, never inside a rule.
//!
//! 2. **`TriState` models the questionnaire honestly.** Every yes/no
//!    question is one of exactly four values — `Yes`, `No`, `NotSure`, or
//!    `Unanswered` (serialized `""`). Unanswered means "not yet collected"
//!    and is treated identically to non-applicability by every consumer.
//!
//! 3. **Ordered collections.** Asset and income memberships are `BTreeSet`,
//!    amount mappings are `BTreeMap`, so iteration order — and therefore
//!    serialized output — is deterministic for identical answers.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `nricheck-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement `Serialize`/`Deserialize`.

pub mod answers;
pub mod error;
pub mod holdings;
pub mod states;
pub mod status;

// Re-export primary types for ergonomic imports.
pub use answers::{ComplianceFlags, QuestionnaireAnswers, TriState};
pub use error::CoreError;
pub use holdings::{AmountBand, AssetKind, IncomeKind};
pub use states::UsState;
pub use status::{FilingStatus, UsStatus};
