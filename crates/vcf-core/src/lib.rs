//! # vcf-core
//!
//! Parser and record-level query/edit operations for vCard (`.vcf`)
//! contact files.
//!
//! The crate models a `.vcf` file as an ordered sequence of [`Contact`]
//! records, each keeping both its unfolded properties and its literal
//! block text so that untouched records pass through byte-for-byte. On
//! top of that model it provides four operations: category diff, filtered
//! listing with optional field projection, category counting, and
//! delete-by-name with optional field truncation.
//!
//! ## Quick start
//!
//! ```rust
//! use vcf_core::{parse, category_diff};
//!
//! let input = "BEGIN:VCARD\nFN:Alice\nCATEGORIES:Friends\nEND:VCARD\n\
//!              BEGIN:VCARD\nFN:Bob\nCATEGORIES:Work,Friends\nEND:VCARD\n";
//! let outcome = parse(input);
//! assert_eq!(outcome.contacts.len(), 2);
//! assert!(outcome.errors.is_empty());
//!
//! // Friends who are not Work contacts: just Alice.
//! let diff = category_diff(&outcome.contacts, "Friends", "Work");
//! assert_eq!(diff.len(), 1);
//! assert_eq!(diff[0].name(), "Alice");
//! ```
//!
//! ## Modules
//!
//! - [`parser`] — raw text → [`Contact`] sequence plus localized errors
//! - [`types`] — the [`Contact`]/[`Property`] model and field accessors
//! - [`matcher`] — category and name predicates (case-insensitive)
//! - [`ops`] — the four operations over parsed contacts
//! - [`error`] — error types

pub mod error;
pub mod matcher;
pub mod ops;
pub mod parser;
pub mod types;

pub use error::VcfError;
pub use ops::{category_counts, category_diff, delete_contacts, get_contacts, ContactQuery, Projection};
pub use parser::{parse, parse_all, ParseOutcome};
pub use types::{Contact, Property};
