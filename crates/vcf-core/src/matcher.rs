//! Selection predicates over contacts.
//!
//! All comparisons lower-case both sides; no locale-aware collation.
//! Callers that evaluate many contacts against the same criteria should
//! lower-case the criteria once up front (see [`lower_set`]) so each
//! contact costs one set intersection rather than repeated rescanning.

use std::collections::HashSet;

use crate::types::Contact;

/// Lower-case a list of criteria into a set for O(1) membership tests.
/// Empty entries are dropped.
#[must_use]
pub fn lower_set<S: AsRef<str>>(values: &[S]) -> HashSet<String> {
    values
        .iter()
        .map(|v| v.as_ref().trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .collect()
}

/// Lower-cased category set of a contact, deduplicated.
#[must_use]
pub fn category_set(contact: &Contact) -> HashSet<String> {
    contact
        .categories()
        .iter()
        .map(|c| c.to_lowercase())
        .collect()
}

/// True iff the contact holds at least one of the wanted categories.
#[must_use]
pub fn has_any_category(contact: &Contact, wanted: &HashSet<String>) -> bool {
    let cats = category_set(contact);
    wanted.iter().any(|w| cats.contains(w))
}

/// True iff the contact holds none of the excluded categories.
#[must_use]
pub fn has_no_category(contact: &Contact, excluded: &HashSet<String>) -> bool {
    !has_any_category(contact, excluded)
}

/// True iff the contact's display name equals any entry exactly
/// (case-insensitively).
#[must_use]
pub fn name_matches_exact(contact: &Contact, names: &HashSet<String>) -> bool {
    names.contains(&contact.name().to_lowercase())
}

/// True iff the contact's display name contains any fragment as a
/// substring (case-insensitively).
#[must_use]
pub fn name_matches_substring(contact: &Contact, fragments: &HashSet<String>) -> bool {
    let name = contact.name().to_lowercase();
    fragments.iter().any(|f| name.contains(f))
}
