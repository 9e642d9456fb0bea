//! The four record-level operations: diff, filtered listing, counting,
//! and deletion.
//!
//! Every operation is a pure function over an already-parsed
//! `&[Contact]` slice: no I/O, no shared state, input order preserved in
//! the output. Operations never mutate contacts in place — delete with a
//! keep list produces freshly built [`Contact`]s and leaves the parsed
//! sequence untouched.

use std::collections::{HashMap, HashSet};

use crate::matcher::{
    category_set, has_any_category, lower_set, name_matches_exact, name_matches_substring,
};
use crate::types::{Contact, Property};

/// Contacts in category `category_a` but not in `category_b` (A-not-B).
///
/// The diff is asymmetric: a contact in both categories appears in
/// neither direction's result, and callers wanting B-not-A swap the
/// arguments. Order follows the input sequence.
#[must_use]
pub fn category_diff<'a>(
    contacts: &'a [Contact],
    category_a: &str,
    category_b: &str,
) -> Vec<&'a Contact> {
    let a = lower_set(&[category_a]);
    let b = lower_set(&[category_b]);
    contacts
        .iter()
        .filter(|c| has_any_category(c, &a) && !has_any_category(c, &b))
        .collect()
}

/// Selection criteria for [`get_contacts`].
///
/// `has` is a list of OR-groups that are ANDed together: a contact
/// qualifies when every group contributes at least one of its categories.
/// `not` groups are a flat exclusion — any listed category present on the
/// contact excludes it. `searchname` fragments are ORed substring matches
/// against the display name. Empty criteria match everything.
#[derive(Debug, Clone, Default)]
pub struct ContactQuery {
    pub has: Vec<Vec<String>>,
    pub not: Vec<Vec<String>>,
    pub searchname: Vec<String>,
}

/// Field selection for [`get_contacts`] output. With no flag set, the
/// full raw vCard block is emitted per match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Projection {
    pub name: bool,
    pub number: bool,
    pub category: bool,
}

impl Projection {
    /// True when no field flag is set, meaning full-block output.
    #[must_use]
    pub fn is_full(self) -> bool {
        !self.name && !self.number && !self.category
    }
}

/// Filtered, optionally field-projected contact listing.
///
/// Returns one output line per matching contact — the full raw block, or
/// a tab-joined projection of the selected fields (multiple numbers are
/// `;`-joined, categories `,`-joined) — followed by a closing
/// `Total contacts: N` summary line. The summary is emitted even when
/// nothing matched.
#[must_use]
pub fn get_contacts(contacts: &[Contact], query: &ContactQuery, projection: Projection) -> Vec<String> {
    let has_groups: Vec<HashSet<String>> = query
        .has
        .iter()
        .map(|group| lower_set(group))
        .filter(|set| !set.is_empty())
        .collect();
    let excluded: HashSet<String> = query
        .not
        .iter()
        .flat_map(|group| lower_set(group))
        .collect();
    let fragments = lower_set(&query.searchname);

    let mut lines = Vec::new();
    let mut total = 0usize;
    for contact in contacts {
        let cats = category_set(contact);
        if !has_groups.iter().all(|group| !group.is_disjoint(&cats)) {
            continue;
        }
        if !excluded.is_disjoint(&cats) {
            continue;
        }
        if !fragments.is_empty() && !name_matches_substring(contact, &fragments) {
            continue;
        }

        total += 1;
        if projection.is_full() {
            lines.push(contact.to_vcf().to_string());
        } else {
            let mut columns = Vec::new();
            if projection.name {
                columns.push(contact.name());
            }
            if projection.number {
                columns.push(contact.numbers().join(";"));
            }
            if projection.category {
                columns.push(contact.categories().join(","));
            }
            lines.push(columns.join("\t"));
        }
    }

    lines.push(format!("Total contacts: {total}"));
    lines
}

/// Histogram of category occurrences across all contacts.
///
/// Each contact contributes at most once per distinct category it holds
/// (`CATEGORIES:Work;Work` counts 1 for `Work`). Entries are ordered by
/// descending count, ties in first-seen order, and display a category's
/// case as first encountered in the input.
#[must_use]
pub fn category_counts(contacts: &[Contact]) -> Vec<(String, usize)> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut entries: Vec<(String, usize)> = Vec::new();

    for contact in contacts {
        let mut seen: HashSet<String> = HashSet::new();
        for category in contact.categories() {
            let lower = category.to_lowercase();
            if !seen.insert(lower.clone()) {
                continue;
            }
            match index.get(&lower) {
                Some(&slot) => entries[slot].1 += 1,
                None => {
                    index.insert(lower, entries.len());
                    entries.push((category, 1));
                }
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries
}

/// Remove or truncate contacts whose display name exactly matches one of
/// `names` (case-insensitively).
///
/// - A contact with no matching name passes through unchanged, raw text
///   intact.
/// - With an empty `keep` list, matching contacts are omitted entirely.
/// - With keep keys (bare property names such as `TEL`), a matching
///   contact is replaced by a rebuilt block containing the property that
///   supplied its name (`FN`, or `N` when no usable `FN` exists) plus
///   every property whose bare key matches a keep entry, in original
///   property order.
#[must_use]
pub fn delete_contacts(contacts: &[Contact], names: &[String], keep: &[String]) -> Vec<Contact> {
    let targets = lower_set(names);
    let keep_keys: HashSet<String> = keep
        .iter()
        .map(|k| k.trim().to_ascii_uppercase())
        .filter(|k| !k.is_empty())
        .collect();

    let mut out = Vec::with_capacity(contacts.len());
    for contact in contacts {
        if targets.is_empty() || !name_matches_exact(contact, &targets) {
            out.push(contact.clone());
            continue;
        }
        if keep_keys.is_empty() {
            continue;
        }
        out.push(truncate_contact(contact, &keep_keys));
    }
    out
}

/// Rebuild a contact keeping only its name property and the given keys.
fn truncate_contact(contact: &Contact, keep_keys: &HashSet<String>) -> Contact {
    let has_fn = contact
        .properties
        .iter()
        .any(|p| p.is("FN") && !p.value.trim().is_empty());
    let name_key = if has_fn { "FN" } else { "N" };

    let kept: Vec<Property> = contact
        .properties
        .iter()
        .filter(|p| {
            let bare = p.name();
            bare == name_key || keep_keys.contains(&bare)
        })
        .cloned()
        .collect();

    Contact::from_properties(kept)
}
