//! vCard record parser — raw text into an ordered sequence of [`Contact`]s.
//!
//! The format is loosely specified and line-oriented, so the parser is
//! deliberately lenient:
//!
//! - `BEGIN:VCARD` / `END:VCARD` markers are matched case-insensitively
//!   and blocks never nest.
//! - A line starting with a single space or tab continues the previous
//!   property's value (RFC 6350 line folding). Exactly one leading
//!   whitespace character is stripped; the remainder is appended verbatim.
//! - Errors are local: a property line with no `:`, a stray `END:VCARD`,
//!   or a block left open at end-of-input each produce a [`VcfError`] and
//!   parsing continues with the next well-formed block.
//!
//! Each contact keeps its literal block text (`raw_text`) alongside the
//! unfolded properties, so operations can emit untouched records without
//! reconstructing them.

use crate::error::VcfError;
use crate::types::{Contact, Property};

/// Result of parsing one or more vCard sources: the contacts that parsed
/// cleanly plus every localized error encountered along the way.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    /// Well-formed blocks in input order.
    pub contacts: Vec<Contact>,
    /// Localized errors, in the order they were detected.
    pub errors: Vec<VcfError>,
}

/// In-progress block state while scanning between BEGIN and END markers.
struct OpenBlock {
    start_line: usize,
    raw_lines: Vec<String>,
    properties: Vec<Property>,
}

/// Parse a single vCard source into contacts and errors.
///
/// Line endings are normalized (CRLF/CR → LF) before scanning, so the
/// captured `raw_text` is byte-faithful to the normalized input from
/// `BEGIN:VCARD` through `END:VCARD` inclusive. Content outside any block
/// is ignored, except for a stray `END:VCARD`, which is an error.
#[must_use]
pub fn parse(input: &str) -> ParseOutcome {
    let normalized = input.replace("\r\n", "\n").replace('\r', "\n");

    let mut outcome = ParseOutcome::default();
    let mut open: Option<OpenBlock> = None;

    for (idx, line) in normalized.lines().enumerate() {
        let lineno = idx + 1;
        let trimmed = line.trim();

        if trimmed.eq_ignore_ascii_case("BEGIN:VCARD") {
            if let Some(stale) = open.take() {
                outcome.errors.push(VcfError::parse(
                    stale.start_line,
                    "BEGIN:VCARD with no matching END:VCARD",
                ));
            }
            open = Some(OpenBlock {
                start_line: lineno,
                raw_lines: vec![line.to_string()],
                properties: Vec::new(),
            });
            continue;
        }

        if trimmed.eq_ignore_ascii_case("END:VCARD") {
            match open.take() {
                Some(mut block) => {
                    block.raw_lines.push(line.to_string());
                    outcome.contacts.push(Contact {
                        properties: block.properties,
                        raw_text: block.raw_lines.join("\n"),
                    });
                }
                None => {
                    outcome.errors.push(VcfError::parse(
                        lineno,
                        "END:VCARD with no matching BEGIN:VCARD",
                    ));
                }
            }
            continue;
        }

        let Some(block) = open.as_mut() else {
            // Stray content between blocks carries no record; skip it.
            continue;
        };
        block.raw_lines.push(line.to_string());

        if line.starts_with([' ', '\t']) {
            // Continuation: strip exactly one whitespace character and
            // append the rest verbatim, no re-trimming.
            let continuation = &line[1..];
            match block.properties.last_mut() {
                Some(prev) => prev.value.push_str(continuation),
                None => outcome.errors.push(VcfError::parse(
                    lineno,
                    "continuation line with no preceding property",
                )),
            }
            continue;
        }

        match line.split_once(':') {
            Some((key, value)) => block.properties.push(Property {
                key: key.to_string(),
                value: value.to_string(),
            }),
            None => outcome.errors.push(VcfError::parse(
                lineno,
                format!("malformed property line (no ':'): {trimmed}"),
            )),
        }
    }

    if let Some(stale) = open {
        outcome.errors.push(VcfError::parse(
            stale.start_line,
            "BEGIN:VCARD with no matching END:VCARD before end of input",
        ));
    }

    outcome
}

/// Parse several sources independently and concatenate their contact
/// sequences in source order. Error line numbers stay relative to the
/// source they came from; this tool has no per-file provenance
/// requirement beyond that.
#[must_use]
pub fn parse_all<'a, I>(sources: I) -> ParseOutcome
where
    I: IntoIterator<Item = &'a str>,
{
    let mut outcome = ParseOutcome::default();
    for source in sources {
        let mut one = parse(source);
        outcome.contacts.append(&mut one.contacts);
        outcome.errors.append(&mut one.errors);
    }
    outcome
}
