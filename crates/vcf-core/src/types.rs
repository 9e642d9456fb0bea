//! Contact record model.
//!
//! A [`Contact`] is one `BEGIN:VCARD` … `END:VCARD` block. It carries both
//! the structured property list (post-unfolding) and the literal block text
//! as it appeared in the input. The raw text is what operations emit for
//! contacts they did not modify, so untouched records pass through
//! byte-for-byte; reconstruction from properties happens only when a
//! contact is rebuilt (delete-contacts with `--keep`).

/// A single logical property line, post-unfolding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Full text before the first `:`, including any parameters
    /// (e.g. `TEL;TYPE=CELL`).
    pub key: String,
    /// Decoded value with continuation lines already concatenated.
    pub value: String,
}

impl Property {
    /// The bare property name: the key up to the first `;`, upper-cased.
    /// `TEL;TYPE=CELL` → `TEL`.
    #[must_use]
    pub fn name(&self) -> String {
        let bare = self.key.split(';').next().unwrap_or("");
        bare.trim().to_ascii_uppercase()
    }

    /// True if the bare name equals `wanted` case-insensitively.
    #[must_use]
    pub fn is(&self, wanted: &str) -> bool {
        self.name() == wanted.to_ascii_uppercase()
    }
}

/// One vCard block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Properties in original file order, duplicates allowed
    /// (e.g. several `TEL` lines). `BEGIN`/`END` markers are structural
    /// and not recorded here.
    pub properties: Vec<Property>,
    /// Literal text from `BEGIN:VCARD` through `END:VCARD` inclusive,
    /// line endings normalized to LF, continuation lines left folded.
    pub raw_text: String,
}

impl Contact {
    /// Build a contact from an already-kept property list, re-serializing
    /// the block text. Used for contacts rebuilt by delete-with-keep;
    /// parsed contacts keep their original `raw_text` instead.
    #[must_use]
    pub fn from_properties(properties: Vec<Property>) -> Self {
        let mut raw = String::from("BEGIN:VCARD\n");
        for prop in &properties {
            raw.push_str(&prop.key);
            raw.push(':');
            raw.push_str(&prop.value);
            raw.push('\n');
        }
        raw.push_str("END:VCARD");
        Contact {
            properties,
            raw_text: raw,
        }
    }

    /// The display name: `FN` if present and non-empty, else a name
    /// rendered from the structured `N` value (`family;given;…` becomes
    /// "given family"), else the empty string.
    #[must_use]
    pub fn name(&self) -> String {
        for prop in &self.properties {
            if prop.is("FN") {
                let fn_value = prop.value.trim();
                if !fn_value.is_empty() {
                    return fn_value.to_string();
                }
            }
        }
        for prop in &self.properties {
            if prop.is("N") {
                let parts: Vec<&str> = prop.value.split(';').map(str::trim).collect();
                let family = parts.first().copied().unwrap_or("");
                let given = parts.get(1).copied().unwrap_or("");
                return [given, family]
                    .iter()
                    .filter(|p| !p.is_empty())
                    .copied()
                    .collect::<Vec<_>>()
                    .join(" ");
            }
        }
        String::new()
    }

    /// All `TEL` values in property order. Empty values are skipped.
    #[must_use]
    pub fn numbers(&self) -> Vec<String> {
        self.properties
            .iter()
            .filter(|p| p.is("TEL"))
            .map(|p| p.value.trim().to_string())
            .filter(|v| !v.is_empty())
            .collect()
    }

    /// The union of every `CATEGORIES` (or legacy `CATEGORY`) value,
    /// split on `,` and `;`, trimmed, empty pieces discarded. Case is
    /// preserved for display; comparisons happen lower-cased in the
    /// matcher. Duplicates across properties are kept here — callers that
    /// need set semantics deduplicate after lower-casing.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut cats = Vec::new();
        for prop in &self.properties {
            if prop.is("CATEGORIES") || prop.is("CATEGORY") {
                for piece in prop.value.split([',', ';']) {
                    let piece = piece.trim();
                    if !piece.is_empty() {
                        cats.push(piece.to_string());
                    }
                }
            }
        }
        cats
    }

    /// Serialize this contact back to vCard text. For parsed contacts this
    /// is the stored raw block, so untouched records round-trip exactly.
    #[must_use]
    pub fn to_vcf(&self) -> &str {
        &self.raw_text
    }
}
