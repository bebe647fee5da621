use std::sync::LazyLock;

use regex::Regex;

/// A single matcher/rewriter pair. The `replacement` string is a
/// `Regex::replace` template, so `${n}` refers back to the pattern's capture
/// groups.
pub(crate) struct Rule {
    pub(crate) name: &'static str,
    pattern: &'static LazyLock<Regex>,
    replacement: &'static str,
}

impl Rule {
    pub(crate) fn matches(&self, sequence: &str) -> bool {
        self.pattern.is_match(sequence)
    }

    /// Rewrites only the leftmost match, leaving the rest of the sequence
    /// untouched
    pub(crate) fn rewrite_first(&self, sequence: &str) -> String {
        self.pattern.replace(sequence, self.replacement).into_owned()
    }

    /// Rewrites every non-overlapping match in a single pass
    pub(crate) fn rewrite_all(&self, sequence: &str) -> String {
        self.pattern
            .replace_all(sequence, self.replacement)
            .into_owned()
    }
}

// Compact → Internal ==================================================================================================

// The `5` locant of sialic acids (`Neu5Ac` / `Neu5Gc`) is dropped internally
static SIALIC_LOCANT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"5([AG]c)").unwrap());

// A closing bracket, then a bracket-free residue run, then a `<locant>S`
// sulfation suffix — the run picks up an explicit `[HSO3(u?-<locant>)]`
// annotation just after the bracket
static ANCHORED_SULFATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([)\]])([^\[\]()]*)([2346])S").unwrap());

// As above, but with no bracket in front of the run (the non-reducing end of
// the sequence) — the annotation is prepended without enclosing brackets
static FREE_SULFATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^\[\]()]*)([2346])S").unwrap());

// A bracket-free run with a `<locant>Me` methylation suffix
static METHYLATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^\[\]()]*)([2346])Me").unwrap());

// NOTE: The order here is load-bearing! Sulfation suffixes just after a
// closing bracket must get the enclosed `[HSO3(…)]` form, so the anchored
// rule needs a chance to match before the free one. Only then is it safe to
// look for methylation suffixes.
pub(crate) static INBOUND_RULES: [Rule; 4] = [
    Rule {
        name: "sialic-locant-collapse",
        pattern: &SIALIC_LOCANT,
        replacement: "${1}",
    },
    Rule {
        name: "anchored-sulfation",
        pattern: &ANCHORED_SULFATION,
        replacement: "${1}[HSO3(u?-${3})]${2}",
    },
    Rule {
        name: "free-sulfation",
        pattern: &FREE_SULFATION,
        replacement: "HSO3(u?-${2})${1}",
    },
    Rule {
        name: "methylation",
        pattern: &METHYLATION,
        replacement: "[Me(u?-${2})]${1}",
    },
];

// Internal → Compact ==================================================================================================

// `Neu` straight into `Ac` / `Gc` — the pattern can't match once the `5` is
// restored, so repeated application terminates on its own
static MISSING_SIALIC_LOCANT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Neu([AG]c)").unwrap());

// An `HSO3(u?-<locant>)` annotation (brackets optional) followed by the
// residue run it modifies
static SULFATION_ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[?HSO3\(u\?-([2346])\)\]?([A-Za-z0-9]+)").unwrap());

// The symmetric `Me(u?-<locant>)` annotation
static METHYLATION_ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[?Me\(u\?-([2346])\)\]?([A-Za-z0-9]+)").unwrap());

pub(crate) static OUTBOUND_RULES: [Rule; 3] = [
    Rule {
        name: "sialic-locant-restore",
        pattern: &MISSING_SIALIC_LOCANT,
        replacement: "Neu5${1}",
    },
    Rule {
        name: "sulfation-unbracketing",
        pattern: &SULFATION_ANNOTATION,
        replacement: "${2}${1}S",
    },
    Rule {
        name: "methylation-unbracketing",
        pattern: &METHYLATION_ANNOTATION,
        replacement: "${2}${1}Me",
    },
];

// A `<locant>S` suffix surviving the outbound rewrite — used only by the
// log-only audit in `to_compact_notation`
pub(crate) static RESIDUAL_SULFO_SHORTHAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[2346]S").unwrap());
