//! Rewriting of IUPAC-condensed glycan sequences between the compact
//! notation used on the wire (shorthand `3S` / `4Me` suffixes, locanted
//! sialic acids like `Neu5Ac`) and the decorated notation the embedded sugar
//! viewer expects (explicit `[HSO3(u?-3)]` / `[Me(u?-4)]` annotations,
//! un-locanted `NeuAc`).
//!
//! Both directions are pure string rewrites: no validation is performed, and
//! sub-patterns that aren't recognized are passed through untouched. For
//! well-formed compact sequences carrying at most one shorthand suffix per
//! residue the two functions are inverses:
//! `to_compact_notation(to_internal_notation(s)) == s`.

mod host;
mod rules;

use tracing::{debug, trace, warn};

pub use host::{NormalizedSequence, SequenceHost};
use rules::{INBOUND_RULES, OUTBOUND_RULES, RESIDUAL_SULFO_SHORTHAND, Rule};

// Every rule application strictly removes one shorthand occurrence, so this
// guard should never be hit — it's here so that an unforeseen self-feeding
// rewrite degrades into a logged, truncated result instead of a hung caller
const MAX_REWRITE_PASSES: usize = 1024;

/// Rewrites a compact sequence into the decorated form the viewer consumes.
///
/// Rules are tried in priority order, only the leftmost match of the winning
/// rule is rewritten, and the whole rule list is then re-evaluated from the
/// top — later rules may only become applicable once earlier ones have
/// simplified the string.
pub fn to_internal_notation(compact: impl AsRef<str>) -> String {
    let compact = compact.as_ref();
    let mut sequence = compact.to_owned();

    for _ in 0..MAX_REWRITE_PASSES {
        let Some(rule) = INBOUND_RULES.iter().find(|rule| rule.matches(&sequence)) else {
            if sequence == compact {
                trace!(sequence = compact, "no shorthand found; passing sequence through unchanged");
            }
            return sequence;
        };
        sequence = rule.rewrite_first(&sequence);
    }

    warn!(
        %sequence,
        "inbound rewriting was still making progress after {MAX_REWRITE_PASSES} passes; returning as-is"
    );
    sequence
}

/// Rewrites a decorated sequence back into compact notation.
///
/// Unlike the inbound direction, each rule here runs to its own fixpoint
/// before the next is considered.
pub fn to_compact_notation(decorated: impl AsRef<str>) -> String {
    let decorated = decorated.as_ref();
    let mut sequence = decorated.to_owned();

    for rule in &OUTBOUND_RULES {
        sequence = run_to_fixpoint(rule, sequence);
    }

    // Log-only audit: a surviving `HSO3` (or, conversely, one that vanished
    // from the input) flags a suspected incomplete round-trip. The returned
    // value is never corrected — downstream code expects a best-effort
    // string, not an error.
    if RESIDUAL_SULFO_SHORTHAND.is_match(&sequence)
        || (decorated.contains("HSO3") && !sequence.contains("HSO3"))
    {
        debug!(
            original = decorated,
            transformed = %sequence,
            "sulfation audit: rewrite pair logged for round-trip investigation"
        );
    }

    sequence
}

fn run_to_fixpoint(rule: &Rule, mut sequence: String) -> String {
    for _ in 0..MAX_REWRITE_PASSES {
        let rewritten = rule.rewrite_all(&sequence);
        if rewritten == sequence {
            return sequence;
        }
        sequence = rewritten;
    }

    warn!(
        rule = rule.name,
        %sequence,
        "outbound rule was still making progress after {MAX_REWRITE_PASSES} passes; returning as-is"
    );
    sequence
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn sialic_locants_collapse_and_restore() {
        assert_eq!(to_internal_notation("Neu5Ac"), "NeuAc");
        assert_eq!(to_internal_notation("Neu5Gc"), "NeuGc");
        assert_eq!(to_compact_notation("NeuAc"), "Neu5Ac");
        assert_eq!(to_compact_notation("NeuGc"), "Neu5Gc");
    }

    #[test]
    fn unanchored_sulfation_gets_the_bare_form() {
        assert_eq!(to_internal_notation("Gal3S"), "HSO3(u?-3)Gal");
        assert_eq!(to_compact_notation("HSO3(u?-3)Gal"), "Gal3S");
    }

    #[test]
    fn bracket_anchored_sulfation_gets_the_enclosed_form() {
        assert_eq!(
            to_internal_notation("Gal(b1-4)Glc4S"),
            "Gal(b1-4)[HSO3(u?-4)]Glc"
        );
        assert_eq!(
            to_compact_notation("Gal(b1-4)[HSO3(u?-4)]Glc"),
            "Gal(b1-4)Glc4S"
        );
    }

    #[test]
    fn methylation_is_always_enclosed() {
        assert_eq!(to_internal_notation("Man2Me"), "[Me(u?-2)]Man");
        assert_eq!(to_compact_notation("[Me(u?-2)]Man"), "Man2Me");
    }

    #[test]
    fn shorthand_free_sequences_are_untouched() {
        for sequence in [
            "",
            "Gal",
            "Man(a1-3)[Man(a1-6)]Man(b1-4)GlcNAc(b1-4)GlcNAc",
            "Fuc(a1-2)Gal(b1-4)Glc",
        ] {
            assert_eq!(to_internal_notation(sequence), sequence);
            assert_eq!(to_compact_notation(sequence), sequence);
        }
    }

    #[test]
    fn every_shorthand_occurrence_is_rewritten() {
        // Two independent sulfation sites — the loop must not stop after the
        // first one
        assert_eq!(
            to_internal_notation("Gal6S(b1-4)GlcNAc(b1-2)Man3S"),
            "HSO3(u?-6)Gal(b1-4)GlcNAc(b1-2)[HSO3(u?-3)]Man"
        );
        assert_eq!(
            to_compact_notation("HSO3(u?-6)Gal(b1-4)GlcNAc(b1-2)[HSO3(u?-3)]Man"),
            "Gal6S(b1-4)GlcNAc(b1-2)Man3S"
        );
    }

    #[test]
    fn mixed_shorthand_sequences_round_trip() {
        let compact = "Neu5Ac(a2-3)Gal(b1-4)GlcNAc6S(b1-2)Man2Me";
        let internal = to_internal_notation(compact);
        assert_eq!(
            internal,
            "NeuAc(a2-3)Gal(b1-4)[HSO3(u?-6)]GlcNAc(b1-2)[Me(u?-2)]Man"
        );
        assert_eq!(to_compact_notation(internal), compact);
    }

    #[test]
    fn malformed_input_still_returns_a_string() {
        // A locant outside {2,3,4,6} leaves the annotation stranded, and the
        // stranded `HSO3` can re-match nothing — the audit logs, the caller
        // still gets a best-effort value
        let stranded = "HSO3(u?-9)Gal4S";
        assert_eq!(to_compact_notation(stranded), stranded);
    }

    #[test]
    fn sulfated_sialic_acids_round_trip() {
        let compact = "Neu5Ac4S(a2-6)Gal";
        let internal = to_internal_notation(compact);
        assert_eq!(internal, "HSO3(u?-4)NeuAc(a2-6)Gal");
        assert_eq!(to_compact_notation(internal), compact);
    }

    // Strategies building syntactically well-formed compact sequences with at
    // most one shorthand suffix per residue (stacked suffixes are a known
    // round-trip gap in the rule set)
    fn residue() -> impl Strategy<Value = String> {
        let base = prop_oneof![
            Just("Glc"),
            Just("Gal"),
            Just("Man"),
            Just("Fuc"),
            Just("Xyl"),
            Just("GlcNAc"),
            Just("GalNAc"),
            Just("GlcA"),
        ];
        let suffix = prop_oneof![
            Just(String::new()),
            (prop_oneof![Just('2'), Just('3'), Just('4'), Just('6')], prop_oneof![Just("S"), Just("Me")])
                .prop_map(|(locant, kind)| format!("{locant}{kind}")),
        ];
        let sialic = prop_oneof![Just("Neu5Ac".to_owned()), Just("Neu5Gc".to_owned())];
        prop_oneof![
            3 => (base, suffix).prop_map(|(base, suffix)| format!("{base}{suffix}")),
            1 => sialic,
        ]
    }

    fn linkage() -> impl Strategy<Value = String> {
        (prop_oneof![Just('a'), Just('b')], 1..=6u8, 1..=6u8)
            .prop_map(|(anomer, from, to)| format!("({anomer}{from}-{to})"))
    }

    fn compact_sequence() -> impl Strategy<Value = String> {
        (residue(), prop::collection::vec((linkage(), residue()), 0..4)).prop_map(
            |(first, rest)| {
                let mut sequence = first;
                for (linkage, residue) in rest {
                    sequence.push_str(&linkage);
                    sequence.push_str(&residue);
                }
                sequence
            },
        )
    }

    proptest! {
        #[test]
        fn compact_sequences_round_trip(compact in compact_sequence()) {
            prop_assert_eq!(to_compact_notation(to_internal_notation(&compact)), compact);
        }

        #[test]
        fn rewriting_never_panics(sequence in r"[\[\]()A-Za-z0-9?-]{0,64}") {
            let _ = to_internal_notation(&sequence);
            let _ = to_compact_notation(&sequence);
        }
    }
}
