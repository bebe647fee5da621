use crate::{to_compact_notation, to_internal_notation};

/// Read/write access to the sequence string of a sugar model — the one
/// capability this crate needs from the embedded viewer/selector components
pub trait SequenceHost {
    /// Returns the currently held sequence, if one is set
    fn sequence(&self) -> Option<String>;

    /// Replaces the currently held sequence
    fn set_sequence(&mut self, sequence: &str);
}

impl<H: SequenceHost + ?Sized> SequenceHost for &mut H {
    fn sequence(&self) -> Option<String> {
        (**self).sequence()
    }

    fn set_sequence(&mut self, sequence: &str) {
        (**self).set_sequence(sequence);
    }
}

impl<H: SequenceHost + ?Sized> SequenceHost for Box<H> {
    fn sequence(&self) -> Option<String> {
        (**self).sequence()
    }

    fn set_sequence(&mut self, sequence: &str) {
        (**self).set_sequence(sequence);
    }
}

/// A transparent adapter around any [`SequenceHost`]: every write is passed
/// through [`to_internal_notation`] before reaching the host, and every read
/// back through [`to_compact_notation`]. Nothing is cached — each access
/// recomputes the rewrite — and an absent sequence reads back as absent.
///
/// Wrap each concrete sugar model exactly once: stacking two of these would
/// rewrite twice in each direction.
pub struct NormalizedSequence<H> {
    host: H,
}

impl<H: SequenceHost> NormalizedSequence<H> {
    pub const fn new(host: H) -> Self {
        Self { host }
    }

    /// The wrapped host, still holding decorated-notation sequences
    pub const fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_inner(self) -> H {
        self.host
    }
}

impl<H: SequenceHost> SequenceHost for NormalizedSequence<H> {
    fn sequence(&self) -> Option<String> {
        self.host
            .sequence()
            .map(|decorated| to_compact_notation(decorated))
    }

    fn set_sequence(&mut self, sequence: &str) {
        self.host.set_sequence(&to_internal_notation(sequence));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Stand-in for the viewer's sugar model, which stores sequences in
    /// decorated notation
    #[derive(Default)]
    struct ViewerModel {
        sequence: Option<String>,
    }

    impl SequenceHost for ViewerModel {
        fn sequence(&self) -> Option<String> {
            self.sequence.clone()
        }

        fn set_sequence(&mut self, sequence: &str) {
            self.sequence = Some(sequence.to_owned());
        }
    }

    #[test]
    fn writes_are_decorated_and_reads_are_compacted() {
        let mut model = NormalizedSequence::new(ViewerModel::default());
        model.set_sequence("Gal(b1-4)Glc4S");

        // The host holds the decorated form, but reads come back compact
        assert_eq!(
            model.host().sequence().as_deref(),
            Some("Gal(b1-4)[HSO3(u?-4)]Glc")
        );
        assert_eq!(model.sequence().as_deref(), Some("Gal(b1-4)Glc4S"));
    }

    #[test]
    fn absent_sequences_pass_through() {
        let model = NormalizedSequence::new(ViewerModel::default());
        assert_eq!(model.sequence(), None);
    }

    #[test]
    fn reads_recompute_instead_of_caching() {
        let mut model = NormalizedSequence::new(ViewerModel::default());
        model.set_sequence("Neu5Ac");
        assert_eq!(model.sequence().as_deref(), Some("Neu5Ac"));

        // A viewer-side edit must be visible on the very next read
        model.host_mut().set_sequence("[Me(u?-2)]Man");
        assert_eq!(model.sequence().as_deref(), Some("Man2Me"));
    }

    #[test]
    fn viewer_side_edits_are_visible_on_the_next_read() {
        let mut inner = ViewerModel::default();
        inner.set_sequence("NeuAc");

        let mut wrapped = NormalizedSequence::new(&mut inner);
        assert_eq!(wrapped.sequence().as_deref(), Some("Neu5Ac"));

        // Mutate through the wrapper, then check the freshly rewritten value
        wrapped.set_sequence("Man2Me");
        assert_eq!(wrapped.sequence().as_deref(), Some("Man2Me"));
        assert_eq!(inner.sequence.as_deref(), Some("[Me(u?-2)]Man"));
    }
}
