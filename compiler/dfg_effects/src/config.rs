//! Classifier configuration.
//!
//! Everything the classifier reads besides the node itself and its graph's
//! plan lives in one immutable [`GcConfig`] value that callers pass in. There
//! is no global options state: two plans compiled concurrently with different
//! configurations classify independently.

use crate::ClassificationGap;

/// What to do when a node falls outside the classification.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum GapPolicy {
    /// Panic. Used by tests and assertion-enabled builds so that an
    /// unclassified opcode is caught before release.
    Abort,
    /// Log a warning and report the node as GC-capable.
    #[default]
    Conservative,
}

impl GapPolicy {
    /// Turn a gap into a classification result under this policy.
    pub fn resolve(self, gap: &ClassificationGap) -> bool {
        match self {
            GapPolicy::Abort => panic!("{gap}"),
            GapPolicy::Conservative => {
                tracing::warn!(
                    op = %gap.op(),
                    reason = %gap.reason(),
                    "unclassified node, assuming it may GC"
                );
                true
            }
        }
    }
}

/// Immutable inputs to GC-effect classification.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GcConfig {
    /// Traps are delivered by polling (`CheckTraps` nodes) rather than by
    /// signals. `CheckTraps` is only emitted in that mode or for unlinked
    /// plans.
    pub use_polling_traps: bool,
    /// The value representation has unboxed Int52 (64-bit targets).
    pub int52_representation: bool,
    /// Small BigInts are stored inline as `BigInt32` rather than on the heap.
    pub bigint32_representation: bool,
    /// Handling of classification gaps.
    pub gap_policy: GapPolicy,
}

impl GcConfig {
    /// The default configuration with gaps turned into panics.
    pub fn strict() -> Self {
        Self {
            gap_policy: GapPolicy::Abort,
            ..Self::default()
        }
    }

    /// Copy of this configuration with a different gap policy.
    #[must_use]
    pub fn with_gap_policy(self, gap_policy: GapPolicy) -> Self {
        Self { gap_policy, ..self }
    }
}

impl Default for GcConfig {
    fn default() -> Self {
        Self {
            use_polling_traps: false,
            int52_representation: true,
            bigint32_representation: true,
            gap_policy: GapPolicy::Conservative,
        }
    }
}
