use thiserror::Error;

/// Errors that abort the decoding of an SDDL string.
///
/// Unknown codes are not errors; only a broken structure is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SddlError {
    /// An ACE body does not split into six `;`-separated fields.
    #[error("malformed ACE #{index}: expected 6 `;`-separated fields, found {found}")]
    MalformedAce {
        /// Zero-based position of the ACE inside its ACL.
        index: usize,
        /// Number of fields actually present.
        found: usize,
    },

    /// A section letter other than `O`, `G`, `D` or `S`.
    #[error("unknown SDDL section `{0}:`")]
    UnknownSection(char),
}
