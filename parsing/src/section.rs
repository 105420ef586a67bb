use core::fmt::{self, Display};
use core::iter;

use arrayvec::ArrayVec;

use crate::SddlError;

/// The four top-level sections of a security descriptor string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionTag {
    /// `O:` owner SID.
    Owner,
    /// `G:` primary group SID.
    Group,
    /// `D:` discretionary ACL.
    Dacl,
    /// `S:` system (audit) ACL.
    Sacl,
}

impl SectionTag {
    /// Every tag, in canonical SDDL order.
    pub const ALL: [Self; 4] = [Self::Owner, Self::Group, Self::Dacl, Self::Sacl];

    /// The letter introducing this section.
    #[must_use]
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            Self::Owner => 'O',
            Self::Group => 'G',
            Self::Dacl => 'D',
            Self::Sacl => 'S',
        }
    }

    const fn marker(self) -> &'static str {
        match self {
            Self::Owner => "O:",
            Self::Group => "G:",
            Self::Dacl => "D:",
            Self::Sacl => "S:",
        }
    }
}

impl TryFrom<char> for SectionTag {
    type Error = SddlError;

    #[inline]
    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.letter() == value)
            .ok_or(SddlError::UnknownSection(value))
    }
}

impl Display for SectionTag {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One top-level section: its letter and everything after `letter:` up to the
/// next section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    /// The letter in front of the `:`.
    pub letter: char,
    /// Raw section text.
    pub body: &'a str,
}

impl Section<'_> {
    /// Resolves [`Section::letter`] to a [`SectionTag`].
    ///
    /// # Errors
    /// [`SddlError::UnknownSection`] if the letter is not a known section.
    #[inline]
    pub fn tag(&self) -> Result<SectionTag, SddlError> {
        SectionTag::try_from(self.letter)
    }
}

/// At most one span per [`SectionTag`].
pub type Sections<'a> = ArrayVec<Section<'a>, 4>;

/// Slices `sddl` into its top-level sections, ordered by position.
///
/// Each marker is located by its first occurrence. Markers are then sorted by
/// index, so sections written out of canonical order still get the right
/// bodies. Text in front of the first marker is ignored.
///
/// # Examples
/// ```rust
/// # use sddl_decoder_parsing::{split_sections, Section};
/// let sections = split_sections("O:BAD:(A;;FA;;;WD)");
/// assert_eq!(sections.as_slice(), [
///     Section { letter: 'O', body: "BA" },
///     Section { letter: 'D', body: "(A;;FA;;;WD)" },
/// ]);
/// ```
#[must_use]
#[inline]
pub fn split_sections(sddl: &str) -> Sections<'_> {
    let mut starts: ArrayVec<usize, 4> = SectionTag::ALL
        .iter()
        .filter_map(|tag| sddl.find(tag.marker()))
        .collect();
    starts.sort_unstable();

    let ends = starts.iter().skip(1).copied().chain(iter::once(sddl.len()));
    starts
        .iter()
        .zip(ends)
        .filter_map(|(&start, end)| sddl.get(start..end))
        .filter_map(|span| span.split_once(':'))
        .filter_map(|(letter, body)| letter.chars().next().map(|letter| Section { letter, body }))
        .collect()
}
