//! Table-driven SDDL decoder.
//!
//! [`Decoder::decode`] runs the structural passes of the parsing crate, routes
//! each section to the owner/group resolver or to the ACL parser, and resolves
//! every code against its [`Tables`].

use parsing::{AceFields, AclBody, SectionTag, split_sections};
use tracing::debug;

use crate::codes::resolve_codes;
use crate::{AceEntry, PermissionSet, SddlError, Tables};

/// Decodes SDDL strings against borrowed lookup [`Tables`].
///
/// A decoder is plain shared data: copy it freely and use it from any thread.
///
/// # Examples
/// ```rust
/// # use sddl_decoder::Decoder;
/// let permissions = Decoder::new().decode("O:BAG:SYD:(A;;FA;;;WD)")?;
/// assert_eq!(permissions.owner(), Some("Built-in administrators"));
/// assert_eq!(permissions.dacl()[0].rights(), ["FILE_ALL_ACCESS"]);
/// # Ok::<(), sddl_decoder::SddlError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoder<'t> {
    tables: &'t Tables<'t>,
}

impl Decoder<'static> {
    /// A decoder over [`Tables::STANDARD`].
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self {
            tables: &Tables::STANDARD,
        }
    }
}

impl Default for Decoder<'static> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> Decoder<'t> {
    /// A decoder over caller supplied tables.
    #[must_use]
    #[inline]
    pub const fn with_tables(tables: &'t Tables<'t>) -> Self {
        Self { tables }
    }

    /// The tables this decoder resolves against.
    ///
    /// ```rust
    /// use sddl_decoder::{Decoder, Tables};
    ///
    /// assert_eq!(Decoder::new().tables(), &Tables::STANDARD);
    /// ```
    #[must_use]
    #[inline]
    pub const fn tables(&self) -> &'t Tables<'t> {
        self.tables
    }

    /// Decodes a full SDDL string.
    ///
    /// Unknown codes are kept in their raw form. Sections may appear in any
    /// order; a repeated marker only counts at its first occurrence.
    ///
    /// # Errors
    /// - [`SddlError::MalformedAce`] if an ACE has fewer than six fields.
    /// - [`SddlError::UnknownSection`] if a section letter is not `O`, `G`, `D` or `S`.
    ///
    /// No partial result is returned on error.
    #[inline]
    pub fn decode(&self, sddl: &str) -> Result<PermissionSet, SddlError> {
        let mut permissions = PermissionSet::default();
        for section in split_sections(sddl) {
            self.dispatch(&mut permissions, section.letter, section.body)?;
        }
        Ok(permissions)
    }

    /// Resolves a trustee token.
    ///
    /// Tokens longer than two bytes are literal SIDs and must match a
    /// well-known SID exactly; shorter tokens are SID aliases. Anything
    /// unknown is returned unchanged.
    ///
    /// # Examples
    /// ```rust
    /// # use sddl_decoder::Decoder;
    /// let decoder = Decoder::new();
    /// assert_eq!(decoder.resolve_sid("SY"), "Local system");
    /// assert_eq!(decoder.resolve_sid("S-1-5-18"), "Local System");
    /// assert_eq!(decoder.resolve_sid("S-1-5-18-1"), "S-1-5-18-1");
    /// ```
    #[must_use]
    #[inline]
    pub fn resolve_sid(&self, token: &str) -> String {
        if token.len() > 2 {
            self.tables.well_known_sid.resolve(token)
        } else {
            self.tables.sid_alias.resolve(token)
        }
    }

    pub(crate) fn dispatch(
        &self,
        permissions: &mut PermissionSet,
        letter: char,
        body: &str,
    ) -> Result<(), SddlError> {
        let tag = SectionTag::try_from(letter)
            .inspect_err(|err| debug!(%err, body, "rejecting section"))?;
        debug!(section = %tag, body, "decoding section");
        match tag {
            SectionTag::Owner => permissions.owner = Some(self.resolve_sid(body)),
            SectionTag::Group => permissions.primary = Some(self.resolve_sid(body)),
            SectionTag::Dacl => {
                (permissions.dacl_inheritance_flags, permissions.dacl) =
                    self.parse_acl_body(body)?;
            }
            SectionTag::Sacl => {
                (permissions.sacl_inheritance_flags, permissions.sacl) =
                    self.parse_acl_body(body)?;
            }
        }
        Ok(())
    }

    fn parse_acl_body(&self, body: &str) -> Result<(Vec<String>, Vec<AceEntry>), SddlError> {
        let acl = AclBody::split(body);
        let flags = resolve_codes(acl.flags, self.tables.inheritance_flags);
        let entries = acl
            .ace_bodies()
            .enumerate()
            .map(|(index, ace)| self.parse_ace(ace, index))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(flags = flags.len(), entries = entries.len(), "decoded ACL");
        Ok((flags, entries))
    }

    fn parse_ace(&self, body: &str, index: usize) -> Result<AceEntry, SddlError> {
        let fields = AceFields::parse(body, index)
            .inspect_err(|err| debug!(%err, ace = body, "rejecting ACE"))?;
        Ok(AceEntry {
            ace_type: self.tables.ace_type.resolve(fields.ace_type),
            ace_flags: resolve_codes(fields.ace_flags, self.tables.ace_flags),
            rights: resolve_codes(fields.rights, self.tables.rights),
            object_guid: fields.object_guid.to_owned(),
            inherit_object_guid: fields.inherit_object_guid.to_owned(),
            account_sid: self.resolve_sid(fields.account_sid),
        })
    }
}
