use arrayvec::ArrayVec;

use crate::SddlError;

/// Number of `;`-separated fields in an ACE body.
pub const ACE_FIELD_COUNT: usize = 6;

/// The raw fields of one ACE:
/// `ace_type;ace_flags;rights;object_guid;inherit_object_guid;account_sid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AceFields<'a> {
    /// `A`, `D`, `OA`, `AU`...
    pub ace_type: &'a str,
    /// Concatenated two-letter flags, e.g. `CIOI`.
    pub ace_flags: &'a str,
    /// Concatenated two-letter rights, e.g. `FRFW`.
    pub rights: &'a str,
    /// Object type GUID, usually empty.
    pub object_guid: &'a str,
    /// Inherited object type GUID, usually empty.
    pub inherit_object_guid: &'a str,
    /// Trustee: a SID alias or a literal SID.
    pub account_sid: &'a str,
}

impl<'a> AceFields<'a> {
    /// Splits an ACE body (parentheses already removed) into its fields.
    ///
    /// Content after the sixth field is ignored. `index` is the position of
    /// the ACE inside its ACL and is only used for error reporting.
    ///
    /// # Errors
    /// [`SddlError::MalformedAce`] if fewer than [`ACE_FIELD_COUNT`] fields are present.
    ///
    /// # Examples
    /// ```rust
    /// # use sddl_decoder_parsing::{AceFields, SddlError};
    /// let fields = AceFields::parse("A;CI;FA;;;WD", 0).unwrap();
    /// assert_eq!(fields.ace_flags, "CI");
    /// assert_eq!(
    ///     AceFields::parse("A;;RP", 2),
    ///     Err(SddlError::MalformedAce { index: 2, found: 3 }),
    /// );
    /// ```
    #[inline]
    pub fn parse(body: &'a str, index: usize) -> Result<Self, SddlError> {
        let fields: ArrayVec<&'a str, ACE_FIELD_COUNT> =
            body.split(';').take(ACE_FIELD_COUNT).collect();
        match fields.into_inner() {
            Ok([ace_type, ace_flags, rights, object_guid, inherit_object_guid, account_sid]) => {
                Ok(Self {
                    ace_type,
                    ace_flags,
                    rights,
                    object_guid,
                    inherit_object_guid,
                    account_sid,
                })
            }
            Err(fields) => Err(SddlError::MalformedAce {
                index,
                found: fields.len(),
            }),
        }
    }
}
