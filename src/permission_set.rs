//! Decoded security descriptor model.
//!
//! Both types are produced by a [`Decoder`](crate::Decoder) and are read-only
//! for the caller: fields are reached through accessors.

/// One access control entry with every code resolved to its label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AceEntry {
    pub(crate) ace_type: String,
    pub(crate) ace_flags: Vec<String>,
    pub(crate) rights: Vec<String>,
    pub(crate) object_guid: String,
    pub(crate) inherit_object_guid: String,
    pub(crate) account_sid: String,
}

impl AceEntry {
    /// ACE type label, e.g. `ACCESS ALLOWED`.
    #[must_use]
    #[inline]
    pub fn ace_type(&self) -> &str {
        &self.ace_type
    }

    /// ACE flag labels, in field order.
    #[must_use]
    #[inline]
    pub fn ace_flags(&self) -> &[String] {
        &self.ace_flags
    }

    /// Access right labels, in field order.
    #[must_use]
    #[inline]
    pub fn rights(&self) -> &[String] {
        &self.rights
    }

    /// Raw object type GUID (empty when absent).
    #[must_use]
    #[inline]
    pub fn object_guid(&self) -> &str {
        &self.object_guid
    }

    /// Raw inherited object type GUID (empty when absent).
    #[must_use]
    #[inline]
    pub fn inherit_object_guid(&self) -> &str {
        &self.inherit_object_guid
    }

    /// Trustee label, or the raw SID when it is not a known one.
    #[must_use]
    #[inline]
    pub fn account_sid(&self) -> &str {
        &self.account_sid
    }
}

/// A decoded SDDL string.
///
/// Absent `O:`/`G:` sections leave [`owner`](Self::owner) and
/// [`primary`](Self::primary) at `None`; absent ACLs are empty. ACE order is
/// the evaluation order of the ACL and is kept as written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PermissionSet {
    pub(crate) owner: Option<String>,
    pub(crate) primary: Option<String>,
    pub(crate) dacl: Vec<AceEntry>,
    pub(crate) dacl_inheritance_flags: Vec<String>,
    pub(crate) sacl: Vec<AceEntry>,
    pub(crate) sacl_inheritance_flags: Vec<String>,
}

impl PermissionSet {
    /// Owner label (`O:` section).
    #[must_use]
    #[inline]
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// Primary group label (`G:` section).
    #[must_use]
    #[inline]
    pub fn primary(&self) -> Option<&str> {
        self.primary.as_deref()
    }

    /// Discretionary ACL entries (`D:` section).
    #[must_use]
    #[inline]
    pub fn dacl(&self) -> &[AceEntry] {
        &self.dacl
    }

    /// Inheritance flag labels of the DACL.
    #[must_use]
    #[inline]
    pub fn dacl_inheritance_flags(&self) -> &[String] {
        &self.dacl_inheritance_flags
    }

    /// System ACL entries (`S:` section).
    #[must_use]
    #[inline]
    pub fn sacl(&self) -> &[AceEntry] {
        &self.sacl
    }

    /// Inheritance flag labels of the SACL.
    #[must_use]
    #[inline]
    pub fn sacl_inheritance_flags(&self) -> &[String] {
        &self.sacl_inheritance_flags
    }
}
