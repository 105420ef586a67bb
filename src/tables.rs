//! Lookup tables mapping SDDL short codes to display labels.
//!
//! All tables are `const` data: they are built at compile time, never mutated
//! and may be read from any number of threads.
//!
//! Source: https://learn.microsoft.com/windows/win32/secauthz/ace-strings

use crate::well_known;

/// An immutable mapping from a short code to its display label.
///
/// A missing key is not an error: [`LookupTable::resolve`] hands the code
/// back unchanged.
///
/// # Examples
/// ```rust
/// # use sddl_decoder::tables;
/// assert_eq!(tables::RIGHTS.get("FA"), Some("FILE_ALL_ACCESS"));
/// assert_eq!(tables::RIGHTS.resolve("ZZ"), "ZZ");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupTable<'a> {
    entries: &'a [(&'a str, &'a str)],
}

impl<'a> LookupTable<'a> {
    /// Wraps `(code, label)` pairs. The first entry wins on duplicate codes.
    #[must_use]
    #[inline]
    pub const fn new(entries: &'a [(&'a str, &'a str)]) -> Self {
        Self { entries }
    }

    /// Returns the label registered for `code`, if any.
    #[must_use]
    #[inline]
    pub fn get(&self, code: &str) -> Option<&'a str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == code)
            .map(|&(_, label)| label)
    }

    /// Returns `true` if `code` has a label.
    #[must_use]
    #[inline]
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Returns the label of `code`, or `code` itself when it is unknown.
    #[must_use]
    #[inline]
    pub fn resolve(&self, code: &str) -> String {
        self.get(code).unwrap_or(code).to_owned()
    }
}

/// The full set of tables a [`Decoder`](crate::Decoder) resolves against.
///
/// [`Tables::STANDARD`] holds the built-in codes. Any field can be swapped
/// for a custom [`LookupTable`]:
///
/// ```rust
/// # use sddl_decoder::{Decoder, LookupTable, Tables};
/// let tables = Tables {
///     sid_alias: LookupTable::new(&[("WD", "World")]),
///     ..Tables::STANDARD
/// };
/// let permissions = Decoder::with_tables(&tables).decode("O:WD").unwrap();
/// assert_eq!(permissions.owner(), Some("World"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tables<'a> {
    /// Access rights (`FA`, `GR`...).
    pub rights: LookupTable<'a>,
    /// ACL inheritance flags (`P`, `AI`, `AR`).
    pub inheritance_flags: LookupTable<'a>,
    /// ACE types (`A`, `D`, `OA`...).
    pub ace_type: LookupTable<'a>,
    /// ACE flags (`CI`, `OI`...).
    pub ace_flags: LookupTable<'a>,
    /// Two-letter SID aliases (`BA`, `WD`...).
    pub sid_alias: LookupTable<'a>,
    /// Literal SID strings (`S-1-5-18`...).
    pub well_known_sid: LookupTable<'a>,
}

impl Tables<'static> {
    /// Built-in tables.
    pub const STANDARD: Self = Self {
        rights: RIGHTS,
        inheritance_flags: INHERITANCE_FLAGS,
        ace_type: ACE_TYPE,
        ace_flags: ACE_FLAGS,
        sid_alias: well_known::SID_ALIAS,
        well_known_sid: well_known::WELL_KNOWN_SID,
    };
}

/// [`Tables::STANDARD`].
///
/// ```rust
/// use sddl_decoder::{Decoder, Tables};
///
/// let tables = Tables::default();
/// let permissions = Decoder::with_tables(&tables).decode("O:BA")?;
/// assert_eq!(permissions.owner(), Some("Built-in administrators"));
/// # Ok::<(), sddl_decoder::SddlError>(())
/// ```
impl Default for Tables<'static> {
    #[inline]
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Access rights.
pub const RIGHTS: LookupTable<'static> = LookupTable::new(&[
    // ---- Generic access rights ----
    ("GA", "GENERIC_ALL"),
    ("GR", "GENERIC_READ"),
    ("GW", "GENERIC_WRITE"),
    ("GX", "GENERIC_EXECUTE"),
    // ---- Standard access rights ----
    ("RC", "READ_CONTROL"),
    ("SD", "DELETE"),
    ("WD", "WRITE_DAC"),
    ("WO", "WRITE_OWNER"),
    // ---- Directory service object access rights ----
    ("RP", "ADS_RIGHT_DS_READ_PROP"),
    ("WP", "ADS_RIGHT_DS_WRITE_PROP"),
    ("CC", "ADS_RIGHT_DS_CREATE_CHILD"),
    ("DC", "ADS_RIGHT_DS_DELETE_CHILD"),
    ("LC", "ADS_RIGHT_ACTRL_DS_LIST"),
    ("SW", "ADS_RIGHT_DS_SELF"),
    ("LO", "ADS_RIGHT_DS_LIST_OBJECT"),
    ("DT", "ADS_RIGHT_DS_DELETE_TREE"),
    ("CR", "ADS_RIGHT_DS_CONTROL_ACCESS"),
    // ---- File access rights ----
    ("FA", "FILE_ALL_ACCESS"),
    ("FR", "FILE_GENERIC_READ"),
    ("FW", "FILE_GENERIC_WRITE"),
    ("FX", "FILE_GENERIC_EXECUTE"),
    // ---- Registry key access rights ----
    ("KA", "KEY_ALL_ACCESS"),
    ("KR", "KEY_READ"),
    ("KW", "KEY_WRITE"),
    ("KX", "KEY_EXECUTE"),
    // ---- Mandatory label rights ----
    ("NR", "SYSTEM_MANDATORY_LABEL_NO_READ_UP"),
    ("NW", "SYSTEM_MANDATORY_LABEL_NO_WRITE_UP"),
    ("NX", "SYSTEM_MANDATORY_LABEL_NO_EXECUTE"),
]);

/// ACL inheritance flags, found in front of the first ACE of a `D:` or `S:` section.
pub const INHERITANCE_FLAGS: LookupTable<'static> = LookupTable::new(&[
    ("P", "DDL_PROTECTED"),
    ("AI", "SDDL_AUTO_INHERITED"),
    ("AR", "SDDL_AUTO_INHERIT_REQ"),
]);

/// ACE types. Looked up on the whole field, never chunked.
pub const ACE_TYPE: LookupTable<'static> = LookupTable::new(&[
    ("A", "ACCESS ALLOWED"),
    ("D", "ACCESS DENIED"),
    ("OA", "OBJECT ACCESS ALLOWED"),
    ("OD", "OBJECT ACCESS DENIED"),
    ("AU", "SYSTEM AUDIT"),
    ("AL", "SYSTEM ALARM"),
    ("OU", "OBJECT SYSTEM AUDIT"),
    ("OL", "OBJECT SYSTEM ALARM"),
    ("ML", "MANDATORY LABEL"),
]);

/// ACE flags.
pub const ACE_FLAGS: LookupTable<'static> = LookupTable::new(&[
    ("CI", "CONTAINER INHERIT"),
    ("OI", "OBJECT INHERIT"),
    ("NP", "NO PROPAGATE"),
    ("IO", "INHERITANCE ONLY"),
    ("ID", "ACE IS INHERITED"),
    ("SA", "SUCCESSFUL ACCESS AUDIT"),
    ("FA", "FAILED ACCESS AUDIT"),
]);
