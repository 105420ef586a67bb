//! # SDDL decoding for Rust
//!
//! Decodes Security Descriptor Definition Language strings (the textual form
//! Windows uses for an object's owner, primary group and access control
//! lists) into a readable [`PermissionSet`], without any Windows API.
//!
//! The crate provides:
//! - [`decode`]: one-call decoding against the built-in tables.
//! - [`Decoder`]: the same operation over any set of [`Tables`].
//! - [`PermissionSet`] and [`AceEntry`]: the decoded, read-only model.
//! - [`tables`] and [`well_known`]: the lookup tables for rights, flags, ACE
//!   types, SID aliases and literal well-known SIDs.
//! - (feature `serde`) `Serialize` for the model, with the JSON key names
//!   `owner`, `primary`, `dacl`, `daclInheritFlags`, `sacl`, `saclInheritFlags`.
//! - (feature `macro`) `sddl!`: compile-time checked SDDL literals.
//!
//! ## Overview
//! Decoding is a single pass in four layers: the string is cut into its
//! `O:`/`G:`/`D:`/`S:` sections, each section is routed by its letter, ACL
//! bodies are cut into an inheritance-flag prefix and ACEs, and each ACE is cut
//! into six fields whose codes are resolved against the tables.
//!
//! Unknown codes are never errors: they come back unchanged. Only a broken
//! structure fails, with [`SddlError`], and then no partial result is returned.
//!
//! ## Examples
//! ### Decode a descriptor
//! ```rust
//! use sddl_decoder::decode;
//!
//! let permissions = decode("O:BAG:SYD:PAI(A;CIOI;FA;;;SY)(A;;FR;;;WD)")?;
//! assert_eq!(permissions.owner(), Some("Built-in administrators"));
//! assert_eq!(permissions.primary(), Some("Local system"));
//! assert_eq!(
//!     permissions.dacl_inheritance_flags(),
//!     ["DDL_PROTECTED", "SDDL_AUTO_INHERITED"],
//! );
//!
//! let system = &permissions.dacl()[0];
//! assert_eq!(system.ace_type(), "ACCESS ALLOWED");
//! assert_eq!(system.ace_flags(), ["CONTAINER INHERIT", "OBJECT INHERIT"]);
//! assert_eq!(system.account_sid(), "Local system");
//! # Ok::<(), sddl_decoder::SddlError>(())
//! ```
//!
//! ### Handle malformed input
//! ```rust
//! use sddl_decoder::{decode, SddlError};
//!
//! assert_eq!(
//!     decode("D:(A;;RP)"),
//!     Err(SddlError::MalformedAce { index: 0, found: 3 }),
//! );
//! ```
//!
//! ## Limitations
//! Conditional and resource attribute ACEs, hexadecimal access masks and
//! domain-relative SIDs are not interpreted; their text is passed through.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

mod codes;
mod decoder;
mod permission_set;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod tables;
pub mod well_known;

pub use decoder::Decoder;
pub use permission_set::{AceEntry, PermissionSet};
pub use tables::{LookupTable, Tables};

/// Errors that abort decoding.
///
/// See [`Decoder::decode`] for when each variant is returned.
pub use parsing::SddlError;

/// Checks an SDDL string literal at compile time and expands to it.
///
/// ```rust
/// # #[cfg(feature = "macro")]
/// # {
/// const DEFAULT_ACL: &str = sddl_decoder::sddl!("O:BAG:SYD:(A;;FA;;;SY)");
/// assert!(sddl_decoder::decode(DEFAULT_ACL).is_ok());
/// # }
/// ```
#[cfg(feature = "macro")]
pub use sddl_macro::sddl;

/// Decodes `sddl` against [`Tables::STANDARD`].
///
/// # Errors
/// See [`Decoder::decode`].
#[inline]
pub fn decode(sddl: &str) -> Result<PermissionSet, SddlError> {
    Decoder::new().decode(sddl)
}
