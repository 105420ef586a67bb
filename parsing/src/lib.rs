//! Structural parsing of SDDL (Security Descriptor Definition Language) strings.
//!
//! This crate only cuts text: it splits a descriptor into its `O:`/`G:`/`D:`/`S:`
//! sections, an ACL body into its inheritance-flag prefix and ACE bodies, and an
//! ACE body into its six fields. Codes are never interpreted here; that is the
//! job of `sddl-decoder`, which should be used instead of this crate.
#![cfg_attr(not(feature = "std"), no_std)]

mod ace;
mod acl;
mod error;
mod section;

pub use ace::{ACE_FIELD_COUNT, AceFields};
pub use acl::{AceBodies, AclBody};
pub use error::SddlError;
pub use section::{Section, SectionTag, Sections, split_sections};

/// Runs every structural pass over `sddl` without interpreting any code.
///
/// # Errors
/// - [`SddlError::UnknownSection`] if a section letter is not `O`, `G`, `D` or `S`.
/// - [`SddlError::MalformedAce`] if an ACE has fewer than six fields.
#[inline]
pub fn validate(sddl: &str) -> Result<(), SddlError> {
    for section in split_sections(sddl) {
        match section.tag()? {
            SectionTag::Owner | SectionTag::Group => {}
            SectionTag::Dacl | SectionTag::Sacl => {
                for (index, ace) in AclBody::split(section.body).ace_bodies().enumerate() {
                    AceFields::parse(ace, index)?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn validate_accepts_full_descriptor() {
        assert_eq!(
            validate("O:BAG:SYD:PAI(A;CIOI;FA;;;SY)(A;;FR;;;WD)S:AI(AU;SAFA;FA;;;WD)"),
            Ok(()),
            "a well formed descriptor must validate"
        );
    }

    #[test]
    fn validate_reports_ace_position() {
        assert_eq!(
            validate("D:(A;;FA;;;WD)(A;;FR)"),
            Err(SddlError::MalformedAce { index: 1, found: 3 }),
            "the second ACE is the broken one"
        );
    }

    #[test]
    fn validate_ignores_owner_contents() {
        assert_eq!(validate("O:(;;"), Ok(()), "owner bodies are never split");
    }
}
