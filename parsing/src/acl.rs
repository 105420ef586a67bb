use core::str::Split;

/// An ACL body cut into its inheritance-flag prefix and its ACE sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AclBody<'a> {
    /// Everything before the first `(`, e.g. `PAI`.
    pub flags: &'a str,
    /// The parenthesized ACEs, starting at the first `(`.
    pub aces: &'a str,
}

impl<'a> AclBody<'a> {
    /// Splits `body` at its first `(`.
    ///
    /// A body without any `(` is all prefix (e.g. `D:P`, a protected empty ACL).
    #[must_use]
    #[inline]
    pub fn split(body: &'a str) -> Self {
        match body.find('(') {
            Some(open) => {
                let (flags, aces) = body.split_at(open);
                Self { flags, aces }
            }
            None => Self {
                flags: body,
                aces: "",
            },
        }
    }

    /// Iterates the ACE bodies, left to right, without their parentheses.
    #[must_use]
    #[inline]
    pub fn ace_bodies(&self) -> AceBodies<'a> {
        AceBodies {
            inner: self.aces.split('('),
        }
    }
}

/// Iterator over the ACE bodies of an ACL.
///
/// Empty segments between `(` are skipped and exactly one trailing `)` is
/// removed from each body.
#[derive(Debug, Clone)]
pub struct AceBodies<'a> {
    inner: Split<'a, char>,
}

impl<'a> Iterator for AceBodies<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .find(|segment| !segment.is_empty())
            .map(|segment| segment.strip_suffix(')').unwrap_or(segment))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn prefix_and_aces() {
        let acl = AclBody::split("PAI(A;;FA;;;WD)(D;;GA;;;BG)");
        assert_eq!(acl.flags, "PAI", "prefix before the first paren");
        assert!(
            acl.ace_bodies().eq(["A;;FA;;;WD", "D;;GA;;;BG"]),
            "bodies in input order"
        );
    }

    #[test]
    fn no_prefix() {
        let acl = AclBody::split("(A;;FA;;;WD)");
        assert_eq!(acl.flags, "", "no prefix");
        assert!(acl.ace_bodies().eq(["A;;FA;;;WD"]), "single body");
    }

    #[test]
    fn prefix_only() {
        let acl = AclBody::split("P");
        assert_eq!(acl.flags, "P", "the whole body is flags");
        assert_eq!(acl.ace_bodies().count(), 0, "no ACE");
    }

    #[test]
    fn one_closing_paren_is_stripped() {
        let acl = AclBody::split("(A;;FA;;;WD))");
        assert!(
            acl.ace_bodies().eq(["A;;FA;;;WD)"]),
            "only one trailing paren goes"
        );
    }

    #[test]
    fn empty_parens_yield_an_empty_body() {
        let acl = AclBody::split("()");
        assert!(acl.ace_bodies().eq([""]), "`()` is an empty ACE body");
    }

    #[test]
    fn missing_closing_paren() {
        let acl = AclBody::split("(A;;FA;;;WD");
        assert!(acl.ace_bodies().eq(["A;;FA;;;WD"]), "an unclosed ACE still counts");
    }
}
