use tracing::trace;

use crate::LookupTable;

/// Splits a concatenated flag or rights field (`CIOI`, `PAI`, `FRFW`) into codes.
///
/// At each step the next two characters are taken when they form a key of
/// `table`. A single character is taken only when it is a key and is followed
/// by the end of the field or by a two-character key. Anything else goes out
/// as an unknown two-character code. A lone trailing character that is not a
/// key is dropped.
pub(crate) struct CodeChunks<'s, 't> {
    rest: &'s str,
    table: LookupTable<'t>,
}

impl<'s, 't> CodeChunks<'s, 't> {
    pub(crate) const fn new(field: &'s str, table: LookupTable<'t>) -> Self {
        Self { rest: field, table }
    }

    /// `true` at the end of the field or in front of a two-character key.
    fn at_boundary(&self, rest: &str) -> bool {
        match rest.char_indices().nth(1) {
            Some((at, c)) => self.table.contains(rest.split_at(at + c.len_utf8()).0),
            None => rest.is_empty(),
        }
    }
}

impl<'s> Iterator for CodeChunks<'s, '_> {
    type Item = &'s str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest;
        let mut ends = rest.char_indices().map(|(at, c)| at + c.len_utf8());
        let one = ends.next()?;
        let (head, tail) = rest.split_at(one);
        let take = match ends.next() {
            Some(two) if self.table.contains(rest.split_at(two).0) => two,
            _ if self.table.contains(head) && self.at_boundary(tail) => one,
            Some(two) => two,
            None => {
                trace!(dropped = rest, "discarding trailing character");
                self.rest = "";
                return None;
            }
        };
        let (code, rest) = rest.split_at(take);
        self.rest = rest;
        Some(code)
    }
}

/// Tokenizes `field` and resolves every code against `table`, keeping order.
pub(crate) fn resolve_codes(field: &str, table: LookupTable<'_>) -> Vec<String> {
    CodeChunks::new(field, table)
        .map(|code| {
            let label = table.resolve(code);
            trace!(code, %label, "resolved code");
            label
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tables::{ACE_FLAGS, INHERITANCE_FLAGS, RIGHTS};

    fn chunks<'s>(field: &'s str, table: LookupTable<'_>) -> Vec<&'s str> {
        CodeChunks::new(field, table).collect()
    }

    #[test]
    fn two_letter_chunks() {
        assert_eq!(chunks("CIOI", ACE_FLAGS), ["CI", "OI"], "two flags");
        assert_eq!(chunks("", RIGHTS), Vec::<&str>::new(), "empty field");
    }

    #[test]
    fn one_letter_key_is_recognized() {
        assert_eq!(chunks("PAI", INHERITANCE_FLAGS), ["P", "AI"], "protected + auto inherited");
        assert_eq!(chunks("AIP", INHERITANCE_FLAGS), ["AI", "P"], "order kept");
        assert_eq!(chunks("P", INHERITANCE_FLAGS), ["P"], "lone one letter key");
        assert_eq!(chunks("PARAI", INHERITANCE_FLAGS), ["P", "AR", "AI"], "three flags");
    }

    #[test]
    fn unknown_pair_starting_with_one_letter_key() {
        assert_eq!(chunks("PX", INHERITANCE_FLAGS), ["PX"], "not protected");
        assert_eq!(chunks("PZAI", INHERITANCE_FLAGS), ["PZ", "AI"], "sibling survives");
        assert_eq!(chunks("PAPA", INHERITANCE_FLAGS), ["PA", "PA"], "no stray AP");
        assert_eq!(chunks("AIPX", INHERITANCE_FLAGS), ["AI", "PX"], "after a key");
        assert_eq!(chunks("PPAI", INHERITANCE_FLAGS), ["PP", "AI"], "doubled letter");
    }

    #[test]
    fn odd_trailing_character_is_dropped() {
        assert_eq!(chunks("FAX", RIGHTS), ["FA"], "X is discarded");
        assert_eq!(chunks("Z", RIGHTS), Vec::<&str>::new(), "nothing but a fragment");
    }

    #[test]
    fn unknown_codes_are_kept_raw() {
        assert_eq!(chunks("QQFA", RIGHTS), ["QQ", "FA"], "unknown pair kept");
        assert_eq!(
            chunks("0x1F01FF", RIGHTS),
            ["0x", "1F", "01", "FF"],
            "hex masks are chunked like anything else"
        );
    }

    #[test]
    fn multibyte_characters_are_not_split() {
        assert_eq!(chunks("éaFA", RIGHTS), ["éa", "FA"], "chunks follow characters");
    }

    #[test]
    fn resolve_keeps_unknown() {
        assert_eq!(
            resolve_codes("FRQQ", RIGHTS),
            ["FILE_GENERIC_READ", "QQ"],
            "known and unknown side by side"
        );
    }
}
