//! Name normalization used to widen exact name comparisons.
//!
//! This is a fixed character substitution, not Unicode folding: only the
//! letters in [`TRANSLITERATIONS`] change, everything else passes through.

const HONORIFIC: &str = "Dr.";

/// Accented Latin letters and ligatures with their ASCII spelling.
pub const TRANSLITERATIONS: &[(char, &str)] = &[
    ('ä', "ae"),
    ('ö', "oe"),
    ('ü', "ue"),
    ('ß', "ss"),
    ('é', "e"),
    ('è', "e"),
    ('ë', "e"),
    ('á', "a"),
    ('å', "a"),
    ('æ', "ae"),
    ('œ', "oe"),
    ('ø', "o"),
    ('ĳ', "ij"),
    ('ÿ', "y"),
    ('ý', "y"),
    ('ž', "z"),
    ('š', "s"),
    ('č', "c"),
    ('ç', "c"),
    ('ñ', "n"),
    ('ń', "n"),
    ('ł', "l"),
    ('Ä', "Ae"),
    ('Ö', "Oe"),
    ('Ü', "Ue"),
    ('ẞ', "SS"),
    ('É', "E"),
    ('È', "E"),
    ('Ë', "E"),
    ('Á', "A"),
    ('Å', "A"),
    ('Æ', "Ae"),
    ('Œ', "Oe"),
    ('Ø', "O"),
    ('Ĳ', "Ij"),
    ('Ÿ', "Y"),
    ('Ý', "Y"),
    ('Ž', "Z"),
    ('Š', "S"),
    ('Č', "C"),
    ('Ç', "C"),
    ('Ñ', "N"),
    ('Ń', "N"),
    ('Ł', "L"),
];

fn transliterate(c: char) -> Option<&'static str> {
    TRANSLITERATIONS
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
}

/// Reduces a display name to its ASCII-comparable form.
///
/// A single leading "Dr." is removed, then surrounding spaces. Letters from
/// the transliteration table are replaced and hyphens become spaces.
pub fn normalize(name: &str) -> String {
    normalize_with(name, |_, ascii, _| ascii.into())
}

/// Like [`normalize`], but an uppercase letter that expands to two characters
/// is written fully uppercase unless a lowercase letter follows, so "Ä." gives
/// "AE." while "Äsa" still gives "Aesa". Used to accept all-caps spellings of
/// initials and surnames.
pub fn normalize_caps(name: &str) -> String {
    normalize_with(name, |c, ascii, next| {
        let next_is_lower = next.is_some_and(char::is_lowercase);
        if c.is_uppercase() && ascii.len() > 1 && !next_is_lower {
            ascii.to_ascii_uppercase().into()
        } else {
            ascii.into()
        }
    })
}

fn normalize_with<F>(name: &str, spell: F) -> String
where
    F: Fn(char, &'static str, Option<char>) -> std::borrow::Cow<'static, str>,
{
    let name = name.strip_prefix(HONORIFIC).unwrap_or(name);
    let name = name.trim_matches(' ');

    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        match transliterate(c) {
            Some(ascii) => out.push_str(&spell(c, ascii, chars.peek().copied())),
            None => out.push(c),
        }
    }
    out.replace('-', " ")
}
