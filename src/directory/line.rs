use std::sync::LazyLock;

use regex::Regex;

const DN_PREFIX: &str = "DN: ";
/// Field keys start after the two-space indent of a record block.
const KEY_COLUMN: usize = 2;

const DISPLAY_NAME_KEY: &str = "displayName:";
const FORWARD_MAIL_KEY: &str = "mailForwardAddress:";
const EMAIL_KEY: &str = "e-mail:";
const GECOS_KEY: &str = "gecos:";

static UID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^uid=([^,]+),").expect("uid pattern is valid"));

/// A classified line of a directory dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryLine<'a> {
    NewRecord(&'a str),
    MalformedNewRecord,
    DisplayName(&'a str),
    Gecos(&'a str),
    ForwardMail(&'a str),
    Email(&'a str),
    Unknown,
}

/// Classifies one line (without its line terminator).
///
/// Keys are recognized by column position only; the value is whatever
/// follows the key's colon and one separator character.
pub fn classify_line(line: &str) -> DirectoryLine<'_> {
    if let Some(dn) = line.strip_prefix(DN_PREFIX) {
        return match UID_RE.captures(dn).and_then(|caps| caps.get(1)) {
            Some(uid) => DirectoryLine::NewRecord(uid.as_str()),
            None => DirectoryLine::MalformedNewRecord,
        };
    }

    if let Some(value) = field_value(line, DISPLAY_NAME_KEY) {
        DirectoryLine::DisplayName(value)
    } else if let Some(value) = field_value(line, FORWARD_MAIL_KEY) {
        DirectoryLine::ForwardMail(value)
    } else if let Some(value) = field_value(line, EMAIL_KEY) {
        DirectoryLine::Email(value)
    } else if let Some(value) = field_value(line, GECOS_KEY) {
        DirectoryLine::Gecos(value)
    } else {
        DirectoryLine::Unknown
    }
}

fn field_value<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let (start, _) = line.char_indices().nth(KEY_COLUMN)?;
    let after_key = line[start..].strip_prefix(key)?;
    let mut rest = after_key.chars();
    rest.next();
    Some(rest.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dn_with_leading_uid_starts_record() {
        assert_eq!(
            classify_line("DN: uid=jdoe,cn=users,dc=example,dc=org"),
            DirectoryLine::NewRecord("jdoe")
        );
    }

    #[test]
    fn dn_without_uid_is_malformed() {
        assert_eq!(
            classify_line("DN: cn=admin,dc=example,dc=org"),
            DirectoryLine::MalformedNewRecord
        );
    }

    #[test]
    fn dn_with_empty_uid_is_malformed() {
        assert_eq!(classify_line("DN: uid=,dc=org"), DirectoryLine::MalformedNewRecord);
    }

    #[test]
    fn dn_uid_needs_trailing_comma() {
        assert_eq!(classify_line("DN: uid=jdoe"), DirectoryLine::MalformedNewRecord);
    }

    #[test]
    fn indented_fields_are_classified() {
        assert_eq!(
            classify_line("  displayName: Jane Doe"),
            DirectoryLine::DisplayName("Jane Doe")
        );
        assert_eq!(classify_line("  gecos: Jane Doe"), DirectoryLine::Gecos("Jane Doe"));
        assert_eq!(
            classify_line("  mailForwardAddress: jane@home.example"),
            DirectoryLine::ForwardMail("jane@home.example")
        );
        assert_eq!(
            classify_line("  e-mail: jane@work.example"),
            DirectoryLine::Email("jane@work.example")
        );
    }

    #[test]
    fn value_is_taken_verbatim_after_separator() {
        assert_eq!(
            classify_line("  displayName:  Padded "),
            DirectoryLine::DisplayName(" Padded ")
        );
        assert_eq!(classify_line("  gecos:"), DirectoryLine::Gecos(""));
    }

    #[test]
    fn unindented_or_unknown_keys_are_ignored() {
        assert_eq!(classify_line("displayName: Jane"), DirectoryLine::Unknown);
        assert_eq!(classify_line("  mailPrimaryAddress: j@x"), DirectoryLine::Unknown);
        assert_eq!(classify_line(""), DirectoryLine::Unknown);
    }

    #[test]
    fn value_may_contain_multibyte_characters() {
        assert_eq!(
            classify_line("  displayName: Jürgen Ä"),
            DirectoryLine::DisplayName("Jürgen Ä")
        );
    }
}
