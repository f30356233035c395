//! Unit tests for [`completion_client::mask_token`].
//!
//! Ensures API keys are masked for safe logging: first 7 chars + `***` + last 4 chars.
//! Keys of length ≤ 11 are fully masked as `***` to avoid leaking any segment.

use completion_client::mask_token;

/// **Test: Short or empty tokens are fully masked.**
///
/// **Expected:** Any token of length ≤ 11 returns `"***"` (no prefix/suffix shown).
#[test]
fn mask_token_short_returns_all_star() {
    assert_eq!(mask_token(""), "***");
    assert_eq!(mask_token("a"), "***");
    assert_eq!(mask_token("sk-12345"), "***");
    assert_eq!(mask_token("sk-ant-1234"), "***");
}

/// **Test: Long tokens show first 7 and last 4 characters.**
///
/// **Expected:** For length > 11, result is `head(7) + "***" + tail(4)`.
#[test]
fn mask_token_long_shows_head_and_tail() {
    assert_eq!(mask_token("sk-proj-abcdefghijklmnop"), "sk-proj***mnop");
    assert_eq!(mask_token("sk-ant-api03-xyzw"), "sk-ant-***xyzw");
}

/// **Test: Non-ASCII keys are masked on character boundaries.**
///
/// **Expected:** No panic; head and tail counted in characters.
#[test]
fn mask_token_multibyte_does_not_split_chars() {
    assert_eq!(mask_token("ключ-ключ-ключ"), "ключ-кл***ключ");
}
