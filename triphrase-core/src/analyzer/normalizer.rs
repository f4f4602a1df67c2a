//! Token case normalization.
//!
//! Every token the tokenizer matches is lower-cased before it reaches the
//! phrase window, so `"Hello"`, `"HELLO"` and `"hello"` all count as the same
//! word. Tokens are short and overwhelmingly ASCII, so the ASCII prefix is
//! copied byte by byte and only the remainder goes through
//! [`char::to_lowercase`], which may expand a character (e.g. `İ`).

/// Lower-cases `token` into `out`, clearing it first.
///
/// Reuses the buffer's capacity if sufficient.
#[inline]
pub fn lowercase_into(token: &str, out: &mut String) {
    out.clear();
    out.reserve(token.len());

    let bytes = token.as_bytes();
    let ascii_len = bytes.iter().position(|b| !b.is_ascii()).unwrap_or(bytes.len());

    // The ASCII prefix ends on a char boundary, so both halves are valid str.
    let (ascii, rest) = token.split_at(ascii_len);
    out.extend(ascii.bytes().map(|b| char::from(b.to_ascii_lowercase())));

    for ch in rest.chars() {
        if ch.is_ascii() {
            out.push(ch.to_ascii_lowercase());
        } else {
            out.extend(ch.to_lowercase());
        }
    }
}

/// Lower-cases `token` into a new String.
#[inline]
pub fn lowercase(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    lowercase_into(token, &mut out);
    out
}
