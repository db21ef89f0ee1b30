/// Bullet prefixed to every rendered entry.
pub const POINTER: &str = "\u{1F449}";

/// Upper-cases the first alphanumeric character of `s`; leading symbols and the rest are kept as is.
///
/// `"[ANN] release"` stays `"[ANN] release"` (the `A` is already upper case), `"-- hello"` becomes `"-- Hello"`.
pub fn capitalize_no_sym(s: &str) -> String {
    match s.char_indices().find(|(_, c)| c.is_alphanumeric()) {
        Some((i, c)) => {
            let mut out = String::with_capacity(s.len());
            out.push_str(&s[..i]);
            out.extend(c.to_uppercase());
            out.push_str(&s[i + c.len_utf8()..]);
            out
        }
        None => s.to_string(),
    }
}
