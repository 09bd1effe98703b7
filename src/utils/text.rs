use std::borrow::Cow;

/// Decode raw message bytes to text
///
/// Attempts UTF-8 decoding first, falling back to Windows-1252 (CP1252) if
/// UTF-8 fails. Legacy bulletin feeds occasionally deliver Latin-1 style
/// bytes in free-text remarks.
///
/// # Returns
///
/// Decoded string (always succeeds with some valid string)
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.into(),
        Err(_) => encoding_rs::WINDOWS_1252.decode(bytes).0,
    }
}

/// Join message lines with `sep`
pub fn join_lines<S: AsRef<str>>(lines: &[S], sep: &str) -> String {
    let mut joined = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            joined.push_str(sep);
        }
        joined.push_str(line.as_ref());
    }
    joined
}
