//! Text helpers shared by the decoders and the bulletin loader

mod text;

pub use text::{decode_text, join_lines};

use regex::Captures;

/// Declare a lazily compiled, process-wide regex
macro_rules! pattern {
    ($name:ident, $re:literal) => {
        static $name: std::sync::LazyLock<regex::Regex> = std::sync::LazyLock::new(|| {
            regex::Regex::new($re).expect(concat!("valid pattern: ", $re))
        });
    };
}

pub(crate) use pattern;

/// Owned copy of a capture group, `None` if the group did not participate
pub(crate) fn group(caps: &Captures<'_>, index: usize) -> Option<String> {
    caps.get(index).map(|m| m.as_str().to_string())
}
