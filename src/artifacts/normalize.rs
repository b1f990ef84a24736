//! Line normalization
//!
//! Produces the comparison key used for line equality. Whitespace removal strips
//! every whitespace character, internal ones included, so `"a b"` and `"ab"`
//! compare equal; this is stronger than the usual leading/trailing trim.

use crate::artifacts::options::NormalizeOptions;

pub fn normalize(raw: &str, options: &NormalizeOptions) -> String {
    let stripped: String = if options.ignore_whitespace {
        raw.chars().filter(|c| !c.is_whitespace()).collect()
    } else {
        raw.to_string()
    };

    if options.ignore_case {
        stripped.to_lowercase()
    } else {
        stripped
    }
}
