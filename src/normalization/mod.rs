use lazy_static::lazy_static;
use regex::Regex;


/// The mask of a formatted CNPJ: XX.XXX.XXX/YYYY-ZZ
pub const MASK_CHARACTERS: &str = "./-";

lazy_static! {
    static ref MASK_PATTERN: Regex =
        Regex::new(&format!("[{}]", mask_character_class())).unwrap();
}

/// The mask characters escaped for use inside a regex character class
pub(crate) fn mask_character_class() -> String {
    regex::escape(MASK_CHARACTERS)
}

/// Returns `true` when the input is empty or only contains whitespace.
/// Every operation treats such input as "no CNPJ given".
pub(crate) fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

/// Removes the mask characters (`.`, `/`, `-`) and upper-cases the result.
///
/// Whitespace between other characters is kept as-is, so `"12 345"` stays `"12 345"`.
/// Blank input yields an empty string, and so does input that only becomes blank once
/// the mask is gone (`" - "`), which keeps the operation idempotent. This never fails.
///
/// Upper-casing is done one character at a time and never changes the number of
/// characters: `ß` is kept as-is rather than becoming `SS`. No locale is involved.
pub fn remove_mask(input: &str) -> String {
    let unmasked = MASK_PATTERN.replace_all(input, "");
    if is_blank(&unmasked) {
        return String::new();
    }
    unmasked.chars().map(to_single_uppercase).collect()
}

// Characters whose upper case spans several characters (ß, ﬀ, ŉ) are left unchanged
fn to_single_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}
