//! Identifier case conversion between wire and internal naming schemes.
//!
//! WebAuthn JSON field names are camelCase while the relying party's own
//! field names are snake_case. These two scans bridge the gap when
//! translating dictionaries across the protocol boundary.

/// Convert a snake_case identifier to camelCase.
///
/// Runs of underscores act as a single separator, and leading or trailing
/// underscores are absorbed. The first chunk is kept as-is; every later
/// chunk has its first character upper-cased and the rest left untouched.
/// `"client_data_json"` becomes `"clientDataJson"`.
#[must_use]
pub fn snake_to_camel(s: &str) -> String {
    let mut chunks = s.split('_').filter(|chunk| !chunk.is_empty());

    let Some(first) = chunks.next() else {
        return String::new();
    };

    let mut out = String::with_capacity(s.len());
    out.push_str(first);
    for chunk in chunks {
        let mut rest = chunk.chars();
        if let Some(head) = rest.next() {
            out.extend(head.to_uppercase());
            out.push_str(rest.as_str());
        }
    }
    out
}

/// Convert a camelCase identifier to snake_case.
///
/// Every uppercase character opens a new word; each word is lower-cased and
/// the words are joined with single underscores. Two consequences worth
/// knowing: an identifier starting with an uppercase letter produces a
/// leading underscore, and a run of uppercase letters produces one word per
/// letter, so `"clientDataJSON"` becomes `"client_data_j_s_o_n"` rather
/// than `"client_data_json"`. The conversion is lossy on acronyms; callers
/// that need the original wire name back must keep it.
#[must_use]
pub fn camel_to_snake(s: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut word_start = 0;

    for (index, character) in s.char_indices() {
        if character.is_uppercase() {
            words.push(s[word_start..index].to_lowercase());
            word_start = index;
        }
    }
    if word_start < s.len() {
        words.push(s[word_start..].to_lowercase());
    }

    words.join("_")
}
