//! Longest substring under a global character-frequency floor.

use std::collections::HashMap;

/// Returns the longest contiguous substring of `text` in which every
/// character occurs at least `k` times in the whole of `text` (global
/// frequency, not frequency within the substring).
///
/// Ties at the maximal length go to the substring with the smallest start
/// index. Returns the empty string when no non-empty substring qualifies;
/// `k = 0` qualifies everything, so the whole text comes back.
pub fn longest_frequent_substring(text: &str, k: usize) -> String {
    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in text.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    // A qualifying substring can never span a character whose global count
    // is below k, so the answer is the longest gap between such characters.
    // Scanning left to right and replacing the best only on strictly greater
    // length keeps the leftmost winner on ties.
    let mut best = 0..0;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        if freq[&c] < k {
            if i - start > best.len() {
                best = start..i;
            }
            start = i + c.len_utf8();
        }
    }
    if text.len() - start > best.len() {
        best = start..text.len();
    }
    text[best].to_string()
}
