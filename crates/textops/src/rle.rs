//! Run-length encoding of lowercase text.

use crate::error::{Result, TextOpsError};

/// Flush one maximal run into the output. Count 1 emits the bare character.
fn append_run(out: &mut String, run_char: char, run_len: usize) {
    if run_len > 1 {
        out.push_str(&run_len.to_string());
    }
    out.push(run_char);
}

/// Run-length encode `text`.
///
/// Only lowercase ASCII letters and spaces are accepted; any other character
/// fails with `InvalidInput` before any output is produced. Each maximal run
/// of two or more identical characters is replaced by `COUNTc` where COUNT is
/// the decimal run length; single characters pass through unchanged.
///
/// ```
/// # use textops::run_length_encode;
/// assert_eq!(run_length_encode("heloooooooo there").unwrap(), "hel8o there");
/// ```
pub fn run_length_encode(text: &str) -> Result<String> {
    if let Some(bad) = text.chars().find(|&c| !(c.is_ascii_lowercase() || c == ' ')) {
        return Err(TextOpsError::InvalidInput(format!(
            "character {bad:?} is not a lowercase letter or space"
        )));
    }

    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return Ok(String::new());
    };

    let mut out = String::with_capacity(text.len());
    let mut run_char = first;
    let mut run_len = 1;
    let mut runs = 1usize;
    for c in chars {
        if c == run_char {
            run_len += 1;
        } else {
            append_run(&mut out, run_char, run_len);
            run_char = c;
            run_len = 1;
            runs += 1;
        }
    }
    append_run(&mut out, run_char, run_len);

    tracing::trace!(runs, input_len = text.len(), output_len = out.len(), "run-length encoded");
    Ok(out)
}
