//! Line classification.
//!
//! Input is decoded as UTF-8 one character at a time. Lines end at `\n`,
//! `\r\n` or a lone `\r`. A trailing record without a terminator counts as
//! one more line when it is not empty.

use std::io::{self, BufRead};

use utf8_chars::BufReadCharsExt;

use crate::options::LinePolicy;

/// Count the lines of `reader` under `policy`.
///
/// Content that is not valid UTF-8 fails with [`io::ErrorKind::InvalidData`].
pub fn count_lines<R: BufRead>(reader: &mut R, policy: LinePolicy) -> io::Result<u64> {
    let mut count = 0;
    // Any character seen since the last terminator
    let mut in_record = false;
    // Anything other than a space or tab seen since the last terminator
    let mut has_content = false;
    let mut after_cr = false;

    for c in reader.chars() {
        let c = c?;
        if after_cr {
            after_cr = false;
            if c == '\n' {
                continue;
            }
        }
        match c {
            '\n' | '\r' => {
                if counts(policy, has_content) {
                    count += 1;
                }
                in_record = false;
                has_content = false;
                after_cr = c == '\r';
            }
            ' ' | '\t' => in_record = true,
            _ => {
                in_record = true;
                has_content = true;
            }
        }
    }

    if in_record && counts(policy, has_content) {
        count += 1;
    }

    Ok(count)
}

/// Count the lines of an in-memory string.
///
/// # Example
///
/// ```rust
/// use loclib::{count_str, LinePolicy};
///
/// assert_eq!(count_str("a\n\n  \nb\n", LinePolicy::IgnoreBlank), 2);
/// assert_eq!(count_str("a\n\n  \nb\n", LinePolicy::CountBlank), 4);
/// ```
pub fn count_str(source: &str, policy: LinePolicy) -> u64 {
    let mut reader = source.as_bytes();
    // A &str is valid UTF-8 and reading from a slice cannot fail.
    count_lines(&mut reader, policy).unwrap_or_default()
}

fn counts(policy: LinePolicy, has_content: bool) -> bool {
    match policy {
        LinePolicy::IgnoreBlank => has_content,
        LinePolicy::CountBlank => true,
    }
}
