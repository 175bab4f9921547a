//! Annotation lines prepended to a raw source before highlighting.

/// Prefixes `raw` with the file, author and edit-age comment lines.
///
/// Each line is prepended to the previous result, so the last one added ends
/// up on top: file, author, edited, then the untouched content.
pub fn assemble(raw: &[u8], file_name: &str, author: &str, age_days: u32) -> Vec<u8> {
    let with_last_edit = prepend(format!("// edited {} days ago\n", age_days), raw);
    let with_author = prepend(format!("// author {}\n", author), &with_last_edit);
    prepend(format!("// file {}\n", file_name), &with_author)
}

fn prepend(line: String, rest: &[u8]) -> Vec<u8> {
    let mut out = line.into_bytes();
    out.extend_from_slice(rest);
    out
}
