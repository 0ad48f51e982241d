/// Apply inline formatting to a paragraph line.
///
/// Only the first pair of each marker is converted: `**` to `<strong>`
/// then `` ` `` to `<code>`. A lone marker leaves its opening tag unclosed,
/// and markers after the first pair are left as-is.
pub fn apply(line: &str) -> String {
    let line = replace_first_pair(line, "**", "<strong>", "</strong>");
    replace_first_pair(&line, "`", "<code>", "</code>")
}

/// Replace the first `marker` with `open` and the next one with `close`.
fn replace_first_pair(line: &str, marker: &str, open: &str, close: &str) -> String {
    let Some(first) = line.find(marker) else {
        return line.to_owned();
    };

    let mut out = String::with_capacity(line.len() + open.len() + close.len());
    out.push_str(&line[..first]);
    out.push_str(open);

    let rest = &line[first + marker.len()..];
    match rest.find(marker) {
        Some(second) => {
            out.push_str(&rest[..second]);
            out.push_str(close);
            out.push_str(&rest[second + marker.len()..]);
        }
        None => out.push_str(rest),
    }
    out
}

/// Escape angle brackets for code block content.
pub fn escape_angle_brackets(line: &str) -> String {
    line.replace('<', "&lt;").replace('>', "&gt;")
}
