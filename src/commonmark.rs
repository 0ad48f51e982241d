use pulldown_cmark::{Options, Parser, html};

/// Strip YAML frontmatter from the beginning of markdown content.
///
/// The block must open and close with a line that is exactly `---`, and
/// every line in between must look like YAML (`key: value`, an indented
/// continuation or a `- ` list entry). Anything else, such as a leading
/// thematic break followed by prose, is left for the markdown parser.
fn strip_frontmatter(markdown: &str) -> &str {
    let mut lines = markdown.split_inclusive('\n');
    let mut offset = match lines.next() {
        Some(first) if line_content(first) == "---" => first.len(),
        _ => return markdown,
    };

    for line in lines {
        offset += line.len();
        let content = line_content(line);
        if content == "---" {
            return markdown[offset..].trim_start_matches(['\r', '\n']);
        }
        if !is_yaml_line(content) {
            return markdown;
        }
    }
    markdown
}

/// The line without its trailing `\n` or `\r\n`.
fn line_content(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

fn is_yaml_line(line: &str) -> bool {
    if line.trim().is_empty() {
        return false;
    }
    if line.starts_with([' ', '\t']) || line.starts_with("- ") {
        return true;
    }
    line.split_once(':')
        .is_some_and(|(key, _)| !key.trim().is_empty())
}

/// Render the document body with a full CommonMark parser.
pub fn to_html_body(markdown: &str) -> String {
    let markdown = strip_frontmatter(markdown);
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    let parser = Parser::new_ext(markdown, options);

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn heading_and_paragraph() {
        assert_eq!(
            to_html_body("# Hello\n\nSome *text*."),
            "<h1>Hello</h1>\n<p>Some <em>text</em>.</p>\n"
        );
    }

    #[test]
    fn frontmatter_is_stripped() {
        assert_eq!(
            to_html_body("---\ntitle: Plan\n---\n# Plan"),
            "<h1>Plan</h1>\n"
        );
    }

    #[test]
    fn leading_rule_without_closing_is_kept() {
        assert_eq!(to_html_body("---"), "<hr />\n");
    }

    #[test]
    fn rule_around_prose_is_not_frontmatter() {
        let body = to_html_body("---\nIntro paragraph\n\n---\n\nBody");
        assert!(body.contains("<p>Intro paragraph</p>"));
        assert!(body.contains("<p>Body</p>"));
    }

    #[test]
    fn longer_rule_is_not_frontmatter() {
        let body = to_html_body("----\n# Title\ntext\n---\nmore");
        assert!(body.contains("<h1>Title</h1>"));
    }

    #[test]
    fn frontmatter_with_crlf_and_list() {
        assert_eq!(
            to_html_body("---\r\ntitle: Plan\r\ntags:\r\n  - a\r\n- b\r\n---\r\n# Plan"),
            "<h1>Plan</h1>\n"
        );
    }

    #[test]
    fn closing_delimiter_must_be_whole_line() {
        let body = to_html_body("---\ntitle: Plan\n--- not closed\n# Plan");
        assert!(body.contains("title: Plan"));
    }

    #[test]
    fn tables_are_rendered() {
        let body = to_html_body("| A | B |\n|---|---|\n| 1 | 2 |");
        assert!(body.contains("<table>"));
        assert!(body.contains("<th>A</th>"));
        assert!(body.contains("<td>2</td>"));
    }

    #[test]
    fn code_is_fully_escaped() {
        assert_eq!(
            to_html_body("```\na < b & c\n```"),
            "<pre><code>a &lt; b &amp; c\n</code></pre>\n"
        );
    }
}
