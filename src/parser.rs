use crate::block::{Block, ListKind};
use crate::inline;

/// Parse markdown text into a list of blocks, one line at a time
pub fn parse(markdown: &str) -> Vec<Block> {
    let mut state = ParseState::default();

    for line in markdown.split('\n') {
        process_line(line, &mut state);
    }

    state.finish()
}

#[derive(Default)]
struct ParseState {
    blocks: Vec<Block>,

    // Code block state
    in_code_block: bool,
    code_lines: Vec<String>,

    // Kind of the list that is currently open, if any
    open_list: Option<ListKind>,
}

impl ParseState {
    fn open_list(&mut self, kind: ListKind) {
        if self.open_list.is_none() {
            self.blocks.push(Block::ListStart(kind));
            self.open_list = Some(kind);
        }
    }

    fn close_list(&mut self) {
        if let Some(kind) = self.open_list.take() {
            self.blocks.push(Block::ListEnd(kind));
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.close_list();
        if self.in_code_block {
            tracing::debug!(
                lines = self.code_lines.len(),
                "Dropping unterminated code block"
            );
        }
        self.blocks
    }
}

fn process_line(line: &str, state: &mut ParseState) {
    let trimmed = line.trim();

    // Code fences
    if trimmed.starts_with("```") {
        if state.in_code_block {
            let content = std::mem::take(&mut state.code_lines).join("\n");
            state.blocks.push(Block::CodeBlock(content));
            state.in_code_block = false;
        } else {
            state.in_code_block = true;
        }
        return;
    }

    if state.in_code_block {
        state.code_lines.push(inline::escape_angle_brackets(line));
        return;
    }

    // Headings, rules and list items leave an open list alone
    if let Some((level, text)) = heading(line) {
        state.blocks.push(Block::Heading {
            level,
            text: text.to_owned(),
        });
    } else if matches!(trimmed, "---" | "***" | "___") {
        state.blocks.push(Block::Rule);
    } else if let Some(text) = unordered_item(trimmed) {
        state.open_list(ListKind::Unordered);
        state.blocks.push(Block::ListItem(text.to_owned()));
    } else if let Some(text) = ordered_item(trimmed) {
        state.open_list(ListKind::Ordered);
        state.blocks.push(Block::ListItem(text.to_owned()));
    } else {
        state.close_list();

        if trimmed.is_empty() {
            state.blocks.push(Block::LineBreak);
        } else {
            state.blocks.push(Block::Paragraph(inline::apply(line)));
        }
    }
}

/// `#` to `####` followed by a space, at the very start of the line.
fn heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if !(1..=4).contains(&hashes) {
        return None;
    }
    let text = line[hashes..].strip_prefix(' ')?;
    // Bounded by the range check above
    Some((hashes as u8, text))
}

fn unordered_item(trimmed: &str) -> Option<&str> {
    trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
}

/// A single ASCII digit followed by `. `; the text is everything after
/// the first `. ` separator.
fn ordered_item(trimmed: &str) -> Option<&str> {
    let mut chars = trimmed.chars();
    if !chars.next()?.is_ascii_digit() || !chars.as_str().starts_with(". ") {
        return None;
    }
    trimmed.split_once(". ").map(|(_, text)| text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(text: &str) -> Block {
        Block::ListItem(text.to_owned())
    }

    fn para(text: &str) -> Block {
        Block::Paragraph(text.to_owned())
    }

    #[test]
    fn heading_levels() {
        let blocks = parse("# One\n## Two\n### Three\n#### Four");
        let levels: Vec<(u8, &str)> = blocks
            .iter()
            .filter_map(|b| match b {
                Block::Heading { level, text } => Some((*level, text.as_str())),
                _ => None,
            })
            .collect();
        assert_eq!(
            levels,
            vec![(1, "One"), (2, "Two"), (3, "Three"), (4, "Four")]
        );
    }

    #[test]
    fn deep_headings_fall_through_to_paragraph() {
        assert_eq!(parse("##### Five"), vec![para("##### Five")]);
        assert_eq!(parse("###### Six"), vec![para("###### Six")]);
    }

    #[test]
    fn heading_needs_space_and_line_start() {
        assert_eq!(parse("#tag"), vec![para("#tag")]);
        assert_eq!(parse("  # Indented"), vec![para("  # Indented")]);
    }

    #[test]
    fn horizontal_rules() {
        for rule in ["---", "***", "___", "  ---  "] {
            assert_eq!(parse(rule), vec![Block::Rule], "rule {rule:?}");
        }
    }

    #[test]
    fn unordered_list_then_blank_line() {
        assert_eq!(
            parse("- a\n- b\n"),
            vec![
                Block::ListStart(ListKind::Unordered),
                item("a"),
                item("b"),
                Block::ListEnd(ListKind::Unordered),
                Block::LineBreak,
            ]
        );
    }

    #[test]
    fn star_bullets_and_indentation() {
        assert_eq!(
            parse("* a\n   - b"),
            vec![
                Block::ListStart(ListKind::Unordered),
                item("a"),
                item("b"),
                Block::ListEnd(ListKind::Unordered),
            ]
        );
    }

    #[test]
    fn ordered_list() {
        assert_eq!(
            parse("1. first\n2. second. with dot"),
            vec![
                Block::ListStart(ListKind::Ordered),
                item("first"),
                item("second. with dot"),
                Block::ListEnd(ListKind::Ordered),
            ]
        );
    }

    #[test]
    fn two_digit_number_is_not_a_list_item() {
        assert_eq!(parse("10. ten"), vec![para("10. ten")]);
    }

    #[test]
    fn switching_list_kind_keeps_list_open() {
        assert_eq!(
            parse("- a\n1. b"),
            vec![
                Block::ListStart(ListKind::Unordered),
                item("a"),
                item("b"),
                Block::ListEnd(ListKind::Unordered),
            ]
        );
    }

    #[test]
    fn heading_does_not_close_list() {
        assert_eq!(
            parse("- a\n## H\n- b"),
            vec![
                Block::ListStart(ListKind::Unordered),
                item("a"),
                Block::Heading {
                    level: 2,
                    text: "H".to_owned()
                },
                item("b"),
                Block::ListEnd(ListKind::Unordered),
            ]
        );
    }

    #[test]
    fn paragraph_closes_list() {
        assert_eq!(
            parse("- a\nafter"),
            vec![
                Block::ListStart(ListKind::Unordered),
                item("a"),
                Block::ListEnd(ListKind::Unordered),
                para("after"),
            ]
        );
    }

    #[test]
    fn code_block_is_escaped_and_not_classified() {
        assert_eq!(
            parse("```\ncode<1>\n# not a heading\n- not an item\n```"),
            vec![Block::CodeBlock(
                "code&lt;1&gt;\n# not a heading\n- not an item".to_owned()
            )]
        );
    }

    #[test]
    fn fence_with_language_and_indent() {
        assert_eq!(
            parse("  ```rust\nlet x = 1;\n  ```"),
            vec![Block::CodeBlock("let x = 1;".to_owned())]
        );
    }

    #[test]
    fn empty_code_block() {
        assert_eq!(parse("```\n```"), vec![Block::CodeBlock(String::new())]);
    }

    #[test]
    fn unterminated_code_block_is_dropped() {
        assert_eq!(parse("text\n```\nlost"), vec![para("text")]);
    }

    #[test]
    fn empty_input_is_one_line_break() {
        assert_eq!(parse(""), vec![Block::LineBreak]);
    }

    #[test]
    fn paragraph_keeps_leading_whitespace() {
        assert_eq!(parse("  **hi**"), vec![para("  <strong>hi</strong>")]);
    }
}
