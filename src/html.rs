use crate::block::{Block, ListKind};

/// Fixed document template; `{content}` marks where the body goes.
const TEMPLATE: &str = include_str!("template.html");

/// Convert blocks to HTML body fragments, one per line
pub fn blocks_to_html(blocks: &[Block]) -> String {
    let mut out = String::new();

    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        emit_block(block, &mut out);
    }

    out
}

/// Wrap a body in the fixed head and stylesheet.
pub fn wrap_document(body: &str) -> String {
    TEMPLATE.replacen("{content}", body, 1)
}

fn emit_block(block: &Block, out: &mut String) {
    match block {
        Block::Heading { level, text } => {
            out.push_str(&format!("<h{level}>{text}</h{level}>"));
        }
        Block::Paragraph(text) => {
            out.push_str("<p>");
            out.push_str(text);
            out.push_str("</p>");
        }
        Block::CodeBlock(content) => {
            out.push_str("<pre><code>");
            out.push_str(content);
            out.push_str("</code></pre>");
        }
        Block::ListStart(kind) => out.push_str(match kind {
            ListKind::Unordered => "<ul>",
            ListKind::Ordered => "<ol>",
        }),
        Block::ListItem(text) => {
            out.push_str("<li>");
            out.push_str(text);
            out.push_str("</li>");
        }
        Block::ListEnd(kind) => out.push_str(match kind {
            ListKind::Unordered => "</ul>",
            ListKind::Ordered => "</ol>",
        }),
        Block::LineBreak => out.push_str("<br>"),
        Block::Rule => out.push_str("<hr>"),
    }
}
