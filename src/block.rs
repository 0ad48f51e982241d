/// Which kind of list opened the current list run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

/// One HTML fragment emitted by the line parser, in source order.
///
/// List boundaries are separate fragments rather than a nested tree: the
/// line classifier only ever knows whether a list is open, not its items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading {
        level: u8,
        text: String,
    },
    /// Inline markers already substituted.
    Paragraph(String),
    /// Escaped code lines joined with `\n`.
    CodeBlock(String),
    ListStart(ListKind),
    ListItem(String),
    ListEnd(ListKind),
    LineBreak,
    Rule,
}
