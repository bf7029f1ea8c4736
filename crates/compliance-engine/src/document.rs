//! Markdown document tree
//!
//! Model cards are tokenized with `pulldown-cmark` and folded into an arena of
//! nodes with index-based parent/child links. The arena is built once by
//! [`parse`] and never mutated afterwards, so a single [`Document`] can be
//! shared read-only by every check in a suite.

use lazy_static::lazy_static;
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use regex::Regex;

lazy_static! {
    /// Markup inside raw HTML: comments first, then any tag
    static ref HTML_MARKUP: Regex = Regex::new(r"(?s)<!--.*?-->|<[^>]*>").unwrap();
}

/// Index of a node inside a [`Document`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Structural classification of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Synthetic root holding all top-level blocks
    Document,
    /// Heading with level 1..=6
    Heading(u8),
    Paragraph,
    List,
    ListItem,
    BlockQuote,
    CodeBlock,
    Table,
    TableRow,
    TableCell,
    Strong,
    Emphasis,
    Strikethrough,
    Link,
    Image,
    InlineCode,
    /// Soft or hard line break inside inline content
    LineBreak,
    Rule,
    /// `<!-- ... -->`, either as a block or inline
    Comment,
    /// Any other raw HTML; only the text between its tags is visible
    Html,
    Text,
}

impl NodeKind {
    pub fn heading_level(self) -> Option<u8> {
        match self {
            NodeKind::Heading(level) => Some(level),
            _ => None,
        }
    }

    /// Nodes whose text never counts as visible content
    pub fn is_hidden(self) -> bool {
        matches!(self, NodeKind::Comment | NodeKind::Image)
    }

    /// Nodes that start a new line of text
    ///
    /// Raw HTML is excluded: inline tags sit inside paragraphs.
    pub fn is_block(self) -> bool {
        matches!(
            self,
            NodeKind::Heading(_)
                | NodeKind::Paragraph
                | NodeKind::List
                | NodeKind::ListItem
                | NodeKind::BlockQuote
                | NodeKind::CodeBlock
                | NodeKind::Table
                | NodeKind::TableRow
                | NodeKind::Rule
        )
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    /// Payload for leaf nodes (text, inline code, comments, raw HTML)
    pub text: String,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Position among the parent's children
    index: usize,
}

/// Immutable Markdown tree
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
}

/// Parse Markdown into a [`Document`]
///
/// Never fails: text that contains no Markdown structure still produces a
/// tree, it simply has no heading nodes.
pub fn parse(markdown: &str) -> Document {
    let mut builder = Builder::new();
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;

    for event in Parser::new_ext(markdown, options) {
        builder.push_event(event);
    }

    let document = builder.finish();
    tracing::trace!(
        nodes = document.len(),
        headings = document.headings().count(),
        "parsed model card"
    );
    document
}

impl Document {
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A document always holds its root node
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.nodes[id.0].kind
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn heading_level(&self, id: NodeId) -> Option<u8> {
        self.kind(id).heading_level()
    }

    /// Siblings after `id`, in document order
    pub fn following_siblings(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let node = self.node(id);
        let siblings: &[NodeId] = match node.parent {
            Some(parent) => &self.children(parent)[node.index + 1..],
            None => &[],
        };
        siblings.iter().copied()
    }

    /// Pre-order traversal of the subtree rooted at `id` (including `id`)
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants {
            document: self,
            stack: vec![id],
        }
    }

    /// All heading nodes in document order with their level
    pub fn headings(&self) -> impl Iterator<Item = (NodeId, u8)> + '_ {
        self.descendants(self.root())
            .filter_map(|id| self.heading_level(id).map(|level| (id, level)))
    }

    /// Visible text of the subtree rooted at `id`
    ///
    /// Comments, HTML tags and image alt text are skipped. Block boundaries and
    /// line breaks become `\n`; table cells are separated by a space.
    pub fn text(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let node = self.node(id);
        if node.kind.is_hidden() {
            return;
        }

        if node.kind.is_block() && !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        if node.kind == NodeKind::TableCell && !out.is_empty() && !out.ends_with([' ', '\n']) {
            out.push(' ');
        }

        match node.kind {
            NodeKind::Text | NodeKind::InlineCode => out.push_str(&node.text),
            NodeKind::LineBreak => out.push('\n'),
            NodeKind::Html => out.push_str(HTML_MARKUP.replace_all(&node.text, "").trim()),
            _ => {
                for &child in &node.children {
                    self.collect_text(child, out);
                }
            }
        }
    }
}

pub struct Descendants<'a> {
    document: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.document.children(id).iter().rev().copied());
        Some(id)
    }
}

/// Folds the pulldown-cmark event stream into the arena
struct Builder {
    nodes: Vec<Node>,
    open: Vec<NodeId>,
}

impl Builder {
    fn new() -> Self {
        let root = Node {
            kind: NodeKind::Document,
            text: String::new(),
            parent: None,
            children: Vec::new(),
            index: 0,
        };
        Self {
            nodes: vec![root],
            open: vec![NodeId(0)],
        }
    }

    fn current(&self) -> NodeId {
        // The root is never popped
        self.open.last().copied().unwrap_or(NodeId(0))
    }

    fn add(&mut self, kind: NodeKind, text: String) -> NodeId {
        let parent = self.current();
        let id = NodeId(self.nodes.len());
        let index = self.nodes[parent.0].children.len();
        self.nodes.push(Node {
            kind,
            text,
            parent: Some(parent),
            children: Vec::new(),
            index,
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    fn open(&mut self, kind: NodeKind) {
        let id = self.add(kind, String::new());
        self.open.push(id);
    }

    fn close(&mut self) {
        if self.open.len() > 1 {
            self.open.pop();
        }
    }

    /// Text events arrive split at entities and brackets; merge runs.
    fn add_text(&mut self, text: &str) {
        let parent = self.current();
        if let Some(&last) = self.nodes[parent.0].children.last() {
            if self.nodes[last.0].kind == NodeKind::Text {
                self.nodes[last.0].text.push_str(text);
                return;
            }
        }
        self.add(NodeKind::Text, text.to_string());
    }

    fn add_html(&mut self, html: &str) {
        let kind = if html.trim_start().starts_with("<!--") {
            NodeKind::Comment
        } else {
            NodeKind::Html
        };
        self.add(kind, html.to_string());
    }

    fn push_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(TagEnd::HtmlBlock) => {
                let id = self.current();
                if self.nodes[id.0].text.trim_start().starts_with("<!--") {
                    self.nodes[id.0].kind = NodeKind::Comment;
                }
                self.close();
            }
            Event::End(_) => self.close(),
            Event::Text(text) => self.add_text(&text),
            Event::Code(code) => {
                self.add(NodeKind::InlineCode, code.to_string());
            }
            Event::Html(html) => {
                let id = self.current();
                if self.nodes[id.0].kind == NodeKind::Html {
                    self.nodes[id.0].text.push_str(&html);
                } else {
                    self.add_html(&html);
                }
            }
            Event::InlineHtml(html) => self.add_html(&html),
            Event::SoftBreak | Event::HardBreak => {
                self.add(NodeKind::LineBreak, String::new());
            }
            Event::Rule => {
                self.add(NodeKind::Rule, String::new());
            }
            // Footnote references, task markers and math are not enabled
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        let kind = match tag {
            Tag::Heading { level, .. } => NodeKind::Heading(heading_level(level)),
            Tag::Paragraph => NodeKind::Paragraph,
            Tag::List(_) => NodeKind::List,
            Tag::Item => NodeKind::ListItem,
            Tag::BlockQuote(_) => NodeKind::BlockQuote,
            Tag::CodeBlock(_) => NodeKind::CodeBlock,
            Tag::HtmlBlock => NodeKind::Html,
            Tag::Table(_) => NodeKind::Table,
            Tag::TableHead | Tag::TableRow => NodeKind::TableRow,
            Tag::TableCell => NodeKind::TableCell,
            Tag::Emphasis => NodeKind::Emphasis,
            Tag::Strong => NodeKind::Strong,
            Tag::Strikethrough => NodeKind::Strikethrough,
            Tag::Link { .. } => NodeKind::Link,
            Tag::Image { .. } => NodeKind::Image,
            // Footnotes, metadata blocks and definition lists are not enabled
            // but still need a container so End events stay balanced.
            _ => NodeKind::Paragraph,
        };
        self.open(kind);
    }

    fn finish(self) -> Document {
        Document { nodes: self.nodes }
    }
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: parsing never panics and every child points back at its parent
        #[test]
        fn parse_arbitrary_text(text in "\\PC*") {
            let doc = parse(&text);
            for id in doc.descendants(doc.root()) {
                for (index, &child) in doc.children(id).iter().enumerate() {
                    prop_assert_eq!(doc.parent(child), Some(id));
                    prop_assert_eq!(doc.node(child).index, index);
                }
            }
        }

        /// Property: markdown-looking noise still yields a well-formed tree
        #[test]
        fn parse_markdown_noise(text in "[#*\\-_<>!\\[\\]|` \na-z]{0,200}") {
            let doc = parse(&text);
            prop_assert!(doc.descendants(doc.root()).count() == doc.len());
        }
    }
}
