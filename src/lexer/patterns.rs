//! The pattern catalog: one matcher per supported construct, in priority order.
//!
//! Inline constructs are regular expressions that may match anywhere in a
//! fragment. Line constructs are nom rules (see [`super::rules`]) that must
//! cover the whole fragment.
use lazy_static::lazy_static;
use nom::IResult;
use regex::Regex;
use std::fmt;

use super::rules;
use super::token::TokenKind;

lazy_static! {
    pub static ref IMAGE: Regex = Regex::new(r"!\[(.+?)\]\((.+?)\)").expect("image pattern");
    pub static ref LINK: Regex = Regex::new(r"\[(.+?)\]\((.+?)\)").expect("link pattern");
    pub static ref BOLD: Regex = Regex::new(r"\*\*(.+?)\*\*").expect("bold pattern");
    pub static ref ITALIC: Regex = Regex::new(r"_(.+?)_").expect("italic pattern");
    pub static ref CODE_BLOCK: Regex = Regex::new(r"```([^`]*)```").expect("code block pattern");
    pub static ref INLINE_CODE: Regex = Regex::new(r"`([^`]+)`").expect("inline code pattern");
    pub static ref STRIKETHROUGH: Regex = Regex::new(r"~~(.+?)~~").expect("strikethrough pattern");
    static ref STANDARD_CATALOG: PatternCatalog = PatternCatalog::standard();
}

/// Byte range of a match inside the fragment it was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn slice<'a>(&self, fragment: &'a str) -> &'a str {
        &fragment[self.start..self.end]
    }
}

/// Something that can locate a construct inside a fragment.
pub trait Matcher: Send + Sync {
    /// Returns the span of the first match, if any.
    fn find_span(&self, fragment: &str) -> Option<Span>;
}

impl Matcher for Regex {
    fn find_span(&self, fragment: &str) -> Option<Span> {
        self.find(fragment).map(|m| Span::new(m.start(), m.end()))
    }
}

/// A nom rule that has to consume the entire fragment.
#[derive(Clone, Copy)]
pub struct LineRule(pub for<'a> fn(&'a str) -> IResult<&'a str, &'a str>);

impl Matcher for LineRule {
    fn find_span(&self, fragment: &str) -> Option<Span> {
        rules::whole_fragment(self.0, fragment).map(|matched| Span::new(0, matched.len()))
    }
}

impl fmt::Debug for LineRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LineRule")
    }
}

/// Every construct the catalog knows about, in lexing priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Construct {
    Heading,
    Image,
    Link,
    Bold,
    Italic,
    ListItem,
    CodeBlock,
    InlineCode,
    Blockquote,
    HorizontalRule,
    Table,
    TaskList,
    Strikethrough,
}

impl Construct {
    pub const PRIORITY: [Construct; 13] = [
        Construct::Heading,
        Construct::Image,
        Construct::Link,
        Construct::Bold,
        Construct::Italic,
        Construct::ListItem,
        Construct::CodeBlock,
        Construct::InlineCode,
        Construct::Blockquote,
        Construct::HorizontalRule,
        Construct::Table,
        Construct::TaskList,
        Construct::Strikethrough,
    ];

    /// The token kind emitted when this construct matches.
    pub fn token_kind(self) -> TokenKind {
        match self {
            Construct::Heading => TokenKind::Heading,
            Construct::Image => TokenKind::Image,
            Construct::Link => TokenKind::Link,
            Construct::Bold => TokenKind::Bold,
            Construct::Italic => TokenKind::Italic,
            Construct::ListItem | Construct::TaskList => TokenKind::ListItem,
            Construct::CodeBlock => TokenKind::CodeBlock,
            Construct::InlineCode => TokenKind::InlineCode,
            Construct::Blockquote => TokenKind::Blockquote,
            Construct::HorizontalRule => TokenKind::HorizontalRule,
            Construct::Table => TokenKind::Table,
            Construct::Strikethrough => TokenKind::Text,
        }
    }

    /// Whether the construct may only match a whole fragment.
    pub fn is_line_anchored(self) -> bool {
        matches!(
            self,
            Construct::Heading
                | Construct::ListItem
                | Construct::Blockquote
                | Construct::HorizontalRule
                | Construct::Table
                | Construct::TaskList
        )
    }

    fn matcher(self) -> Box<dyn Matcher> {
        match self {
            Construct::Heading => Box::new(LineRule(rules::heading)),
            Construct::Image => Box::new(IMAGE.clone()),
            Construct::Link => Box::new(LINK.clone()),
            Construct::Bold => Box::new(BOLD.clone()),
            Construct::Italic => Box::new(ITALIC.clone()),
            Construct::ListItem => Box::new(LineRule(rules::list_item)),
            Construct::CodeBlock => Box::new(CODE_BLOCK.clone()),
            Construct::InlineCode => Box::new(INLINE_CODE.clone()),
            Construct::Blockquote => Box::new(LineRule(rules::blockquote)),
            Construct::HorizontalRule => Box::new(LineRule(rules::thematic_break)),
            Construct::Table => Box::new(LineRule(rules::table_row)),
            Construct::TaskList => Box::new(LineRule(rules::task_item_line)),
            Construct::Strikethrough => Box::new(STRIKETHROUGH.clone()),
        }
    }
}

/// A construct paired with the matcher that recognises it.
pub struct Pattern {
    pub construct: Construct,
    matcher: Box<dyn Matcher>,
}

impl Pattern {
    pub fn new(construct: Construct, matcher: Box<dyn Matcher>) -> Self {
        Self { construct, matcher }
    }

    pub fn find_span(&self, fragment: &str) -> Option<Span> {
        self.matcher.find_span(fragment)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("construct", &self.construct)
            .finish_non_exhaustive()
    }
}

/// Ordered table of patterns; the first one that matches wins.
#[derive(Debug)]
pub struct PatternCatalog {
    patterns: Vec<Pattern>,
}

impl PatternCatalog {
    /// Builds the catalog in [`Construct::PRIORITY`] order.
    pub fn standard() -> Self {
        let patterns = Construct::PRIORITY
            .iter()
            .map(|&construct| Pattern::new(construct, construct.matcher()))
            .collect();
        Self { patterns }
    }

    /// The shared, read-only standard catalog.
    pub fn shared() -> &'static PatternCatalog {
        &STANDARD_CATALOG
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Finds the highest-priority construct that matches somewhere in `fragment`.
    pub fn first_match(&self, fragment: &str) -> Option<(Construct, Span)> {
        self.patterns.iter().find_map(|pattern| {
            pattern
                .find_span(fragment)
                .map(|span| (pattern.construct, span))
        })
    }
}
