//! Syntax highlighting for fenced code blocks
//!
//! Code is parsed with tree-sitter and its tokens are wrapped in
//! `<span class="hljs-*">` elements, so stylesheets written for highlight.js
//! apply unchanged. When a block carries no language tag the grammar is
//! auto-detected: every known grammar parses the code and the first one that
//! produces a tree without error nodes wins.

use html_escape::encode_text;
use tree_sitter::{Language, Node, Parser, Tree};

/// Languages the highlighter knows, in auto-detection order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeLanguage {
    JavaScript,
    TypeScript,
    Tsx,
    Python,
    Rust,
    Go,
}

impl CodeLanguage {
    /// Candidates tried when a block has no language tag
    pub const AUTO_DETECT: [CodeLanguage; 5] = [
        CodeLanguage::JavaScript,
        CodeLanguage::TypeScript,
        CodeLanguage::Python,
        CodeLanguage::Rust,
        CodeLanguage::Go,
    ];

    /// Resolve a fenced code block info string (`js`, `rust`, ...)
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.split_whitespace().next()?.to_ascii_lowercase();
        match tag.as_str() {
            "js" | "javascript" | "jsx" | "mjs" | "cjs" | "node" => Some(CodeLanguage::JavaScript),
            "ts" | "typescript" => Some(CodeLanguage::TypeScript),
            "tsx" => Some(CodeLanguage::Tsx),
            "py" | "python" | "python3" => Some(CodeLanguage::Python),
            "rs" | "rust" => Some(CodeLanguage::Rust),
            "go" | "golang" => Some(CodeLanguage::Go),
            _ => None,
        }
    }

    /// Class suffix used on the `<code>` element
    pub fn name(&self) -> &'static str {
        match self {
            CodeLanguage::JavaScript => "javascript",
            CodeLanguage::TypeScript => "typescript",
            CodeLanguage::Tsx => "tsx",
            CodeLanguage::Python => "python",
            CodeLanguage::Rust => "rust",
            CodeLanguage::Go => "go",
        }
    }

    fn grammar(&self) -> Language {
        match self {
            CodeLanguage::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            CodeLanguage::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            CodeLanguage::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
            CodeLanguage::Python => tree_sitter_python::LANGUAGE.into(),
            CodeLanguage::Rust => tree_sitter_rust::LANGUAGE.into(),
            CodeLanguage::Go => tree_sitter_go::LANGUAGE.into(),
        }
    }
}

/// Result of highlighting one code block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighted {
    /// Language used, `None` when the code was emitted as plain text
    pub language: Option<CodeLanguage>,
    /// Escaped HTML with `hljs-*` spans
    pub html: String,
}

/// Highlight a code block, honoring the fence tag when it names a known language
pub fn highlight(code: &str, tag: Option<&str>) -> Highlighted {
    if let Some(language) = tag.and_then(CodeLanguage::from_tag) {
        if let Some(tree) = parse(code, language) {
            return Highlighted {
                language: Some(language),
                html: render(&tree, code),
            };
        }
    }

    highlight_auto(code)
}

/// Highlight a code block by detecting its language
pub fn highlight_auto(code: &str) -> Highlighted {
    if !code.trim().is_empty() {
        for language in CodeLanguage::AUTO_DETECT {
            let Some(tree) = parse(code, language) else {
                continue;
            };
            if count_errors(tree.root_node()) == 0 {
                return Highlighted {
                    language: Some(language),
                    html: render(&tree, code),
                };
            }
        }
    }

    Highlighted {
        language: None,
        html: encode_text(code).into_owned(),
    }
}

fn parse(code: &str, language: CodeLanguage) -> Option<Tree> {
    let mut parser = Parser::new();
    parser.set_language(&language.grammar()).ok()?;
    parser.parse(code, None)
}

fn count_errors(node: Node) -> usize {
    if !node.has_error() {
        return 0;
    }

    let own = usize::from(node.is_error() || node.is_missing());
    let children: usize = (0..node.child_count())
        .filter_map(|i| node.child(i))
        .map(count_errors)
        .sum();

    own + children
}

fn render(tree: &Tree, code: &str) -> String {
    let mut out = String::with_capacity(code.len() * 2);
    let mut pos = 0;
    render_node(tree.root_node(), code, &mut out, &mut pos);
    if pos < code.len() {
        out.push_str(&encode_text(&code[pos..]));
    }
    out
}

fn render_node(node: Node, code: &str, out: &mut String, pos: &mut usize) {
    let start = node.start_byte();
    let end = node.end_byte();

    let class = token_class(&node);
    if class.is_none() && node.child_count() > 0 {
        for i in 0..node.child_count() {
            if let Some(child) = node.child(i) {
                render_node(child, code, out, pos);
            }
        }
        return;
    }

    if end <= *pos || start >= code.len() {
        return;
    }

    let start = start.max(*pos);
    let end = end.min(code.len());
    out.push_str(&encode_text(&code[*pos..start]));

    let text = encode_text(&code[start..end]);
    match class {
        Some(class) => {
            out.push_str("<span class=\"hljs-");
            out.push_str(class);
            out.push_str("\">");
            out.push_str(&text);
            out.push_str("</span>");
        }
        None => out.push_str(&text),
    }
    *pos = end;
}

// Node kinds per class, after the captures in each grammar's
// `queries/highlights.scm`
const STRING_KINDS: &[&str] = &[
    "string",
    "template_string",
    "string_literal",
    "raw_string_literal",
    "char_literal",
    "interpreted_string_literal",
    "rune_literal",
    "regex",
];

const NUMBER_KINDS: &[&str] = &[
    "number",
    "integer",
    "float",
    "integer_literal",
    "float_literal",
    "int_literal",
    "imaginary_literal",
];

const LITERAL_KINDS: &[&str] = &["true", "false", "null", "undefined", "none", "nil", "iota"];

const TYPE_KINDS: &[&str] = &["type_identifier", "primitive_type", "predefined_type"];

/// Named leaves captured as `@keyword` or `@variable.builtin`
const NAMED_KEYWORD_KINDS: &[&str] = &["mutable_specifier", "self", "crate", "super", "this"];

/// Map a node to an `hljs-*` class. Strings and comments are matched as whole
/// subtrees; everything else only at the leaves.
fn token_class(node: &Node) -> Option<&'static str> {
    let kind = node.kind();

    if kind.contains("comment") {
        return Some("comment");
    }
    if STRING_KINDS.contains(&kind) {
        return Some("string");
    }
    if node.child_count() > 0 {
        return None;
    }

    if NUMBER_KINDS.contains(&kind) {
        Some("number")
    } else if LITERAL_KINDS.contains(&kind) {
        Some("literal")
    } else if TYPE_KINDS.contains(&kind) {
        Some("type")
    } else if NAMED_KEYWORD_KINDS.contains(&kind) || is_keyword_token(node) {
        Some("keyword")
    } else {
        None
    }
}

/// Anonymous word tokens (`fn`, `const`, `def`, ...) are keywords
fn is_keyword_token(node: &Node) -> bool {
    let kind = node.kind();
    !node.is_named() && kind.len() > 1 && kind.chars().all(|c| c.is_ascii_alphabetic() || c == '_')
}
