//! Markdown to HTML rendering using pulldown-cmark.

use html_escape::encode_double_quoted_attribute;
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};

use crate::highlight::highlight;

/// Options for markdown rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Enable tables extension
    pub tables: bool,
    /// Enable strikethrough extension
    pub strikethrough: bool,
    /// Enable task lists extension
    pub task_lists: bool,
    /// Enable footnotes extension
    pub footnotes: bool,
    /// Curly quotes, dashes and ellipses
    pub smart_punctuation: bool,
    /// Render single newlines as `<br />`
    pub breaks: bool,
    /// Run fenced code blocks through the syntax highlighter
    pub highlight: bool,
    /// Open links in a new tab
    pub new_tab_links: bool,
}

impl Default for RenderOptions {
    /// GitHub-flavored rendering used for issue bodies
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            task_lists: true,
            footnotes: true,
            smart_punctuation: true,
            breaks: true,
            highlight: true,
            new_tab_links: true,
        }
    }
}

impl RenderOptions {
    /// CommonMark only: no extensions, no rewriting
    pub fn plain() -> Self {
        Self {
            tables: false,
            strikethrough: false,
            task_lists: false,
            footnotes: false,
            smart_punctuation: false,
            breaks: false,
            highlight: false,
            new_tab_links: false,
        }
    }

    fn to_pulldown_options(&self) -> Options {
        let mut opts = Options::empty();
        if self.tables {
            opts.insert(Options::ENABLE_TABLES);
        }
        if self.strikethrough {
            opts.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.task_lists {
            opts.insert(Options::ENABLE_TASKLISTS);
        }
        if self.footnotes {
            opts.insert(Options::ENABLE_FOOTNOTES);
        }
        if self.smart_punctuation {
            opts.insert(Options::ENABLE_SMART_PUNCTUATION);
        }
        opts
    }
}

/// Deterministic markdown renderer: the same input and options always yield
/// the same HTML.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a markdown document to an HTML string
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options.to_pulldown_options());

        let mut events: Vec<Event> = Vec::new();
        // (fence tag, collected source) while inside a highlighted code block
        let mut code_block: Option<(Option<String>, String)> = None;

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) if self.options.highlight => {
                    let tag = match kind {
                        CodeBlockKind::Fenced(info) if !info.trim().is_empty() => {
                            Some(info.to_string())
                        }
                        _ => None,
                    };
                    code_block = Some((tag, String::new()));
                }
                Event::Text(text) if code_block.is_some() => {
                    if let Some((_, source)) = code_block.as_mut() {
                        source.push_str(&text);
                    }
                }
                Event::End(TagEnd::CodeBlock) if code_block.is_some() => {
                    if let Some((tag, source)) = code_block.take() {
                        events.push(Event::Html(CowStr::from(render_code_block(
                            &source,
                            tag.as_deref(),
                        ))));
                    }
                }
                Event::Start(Tag::Link {
                    dest_url, title, ..
                }) if self.options.new_tab_links => {
                    events.push(Event::InlineHtml(CowStr::from(link_open_tag(
                        &dest_url, &title,
                    ))));
                }
                Event::End(TagEnd::Link) if self.options.new_tab_links => {
                    events.push(Event::InlineHtml(CowStr::Borrowed("</a>")));
                }
                Event::SoftBreak if self.options.breaks => events.push(Event::HardBreak),
                other => events.push(other),
            }
        }

        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, events.into_iter());
        out
    }
}

fn link_open_tag(href: &str, title: &str) -> String {
    format!(
        "<a href=\"{}\" title=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">",
        encode_double_quoted_attribute(href),
        encode_double_quoted_attribute(title)
    )
}

fn render_code_block(source: &str, tag: Option<&str>) -> String {
    let highlighted = highlight(source, tag);
    let class = match highlighted.language {
        Some(language) => format!("hljs language-{}", language.name()),
        None => "hljs".to_string(),
    };

    format!(
        "<pre><code class=\"{class}\">{}</code></pre>\n",
        highlighted.html
    )
}
