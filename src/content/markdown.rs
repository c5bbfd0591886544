//! Constrained markdown rendering
//!
//! Converts the fixed dialect used by post bodies (headers, emphasis,
//! code, images, links, flat lists, paragraphs) into an HTML string,
//! using a line-oriented parser that produces a typed block/span tree
//! before serializing. Structural parsing makes the dialect's ordering
//! rules (image before link, bold before italic, exact header levels)
//! hold by construction.
//!
//! The renderer performs no sanitization: HTML-like input passes
//! through verbatim. Content is trusted-author only. Malformed input
//! degrades to literal text; rendering never fails.

/// Inline content within a line
#[derive(Debug, Clone, PartialEq)]
pub enum Span {
    /// Literal text, emitted verbatim
    Text(String),
    /// Inline code span; content is atomic, no nested markup
    Code(String),
    Strong(Vec<Span>),
    Em(Vec<Span>),
    Link { text: Vec<Span>, url: String },
    Image { alt: String, url: String },
}

/// A block-level element, one per physical line except for fenced
/// code blocks and merged lists
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Empty source line, preserved as an empty output line
    Blank,
    Header { level: usize, spans: Vec<Span> },
    Paragraph(Vec<Span>),
    /// Contiguous run of list-item lines merged under one <ul>
    List(Vec<Vec<Span>>),
    /// Fenced code block body, verbatim
    CodeBlock(String),
    /// Line already starting with a block tag (<h, <o, <u); emitted
    /// without a paragraph wrapper, inline rules still apply
    RawHtml(Vec<Span>),
}

/// Parse a content body into its block tree
pub fn parse(input: &str) -> Vec<Block> {
    let lines: Vec<&str> = input.lines().collect();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        if line.is_empty() {
            blocks.push(Block::Blank);
            i += 1;
            continue;
        }

        if line.starts_with("```") {
            // Info strings after the opening backticks are discarded.
            // An unclosed fence is not an error: the would-be fence
            // line falls through and parses as an ordinary line.
            if let Some(close) = (i + 1..lines.len()).find(|&j| lines[j].starts_with("```")) {
                blocks.push(Block::CodeBlock(lines[i + 1..close].join("\n")));
                i = close + 1;
                continue;
            }
        }

        if let Some((level, text)) = header_line(line) {
            blocks.push(Block::Header {
                level,
                spans: parse_inline(text),
            });
            i += 1;
            continue;
        }

        if let Some(first) = list_item_text(line) {
            // Newline-adjacent list lines form one list; a blank line
            // or non-list line ends the run.
            let mut items = vec![parse_inline(first)];
            i += 1;
            while let Some(text) = lines.get(i).and_then(|l| list_item_text(l)) {
                items.push(parse_inline(text));
                i += 1;
            }
            blocks.push(Block::List(items));
            continue;
        }

        if line.starts_with("<h") || line.starts_with("<o") || line.starts_with("<u") {
            blocks.push(Block::RawHtml(parse_inline(line)));
        } else {
            blocks.push(Block::Paragraph(parse_inline(line)));
        }
        i += 1;
    }

    blocks
}

/// Render a content body to HTML
pub fn render_html(input: &str) -> String {
    let rendered: Vec<String> = parse(input).iter().map(render_block).collect();
    rendered.join("\n")
}

/// Match exactly 1-6 '#' followed by a space; 7+ hashes or a missing
/// space is not a header
fn header_line(line: &str) -> Option<(usize, &str)> {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    if (1..=6).contains(&hashes) && line[hashes..].starts_with(' ') {
        Some((hashes, &line[hashes + 1..]))
    } else {
        None
    }
}

fn list_item_text(line: &str) -> Option<&str> {
    line.strip_prefix("* ")
        .or_else(|| line.strip_prefix("- "))
        .or_else(|| line.strip_prefix("+ "))
}

fn parse_inline(text: &str) -> Vec<Span> {
    let chars: Vec<char> = text.chars().collect();
    parse_spans(&chars)
}

/// Scan left to right; at each position candidates are tried in
/// priority order (image, link, code, bold, italic). Unmatched
/// delimiters stay literal text.
fn parse_spans(chars: &[char]) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut literal = String::new();
    let mut pos = 0;

    while pos < chars.len() {
        if let Some((span, next)) = match_span(chars, pos) {
            if !literal.is_empty() {
                spans.push(Span::Text(std::mem::take(&mut literal)));
            }
            spans.push(span);
            pos = next;
        } else {
            literal.push(chars[pos]);
            pos += 1;
        }
    }

    if !literal.is_empty() {
        spans.push(Span::Text(literal));
    }
    spans
}

/// Try to match a span starting at `pos`; returns the span and the
/// position just past it
fn match_span(chars: &[char], pos: usize) -> Option<(Span, usize)> {
    match chars[pos] {
        '!' if chars.get(pos + 1) == Some(&'[') => {
            let (alt, url, end) = bracket_pair(chars, pos + 2)?;
            Some((
                Span::Image {
                    alt: alt.iter().collect(),
                    url: url.iter().collect(),
                },
                end,
            ))
        }
        '[' => {
            let (text, url, end) = bracket_pair(chars, pos + 1)?;
            Some((
                Span::Link {
                    text: parse_spans(text),
                    url: url.iter().collect(),
                },
                end,
            ))
        }
        '`' => {
            // span content must be non-empty; bare backtick runs stay
            // literal
            let close = find_char(chars, pos + 1, '`').filter(|&i| i > pos + 1)?;
            Some((Span::Code(chars[pos + 1..close].iter().collect()), close + 1))
        }
        c @ ('*' | '_') => {
            if chars.get(pos + 1) == Some(&c) {
                // Double delimiter tried first so "**x**" is never
                // half-consumed by the single-delimiter rule
                if let Some(close) = find_double(chars, pos + 2, c).filter(|&i| i > pos + 2) {
                    return Some((Span::Strong(parse_spans(&chars[pos + 2..close])), close + 2));
                }
            }
            let close = find_char(chars, pos + 1, c).filter(|&i| i > pos + 1)?;
            Some((Span::Em(parse_spans(&chars[pos + 1..close])), close + 1))
        }
        _ => None,
    }
}

/// Match `text](url)` given the position just after the opening
/// bracket; returns (text, url, position past the closing paren)
fn bracket_pair(chars: &[char], open: usize) -> Option<(&[char], &[char], usize)> {
    let close = find_char(chars, open, ']')?;
    if chars.get(close + 1) != Some(&'(') {
        return None;
    }
    let paren = find_char(chars, close + 2, ')')?;
    Some((&chars[open..close], &chars[close + 2..paren], paren + 1))
}

fn find_char(chars: &[char], from: usize, needle: char) -> Option<usize> {
    (from..chars.len()).find(|&i| chars[i] == needle)
}

fn find_double(chars: &[char], from: usize, needle: char) -> Option<usize> {
    (from..chars.len().saturating_sub(1))
        .find(|&i| chars[i] == needle && chars[i + 1] == needle)
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Blank => String::new(),
        Block::Header { level, spans } => {
            format!("<h{}>{}</h{}>", level, render_spans(spans), level)
        }
        Block::Paragraph(spans) => format!("<p>{}</p>", render_spans(spans)),
        Block::List(items) => {
            let mut html = String::from("<ul>");
            for item in items {
                html.push_str("<li>");
                html.push_str(&render_spans(item));
                html.push_str("</li>");
            }
            html.push_str("</ul>");
            html
        }
        Block::CodeBlock(body) => format!("<pre><code>{}</code></pre>", body),
        Block::RawHtml(spans) => render_spans(spans),
    }
}

fn render_spans(spans: &[Span]) -> String {
    let mut html = String::new();
    for span in spans {
        match span {
            Span::Text(t) => html.push_str(t),
            Span::Code(c) => {
                html.push_str("<code>");
                html.push_str(c);
                html.push_str("</code>");
            }
            Span::Strong(inner) => {
                html.push_str("<strong>");
                html.push_str(&render_spans(inner));
                html.push_str("</strong>");
            }
            Span::Em(inner) => {
                html.push_str("<em>");
                html.push_str(&render_spans(inner));
                html.push_str("</em>");
            }
            Span::Link { text, url } => {
                html.push_str(&format!(r#"<a href="{}">{}</a>"#, url, render_spans(text)));
            }
            Span::Image { alt, url } => {
                html.push_str(&format!(r#"<img alt="{}" src="{}">"#, alt, url));
            }
        }
    }
    html
}
