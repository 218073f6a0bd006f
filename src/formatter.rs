//! Heuristic caption formatting.
//!
//! Turns the opaque text returned by the captioning backend into display
//! blocks. The heuristics are line based: a title-like first line becomes a
//! heading, short lines with separators become bullet lists, and everything
//! else is a paragraph.

use std::sync::OnceLock;

use regex::Regex;

/// Lines at or above this many characters are never split into bullets.
const BULLET_LINE_LIMIT: usize = 80;

/// One unit of formatted output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(String),
    BulletList(Vec<String>),
    Paragraph(String),
}

/// Leading run of heading markers, bullet markers and whitespace.
fn marker_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[\s#*•·-]+").expect("valid marker regex"))
}

/// Uppercase letters, digits, whitespace and sentence punctuation only.
fn heading_like() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"^[A-Z\s!?.:'",0-9]+$"#).expect("valid heading regex"))
}

/// Formats raw caption text into display blocks.
///
/// Absent input, or input that is empty once markers and blank lines are
/// stripped, yields no blocks.
pub fn format_caption<'a>(text: impl Into<Option<&'a str>>) -> Vec<Block> {
    let Some(text) = text.into() else {
        return Vec::new();
    };

    let mut lines = clean_lines(text);
    if lines.is_empty() {
        return Vec::new();
    }

    let mut blocks = Vec::with_capacity(lines.len());
    if lines.len() > 1 && heading_like().is_match(&lines[0]) {
        blocks.push(Block::Heading(lines.remove(0)));
    }

    for line in lines {
        if looks_like_list(&line) {
            let items = split_items(&line);
            // A line made only of separators carries nothing to show.
            if !items.is_empty() {
                blocks.push(Block::BulletList(items));
            }
        } else {
            blocks.push(Block::Paragraph(line));
        }
    }

    blocks
}

fn clean_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| marker_prefix().replace(line, "").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

fn looks_like_list(line: &str) -> bool {
    line.chars().count() < BULLET_LINE_LIMIT
        && (line.contains(';')
            || line.contains('•')
            || (line.contains('.') && !line.ends_with('.')))
}

fn split_items(line: &str) -> Vec<String> {
    line.split([';', '•', '.'])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
