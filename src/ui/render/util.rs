use lipgloss::Style;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn normalize_and_pad(lines: Vec<String>, total_width: usize, per: usize) -> String {
    let line_style = Style::new().width(total_width as i32);
    let mut normalized: Vec<String> = lines.into_iter().map(|l| line_style.render(&l)).collect();
    if normalized.len() > per {
        normalized.truncate(per);
    } else {
        while normalized.len() < per {
            normalized.push(line_style.render(""));
        }
    }
    normalized.join("\n")
}

fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

// split a single word into pieces no wider than `width`
fn chunk_word(word: &str, width: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut cur = String::new();
    let mut cur_w = 0usize;
    for c in word.chars() {
        let cw = char_width(c);
        if cur_w + cw > width && !cur.is_empty() {
            chunks.push(std::mem::take(&mut cur));
            cur_w = 0;
        }
        cur.push(c);
        cur_w += cw;
    }
    if !cur.is_empty() {
        chunks.push(cur);
    }
    chunks
}

/// Greedy word wrap on display width. Whitespace runs collapse to one space;
/// words wider than a line are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_w = 0usize;
    for word in text.split_whitespace() {
        let ww = UnicodeWidthStr::width(word);
        if ww > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            let mut chunks = chunk_word(word, width);
            line = chunks.pop().unwrap_or_default();
            line_w = UnicodeWidthStr::width(line.as_str());
            lines.extend(chunks);
            continue;
        }
        if !line.is_empty() && line_w + 1 + ww > width {
            lines.push(std::mem::take(&mut line));
            line_w = 0;
        }
        if !line.is_empty() {
            line.push(' ');
            line_w += 1;
        }
        line.push_str(word);
        line_w += ww;
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Rightmost part of `text` that fits in `width` columns.
pub fn fit_tail(text: &str, width: usize) -> String {
    let mut used = 0usize;
    let mut kept: Vec<char> = Vec::new();
    for c in text.chars().rev() {
        let cw = char_width(c);
        if used + cw > width {
            break;
        }
        used += cw;
        kept.push(c);
    }
    kept.into_iter().rev().collect()
}

/// Leftmost part of `text` that fits in `width` columns.
pub fn fit_head(text: &str, width: usize) -> String {
    let mut used = 0usize;
    text.chars()
        .take_while(|&c| {
            used += char_width(c);
            used <= width
        })
        .collect()
}
