use crate::ui::model::{DEFAULT_WIDTH, Model};
use crate::ui::render::card::card_lines;
use crate::ui::render::styles::{STYLE_DESC, STYLE_ERROR, STYLE_LABEL, STYLE_LINENUM};
use crate::ui::render::util::{normalize_and_pad, wrap};

pub fn content_width(m: &Model) -> usize {
    if m.screen_width > 0 {
        m.screen_width
    } else {
        DEFAULT_WIDTH
    }
}

fn history_lines(m: &Model, width: usize) -> Vec<String> {
    if m.history.is_empty() {
        return wrap("Press ^R to load your search history.", width)
            .iter()
            .map(|l| STYLE_DESC.render(l))
            .collect();
    }
    let mut lines = vec![STYLE_LABEL.render("Search history")];
    let gutter = m.history.len().to_string().len();
    // gutter " NN │ " eats gutter + 4 columns
    let text_width = width.saturating_sub(gutter + 4).max(1);
    for (i, entry) in m.history.iter().enumerate() {
        for (j, part) in wrap(entry, text_width).iter().enumerate() {
            let num = if j == 0 {
                format!("{:>gutter$}", i + 1)
            } else {
                " ".repeat(gutter)
            };
            lines.push(format!("{} {part}", STYLE_LINENUM.render(&format!(" {num} │"))));
        }
    }
    lines
}

/// Every line of the scrollable area, before scrolling and padding.
pub fn content_lines(m: &Model) -> Vec<String> {
    // one column of margin on each side
    let width = content_width(m).saturating_sub(2).max(1);
    let mut lines: Vec<String> = Vec::new();

    if let Some(err) = &m.error {
        lines.extend(wrap(err, width).iter().map(|l| STYLE_ERROR.render(l)));
        lines.push(String::new());
    }

    if m.results.is_empty() {
        lines.extend(
            wrap("Type a title and press ⏎ to search.", width)
                .iter()
                .map(|l| STYLE_DESC.render(l)),
        );
    }
    for movie in &m.results {
        lines.extend(card_lines(movie, m.show_more, width));
    }

    lines.push(String::new());
    lines.extend(history_lines(m, width));

    lines.into_iter().map(|l| format!(" {l}")).collect()
}

pub fn render_main_content(m: &Model) -> String {
    let lines = content_lines(m);
    let per = m.per_page;
    let offset = m.scroll.min(lines.len().saturating_sub(per));
    let visible: Vec<String> = lines.into_iter().skip(offset).collect();
    normalize_and_pad(visible, content_width(m), per)
}
