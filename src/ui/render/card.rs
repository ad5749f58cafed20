use crate::api::MovieSummary;
use crate::ui::render::styles::{STYLE_DESC, STYLE_LABEL, STYLE_LINK, STYLE_TITLE};
use crate::ui::render::util::wrap;

/// Detail rows shown once a card is expanded, in display order.
pub fn detail_fields(movie: &MovieSummary) -> [(&'static str, &str); 8] {
    [
        ("IMDB Score", movie.rating.as_str()),
        ("Awards", movie.awards.as_str()),
        ("Released", movie.released.as_str()),
        ("Runtime", movie.runtime.as_str()),
        ("Genre", movie.genre.as_str()),
        ("Director", movie.director.as_str()),
        ("Writer", movie.writer.as_str()),
        ("Actors", movie.actors.as_str()),
    ]
}

// "Label: value" wrapped to width, with the label styled on the first line
fn field_lines(label: &str, value: &str, width: usize) -> Vec<String> {
    let prefix = format!("{label}:");
    wrap(&format!("{prefix} {value}"), width)
        .into_iter()
        .enumerate()
        .map(|(i, line)| match line.strip_prefix(&prefix) {
            Some(rest) if i == 0 => format!("{}{rest}", STYLE_LABEL.render(&prefix)),
            _ => line,
        })
        .collect()
}

/// Styled lines for one result card, wrapped to `width` columns.
pub fn card_lines(movie: &MovieSummary, show_more: bool, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = wrap(&movie.title, width)
        .iter()
        .map(|l| STYLE_TITLE.render(l))
        .collect();
    if !movie.poster.is_empty() {
        lines.extend(
            wrap(&format!("Poster: {}", movie.poster), width)
                .iter()
                .map(|l| STYLE_DESC.render(l)),
        );
    }
    lines.extend(wrap(&movie.plot, width));
    if show_more {
        for (label, value) in detail_fields(movie) {
            lines.extend(field_lines(label, value, width));
        }
        lines.push(STYLE_LINK.render("⇥ close"));
    } else {
        lines.push(STYLE_LINK.render("⇥ read more..."));
    }
    lines
}

/// Unstyled, fully expanded card used by one-shot output.
pub fn card_text(movie: &MovieSummary) -> String {
    let mut lines = vec![movie.title.clone()];
    if !movie.poster.is_empty() {
        lines.push(format!("Poster: {}", movie.poster));
    }
    if !movie.plot.is_empty() {
        lines.push(movie.plot.clone());
    }
    for (label, value) in detail_fields(movie) {
        lines.push(format!("{label}: {value}"));
    }
    lines.join("\n")
}
