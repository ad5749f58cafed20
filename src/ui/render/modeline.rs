use crate::ui::model::{DEFAULT_WIDTH, Model};
use crate::ui::render::styles::STYLE_MODELINE;
use lipgloss::Color;

pub fn render_modeline(m: &Model, inner_max: usize, mode: &str, total_lines: usize) -> String {
    // Build styled pairs, compute plain widths, and fit the scroll position into available space.
    let per = if m.per_page == 0 { total_lines } else { m.per_page };
    let max_scroll = total_lines.saturating_sub(per);

    // prepare inner styles without padding so spacing is under our control
    let inner_style = STYLE_MODELINE.clone().padding(0, 0, 0, 0);
    let key_style = STYLE_MODELINE
        .clone()
        .foreground(Color::from_rgb(238, 0, 238))
        .bold(true)
        .padding(0, 0, 0, 0);
    let desc_style = STYLE_MODELINE.clone().padding(0, 0, 0, 0);
    let pos_style = STYLE_MODELINE.clone().faint(true).padding(0, 0, 0, 0);

    let detail = if m.show_more { "less" } else { "more" };
    // key/description pairs definitions
    let pairs_def: Vec<(&str, &str)> = vec![
        ("⏎", "search"),
        ("⇥", detail),
        ("^R", "history"),
        ("⎋", "quit"),
    ];

    // Build rendered pairs and their plain widths in one pass
    let pairs: Vec<(String, usize)> = pairs_def
        .iter()
        .map(|(k, d)| {
            let plain_len = d.chars().count() + 1 + k.chars().count();
            let rendered = format!(
                "{}{}{}",
                desc_style.render(d),
                inner_style.render(":"),
                key_style.render(k)
            );
            (rendered, plain_len)
        })
        .collect();

    let pair_sep_rendered = inner_style.render("  ");
    let pair_sep_width = 2usize;

    // scroll position, only when the content does not fit
    let mut pos_plain = String::new();
    let mut pos_rendered = String::new();
    let offset = m.scroll.min(max_scroll);
    if max_scroll > 0 {
        pos_plain = format!("Ln {}/{} ↑/↓", offset + 1, max_scroll + 1);
        let arrows = format!("{}/{}", key_style.render("↑"), key_style.render("↓"));
        let pos_unstyled = format!("Ln {}/{} ", offset + 1, max_scroll + 1);
        pos_rendered = pos_style.render(&format!("{pos_unstyled}{arrows}"));
    }
    let mut pos_width = pos_plain.chars().count();

    let joined = |count: usize| -> (String, usize) {
        if count == 0 {
            return (String::new(), 0);
        }
        let rendered = pairs
            .iter()
            .take(count)
            .map(|(r, _)| r.clone())
            .collect::<Vec<_>>()
            .join(&pair_sep_rendered);
        let width =
            pairs.iter().take(count).map(|(_, w)| *w).sum::<usize>() + pair_sep_width * (count - 1);
        (rendered, width)
    };

    let mut pairs_count = pairs.len();
    let (mut left_joined_rendered, mut left_width) = joined(pairs_count);

    // mode and separator widths (mode has padding of 2 chars in modeStyle)
    let mode_len = mode.chars().count();
    let mode_padding = 2usize; // Padding(0,1) adds 1 left + 1 right
    let mode_w = mode_len + mode_padding;
    let sep_w = " | ".chars().count();

    let avail = if inner_max > mode_w + sep_w {
        inner_max - mode_w - sep_w
    } else {
        0
    };

    // drop rightmost pairs until left + position fits into avail
    while pairs_count > 0 && left_width + pos_width > avail {
        pairs_count -= 1;
        (left_joined_rendered, left_width) = joined(pairs_count);
    }

    // if still doesn't fit, shorten the position to just "Ln X/Y"
    if left_width + pos_width > avail && !pos_plain.is_empty() {
        let short_pos = format!("Ln {}/{}", offset + 1, max_scroll + 1);
        pos_width = short_pos.chars().count();
        pos_rendered = pos_style.render(&short_pos);
    }

    // compute filler width (subtract 2 to keep spacing consistent)
    let pad = if avail > left_width + pos_width + 2 {
        avail - left_width - pos_width - 2
    } else {
        0
    };
    let filler = if pad > 0 {
        STYLE_MODELINE.clone().width(pad as i32).render("")
    } else {
        String::new()
    };

    let footer_inner = format!("{left_joined_rendered}{filler}{pos_rendered}");

    let mode_style = STYLE_MODELINE
        .clone()
        .background(Color::from_rgb(101, 101, 101))
        .padding(0, 1, 0, 1)
        .bold(true);
    let mode_styled = mode_style.render(mode);

    // Indicator: '*' while a request is outstanding, '-' when idle.
    let indicator_char = if m.is_pending() { "*" } else { "-" };
    let indicator_style = STYLE_MODELINE.clone().faint(true).padding(0, 1, 0, 1);
    let indicator_styled = indicator_style.render(indicator_char);

    let sep_styled = inner_style.render(" | ");
    let rest_content = format!("{sep_styled}{footer_inner}");

    let trailing_pad = STYLE_MODELINE.render(" ");

    format!("{indicator_styled}{mode_styled}{rest_content}{trailing_pad}")
}

pub fn render_modeline_padded(m: &Model) -> String {
    let total_width = if m.screen_width > 0 {
        m.screen_width
    } else {
        DEFAULT_WIDTH
    };
    let inner_max = total_width.saturating_sub(3);
    let total_lines = m.content_lines().len();
    let mode = m.mode();
    let modeline = render_modeline(m, inner_max, &mode, total_lines);
    let modeline_single = modeline.replace('\n', " ");
    STYLE_MODELINE
        .clone()
        .width(total_width as i32)
        .render(&modeline_single)
}
