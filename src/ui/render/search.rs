use crate::ui::model::{DEFAULT_WIDTH, Model, SEARCH_BLOCK_LINES};
use crate::ui::render::styles::{STYLE_CURSOR, STYLE_DESC, STYLE_PROMPT, STYLE_QUERY, STYLE_SEARCH_BOX};
use crate::ui::render::util::{fit_head, fit_tail};

const PLACEHOLDER: &str = "Enter movie title";

// "> " prompt, one cursor cell and the box's horizontal padding
const INPUT_CHROME: usize = 5;

pub fn render_search_block(m: &Model) -> Vec<String> {
    let box_width = if m.screen_width > 0 {
        m.screen_width.saturating_sub(2)
    } else {
        DEFAULT_WIDTH
    };
    let room = box_width.saturating_sub(INPUT_CHROME);
    let cursor = STYLE_CURSOR.render(" ");
    let input = if m.query.is_empty() {
        format!("{cursor}{}", STYLE_DESC.render(&fit_head(PLACEHOLDER, room)))
    } else {
        // keep the end of the query visible while typing
        format!("{}{cursor}", STYLE_QUERY.render(&fit_tail(&m.query, room)))
    };
    let inner = format!("{} {input}", STYLE_PROMPT.render(">"));
    let w_i32: i32 = box_width.try_into().unwrap_or(i32::MAX);
    let block = STYLE_SEARCH_BOX.clone().width(w_i32).render(&inner);
    let mut out: Vec<String> = block.lines().map(|s| s.to_string()).collect();
    // Ensure the block occupies exactly SEARCH_BLOCK_LINES lines by truncating or padding with empty lines.
    out.truncate(SEARCH_BLOCK_LINES);
    while out.len() < SEARCH_BLOCK_LINES {
        out.push(String::new());
    }
    out
}
