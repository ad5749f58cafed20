use crate::ui::model::Model;

pub fn render_full(m: &Model) -> String {
    let mut lines = m.render_search_block();
    lines.extend(m.render_main_content().lines().map(str::to_string));
    let first_line = crate::ui::render::modeline::render_modeline_padded(m)
        .lines()
        .next()
        .unwrap_or("")
        .to_string();
    lines.push(first_line);
    lines.join("\n")
}
