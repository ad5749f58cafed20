// Render module split into focused submodules: search box, result card, scrollable content, modeline.

pub mod card;
pub mod content;
pub mod full;
pub mod modeline;
pub mod search;
pub mod styles;
pub mod util;

pub use card::{card_lines, card_text, detail_fields};
pub use content::{content_lines, render_main_content};
pub use full::render_full;
pub use modeline::{render_modeline, render_modeline_padded};
pub use search::render_search_block;
