use crate::api::MovieSummary;

// small constants reused by rendering code
pub const SEARCH_BLOCK_LINES: usize = 3;
pub const MODELINE_LINES: usize = 1;
pub const RESERVED_LINES: usize = SEARCH_BLOCK_LINES + MODELINE_LINES;
pub const DEFAULT_WIDTH: usize = 80;

#[derive(Clone, Debug, Default)]
pub struct Model {
    pub query: String,
    // at most one movie; replaced wholesale by every successful search
    pub results: Vec<MovieSummary>,
    pub history: Vec<String>,
    pub error: Option<String>,
    // single detail flag shared by every card
    pub show_more: bool,
    // latest issued sequence number per operation; older completions are stale
    pub search_seq: u64,
    pub history_seq: u64,
    pub search_pending: bool,
    pub history_pending: bool,
    // layout
    pub screen_width: usize,
    pub per_page: usize,
    pub scroll: usize,
}

pub fn initial_model() -> Model {
    Model::default()
}

impl Model {
    // wrapper update that delegates to the update module
    pub fn update(&mut self, msg: crate::ui::Msg) -> Option<crate::ui::Fetch> {
        crate::ui::update::handle_update(self, msg)
    }

    pub fn is_pending(&self) -> bool {
        self.search_pending || self.history_pending
    }

    pub fn mode(&self) -> String {
        if self.search_pending {
            return "Searching...".to_string();
        }
        if self.history_pending {
            return "Loading history...".to_string();
        }
        "Movie Search".to_string()
    }

    // Render helper wrappers that forward to the render module to keep this file focused on state.
    pub fn content_lines(&self) -> Vec<String> {
        crate::ui::render::content_lines(self)
    }
    pub fn max_scroll(&self) -> usize {
        self.content_lines().len().saturating_sub(self.per_page)
    }
    pub fn render_search_block(&self) -> Vec<String> {
        crate::ui::render::render_search_block(self)
    }
    pub fn render_main_content(&self) -> String {
        crate::ui::render::render_main_content(self)
    }
    pub fn render_full(&self) -> String {
        crate::ui::render::render_full(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Msg;

    #[test]
    fn test_mode_tracks_pending_requests() {
        let mut m = initial_model();
        assert_eq!(m.mode(), "Movie Search");
        assert!(!m.is_pending());

        m.query = "Heat".to_string();
        m.update(Msg::KeyEnter);
        assert_eq!(m.mode(), "Searching...");
        assert!(m.is_pending());

        m.update(Msg::SearchDone {
            seq: m.search_seq,
            result: Ok(None),
        });
        m.update(Msg::KeyCtrlR);
        assert_eq!(m.mode(), "Loading history...");
    }

    #[test]
    fn test_typing_and_backspace_edit_query() {
        let mut m = initial_model();
        for ch in "Alien".chars() {
            m.update(Msg::Rune(ch));
        }
        assert_eq!(m.query, "Alien");
        m.update(Msg::KeyBackspace);
        m.update(Msg::KeyBackspace);
        assert_eq!(m.query, "Ali");
        m.update(Msg::Rune(' '));
        assert_eq!(m.query, "Ali ");
    }

    #[test]
    fn test_max_scroll_depends_on_page_size() {
        let mut m = initial_model();
        m.history = (1..=30).map(|i| format!("query {i}")).collect();
        m.update(Msg::WindowSize {
            width: 60,
            height: 12,
        });
        assert_eq!(m.per_page, 12 - RESERVED_LINES);
        let total = m.content_lines().len();
        assert!(total > m.per_page);
        assert_eq!(m.max_scroll(), total - m.per_page);
    }
}
