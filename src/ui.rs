// UI module root: state lives in `model`, transitions in `update`, output in `render`.

pub mod model;
pub mod render;
pub mod run;
pub mod update;

use crate::api::{ApiError, MovieSummary};

pub use model::{Model, initial_model};
pub use render::{render_full, render_main_content, render_modeline_padded, render_search_block};
pub use run::{OneShot, perform, run_interactive, run_once};
pub use update::handle_update;

// Messages used by the update logic
#[derive(Debug)]
pub enum Msg {
    WindowSize { width: usize, height: usize },
    Rune(char),
    KeyBackspace,
    /// Search for the current query.
    KeyEnter,
    /// Toggle the detail section of the result card.
    KeyTab,
    /// Fetch the search history.
    KeyCtrlR,
    KeyUp,
    KeyDown,
    SearchDone {
        seq: u64,
        result: Result<Option<MovieSummary>, ApiError>,
    },
    HistoryDone {
        seq: u64,
        result: Result<Vec<String>, ApiError>,
    },
}

/// A request the model wants performed. The runtime answers it with the
/// matching `*Done` message carrying the same `seq`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fetch {
    Search { seq: u64, title: String },
    History { seq: u64 },
}

impl Fetch {
    /// The completion message reporting `err` for this request.
    pub fn fail(self, err: ApiError) -> Msg {
        match self {
            Fetch::Search { seq, .. } => Msg::SearchDone {
                seq,
                result: Err(err),
            },
            Fetch::History { seq } => Msg::HistoryDone {
                seq,
                result: Err(err),
            },
        }
    }
}
