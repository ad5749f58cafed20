use crate::api::{ApiError, MovieSummary, Operation};
use crate::ui::model::{Model, RESERVED_LINES};
use crate::ui::{Fetch, Msg};
use tracing::{debug, error, info};

pub fn handle_update(m: &mut Model, msg: Msg) -> Option<Fetch> {
    match msg {
        Msg::WindowSize { width, height } => handle_window_size(m, width, height),
        Msg::Rune(r) => m.query.push(r),
        Msg::KeyBackspace => {
            m.query.pop();
        }
        Msg::KeyEnter => return Some(begin_search(m)),
        Msg::KeyCtrlR => return Some(begin_history(m)),
        Msg::KeyTab => toggle_detail(m),
        Msg::KeyUp => m.scroll = m.scroll.min(m.max_scroll()).saturating_sub(1),
        Msg::KeyDown => m.scroll = (m.scroll + 1).min(m.max_scroll()),
        Msg::SearchDone { seq, result } => handle_search_done(m, seq, result),
        Msg::HistoryDone { seq, result } => handle_history_done(m, seq, result),
    }
    None
}

fn handle_window_size(m: &mut Model, width: usize, height: usize) {
    m.screen_width = width;
    m.per_page = height.saturating_sub(RESERVED_LINES);
    m.scroll = m.scroll.min(m.max_scroll());
}

pub fn toggle_detail(m: &mut Model) {
    m.show_more = !m.show_more;
}

fn begin_search(m: &mut Model) -> Fetch {
    m.search_seq += 1;
    m.search_pending = true;
    debug!(seq = m.search_seq, query = %m.query, "search issued");
    Fetch::Search {
        seq: m.search_seq,
        title: m.query.clone(),
    }
}

fn begin_history(m: &mut Model) -> Fetch {
    m.history_seq += 1;
    m.history_pending = true;
    debug!(seq = m.history_seq, "history fetch issued");
    Fetch::History {
        seq: m.history_seq,
    }
}

fn handle_search_done(m: &mut Model, seq: u64, result: Result<Option<MovieSummary>, ApiError>) {
    if seq != m.search_seq {
        debug!(seq, latest = m.search_seq, "dropping stale search response");
        return;
    }
    m.search_pending = false;
    match result {
        Ok(movie) => {
            info!(seq, found = movie.is_some(), "search succeeded");
            m.results = movie.into_iter().collect();
            m.show_more = false;
            m.scroll = 0;
            m.error = None;
        }
        Err(err) => fail(m, Operation::Search, &err),
    }
}

fn handle_history_done(m: &mut Model, seq: u64, result: Result<Vec<String>, ApiError>) {
    if seq != m.history_seq {
        debug!(seq, latest = m.history_seq, "dropping stale history response");
        return;
    }
    m.history_pending = false;
    match result {
        Ok(entries) => {
            info!(seq, entries = entries.len(), "history fetched");
            m.history = entries;
            m.error = None;
            m.scroll = m.scroll.min(m.max_scroll());
        }
        Err(err) => fail(m, Operation::History, &err),
    }
}

// Failures never touch results or history; they only replace the error line.
fn fail(m: &mut Model, op: Operation, err: &ApiError) {
    error!(operation = op.label(), error = %err, "request failed");
    m.error = Some(err.user_message(op.fallback()));
}
