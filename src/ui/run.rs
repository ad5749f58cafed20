use crate::api::{ApiClient, ApiError};
use crate::ui::model::{Model, initial_model};
use crate::ui::render::card_text;
use crate::ui::{Fetch, Msg};
use anyhow::anyhow;
use bubbletea_rs::{
    Program, command::Cmd, event::KeyMsg, event::WindowSizeMsg, model::Model as TeaModel,
    window_size,
};
use crossterm::event::{KeyCode, KeyModifiers};
use once_cell::sync::OnceCell;
use tracing::warn;

// `TeaModel::init` takes no arguments, so the client is handed over through here.
static CLIENT: OnceCell<ApiClient> = OnceCell::new();

/// Performs one request and wraps the outcome in the matching completion message.
pub async fn perform(client: &ApiClient, fetch: Fetch) -> Msg {
    match fetch {
        Fetch::Search { seq, title } => Msg::SearchDone {
            seq,
            result: client.search(&title).await,
        },
        Fetch::History { seq } => Msg::HistoryDone {
            seq,
            result: client.search_history().await,
        },
    }
}

/// Non-interactive jobs run from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OneShot {
    Search(String),
    History,
}

// Drive the same model the TUI uses through a single request/response cycle.
pub async fn run_once(client: &ApiClient, job: OneShot) -> Result<String, String> {
    let mut m = initial_model();
    let is_search = matches!(job, OneShot::Search(_));
    let fetch = match job {
        OneShot::Search(title) => {
            m.query = title;
            m.update(Msg::KeyEnter)
        }
        OneShot::History => m.update(Msg::KeyCtrlR),
    };
    if let Some(fetch) = fetch {
        let done = perform(client, fetch).await;
        m.update(done);
    }
    if let Some(err) = m.error {
        return Err(err);
    }
    if is_search {
        Ok(m
            .results
            .iter()
            .map(card_text)
            .collect::<Vec<_>>()
            .join("\n\n"))
    } else {
        Ok(m.history.join("\n"))
    }
}

// Adapter type implementing bubbletea-rs Model trait by delegating to our Model
struct TeaAdapter {
    inner: Model,
    client: Option<ApiClient>,
}

impl TeaAdapter {
    fn dispatch(&mut self, msg: Msg) -> Option<Cmd> {
        let fetch = self.inner.update(msg)?;
        let Some(client) = self.client.clone() else {
            // nothing can be sent; answer the request with a failure right away
            let failed = fetch.fail(ApiError::Request("api client not initialised".to_string()));
            return self.dispatch(failed);
        };
        let cmd: Cmd = Box::pin(async move {
            let done = perform(&client, fetch).await;
            Some(Box::new(done) as bubbletea_rs::event::Msg)
        });
        Some(cmd)
    }

    fn handle_key(&mut self, km: &KeyMsg) -> Option<Cmd> {
        // Normalize and handle global quit keys first for reliability across terminals:
        match &km.key {
            KeyCode::Esc => return Some(bubbletea_rs::quit()),
            KeyCode::Char(ch) => {
                if *ch == '\u{1b}' || *ch == '\u{03}' {
                    // Esc / Ctrl-C delivered as raw control chars
                    return Some(bubbletea_rs::quit());
                }
                if *ch == '\u{12}' {
                    // Ctrl-R delivered as DC2
                    return self.dispatch(Msg::KeyCtrlR);
                }
            }
            _ => {}
        }

        match &km.key {
            KeyCode::Enter => self.dispatch(Msg::KeyEnter),
            KeyCode::Tab => self.dispatch(Msg::KeyTab),
            KeyCode::Backspace => self.dispatch(Msg::KeyBackspace),
            KeyCode::Up => self.dispatch(Msg::KeyUp),
            KeyCode::Down => self.dispatch(Msg::KeyDown),
            KeyCode::Char(ch) => {
                if km.modifiers.contains(KeyModifiers::CONTROL) {
                    match ch {
                        'c' | 'C' => Some(bubbletea_rs::quit()),
                        'r' | 'R' => self.dispatch(Msg::KeyCtrlR),
                        'n' | 'N' => self.dispatch(Msg::KeyDown),
                        'p' | 'P' => self.dispatch(Msg::KeyUp),
                        _ => None,
                    }
                } else {
                    self.dispatch(Msg::Rune(*ch))
                }
            }
            _ => None,
        }
    }
}

impl TeaModel for TeaAdapter {
    fn init() -> (Self, Option<Cmd>) {
        let client = CLIENT.get().cloned();
        let mut adapter = TeaAdapter {
            inner: initial_model(),
            client,
        };
        let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
        adapter.inner.update(Msg::WindowSize {
            width: width as usize,
            height: height as usize,
        });
        (adapter, Some(window_size()))
    }

    fn update(&mut self, msg: bubbletea_rs::event::Msg) -> Option<Cmd> {
        // Map bubbletea-rs Msg types to our ui::Msg and call update
        if let Some(km) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(km);
        }
        if let Some(ws) = msg.downcast_ref::<WindowSizeMsg>() {
            return self.dispatch(Msg::WindowSize {
                width: ws.width as usize,
                height: ws.height as usize,
            });
        }
        // completions of our own requests
        if let Ok(done) = msg.downcast::<Msg>() {
            return self.dispatch(*done);
        }
        None
    }

    fn view(&self) -> String {
        self.inner.render_full()
    }
}

/// Runs the full-screen program until the user quits.
pub async fn run_interactive(client: ApiClient) -> anyhow::Result<()> {
    if CLIENT.set(client).is_err() {
        warn!("api client already initialised, keeping the existing one");
    }
    let program = Program::<TeaAdapter>::builder()
        .alt_screen(true)
        .signal_handler(true)
        .build()
        .map_err(|e| anyhow!("failed to build program: {e:?}"))?;
    program
        .run()
        .await
        .map_err(|e| anyhow!("program error: {e:?}"))?;
    Ok(())
}
