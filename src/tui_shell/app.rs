use std::io::{self, IsTerminal};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use time::OffsetDateTime;
use tokio::runtime::Runtime;

use crate::alerts::AlertPolicy;
use crate::deletion::{BlockerPolicy, ConfirmError};
use crate::remote::RemoteClient;
use crate::streams::{StreamsApi, StreamsController};
use crate::tui::TuiRunOptions;

use super::view;
use super::{CreateForm, Modal, ModalKind, modal};

pub(super) fn run(opts: TuiRunOptions) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("TUI requires an interactive terminal (TTY)");
    }

    let mut app = App::new(opts)?;
    app.refresh_all();

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    res
}

pub(super) struct App {
    pub(super) controller: StreamsController,
    api: StreamsApi,
    // Requests are awaited one at a time from the UI thread.
    runtime: Runtime,
    pub(super) base_url: String,
    pub(super) updated_at: Option<OffsetDateTime>,
    pub(super) modal: Option<Modal>,
    quit: bool,
}

impl App {
    fn new(opts: TuiRunOptions) -> Result<Self> {
        let cfg = opts.config;
        let client = RemoteClient::new(&cfg).context("create remote client")?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("start async runtime")?;
        Ok(Self {
            controller: StreamsController::new(
                BlockerPolicy::from_enforce(cfg.enforce_blockers),
                AlertPolicy::from_queue_len(cfg.alert_queue),
            ),
            api: StreamsApi::new(&client),
            runtime,
            base_url: cfg.base_url,
            updated_at: None,
            modal: None,
            quit: false,
        })
    }

    fn refresh_all(&mut self) {
        self.runtime.block_on(self.controller.load(&self.api));
        self.updated_at = Some(OffsetDateTime::now_utc());
    }

    fn refresh_streams(&mut self) {
        self.runtime
            .block_on(self.controller.refresh_streams(&self.api));
        self.updated_at = Some(OffsetDateTime::now_utc());
    }

    fn move_selection(&mut self, down: bool) {
        let c = &mut self.controller;
        if c.streams.is_empty() {
            return;
        }
        let pos = c.streams.iter().position(|s| c.is_selected(&s.name));
        let next = match (pos, down) {
            (None, _) => 0,
            (Some(i), true) => (i + 1).min(c.streams.len() - 1),
            (Some(i), false) => i.saturating_sub(1),
        };
        let name = c.streams[next].name.clone();
        c.select(&name);
    }

    fn open_service_info(&mut self) {
        let Some(service) = self
            .controller
            .current_stream()
            .map(|s| s.service.clone())
            .filter(|s| !s.is_empty())
        else {
            return;
        };
        self.runtime
            .block_on(self.controller.inspect_service(&self.api, &service));
        let Some(info) = &self.controller.inspected_service else {
            if let Some(err) = &self.controller.last_error {
                self.controller.alerts.danger(err.clone());
            }
            return;
        };
        let mut lines = vec![
            format!("name: {}", info.name),
            format!("type: {}", info.service_type),
        ];
        if let Some(desc) = &info.description {
            lines.push(format!("description: {}", desc));
        }
        if let Some(provider) = &info.provider {
            lines.push(format!("provider: {}", provider));
        }
        for (key, value) in &info.extra {
            match value.as_str() {
                Some(s) => lines.push(format!("{}: {}", key, s)),
                None => lines.push(format!("{}: {}", key, value)),
            }
        }
        self.modal = Some(Modal::viewer(format!("Service {}", info.name), lines));
    }

    fn open_delete(&mut self) {
        let Some(name) = self.controller.current.clone() else {
            return;
        };
        let policy = self.controller.deletion.policy();
        let pending = self
            .runtime
            .block_on(self.controller.begin_delete(&self.api, &name))
            .cloned();
        let Some(pending) = pending else {
            return;
        };

        let mut lines = vec![format!("Delete stream '{}'?", name), String::new()];
        if pending.blockers.is_empty() {
            lines.push("No instances use this stream.".to_string());
        } else {
            lines.push("Used by:".to_string());
            lines.extend(pending.blockers.iter().map(|b| format!("  {}", b)));
            lines.push(String::new());
            lines.push(match policy {
                BlockerPolicy::Advisory => "These instances may stop working.".to_string(),
                BlockerPolicy::Enforce => "Delete the instances first.".to_string(),
            });
        }
        self.modal = Some(Modal {
            title: "Delete stream".to_string(),
            lines,
            scroll: 0,
            kind: ModalKind::ConfirmDelete,
        });
    }

    pub(super) fn confirm_delete(&mut self) {
        let result = self
            .runtime
            .block_on(self.controller.confirm_delete(&self.api));
        match result {
            Ok(_) => self.updated_at = Some(OffsetDateTime::now_utc()),
            Err(err @ ConfirmError::Blocked { .. }) => {
                self.controller.alerts.danger(err.to_string());
                self.controller.cancel_delete();
            }
            Err(ConfirmError::NotConfirming) => {}
        }
        self.modal = None;
    }

    pub(super) fn cancel_delete(&mut self) {
        self.controller.cancel_delete();
        self.modal = None;
    }

    pub(super) fn open_create(&mut self) {
        self.controller.reset_draft();
        if self.controller.types.is_empty() {
            self.runtime
                .block_on(self.controller.refresh_types(&self.api));
        }
        self.modal = Some(Modal {
            title: "New stream".to_string(),
            lines: Vec::new(),
            scroll: 0,
            kind: ModalKind::CreateStream(CreateForm::default()),
        });
    }

    pub(super) fn submit_create(&mut self) {
        let Some(Modal {
            kind: ModalKind::CreateStream(form),
            ..
        }) = self.modal.as_ref()
        else {
            return;
        };
        let c = &mut self.controller;
        if let Err(msg) = form.apply_to(&mut c.draft, &c.types, &c.services) {
            c.alerts.danger(msg);
            return;
        }
        if self.runtime.block_on(c.create_stream(&self.api)).is_ok() {
            self.modal = None;
            self.updated_at = Some(OffsetDateTime::now_utc());
        }
    }

    /// Closing the create form discards what was typed into it.
    pub(super) fn close_modal(&mut self) {
        if let Some(Modal {
            kind: ModalKind::CreateStream(_),
            ..
        }) = self.modal.take()
        {
            self.controller.reset_draft();
        }
    }

    fn dismiss_latest_alert(&mut self) {
        let len = self.controller.alerts.len();
        if len > 0 {
            self.controller.alerts.dismiss(len - 1);
        }
    }
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.controller.alerts.expire(Instant::now());

        terminal.draw(|f| view::draw(f, app)).context("draw")?;
        if app.quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(100)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => handle_key(app, k),
                _ => {}
            }
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if app.modal.is_some() {
        modal::handle_modal_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(false),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(true),
        KeyCode::Char('r') => app.refresh_streams(),
        KeyCode::Char('R') => app.refresh_all(),
        KeyCode::Char('n') => app.open_create(),
        KeyCode::Char('d') | KeyCode::Delete => app.open_delete(),
        KeyCode::Char('s') | KeyCode::Enter => app.open_service_info(),
        KeyCode::Char('x') => app.dismiss_latest_alert(),
        _ => {}
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/app_tests.rs"]
mod tests;
