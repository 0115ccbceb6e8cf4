//! Application state management.
//!
//! The App is the presentation shell around the session core: it owns the
//! session manager, one [`TabView`] per session, and the event loop that
//! turns key presses into session operations and finished commands into
//! output.

use std::io;

use anyhow::{Context, Result};
use crossterm::event::KeyEventKind;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc::{Receiver, UnboundedReceiver};
use tracing::debug;

use crate::config::Config;
use crate::event::input::{key_action, KeyAction};
use crate::event::{init_app_eventsource, init_user_event, AppEvent, UserEvent};
use crate::session::{SessionError, SessionId, SessionManager};
use crate::shell::CommandExecutor;
use crate::ui::{self, Palette, TabView};

/// What the entry line is currently collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Command,
    /// Typing a new working directory for the active tab.
    Directory,
}

pub struct App {
    // backend
    sessions: SessionManager,

    // frontend state
    tabs: Vec<TabView>, // never empty
    active: usize,
    mode: InputMode,
    directory_input: String,
    palette: Palette,

    exit: bool,

    // events sources
    user_events: Receiver<io::Result<UserEvent>>,
    app_events: UnboundedReceiver<AppEvent>,
}

impl App {
    /// Create the app with one open tab, reading keys from the terminal.
    pub fn new(config: Config) -> Self {
        Self::with_user_events(config, init_user_event())
    }

    /// Create the app with a custom source of user events.
    pub fn with_user_events(config: Config, user_events: Receiver<io::Result<UserEvent>>) -> Self {
        let (event_sink, app_events) = init_app_eventsource();
        let executor = CommandExecutor::new(config.shell, event_sink);

        let mut app = Self {
            sessions: SessionManager::new(executor),
            tabs: Vec::new(),
            active: 0,
            mode: InputMode::Command,
            directory_input: String::new(),
            palette: Palette::from_config(&config.palette),
            exit: false,
            user_events,
            app_events,
        };
        app.open_tab();
        app
    }

    pub fn tabs(&self) -> &[TabView] {
        &self.tabs
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn current_tab(&self) -> &TabView {
        &self.tabs[self.active]
    }

    fn current_tab_mut(&mut self) -> &mut TabView {
        &mut self.tabs[self.active]
    }

    fn current_session(&self) -> SessionId {
        self.current_tab().session_id
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn should_exit(&self) -> bool {
        self.exit
    }

    /// Text on the entry line for the current mode.
    pub fn input_text(&self) -> &str {
        match self.mode {
            InputMode::Command => &self.current_tab().input,
            InputMode::Directory => &self.directory_input,
        }
    }

    fn input_text_mut(&mut self) -> &mut String {
        match self.mode {
            InputMode::Command => &mut self.tabs[self.active].input,
            InputMode::Directory => &mut self.directory_input,
        }
    }

    /// Working directory of the active tab.
    pub fn working_directory(&self) -> String {
        self.sessions
            .get_session(self.current_session())
            .map(|s| s.working_directory)
            .unwrap_or_default()
    }

    /// Open a new tab with a fresh session and switch to it.
    pub fn open_tab(&mut self) -> SessionId {
        let id = self.sessions.create_session();
        self.tabs.push(TabView::new(id));
        self.select_tab(self.tabs.len() - 1);
        id
    }

    /// Close the active tab. The last tab always stays open.
    pub fn close_tab(&mut self) -> Result<(), SessionError> {
        if self.tabs.len() <= 1 {
            return Ok(());
        }
        self.sessions.close_session(self.current_session())?;
        self.tabs.remove(self.active);
        self.select_tab(self.active.min(self.tabs.len() - 1));
        Ok(())
    }

    pub fn select_tab(&mut self, index: usize) {
        if index < self.tabs.len() {
            self.active = index;
            self.leave_directory_prompt();
        }
    }

    fn next_tab(&mut self) {
        self.select_tab((self.active + 1) % self.tabs.len());
    }

    fn prev_tab(&mut self) {
        self.select_tab((self.active + self.tabs.len() - 1) % self.tabs.len());
    }

    fn leave_directory_prompt(&mut self) {
        self.mode = InputMode::Command;
        self.directory_input.clear();
    }

    /// Handle Enter on the entry line.
    pub fn submit(&mut self) -> Result<(), SessionError> {
        let id = self.current_session();
        match self.mode {
            InputMode::Command => {
                let command = std::mem::take(&mut self.current_tab_mut().input);
                // the result comes back as an AppEvent
                self.sessions.execute(id, &command)?;
            }
            InputMode::Directory => {
                let path = std::mem::take(&mut self.directory_input);
                match self.sessions.set_working_directory(id, &path) {
                    Ok(()) | Err(SessionError::EmptyPath) => {}
                    Err(e) => return Err(e),
                }
                self.leave_directory_prompt();
            }
        }
        Ok(())
    }

    pub fn history_up(&mut self) -> Result<(), SessionError> {
        if self.mode == InputMode::Command {
            let entry = self.sessions.navigate_up(self.current_session())?;
            self.current_tab_mut().input = entry;
        }
        Ok(())
    }

    pub fn history_down(&mut self) -> Result<(), SessionError> {
        if self.mode == InputMode::Command {
            let entry = self.sessions.navigate_down(self.current_session())?;
            self.current_tab_mut().input = entry;
        }
        Ok(())
    }

    /// Start the working directory prompt, prefilled with the current one.
    pub fn prompt_directory(&mut self) {
        self.directory_input = self.working_directory();
        self.mode = InputMode::Directory;
    }

    pub async fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        loop {
            if self.exit {
                break Ok(());
            }
            tokio::select! {
                res = self.user_events.recv() => {
                    let usr_evt =
                        res.with_context(|| anyhow::anyhow!("User event stream is ended."))?;
                    self.handle_user_event(usr_evt?)?;
                }
                res = self.app_events.recv() => {
                    let app_evt =
                        res.with_context(|| anyhow::anyhow!("App event stream is ended"))?;
                    self.handle_app_event(app_evt);
                }
            }
            self.draw(terminal)?;
        }
    }

    pub fn draw(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        terminal.draw(|frame| {
            let area = frame.area();
            use ratatui::widgets::Widget;
            (&*self).render(area, frame.buffer_mut());
            frame.set_cursor_position(ui::cursor_position(self, area));
        })?;
        Ok(())
    }
}

impl App {
    pub fn handle_user_event(&mut self, event: UserEvent) -> Result<()> {
        let key_evt = match event {
            UserEvent::Key(key_evt) if matches!(key_evt.kind, KeyEventKind::Press) => key_evt,
            _ => return Ok(()),
        };

        match key_action(&key_evt) {
            KeyAction::Insert(c) => self.input_text_mut().push(c),
            KeyAction::Backspace => {
                self.input_text_mut().pop();
            }
            KeyAction::Submit => self.submit().context("Failed to submit input")?,
            KeyAction::HistoryUp => self.history_up()?,
            KeyAction::HistoryDown => self.history_down()?,
            KeyAction::NewTab => {
                self.open_tab();
            }
            KeyAction::CloseTab => self.close_tab()?,
            KeyAction::NextTab => self.next_tab(),
            KeyAction::PrevTab => self.prev_tab(),
            KeyAction::SelectTab(index) => self.select_tab(index),
            KeyAction::PromptDirectory => self.prompt_directory(),
            KeyAction::Cancel => self.leave_directory_prompt(),
            KeyAction::Quit => self.exit = true,
            KeyAction::Ignore => {}
        }
        Ok(())
    }

    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::CommandFinished { session_id, result } => {
                match self.tabs.iter_mut().find(|t| t.session_id == session_id) {
                    Some(tab) => tab.apply(result),
                    None => debug!("Dropping result for closed session {}", session_id),
                }
            }
        }
    }
}
