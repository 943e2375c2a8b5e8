use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use super::events::{Action, AppEvent, Notification, NotificationLevel};
use super::layout::AppLayout;
use super::theme::{self, Palette};
use super::views::controls::ControlsState;
use super::views::readings::ReadingsState;
use super::views::InputResult;
use crate::config::AppConfig;
use crate::core::selection::{resolve_active_test, UiSelectionState};

/// Central application state (Elm architecture).
pub struct AppState {
    /// Whether the app is still running.
    pub running: bool,
    /// Selected test and theme flag for this session.
    selection: UiSelectionState,
    /// Left panel: selector, limits, description.
    controls: ControlsState,
    /// Right panel: readings table.
    readings: ReadingsState,
    /// Active notifications (max 3 visible).
    notifications: Vec<Notification>,
    /// Monotonic counter for notification IDs.
    notification_counter: u64,
    notification_ticks: u32,
    /// Whether the help modal is open.
    pub show_help: bool,
    /// Receiver for internal events.
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    /// Sender for pushing events from within the app.
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let selection = config.dashboard.initial_selection();
        log::info!(
            "Dashboard session started: test={} dark_mode={}",
            selection.active_test().id,
            selection.dark_mode
        );
        Self {
            running: true,
            selection,
            controls: ControlsState::new(),
            readings: ReadingsState::new(),
            notifications: Vec::new(),
            notification_counter: 0,
            notification_ticks: config.dashboard.notification_ticks,
            show_help: false,
            event_rx,
            event_tx,
        }
    }

    pub fn selection(&self) -> &UiSelectionState {
        &self.selection
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Handle for queueing events from outside the loop.
    pub fn event_sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.event_tx.clone()
    }

    // ── Elm event loop ──────────────────────────────────────────────────

    /// Main event loop: render → select → update → loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> io::Result<()> {
        let mut tick_interval = tokio::time::interval(tick_rate);
        let mut event_stream = EventStream::new();

        while self.running {
            // Render
            terminal.draw(|frame| self.render(frame))?;

            // Select next event
            tokio::select! {
                _ = tick_interval.tick() => {
                    self.handle_event(AppEvent::Tick);
                }
                Some(event) = self.event_rx.recv() => {
                    self.handle_event(event);
                }
                Some(Ok(crossterm_event)) = event_stream.next() => {
                    self.handle_event(AppEvent::Input(crossterm_event));
                }
            }
        }

        log::info!("Dashboard session ended");
        Ok(())
    }

    // ── Event handling ──────────────────────────────────────────────────

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(crossterm_event) => {
                // Priority 1: Help modal
                if self.show_help {
                    if let Some(action) = self.map_help_input(&crossterm_event) {
                        self.handle_action(action);
                    }
                    return;
                }

                // Priority 2: Selector (an open dropdown swallows everything)
                match self.controls.handle_input(&crossterm_event, &self.selection) {
                    InputResult::Consumed => return,
                    InputResult::Action(action) => {
                        self.handle_action(action);
                        return;
                    }
                    InputResult::Ignored => {}
                }

                // Priority 3: Readings table
                if self.readings.handle_input(&crossterm_event) != InputResult::Ignored {
                    return;
                }

                // Priority 4: Global keybindings
                if let Some(action) = self.map_input_to_action(&crossterm_event) {
                    self.handle_action(action);
                }
            }
            AppEvent::Action(action) => self.handle_action(action),
            AppEvent::Tick => self.on_tick(),
            AppEvent::Quit => {
                self.running = false;
            }
        }
    }

    // ── Input mapping ───────────────────────────────────────────────────

    /// Map help modal input to action.
    fn map_help_input(&self, event: &Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };
        match code {
            KeyCode::Esc | KeyCode::Char('?') => Some(Action::CloseHelp),
            _ => None,
        }
    }

    fn map_input_to_action(&self, event: &Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };

        match (*modifiers, *code) {
            // Ctrl+C → quit
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, code) => match code {
                KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Char('?') => Some(Action::ShowHelp),
                KeyCode::Char('t') => Some(Action::ToggleTheme),
                _ => None,
            },
            _ => None,
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::ShowHelp => self.show_help = true,
            Action::CloseHelp => self.show_help = false,
            Action::ToggleTheme => {
                self.selection.toggle_theme();
                let mode = if self.selection.dark_mode { "dark" } else { "light" };
                log::debug!("Theme switched to {mode} mode");
                self.push_notification(format!("Switched to {mode} mode"), NotificationLevel::Info);
            }
            Action::SelectTest(id) => {
                if id == self.selection.selected_test_id {
                    return;
                }
                self.selection.select_test(&id);
                let active = resolve_active_test(&id);
                if active.id != id {
                    log::warn!("Unknown test id {id:?}; showing {}", active.name);
                } else {
                    tracing::debug!(test = active.id, key = %active.key, "selected test");
                }
                self.push_notification(
                    format!("Showing {}", active.name),
                    NotificationLevel::Success,
                );
            }
        }
    }

    // ── Notifications ───────────────────────────────────────────────────

    fn push_notification(&mut self, message: String, level: NotificationLevel) {
        if self.notification_ticks == 0 {
            return;
        }
        self.notification_counter += 1;
        self.notifications.push(Notification {
            id: self.notification_counter,
            message,
            level,
            ttl_ticks: self.notification_ticks,
        });
        if self.notifications.len() > 3 {
            self.notifications.remove(0);
        }
    }

    /// Tick: decrement notification TTLs, dismiss expired.
    fn on_tick(&mut self) {
        for n in &mut self.notifications {
            n.ttl_ticks = n.ttl_ticks.saturating_sub(1);
        }
        self.notifications.retain(|n| n.ttl_ticks > 0);
    }

    // ── Rendering ───────────────────────────────────────────────────────

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let layout = AppLayout::compute(area);

        self.controls.render(frame, layout.controls, &self.selection);
        self.readings.render(frame, layout.readings, &self.selection);
        self.render_status_bar(frame, layout.status);

        // Overlays
        self.render_notifications(frame, layout.controls);

        if self.show_help {
            self.render_help_modal(frame, area);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let palette = Palette::for_mode(self.selection.dark_mode);
        let active = self.selection.active_test();
        let mode = if self.selection.dark_mode { "dark" } else { "light" };

        let status = Line::from(vec![
            Span::styled(" WATER TESTS ", palette.brand_badge()),
            Span::raw(" "),
            Span::styled(active.name, palette.key_hint()),
            Span::raw(" │ "),
            Span::raw(mode),
            Span::raw(" │ "),
            Span::styled("Enter", palette.key_hint()),
            Span::raw(":select "),
            Span::styled("1-5", palette.key_hint()),
            Span::raw(":test "),
            Span::styled("t", palette.key_hint()),
            Span::raw(":theme "),
            Span::styled("?", palette.key_hint()),
            Span::raw(":help "),
            Span::styled("q", palette.key_hint()),
            Span::raw(":quit"),
        ]);

        frame.render_widget(Paragraph::new(status).style(palette.content()), area);
    }

    /// Toasts sit at the bottom of the controls panel, above the description
    /// block's lower border, so the readings table is never covered.
    fn render_notifications(&self, frame: &mut Frame, controls: Rect) {
        if self.notifications.is_empty() {
            return;
        }

        let max_width = 40.min(controls.width.saturating_sub(2));
        let height = (self.notifications.len() as u16).min(controls.height.saturating_sub(1));
        let x = controls.x + 1;
        let y = (controls.y + controls.height).saturating_sub(1 + height).max(controls.y);

        let notification_area = Rect::new(x, y, max_width, height);

        let lines: Vec<Line> = self
            .notifications
            .iter()
            .map(|n| {
                let (prefix, color) = match n.level {
                    NotificationLevel::Info => ("ℹ", theme::INFO),
                    NotificationLevel::Success => ("✓", theme::SUCCESS),
                };
                Line::from(vec![
                    Span::styled(format!(" {prefix} "), Style::default().fg(color).add_modifier(Modifier::BOLD)),
                    Span::raw(n.message.as_str()),
                ])
            })
            .collect();

        frame.render_widget(Clear, notification_area);
        frame.render_widget(Paragraph::new(lines), notification_area);
    }

    fn render_help_modal(&self, frame: &mut Frame, area: Rect) {
        let palette = Palette::for_mode(self.selection.dark_mode);
        let modal = centered_rect(60, 70, area);

        let keybindings = [
            ("Global:", ""),
            ("q / Ctrl+C", "Quit"),
            ("?", "Toggle this help"),
            ("t", "Switch dark / light mode"),
            ("", ""),
            ("Test selector:", ""),
            ("Enter / Space", "Open selector / choose highlighted"),
            ("j/k", "Move highlight"),
            ("Esc", "Close without changing"),
            ("1-5", "Pick a test directly"),
            ("", ""),
            ("Readings table:", ""),
            ("j/k", "Highlight location"),
            ("Esc", "Clear highlight"),
        ];

        let mut lines = vec![
            Line::raw(""),
            Line::from(Span::styled(" Keybindings", palette.title())),
            Line::raw(""),
        ];

        for (key, desc) in keybindings {
            if key.is_empty() {
                lines.push(Line::raw(""));
            } else if desc.is_empty() {
                lines.push(Line::from(Span::styled(format!("  {key}"), palette.title())));
            } else {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(format!("{:<16}", key), palette.key_hint()),
                    Span::raw(desc),
                ]));
            }
        }

        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::raw("  Press "),
            Span::styled("?", palette.key_hint()),
            Span::raw(" or "),
            Span::styled("Esc", palette.key_hint()),
            Span::raw(" to close"),
        ]));

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent))
            .style(palette.panel());

        frame.render_widget(Clear, modal);
        frame.render_widget(Paragraph::new(lines).block(block), modal);
    }
}

/// Calculate a centered rect using percentage of parent area.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
