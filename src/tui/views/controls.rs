//! Left panel: theme toggle, test-type selector, parameter limits and the
//! read-only test description.
//!
//! The selector behaves like a dropdown: closed it shows the active test,
//! `Enter`/`Space` opens the option list, `Enter` commits and `Esc` backs
//! out. Digits `1`-`5` pick an option directly while closed. With mouse
//! capture on, a left click on the toggle or the selector does the same as
//! its key.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    layout::{Constraint, Layout, Margin, Position, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

use super::super::events::Action;
use super::super::theme::{self, Palette};
use super::InputResult;
use crate::core::catalog::{TestDefinition, ACCEPTABLE_LIMITS, PERMISSIBLE_LIMITS, TEST_CATALOG};
use crate::core::format::format_with_unit;
use crate::core::selection::{lookup_limit, should_show_limits, UiSelectionState};

/// Rows used by the closed selector (borders + one line).
const SELECTOR_CLOSED_HEIGHT: u16 = 3;
/// Rows used by the limits block (borders + two lines).
const LIMITS_HEIGHT: u16 = 4;

// ── State ──────────────────────────────────────────────────────────────────

pub struct ControlsState {
    selector_open: bool,
    /// Highlighted option while the selector is open.
    cursor: usize,
    /// Hit areas from the last render, for mouse clicks.
    toggle_area: Rect,
    selector_area: Rect,
}

impl ControlsState {
    pub fn new() -> Self {
        Self {
            selector_open: false,
            cursor: 0,
            toggle_area: Rect::default(),
            selector_area: Rect::default(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.selector_open
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn handle_input(&mut self, event: &Event, selection: &UiSelectionState) -> InputResult {
        if let Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) = event
        {
            return self.handle_click(Position::new(*column, *row), selection);
        }

        let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            modifiers,
            ..
        }) = event
        else {
            return InputResult::Ignored;
        };

        if self.selector_open {
            self.handle_open(*modifiers, *code)
        } else {
            self.handle_closed(*modifiers, *code, selection)
        }
    }

    fn handle_closed(
        &mut self,
        mods: KeyModifiers,
        code: KeyCode,
        selection: &UiSelectionState,
    ) -> InputResult {
        match (mods, code) {
            (KeyModifiers::NONE, KeyCode::Enter | KeyCode::Char(' ')) => {
                self.selector_open = true;
                self.cursor = selection.active_index();
                InputResult::Consumed
            }
            (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='9')) => {
                let idx = (c as usize) - ('1' as usize);
                match TEST_CATALOG.get(idx) {
                    Some(test) => InputResult::Action(Action::SelectTest(test.id.to_string())),
                    None => InputResult::Ignored,
                }
            }
            _ => InputResult::Ignored,
        }
    }

    fn handle_open(&mut self, mods: KeyModifiers, code: KeyCode) -> InputResult {
        match (mods, code) {
            (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => {
                if self.cursor + 1 < TEST_CATALOG.len() {
                    self.cursor += 1;
                }
                InputResult::Consumed
            }
            (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
                InputResult::Consumed
            }
            (KeyModifiers::NONE, KeyCode::Enter | KeyCode::Char(' ')) => {
                self.selector_open = false;
                InputResult::Action(Action::SelectTest(TEST_CATALOG[self.cursor].id.to_string()))
            }
            (KeyModifiers::NONE, KeyCode::Esc) => {
                self.selector_open = false;
                InputResult::Consumed
            }
            // Swallow everything else so global keys don't fire under the list
            _ => InputResult::Consumed,
        }
    }

    fn handle_click(&mut self, at: Position, selection: &UiSelectionState) -> InputResult {
        if self.selector_open {
            let options = self.selector_area.inner(Margin::new(1, 1));
            self.selector_open = false;
            if options.contains(at) {
                let idx = usize::from(at.y - options.y);
                if let Some(test) = TEST_CATALOG.get(idx) {
                    return InputResult::Action(Action::SelectTest(test.id.to_string()));
                }
            }
            // Clicking anywhere else dismisses the list
            return InputResult::Consumed;
        }

        if self.toggle_area.contains(at) {
            InputResult::Action(Action::ToggleTheme)
        } else if self.selector_area.contains(at) {
            self.selector_open = true;
            self.cursor = selection.active_index();
            InputResult::Consumed
        } else {
            InputResult::Ignored
        }
    }

    // ── Rendering ──────────────────────────────────────────────────────────

    pub fn render(&mut self, frame: &mut Frame, area: Rect, selection: &UiSelectionState) {
        let palette = Palette::for_mode(selection.dark_mode);
        let active = selection.active_test();
        let show_limits = should_show_limits(active);

        frame.render_widget(Block::default().style(palette.panel()), area);

        let selector_height = if self.selector_open {
            TEST_CATALOG.len() as u16 + 2
        } else {
            SELECTOR_CLOSED_HEIGHT
        };
        let limits_height = if show_limits { LIMITS_HEIGHT } else { 0 };

        let chunks = Layout::vertical([
            Constraint::Length(1), // Theme toggle
            Constraint::Length(1),
            Constraint::Length(1), // Title
            Constraint::Length(1),
            Constraint::Length(1), // Selector label
            Constraint::Length(selector_height),
            Constraint::Length(limits_height),
            Constraint::Length(1),
            Constraint::Length(1), // Description label
            Constraint::Min(3),
        ])
        .split(area.inner(Margin::new(1, 0)));
        self.toggle_area = chunks[0];
        self.selector_area = chunks[5];

        let toggle = Line::from(vec![
            Span::styled(format!(" {} ", theme::toggle_label(selection.dark_mode)), palette.button()),
            Span::styled("  [t]", palette.muted()),
        ]);
        frame.render_widget(Paragraph::new(toggle), chunks[0]);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("Tests", palette.title()))),
            chunks[2],
        );
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("Select Test Type", palette.heading()))),
            chunks[4],
        );

        self.render_selector(frame, chunks[5], active, palette);

        if show_limits {
            render_limits(frame, chunks[6], active, palette);
        }

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("Test Description", palette.heading()))),
            chunks[8],
        );
        let description = Paragraph::new(active.description)
            .style(palette.panel())
            .wrap(Wrap { trim: true })
            .block(palette.panel_block("Description"));
        frame.render_widget(description, chunks[9]);
    }

    fn render_selector(
        &self,
        frame: &mut Frame,
        area: Rect,
        active: &TestDefinition,
        palette: &Palette,
    ) {
        let block = palette.panel_block("Test Type");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines: Vec<Line<'static>> = if self.selector_open {
            TEST_CATALOG
                .iter()
                .enumerate()
                .map(|(i, test)| {
                    if i == self.cursor {
                        Line::from(Span::styled(format!("\u{25b8} {}", test.name), palette.highlight()))
                    } else {
                        Line::from(Span::styled(format!("  {}", test.name), palette.panel()))
                    }
                })
                .collect()
        } else {
            vec![Line::from(vec![
                Span::styled(format!("\u{25be} {}", active.name), palette.panel()),
                Span::styled("  [Enter]", palette.muted()),
            ])]
        };

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

impl Default for ControlsState {
    fn default() -> Self {
        Self::new()
    }
}

fn render_limits(frame: &mut Frame, area: Rect, active: &TestDefinition, palette: &Palette) {
    let block = palette.panel_block("Parameter Limits");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line<'static>> = [&ACCEPTABLE_LIMITS, &PERMISSIBLE_LIMITS]
        .into_iter()
        .filter_map(|table| {
            let value = lookup_limit(table, active.key)?;
            Some(Line::from(vec![
                Span::styled(format!("{}: ", table.label), palette.muted()),
                Span::styled(format_with_unit(value, active.unit), palette.title()),
            ]))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

// ── Tests ──────────────────────────────────────────────────────────────────
