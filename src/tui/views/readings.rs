//! Right panel: location/value table for the active test.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Cell, Row, Table, TableState},
    Frame,
};

use super::super::theme::Palette;
use super::InputResult;
use crate::core::catalog::{LocationReading, LOCATIONS};
use crate::core::format::format_with_unit;
use crate::core::selection::{project_readings, UiSelectionState};

pub struct ReadingsState {
    locations: &'static [LocationReading],
    table_state: TableState,
}

impl ReadingsState {
    pub fn new() -> Self {
        Self {
            locations: &LOCATIONS,
            table_state: TableState::default(),
        }
    }

    pub fn selected_row(&self) -> Option<usize> {
        self.table_state.selected()
    }

    /// j/k move the row highlight; Esc clears it.
    pub fn handle_input(&mut self, event: &Event) -> InputResult {
        let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            modifiers: KeyModifiers::NONE,
            ..
        }) = event
        else {
            return InputResult::Ignored;
        };

        let last = self.locations.len().saturating_sub(1);
        match code {
            KeyCode::Char('j') | KeyCode::Down => {
                let next = self.table_state.selected().map_or(0, |i| (i + 1).min(last));
                self.table_state.select(Some(next));
                InputResult::Consumed
            }
            KeyCode::Char('k') | KeyCode::Up => {
                let prev = self.table_state.selected().map_or(0, |i| i.saturating_sub(1));
                self.table_state.select(Some(prev));
                InputResult::Consumed
            }
            KeyCode::Esc if self.table_state.selected().is_some() => {
                self.table_state.select(None);
                InputResult::Consumed
            }
            _ => InputResult::Ignored,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, selection: &UiSelectionState) {
        let palette = Palette::for_mode(selection.dark_mode);
        let active = selection.active_test();

        frame.render_widget(Block::default().style(palette.content()), area);

        let header = Row::new(["Location", "Value"].map(Cell::from))
            .style(palette.table_header())
            .height(1)
            .bottom_margin(1);

        let rows = project_readings(self.locations, active.key).map(|(name, value)| {
            Row::new(vec![
                Cell::from(name).style(palette.content().add_modifier(Modifier::BOLD)),
                Cell::from(format_with_unit(value, active.unit)),
            ])
            .style(palette.content())
        });

        let table = Table::new(rows, [Constraint::Percentage(50), Constraint::Percentage(50)])
            .header(header)
            .block(palette.content_block(active.name))
            .row_highlight_style(
                Style::default()
                    .bg(palette.header_bg)
                    .add_modifier(Modifier::REVERSED),
            );

        frame.render_stateful_widget(table, area, &mut self.table_state);
    }
}

impl Default for ReadingsState {
    fn default() -> Self {
        Self::new()
    }
}
