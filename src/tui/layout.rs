//! Root layout computation: control panel + readings table + status bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Below this terminal width the panels stack vertically.
pub const STACK_THRESHOLD: u16 = 60;

/// Computed layout regions for a single frame.
pub struct AppLayout {
    /// Selector, limits and description.
    pub controls: Rect,
    /// Readings table.
    pub readings: Rect,
    /// Status bar (bottom row).
    pub status: Rect,
}

impl AppLayout {
    /// Split the frame: one third controls, two thirds readings, one status row.
    ///
    /// Narrow terminals get the controls above the table instead of beside it.
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::vertical([
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        let content = rows[0];
        let status = rows[1];

        let panels = if area.width < STACK_THRESHOLD {
            Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(content)
        } else {
            Layout::horizontal([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)])
                .split(content)
        };

        AppLayout {
            controls: panels[0],
            readings: panels[1],
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_layout_splits_thirds() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = AppLayout::compute(area);
        assert_eq!(layout.controls.width, 40);
        assert_eq!(layout.readings.width, 80);
        assert_eq!(layout.controls.y, layout.readings.y);
        assert_eq!(layout.status.height, 1);
    }

    #[test]
    fn test_panels_fill_width() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = AppLayout::compute(area);
        assert_eq!(layout.controls.width + layout.readings.width, area.width);
    }

    #[test]
    fn test_narrow_layout_stacks() {
        let area = Rect::new(0, 0, 50, 40);
        let layout = AppLayout::compute(area);
        assert_eq!(layout.controls.width, 50);
        assert_eq!(layout.readings.width, 50);
        assert!(layout.readings.y > layout.controls.y);
    }

    #[test]
    fn test_status_is_last_row() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = AppLayout::compute(area);
        assert_eq!(layout.status.y, 23);
    }
}
