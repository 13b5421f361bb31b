use ratatui::{prelude::*, widgets::*};

use crate::models::Direction;
use crate::session::nav::Page;

/// Color for a ledger amount by direction
pub fn direction_color(direction: Direction) -> Color {
    match direction {
        Direction::Positive => Color::Green,
        Direction::Negative => Color::Red,
    }
}

/// Sign prefix shown before a ledger amount
pub fn direction_sign(direction: Direction) -> &'static str {
    match direction {
        Direction::Positive => "+",
        Direction::Negative => "-",
    }
}

/// Bottom navigation tabs
pub fn render_nav_tabs<'a>(titles: &[&'a str], selected: Option<usize>) -> Tabs<'a> {
    let titles: Vec<Line> = titles.iter().map(|t| Line::from(*t)).collect();

    let mut tabs = Tabs::new(titles)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .divider("|");
    if let Some(selected) = selected {
        tabs = tabs.select(selected);
    }
    tabs
}

/// Bottom-nav slot for a base page, None for pages outside the bar
pub fn nav_slot(page: Page) -> Option<usize> {
    match page {
        Page::Home => Some(0),
        Page::Staking => Some(1),
        Page::Payment => Some(2),
        Page::Transactions => Some(3),
        _ => None,
    }
}

/// Progress gauge for an in-flight operation
pub fn render_progress<'a>(label: &'a str, progress: u8) -> Gauge<'a> {
    Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(label))
        .gauge_style(Style::default().fg(Color::Green))
        .percent(u16::from(progress.min(100)))
        .label(format!("{}% 완료", progress))
}

/// "[on]"/"[off]" marker for a settings toggle
pub fn toggle_marker(enabled: bool) -> Span<'static> {
    if enabled {
        Span::styled("[on] ", Style::default().fg(Color::Green).bold())
    } else {
        Span::styled("[off]", Style::default().fg(Color::DarkGray))
    }
}
