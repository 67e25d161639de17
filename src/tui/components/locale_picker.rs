//! # Locale Picker Component
//!
//! Draws the locale form. Follows the persistent state + transient wrapper
//! pattern:
//! - `LocaleSelector` lives in `App` (core) and handles input
//! - `LocalePicker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::core::selector::{LocaleSelector, SELECTOR_TITLE};
use crate::tui::component::Component;

const HELP_TEXT: &str = " ↑/↓ move  enter select  q quit ";

pub struct LocalePicker<'a> {
    selector: &'a LocaleSelector,
    saving: bool,
}

impl<'a> LocalePicker<'a> {
    pub fn new(selector: &'a LocaleSelector, saving: bool) -> Self {
        Self { selector, saving }
    }

    fn option_lines(&self) -> Vec<Line<'static>> {
        self.selector
            .options()
            .iter()
            .enumerate()
            .map(|(i, locale)| {
                let selected = i == self.selector.cursor();
                let marker = if selected { "> " } else { "  " };
                let style = if selected {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                Line::from(vec![
                    Span::styled(format!("{marker}{}", locale.code()), style),
                    Span::styled(
                        format!("  {}", locale.native_name()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            })
            .collect()
    }
}

impl Component for LocalePicker<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if !self.selector.is_ready() {
            frame.render_widget(Paragraph::new("Loading...").alignment(Alignment::Center), area);
            return;
        }

        let mut lines = vec![
            Line::from(Span::styled(
                SELECTOR_TITLE,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];
        lines.extend(self.option_lines());
        if self.saving {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Saving...",
                Style::default().fg(Color::Yellow),
            )));
        }

        // Title plus borders and padding
        let width = (SELECTOR_TITLE.chars().count() as u16 + 6).min(area.width);
        let height = (lines.len() as u16 + 2).min(area.height);
        let [row] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        let [form_area] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(row);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title_bottom(Line::from(HELP_TEXT).centered())
            .padding(Padding::horizontal(1));

        frame.render_widget(Paragraph::new(lines).block(block), form_area);
    }
}
