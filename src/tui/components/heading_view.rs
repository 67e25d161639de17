//! # Heading View
//!
//! The steady-state screen: the current proverb, centered, with a key hint
//! in the active language underneath. Stateless; everything comes in as props.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::component::Component;

pub struct HeadingView<'a> {
    /// `None` until the first reroll result arrives.
    pub heading: Option<&'a str>,
    pub hint: &'a str,
    pub notice: Option<&'a str>,
}

impl Component for HeadingView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [body, notice_area, hint_area] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let [heading_area] = Layout::vertical([Constraint::Length(3)])
            .flex(Flex::Center)
            .areas(body);

        let heading = match self.heading {
            Some(text) => Line::from(Span::styled(
                text,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            None => Line::from(Span::styled("...", Style::default().fg(Color::DarkGray))),
        };
        frame.render_widget(
            Paragraph::new(heading)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            heading_area,
        );

        if let Some(notice) = self.notice {
            frame.render_widget(
                Paragraph::new(notice)
                    .style(Style::default().fg(Color::Red))
                    .alignment(Alignment::Center),
                notice_area,
            );
        }

        frame.render_widget(
            Paragraph::new(self.hint)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            hint_area,
        );
    }
}
