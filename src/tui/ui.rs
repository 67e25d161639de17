use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::state::{App, AppState};
use crate::tui::component::Component;
use crate::tui::components::{HeadingView, LocalePicker};

pub fn draw_ui(frame: &mut Frame, app: &App) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0)]);
    let [title_area, main_area] = layout.areas(frame.area());

    frame.render_widget(title_line(app), title_area);

    match &app.state {
        AppState::LoadingConfig => {
            frame.render_widget(
                Paragraph::new("Loading...").alignment(Alignment::Center),
                main_area,
            );
        }
        AppState::ConfigError(e) => {
            draw_error_view(frame, main_area, &e.to_string(), app.error_display.as_secs());
        }
        AppState::SelectingLocale => {
            LocalePicker::new(&app.selector, app.persisting).render(frame, main_area);
        }
        AppState::ShowingHeading => {
            HeadingView {
                heading: app.heading.as_ref().map(|h| h.text),
                hint: app.locale.map(|l| l.reroll_hint()).unwrap_or_default(),
                notice: app.notice.as_deref(),
            }
            .render(frame, main_area);
        }
    }
}

fn title_line(app: &App) -> Span<'static> {
    let text = match app.locale {
        Some(locale) => format!("voltage v{} [{}]", env!("CARGO_PKG_VERSION"), locale),
        None => format!("voltage v{}", env!("CARGO_PKG_VERSION")),
    };
    Span::styled(text, Style::default().fg(Color::DarkGray))
}

fn draw_error_view(frame: &mut Frame, area: Rect, error_msg: &str, exit_secs: u64) {
    let lines = vec![
        Line::from(Span::styled(
            "error!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(error_msg.to_string()),
        Line::default(),
        Line::from(Span::styled(
            format!("Exiting in {exit_secs}s (q to quit now)"),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let error_paragraph = Paragraph::new(lines)
        .block(Block::bordered().title("ERROR"))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(error_paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::locale::Locale;
    use crate::test_support::{io_error, showing, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_loading_screen() {
        let app = test_app();
        assert!(rendered(&app).contains("Loading..."));
    }

    #[test]
    fn test_error_screen_shows_message() {
        let mut app = test_app();
        update(&mut app, Action::ConfigChecked(Err(io_error())));
        let text = rendered(&app);
        assert!(text.contains("ERROR"));
        assert!(text.contains("permission denied"));
        assert!(text.contains("Exiting in 3s"));
    }

    #[test]
    fn test_selector_screen() {
        let mut app = test_app();
        update(&mut app, Action::SelectorReady);
        update(&mut app, Action::ConfigLoaded(Ok(Default::default())));
        assert!(rendered(&app).contains("Choose your language"));
    }

    #[test]
    fn test_heading_screen_is_localized() {
        let app = showing(Locale::Pl, 1);
        let text = rendered(&app);
        assert!(text.contains("Lepiej późno niż wcale."));
        assert!(text.contains("spacja"));
        assert!(text.contains("[PL]"));
    }
}
