use super::app::{App, Section};
use super::game_view::render_game;
use super::sections::{footer_line, section_lines};
use crate::contact::Severity;
use crate::i18n::Language;
use crate::profile::PROFILE;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};
use std::time::Instant;

pub fn render(frame: &mut Frame, app: &App, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Section
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", app.language.t(app.section.nav_key())));
    if app.section == Section::Game {
        let inner = block.inner(chunks[1]);
        frame.render_widget(block, chunks[1]);
        render_game(frame, inner, app);
    } else {
        let body = Paragraph::new(section_lines(app.section, app))
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((app.scroll, 0));
        frame.render_widget(body, chunks[1]);
    }

    render_footer(frame, chunks[2], app);

    if let Some(notice) = app.notices.visible(now) {
        let area = notice_area(chunks[1]);
        let color = match notice.severity {
            Severity::Success => Color::Green,
            Severity::Warning => Color::Yellow,
            Severity::Error => Color::Red,
        };
        let popup = Paragraph::new(notice.message.clone())
            .style(Style::default().fg(Color::Black).bg(color))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(Clear, area);
        frame.render_widget(popup, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let ctx = &app.language;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(20)])
        .split(area);

    let labels: Vec<String> = Section::ALL
        .iter()
        .map(|section| ctx.t(section.nav_key()).to_string())
        .collect();
    let titles = tab_titles(&labels, app.section.index(), chunks[0].width.saturating_sub(2));
    let tabs = Tabs::new(titles)
        .select(app.section.index())
        .block(Block::default().borders(Borders::ALL).title(format!(" {} ", PROFILE.name)))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );
    frame.render_widget(tabs, chunks[0]);

    // Language menu: both languages by native name, the active one highlighted
    let mut spans = Vec::new();
    for (i, language) in Language::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" | "));
        }
        let style = if *language == ctx.language() {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(language.native_name(), style));
    }
    let menu = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} [L] ", ctx.t("nav.language"))),
        );
    frame.render_widget(menu, chunks[1]);
}

/// Titles for a tab bar `width` columns wide.
///
/// When the full titles do not fit, every title but the selected one is cut
/// to the same number of characters.
fn tab_titles(labels: &[String], selected: usize, width: u16) -> Vec<String> {
    // A space either side of each title plus a divider between titles
    let chrome = (labels.len() * 3).saturating_sub(1);
    let full: usize = labels.iter().map(|label| label.chars().count()).sum::<usize>() + chrome;
    if full <= width as usize {
        return labels.to_vec();
    }

    let selected_len = labels.get(selected).map_or(0, |label| label.chars().count());
    let others = labels.len().saturating_sub(1).max(1);
    let budget = ((width as usize).saturating_sub(chrome + selected_len) / others).max(1);

    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            if i == selected {
                label.clone()
            } else {
                label.chars().take(budget).collect()
            }
        })
        .collect()
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let hints = Line::from(Span::styled(
        app.language.t("ui.hints").to_string(),
        Style::default().fg(Color::DarkGray),
    ));
    let footer = Paragraph::new(vec![footer_line(app), hints]).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// A band along the bottom of `area`
fn notice_area(area: Rect) -> Rect {
    let height = 3.min(area.height);
    let width = area.width.saturating_sub(4).min(70);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + area.height - height,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, GameEngine, GameSession, GameState, GameStatus, Position};
    use crate::i18n::LanguageContext;
    use crate::storage::Storage;
    use ratatui::{backend::TestBackend, Terminal};
    use std::path::PathBuf;

    fn app(language: Language) -> App {
        let storage = Storage::in_memory();
        App::new(
            LanguageContext::with_language(storage.clone(), language),
            GameSession::new(storage),
            "/cv.pdf".to_string(),
            PathBuf::from("cv.pdf"),
        )
    }

    fn draw(app: &App, width: u16, height: u16) -> Terminal<TestBackend> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("Test terminal");
        terminal
            .draw(|frame| render(frame, app, Instant::now()))
            .expect("Draw should succeed");
        terminal
    }

    fn screen(app: &App) -> String {
        draw(app, 100, 40)
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    fn row(terminal: &Terminal<TestBackend>, y: usize) -> String {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer.content()[y * width..(y + 1) * width]
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_notice_area_inside_parent() {
        let parent = Rect::new(0, 3, 100, 30);
        let area = notice_area(parent);
        assert_eq!(area.height, 3);
        assert_eq!(area.y + area.height, parent.y + parent.height);
        assert!(area.width <= 70);
    }

    #[test]
    fn test_renders_navigation_in_language() {
        let text = screen(&app(Language::Finnish));
        assert!(text.contains("Projektit"));
        assert!(text.contains("Suomi"));
    }

    #[test]
    fn test_renders_game_board() {
        let mut app = app(Language::English);
        app.section = Section::Game;
        let text = screen(&app);
        assert!(text.contains("Snake"));
        assert!(text.contains("█"));
    }

    #[test]
    fn test_renders_visible_notice() {
        let mut app = app(Language::English);
        app.notices.show(Severity::Error, "Boom happened", Instant::now());
        let text = screen(&app);
        assert!(text.contains("Boom happened"));
    }

    // ==================== Small Terminal Tests ====================

    #[test]
    fn test_tab_titles_full_when_room() {
        let labels: Vec<String> = ["Home", "Projects", "Game"].map(String::from).to_vec();
        assert_eq!(tab_titles(&labels, 1, 80), labels);
    }

    #[test]
    fn test_tab_titles_shorten_unselected() {
        let app = app(Language::English);
        let labels: Vec<String> = Section::ALL
            .iter()
            .map(|section| app.language.t(section.nav_key()).to_string())
            .collect();
        let titles = tab_titles(&labels, Section::Volunteering.index(), 58);

        assert_eq!(titles[Section::Volunteering.index()], "Volunteering");
        for (title, label) in titles.iter().zip(&labels) {
            assert!(!title.is_empty());
            assert!(label.starts_with(title.as_str()));
        }
        let used: usize = titles.iter().map(|t| t.chars().count() + 3).sum::<usize>() - 1;
        assert!(used <= 58);
    }

    #[test]
    fn test_header_shows_every_section_at_80_columns() {
        for language in Language::ALL {
            for selected in Section::ALL {
                let mut app = app(language);
                app.section = selected;
                let header = row(&draw(&app, 80, 24), 1);

                for section in Section::ALL {
                    let label = app.language.t(section.nav_key()).to_string();
                    let expected: String = if section == selected {
                        label.clone()
                    } else {
                        label.chars().take(3).collect()
                    };
                    assert!(
                        header.contains(&expected),
                        "{:?} missing from header {:?}",
                        expected,
                        header
                    );
                }
            }
        }
    }

    #[test]
    fn test_game_board_fits_80x24() {
        let config = GameConfig::default();
        let mut state = GameState::initial(&config);
        state.body = [(8, 17), (7, 17), (6, 17)]
            .iter()
            .map(|&(x, y)| Position::new(x, y))
            .collect();
        state.food = Position::new(5, 18);
        state.status = GameStatus::Running;

        let storage = Storage::in_memory();
        let mut app = app(Language::English);
        app.game = GameSession::with_engine(GameEngine::with_state(config, state, 1), storage);
        app.section = Section::Game;

        let terminal = draw(&app, 80, 24);
        let cells = terminal.backend().buffer().content();

        // Rows 17 and 18 share a terminal row; the head sits in its lower half
        let food = cells
            .iter()
            .filter(|cell| cell.symbol() == "▀" && cell.fg == Color::Red)
            .count();
        let head = cells
            .iter()
            .filter(|cell| cell.symbol() == "▄" && cell.fg == Color::Cyan)
            .count();
        assert_eq!(food, 1, "food on grid row 18 is drawn");
        assert_eq!(head, 1, "head on grid row 17 is drawn");
        assert!(!row(&terminal, 23).trim().is_empty(), "footer stays on screen");
    }

    #[test]
    fn test_tiny_terminal_asks_for_more_room() {
        let mut app = app(Language::Finnish);
        app.section = Section::Game;
        let terminal = draw(&app, 80, 12);
        let text: String = (0..12).map(|y| row(&terminal, y)).collect();

        assert!(text.contains("Suurenna pääteikkunaa"));
        assert!(!text.contains('█'));
        assert!(!text.contains('▀'));
    }
}
