use super::app::App;
use super::sections::status_text;
use crate::game::{GameState, GameStatus, Position};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Widest a single cell may be drawn, in terminal columns
pub const MAX_CELL_WIDTH: u16 = 3;

/// How the grid maps onto terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardFit {
    /// Terminal columns per grid column
    pub cell_width: u16,
    /// Grid rows per terminal row: 1, or 2 when drawn with half blocks
    pub rows_per_line: u16,
}

impl BoardFit {
    /// Terminal rows the grid occupies, borders excluded
    pub fn height(&self, grid_size: i32) -> u16 {
        (grid_size.max(1) as u16).div_ceil(self.rows_per_line)
    }
}

/// Largest layout of the board that fits `area` (borders included).
///
/// Full rows are used when every grid row gets its own terminal row; otherwise
/// two grid rows share one terminal row and the columns shrink with them.
/// `None` when even that does not fit.
pub fn fit_board(area: Rect, grid_size: i32) -> Option<BoardFit> {
    let grid = grid_size.max(1) as u16;
    let columns = area.width.saturating_sub(2) / grid;
    let rows = area.height.saturating_sub(2);

    if columns == 0 {
        return None;
    }
    if rows >= grid {
        Some(BoardFit {
            cell_width: columns.min(MAX_CELL_WIDTH),
            rows_per_line: 1,
        })
    } else if rows >= grid.div_ceil(2) {
        Some(BoardFit {
            cell_width: (columns / 2).clamp(1, MAX_CELL_WIDTH),
            rows_per_line: 2,
        })
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Empty,
    Food,
    Body,
    Head,
}

impl Cell {
    fn at(state: &GameState, head: Position, x: i32, y: i32) -> Cell {
        let pos = Position::new(x, y);
        if pos == head {
            Cell::Head
        } else if state.occupies(pos) {
            Cell::Body
        } else if pos == state.food {
            Cell::Food
        } else {
            Cell::Empty
        }
    }

    fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Food => Some(Color::Red),
            Cell::Body => Some(Color::Green),
            Cell::Head => Some(Color::Cyan),
        }
    }
}

fn empty_span(width: usize) -> Span<'static> {
    Span::styled(
        format!("{:<width$}", "·", width = width),
        Style::default().fg(Color::DarkGray),
    )
}

fn full_span(cell: Cell, width: usize) -> Span<'static> {
    let style = match cell {
        Cell::Head => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        other => match other.color() {
            Some(color) => Style::default().fg(color),
            None => return empty_span(width),
        },
    };
    Span::styled("█".repeat(width), style)
}

/// One terminal cell showing two stacked grid cells
fn half_span(top: Cell, bottom: Cell, width: usize) -> Span<'static> {
    match (top.color(), bottom.color()) {
        (None, None) => empty_span(width),
        (Some(top), None) => Span::styled("▀".repeat(width), Style::default().fg(top)),
        (None, Some(bottom)) => Span::styled("▄".repeat(width), Style::default().fg(bottom)),
        (Some(top), Some(bottom)) => {
            Span::styled("▀".repeat(width), Style::default().fg(top).bg(bottom))
        }
    }
}

/// The whole board as lines: background dots, food, body, highlighted head
pub fn board_lines(state: &GameState, grid_size: i32, fit: BoardFit) -> Vec<Line<'static>> {
    let width = fit.cell_width as usize;
    let head = state.head();

    if fit.rows_per_line < 2 {
        return (0..grid_size)
            .map(|y| {
                Line::from(
                    (0..grid_size)
                        .map(|x| full_span(Cell::at(state, head, x, y), width))
                        .collect::<Vec<_>>(),
                )
            })
            .collect();
    }

    (0..grid_size)
        .step_by(2)
        .map(|y| {
            let spans: Vec<Span<'static>> = (0..grid_size)
                .map(|x| {
                    let top = Cell::at(state, head, x, y);
                    let bottom = if y + 1 < grid_size {
                        Cell::at(state, head, x, y + 1)
                    } else {
                        Cell::Empty
                    };
                    half_span(top, bottom, width)
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

pub fn render_game(frame: &mut Frame, area: Rect, app: &App) {
    let ctx = &app.language;
    let grid = app.game.config().grid_size;
    let state = app.game.state();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Score line
            Constraint::Min(0),    // Board
            Constraint::Length(2), // Status and controls
        ])
        .split(area);

    let score = Line::from(vec![
        Span::styled(format!("{}: ", ctx.t("game.score")), Style::default().fg(Color::Yellow)),
        Span::styled(
            state.score.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled(format!("{}: ", ctx.t("game.high")), Style::default().fg(Color::Yellow)),
        Span::raw(app.game.high_score().to_string()),
    ]);
    frame.render_widget(Paragraph::new(score).alignment(Alignment::Center), chunks[0]);

    let border = match state.status {
        GameStatus::GameOver => Color::Red,
        GameStatus::Paused => Color::Yellow,
        GameStatus::Idle | GameStatus::Running => Color::White,
    };

    match fit_board(chunks[1], grid) {
        Some(fit) => {
            // Center a board no larger than the cells need
            let board_width = (fit.cell_width * grid as u16 + 2).min(chunks[1].width);
            let board_height = (fit.height(grid) + 2).min(chunks[1].height);
            let board_area = Rect {
                x: chunks[1].x + (chunks[1].width - board_width) / 2,
                width: board_width,
                height: board_height,
                ..chunks[1]
            };

            let board = Paragraph::new(board_lines(state, grid, fit)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(border))
                    .title(format!(" {} ", ctx.t("game.title"))),
            );
            frame.render_widget(board, board_area);
        }
        None => {
            let message = Paragraph::new(ctx.t("game.tooSmall").to_string())
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(message, chunks[1]);
        }
    }

    let action = match state.status {
        GameStatus::Idle => ctx.t("game.start"),
        GameStatus::Running => ctx.t("game.pause"),
        GameStatus::Paused => ctx.t("game.resume"),
        GameStatus::GameOver => ctx.t("game.restart"),
    };
    let mut status = vec![Span::styled(
        format!("[Space] {}", action),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];
    if let Some(text) = status_text(app) {
        status.push(Span::raw("  "));
        status.push(Span::styled(text, Style::default().fg(border).add_modifier(Modifier::BOLD)));
    }

    let controls = vec![
        Line::from(status),
        Line::from(Span::styled(
            format!("{} {}", ctx.t("game.instructions"), ctx.t("ui.gameHints")),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(controls).alignment(Alignment::Center), chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use crate::ui::sections::plain_text;

    const FULL: BoardFit = BoardFit {
        cell_width: 1,
        rows_per_line: 1,
    };
    const HALF: BoardFit = BoardFit {
        cell_width: 1,
        rows_per_line: 2,
    };

    // ==================== Fit Tests ====================

    #[test]
    fn test_fit_uses_full_rows_when_tall_enough() {
        let fit = fit_board(Rect::new(0, 0, 42, 22), 20).expect("Board fits");
        assert_eq!(fit, BoardFit { cell_width: 2, rows_per_line: 1 });
        assert_eq!(fit.height(20), 20);
    }

    #[test]
    fn test_fit_cell_width_capped() {
        let fit = fit_board(Rect::new(0, 0, 300, 60), 20).expect("Board fits");
        assert_eq!(fit.cell_width, MAX_CELL_WIDTH);
    }

    #[test]
    fn test_fit_halves_rows_on_short_area() {
        // What is left for the board on an 80x24 terminal
        let fit = fit_board(Rect::new(0, 0, 78, 14), 20).expect("Board fits");
        assert_eq!(fit, BoardFit { cell_width: 1, rows_per_line: 2 });
        assert_eq!(fit.height(20), 10);
    }

    #[test]
    fn test_fit_rejects_area_too_small() {
        assert_eq!(fit_board(Rect::new(0, 0, 78, 11), 20), None);
        assert_eq!(fit_board(Rect::new(0, 0, 21, 40), 20), None);
    }

    // ==================== Board Tests ====================

    #[test]
    fn test_board_lines_dimensions() {
        let state = GameState::initial(&GameConfig::default());
        let wide = BoardFit {
            cell_width: 2,
            rows_per_line: 1,
        };
        let lines = board_lines(&state, 20, wide);

        assert_eq!(lines.len(), 20);
        assert!(lines.iter().all(|line| line.width() == 40));
    }

    #[test]
    fn test_board_lines_mark_snake_and_food() {
        let state = GameState::initial(&GameConfig::default());
        let lines = board_lines(&state, 20, FULL);
        let row = plain_text(&lines[10..11]);
        let cells: Vec<char> = row.chars().collect();

        assert_eq!(cells[6], '█');
        assert_eq!(cells[7], '█');
        assert_eq!(cells[8], '█');
        assert_eq!(cells[12], '█');
        assert_eq!(cells[9], '·');

        let head = &lines[10].spans[8];
        assert!(head.style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(lines[10].spans[12].style.fg, Some(Color::Red));
    }

    #[test]
    fn test_half_blocks_keep_every_row() {
        let mut state = GameState::initial(&GameConfig::default());
        state.food = Position::new(5, 19);
        let lines = board_lines(&state, 20, HALF);

        assert_eq!(lines.len(), 10);
        assert!(lines.iter().all(|line| line.width() == 20));

        // Row 10 holds the snake in the top half
        let snake_row = &lines[5].spans;
        assert_eq!(snake_row[7].content, "▀");
        assert_eq!(snake_row[7].style.fg, Some(Color::Green));
        assert_eq!(snake_row[8].style.fg, Some(Color::Cyan));

        // The last grid row lands in the bottom half
        let food = &lines[9].spans[5];
        assert_eq!(food.content, "▄");
        assert_eq!(food.style.fg, Some(Color::Red));
    }

    #[test]
    fn test_half_blocks_stack_two_colors() {
        let mut state = GameState::initial(&GameConfig::default());
        state.food = Position::new(8, 11);
        let lines = board_lines(&state, 20, HALF);

        let cell = &lines[5].spans[8];
        assert_eq!(cell.content, "▀");
        assert_eq!(cell.style.fg, Some(Color::Cyan));
        assert_eq!(cell.style.bg, Some(Color::Red));
    }
}
