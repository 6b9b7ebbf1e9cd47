//! Stateless UI rendering for tic-tac-toe.

use std::time::Instant;

use neon_tictactoe::{BOARD_SIZE, Player, Position, Snapshot, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

const X_COLOR: Color = Color::Cyan;
const O_COLOR: Color = Color::Magenta;

/// Draws the whole screen and returns where each cell landed.
pub fn draw(frame: &mut Frame, app: &App, now: Instant) -> Vec<(Position, Rect)> {
    let view = app.frame();
    let area = frame.area();

    let [title, score, turn, board, status, help] = Layout::vertical([
        Constraint::Length(3), // Title
        Constraint::Length(1), // Score
        Constraint::Length(1), // Turn
        Constraint::Min(BOARD_HEIGHT), // Board
        Constraint::Length(3), // Status or banner
        Constraint::Length(1), // Help
    ])
    .areas(area);

    let title_text = Paragraph::new("NEON TIC-TAC-TOE")
        .style(Style::default().fg(Color::LightMagenta).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title_text, title);

    frame.render_widget(score_line(&view), score);
    frame.render_widget(turn_line(&view), turn);

    let cursor = (!view.is_over() && view.pending.is_none()).then(|| app.cursor());
    let cells = draw_board(frame, board, &view, cursor);

    match app.banner(now) {
        Some(outcome) => {
            let color = match outcome.winner() {
                Some(player) => player_color(player),
                None => Color::Yellow,
            };
            let banner = Paragraph::new(outcome.to_string())
                .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color)),
                );
            frame.render_widget(banner, status);
        }
        None => {
            let status_text = Paragraph::new(app.status_message())
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(status_text, status);
        }
    }

    let help_text = Paragraph::new(
        "arrows/hjkl move  enter place  1-9 place  u undo  r new round  R reset  q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help_text, help);

    if let Some(request) = view.pending {
        draw_dialog(frame, area, request.prompt());
    }

    cells
}

fn player_color(player: Player) -> Color {
    match player {
        Player::X => X_COLOR,
        Player::O => O_COLOR,
    }
}

fn score_line(view: &Snapshot) -> Paragraph<'static> {
    let mut spans = Vec::new();
    for player in [Player::X, Player::O] {
        spans.push(Span::styled(
            format!("{} {}", player, view.score.wins(player)),
            Style::default().fg(player_color(player)),
        ));
        spans.push(Span::raw("   "));
    }
    spans.push(Span::styled(
        format!("Draws {}", view.score.draws()),
        Style::default().fg(Color::Gray),
    ));
    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

fn turn_line(view: &Snapshot) -> Paragraph<'static> {
    let line = if view.is_over() {
        Line::from(Span::styled("Round over", Style::default().fg(Color::Gray)))
    } else {
        Line::from(vec![
            Span::raw("Turn: "),
            Span::styled(
                view.to_move.to_string(),
                Style::default()
                    .fg(player_color(view.to_move))
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    };
    Paragraph::new(line).alignment(Alignment::Center)
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    view: &Snapshot,
    cursor: Option<Position>,
) -> Vec<(Position, Rect)> {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::vertical([
        Constraint::Length(CELL_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(CELL_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(CELL_HEIGHT),
    ])
    .split(board_area);

    let mut cells = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
    for (row, positions) in Position::ALL.chunks(BOARD_SIZE).enumerate() {
        let row_area = rows[row * 2];
        let cols = Layout::horizontal([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(row_area);

        for (col, pos) in positions.iter().enumerate() {
            let cell_area = cols[col * 2];
            draw_cell(frame, cell_area, view, *pos, cursor == Some(*pos));
            cells.push((*pos, cell_area));
            if col + 1 < BOARD_SIZE {
                draw_separator_vertical(frame, cols[col * 2 + 1]);
            }
        }
        if row + 1 < BOARD_SIZE {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
    cells
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &Snapshot, pos: Position, under_cursor: bool) {
    let hint = (pos.to_index() + 1).to_string();
    let (symbol, base_style) = match view.square(pos) {
        Square::Empty => (hint, Style::default().fg(Color::DarkGray)),
        Square::Occupied(player) => (
            player.symbol().to_string(),
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        ),
    };

    let style = if view.is_winning(pos) {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if under_cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::raw(symbol)),
        Line::from(""),
    ])
    .style(style)
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let segment = "─".repeat(CELL_WIDTH as usize);
    let sep = Paragraph::new(format!("{segment}┼{segment}┼{segment}"))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let lines = vec![Line::from("│"); area.height as usize];
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_dialog(frame: &mut Frame, area: Rect, prompt: &str) {
    let dialog = center_rect(area, 40, 5);
    let body = Paragraph::new(vec![
        Line::from(Span::styled(
            prompt.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("[y] yes    [n] no"),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(" Confirm ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::LightMagenta)),
    );

    frame.render_widget(Clear, dialog);
    frame.render_widget(body, dialog);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Length((area.height.saturating_sub(height)) / 2),
        Constraint::Length(height),
        Constraint::Min(0),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Length((area.width.saturating_sub(width)) / 2),
        Constraint::Length(width),
        Constraint::Min(0),
    ])
    .areas(middle);

    center
}
