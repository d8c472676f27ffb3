//! Stateless UI rendering.

use gridlock_core::{Cell, Player, Position};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::mode::Mode;
use crate::theme::{Palette, Theme};

/// Renders the whole screen: title, board, status, scores, and footer.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let palette = app.theme().palette();

    // Theme background behind everything.
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Min(11),    // Board
            Constraint::Length(3),  // Status
            Constraint::Length(3),  // Scores
            Constraint::Length(4),  // Footer
        ])
        .split(area);

    let title = Paragraph::new("Gridlock - Tic Tac Toe")
        .style(
            Style::default()
                .fg(palette.title)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(palette.grid)));
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app, &palette);

    let status = Paragraph::new(app.status_message().as_str())
        .style(Style::default().fg(palette.status))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(palette.grid)));
    frame.render_widget(status, chunks[2]);

    draw_scores(frame, chunks[3], app, &palette);
    draw_footer(frame, chunks[4], app, &palette);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let board_area = center_rect(area, 29, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        if row > 0 {
            let sep = Paragraph::new("─".repeat(29)).style(Style::default().fg(palette.grid));
            frame.render_widget(sep, rows[row * 2 - 1]);
        }

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(9),
                Constraint::Length(1),
                Constraint::Length(9),
                Constraint::Length(1),
                Constraint::Length(9),
            ])
            .split(rows[row * 2]);

        for col in 0..3 {
            if col > 0 {
                let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(palette.grid));
                frame.render_widget(sep, cols[col * 2 - 1]);
            }
            let pos = Position::from_index(row * 3 + col).expect("row and col in 0..3");
            draw_cell(frame, cols[col * 2], app, palette, pos);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, palette: &Palette, pos: Position) {
    let session = app.session();

    let (symbol, mark_color) = match session.board().get(pos) {
        Cell::Empty => (" ", palette.grid),
        Cell::Occupied(Player::X) => ("X", palette.x_mark),
        Cell::Occupied(Player::O) => ("O", palette.o_mark),
    };

    let mut style = Style::default().fg(mark_color).add_modifier(Modifier::BOLD);

    let on_winning_line = session.winning_lines().iter().any(|line| line.contains(&pos));
    if on_winning_line {
        style = style.bg(palette.win);
    } else if pos == *app.cursor() && *session.active() {
        style = style.bg(palette.cursor);
    }
    if session.last_move().map(|m| m.position) == Some(pos) {
        style = style.add_modifier(Modifier::UNDERLINED);
    }

    // Middle line of the 3-line cell carries the mark.
    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(format!("   {}   ", symbol), style)),
        Line::raw(""),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_scores(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let scores = app.scores();
    let line = Line::from(vec![
        Span::styled(
            format!("X Wins: {}", scores.x_wins()),
            Style::default().fg(palette.x_mark),
        ),
        Span::styled("   ", Style::default()),
        Span::styled(
            format!("O Wins: {}", scores.o_wins()),
            Style::default().fg(palette.o_mark),
        ),
        Span::styled("   ", Style::default()),
        Span::styled(
            format!("Draws: {}", scores.draws()),
            Style::default().fg(palette.status),
        ),
    ]);

    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.grid))
                .title("Scores"),
        );
    frame.render_widget(paragraph, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let dim = Style::default().fg(palette.status);
    let active = Style::default()
        .fg(palette.title)
        .add_modifier(Modifier::BOLD | Modifier::REVERSED);

    let mode_style = |mode: Mode| if *app.mode() == mode { active } else { dim };
    let theme_style = |theme: Theme| if *app.theme() == theme { active } else { dim };

    let controls = vec![
        Span::styled("[t] 2 Player", mode_style(Mode::TwoPlayer)),
        Span::styled("  ", dim),
        Span::styled("[c] vs CPU", mode_style(Mode::Cpu)),
        Span::styled("    ", dim),
        Span::styled("[l] Light", theme_style(Theme::Light)),
        Span::styled(" ", dim),
        Span::styled("[d] Dark", theme_style(Theme::Dark)),
        Span::styled(" ", dim),
        Span::styled("[n] Neon", theme_style(Theme::Neon)),
    ];

    let mut help = String::from("arrows: move | enter/1-9: play | r: reset | q: quit");
    if app.undo_available() {
        help.push_str(" | u: undo");
    }

    let lines = vec![
        Line::from(controls),
        Line::from(Span::styled(help, dim)),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.grid)),
        );
    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}
