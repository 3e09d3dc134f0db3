//! TUI rendering with ratatui
//!
//! Board, hints and message panels for the game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LENGTH, Mark};
use crate::game::{GameStatus, MAX_ROUNDS};
use crate::output::formatters::score_summary;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Board
            Constraint::Percentage(60), // Hints and messages
        ])
        .split(chunks[1]);

    render_board_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            "🔢 NUMBERDLE",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            score_summary(&app.scores),
            Style::default().fg(Color::Yellow),
        )),
    ];

    let header = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

const fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::Green => Color::Green,
        Mark::Yellow => Color::Yellow,
        Mark::Gray => Color::DarkGray,
    }
}

fn tile(text: String, bg: Color) -> Span<'static> {
    Span::styled(
        text,
        Style::default()
            .fg(Color::Black)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )
}

fn board_lines(app: &App) -> Vec<Line<'static>> {
    let rounds = app.session.rounds();
    let typing_row = (!app.session.status().is_over()).then_some(rounds.len());
    let mut lines = Vec::with_capacity(MAX_ROUNDS * 2);

    for row in 0..MAX_ROUNDS {
        let mut spans = vec![Span::raw(format!(" {} ", row + 1))];

        if let Some(round) = rounds.get(row) {
            for (digit, mark) in round.guess.digits().iter().zip(round.verdict.marks()) {
                spans.push(tile(format!(" {digit} "), mark_color(mark)));
                spans.push(Span::raw(" "));
            }
        } else if typing_row == Some(row) {
            let typed: Vec<char> = app.input_buffer.chars().collect();
            for pos in 0..LENGTH {
                let text = typed.get(pos).map_or_else(|| " _ ".to_string(), |c| format!(" {c} "));
                spans.push(Span::styled(
                    text,
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(" "));
            }
        } else {
            for _ in 0..LENGTH {
                spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines
}

fn render_board_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Board
            Constraint::Length(3), // Guesses used
        ])
        .split(area);

    let board = Paragraph::new(board_lines(app)).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, chunks[0]);

    let used = app.session.rounds().len();
    let percent = u16::try_from(used * 100 / MAX_ROUNDS).unwrap_or(100);
    let gauge = Gauge::default()
        .block(Block::default().title(" Guesses ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{MAX_ROUNDS} used"));
    f.render_widget(gauge, chunks[1]);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60), // Hints
            Constraint::Percentage(40), // Messages
        ])
        .split(area);

    render_hints(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_hints(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();

    for (index, hints) in app.session.hints().iter().enumerate() {
        let Some(hints) = hints else { continue };
        lines.push(Line::from(Span::styled(
            format!("Round {}", index + 1),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for hint in hints {
            lines.push(Line::from(format!("  • {hint}")));
        }
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "Hints appear after each miss.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Hints ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match (app.input_mode, app.session.status()) {
        (InputMode::GameOver, GameStatus::Won { .. }) => (
            " 🎉 SOLVED! 🎉 | Press 'n' for new game or 'q' to quit ".to_string(),
            String::new(),
            Color::Green,
        ),
        (InputMode::GameOver, _) => (
            " Game over | Press 'n' for new game or 'q' to quit ".to_string(),
            format!("The number was {}", app.session.secret()),
            Color::Red,
        ),
        (InputMode::Typing, _) => (
            format!(
                " Guess {}/{MAX_ROUNDS} | type 5 digits, Enter to submit ",
                app.session.round_index() + 1
            ),
            app.input_buffer.clone(),
            if app.input_complete() {
                Color::Green
            } else {
                Color::Yellow
            },
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let mode = Paragraph::new(format!("Mode: {}", app.session.mode()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(mode, chunks[0]);

    let help_text = if app.input_mode == InputMode::GameOver {
        "n: New Game | m: Mode | q: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | m: Mode | g: Give Up | n: New | q: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Digits;
    use crate::game::GameSession;
    use crate::rules::Mode;
    use crate::scores::MemoryStore;
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App {
        let session = GameSession::with_secret(Digits::new("12345").unwrap(), Mode::Normal);
        App::with_session(session, Box::new(MemoryStore::default()))
    }

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(usize::from(buffer.area.width))
            .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn board_shows_one_row_per_round() {
        let mut app = app();
        app.input_buffer = "99999".to_string();
        app.submit_guess();
        app.input_buffer = "12".to_string();

        let lines = board_lines(&app);
        assert_eq!(lines.len(), MAX_ROUNDS * 2);

        let first: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(first.contains(" 9 "));
        let typing: String = lines[2].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(typing.contains(" 1 "));
        assert!(typing.contains(" _ "));
    }

    #[test]
    fn screen_shows_scores_and_hints() {
        let mut app = app();
        app.input_buffer = "99999".to_string();
        app.submit_guess();

        let text = screen_text(&app);
        assert!(text.contains("NUMBERDLE"));
        assert!(text.contains("No solves yet"));
        assert!(text.contains("Round 1"));
        assert!(text.contains("Mode: Normal"));
    }
}
