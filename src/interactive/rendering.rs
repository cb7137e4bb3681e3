//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::dictionary::DictionaryChecker;
use crate::output::formatters::{length_badge, scoring_legend};
use crate::wordlists::RootWordSource;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<D: DictionaryChecker, R: RootWordSource>(f: &mut Frame, app: &App<D, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Root word
            Constraint::Length(3), // Input
            Constraint::Length(3), // Scores
            Constraint::Min(6),    // Words and messages
            Constraint::Length(1), // Help line
        ])
        .split(f.area());

    render_root_word(f, app, chunks[0]);
    render_input(f, app, chunks[1]);
    render_scores(f, app, chunks[2]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[3]);

    render_used_words(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_help(f, chunks[4]);

    if app.input_mode == InputMode::Rules {
        render_rules(f, f.area());
    }
}

fn render_root_word<D: DictionaryChecker, R: RootWordSource>(
    f: &mut Frame,
    app: &App<D, R>,
    area: Rect,
) {
    let spaced: String = app
        .engine
        .root_word()
        .to_uppercase()
        .chars()
        .map(|c| format!("{c} "))
        .collect();

    let header = Paragraph::new(spaced.trim_end().to_string())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" Word Scramble - round {} ", app.engine.round()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_input<D: DictionaryChecker, R: RootWordSource>(
    f: &mut Frame,
    app: &App<D, R>,
    area: Rect,
) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(" Enter your word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(input, area);
}

fn render_scores<D: DictionaryChecker, R: RootWordSource>(
    f: &mut Frame,
    app: &App<D, R>,
    area: Rect,
) {
    let line = Line::from(vec![
        Span::raw("This word: "),
        Span::styled(
            app.engine.round_score().to_string(),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("    Total: "),
        Span::styled(
            app.engine.total_score().to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let scores = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .title(" Your score (? for rules) ")
            .borders(Borders::ALL),
    );
    f.render_widget(scores, area);
}

fn render_used_words<D: DictionaryChecker, R: RootWordSource>(
    f: &mut Frame,
    app: &App<D, R>,
    area: Rect,
) {
    let items: Vec<ListItem> = app
        .engine
        .used_words_recent_first()
        .map(|word| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{word:<14}")),
                Span::styled(length_badge(word), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let title = format!(" Your words ({}) ", app.engine.used_words().len());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(list, area);
}

fn render_messages<D: DictionaryChecker, R: RootWordSource>(
    f: &mut Frame,
    app: &App<D, R>,
    area: Rect,
) {
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

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new("Enter: Submit | Ctrl-N: New Word | ?: Scoring | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn render_rules(f: &mut Frame, area: Rect) {
    let popup = centered_rect(50, 8, area);

    let mut lines: Vec<Line> = scoring_legend().into_iter().map(Line::from).collect();
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    ));

    let rules = Paragraph::new(lines).block(
        Block::default()
            .title(" Scoring based on word length ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(Clear, popup);
    f.render_widget(rules, popup);
}

/// A rectangle of `width` columns and `height` rows centered in `area`
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
