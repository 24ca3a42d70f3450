//! TUI rendering with ratatui
//!
//! Input on the left, results on the right, messages and key help below.

use super::app::{App, InputMode, LookupMode, MessageStyle, Output};
use crate::output::formatters::{candidate_lines, join_synonyms, record_heading};
use crate::source::SynonymSource;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: SynonymSource>(f: &mut Frame, app: &App<'_, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(7), // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Input
            Constraint::Percentage(60), // Results
        ])
        .split(chunks[1]);

    render_input(f, app, main_chunks[0]);
    render_results(f, app, main_chunks[1]);
    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header<S: SynonymSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let title = format!("🔍 {}", app.session.messages().title);
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_input<S: SynonymSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::DictionaryPath => (
            " Dictionary file (JSON) | Enter: load | ESC: cancel ",
            app.path_buffer.as_str(),
            Color::Cyan,
        ),
        InputMode::Editing => match app.mode {
            LookupMode::Text => (
                " Enter text | Enter: process ",
                app.input_buffer.as_str(),
                Color::Yellow,
            ),
            LookupMode::Word => (
                " Enter one word | Enter: look up ",
                app.input_buffer.as_str(),
                Color::Green,
            ),
        },
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_results<S: SynonymSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let messages = app.session.messages();
    let label = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let lines: Vec<Line> = match &app.output {
        None => vec![Line::from(Span::styled(
            "Nothing yet",
            Style::default().fg(Color::DarkGray),
        ))],
        Some(Output::Word(result)) => {
            let mut lines = vec![Line::from(Span::styled(
                result.word.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))];
            if result.candidates.is_empty() {
                lines.push(Line::from(messages.no_synonyms));
            }
            if !result.custom_synonyms().is_empty() {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(messages.custom_label, label)));
                lines.push(Line::from(join_synonyms(result.custom_synonyms())));
            }
            if !result.wiki_synonyms().is_empty() {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(messages.external_label, label)));
                lines.push(Line::from(join_synonyms(result.wiki_synonyms())));
            }
            lines
        }
        Some(Output::Text(result)) => {
            let mut lines = vec![Line::from(Span::styled(messages.modified_text, label))];
            lines.extend(result.modified_text.lines().map(|l| Line::from(l.to_string())));
            lines.push(Line::from(""));

            if result.has_replacements() {
                lines.push(Line::from(Span::styled(messages.replaced_words, label)));
                for record in &result.report {
                    lines.push(Line::from(Span::styled(
                        record_heading(record, messages),
                        Style::default().fg(Color::Green),
                    )));
                    for detail in candidate_lines(record, messages) {
                        lines.push(Line::from(format!("  {detail}")));
                    }
                }
            } else {
                lines.push(Line::from(Span::styled(
                    messages.no_replacements,
                    Style::default().fg(Color::Yellow),
                )));
            }
            lines
        }
    };

    let results = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0))
        .block(
            Block::default()
                .title(" Results ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(results, area);
}

fn render_messages<S: SynonymSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
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

fn render_status<S: SynonymSource>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let mode_text = match app.mode {
        LookupMode::Text => "Mode: Text",
        LookupMode::Word => "Mode: Word",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let dict_text = format!(
        "Dictionary: {} | Lang: {}",
        app.session.dictionary().len(),
        app.session.language()
    );
    let dict = Paragraph::new(dict_text).alignment(Alignment::Center);
    f.render_widget(dict, chunks[1]);

    let help = Paragraph::new("ESC: Quit | Tab: Mode | Ctrl+O: Dictionary | Ctrl+S: Save | ↑↓: Scroll")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
