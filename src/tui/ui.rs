//! UI rendering for the front panel.

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::app::PanelApp;
use crate::cpu::RegId;
use crate::display::render_masks;

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &PanelApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(10),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(frame.area());

    draw_display(frame, chunks[0], app);
    draw_registers(frame, chunks[1], app);
    draw_status(frame, chunks[2], app);
    draw_help(frame, chunks[3]);
}

/// Draw the seven-segment display.
fn draw_display(frame: &mut Frame, area: Rect, app: &PanelApp) {
    let art = render_masks(&app.masks);
    let lines: Vec<Line> = art
        .lines()
        .map(|l| {
            Line::from(Span::styled(
                l.to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))
        })
        .collect();

    let display = Paragraph::new(lines).block(
        Block::default()
            .title(" Display ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );

    frame.render_widget(display, area);
}

/// Draw the register table, pointer, and status flags.
fn draw_registers(frame: &mut Frame, area: Rect, app: &PanelApp) {
    let mut content: Vec<Line> = RegId::ALL
        .iter()
        .map(|id| {
            let register = app.state.get(*id);
            let style = if *id == RegId::X {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else if register.is_zero() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::raw(format!("{}: ", id)),
                Span::styled(register.to_decimal_string(), style),
            ])
        })
        .collect();

    let flags: String = (0..crate::cpu::Status::COUNT)
        .map(|n| if app.state.status().get(n) { '1' } else { '0' })
        .collect();
    content.push(Line::from(vec![
        Span::raw("P: "),
        Span::styled(
            format!("{}", app.state.pointer()),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("   Status: "),
        Span::styled(flags, Style::default().fg(Color::Cyan)),
    ]));

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Registers ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );

    frame.render_widget(paragraph, area);
}

/// Draw status bar.
fn draw_status(frame: &mut Frame, area: Rect, app: &PanelApp) {
    let status = Paragraph::new(app.status.clone())
        .style(Style::default().fg(Color::White))
        .block(Block::default().title(" Status ").borders(Borders::ALL));

    frame.render_widget(status, area);
}

/// Draw help panel.
fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(vec![
        Line::from("1-4: Load documented case  c: Canonicalize"),
        Line::from("t: Test pattern  x: Reset  q: Quit"),
    ])
    .style(Style::default().fg(Color::DarkGray))
    .block(Block::default().title(" Help ").borders(Borders::ALL));

    frame.render_widget(help, area);
}
