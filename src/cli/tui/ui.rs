//! TUI rendering logic

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Row, Table, Wrap},
};

use crate::cli::tui::app::TuiApp;
use crate::models::{FocusedPane, PlayerEntry};
use crate::sync::DetailPanel;

const NOTIFICATION_WIDTH: u16 = 48;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &TuiApp) {
    // Main layout with help bar at bottom
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(main_chunks[0]);

    render_server_list(f, app, chunks[0]);

    match app.controller.state().detail() {
        Some(detail) => render_detail_panel(f, app, detail, chunks[1]),
        None => render_welcome(f, chunks[1]),
    }

    render_help_bar(f, app, main_chunks[1]);
    render_notifications(f, app);

    if app.show_help {
        render_help_overlay(f);
    }
}

fn render_server_list(f: &mut Frame, app: &TuiApp, area: Rect) {
    let state = app.controller.state();

    let items: Vec<ListItem> = state
        .servers()
        .iter()
        .map(|server| {
            let mut spans = vec![
                Span::styled(server.status.symbol(), Style::default().fg(server.status.color())),
                Span::raw(" "),
            ];
            if server.selected {
                spans.push(Span::styled(
                    server.name.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::raw(server.name.as_str()));
            }
            spans.push(Span::styled(
                format!(" [{}]", server.player_count),
                Style::default().fg(Color::Gray),
            ));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let push_indicator = if state.push_connected() {
        " ✅"
    } else {
        " ❌"
    };

    let title = if app.focused_pane == FocusedPane::ServerList {
        format!("🏁 Servers{} [FOCUSED]", push_indicator)
    } else {
        format!("🏁 Servers{}", push_indicator)
    };

    let block = if app.focused_pane == FocusedPane::ServerList {
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
    } else {
        Block::default().title(title).borders(Borders::ALL)
    };

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );

    f.render_stateful_widget(list, area, &mut app.list_state.clone());
}

fn render_welcome(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Welcome to racedeck",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Select a server from the list to view its console and players."),
    ];
    let welcome = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(welcome, area);
}

fn render_detail_panel(f: &mut Frame, app: &TuiApp, detail: &DetailPanel, area: Rect) {
    let state = app.controller.state();
    let roster = roster_height(state.players().len());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(roster),
        ])
        .split(area);

    // Header
    let status = state
        .server(&detail.server_id)
        .map(|s| s.status)
        .unwrap_or_default();
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            detail.server_name.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{} {}", status.symbol(), status),
            Style::default().fg(status.color()),
        ),
        Span::styled(
            "   [S] Start  [X] Stop",
            Style::default().fg(Color::Gray),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    // Console, pinned to the newest line unless scrolled
    let visible = chunks[1].height.saturating_sub(2) as usize;
    let console = state.console();
    let end = console.len().saturating_sub(state.console_offset());
    let start = end.saturating_sub(visible);
    let lines: Vec<Line> = console[start..end]
        .iter()
        .map(|line| colorize_log_line(line))
        .collect();

    let console_title = if state.console_offset() > 0 {
        format!("📜 Console (+{} newer)", state.console_offset())
    } else {
        "📜 Console".to_string()
    };
    let console_block = if app.focused_pane == FocusedPane::Console {
        Block::default()
            .title(format!("{} [FOCUSED]", console_title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
    } else {
        Block::default().title(console_title).borders(Borders::ALL)
    };
    f.render_widget(Paragraph::new(lines).block(console_block), chunks[1]);

    render_players(f, state.players(), chunks[2]);
}

/// Roster rows (at least one for the placeholder, at most 9) plus borders and header
pub(crate) fn roster_height(players: usize) -> u16 {
    players.clamp(1, 9) as u16 + 3
}

fn render_players(f: &mut Frame, players: &[PlayerEntry], area: Rect) {
    let title = format!("🏎️  Players ({})", players.len());
    let block = Block::default().title(title).borders(Borders::ALL);

    if players.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No players connected",
            Style::default().fg(Color::Gray),
        )))
        .alignment(ratatui::layout::Alignment::Center)
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let rows: Vec<Row> = players
        .iter()
        .map(|p| Row::new(vec![p.name.as_str(), p.car.as_str(), p.laptime.as_str()]))
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(35),
            Constraint::Percentage(45),
            Constraint::Percentage(20),
        ],
    )
    .header(
        Row::new(vec!["Driver", "Car", "Best lap"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(block);
    f.render_widget(table, area);
}

/// Stack active notifications in the top-right corner, oldest first
fn render_notifications(f: &mut Frame, app: &TuiApp) {
    let screen = f.area();
    let width = NOTIFICATION_WIDTH.min(screen.width);
    let x = screen.x + screen.width - width;
    let mut y = screen.y + 1;

    for notification in app.controller.notifications().active() {
        if y + 3 > screen.y + screen.height {
            break;
        }
        let area = Rect::new(x, y, width, 3);
        let color = notification.kind.color();
        let widget = Paragraph::new(Line::from(Span::styled(
            notification.message.as_str(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(notification.created_at.format("%H:%M:%S").to_string()),
        )
        .style(Style::default().bg(color));

        f.render_widget(Clear, area);
        f.render_widget(widget, area);
        y += 3;
    }
}

/// Colorize log lines based on content
fn colorize_log_line(line: &str) -> Line<'_> {
    if line.contains("[ERR]") || line.contains("[FTL]") || line.to_lowercase().contains("exception") {
        Line::from(Span::styled(line, Style::default().fg(Color::Red)))
    } else if line.contains("[WRN]") {
        Line::from(Span::styled(line, Style::default().fg(Color::Yellow)))
    } else if line.contains("has connected") {
        Line::from(Span::styled(line, Style::default().fg(Color::Green)))
    } else if line.contains("has disconnected") {
        Line::from(Span::styled(line, Style::default().fg(Color::Magenta)))
    } else {
        Line::from(line)
    }
}

/// Create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn render_help_overlay(f: &mut Frame) {
    let area = centered_rect(60, 50, f.area());
    f.render_widget(Clear, area);

    let help = vec![
        Line::from("↑/↓ or k/j   move cursor / scroll console"),
        Line::from("Enter        select highlighted server"),
        Line::from("Tab          switch focus between list and console"),
        Line::from("s            start selected server"),
        Line::from("x            stop selected server"),
        Line::from("PgUp/PgDn    scroll console by a page"),
        Line::from("End          jump to newest console line"),
        Line::from("q / Esc      quit"),
    ];
    let widget = Paragraph::new(help)
        .block(
            Block::default()
                .title("❓ Help")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

/// Render the help bar at the bottom
fn render_help_bar(f: &mut Frame, app: &TuiApp, area: Rect) {
    let mut help_text = if app.focused_pane == FocusedPane::Console {
        vec![
            Span::styled("[↑↓]Scroll ", Style::default().fg(Color::Cyan)),
            Span::styled("[PgUp/PgDn]Page ", Style::default().fg(Color::Cyan)),
            Span::styled("[End]Newest ", Style::default().fg(Color::Cyan)),
            Span::styled("[Tab]Switch Pane ", Style::default().fg(Color::White)),
        ]
    } else {
        vec![
            Span::styled("[↑↓]Navigate ", Style::default().fg(Color::Cyan)),
            Span::styled("[Enter]Select ", Style::default().fg(Color::Green)),
            Span::styled("[Tab]Switch Pane ", Style::default().fg(Color::White)),
        ]
    };

    if app.controller.state().selected_id().is_some() {
        help_text.extend(vec![
            Span::styled("[S]Start ", Style::default().fg(Color::LightGreen)),
            Span::styled("[X]Stop ", Style::default().fg(Color::Yellow)),
        ]);
    }
    help_text.extend(vec![
        Span::styled("[H/?]Help ", Style::default().fg(Color::Blue)),
        Span::styled("[Q/Ctrl+C/ESC]Quit", Style::default().fg(Color::Red)),
    ]);

    let help_bar = Paragraph::new(Line::from(help_text))
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(help_bar, area);
}
