use crate::domain::{LogAction, LogEntry};
use crate::ui::app::App;
use crate::ui::dialog::DialogState;
use crate::ui::footer::{Footer, FooterMode};
use crate::ui::header::{Header, HeaderState};
use crate::ui::layout::{body_columns, centered_rect_by_size, layout_regions};
use crate::ui::status::StatusLevel;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, POPUP_BORDER,
    STATUS_ERROR, STATUS_OK, STATUS_WARN, WAREHOUSE_BADGE,
};
use chrono::Local;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

const TIME_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());

    let header = HeaderState {
        user: app.current_user().map(|user| user.name),
        saving: app.is_saving(),
        loading_stock: app.stock().loading,
    };
    frame.render_widget(Header::widget(&header), regions.header);

    let (left, right) = body_columns(regions.body);
    draw_inventory(frame, app, left);
    draw_activity(frame, app, right);
    draw_status(frame, app, regions.status);

    let mode = match app.dialog() {
        DialogState::Idle => FooterMode::Main,
        DialogState::AwaitingPlate { .. } => FooterMode::PlatePrompt,
        _ => FooterMode::Confirm,
    };
    frame.render_widget(Footer::widget(mode, regions.footer), regions.footer);

    if app.stock().visible {
        draw_stock_panel(frame, app, regions.body);
    }

    match app.dialog() {
        DialogState::Idle => {}
        DialogState::AwaitingPlate {
            item_name, plate, ..
        } => draw_plate_prompt(frame, item_name, plate, app.dialog().plate_ready()),
        DialogState::AwaitingSaveConfirmation { logs } => draw_save_confirmation(frame, logs),
        DialogState::AwaitingClearConfirmation => draw_clear_confirmation(frame),
    }
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn draw_inventory(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let text_style = Style::default().fg(HEADER_TEXT);
    let items: Vec<ListItem> = app
        .ledger()
        .inventory
        .iter()
        .map(|item| {
            let quantity_style = if item.quantity <= 0 {
                Style::default().fg(STATUS_ERROR)
            } else {
                Style::default().fg(STATUS_OK)
            };
            let mut spans = vec![
                Span::styled(
                    format!("{:>3}  ", item.code),
                    Style::default().fg(HEADER_SEPARATOR),
                ),
                Span::styled(format!("{:<34}", item.name), text_style),
                Span::styled(format!("{:>5}", item.quantity), quantity_style),
            ];
            if let Some(stock) = app.stock().quantity_for(item.code) {
                spans.push(Span::styled(
                    format!("  warehouse: {}", stock),
                    Style::default().fg(WAREHOUSE_BADGE),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(panel(" Inventory "))
        .highlight_style(
            Style::default()
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");
    let mut state = ListState::default().with_selected(Some(app.selected_index()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn action_style(action: LogAction) -> Style {
    match action {
        LogAction::In => Style::default().fg(STATUS_OK),
        LogAction::Out => Style::default().fg(STATUS_ERROR),
    }
}

fn log_line(entry: &LogEntry) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            format!("{} x{} ", entry.item_name, entry.quantity),
            Style::default().fg(HEADER_TEXT),
        ),
        Span::styled(
            entry.action.label().to_string(),
            action_style(entry.action).add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(plate) = &entry.plate {
        spans.push(Span::styled(
            format!(" [{}]", plate),
            Style::default().fg(ACCENT),
        ));
    }
    Line::from(spans)
}

fn draw_activity(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let logs = &app.ledger().logs;
    let title = format!(" Activity ({}) ", logs.len());
    if logs.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No movements recorded.",
            Style::default().fg(HEADER_SEPARATOR),
        )))
        .block(panel(&title));
        frame.render_widget(empty, area);
        return;
    }

    let dim = Style::default().fg(HEADER_SEPARATOR);
    let items: Vec<ListItem> = logs
        .iter()
        .map(|entry| {
            let when = entry.timestamp.with_timezone(&Local).format(TIME_FORMAT);
            ListItem::new(vec![
                log_line(entry),
                Line::from(Span::styled(
                    format!("  {} · {}", entry.user_name, when),
                    dim,
                )),
            ])
        })
        .collect();
    frame.render_widget(List::new(items).block(panel(&title)), area);
}

fn draw_status(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(message) = app.status().current() else {
        return;
    };
    let color = match message.level {
        StatusLevel::Info => HEADER_TEXT,
        StatusLevel::Success => STATUS_OK,
        StatusLevel::Error => STATUS_ERROR,
    };
    let line = Line::from(Span::styled(
        format!(" {}", message.text),
        Style::default().fg(color),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_popup(frame: &mut Frame<'_>, area: Rect, title: &str, lines: Vec<Line<'_>>) {
    frame.render_widget(Clear, area);
    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POPUP_BORDER)),
        );
    frame.render_widget(widget, area);
}

fn draw_stock_panel(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let stock = app.stock();
    let mut lines = Vec::new();

    if let Some(error) = stock.error() {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(STATUS_ERROR),
        )));
    }

    if stock.rows().is_empty() {
        if stock.loading {
            lines.push(Line::from(Span::styled(
                "Loading stock...",
                Style::default().fg(STATUS_WARN),
            )));
        } else if stock.error().is_none() {
            lines.push(Line::from("No stock found."));
        }
    } else {
        for row in stock.rows() {
            let dim = Style::default().fg(HEADER_SEPARATOR);
            lines.push(Line::from(vec![
                Span::styled(format!("{:>5}  ", row.code), dim),
                Span::styled(format!("{:<40}", row.name), Style::default().fg(HEADER_TEXT)),
                Span::styled(
                    format!("{:>6}", row.quantity),
                    Style::default().fg(WAREHOUSE_BADGE),
                ),
            ]));
        }
    }

    let width = body.width.saturating_mul(4) / 5;
    let area = centered_rect_by_size(width, body.height, body);
    draw_popup(frame, area, " Warehouse stock (r: refresh, w: close) ", lines);
}

fn draw_plate_prompt(frame: &mut Frame<'_>, item_name: &str, plate: &str, ready: bool) {
    let mut lines = vec![
        Line::from(format!("Vehicle plate for the OUT of {}:", item_name)),
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(ACCENT)),
            Span::styled(
                format!("{}_", plate),
                Style::default()
                    .fg(HEADER_TEXT)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];
    if !ready {
        lines.push(Line::from(Span::styled(
            "Enter a plate to continue.",
            Style::default().fg(HEADER_SEPARATOR),
        )));
    }
    let area = centered_rect_by_size(56, 8, frame.area());
    draw_popup(frame, area, " Record OUT ", lines);
}

fn draw_save_confirmation(frame: &mut Frame<'_>, logs: &[LogEntry]) {
    let mut lines = vec![
        Line::from(format!("Send {} record(s) to the sheet?", logs.len())),
        Line::from(""),
    ];
    for entry in logs {
        let mut line = log_line(entry);
        line.spans.insert(0, Span::raw("• "));
        line.spans.push(Span::styled(
            format!(" ({})", entry.user_name),
            Style::default().fg(HEADER_SEPARATOR),
        ));
        lines.push(line);
    }
    let screen = frame.area();
    let height = u16::try_from(logs.len())
        .unwrap_or(u16::MAX)
        .saturating_add(5);
    let area = centered_rect_by_size(screen.width.saturating_mul(3) / 4, height, screen);
    draw_popup(frame, area, " Confirm save ", lines);
}

fn draw_clear_confirmation(frame: &mut Frame<'_>) {
    let lines = vec![
        Line::from("Clear the activity log?"),
        Line::from(""),
        Line::from(Span::styled(
            "Unsaved movements will be lost and the inventory reset.",
            Style::default().fg(STATUS_WARN),
        )),
    ];
    let area = centered_rect_by_size(62, 7, frame.area());
    draw_popup(frame, area, " Confirm clear ", lines);
}
