use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;
use shortly_core::{AppViewModel, HistoryRowView};

use super::layout;

const SPINNER_FRAMES: [char; 4] = ['|', '/', '-', '\\'];

/// Full render pass, called whenever the view model is dirty.
pub fn draw(f: &mut Frame, view: &AppViewModel) {
    let areas = layout::split(f.area());

    render_title(f, areas.title);
    render_input(f, areas.input, view);
    render_status(f, areas.status, view);
    render_result(f, areas.result, view);
    render_history(f, areas.history, view);
    render_hints(f, areas.hints);
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Shortly",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Your modern URL shortener.",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .centered();

    f.render_widget(title, area);
}

fn render_input(f: &mut Frame, area: Rect, view: &AppViewModel) {
    let border_style = if view.busy {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Blue)
    };

    // Two columns go to the borders, one more to the cursor while editing.
    let inner_width = area.width.saturating_sub(2);
    let content = if view.input.is_empty() && !view.busy {
        Line::from(Span::styled(
            "Enter a long URL here...",
            Style::default().fg(Color::DarkGray),
        ))
    } else if view.busy {
        // No cursor while the form is inert.
        Line::from(visible_tail(&view.input, inner_width).to_string())
    } else {
        let tail = visible_tail(&view.input, inner_width.saturating_sub(1));
        Line::from(vec![
            Span::raw(tail.to_string()),
            Span::styled("▌", Style::default().fg(Color::Blue)),
        ])
    };

    let input = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Long URL "),
    );

    f.render_widget(input, area);
}

fn visible_tail(input: &str, width: u16) -> &str {
    let overflow = input.chars().count().saturating_sub(width as usize);
    if overflow == 0 {
        return input;
    }
    match input.char_indices().nth(overflow) {
        Some((start, _)) => &input[start..],
        None => "",
    }
}

fn render_status(f: &mut Frame, area: Rect, view: &AppViewModel) {
    let status = if view.busy {
        let frame = SPINNER_FRAMES[view.spinner_frame as usize % SPINNER_FRAMES.len()];
        Line::from(Span::styled(
            format!(" {} Shortening...", frame),
            Style::default().fg(Color::Yellow),
        ))
    } else if let Some(error) = &view.error {
        Line::from(Span::styled(
            format!(" {}", error),
            Style::default().fg(Color::Red),
        ))
    } else {
        Line::from("")
    };

    f.render_widget(Paragraph::new(status), area);
}

fn render_result(f: &mut Frame, area: Rect, view: &AppViewModel) {
    let lines = match &view.short_url {
        Some(short_url) => vec![
            Line::from(Span::styled(
                " Your short URL:",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                format!(" {}", short_url),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
        ],
        None => Vec::new(),
    };

    f.render_widget(Paragraph::new(lines), area);
}

fn render_history(f: &mut Frame, area: Rect, view: &AppViewModel) {
    let items: Vec<ListItem> = view.history.iter().map(history_row).collect();

    let title = if view.history.is_empty() {
        " History ".to_string()
    } else {
        format!(" History ({}) ", view.history.len())
    };

    let list = List::new(items).block(Block::default().borders(Borders::TOP).title(title));

    f.render_widget(list, area);
}

fn history_row(row: &HistoryRowView) -> ListItem<'static> {
    let day = row.shortened_at.split('T').next().unwrap_or("");

    let mut spans = vec![Span::raw(" ")];
    if !day.is_empty() {
        spans.push(Span::styled(
            format!("{}  ", day),
            Style::default().fg(Color::DarkGray),
        ));
    }
    spans.push(Span::styled(
        row.short_url.clone(),
        Style::default().fg(Color::Green),
    ));
    spans.push(Span::styled(
        format!("  {}", row.long_url),
        Style::default().fg(Color::DarkGray),
    ));

    ListItem::new(Line::from(spans))
}

fn render_hints(f: &mut Frame, area: Rect) {
    let hints = Paragraph::new(" Enter: shorten │ Ctrl+Y: copy result │ Esc: quit ")
        .style(Style::default().fg(Color::DarkGray));

    f.render_widget(hints, area);
}
