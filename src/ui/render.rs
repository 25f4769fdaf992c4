use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::app::{App, FocusPane, Panel};

/// Rows reserved for the input block (borders included).
pub const INPUT_HEIGHT: u16 = 8;

/// Visible editor lines inside the input block.
pub const INPUT_VIEW_HEIGHT: usize = (INPUT_HEIGHT - 2) as usize;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn render(frame: &mut Frame, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),            // Header
            Constraint::Length(INPUT_HEIGHT), // Input editor
            Constraint::Length(1),            // Status line
            Constraint::Min(0),               // Result panels
            Constraint::Length(1),            // Footer
        ])
        .split(frame.area());

    render_header(frame, app, main_chunks[0]);
    render_input(frame, app, main_chunks[1]);
    render_status(frame, app, main_chunks[2]);
    render_results(frame, app, main_chunks[3]);
    render_footer(frame, app, main_chunks[4]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let header = Paragraph::new(vec![
        Line::styled(
            "محسن النصوص الروائية",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            "ارتقِ بكتابتك العربية إلى مستوى أدبي بمساعدة الذكاء الاصطناعي",
            Style::default().fg(theme.fg_dim),
        ),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.fg_dim)),
    );

    frame.render_widget(header, area);
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let title = if app.loading {
        format!(
            " النص الأصلي {} ",
            SPINNER_FRAMES[(app.tick as usize) % SPINNER_FRAMES.len()]
        )
    } else {
        " النص الأصلي ".to_string()
    };

    let border_color = if app.loading {
        theme.fg_dim
    } else if app.focus == FocusPane::Editor {
        theme.accent
    } else {
        theme.fg_dim
    };

    let text_style = if app.loading {
        Style::default().fg(theme.fg_dim)
    } else {
        Style::default().fg(theme.fg)
    };

    let scroll_top = app.editor.scroll_top();
    let lines: Vec<Line> = app
        .editor
        .lines()
        .iter()
        .skip(scroll_top)
        .take(INPUT_VIEW_HEIGHT)
        .map(|line| Line::styled(line.clone(), text_style))
        .collect();

    let input = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(border_color)),
    );

    frame.render_widget(input, area);

    // Place the terminal cursor inside the editor while typing is possible.
    if app.focus == FocusPane::Editor && app.input_enabled() {
        let (row, col) = app.editor.cursor();
        if row >= scroll_top && row < scroll_top + INPUT_VIEW_HEIGHT {
            let x = area.x + 1 + (col as u16).min(area.width.saturating_sub(2));
            let y = area.y + 1 + (row - scroll_top) as u16;
            frame.set_cursor_position(Position::new(x, y));
        }
    }
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let line = if let Some(error) = &app.error {
        Line::styled(
            error.clone(),
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        )
    } else if app.loading {
        Line::styled("جارٍ تحسين النص...", Style::default().fg(theme.fg_dim))
    } else {
        Line::from("")
    };

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_results(frame: &mut Frame, app: &App, area: Rect) {
    if !app.show_results() {
        let hint = Paragraph::new(Line::styled(
            "اكتب نصًا ثم اضغط Ctrl+S لعرض النسخ الثلاث هنا",
            Style::default().fg(app.theme.fg_dim),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(hint, area);
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    for (panel, column) in Panel::ALL.into_iter().zip(columns.iter()) {
        render_panel(frame, app, panel, *column);
    }
}

fn render_panel(frame: &mut Frame, app: &App, panel: Panel, area: Rect) {
    let theme = &app.theme;
    let accent = match panel {
        Panel::Corrected => theme.corrected,
        Panel::Improved => theme.improved,
        Panel::Literary => theme.literary,
    };

    let focused = app.focus == FocusPane::Results(panel);
    let border_color = if focused { accent } else { theme.fg_dim };

    let mut title_spans = vec![Span::styled(
        format!(" {} ", panel.title()),
        Style::default().fg(accent).add_modifier(Modifier::BOLD),
    )];
    if app.copied_visible(panel) {
        title_spans.push(Span::styled(
            "✓ نُسخ ",
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(title_spans))
        .border_style(Style::default().fg(border_color));

    let content = if app.loading {
        skeleton_lines(area.width, Style::default().fg(theme.fg_dim))
    } else {
        match app.panel_text(panel) {
            Some(text) => text
                .lines()
                .map(|line| Line::styled(line.to_string(), Style::default().fg(theme.fg)))
                .collect(),
            None => vec![Line::styled("...", Style::default().fg(theme.fg_dim))],
        }
    };

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Placeholder bars shown while a request is in flight, with the varying
/// widths of the original loading skeleton.
fn skeleton_lines(panel_width: u16, style: Style) -> Vec<Line<'static>> {
    let inner = panel_width.saturating_sub(4) as usize;
    let widths = [inner * 5 / 6, inner, inner * 3 / 4, inner * 4 / 6];

    let mut lines = Vec::with_capacity(widths.len() * 2);
    for width in widths {
        lines.push(Line::styled("░".repeat(width), style));
        lines.push(Line::from(""));
    }
    lines
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.loading {
        "Enhancing... input is disabled until the request settles"
    } else {
        match app.focus {
            FocusPane::Editor => "[Ctrl+S] Enhance  [Tab] Switch pane  [Esc] Quit",
            FocusPane::Results(_) => "[y] Copy panel  [Tab] Switch pane  [Esc] Quit",
        }
    };

    let footer = Paragraph::new(help_text)
        .style(Style::default().fg(app.theme.fg_dim))
        .block(Block::default());

    frame.render_widget(footer, area);
}
