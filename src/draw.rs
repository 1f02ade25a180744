use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};
use tui::widgets::{Block, BorderType, Borders, Paragraph, Tabs, Wrap};
use tui::{Frame, Terminal};

use crate::app::{App, MenuItem};
use crate::components::standings::StandingsTable;
use crate::content;
use crate::state::app_state::{MatchupField, RankingsMode, ScheduleRow};
use crate::state::network::{ERROR_CHAR, LoadingState};
use crate::ui::layout::LayoutAreas;
use league_api::{Deadline, Matchup};

static TABS: &[&str; 7] = &[
    "Rankings",
    "Schedule",
    "Deadlines",
    "Rules",
    "Draft",
    "History",
    "Punishments",
];

pub fn draw<B>(terminal: &mut Terminal<B>, app: &mut App, loading: LoadingState)
where
    B: Backend,
{
    let current_size = terminal.size().unwrap_or_default();
    if current_size.width <= 10 || current_size.height <= 10 {
        return;
    }

    let mut layout = LayoutAreas::new(current_size);

    terminal
        .draw(|f| {
            layout.update(f.area(), app.settings.full_screen);

            if !app.settings.full_screen {
                draw_tabs(f, layout.tab_bar, app);
            }

            match app.state.active_tab {
                MenuItem::Rankings => draw_rankings(f, layout.main, app),
                MenuItem::Schedule => draw_schedule(f, layout.main, app),
                MenuItem::Deadlines => draw_deadlines(f, layout.main, app),
                MenuItem::Rules => draw_rules(f, layout.main, app),
                MenuItem::Draft => draw_draft(f, layout.main, app),
                MenuItem::History => draw_history(f, layout.main, app),
                MenuItem::Punishments => draw_punishments(f, layout.main, app),
                MenuItem::Help => draw_help(f, layout.main),
            }

            if app.state.show_logs {
                draw_logs(f, layout.main);
            }

            draw_status_line(f, layout.status, app);
            draw_loading_spinner(f, f.area(), app, loading);
        })
        .unwrap();
}

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn draw_tabs(f: &mut Frame, tab_bar: [Rect; 2], app: &App) {
    let style = Style::default().fg(Color::White);
    let border_type = BorderType::Rounded;

    let tab_index = match app.state.active_tab {
        MenuItem::Rankings => 0,
        MenuItem::Schedule => 1,
        MenuItem::Deadlines => 2,
        MenuItem::Rules => 3,
        MenuItem::Draft => 4,
        MenuItem::History => 5,
        MenuItem::Punishments => 6,
        MenuItem::Help => 0,
    };

    let titles: Vec<Line> = TABS.iter().map(|t| Line::from(*t)).collect();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .highlight_style(Style::default().add_modifier(Modifier::UNDERLINED))
        .select(tab_index)
        .style(style);
    f.render_widget(tabs, tab_bar[0]);

    let help = Paragraph::new("Help: ? ")
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .style(style);
    f.render_widget(help, tab_bar[1]);
}

// ---------------------------------------------------------------------------
// Rankings
// ---------------------------------------------------------------------------

fn draw_rankings(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::White).title(" Power Rankings ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.state.rankings.board.is_none() {
        let msg = if let Some(err) = app.state.last_error.as_deref() {
            format!("Rankings load failed:\n{err}")
        } else {
            "Loading power rankings...".to_string()
        };
        f.render_widget(
            Paragraph::new(msg)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let [key_legend, list_area, input_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .areas(inner);

    let legend = match app.state.rankings.mode {
        RankingsMode::Grab { .. } => "GRAB: j/k=move  Enter=drop  Esc=cancel",
        _ => "Keys: j/k=move  g=grab  #=set rank  e=write-up  s=export  Enter=drop",
    };
    f.render_widget(
        Paragraph::new(legend).style(Style::default().fg(Color::DarkGray)),
        key_legend,
    );

    let rows = app.state.rankings.display_rows();
    f.render_widget(StandingsTable { rows: &rows }, list_area);

    match &app.state.rankings.mode {
        RankingsMode::RankEntry { id, input } => {
            let name = team_name(app, id);
            draw_input_box(f, input_area, &format!(" New rank for {name} "), input);
        }
        RankingsMode::EditWriteup { id, input } => {
            let name = team_name(app, id);
            draw_input_box(f, input_area, &format!(" Write-up: {name} "), input);
        }
        _ => {
            if let Some(row) = rows.iter().find(|r| r.selected) {
                let block = default_border(Color::DarkGray).title(" Write-up ");
                let body = block.inner(input_area);
                f.render_widget(block, input_area);
                f.render_widget(
                    Paragraph::new(row.team.writeup.as_str())
                        .style(Style::default().fg(Color::Gray))
                        .wrap(Wrap { trim: true }),
                    body,
                );
            }
        }
    }
}

fn team_name(app: &App, id: &str) -> String {
    app.state
        .rankings
        .board
        .as_ref()
        .and_then(|b| b.team(id))
        .map(|t| t.name.clone())
        .unwrap_or_else(|| id.to_string())
}

fn draw_input_box(f: &mut Frame, area: Rect, title: &str, input: &str) {
    let block = default_border(Color::Yellow).title(title.to_string());
    let body = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
        Paragraph::new(format!("{input}_")).style(Style::default().fg(Color::Yellow)),
        body,
    );
}

// ---------------------------------------------------------------------------
// Schedule
// ---------------------------------------------------------------------------

fn draw_schedule(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::White).title(" Weekly Schedule ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.state.schedule.weeks.is_empty() {
        f.render_widget(
            Paragraph::new("Loading schedule...")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let editor_open = app.state.schedule.editor.is_some();
    let [key_legend, list_area, input_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(if editor_open { 3 } else { 0 }),
    ])
    .areas(inner);

    f.render_widget(
        Paragraph::new("Keys: j/k=move  Enter=expand week  e=write-up  p=prediction")
            .style(Style::default().fg(Color::DarkGray)),
        key_legend,
    );

    let mut lines: Vec<Line> = Vec::new();
    let visible = app.state.schedule.visible_rows();
    for (idx, row) in visible.iter().enumerate() {
        let marker = if idx == app.state.schedule.selected { ">" } else { " " };
        match *row {
            ScheduleRow::Week(w) => {
                let week = &app.state.schedule.weeks[w];
                let arrow = if app.state.schedule.expanded.contains(&week.week) {
                    "v"
                } else {
                    ">"
                };
                lines.push(Line::from(Span::styled(
                    format!("{marker} {arrow} Week {}", week.week),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )));
            }
            ScheduleRow::Matchup(w, m) => {
                let matchup = &app.state.schedule.weeks[w].matchups[m];
                lines.push(matchup_line(marker, matchup));
            }
        }
    }

    // Keep the selected row inside the viewport.
    let visible_height = list_area.height as usize;
    let scroll = app
        .state
        .schedule
        .selected
        .saturating_sub(visible_height.saturating_sub(1)) as u16;
    f.render_widget(Paragraph::new(lines).scroll((scroll, 0)), list_area);

    if let Some(editor) = &app.state.schedule.editor {
        let title = match editor.field {
            MatchupField::Writeup => " Matchup write-up ",
            MatchupField::Prediction => " Prediction (<team> by <margin>, empty clears) ",
        };
        draw_input_box(f, input_area, title, &editor.input);
    }
}

fn matchup_line<'a>(marker: &'a str, matchup: &'a Matchup) -> Line<'a> {
    let mut spans = vec![
        Span::raw(format!("{marker}   ")),
        Span::styled(&matchup.team1, Style::default().fg(Color::White)),
        Span::styled(" vs ", Style::default().fg(Color::DarkGray)),
        Span::styled(&matchup.team2, Style::default().fg(Color::White)),
    ];
    if let Some(p) = &matchup.prediction {
        spans.push(Span::styled(
            format!("  [{} by {}]", p.winner, p.margin),
            Style::default().fg(Color::Green),
        ));
    }
    if matchup.writeup != league_api::PLACEHOLDER_MATCHUP_WRITEUP {
        let preview: String = matchup.writeup.chars().take(40).collect();
        spans.push(Span::styled(
            format!("  {preview}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

// ---------------------------------------------------------------------------
// Deadlines
// ---------------------------------------------------------------------------

fn draw_deadlines(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::White).title(" League Deadlines ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [key_legend, list_area, input_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .areas(inner);

    f.render_widget(
        Paragraph::new("Keys: j/k=move  e=edit date")
            .style(Style::default().fg(Color::DarkGray)),
        key_legend,
    );

    let mut lines: Vec<Line> = Vec::new();
    for (idx, deadline) in app.state.deadlines.deadlines.iter().enumerate() {
        let marker = if idx == app.state.deadlines.selected { ">" } else { " " };
        lines.push(deadline_line(marker, deadline));
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "Loading deadlines...",
            Style::default().fg(Color::DarkGray),
        )));
    }
    f.render_widget(Paragraph::new(lines), list_area);

    if let Some(input) = &app.state.deadlines.editor {
        draw_input_box(f, input_area, " Date (YYYY-MM-DD, empty clears) ", input);
    }
}

fn deadline_line<'a>(marker: &'a str, deadline: &Deadline) -> Line<'a> {
    let date = deadline
        .date
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| "Not set".to_string());
    let date_style = if deadline.date.is_some() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Line::from(vec![
        Span::raw(format!("{marker} ")),
        Span::styled(
            format!("{:<18}", deadline.kind.label()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(date, date_style),
    ])
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

fn draw_rules(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::White).title(" League Rules ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let searching = app.state.rules.searching || !app.state.rules.query.is_empty();
    let [key_legend, list_area, input_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(if searching { 1 } else { 0 }),
    ])
    .areas(inner);

    f.render_widget(
        Paragraph::new("Keys: j/k=scroll  /=search  Esc=clear search")
            .style(Style::default().fg(Color::DarkGray)),
        key_legend,
    );

    let rules = &app.state.rules;
    let mut lines: Vec<Line> = Vec::new();
    for category in content::RULES {
        let matching: Vec<&content::Rule> = category
            .rules
            .iter()
            .filter(|r| rules.matches(r.title) || rules.matches(r.body))
            .collect();
        if matching.is_empty() {
            continue;
        }
        lines.push(Line::from(Span::styled(
            category.name,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        for rule in matching {
            let mut spans = vec![Span::styled(
                format!("  {}: ", rule.title),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )];
            spans.extend(highlight_query(rule.body, &rules.query));
            lines.push(Line::from(spans));
        }
        lines.push(Line::from(""));
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("No rules match {:?}", rules.query),
            Style::default().fg(Color::DarkGray),
        )));
    }

    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((rules.scroll, 0)),
        list_area,
    );

    if searching {
        let cursor = if rules.searching { "_" } else { "" };
        f.render_widget(
            Paragraph::new(format!("/{}{cursor}", rules.query))
                .style(Style::default().fg(Color::Yellow)),
            input_area,
        );
    }
}

/// Split `text` into spans with every query hit highlighted.
fn highlight_query<'a>(text: &'a str, query: &str) -> Vec<Span<'a>> {
    let base = Style::default().fg(Color::Gray);
    if query.is_empty() {
        return vec![Span::styled(text, base)];
    }

    let highlight = Style::default().fg(Color::Black).bg(Color::Yellow);
    let lower_text = text.to_lowercase();
    let lower_query = query.to_lowercase();

    let mut spans = Vec::new();
    let mut cursor = 0;
    while let Some(found) = lower_text[cursor..].find(&lower_query) {
        let start = cursor + found;
        let end = start + lower_query.len();
        if start > cursor {
            spans.push(Span::styled(&text[cursor..start], base));
        }
        spans.push(Span::styled(&text[start..end], highlight));
        cursor = end;
    }
    if cursor < text.len() {
        spans.push(Span::styled(&text[cursor..], base));
    }
    spans
}

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

fn draw_draft(f: &mut Frame, area: Rect, app: &App) {
    let round = app.state.draft.round;
    let block = default_border(Color::White)
        .title(format!(" 2025 Draft — Round {round}/{} ", content::DRAFT_ROUNDS));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        "Keys: h/l=round",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));

    for (_, pick, team, player, position) in content::round_picks(round) {
        lines.push(Line::from(vec![
            Span::styled(format!("{pick:>3}. "), Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{position:<4}"), Style::default().fg(position_color(position))),
            Span::styled(format!("{player:<24}"), Style::default().fg(Color::White)),
            Span::styled(*team, Style::default().fg(Color::Gray)),
        ]));
    }

    f.render_widget(Paragraph::new(lines), inner);
}

fn position_color(position: &str) -> Color {
    match position {
        "QB" => Color::Magenta,
        "RB" => Color::Green,
        "WR" => Color::Cyan,
        "TE" => Color::Yellow,
        "K" => Color::Blue,
        _ => Color::Red,
    }
}

// ---------------------------------------------------------------------------
// History
// ---------------------------------------------------------------------------

fn draw_history(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::White).title(" League History ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        "Past Champions",
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )));
    for season in content::CHAMPIONS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", season.year), Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:<24}", season.champion),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(format!("({})", season.record), Style::default().fg(Color::Gray)),
            Span::styled(
                format!("  2nd: {}  3rd: {}", season.runner_up, season.third_place),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Most Decorated",
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    )));
    for (team, titles, runner_ups, playoffs) in content::TOP_TEAMS {
        lines.push(Line::from(Span::styled(
            format!("  {team:<24} {titles} title(s), {runner_ups} runner-up(s), {playoffs} playoff berths"),
            Style::default().fg(Color::Gray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Hall of Shame",
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    )));
    for (team, sackos, appearances) in content::BOTTOM_TEAMS {
        lines.push(Line::from(Span::styled(
            format!("  {team:<24} {sackos} sacko(s), {appearances} last-place finishes"),
            Style::default().fg(Color::Gray),
        )));
    }

    f.render_widget(
        Paragraph::new(lines).scroll((app.state.history.scroll, 0)),
        inner,
    );
}

// ---------------------------------------------------------------------------
// Punishments
// ---------------------------------------------------------------------------

fn draw_punishments(f: &mut Frame, area: Rect, app: &App) {
    let title = if app.state.punishments.show_sackos {
        " Sacko Record "
    } else {
        " Punishments "
    };
    let block = default_border(Color::White).title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        "Keys: Tab=flip between punishments and sacko record",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Reigning Sacko: ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::styled(content::CURRENT_SACKO, Style::default().fg(Color::White)),
    ]));
    lines.push(Line::from(""));

    if app.state.punishments.show_sackos {
        for (year, member, punishment) in content::PAST_SACKOS {
            lines.push(Line::from(vec![
                Span::styled(format!("{year} "), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{member:<10}"), Style::default().fg(Color::White)),
                Span::styled(*punishment, Style::default().fg(Color::Gray)),
            ]));
        }
    } else {
        for punishment in content::PUNISHMENTS {
            lines.push(Line::from(Span::styled(
                punishment.title,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                punishment.body,
                Style::default().fg(Color::Gray),
            )));
            lines.push(Line::from(""));
        }
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

// ---------------------------------------------------------------------------
// Help, logs, status, spinner
// ---------------------------------------------------------------------------

fn draw_help(f: &mut Frame, area: Rect) {
    let block = default_border(Color::DarkGray);
    let inner = block.inner(area);
    f.render_widget(block, area);
    let text = "Help\n\n\
        q=quit  1-7=tabs  ?=help  f=full screen  \"=logs\n\n\
        Rankings: j/k=move  g=grab  Enter=drop  Esc=cancel  #=set rank  e=write-up  s=export standings\n\
        Schedule: j/k=move  Enter=expand week  e=write-up  p=prediction\n\
        Deadlines: j/k=move  e=edit date\n\
        Rules: /=search  j/k=scroll\n\
        Draft: h/l=round\n\
        Punishments: Tab=sacko record";
    f.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center),
        inner,
    );
}

fn draw_logs(f: &mut Frame, area: Rect) {
    let [_, log_area] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(10)]).areas(area);
    let widget = tui_logger::TuiLoggerWidget::default()
        .block(default_border(Color::DarkGray).title(" Logs "))
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_info(Style::default().fg(Color::Gray));
    f.render_widget(widget, log_area);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let (text, style) = if let Some(err) = app.state.last_error.as_deref() {
        (err.to_string(), Style::default().fg(Color::Red))
    } else if let Some(status) = app.state.status.as_deref() {
        (status.to_string(), Style::default().fg(Color::Yellow))
    } else {
        (
            "q=quit  ?=help".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    };
    f.render_widget(Paragraph::new(text).style(style), area);
}

fn draw_loading_spinner(f: &mut Frame, area: Rect, app: &App, loading: LoadingState) {
    if !loading.is_loading && loading.spinner_char != ERROR_CHAR {
        return;
    }
    let style = match loading.spinner_char {
        ERROR_CHAR => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::White),
    };
    let spinner = Paragraph::new(loading.spinner_char.to_string())
        .alignment(Alignment::Right)
        .style(style);
    let area = if app.settings.full_screen {
        Rect::new(area.width.saturating_sub(3), area.height.saturating_sub(2), 1, 1)
    } else {
        Rect::new(area.width.saturating_sub(11), 1, 1, 1)
    };
    f.render_widget(spinner, area);
}
