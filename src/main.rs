use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use mlb_scoreboard::card::{CardSet, GameCard, HOME_LABEL, NO_GAMES_TEXT, VISITOR_LABEL, VS_DIVIDER};
use mlb_scoreboard::config::Config;
use mlb_scoreboard::display::ChannelDisplay;
use mlb_scoreboard::fetch::FeedSource;
use mlb_scoreboard::scheduler::Scheduler;
use mlb_scoreboard::scoreboard::Scoreboard;
use mlb_scoreboard::state::{apply_delta, AppState, Delta};
use mlb_scoreboard::status::StatusClass;

const CARD_WIDTH: u16 = 38;
const CARD_HEIGHT: u16 = 6;
const ERROR_BANNER: &str = "Unable to load games. Will try again at the next refresh.";

struct App {
    state: AppState,
    should_quit: bool,
    scheduler: Scheduler,
}

impl App {
    fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') | KeyCode::Char('R') => {
                if self.scheduler.refresh_now() {
                    self.state.push_log("[INFO] Refresh requested");
                } else {
                    self.state.push_log("[WARN] Poller is not running");
                }
            }
            KeyCode::Char('j') | KeyCode::Down => self.state.scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.scroll_up(),
            KeyCode::Char('?') => self.state.help_overlay = !self.state.help_overlay,
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let config = Config::from_env();
    let (tx, rx) = mpsc::channel();

    let mut board = Scoreboard::new(config.feed_source());
    let feed_label = board.feed().describe();
    let mut display = ChannelDisplay::new(tx);
    let mut scheduler = Scheduler::new(config.poll_interval);
    scheduler
        .start(move || {
            board.run_cycle(&mut display);
        })
        .context("start poller")?;

    let mut state = AppState::new().with_feed_label(feed_label);
    state.push_log(format!(
        "[INFO] Polling every {}s",
        config.poll_interval.as_secs()
    ));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let mut app = App {
        state,
        should_quit: false,
        scheduler,
    };
    let res = run_app(&mut terminal, &mut app, rx);

    app.scheduler.stop();

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: mpsc::Receiver<Delta>,
) -> io::Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        while let Ok(delta) = rx.try_recv() {
            apply_delta(&mut app.state, delta);
        }

        terminal.draw(|f| ui(f, &app.state))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, state: &AppState) {
    let banner_height = if state.error_visible { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(banner_height),
            Constraint::Min(1),
            Constraint::Length(5),
            Constraint::Length(2),
        ])
        .split(frame.size());

    let header = Paragraph::new(header_text(state))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    if state.error_visible {
        let banner = Paragraph::new(ERROR_BANNER)
            .style(Style::default().fg(Color::White).bg(Color::Red).add_modifier(Modifier::BOLD));
        frame.render_widget(banner, chunks[1]);
    }

    render_games(frame, chunks[2], state);

    let console = Paragraph::new(console_text(state))
        .block(Block::default().title("Console").borders(Borders::ALL));
    frame.render_widget(console, chunks[3]);

    let footer = Paragraph::new("r Refresh | j/k/↑/↓ Scroll | ? Help | q Quit")
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, chunks[4]);

    if state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn header_text(state: &AppState) -> String {
    let updated = state.updated.as_deref().unwrap_or("--:--:--");
    let loading = if state.loading { " | Loading..." } else { "" };
    format!(
        " MLB SCORES | {} | Last updated: {updated}{loading}",
        state.feed_label
    )
}

fn render_games(frame: &mut Frame, area: Rect, state: &AppState) {
    let cards = match &state.cards {
        None => {
            let waiting = Paragraph::new("Waiting for the first update...")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(waiting, area);
            return;
        }
        Some(CardSet::Empty) => {
            let empty = Paragraph::new(NO_GAMES_TEXT)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, area);
            return;
        }
        Some(CardSet::Cards(cards)) => cards,
    };

    if area.height < CARD_HEIGHT || area.width < CARD_WIDTH {
        let small = Paragraph::new("Scoreboard needs a larger terminal")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(small, area);
        return;
    }

    let per_row = (area.width / CARD_WIDTH).max(1) as usize;
    let visible_rows = (area.height / CARD_HEIGHT) as usize;
    let start = (state.scroll / per_row) * per_row;
    let end = (start + per_row * visible_rows).min(cards.len());

    for (i, card) in cards[start..end].iter().enumerate() {
        let row = (i / per_row) as u16;
        let col = (i % per_row) as u16;
        let card_area = Rect {
            x: area.x + col * CARD_WIDTH,
            y: area.y + row * CARD_HEIGHT,
            width: CARD_WIDTH,
            height: CARD_HEIGHT,
        };
        render_card(frame, card_area, card);
    }
}

fn render_card(frame: &mut Frame, area: Rect, card: &GameCard) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(inner);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(42),
            Constraint::Percentage(16),
            Constraint::Percentage(42),
        ])
        .split(rows[0]);

    frame.render_widget(team_column(VISITOR_LABEL, &card.visitor, &card.visitor_score), cols[0]);
    let vs = Paragraph::new(format!("\n{VS_DIVIDER}"))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(vs, cols[1]);
    frame.render_widget(team_column(HOME_LABEL, &card.home, &card.home_score), cols[2]);

    let status = Paragraph::new(card.status_text.as_str())
        .alignment(Alignment::Center)
        .style(status_style(card.status_class));
    frame.render_widget(status, rows[1]);
}

fn team_column<'a>(label: &'a str, name: &'a str, score: &'a str) -> Paragraph<'a> {
    let lines = vec![
        Line::styled(label, Style::default().fg(Color::DarkGray)),
        Line::styled(name, Style::default().add_modifier(Modifier::BOLD)),
        Line::raw(score),
    ];
    Paragraph::new(lines).alignment(Alignment::Center)
}

fn status_style(class: StatusClass) -> Style {
    match class {
        StatusClass::Final => Style::default().fg(Color::Gray),
        StatusClass::Live => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        StatusClass::Upcoming => Style::default().fg(Color::Yellow),
    }
}

fn console_text(state: &AppState) -> String {
    if state.logs.is_empty() {
        return "No messages yet".to_string();
    }
    let start = state.logs.len().saturating_sub(3);
    state
        .logs
        .iter()
        .skip(start)
        .cloned()
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        "MLB Scoreboard - Help".to_string(),
        String::new(),
        "  r            Refresh now".to_string(),
        "  j/k or ↑/↓   Scroll cards".to_string(),
        "  ?            Toggle help".to_string(),
        "  q / Esc      Quit".to_string(),
        String::new(),
        "Status colors:".to_string(),
    ];
    for (color, class) in [
        ("green", StatusClass::Live),
        ("yellow", StatusClass::Upcoming),
        ("gray", StatusClass::Final),
    ] {
        lines.push(format!("  {color:<12} {}", class.as_str()));
    }

    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16 + 4;
    let height = lines.len() as u16 + 2;
    let popup_area = popup_rect(width, height, area);
    frame.render_widget(Clear, popup_area);

    let help = Paragraph::new(lines.join("\n"))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

/// A `width` x `height` box centered in `area`, shrunk to fit.
fn popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
