mod app;
mod config;
mod dataset;
mod engine;
mod event;
mod logging;
mod session;
mod ui;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use app::{App, AppScreen};
use config::Config;
use dataset::VerbSet;
use event::{AppEvent, EventHandler};
use session::drill::Phase;
use session::input::Accent;
use ui::components::conjugation_card::ConjugationCard;
use ui::components::describe_panel::DescribePanel;
use ui::components::stats_sidebar::StatsSidebar;
use ui::components::typing_area::TypingArea;
use ui::layout::{AppLayout, pack_hint_lines};

#[derive(Parser)]
#[command(name = "conjugar", version, about = "Terminal verb conjugation drill")]
struct Cli {
    #[arg(short, long, help = "Infinitive to start drilling")]
    verb: Option<String>,

    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(long, help = "Path to a verb dataset (JSON)")]
    verbs: Option<PathBuf>,

    #[arg(long, help = "Seed for form selection")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let mut config = Config::load().unwrap_or_else(|err| {
        tracing::warn!("failed to load config, using defaults: {err:#}");
        Config::default()
    });

    let dataset_path = cli
        .verbs
        .clone()
        .or_else(|| config.verbs_file.as_ref().map(PathBuf::from));
    let verbs = match dataset_path {
        Some(path) => VerbSet::from_path(&path)
            .with_context(|| format!("loading verbs from {}", path.display()))?,
        None => VerbSet::embedded().context("loading bundled verbs")?,
    };
    tracing::info!(count = verbs.len(), "verb dataset loaded");

    if let Some(verb) = cli.verb {
        if !verbs.contains(&verb) {
            bail!("unknown verb '{verb}'");
        }
        config.default_verb = verb;
    }
    {
        let keys: Vec<&str> = verbs.keys().collect();
        config.normalize_default_verb(&keys);
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }

    let mut app = App::new(config, verbs, cli.seed)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    app.save_config();
    tracing::info!(
        typed = app.tally.forms_typed,
        solved = app.tally.descriptions_solved,
        mismatches = app.tally.mismatches,
        "session finished"
    );

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Resize => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.screen {
        AppScreen::Drill => match app.drill.phase() {
            Phase::Typing => handle_typing_key(app, key),
            Phase::Describing => handle_describing_key(app, key),
        },
        AppScreen::VerbSelect => handle_verb_select_key(app, key),
    }
}

fn accent_for_key(key: &KeyEvent) -> Option<Accent> {
    match key.code {
        KeyCode::F(1) => Some(Accent::A),
        KeyCode::F(2) => Some(Accent::E),
        KeyCode::F(3) => Some(Accent::I),
        KeyCode::F(4) => Some(Accent::O),
        KeyCode::Char(ch) if key.modifiers.contains(KeyModifiers::ALT) => match ch {
            'a' => Some(Accent::A),
            'e' => Some(Accent::E),
            'i' => Some(Accent::I),
            'o' => Some(Accent::O),
            _ => None,
        },
        _ => None,
    }
}

fn handle_typing_key(app: &mut App, key: KeyEvent) {
    if let Some(accent) = accent_for_key(&key) {
        app.insert_accent(accent);
        return;
    }
    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Tab => app.open_verb_menu(),
        KeyCode::Backspace => {
            app.backspace();
        }
        KeyCode::Char(ch) => {
            app.type_char(ch);
        }
        _ => {}
    }
}

fn handle_describing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Tab => app.open_verb_menu(),
        KeyCode::Up | KeyCode::Char('k') => app.focus_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.focus_next(),
        KeyCode::Left | KeyCode::Char('h') => {
            app.cycle_guess(false);
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.cycle_guess(true);
        }
        KeyCode::Enter => {
            app.submit();
        }
        _ => {}
    }
}

fn handle_verb_select_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_verb_menu(),
        KeyCode::Up | KeyCode::Char('k') => app.verb_menu.prev(),
        KeyCode::Down | KeyCode::Char('j') => app.verb_menu.next(),
        KeyCode::Enter => {
            app.choose_verb();
        }
        _ => {}
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;
    let bg = Block::default().style(Style::default().bg(colors.bg()).fg(colors.fg()));
    frame.render_widget(bg, area);

    match app.screen {
        AppScreen::Drill => render_drill(frame, app),
        AppScreen::VerbSelect => render_verb_select(frame, app),
    }
}

fn render_header(frame: &mut ratatui::Frame, app: &App, area: Rect, compact: bool) {
    let colors = &app.theme.colors;
    let phase = match app.drill.phase() {
        Phase::Typing => "Write",
        Phase::Describing => "Describe",
    };
    let title = format!(" {} ", app.drill.verb());
    let info = if compact {
        let tally = &app.tally;
        format!(
            " {phase} | Typed: {} | Described: {} | Acc: {:.0}%",
            tally.forms_typed,
            tally.descriptions_solved,
            tally.accuracy()
        )
    } else {
        format!(" {phase}")
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            &*title,
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            &*info,
            Style::default()
                .fg(colors.text_pending())
                .bg(colors.header_bg()),
        ),
    ]))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, area);
}

fn render_footer(frame: &mut ratatui::Frame, app: &App, area: Rect, hints: &[&str]) {
    let colors = &app.theme.colors;
    let lines: Vec<Line> = pack_hint_lines(hints, area.width as usize)
        .into_iter()
        .map(|line| Line::from(Span::styled(line, Style::default().fg(colors.text_pending()))))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_drill(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let app_layout = AppLayout::new(area);

    render_header(frame, app, app_layout.header, !app_layout.tier.show_sidebar());

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(5)])
        .split(app_layout.main);

    let snapshot = app.drill.snapshot();
    let card = ConjugationCard::new(snapshot, app.theme)
        .show_stem(app.config.show_stem)
        .show_pronoun(app.config.show_pronoun_hint);
    frame.render_widget(card, main_layout[0]);

    let hints: &[&str] = match snapshot.phase {
        Phase::Typing => {
            let typing =
                TypingArea::new(snapshot.typed_text, &snapshot.selected.term, app.theme);
            frame.render_widget(typing, main_layout[1]);
            &[
                "[F1-F4] Accent",
                "[Backspace] Delete",
                "[Tab] Verbs",
                "[Esc] Quit",
            ]
        }
        Phase::Describing => {
            let panel = DescribePanel::new(
                snapshot.guesses,
                app.describe_focus,
                snapshot.error_message(),
                app.theme,
            );
            frame.render_widget(panel, main_layout[1]);
            &[
                "[↑↓] Category",
                "[←→] Change",
                "[Enter] Check",
                "[Tab] Verbs",
                "[Esc] Quit",
            ]
        }
    };

    if let Some(sidebar) = app_layout.sidebar {
        let stats = StatsSidebar::new(&app.tally, snapshot.current_index, app.theme);
        frame.render_widget(stats, sidebar);
    }

    render_footer(frame, app, app_layout.footer, hints);
}

fn render_verb_select(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, app, layout[0], false);

    let menu_area = ui::layout::centered_rect(60, 80, layout[1]);
    frame.render_widget(&app.verb_menu, menu_area);

    render_footer(
        frame,
        app,
        layout[2],
        &["[↑↓] Move", "[Enter] Drill verb", "[Esc] Back"],
    );
}
