//! Interactive terminal demo for the tagfield widget.
//!
//! Runs the widget inside a real event loop: a dedicated thread forwards
//! crossterm events over a channel, the main task multiplexes input and
//! Ctrl+C, and the add/remove hooks write into a visible activity log. Tab
//! moves focus between the tag field and the log pane, which makes the blur
//! trigger observable with `--add-on-blur`.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rat_focus::{Focus, FocusBuilder, FocusFlag, HasFocus};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tokio::sync::mpsc;
use tracing::Level;

use tagfield::{TagFieldComponent, TagFieldConfig, TagFieldHooks, TagFieldState, TriggerSet};

#[derive(Debug, Parser)]
#[command(name = "tagfield-demo", about = "Exercise the tagfield widget in a terminal")]
struct Cli {
    /// Seed the collection with initial values (repeatable).
    #[arg(long = "seed", value_name = "VALUE")]
    seed: Vec<String>,

    /// Also attempt a commit when the field loses focus.
    #[arg(long)]
    add_on_blur: bool,

    /// Placeholder text shown while the draft is empty.
    #[arg(long, default_value = "type a tag, Enter or ',' to add")]
    placeholder: String,
}

struct DemoApp {
    tags: TagFieldState,
    component: TagFieldComponent,
    f_log: FocusFlag,
    container: FocusFlag,
    activity: Rc<RefCell<Vec<String>>>,
}

impl DemoApp {
    fn new(cli: Cli) -> Self {
        let activity: Rc<RefCell<Vec<String>>> = Rc::default();
        let added_log = Rc::clone(&activity);
        let removed_log = Rc::clone(&activity);
        let hooks = TagFieldHooks::new()
            .on_tag_added(move |value, snapshot| {
                added_log.borrow_mut().push(format!("added '{value}' -> {snapshot:?}"));
            })
            .on_tag_removed(move |value, snapshot| {
                removed_log.borrow_mut().push(format!("removed '{value}' -> {snapshot:?}"));
            });

        let triggers = TriggerSet::default().with_commit_on_blur(cli.add_on_blur);
        let config = TagFieldConfig::new("demo.tags")
            .with_seed_values(cli.seed)
            .with_triggers(triggers)
            .with_label("Tags")
            .with_placeholder(cli.placeholder)
            .with_field_attribute("demo", "true");

        Self {
            tags: TagFieldState::new(config).with_hooks(hooks),
            component: TagFieldComponent::new(),
            f_log: FocusFlag::named("demo.log"),
            container: FocusFlag::named("demo"),
            activity,
        }
    }
}

impl HasFocus for DemoApp {
    fn build(&self, builder: &mut FocusBuilder) {
        self.tags.build(builder);
        builder.leaf_widget(&self.f_log);
    }

    fn focus(&self) -> FocusFlag {
        self.container.clone()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let mut app = DemoApp::new(cli);
    let focus = FocusBuilder::build_for(&app);
    focus.first();
    app.component.sync_focus(&mut app.tags);

    let mut input_receiver = spawn_input_thread();
    let mut terminal = setup_terminal()?;
    let result = run_loop(&mut terminal, &mut app, &focus, &mut input_receiver).await;
    cleanup_terminal(&mut terminal)?;
    result
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::DEBUG)
        .try_init();
}

/// Forward terminal events from a dedicated blocking thread; keeping
/// `poll()` and `read()` on one OS thread avoids lost events in some
/// terminals.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(100);
    std::thread::spawn(move || {
        loop {
            if matches!(event::poll(Duration::from_millis(16)), Ok(true)) {
                match event::read() {
                    Ok(event) => {
                        if sender.blocking_send(event).is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        tracing::warn!("failed to read terminal event: {error}");
                        break;
                    }
                }
            }
        }
    });
    receiver
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut DemoApp,
    focus: &Focus,
    input_receiver: &mut mpsc::Receiver<Event>,
) -> Result<()> {
    terminal.draw(|frame| render(frame, app))?;

    loop {
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else { break };
                if should_quit(&event) {
                    break;
                }
                handle_event(app, focus, event);
                terminal.draw(|frame| render(frame, app))?;
            }
            _ = tokio::signal::ctrl_c() => { break; }
        }
    }
    Ok(())
}

fn should_quit(event: &Event) -> bool {
    if let Event::Key(key) = event {
        if key.code == KeyCode::Esc {
            return true;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }
    }
    false
}

fn handle_event(app: &mut DemoApp, focus: &Focus, event: Event) {
    match event {
        Event::Key(key) => {
            match key.code {
                KeyCode::Tab => {
                    focus.next();
                }
                KeyCode::BackTab => {
                    focus.prev();
                }
                _ => {
                    app.component.handle_key_event(&mut app.tags, key);
                }
            }
            app.component.sync_focus(&mut app.tags);
        }
        Event::Mouse(mouse) => {
            app.component.handle_mouse_event(&mut app.tags, mouse, focus);
            app.component.sync_focus(&mut app.tags);
        }
        Event::FocusLost => app.component.handle_focus_lost(&mut app.tags),
        _ => {}
    }
}

fn render(frame: &mut Frame, app: &mut DemoApp) {
    let splits = Layout::vertical([
        Constraint::Min(6),    // tag field
        Constraint::Length(8), // activity log
        Constraint::Length(1), // hints
    ])
    .split(frame.area());

    app.component.render(frame, splits[0], &mut app.tags);
    render_activity(frame, splits[1], app);
    render_hints(frame, splits[2]);
}

fn render_activity(frame: &mut Frame, area: Rect, app: &DemoApp) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Activity")
        .border_style(if app.f_log.get() {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let log = app.activity.borrow();
    let visible = log.len().saturating_sub(inner.height as usize);
    let lines: Vec<Line> = log[visible..].iter().map(|entry| Line::from(entry.as_str())).collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_hints(frame: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled("Enter/','", Style::default().fg(Color::Cyan)),
        Span::raw(" add  "),
        Span::styled("click ×", Style::default().fg(Color::Cyan)),
        Span::raw(" remove  "),
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(" move focus  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(" quit"),
    ]);
    frame.render_widget(Paragraph::new(hints), area);
}
