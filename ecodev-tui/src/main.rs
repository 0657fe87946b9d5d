//! Terminal UI for EcoDev: describe an item of waste and learn how to dispose of it.

mod app;
mod input;
mod settings;
mod ui;

use std::{
    fs::OpenOptions,
    io,
    sync::{Arc, Mutex},
    time::Duration as StdDuration,
};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ecodev_core::{
    knowledge::KnowledgeBase,
    matcher::{Matcher, OwnedMatcher},
    ports::Classifier,
    service::EcoDevService,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_subscriber::EnvFilter;

use crate::app::{App, Screen};
use crate::input::Action;
use crate::settings::EcoDevConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let config = EcoDevConfig::load().context("loading configuration")?;
    init_tracing(&config)?;

    // Classifier + service setup
    let (classifier, notice) = build_classifier(&config);
    let service = Arc::new(EcoDevService::new(classifier));

    // App state
    let mut app = App::new(service);
    app.error_message = notice;

    // Terminal init
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run event loop
    let res = run(&mut terminal, app, &config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn init_tracing(config: &EcoDevConfig) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("opening log file {}", config.log_file.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("initialising logging: {err}"))
}

/// Pick the configured knowledge base, falling back to the embedded one.
/// The second value is a message for the status bar when the fallback kicked in.
fn build_classifier(config: &EcoDevConfig) -> (Arc<dyn Classifier>, Option<String>) {
    let embedded: Arc<dyn Classifier> = Arc::new(Matcher::embedded());
    let Some(path) = &config.knowledge_base else {
        return (embedded, None);
    };

    match KnowledgeBase::from_path(path) {
        Ok(base) => {
            tracing::info!(
                path = %path.display(),
                entries = base.len(),
                "using custom knowledge base"
            );
            let custom: Arc<dyn Classifier> = Arc::new(OwnedMatcher::new(base));
            (custom, None)
        }
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "falling back to embedded knowledge base"
            );
            let notice = format!("Base de conhecimento inválida ({err}); usando a base padrão");
            (embedded, Some(notice))
        }
    }
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    config: &EcoDevConfig,
) -> Result<()> {
    loop {
        // Draw current UI
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Poll for input (non-blocking, small timeout to keep CPU low)
        if event::poll(StdDuration::from_millis(100))?
            && let CEvent::Key(key) = event::read()?
        {
            let action = input::handle_key_event(key, &mut app);

            match action {
                Action::Quit => break,
                Action::None => {}
                Action::Login => {
                    app.is_loading = true;
                    app.error_message = None;
                    terminal.draw(|frame| ui::draw(frame, &app))?;

                    tokio::time::sleep(config.login_delay()).await;

                    app.is_loading = false;
                    match app.service.login(&app.email_input, &app.password_input) {
                        Ok(user) => {
                            app.user = Some(user);
                            app.password_input.clear();
                            app.screen = Screen::Menu;
                        }
                        Err(err) => {
                            app.error_message = Some(format!("Falha no login: {err}"));
                        }
                    }
                }
                Action::Classify => {
                    let Some(user) = app.user.clone() else {
                        app.error_message = Some("Faça login primeiro".into());
                        app.screen = Screen::Login;
                        continue;
                    };

                    app.is_loading = true;
                    app.error_message = None;
                    terminal.draw(|frame| ui::draw(frame, &app))?;

                    // Presentation only: the classification itself is instant.
                    tokio::time::sleep(config.processing_delay()).await;

                    let image_path = Some(app.image_input.trim())
                        .filter(|path| !path.is_empty())
                        .map(str::to_owned);
                    let submission = app.service.submit(&user, &app.description_input, image_path);

                    app.is_loading = false;
                    app.show_result(submission, Screen::Submit);
                }
            }
        }
    }

    Ok(())
}
