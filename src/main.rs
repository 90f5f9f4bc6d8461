use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use portfolio::config::Config;
use portfolio::contact::{ContactRelay, ContactStatus};
use portfolio::i18n::TranslationMetrics;
use portfolio::storage::Storage;
use portfolio::ui::{self, tui::Tui, App, TickTimer};
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (optional)
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    // The terminal belongs to the UI, so logs go to a file
    init_logging(&config)?;

    info!("Starting portfolio");

    let storage = Storage::open(&config.data_dir);
    let mut app = App::from_config(&config, storage);
    let relay = ContactRelay::new(config.contact_endpoint.clone());

    let mut terminal = ui::tui::init()?;
    let result = run(&mut terminal, &mut app, relay).await;
    ui::tui::restore(&mut terminal)?;

    let report = TranslationMetrics::global().report();
    info!(
        "Translation lookups: {} hits, {} misses ({:.1}% hit rate), {} language switches",
        report.hits,
        report.misses,
        report.hit_rate,
        report.language_switches
    );
    info!("Portfolio closed");
    result
}

fn init_logging(config: &Config) -> Result<()> {
    if let Some(parent) = config.log_file.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("Failed to open log file {}", config.log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("portfolio=info".parse()?),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

async fn run(terminal: &mut Tui, app: &mut App, relay: ContactRelay) -> Result<()> {
    let mut events = EventStream::new();
    let mut ticks = TickTimer::new();

    // Render at 30 FPS
    let mut render_timer = tokio::time::interval(Duration::from_millis(33));

    // Contact results come back from spawned requests
    let (tx, mut rx) = mpsc::unbounded_channel::<ContactStatus>();

    while app.is_running() {
        ticks.sync(app.game.tick_interval());

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    let action = ui::map_key(key, app.input_mode());
                    if let Some(form) = app.handle(action, Instant::now()) {
                        let relay = relay.clone();
                        let tx = tx.clone();
                        tokio::spawn(async move {
                            let status = relay.submit(&form).await;
                            // The receiver only goes away when the UI has quit
                            let _ = tx.send(status);
                        });
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    return Err(anyhow::Error::new(e).context("Failed to read terminal event"));
                }
                None => break,
            },

            _ = ticks.tick() => {
                app.tick();
            }

            Some(status) = rx.recv() => {
                info!("Contact submission finished: {:?}", status);
                app.contact_finished(status, Instant::now());
            }

            _ = render_timer.tick() => {
                let now = Instant::now();
                app.notices.expire(now);
                terminal
                    .draw(|frame| ui::render(frame, app, now))
                    .context("Failed to draw frame")?;
            }
        }
    }

    Ok(())
}
