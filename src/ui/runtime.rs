use crate::ai::{AiError, AiService};
use crate::config::Config;
use crate::deck::Deck;
use crate::presenter::Presenter;
use crate::ui::app::{AiCommand, App};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Pending AI commands. Requests are latched by the presenter, so this only
/// needs room for one notes and one image job.
const AI_QUEUE_CAPACITY: usize = 8;

/// Run the presentation until the operator quits.
///
/// The UI loop stays on this thread; AI requests run on a tokio runtime and
/// report back through the event channel.
pub fn run(config: &Config, deck: Deck, start_index: usize) -> io::Result<()> {
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms.max(1));
    let deck = Arc::new(deck);
    let service = Arc::new(AiService::new(config.ai.clone(), deck.title()));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("slidecoach-ai")
        .enable_all()
        .build()?;

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);

    let mut presenter = Presenter::new(Arc::clone(&deck)).with_notice_ticks(config.ui.notice_ticks);
    presenter.jump_to(start_index);
    let mut app = App::new(presenter);

    let (ai_tx, ai_rx) = mpsc::channel(AI_QUEUE_CAPACITY);
    app.attach_ai(ai_tx);
    runtime.spawn(ai_worker(service, ai_rx, events.sender()));

    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    tracing::info!(slides = deck.len(), start = start_index, "presentation started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => apply_event(&mut app, event),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    runtime.shutdown_timeout(Duration::from_millis(200));
    tracing::info!("presentation closed");
    Ok(())
}

/// Apply one event to the app. Every presenter mutation goes through here.
pub fn apply_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Tick => app.on_tick(),
        AppEvent::Resize(cols, rows) => app.on_resize(cols, rows),
        AppEvent::NotesReady { slide_id, text } => app.on_notes_ready(slide_id, text),
        AppEvent::ImageReady { slide_id, result } => app.on_image_ready(slide_id, result),
    }
}

/// Receive AI commands and run each on its own task.
pub async fn ai_worker(
    service: Arc<AiService>,
    mut commands: mpsc::Receiver<AiCommand>,
    events: Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        let service = Arc::clone(&service);
        let events = events.clone();
        tokio::spawn(async move {
            let event = execute(&service, command).await;
            if events.send(event).is_err() {
                tracing::debug!("UI loop gone; dropping AI result");
            }
        });
    }
}

/// Configuration errors are never retried, so say so in the notice.
fn image_failure_message(err: &AiError) -> String {
    if err.is_configuration() {
        format!("{} (restart after fixing the configuration)", err)
    } else {
        err.to_string()
    }
}

/// Run one AI command and turn its outcome into an event for the UI loop.
pub async fn execute(service: &AiService, command: AiCommand) -> AppEvent {
    match command {
        AiCommand::GenerateNotes(job) => {
            let text = service.generate_notes(&job.slide).await;
            AppEvent::NotesReady {
                slide_id: job.slide.id,
                text,
            }
        }
        AiCommand::GenerateImage(job) => {
            let result = service
                .generate_image(&job.prompt)
                .await
                .map_err(|err| image_failure_message(&err));
            AppEvent::ImageReady {
                slide_id: job.slide_id,
                result,
            }
        }
    }
}
