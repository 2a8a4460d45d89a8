use crate::ai::NOTES_ERROR_MESSAGE;
use crate::deck::{ImageArtifact, SlideId};
use crate::presenter::{ImageJob, NotesJob, Presenter};
use tokio::sync::mpsc;

/// Work for the AI worker. Results come back as [`crate::ui::events::AppEvent`]s.
#[derive(Debug)]
pub enum AiCommand {
    GenerateNotes(NotesJob),
    GenerateImage(ImageJob),
}

pub type AiCommandSender = mpsc::Sender<AiCommand>;

pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    presenter: Presenter,
    ai_sender: Option<AiCommandSender>,
    /// Animation counter for spinners outside the notes panel.
    tick: u8,
}

impl App {
    pub fn new(presenter: Presenter) -> Self {
        Self {
            should_quit: false,
            size: None,
            presenter,
            ai_sender: None,
            tick: 0,
        }
    }

    pub fn attach_ai(&mut self, sender: AiCommandSender) {
        self.ai_sender = Some(sender);
    }

    pub fn presenter(&self) -> &Presenter {
        &self.presenter
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn tick(&self) -> u8 {
        self.tick
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.presenter.on_tick();
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    pub fn next_slide(&mut self) {
        self.presenter.advance();
    }

    pub fn previous_slide(&mut self) {
        self.presenter.retreat();
    }

    pub fn first_slide(&mut self) {
        self.presenter.jump_to(0);
    }

    pub fn last_slide(&mut self) {
        self.presenter.jump_to(usize::MAX);
    }

    pub fn open_notes(&mut self) {
        let Some(job) = self.presenter.request_notes() else {
            return;
        };
        let slide_id = job.slide.id;
        if let Err(reason) = self.send(AiCommand::GenerateNotes(job)) {
            tracing::error!(slide_id = %slide_id, error = %reason, "Failed to queue notes request");
            self.presenter
                .complete_notes(slide_id, NOTES_ERROR_MESSAGE.to_string());
        }
    }

    pub fn close_notes(&mut self) {
        self.presenter.close_notes();
    }

    pub fn generate_image(&mut self) {
        let Some(job) = self.presenter.request_image() else {
            return;
        };
        let slide_id = job.slide_id;
        if let Err(reason) = self.send(AiCommand::GenerateImage(job)) {
            tracing::error!(slide_id = %slide_id, error = %reason, "Failed to queue image request");
            self.presenter.complete_image(slide_id, Err(reason));
        }
    }

    pub fn on_notes_ready(&mut self, slide_id: SlideId, text: String) {
        self.presenter.complete_notes(slide_id, text);
    }

    pub fn on_image_ready(
        &mut self,
        slide_id: SlideId,
        result: Result<Option<ImageArtifact>, String>,
    ) {
        self.presenter.complete_image(slide_id, result);
    }

    fn send(&self, command: AiCommand) -> Result<(), String> {
        let Some(sender) = &self.ai_sender else {
            return Err("AI worker is not running".to_string());
        };
        sender.try_send(command).map_err(|err| match err {
            mpsc::error::TrySendError::Full(_) => "AI worker is busy".to_string(),
            mpsc::error::TrySendError::Closed(_) => "AI worker has stopped".to_string(),
        })
    }
}
