use super::input::{InputMode, KeyAction};
use super::notice::NoticeBoard;
use crate::config::Config;
use crate::contact::{ContactForm, ContactSession, ContactStatus, Field, Severity, Submission};
use crate::game::{GameSession, GameStatus, TickOutcome};
use crate::i18n::LanguageContext;
use crate::storage::Storage;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

/// Page sections in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    Projects,
    Experience,
    Education,
    Volunteering,
    Skills,
    Contact,
    Game,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Home,
        Section::Projects,
        Section::Experience,
        Section::Education,
        Section::Volunteering,
        Section::Skills,
        Section::Contact,
        Section::Game,
    ];

    /// Translation key of the navigation label
    pub fn nav_key(self) -> &'static str {
        match self {
            Section::Home => "nav.home",
            Section::Projects => "nav.projects",
            Section::Experience => "nav.experience",
            Section::Education => "nav.education",
            Section::Volunteering => "nav.volunteering",
            Section::Skills => "nav.skills",
            Section::Contact => "nav.contact",
            Section::Game => "nav.game",
        }
    }

    pub fn index(self) -> usize {
        Section::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Section {
        Section::ALL[(self.index() + 1) % Section::ALL.len()]
    }

    pub fn previous(self) -> Section {
        let len = Section::ALL.len();
        Section::ALL[(self.index() + len - 1) % len]
    }
}

/// All state owned by the UI loop
pub struct App {
    pub language: LanguageContext,
    pub game: GameSession,
    pub contact: ContactSession,
    pub notices: NoticeBoard,
    pub section: Section,
    pub field: Field,
    pub editing: bool,
    pub scroll: u16,
    pub resume_path: String,
    resume_file: PathBuf,
    running: bool,
}

impl App {
    pub fn new(
        language: LanguageContext,
        game: GameSession,
        resume_path: String,
        resume_file: PathBuf,
    ) -> Self {
        Self {
            language,
            game,
            contact: ContactSession::default(),
            notices: NoticeBoard::default(),
            section: Section::default(),
            field: Field::default(),
            editing: false,
            scroll: 0,
            resume_path,
            resume_file,
            running: true,
        }
    }

    /// Wire the app to persisted state as configured
    pub fn from_config(config: &Config, storage: Storage) -> Self {
        let language = LanguageContext::load(storage.clone(), config.language_override);
        let game = GameSession::new(storage);
        Self::new(language, game, config.resume_path.clone(), config.resume_file())
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn input_mode(&self) -> InputMode {
        match self.section {
            Section::Contact if self.editing => InputMode::Form,
            Section::Game => InputMode::Game,
            _ => InputMode::Browse,
        }
    }

    /// Apply one key action. Returns a form when it must be sent.
    pub fn handle(&mut self, action: KeyAction, now: Instant) -> Option<ContactForm> {
        match action {
            KeyAction::Quit => self.running = false,
            KeyAction::NextSection => self.go_to(self.section.next()),
            KeyAction::PreviousSection => self.go_to(self.section.previous()),
            KeyAction::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            KeyAction::ScrollDown => self.scroll = self.scroll.saturating_add(1),
            KeyAction::ToggleLanguage => {
                let next = self.language.language().toggled();
                self.language.set_language(next);
            }
            KeyAction::ShowResume => self.show_resume(now),
            KeyAction::DismissNotice => self.notices.dismiss(),
            KeyAction::Steer(direction) => {
                self.game.steer(direction);
            }
            KeyAction::StartOrPause => match self.game.status() {
                GameStatus::Idle | GameStatus::GameOver => {
                    self.game.start();
                }
                GameStatus::Running | GameStatus::Paused => {
                    self.game.toggle_pause();
                }
            },
            KeyAction::Restart => {
                self.game.restart();
            }
            KeyAction::EditForm => {
                if self.section == Section::Contact {
                    self.editing = true;
                }
            }
            KeyAction::Submit => return self.submit(now),
            KeyAction::NextField => self.field = self.field.next(),
            KeyAction::PreviousField => self.field = self.field.previous(),
            KeyAction::LeaveForm => self.editing = false,
            KeyAction::Type(c) => self.contact.form.field_mut(self.field).push(c),
            KeyAction::Backspace => {
                self.contact.form.field_mut(self.field).pop();
            }
            KeyAction::None => {}
        }
        None
    }

    /// Advance the game one tick
    pub fn tick(&mut self) -> TickOutcome {
        self.game.tick()
    }

    /// Record the result of a dispatched submission
    pub fn contact_finished(&mut self, status: ContactStatus, now: Instant) {
        self.contact.finish(status);
        self.notify(status, now);
    }

    fn submit(&mut self, now: Instant) -> Option<ContactForm> {
        match self.contact.begin() {
            Submission::Busy => {
                debug!("Submission already in flight");
                None
            }
            Submission::Done(status) => {
                self.notify(status, now);
                None
            }
            Submission::Dispatch(form) => {
                info!("Sending contact message");
                Some(form)
            }
        }
    }

    fn notify(&mut self, status: ContactStatus, now: Instant) {
        let message = self.language.t(status.message_key()).to_string();
        self.notices.show(status.severity(), message, now);
    }

    fn go_to(&mut self, section: Section) {
        // The board is hidden outside its section, so a running game waits
        if self.section == Section::Game && self.game.status() == GameStatus::Running {
            self.game.toggle_pause();
        }
        self.section = section;
        self.scroll = 0;
        self.editing = false;
    }

    fn show_resume(&mut self, now: Instant) {
        let path = self.resume_file.display().to_string();
        if self.resume_file.exists() {
            let message = self.language.t_args("ui.resumeAt", &[("path", &path)]);
            self.notices.show(Severity::Success, message, now);
        } else {
            let message = self.language.t_args("ui.resumeMissing", &[("path", &path)]);
            self.notices.show(Severity::Warning, message, now);
        }
    }
}
