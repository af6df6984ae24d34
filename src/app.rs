use crate::components::contact_form::{ERROR_MESSAGE, SUCCESS_MESSAGE};
use crate::config::Config;
use crate::core::contact::{Submission, SubmissionController};
use crate::core::language::{LanguageBridge, SwitchOutcome};
use crate::core::routing::{resolve, Section};
use crate::emailjs::EmailJsClient;
use crate::error::{DeliveryError, RenderError};
use crate::screens::screen_trait::Screen as _;
use crate::screens::{FallbackScreen, PageScreen, RenderContext, ScreenAction, ScreenContext};
use crate::services::{ContactService, DeliveryHandle};
use crate::translation::{CookieJar, LocalTranslator};
use crate::tui::Tui;
use crate::ui::Screen;
use crate::utils::{get_config_path, get_cookie_path};
use crate::widgets::ToastManager;
use anyhow::{Context, Result};
use chrono::Datelike;
use crossterm::event::Event;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Runtime;
use tracing::{debug, error, info, warn};

/// Time the translation control takes to appear after the page loads
const TRANSLATOR_LOAD_DELAY: Duration = Duration::from_millis(400);

/// Startup options from the command line
#[derive(Debug, Clone)]
pub struct AppOptions {
    /// Location to open, e.g. `/index.html#services`
    pub open: Option<String>,
    /// Whether the translation control gets injected at all
    pub translate: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            open: None,
            translate: true,
        }
    }
}

/// Main application state
// Field order matters: the bridge must drop before the runtime it spawned on.
pub struct App {
    bridge: LanguageBridge,
    page: PageScreen,
    fallback: FallbackScreen,
    current_screen: Screen,
    submission: SubmissionController,
    delivery: Option<DeliveryHandle>,
    sender: Arc<EmailJsClient>,
    translator: Arc<LocalTranslator>,
    cookies: Arc<CookieJar>,
    toasts: ToastManager,
    /// When the translation control should be injected
    inject_at: Option<Instant>,
    options: AppOptions,
    config: Config,
    tui: Tui,
    runtime: Runtime,
    should_quit: bool,
}

impl App {
    pub fn new(options: AppOptions) -> Result<Self> {
        let config_path = get_config_path();
        let config = Config::load_or_create(&config_path)?;

        let tui = Tui::new()?;
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;

        let cookies = Arc::new(CookieJar::new(get_cookie_path()));
        let language = cookies.saved_language().unwrap_or(config.language);
        let translator = Arc::new(LocalTranslator::new());
        let bridge = LanguageBridge::mount(
            runtime.handle().clone(),
            translator.clone(),
            cookies.clone(),
            language,
        );

        let section = match options.open.as_deref() {
            Some(location) => {
                let resolved = resolve(location);
                info!(
                    "Opening {} (redirected: {})",
                    resolved.path, resolved.redirected
                );
                resolved.section.unwrap_or_default()
            }
            None => Section::default(),
        };

        let email = config.email.clone().with_env_overrides();
        if !email.is_configured() {
            warn!("Email service not configured; contact form submissions will fail");
        }
        let sender = Arc::new(EmailJsClient::new(email.endpoint.clone()));
        let submission = SubmissionController::new(email);

        let inject_at = options
            .translate
            .then(|| Instant::now() + TRANSLATOR_LOAD_DELAY);

        Ok(Self {
            bridge,
            page: PageScreen::new(section),
            fallback: FallbackScreen::default(),
            current_screen: Screen::Page,
            submission,
            delivery: None,
            sender,
            translator,
            cookies,
            toasts: ToastManager::new(),
            inject_at,
            options,
            config,
            tui,
            runtime,
            should_quit: false,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        self.tui.enter()?;

        // Main event loop
        loop {
            self.tick(Instant::now());
            self.draw()?;

            if self.should_quit {
                break;
            }

            // Poll for events with 250ms timeout
            if let Some(event) = self.tui.poll_event(Duration::from_millis(250))? {
                self.handle_event(event)?;
            }
        }

        self.teardown();
        self.tui.exit()?;
        Ok(())
    }

    fn tick(&mut self, now: Instant) {
        if self.inject_at.is_some_and(|at| now >= at) {
            self.inject_at = None;
            // the widget picks up its cookie on load
            self.translator.inject(Some(self.bridge.current()));
        }

        if self.submission.tick(now) {
            debug!("Contact form status reset to idle");
        }

        if let Some(handle) = self.delivery.as_mut() {
            if let Some(result) = handle.try_recv() {
                self.delivery = None;
                self.on_delivery_finished(result, now);
            }
        }

        if self.cookies.take_reload_request() {
            self.reload();
        }

        self.toasts.tick(now);
    }

    fn draw(&mut self) -> Result<()> {
        let ctx = RenderContext {
            submission: &self.submission,
            language: self.bridge.current(),
            translator: self.translator.as_ref(),
            year: chrono::Local::now().year(),
        };
        let current = self.current_screen;
        let page = &mut self.page;
        let fallback = &mut self.fallback;
        let toasts = &self.toasts;
        let mut failure = None;

        self.tui
            .terminal_mut()
            .draw(|frame| {
                let area = frame.area();
                let result = match current {
                    Screen::Page => page.render(frame, area, &ctx),
                    Screen::Fallback => fallback.render(frame, area, &ctx),
                };
                match result {
                    Ok(()) => toasts.render(frame, area),
                    Err(e) => failure = Some(e),
                }
            })
            .map_err(|e| RenderError::Draw {
                what: "frame",
                message: e.to_string(),
            })?;

        if let Some(e) = failure {
            self.show_fallback(&e);
        }
        Ok(())
    }

    /// Swap the page for the error screen instead of leaving it blank
    fn show_fallback(&mut self, e: &anyhow::Error) {
        error!("Failed to render page: {:#}", e);
        self.page.teardown();
        self.toasts.clear();
        self.fallback = FallbackScreen::new(Some(format!("{:#}", e)));
        self.current_screen = Screen::Fallback;
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        let ctx = ScreenContext {
            submission: &self.submission,
            language: self.bridge.current(),
        };
        let action = match self.current_screen {
            Screen::Page => self.page.handle_event(event, &ctx)?,
            Screen::Fallback => self.fallback.handle_event(event, &ctx)?,
        };
        self.apply(action);
        Ok(())
    }

    fn apply(&mut self, action: ScreenAction) {
        let now = Instant::now();
        match action {
            ScreenAction::None => {}
            ScreenAction::UpdateField(field, value) => self.submission.update_field(field, value),
            ScreenAction::SubmitContact => self.start_submission(now),
            ScreenAction::SwitchLanguage(lang) => match self.bridge.switch_language(lang) {
                Ok(SwitchOutcome::Applied) => {
                    self.toasts.info(format!("🌐 {}", lang.native_name()), now);
                }
                Ok(SwitchOutcome::Reloading) => {
                    self.toasts
                        .info(format!("Reloading in {}...", lang.native_name()), now);
                }
                Err(e) => {
                    warn!("Language switch failed: {:#}", e);
                    self.toasts.warning("Could not switch language", now);
                }
            },
            ScreenAction::Notify(message) => self.toasts.warning(message, now),
            ScreenAction::Reload => self.reload(),
            ScreenAction::Quit => self.should_quit = true,
        }
    }

    fn start_submission(&mut self, now: Instant) {
        match self.submission.submit(now) {
            Submission::Ignored => debug!("Submission already in flight"),
            Submission::Rejected(e) => {
                warn!("Submission rejected before sending: {}", e);
                self.toasts.failed(ERROR_MESSAGE, now);
            }
            Submission::Dispatch(request) => {
                self.toasts
                    .sending(self.translator.translate("Sending...").into_owned(), now);
                self.delivery = Some(ContactService::start_delivery(
                    self.runtime.handle(),
                    self.sender.clone(),
                    request,
                ));
            }
        }
    }

    fn on_delivery_finished(&mut self, result: Result<(), DeliveryError>, now: Instant) {
        let delivered = result.is_ok();
        self.submission.finish(result, now);
        if delivered {
            self.page.on_form_cleared();
            self.toasts.delivered(SUCCESS_MESSAGE, now);
        } else {
            self.toasts.failed(ERROR_MESSAGE, now);
        }
    }

    /// Rebuild the page from scratch, the way a browser reload would
    fn reload(&mut self) {
        info!("Reloading page");
        let section = self.page.section();
        self.teardown();

        let language = self
            .cookies
            .saved_language()
            .unwrap_or(self.config.language);
        self.translator = Arc::new(LocalTranslator::new());
        self.bridge = LanguageBridge::mount(
            self.runtime.handle().clone(),
            self.translator.clone(),
            self.cookies.clone(),
            language,
        );
        self.submission =
            SubmissionController::new(self.config.email.clone().with_env_overrides());
        self.page = PageScreen::new(section);
        self.fallback = FallbackScreen::default();
        self.current_screen = Screen::Page;
        self.toasts.clear();
        self.inject_at = self
            .options
            .translate
            .then(|| Instant::now() + TRANSLATOR_LOAD_DELAY);
    }

    /// Stop timers and tasks and release the scroll lock
    fn teardown(&mut self) {
        self.bridge.teardown();
        self.submission.teardown();
        self.delivery = None;
        self.page.teardown();
    }
}
