//! Shared test doubles for the integration tests.
//!
//! - `MockSender`: email collaborator that records requests and answers with a
//!   canned outcome
//! - `RecordingSurface`: scroll surface that remembers every lock write
//! - `FakeControl` / `FakeHost`: translation widget and page host stand-ins
//! - `TestEnv`: temp config directory with env overrides, restored on drop
//!
//! Tests using `TestEnv::with_env_override()` serialize on a global mutex.

use anyhow::Result;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

use happyvisit::config::EmailConfig;
use happyvisit::core::contact::{ContactField, DeliveryRequest, EmailSender, SubmissionController};
use happyvisit::core::language::{ChangeCallback, Language, ListenerId, PageHost, TranslationControl};
use happyvisit::core::navigation::ScrollSurface;
use happyvisit::error::DeliveryError;

/// Global mutex to ensure only one test uses env overrides at a time.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Credentials that pass the placeholder check
#[allow(dead_code)]
pub fn configured_email() -> EmailConfig {
    EmailConfig {
        service_id: Some("service_abc".to_string()),
        template_id: Some("template_xyz".to_string()),
        public_key: Some("pk_live_123".to_string()),
        ..EmailConfig::default()
    }
}

/// Controller with every field filled in
#[allow(dead_code)]
pub fn filled_controller(settings: EmailConfig) -> SubmissionController {
    let mut controller = SubmissionController::new(settings);
    controller.update_field(ContactField::Name, "Jo Rivera");
    controller.update_field(ContactField::Email, "jo@example.com");
    controller.update_field(ContactField::Phone, "310-555-0100");
    controller.update_field(ContactField::Message, "My mother needs wound care visits.");
    controller
}

// ==================== Email ====================

/// Email sender that records each request and returns a fixed outcome
#[allow(dead_code)]
#[derive(Default)]
pub struct MockSender {
    requests: Mutex<Vec<DeliveryRequest>>,
    /// HTTP status to reject with; `None` acknowledges
    reject_with: Option<u16>,
}

#[allow(dead_code)]
impl MockSender {
    pub fn accepting() -> Self {
        Self::default()
    }

    pub fn rejecting(status: u16) -> Self {
        Self {
            reject_with: Some(status),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn last_request(&self) -> Option<DeliveryRequest> {
        self.requests.lock().ok().and_then(|r| r.last().cloned())
    }
}

impl EmailSender for MockSender {
    async fn send(&self, request: &DeliveryRequest) -> Result<(), DeliveryError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        match self.reject_with {
            Some(status) => Err(DeliveryError::Rejected {
                status,
                body: "template not found".to_string(),
            }),
            None => Ok(()),
        }
    }
}

// ==================== Scroll ====================

/// Scroll surface that records every write
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct RecordingSurface {
    writes: Arc<Mutex<Vec<bool>>>,
}

#[allow(dead_code)]
impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretend a previous page left the lock on
    pub fn stale_locked() -> Self {
        let surface = Self::default();
        surface.set_scroll_locked(true);
        surface
    }

    pub fn is_locked(&self) -> bool {
        self.writes
            .lock()
            .ok()
            .and_then(|w| w.last().copied())
            .unwrap_or(false)
    }

    pub fn writes(&self) -> Vec<bool> {
        self.writes.lock().map(|w| w.clone()).unwrap_or_default()
    }
}

impl ScrollSurface for RecordingSurface {
    fn set_scroll_locked(&self, locked: bool) {
        if let Ok(mut writes) = self.writes.lock() {
            writes.push(locked);
        }
    }
}

// ==================== Translation ====================

/// Translation widget double: invisible until `appear`, records every call
#[allow(dead_code)]
#[derive(Default)]
pub struct FakeControl {
    present: AtomicBool,
    selection: Mutex<Option<Language>>,
    listeners: Mutex<Vec<(ListenerId, ChangeCallback)>>,
    next_id: AtomicUsize,
    set_calls: Mutex<Vec<Language>>,
    dispatches: AtomicUsize,
}

#[allow(dead_code)]
impl FakeControl {
    pub fn absent() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn present_with(selection: Option<Language>) -> Arc<Self> {
        let control = Self::default();
        control.present.store(true, Ordering::SeqCst);
        if let Ok(mut s) = control.selection.lock() {
            *s = selection;
        }
        Arc::new(control)
    }

    /// The widget finished loading
    pub fn appear(&self, selection: Option<Language>) {
        if let Ok(mut s) = self.selection.lock() {
            *s = selection;
        }
        self.present.store(true, Ordering::SeqCst);
    }

    /// A visitor picked `lang` in the widget itself
    pub fn user_selects(&self, lang: Language) {
        self.set_selection_quietly(lang);
        let callbacks: Vec<ChangeCallback> = self
            .listeners
            .lock()
            .map(|l| l.iter().map(|(_, cb)| cb.clone()).collect())
            .unwrap_or_default();
        for callback in callbacks {
            callback(lang);
        }
    }

    /// The widget reverting its own value, as it does right after a change
    pub fn set_selection_quietly(&self, lang: Language) {
        if let Ok(mut s) = self.selection.lock() {
            *s = Some(lang);
        }
    }

    pub fn selection(&self) -> Option<Language> {
        self.selection.lock().ok().and_then(|s| *s)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().map(|l| l.len()).unwrap_or(0)
    }

    pub fn set_calls(&self) -> Vec<Language> {
        self.set_calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn dispatches(&self) -> usize {
        self.dispatches.load(Ordering::SeqCst)
    }
}

impl TranslationControl for FakeControl {
    fn is_present(&self) -> bool {
        self.present.load(Ordering::SeqCst)
    }

    fn current_selection(&self) -> Option<Language> {
        self.selection()
    }

    fn set_selection(&self, lang: Language) {
        if let Ok(mut calls) = self.set_calls.lock() {
            calls.push(lang);
        }
        self.set_selection_quietly(lang);
    }

    fn dispatch_change(&self) {
        self.dispatches.fetch_add(1, Ordering::SeqCst);
    }

    fn on_change(&self, callback: ChangeCallback) -> ListenerId {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as ListenerId + 1;
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.push((id, callback));
        }
        id
    }

    fn remove_listener(&self, id: ListenerId) {
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.retain(|(existing, _)| *existing != id);
        }
    }
}

/// Page host double recording cookies and reload requests
#[allow(dead_code)]
#[derive(Default)]
pub struct FakeHost {
    cookies: Mutex<Vec<(String, String)>>,
    reloads: AtomicUsize,
}

#[allow(dead_code)]
impl FakeHost {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn cookies(&self) -> Vec<(String, String)> {
        self.cookies.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn reloads(&self) -> usize {
        self.reloads.load(Ordering::SeqCst)
    }
}

impl PageHost for FakeHost {
    fn set_cookie(&self, name: &str, value: &str) -> Result<()> {
        if let Ok(mut cookies) = self.cookies.lock() {
            cookies.push((name.to_string(), value.to_string()));
        }
        Ok(())
    }

    fn reload(&self) {
        self.reloads.fetch_add(1, Ordering::SeqCst);
    }
}

// ==================== Environment ====================

/// Guard that restores environment variables when dropped.
struct EnvGuard {
    saved: Vec<(&'static str, Option<String>)>,
    #[allow(dead_code)]
    lock: std::sync::MutexGuard<'static, ()>,
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (name, value) in &self.saved {
            match value {
                Some(v) => std::env::set_var(name, v),
                None => std::env::remove_var(name),
            }
        }
    }
}

/// Isolated config directory, cleaned up when dropped.
#[allow(dead_code)]
pub struct TestEnv {
    temp_dir: TempDir,
    pub config_dir: PathBuf,
    env_guard: Option<EnvGuard>,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let config_dir = temp_dir.path().join("config");
        std::fs::create_dir_all(&config_dir)?;
        Ok(Self {
            temp_dir,
            config_dir,
            env_guard: None,
        })
    }

    /// Point the config directory at this env and set `vars`, holding the env lock
    pub fn with_env_override(mut self, vars: &[(&'static str, Option<&str>)]) -> Self {
        let lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let mut saved = vec![(
            happyvisit::utils::path::CONFIG_DIR_ENV,
            std::env::var(happyvisit::utils::path::CONFIG_DIR_ENV).ok(),
        )];
        std::env::set_var(happyvisit::utils::path::CONFIG_DIR_ENV, &self.config_dir);
        for (name, value) in vars {
            saved.push((*name, std::env::var(name).ok()));
            match value {
                Some(v) => std::env::set_var(name, v),
                None => std::env::remove_var(name),
            }
        }
        self.env_guard = Some(EnvGuard { saved, lock });
        self
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.temp_dir.path().join(relative)
    }

    pub fn write_config(&self, content: &str) -> Result<()> {
        std::fs::write(self.config_path(), content)?;
        Ok(())
    }
}
