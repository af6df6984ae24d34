//! Keeps the page language in step with an externally supplied translation control.
//!
//! The control may show up late or never. [`LanguageBridge::mount`] polls for
//! it for a bounded time; once found it seeds local state from the control and
//! mirrors every later change. Switching locally drives the control when it is
//! there and falls back to a translation cookie plus a reload when it is not.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Interval between checks for the translation control
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);
/// Give up looking for the translation control after this long
pub const DISCOVERY_TIMEOUT: Duration = Duration::from_secs(5);
/// Delay before re-applying a selection the control may have reverted
pub const REASSERT_DELAY: Duration = Duration::from_millis(100);
/// Cookie the translation widget reads on page load
pub const TRANSLATE_COOKIE: &str = "googtrans";

/// Languages the site can be shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fa,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Fa];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fa => "fa",
        }
    }

    /// Name of the language in itself
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Fa => "فارسی",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Language::En => Language::Fa,
            Language::Fa => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "fa" | "farsi" | "persian" => Ok(Language::Fa),
            other => anyhow::bail!("Unsupported language: {}", other),
        }
    }
}

/// Cookie value asking the widget to translate from English into `lang`
pub fn cookie_value(lang: Language) -> String {
    format!("/en/{}", lang.code())
}

/// Language encoded in a translation cookie value (`/en/fa` → `Fa`)
pub fn language_from_cookie(value: &str) -> Option<Language> {
    value.rsplit('/').next().and_then(|code| code.parse().ok())
}

/// Handle returned by [`TranslationControl::on_change`]
pub type ListenerId = u64;
/// Callback invoked with the control's new selection
pub type ChangeCallback = Arc<dyn Fn(Language) + Send + Sync>;

/// Port onto the third-party translation control
pub trait TranslationControl: Send + Sync {
    /// Whether the control has been injected into the page yet
    fn is_present(&self) -> bool;
    fn current_selection(&self) -> Option<Language>;
    fn set_selection(&self, lang: Language);
    /// Fire a synthetic change notification so the widget translates
    fn dispatch_change(&self);
    fn on_change(&self, callback: ChangeCallback) -> ListenerId;
    fn remove_listener(&self, id: ListenerId);
}

/// Port onto the hosting page for the no-widget fallback
pub trait PageHost: Send + Sync {
    fn set_cookie(&self, name: &str, value: &str) -> Result<()>;
    fn reload(&self);
}

/// What `switch_language` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The control was driven directly
    Applied,
    /// No control; the cookie was written and a reload requested
    Reloading,
}

/// Where the change listener stands relative to teardown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListenerSlot {
    Pending,
    Attached(ListenerId),
    Closed,
}

/// Mirrors the selected language between local state and the translation control
pub struct LanguageBridge {
    runtime: Handle,
    control: Arc<dyn TranslationControl>,
    host: Arc<dyn PageHost>,
    state: Arc<watch::Sender<Language>>,
    listener: Arc<Mutex<ListenerSlot>>,
    discovery: Option<JoinHandle<()>>,
    reassert: Option<JoinHandle<()>>,
}

impl LanguageBridge {
    /// Start looking for the control and return the bridge.
    pub fn mount(
        runtime: Handle,
        control: Arc<dyn TranslationControl>,
        host: Arc<dyn PageHost>,
        initial: Language,
    ) -> Self {
        let (state, _) = watch::channel(initial);
        let state = Arc::new(state);
        let listener = Arc::new(Mutex::new(ListenerSlot::Pending));

        let discovery = runtime.spawn(discover(
            control.clone(),
            state.clone(),
            listener.clone(),
        ));

        Self {
            runtime,
            control,
            host,
            state,
            listener,
            discovery: Some(discovery),
            reassert: None,
        }
    }

    /// Language currently shown
    pub fn current(&self) -> Language {
        *self.state.borrow()
    }

    /// Receiver that sees every local language change
    pub fn subscribe(&self) -> watch::Receiver<Language> {
        self.state.subscribe()
    }

    /// Whether the change listener has been attached to the control
    pub fn is_attached(&self) -> bool {
        self.listener
            .lock()
            .map(|l| matches!(*l, ListenerSlot::Attached(_)))
            .unwrap_or(false)
    }

    /// Switch to `lang` locally right away, then make the page follow.
    pub fn switch_language(&mut self, lang: Language) -> Result<SwitchOutcome> {
        self.state.send_replace(lang);

        if self.control.is_present() {
            info!("Switching translation control to {}", lang);
            self.control.set_selection(lang);
            self.control.dispatch_change();

            if let Some(previous) = self.reassert.take() {
                previous.abort();
            }
            let control = self.control.clone();
            self.reassert = Some(self.runtime.spawn(async move {
                tokio::time::sleep(REASSERT_DELAY).await;
                control.set_selection(lang);
                control.dispatch_change();
            }));
            Ok(SwitchOutcome::Applied)
        } else {
            info!("Translation control absent; falling back to cookie for {}", lang);
            self.host.set_cookie(TRANSLATE_COOKIE, &cookie_value(lang))?;
            self.host.reload();
            Ok(SwitchOutcome::Reloading)
        }
    }

    /// Stop polling, cancel pending re-asserts, and detach from the control
    pub fn teardown(&mut self) {
        if let Some(task) = self.discovery.take() {
            task.abort();
        }
        if let Some(task) = self.reassert.take() {
            task.abort();
        }
        // Closed under the lock so a discovery task mid-attach detaches itself
        let mut guard = match self.listener.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let ListenerSlot::Attached(id) = std::mem::replace(&mut *guard, ListenerSlot::Closed) {
            self.control.remove_listener(id);
        }
    }
}

impl Drop for LanguageBridge {
    fn drop(&mut self) {
        self.teardown();
    }
}

async fn discover(
    control: Arc<dyn TranslationControl>,
    state: Arc<watch::Sender<Language>>,
    listener: Arc<Mutex<ListenerSlot>>,
) {
    let found = tokio::time::timeout(DISCOVERY_TIMEOUT, async {
        let mut ticker = tokio::time::interval(POLL_INTERVAL);
        loop {
            ticker.tick().await;
            if control.is_present() {
                break;
            }
        }
    })
    .await;

    if found.is_err() {
        debug!(
            "Translation control did not appear within {:?}; language switching stays local",
            DISCOVERY_TIMEOUT
        );
        return;
    }

    if let Some(selected) = control.current_selection() {
        state.send_replace(selected);
    }

    let mirror = state.clone();
    let id = control.on_change(Arc::new(move |lang| {
        mirror.send_replace(lang);
    }));

    let mut guard = match listener.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            warn!("Language listener slot poisoned; detaching");
            drop(poisoned);
            control.remove_listener(id);
            return;
        }
    };
    if *guard == ListenerSlot::Closed {
        debug!("Bridge torn down while attaching; detaching listener");
        control.remove_listener(id);
        return;
    }
    *guard = ListenerSlot::Attached(id);
    debug!("Attached to translation control");
}
