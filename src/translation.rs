//! In-process stand-ins for the page's translation widget and cookie store.
//!
//! `LocalTranslator` plays the injected widget: it is absent until `inject` is
//! called, then holds a selection and translates headline text. `CookieJar`
//! is the page host used for the no-widget fallback; cookies persist in a
//! small TOML file so the next launch can pick the language up again.

use crate::core::language::{
    language_from_cookie, ChangeCallback, Language, ListenerId, PageHost, TranslationControl,
    TRANSLATE_COOKIE,
};
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tracing::{debug, warn};

/// Persian renderings of the page's fixed headlines and labels
const FA_PHRASES: &[(&str, &str)] = &[
    ("Home", "خانه"),
    ("Services", "خدمات"),
    ("About", "درباره ما"),
    ("FAQ", "سوالات متداول"),
    ("Contact", "تماس"),
    ("Our Services", "خدمات ما"),
    ("Get In Touch", "با ما در تماس باشید"),
    ("Frequently Asked Questions", "سوالات متداول"),
    ("About Happy Visit Home Health", "درباره هپی ویزیت هوم هلث"),
    (
        "Compassionate Care in the Comfort of Your Home",
        "مراقبت دلسوزانه در آرامش خانه شما",
    ),
    ("Office Hours", "ساعات کاری"),
    ("Name", "نام"),
    ("Email", "ایمیل"),
    ("Phone", "تلفن"),
    ("Message", "پیام"),
    ("Send Message", "ارسال پیام"),
    ("Sending...", "در حال ارسال..."),
];

#[derive(Default)]
struct TranslatorState {
    present: bool,
    selection: Option<Language>,
    listeners: Vec<(ListenerId, ChangeCallback)>,
    next_id: ListenerId,
}

/// Translation widget living inside the terminal page
#[derive(Default)]
pub struct LocalTranslator {
    state: Mutex<TranslatorState>,
}

impl LocalTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the control visible, preselecting `lang` the way the widget does
    /// when it finds its cookie on load
    pub fn inject(&self, lang: Option<Language>) {
        if let Ok(mut state) = self.state.lock() {
            state.present = true;
            state.selection = lang.or(Some(Language::En));
            debug!("Translation control injected ({:?})", state.selection);
        }
    }

    /// Translate a fixed UI string into the current selection
    pub fn translate<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let selection = self
            .state
            .lock()
            .ok()
            .filter(|s| s.present)
            .and_then(|s| s.selection);
        match selection {
            Some(Language::Fa) => FA_PHRASES
                .iter()
                .find(|(en, _)| *en == text)
                .map_or(Cow::Borrowed(text), |(_, fa)| Cow::Borrowed(*fa)),
            _ => Cow::Borrowed(text),
        }
    }
}

impl TranslationControl for LocalTranslator {
    fn is_present(&self) -> bool {
        self.state.lock().map(|s| s.present).unwrap_or(false)
    }

    fn current_selection(&self) -> Option<Language> {
        self.state.lock().ok().and_then(|s| s.selection)
    }

    fn set_selection(&self, lang: Language) {
        if let Ok(mut state) = self.state.lock() {
            state.selection = Some(lang);
        }
    }

    fn dispatch_change(&self) {
        let (selection, callbacks) = match self.state.lock() {
            Ok(state) => (
                state.selection,
                state
                    .listeners
                    .iter()
                    .map(|(_, cb)| cb.clone())
                    .collect::<Vec<_>>(),
            ),
            Err(_) => return,
        };
        if let Some(lang) = selection {
            for callback in callbacks {
                callback(lang);
            }
        }
    }

    fn on_change(&self, callback: ChangeCallback) -> ListenerId {
        match self.state.lock() {
            Ok(mut state) => {
                state.next_id += 1;
                let id = state.next_id;
                state.listeners.push((id, callback));
                id
            }
            Err(_) => 0,
        }
    }

    fn remove_listener(&self, id: ListenerId) {
        if let Ok(mut state) = self.state.lock() {
            state.listeners.retain(|(existing, _)| *existing != id);
        }
    }
}

/// Cookie store backed by a TOML file, with a reload flag for the app loop
pub struct CookieJar {
    path: PathBuf,
    reload_requested: AtomicBool,
}

impl CookieJar {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            reload_requested: AtomicBool::new(false),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read one cookie, treating a missing or unreadable jar as empty
    pub fn get(&self, name: &str) -> Option<String> {
        match load_jar(&self.path) {
            Ok(mut jar) => jar.remove(name),
            Err(e) => {
                warn!("Ignoring unreadable cookie jar: {:#}", e);
                None
            }
        }
    }

    /// Language stored by a previous fallback switch
    pub fn saved_language(&self) -> Option<Language> {
        self.get(TRANSLATE_COOKIE)
            .as_deref()
            .and_then(language_from_cookie)
    }

    /// Consume a pending reload request
    pub fn take_reload_request(&self) -> bool {
        self.reload_requested.swap(false, Ordering::SeqCst)
    }
}

impl PageHost for CookieJar {
    fn set_cookie(&self, name: &str, value: &str) -> Result<()> {
        let mut jar = load_jar(&self.path).unwrap_or_default();
        jar.insert(name.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create cookie directory: {:?}", parent))?;
        }
        let content = toml::to_string(&jar).context("Failed to serialize cookies")?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write cookie jar: {:?}", self.path))?;
        Ok(())
    }

    fn reload(&self) {
        self.reload_requested.store(true, Ordering::SeqCst);
    }
}

fn load_jar(path: &Path) -> Result<BTreeMap<String, String>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read cookie jar: {:?}", path))?;
    toml::from_str(&content).context("Failed to parse cookie jar")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[test]
    fn test_translator_absent_until_injected() {
        let translator = LocalTranslator::new();
        assert!(!translator.is_present());
        assert_eq!(translator.translate("Services"), "Services");

        translator.inject(Some(Language::Fa));
        assert!(translator.is_present());
        assert_eq!(translator.translate("Services"), "خدمات");
        assert_eq!(translator.translate("Unknown phrase"), "Unknown phrase");
    }

    #[test]
    fn test_dispatch_reaches_listeners_until_removed() {
        let translator = LocalTranslator::new();
        translator.inject(None);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let id = translator.on_change(Arc::new(move |lang| sink.lock().unwrap().push(lang)));

        translator.set_selection(Language::Fa);
        translator.dispatch_change();
        translator.remove_listener(id);
        translator.dispatch_change();

        assert_eq!(*seen.lock().unwrap(), vec![Language::Fa]);
    }

    #[test]
    fn test_cookie_jar_persists_and_flags_reload() {
        let temp = TempDir::new().unwrap();
        let jar = CookieJar::new(temp.path().join("cookies.toml"));
        assert_eq!(jar.saved_language(), None);

        jar.set_cookie(TRANSLATE_COOKIE, "/en/fa").unwrap();
        jar.reload();

        let reopened = CookieJar::new(temp.path().join("cookies.toml"));
        assert_eq!(reopened.saved_language(), Some(Language::Fa));
        assert!(jar.take_reload_request());
        assert!(!jar.take_reload_request());
    }
}
