use crate::components::popup::Popup;
use crate::core::language::Language;
use crate::core::routing::Section;
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use crate::translation::LocalTranslator;
use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, ListState};

/// Entries of the mobile menu: every section, then the language switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Section(Section),
    Language,
}

impl MenuEntry {
    pub fn all() -> Vec<MenuEntry> {
        Section::ALL
            .into_iter()
            .map(MenuEntry::Section)
            .chain(std::iter::once(MenuEntry::Language))
            .collect()
    }
}

/// Full-screen menu overlay used on narrow terminals
pub struct NavMenu<'a> {
    pub selected: usize,
    pub language: Language,
    pub translator: &'a LocalTranslator,
}

impl NavMenu<'_> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let content = Popup::new()
            .width(50)
            .height(60)
            .title("☰ Menu")
            .hints("Go: Enter | Close: Esc/m")
            .render(frame, area);

        let items: Vec<ListItem> = MenuEntry::all()
            .into_iter()
            .map(|entry| match entry {
                MenuEntry::Section(section) => {
                    ListItem::new(self.translator.translate(section.title()).into_owned())
                }
                MenuEntry::Language => ListItem::new(format!(
                    "🌐 {} → {}",
                    self.language.native_name(),
                    self.language.toggled().native_name()
                ))
                .style(t.accent_style()),
            })
            .collect();

        let mut state = ListState::default().with_selected(Some(self.selected));
        frame.render_stateful_widget(
            List::new(items)
                .style(t.text_style())
                .highlight_style(t.highlight_style())
                .highlight_symbol(LIST_HIGHLIGHT_SYMBOL),
            content,
            &mut state,
        );
    }
}
