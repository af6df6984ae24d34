//! The single page: header, section tabs, section body, overlays, footer.

use crate::catalog::{
    ServiceCategory, ABOUT_FEATURES, ABOUT_PARAGRAPHS, FAQ, HERO_SUBTITLE, PHONE,
    SERVICES_SUBTITLE, SERVICE_CATEGORIES, TAGLINE,
};
use crate::components::{CategoryModal, ContactPanel, Footer, Header, MenuEntry, NavMenu};
use crate::core::contact::SubmissionStatus;
use crate::core::navigation::{NavigationController, PageScroll};
use crate::core::routing::Section;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use crate::ui::PageFocus;
use crate::utils::form::{blocking_fields, FieldEdit, FormCursor};
use crate::utils::layout::{create_page_layout, is_compact};
use anyhow::Result;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap};
use tracing::debug;

const PAGE_STEP: i16 = 10;

pub struct PageScreen {
    section: Section,
    focus: PageFocus,
    nav: NavigationController<PageScroll>,
    /// Body scroll offset for the text sections
    scroll: u16,
    service_index: usize,
    faq_index: usize,
    menu_index: usize,
    modal_scroll: u16,
    form_cursor: FormCursor,
}

impl PageScreen {
    pub fn new(section: Section) -> Self {
        Self::with_scroll(section, PageScroll::new())
    }

    /// Page drawing on an existing scroll surface
    pub fn with_scroll(section: Section, scroll: PageScroll) -> Self {
        Self {
            section,
            focus: PageFocus::Body,
            nav: NavigationController::new(scroll),
            scroll: 0,
            service_index: 0,
            faq_index: 0,
            menu_index: section.index(),
            modal_scroll: 0,
            form_cursor: FormCursor::new(),
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn focus(&self) -> PageFocus {
        self.focus
    }

    pub fn navigation(&self) -> &NavigationController<PageScroll> {
        &self.nav
    }

    pub fn body_scroll(&self) -> u16 {
        self.scroll
    }

    /// The controller cleared the form after a successful send
    pub fn on_form_cleared(&mut self) {
        self.form_cursor.reset();
    }

    /// Release the scroll lock before the page goes away
    pub fn teardown(&mut self) {
        self.nav.teardown();
    }

    fn select_section(&mut self, section: Section) {
        debug!("Section {}", section.anchor());
        self.section = section;
        self.scroll = 0;
        self.focus = PageFocus::Body;
    }

    fn scroll_by(&mut self, delta: i16) {
        // the background page stays put while an overlay holds the lock
        if self.nav.surface().is_locked() {
            return;
        }
        self.scroll = self.scroll.saturating_add_signed(delta);
    }

    fn move_selection(&mut self, down: bool) {
        let step = |index: usize, len: usize| {
            if len == 0 {
                0
            } else if down {
                (index + 1).min(len - 1)
            } else {
                index.saturating_sub(1)
            }
        };
        match self.section {
            Section::Services => {
                self.service_index = step(self.service_index, SERVICE_CATEGORIES.len());
            }
            Section::Faq => self.faq_index = step(self.faq_index, FAQ.len()),
            _ => self.scroll_by(if down { 1 } else { -1 }),
        }
    }

    fn open_selected_category(&mut self) {
        if let Some(category) = SERVICE_CATEGORIES.get(self.service_index) {
            self.modal_scroll = 0;
            self.nav.open_category(category);
        }
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &ScreenContext) -> ScreenAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return ScreenAction::Quit;
        }

        if self.nav.selected_category().is_some() {
            return self.handle_modal_key(key.code);
        }
        if self.nav.mobile_menu_open() {
            return self.handle_menu_key(key.code, ctx);
        }
        if self.focus == PageFocus::Form {
            return self.handle_form_key(key, ctx);
        }
        self.handle_body_key(key.code, ctx)
    }

    fn handle_body_key(&mut self, code: KeyCode, ctx: &ScreenContext) -> ScreenAction {
        match code {
            KeyCode::Char('q') => return ScreenAction::Quit,
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
                self.select_section(self.section.next());
            }
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                self.select_section(self.section.prev());
            }
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                self.select_section(Section::ALL[index]);
            }
            KeyCode::Char('s') => self.select_section(Section::Services),
            KeyCode::Char('c') => self.select_section(Section::Contact),
            KeyCode::Char('m') => {
                self.menu_index = self.section.index();
                self.nav.toggle_mobile_menu();
            }
            KeyCode::Char('L') => return ScreenAction::SwitchLanguage(ctx.language.toggled()),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(false),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(true),
            KeyCode::PageUp => self.scroll_by(-PAGE_STEP),
            KeyCode::PageDown => self.scroll_by(PAGE_STEP),
            KeyCode::Enter => match self.section {
                Section::Home => self.select_section(Section::Contact),
                Section::Services => self.open_selected_category(),
                Section::Contact => self.focus = PageFocus::Form,
                Section::About | Section::Faq => {}
            },
            _ => {}
        }
        ScreenAction::None
    }

    fn handle_modal_key(&mut self, code: KeyCode) -> ScreenAction {
        match code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter | KeyCode::Backspace => {
                self.nav.close_category();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.modal_scroll = self.modal_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.modal_scroll = self.modal_scroll.saturating_add(1);
            }
            KeyCode::PageUp => self.modal_scroll = self.modal_scroll.saturating_sub(10),
            KeyCode::PageDown => self.modal_scroll = self.modal_scroll.saturating_add(10),
            _ => {}
        }
        ScreenAction::None
    }

    fn handle_menu_key(&mut self, code: KeyCode, ctx: &ScreenContext) -> ScreenAction {
        let entries = MenuEntry::all();
        match code {
            KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('q') => {
                self.nav.close_mobile_menu();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.menu_index = self.menu_index.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.menu_index = (self.menu_index + 1).min(entries.len() - 1);
            }
            KeyCode::Enter => {
                // following a link closes the menu
                self.nav.close_mobile_menu();
                match entries.get(self.menu_index) {
                    Some(MenuEntry::Section(section)) => self.select_section(*section),
                    Some(MenuEntry::Language) => {
                        return ScreenAction::SwitchLanguage(ctx.language.toggled());
                    }
                    None => {}
                }
            }
            _ => {}
        }
        ScreenAction::None
    }

    fn handle_form_key(&mut self, key: KeyEvent, ctx: &ScreenContext) -> ScreenAction {
        match key.code {
            KeyCode::Esc => {
                self.focus = PageFocus::Body;
                ScreenAction::None
            }
            KeyCode::Tab | KeyCode::Down => {
                self.form_cursor.focus_next();
                ScreenAction::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form_cursor.focus_prev();
                ScreenAction::None
            }
            KeyCode::Enter => self.try_submit(ctx),
            _ if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                ScreenAction::None
            }
            code => {
                if !ctx.submission.inputs_enabled() {
                    return ScreenAction::None;
                }
                let field = self.form_cursor.focused();
                match self.form_cursor.edit(ctx.submission.form().get(field), code) {
                    FieldEdit::Changed(value) => ScreenAction::UpdateField(field, value),
                    FieldEdit::Moved | FieldEdit::Ignored => ScreenAction::None,
                }
            }
        }
    }

    fn try_submit(&mut self, ctx: &ScreenContext) -> ScreenAction {
        if ctx.submission.status() == SubmissionStatus::Sending {
            return ScreenAction::None;
        }
        let blocking = blocking_fields(ctx.submission.form());
        if let Some(first) = blocking.first().copied() {
            let names: Vec<&str> = blocking.iter().map(|f| f.label()).collect();
            self.form_cursor.focus(first);
            self.form_cursor.set_flagged(blocking.clone());
            return ScreenAction::Notify(format!("Please check: {}", names.join(", ")));
        }
        self.form_cursor.set_flagged(Vec::new());
        ScreenAction::SubmitContact
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> ScreenAction {
        let down = match mouse.kind {
            MouseEventKind::ScrollDown => true,
            MouseEventKind::ScrollUp => false,
            _ => return ScreenAction::None,
        };
        if self.nav.selected_category().is_some() {
            self.modal_scroll = if down {
                self.modal_scroll.saturating_add(1)
            } else {
                self.modal_scroll.saturating_sub(1)
            };
        } else {
            self.scroll_by(if down { 1 } else { -1 });
        }
        ScreenAction::None
    }

    fn footer_hints(&self) -> &'static str {
        if self.nav.selected_category().is_some() {
            "Scroll: ↑/↓ | Close: Esc"
        } else if self.nav.mobile_menu_open() {
            "Move: ↑/↓ | Go: Enter | Close: Esc"
        } else if self.focus == PageFocus::Form {
            "Next field: Tab | Send: Enter | Done: Esc"
        } else {
            match self.section {
                Section::Services => {
                    "Sections: Tab/1-5 | Select: ↑/↓ | Details: Enter | Menu: m | Language: L | Quit: q"
                }
                Section::Contact => {
                    "Sections: Tab/1-5 | Fill in form: Enter | Menu: m | Language: L | Quit: q"
                }
                _ => "Sections: Tab/1-5 | Scroll: ↑/↓ | Menu: m | Language: L | Quit: q",
            }
        }
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let t = theme();
        if is_compact(area) {
            let line = Line::from(vec![
                Span::styled("☰ Menu (m)", t.accent_style()),
                Span::styled("  ·  ", t.muted_style()),
                Span::styled(
                    ctx.translator.translate(self.section.title()).into_owned(),
                    t.title_style(),
                ),
            ]);
            frame.render_widget(
                Paragraph::new(line).block(
                    Block::default()
                        .borders(Borders::BOTTOM)
                        .border_style(t.border_style()),
                ),
                area,
            );
            return;
        }

        let titles: Vec<String> = Section::ALL
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{} {}", i + 1, ctx.translator.translate(s.title())))
            .collect();
        let tabs = Tabs::new(titles)
            .select(self.section.index())
            .style(t.text_style())
            .highlight_style(t.highlight_style())
            .divider(" │ ")
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(t.border_style()),
            );
        frame.render_widget(tabs, area);
    }

    fn body_block(&self, title: String) -> Block<'static> {
        let t = theme();
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_style())
            .title(format!(" {} ", title))
            .title_style(t.title_style())
    }

    fn render_text_section(&self, frame: &mut Frame, area: Rect, title: String, lines: Vec<Line<'static>>) {
        let paragraph = Paragraph::new(lines)
            .block(self.body_block(title))
            .wrap(Wrap { trim: true })
            .scroll((self.scroll, 0));
        frame.render_widget(paragraph, area);
    }

    fn home_lines(ctx: &RenderContext) -> Vec<Line<'static>> {
        let t = theme();
        vec![
            Line::from(""),
            Line::styled(ctx.translator.translate(TAGLINE).into_owned(), t.title_style())
                .alignment(Alignment::Center),
            Line::from(""),
            Line::styled(HERO_SUBTITLE, t.text_style()).alignment(Alignment::Center),
            Line::from(""),
            Line::from(vec![
                Span::styled("[ Get Started ]", t.accent_style()),
                Span::styled(" Enter    ", t.muted_style()),
                Span::styled(
                    format!("[ {} ]", ctx.translator.translate("Our Services")),
                    t.accent_style(),
                ),
                Span::styled(" s", t.muted_style()),
            ])
            .alignment(Alignment::Center),
        ]
    }

    fn about_lines() -> Vec<Line<'static>> {
        let t = theme();
        let mut lines = Vec::new();
        for paragraph in ABOUT_PARAGRAPHS {
            lines.push(Line::styled(*paragraph, t.text_style()));
            lines.push(Line::from(""));
        }
        for feature in ABOUT_FEATURES {
            lines.push(Line::from(vec![
                Span::styled("✓ ", t.success_style()),
                Span::styled(*feature, t.text_style()),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Call us: ", t.muted_style()),
            Span::styled(PHONE, t.accent_style()),
        ]));
        lines
    }

    fn faq_lines(&self) -> Vec<Line<'static>> {
        let t = theme();
        let mut lines = Vec::new();
        for (i, entry) in FAQ.iter().enumerate() {
            if i == self.faq_index {
                lines.push(Line::styled(format!("▾ {}", entry.question), t.highlight_style()));
                lines.push(Line::styled(format!("  {}", entry.answer), t.text_style()));
            } else {
                lines.push(Line::styled(format!("▸ {}", entry.question), t.title_style()));
            }
            lines.push(Line::from(""));
        }
        lines
    }

    fn render_services(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let t = theme();
        let block = self.body_block(ctx.translator.translate("Our Services").into_owned());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(inner);
        frame.render_widget(
            Paragraph::new(SERVICES_SUBTITLE)
                .style(t.muted_style())
                .wrap(Wrap { trim: true }),
            chunks[0],
        );

        let items: Vec<ListItem> = SERVICE_CATEGORIES
            .iter()
            .map(|c: &ServiceCategory| {
                ListItem::new(vec![
                    Line::styled(format!("{} {}", c.icon, c.title), t.title_style()),
                    Line::styled(format!("   {}", c.short_description), t.text_style()),
                ])
            })
            .collect();
        let mut state = ListState::default().with_selected(Some(self.service_index));
        frame.render_stateful_widget(
            List::new(items)
                .highlight_style(t.highlight_style())
                .highlight_symbol(LIST_HIGHLIGHT_SYMBOL),
            chunks[1],
            &mut state,
        );
    }
}

impl Screen for PageScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let [header, tabs, body, footer] =
            create_page_layout(area, Header::HEIGHT, Footer::HEIGHT);

        Header::render(frame, header, &ctx.translator.translate(TAGLINE), ctx.language)?;
        self.render_tabs(frame, tabs, ctx);

        let title = ctx.translator.translate(self.section.title()).into_owned();
        match self.section {
            Section::Home => self.render_text_section(frame, body, title, Self::home_lines(ctx)),
            Section::Services => self.render_services(frame, body, ctx),
            Section::About => {
                let title = ctx
                    .translator
                    .translate("About Happy Visit Home Health")
                    .into_owned();
                self.render_text_section(frame, body, title, Self::about_lines());
            }
            Section::Faq => {
                let title = ctx
                    .translator
                    .translate("Frequently Asked Questions")
                    .into_owned();
                self.render_text_section(frame, body, title, self.faq_lines());
            }
            Section::Contact => {
                let block = self.body_block(title);
                let inner = block.inner(body);
                frame.render_widget(block, body);
                ContactPanel {
                    form: ctx.submission.form(),
                    status: ctx.submission.status(),
                    inputs_enabled: ctx.submission.inputs_enabled(),
                    cursor: &self.form_cursor,
                    focused: self.focus == PageFocus::Form,
                    translator: ctx.translator,
                }
                .render(frame, inner);
            }
        }

        Footer::render(frame, footer, self.footer_hints(), ctx.year)?;

        if let Some(category) = self.nav.selected_category() {
            CategoryModal {
                category,
                scroll: self.modal_scroll,
            }
            .render(frame, area);
        }
        if self.nav.mobile_menu_open() {
            NavMenu {
                selected: self.menu_index,
                language: ctx.language,
                translator: ctx.translator,
            }
            .render(frame, area);
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        Ok(match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key, ctx),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => ScreenAction::None,
        })
    }

    fn is_input_focused(&self) -> bool {
        self.focus == PageFocus::Form
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EmailConfig;
    use crate::core::contact::{ContactField, SubmissionController};
    use crate::core::language::Language;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn press(page: &mut PageScreen, controller: &SubmissionController, code: KeyCode) -> ScreenAction {
        let ctx = ScreenContext {
            submission: controller,
            language: Language::En,
        };
        page.handle_event(key(code), &ctx).unwrap()
    }

    #[test]
    fn test_tab_cycles_sections() {
        let controller = SubmissionController::new(EmailConfig::default());
        let mut page = PageScreen::new(Section::Home);
        press(&mut page, &controller, KeyCode::Tab);
        assert_eq!(page.section(), Section::Services);
        press(&mut page, &controller, KeyCode::BackTab);
        press(&mut page, &controller, KeyCode::BackTab);
        assert_eq!(page.section(), Section::Contact);
    }

    #[test]
    fn test_category_modal_locks_scroll() {
        let controller = SubmissionController::new(EmailConfig::default());
        let mut page = PageScreen::new(Section::Services);
        press(&mut page, &controller, KeyCode::Down);
        press(&mut page, &controller, KeyCode::Enter);

        let selected = page.navigation().selected_category().map(|c| c.id);
        assert_eq!(selected, Some(SERVICE_CATEGORIES[1].id));
        assert!(page.navigation().surface().is_locked());

        press(&mut page, &controller, KeyCode::Esc);
        assert!(page.navigation().selected_category().is_none());
        assert!(!page.navigation().surface().is_locked());
    }

    #[test]
    fn test_body_does_not_scroll_under_menu() {
        let controller = SubmissionController::new(EmailConfig::default());
        let mut page = PageScreen::new(Section::About);
        press(&mut page, &controller, KeyCode::Char('m'));
        assert!(page.navigation().mobile_menu_open());
        page.scroll_by(5);
        assert_eq!(page.body_scroll(), 0);

        press(&mut page, &controller, KeyCode::Esc);
        press(&mut page, &controller, KeyCode::PageDown);
        assert_eq!(page.body_scroll(), PAGE_STEP as u16);
    }

    #[test]
    fn test_menu_link_closes_menu() {
        let controller = SubmissionController::new(EmailConfig::default());
        let mut page = PageScreen::new(Section::Home);
        press(&mut page, &controller, KeyCode::Char('m'));
        press(&mut page, &controller, KeyCode::Down);
        press(&mut page, &controller, KeyCode::Enter);
        assert!(!page.navigation().mobile_menu_open());
        assert_eq!(page.section(), Section::Services);
    }

    #[test]
    fn test_menu_language_entry_switches() {
        let controller = SubmissionController::new(EmailConfig::default());
        let mut page = PageScreen::new(Section::Home);
        press(&mut page, &controller, KeyCode::Char('m'));
        for _ in 0..MenuEntry::all().len() {
            press(&mut page, &controller, KeyCode::Down);
        }
        let action = press(&mut page, &controller, KeyCode::Enter);
        assert_eq!(action, ScreenAction::SwitchLanguage(Language::Fa));
    }

    #[test]
    fn test_typing_updates_field_and_empty_submit_is_refused() {
        let mut controller = SubmissionController::new(EmailConfig::default());
        let mut page = PageScreen::new(Section::Contact);
        press(&mut page, &controller, KeyCode::Enter);
        assert!(page.is_input_focused());

        let action = press(&mut page, &controller, KeyCode::Char('J'));
        assert_eq!(
            action,
            ScreenAction::UpdateField(ContactField::Name, "J".to_string())
        );
        controller.update_field(ContactField::Name, "J");

        let action = press(&mut page, &controller, KeyCode::Enter);
        assert!(matches!(action, ScreenAction::Notify(_)));
        assert!(page.form_cursor.is_flagged(ContactField::Email));
        assert_eq!(page.form_cursor.focused(), ContactField::Email);
    }

    #[test]
    fn test_complete_form_submits() {
        let mut controller = SubmissionController::new(EmailConfig::default());
        controller.update_field(ContactField::Name, "Jo");
        controller.update_field(ContactField::Email, "jo@example.com");
        controller.update_field(ContactField::Phone, "555");
        controller.update_field(ContactField::Message, "Hi");
        let mut page = PageScreen::new(Section::Contact);
        press(&mut page, &controller, KeyCode::Enter);
        assert_eq!(
            press(&mut page, &controller, KeyCode::Enter),
            ScreenAction::SubmitContact
        );
    }

    #[test]
    fn test_language_shortcut() {
        let controller = SubmissionController::new(EmailConfig::default());
        let mut page = PageScreen::new(Section::Home);
        assert_eq!(
            press(&mut page, &controller, KeyCode::Char('L')),
            ScreenAction::SwitchLanguage(Language::Fa)
        );
    }
}
