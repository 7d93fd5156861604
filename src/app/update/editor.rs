use super::super::messages::{
    EditorTab, ImageSlot, InfoField, InfoFlag, NewsScope, SaveOutcome,
};
use super::super::state::{App, Flash, NewsForm, Page};
use super::Effect;
use super::landing::wheel_delta_px;
use crate::content::{HeroField, NewsItem};
use crate::i18n::{Label, Language, tr};
use iced::mouse::ScrollDelta;
use std::time::Instant;
use tracing::{debug, error, info, warn};

impl App {
    pub(super) fn handle_news_loaded(
        &mut self,
        scope: NewsScope,
        news: Result<Vec<NewsItem>, String>,
    ) {
        let news = match news {
            Ok(news) => news,
            Err(err) => {
                warn!(?scope, error = %err, "Failed to load news");
                Vec::new()
            }
        };
        debug!(?scope, count = news.len(), "News loaded");
        match scope {
            NewsScope::Landing => {
                if let Some(landing) = self.landing.as_mut() {
                    landing.set_news(news);
                }
            }
            NewsScope::Editor => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.news_list = news;
                    editor.news_loading = false;
                }
            }
        }
    }

    pub(super) fn handle_edit_news_from_landing(&mut self, id: String, effects: &mut Vec<Effect>) {
        let item = self
            .landing
            .as_ref()
            .and_then(|landing| landing.news.iter().find(|item| item.id == id).cloned());
        self.show_admin(effects);
        if let (Some(editor), Some(item)) = (self.editor.as_mut(), item) {
            info!(id = %item.id, "Editing news item from the landing page");
            editor.tab = EditorTab::News;
            editor.news = NewsForm::load(&item);
        }
    }

    pub(super) fn handle_delete_news(&mut self, id: String, effects: &mut Vec<Effect>) {
        if !self.is_signed_in() {
            warn!(%id, "Ignoring delete without a signed-in user");
            return;
        }
        if let Some(editor) = self.editor.as_mut() {
            editor.saving = true;
        }
        effects.push(Effect::DeleteNews(id));
    }

    pub(super) fn handle_editor_tab_selected(&mut self, tab: EditorTab, effects: &mut Vec<Effect>) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };
        if editor.tab == tab {
            return;
        }
        editor.tab = tab;
        match tab {
            EditorTab::News => effects.push(Effect::LoadNews(NewsScope::Editor)),
            EditorTab::Hero => editor.scrub.reset(),
            EditorTab::Info => {}
        }
    }

    pub(super) fn handle_preview_wheel(&mut self, delta: ScrollDelta) {
        let delta_y = wheel_delta_px(delta, self.config.wheel_line_px);
        if let Some(editor) = self.editor.as_mut() {
            let progress = editor.scrub.on_wheel(delta_y);
            debug!(delta_y, progress, "Preview scrub");
        }
    }

    pub(super) fn handle_input_language_selected(&mut self, language: Language) {
        if let Some(editor) = self.editor.as_mut() {
            editor.input_language = language;
        }
    }

    pub(super) fn handle_news_title_changed(&mut self, value: String) {
        if let Some(editor) = self.editor.as_mut() {
            let lang = editor.active_input_language();
            editor.news.title.set(lang, value);
        }
    }

    pub(super) fn handle_news_content_changed(&mut self, value: String) {
        if let Some(editor) = self.editor.as_mut() {
            let lang = editor.active_input_language();
            editor.news.content.set(lang, value);
        }
    }

    pub(super) fn handle_news_image_path_changed(&mut self, value: String) {
        if let Some(editor) = self.editor.as_mut() {
            editor.news.image_path = value;
        }
    }

    pub(super) fn handle_news_submit(&mut self, effects: &mut Vec<Effect>) {
        let language = self.language;
        let Some(editor) = self.editor.as_mut() else {
            return;
        };
        if editor.saving {
            return;
        }
        editor.saving = true;
        editor.flash = Some(Flash::pending(tr(Label::AdminMsgUploading, language)));
        effects.push(Effect::SaveNews {
            id: editor.news.editing_id.clone(),
            draft: editor.news.draft(),
            image: editor.news.picked_image(),
        });
    }

    pub(super) fn handle_news_edit_started(&mut self, id: String, effects: &mut Vec<Effect>) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };
        let Some(item) = editor.news_list.iter().find(|item| item.id == id) else {
            warn!(%id, "News item to edit is no longer listed");
            return;
        };
        editor.news = NewsForm::load(item);
        effects.push(Effect::ScrollEditorToTop);
    }

    pub(super) fn handle_news_edit_cancelled(&mut self) {
        if let Some(editor) = self.editor.as_mut() {
            editor.news = NewsForm::default();
        }
    }

    pub(super) fn handle_info_text_changed(&mut self, field: InfoField, value: String) {
        if let Some(editor) = self.editor.as_mut() {
            let lang = editor.active_input_language();
            editor.info.set_text(field, value, lang);
        }
    }

    pub(super) fn handle_info_flag_toggled(&mut self, flag: InfoFlag, value: bool) {
        if let Some(editor) = self.editor.as_mut() {
            editor.info.set_flag(flag, value);
        }
    }

    pub(super) fn handle_schedule_day_toggled(&mut self, day: &'static str) {
        if let Some(editor) = self.editor.as_mut() {
            editor.info.toggle_day(day);
        }
    }

    pub(super) fn handle_schedule_add(&mut self) {
        if let Some(editor) = self.editor.as_mut() {
            if !editor.info.add_schedule_entry() {
                debug!("Schedule row needs at least one day and a time");
            }
        }
    }

    pub(super) fn handle_schedule_remove(&mut self, index: usize) {
        if let Some(editor) = self.editor.as_mut() {
            editor.info.remove_schedule_entry(index);
        }
    }

    pub(super) fn handle_info_submit(&mut self, effects: &mut Vec<Effect>) {
        let language = self.language;
        let Some(editor) = self.editor.as_mut() else {
            return;
        };
        if editor.saving {
            return;
        }
        editor.saving = true;
        editor.flash = Some(Flash::pending(tr(Label::AdminMsgSaving, language)));
        effects.push(Effect::SaveInfo {
            settings: editor.info.to_settings(),
            logo: editor.info.picked_logo(),
        });
    }

    pub(super) fn handle_hero_text_changed(&mut self, field: HeroField, value: String) {
        if let Some(editor) = self.editor.as_mut() {
            let lang = editor.active_input_language();
            editor.hero.set_text(field, lang, value);
        }
    }

    pub(super) fn handle_hero_image_path_changed(&mut self, slot: ImageSlot, value: String) {
        if let Some(editor) = self.editor.as_mut() {
            editor.hero.set_image_path(slot, value);
        }
    }

    pub(super) fn handle_hero_submit(&mut self, effects: &mut Vec<Effect>) {
        let language = self.language;
        let Some(editor) = self.editor.as_mut() else {
            return;
        };
        if editor.saving {
            return;
        }
        editor.saving = true;
        editor.flash = Some(Flash::pending(tr(Label::AdminMsgSaving, language)));
        effects.push(Effect::SaveHero {
            hero: editor.hero.to_hero_content(),
            hero_image: editor.hero.picked_image(ImageSlot::Hero),
            about_image: editor.hero.picked_image(ImageSlot::About),
        });
    }

    pub(super) fn handle_editor_saved(
        &mut self,
        result: Result<SaveOutcome, String>,
        effects: &mut Vec<Effect>,
    ) {
        let now = Instant::now();
        let language = self.language;
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(err) => {
                error!(error = %err, "Editor write failed");
                if let Some(editor) = self.editor.as_mut() {
                    editor.saving = false;
                    editor.flash = Some(Flash::transient(format!("Error: {err}"), now));
                }
                return;
            }
        };
        info!(?outcome, "Editor write finished");

        let message = match &outcome {
            SaveOutcome::NewsAdded => Label::AdminMsgSuccessNews,
            SaveOutcome::NewsUpdated => Label::AdminMsgUpdated,
            SaveOutcome::NewsDeleted => Label::AdminMsgDeleted,
            SaveOutcome::Info { .. } | SaveOutcome::Hero(_) => Label::AdminMsgSuccessInfo,
        };
        let keep_news_form = matches!(outcome, SaveOutcome::NewsDeleted);
        match outcome {
            SaveOutcome::NewsAdded | SaveOutcome::NewsUpdated | SaveOutcome::NewsDeleted => {
                let scope = match self.page {
                    Page::Landing => NewsScope::Landing,
                    Page::Admin => NewsScope::Editor,
                };
                effects.push(Effect::LoadNews(scope));
                if let Some(editor) = self.editor.as_mut() {
                    if !keep_news_form {
                        editor.news = NewsForm::default();
                    }
                }
            }
            SaveOutcome::Info { logo_url } => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.info.logo_url = logo_url;
                    editor.info.logo_path.clear();
                }
                effects.push(Effect::LoadSettings);
            }
            SaveOutcome::Hero(hero) => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.hero.saved(hero);
                }
                effects.push(Effect::LoadSettings);
            }
        }
        if let Some(editor) = self.editor.as_mut() {
            editor.saving = false;
            editor.flash = Some(Flash::transient(tr(message, language), now));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::ConfigAuth;
    use crate::config::AppConfig;
    use crate::i18n::LocalizedText;
    use crate::app::state::EditorState;
    use crate::store::JsonFileStore;
    use std::sync::Arc;

    fn editor_app() -> (App, tempfile::TempDir) {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut app = App::new(
            AppConfig::default(),
            Arc::new(JsonFileStore::new(dir.path())),
            Arc::new(ConfigAuth::new(Some("owner".into()))),
            dir.path().join(".cache"),
            Language::Jp,
        );
        let mut effects = Vec::new();
        app.show_admin(&mut effects);
        (app, dir)
    }

    fn editor(app: &App) -> &EditorState {
        app.editor.as_ref().expect("editor")
    }

    #[test]
    fn preview_wheel_scrubs_and_hero_tab_resets() {
        let (mut app, _dir) = editor_app();
        let mut effects = Vec::new();
        app.handle_editor_tab_selected(EditorTab::Hero, &mut effects);
        app.handle_preview_wheel(ScrollDelta::Pixels { x: 0.0, y: -250.0 });
        assert!((editor(&app).scrub.progress() - 50.0).abs() < 1e-4);

        app.handle_editor_tab_selected(EditorTab::Info, &mut effects);
        app.handle_editor_tab_selected(EditorTab::Hero, &mut effects);
        assert_eq!(editor(&app).scrub.progress(), 0.0);
    }

    #[test]
    fn single_language_input_writes_jp() {
        let (mut app, _dir) = editor_app();
        app.handle_input_language_selected(Language::En);
        app.handle_news_title_changed("お知らせ".into());
        assert_eq!(editor(&app).news.title.get(Language::Jp), "お知らせ");
        assert_eq!(editor(&app).news.title.get(Language::En), "");
    }

    #[test]
    fn submit_is_single_flight() {
        let (mut app, _dir) = editor_app();
        let mut effects = Vec::new();
        app.handle_news_submit(&mut effects);
        app.handle_news_submit(&mut effects);
        assert_eq!(
            effects
                .iter()
                .filter(|effect| matches!(effect, Effect::SaveNews { .. }))
                .count(),
            1
        );
        assert!(editor(&app).flash.as_ref().is_some_and(|f| f.expires_at.is_none()));
    }

    #[test]
    fn successful_save_resets_form_and_reloads() {
        let (mut app, _dir) = editor_app();
        let mut effects = Vec::new();
        if let Some(editor) = app.editor.as_mut() {
            editor.news.editing_id = Some("n1".into());
            editor.news.title = LocalizedText::from("draft");
            editor.saving = true;
        }
        app.handle_editor_saved(Ok(SaveOutcome::NewsUpdated), &mut effects);
        assert!(matches!(effects.as_slice(), [Effect::LoadNews(NewsScope::Editor)]));
        let editor = editor(&app);
        assert!(!editor.is_editing_news());
        assert!(!editor.saving);
        assert!(editor.flash_pending());
    }

    #[test]
    fn failed_save_keeps_the_form() {
        let (mut app, _dir) = editor_app();
        let mut effects = Vec::new();
        if let Some(editor) = app.editor.as_mut() {
            editor.news.title = LocalizedText::from("draft");
            editor.saving = true;
        }
        app.handle_editor_saved(Err("disk full".into()), &mut effects);
        assert!(effects.is_empty());
        let editor = editor(&app);
        assert_eq!(editor.news.title.get(Language::Jp), "draft");
        assert!(editor.flash.as_ref().is_some_and(|f| f.text.contains("disk full")));
    }

    #[test]
    fn expired_message_is_cleared_on_tick() {
        let (mut app, _dir) = editor_app();
        let now = Instant::now();
        if let Some(editor) = app.editor.as_mut() {
            editor.flash = Some(Flash::transient("saved", now));
        }
        let mut effects = Vec::new();
        app.handle_tick(now + std::time::Duration::from_secs(4), &mut effects);
        assert!(editor(&app).flash.is_none());
    }
}
