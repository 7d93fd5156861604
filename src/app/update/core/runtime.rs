use super::super::super::messages::{Message, NewsScope, SaveOutcome};
use super::super::super::state::{App, EDITOR_SCROLL_ID, LANDING_SCROLL_ID};
use super::super::Effect;
use crate::cache::save_language;
use crate::content::{HeroContent, NewsDraft, SiteSettings};
use crate::image_encode::encode_data_uri;
use crate::store::DocumentStore;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::touch;
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::window;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

impl App {
    pub(in crate::app) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::ScrollLanding(offset) => {
                scrollable::scroll_to(LANDING_SCROLL_ID.clone(), AbsoluteOffset { x: 0.0, y: offset })
            }
            Effect::ScrollEditorToTop => {
                scrollable::scroll_to(EDITOR_SCROLL_ID.clone(), AbsoluteOffset { x: 0.0, y: 0.0 })
            }
            Effect::CheckSettingsFingerprint => {
                let store = Arc::clone(&self.store);
                Task::perform(
                    async move {
                        Message::FingerprintChecked(
                            store.settings_fingerprint().map_err(|err| err.to_string()),
                        )
                    },
                    |message| message,
                )
            }
            Effect::LoadSettings => {
                self.settings_loading = true;
                let store = Arc::clone(&self.store);
                Task::perform(
                    async move {
                        let fingerprint = store.settings_fingerprint().unwrap_or_else(|err| {
                            warn!(error = %err, "Fingerprint unavailable while loading settings");
                            None
                        });
                        Message::SettingsLoaded {
                            settings: store.load_settings().map_err(|err| err.to_string()),
                            fingerprint,
                        }
                    },
                    |message| message,
                )
            }
            Effect::LoadNews(scope) => {
                let limit = match scope {
                    NewsScope::Landing => Some(self.config.news_on_landing),
                    NewsScope::Editor => None,
                };
                match scope {
                    NewsScope::Landing => {
                        if let Some(landing) = self.landing.as_mut() {
                            landing.news_loading = true;
                        }
                    }
                    NewsScope::Editor => {
                        if let Some(editor) = self.editor.as_mut() {
                            editor.news_loading = true;
                        }
                    }
                }
                debug!(?scope, ?limit, "Dispatching news load");
                let store = Arc::clone(&self.store);
                Task::perform(
                    async move {
                        Message::NewsLoaded {
                            scope,
                            news: store.list_news(limit).map_err(|err| err.to_string()),
                        }
                    },
                    |message| message,
                )
            }
            Effect::SaveNews { id, draft, image } => {
                let store = Arc::clone(&self.store);
                Task::perform(
                    async move {
                        let result = save_news(store.as_ref(), id, draft, image.as_deref());
                        Message::EditorSaved(result)
                    },
                    |message| message,
                )
            }
            Effect::DeleteNews(id) => {
                let store = Arc::clone(&self.store);
                Task::perform(
                    async move {
                        Message::EditorSaved(
                            store
                                .delete_news(&id)
                                .map(|()| SaveOutcome::NewsDeleted)
                                .map_err(|err| err.to_string()),
                        )
                    },
                    |message| message,
                )
            }
            Effect::SaveInfo { settings, logo } => {
                let store = Arc::clone(&self.store);
                Task::perform(
                    async move {
                        Message::EditorSaved(save_info(store.as_ref(), settings, logo.as_deref()))
                    },
                    |message| message,
                )
            }
            Effect::SaveHero {
                hero,
                hero_image,
                about_image,
            } => {
                let store = Arc::clone(&self.store);
                Task::perform(
                    async move {
                        Message::EditorSaved(save_hero(
                            store.as_ref(),
                            hero,
                            hero_image.as_deref(),
                            about_image.as_deref(),
                        ))
                    },
                    |message| message,
                )
            }
            Effect::PersistLanguage(language) => {
                save_language(&self.cache_dir, language);
                Task::none()
            }
            Effect::OpenUrl(url) => {
                if let Err(err) = webbrowser::open(url) {
                    warn!(url, error = %err, "Failed to open browser");
                }
                Task::none()
            }
            Effect::QuitSafely => {
                if let Some(landing) = self.landing.as_mut() {
                    landing.controller.detach();
                }
                save_language(&self.cache_dir, self.language);
                info!("Exiting");
                iced::exit()
            }
        }
    }
}

fn encode(path: &Path) -> Result<String, String> {
    encode_data_uri(path).map_err(|err| format!("{err:#}"))
}

fn save_news(
    store: &dyn DocumentStore,
    id: Option<String>,
    mut draft: NewsDraft,
    image: Option<&Path>,
) -> Result<SaveOutcome, String> {
    if let Some(path) = image {
        draft.image_url = Some(encode(path)?);
    }
    match id {
        Some(id) => store
            .update_news(&id, draft)
            .map(|_| SaveOutcome::NewsUpdated),
        None => store.add_news(draft).map(|_| SaveOutcome::NewsAdded),
    }
    .map_err(|err| err.to_string())
}

fn save_info(
    store: &dyn DocumentStore,
    mut settings: SiteSettings,
    logo: Option<&Path>,
) -> Result<SaveOutcome, String> {
    if let Some(path) = logo {
        settings.logo_url = Some(encode(path)?);
    }
    store
        .save_settings(&settings)
        .map_err(|err| err.to_string())?;
    Ok(SaveOutcome::Info {
        logo_url: settings.logo_url,
    })
}

fn save_hero(
    store: &dyn DocumentStore,
    mut hero: HeroContent,
    hero_image: Option<&Path>,
    about_image: Option<&Path>,
) -> Result<SaveOutcome, String> {
    if let Some(path) = hero_image {
        hero.hero_image = Some(encode(path)?);
    }
    if let Some(path) = about_image {
        hero.about_image = Some(encode(path)?);
    }
    store.update_hero(&hero).map_err(|err| err.to_string())?;
    Ok(SaveOutcome::Hero(hero))
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    // Touch decides the pointer mode even when a widget consumed it.
    if let Event::Touch(touch::Event::FingerPressed { .. }) = event {
        return Some(Message::TouchDetected);
    }
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocalizedText;
    use crate::store::JsonFileStore;

    #[test]
    fn news_without_new_image_keeps_stored_one() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path());
        let draft = NewsDraft {
            title: LocalizedText::from("Opening"),
            content: LocalizedText::from("Doors open at ten"),
            image_url: Some("data:image/jpeg;base64,AAEC".into()),
        };
        let outcome = save_news(&store, None, draft, None).expect("add");
        assert!(matches!(outcome, SaveOutcome::NewsAdded));

        let stored = store.list_news(None).expect("list");
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].image_url.as_deref(), Some("data:image/jpeg;base64,AAEC"));
    }

    #[test]
    fn unreadable_upload_aborts_the_write() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path());
        let bogus = dir.path().join("not-an-image.png");
        std::fs::write(&bogus, b"plain text").expect("write");

        let result = save_hero(&store, HeroContent::default(), Some(&bogus), None);
        assert!(result.is_err());
        assert!(store.load_settings().expect("load").is_none());
    }

    #[test]
    fn info_save_reports_stored_logo() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path());
        let settings = SiteSettings {
            logo_url: Some("data:image/jpeg;base64,AAEC".into()),
            ..SiteSettings::default()
        };
        match save_info(&store, settings, None).expect("save") {
            SaveOutcome::Info { logo_url } => {
                assert_eq!(logo_url.as_deref(), Some("data:image/jpeg;base64,AAEC"));
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        assert!(store.load_settings().expect("load").is_some());
    }
}
