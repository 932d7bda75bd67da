use std::collections::HashSet;
use std::sync::Arc;

use iced::keyboard::{self, key};
use iced::{Element, Subscription, Task, Theme};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

mod api;
mod color;
mod config;
mod error;
mod logging;
mod state;
mod ui;

use api::client::{ClientConfig, PokeApiClient, CATALOG_PAGE_SIZE};
use api::loader::load_catalog;
use api::sprites::{self, SpriteReady};
use config::Settings;
use error::{AppError, LoadError};
use state::catalog::CatalogState;
use state::data::CatalogItem;

/// Main application state
struct Pokedex {
    /// Working set, loading flag, error and selection
    catalog: CatalogState,
    client: Arc<PokeApiClient>,
    settings: Settings,
    assets: ui::Assets,
    /// Sprites downloaded so far
    sprites: ui::SpritePaths,
    /// Cancels the current load and its sprite downloads
    cancel: CancellationToken,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// A load sequence finished (or was cancelled)
    Loaded {
        generation: u64,
        result: Result<Vec<CatalogItem>, LoadError>,
    },
    /// User clicked a card
    Select(i64),
    /// User asked for a fresh load (F5)
    Reload,
    /// A sprite finished downloading
    SpriteReady(SpriteReady),
}

impl Pokedex {
    /// Create the application and kick off the first load
    fn new(settings: Settings, client: PokeApiClient) -> (Self, Task<Message>) {
        let mut app = Pokedex {
            catalog: CatalogState::new(),
            client: Arc::new(client),
            assets: ui::Assets::new(settings.asset_dir.clone()),
            settings,
            sprites: ui::SpritePaths::new(),
            cancel: CancellationToken::new(),
        };
        let task = app.start_load();
        (app, task)
    }

    /// Start a load sequence, superseding any load still in flight
    fn start_load(&mut self) -> Task<Message> {
        self.cancel.cancel();
        self.cancel = CancellationToken::new();

        let generation = self.catalog.start_load();
        let client = Arc::clone(&self.client);
        let cancel = self.cancel.clone();
        let max_concurrent = self.settings.concurrency_limit();

        info!(
            generation,
            base_url = %client.base_url(),
            page_size = CATALOG_PAGE_SIZE,
            max_concurrent,
            "loading catalog"
        );

        Task::perform(
            async move { load_catalog(&*client, CATALOG_PAGE_SIZE, max_concurrent, &cancel).await },
            move |result| Message::Loaded { generation, result },
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Loaded { generation, result } => {
                if !self.catalog.is_current(generation) {
                    debug!(generation, "discarding result of superseded load");
                    return Task::none();
                }

                match result {
                    Ok(items) => {
                        let urls = sprite_urls(&items);
                        self.catalog.load_succeeded(items);
                        self.fetch_sprites(urls)
                    }
                    Err(LoadError::Cancelled) => Task::none(),
                    Err(e) => {
                        error!(error = %e, "catalog load failed");
                        self.catalog.load_failed(e);
                        Task::none()
                    }
                }
            }
            Message::Select(id) => {
                if !self.catalog.select(id) {
                    debug!(id, "selection ignored, not in working set");
                }
                Task::none()
            }
            Message::Reload => self.start_load(),
            Message::SpriteReady(ready) => {
                if let Some(path) = ready.path {
                    self.sprites.insert(ready.url, path);
                }
                Task::none()
            }
        }
    }

    /// Download sprites for the working set in the background
    fn fetch_sprites(&self, urls: Vec<String>) -> Task<Message> {
        let urls: Vec<String> = urls
            .into_iter()
            .filter(|url| !self.sprites.contains_key(url))
            .collect();
        if urls.is_empty() {
            return Task::none();
        }

        debug!(count = urls.len(), "fetching sprites");
        Task::run(
            sprites::fetch_all(
                Arc::clone(&self.client),
                urls,
                self.settings.sprite_cache_dir(),
                self.settings.concurrency_limit(),
                self.cancel.clone(),
            ),
            Message::SpriteReady,
        )
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        ui::view(ui::present(&self.catalog, &self.assets), &self.sprites)
    }

    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, _modifiers| match key {
            keyboard::Key::Named(key::Named::F5) => Some(Message::Reload),
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

impl Drop for Pokedex {
    fn drop(&mut self) {
        // In-flight requests are aborted and their results never applied
        self.cancel.cancel();
    }
}

/// Unique sprite and artwork URLs in working-set order
fn sprite_urls(items: &[CatalogItem]) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .flat_map(|item| [item.sprite_url.as_ref(), item.artwork_url.as_ref()])
        .flatten()
        .filter(|url| seen.insert(url.as_str()))
        .cloned()
        .collect()
}

fn main() -> Result<(), AppError> {
    logging::init_logger();

    let settings = Settings::load()?;
    let client = PokeApiClient::new(ClientConfig::from(&settings))?;
    info!(?settings, "starting Pokédex");

    iced::application("Pokédex", Pokedex::update, Pokedex::view)
        .theme(Pokedex::theme)
        .subscription(Pokedex::subscription)
        .centered()
        .run_with(move || Pokedex::new(settings, client))?;

    Ok(())
}
