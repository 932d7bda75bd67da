use tracing::{debug, info};

use super::data::CatalogItem;
use crate::error::LoadError;

/// Which of the three mutually exclusive screens to show
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase<'a> {
    Loading,
    Failed(&'a LoadError),
    Loaded,
}

/// The view's state container.
///
/// All mutation goes through the transition functions below; rendering is a
/// pure function of the current value.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    items: Vec<CatalogItem>,
    is_loading: bool,
    error: Option<LoadError>,
    /// Id of the selected item, always a member of `items`
    selected: Option<i64>,
    /// Bumped on every `start_load` so superseded results can be dropped
    generation: u64,
}

impl CatalogState {
    /// Fresh state, as at mount time: empty and loading
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            is_loading: true,
            error: None,
            selected: None,
            generation: 0,
        }
    }

    /// Enter the loading state for a new load sequence.
    ///
    /// Clears the working set, any previous error and the selection.
    /// Returns the generation tag for this load.
    pub fn start_load(&mut self) -> u64 {
        self.generation += 1;
        self.is_loading = true;
        self.error = None;
        self.selected = None;
        self.items.clear();
        debug!(generation = self.generation, "load started");
        self.generation
    }

    /// Tag of the most recent load
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether results tagged with `generation` belong to the latest load
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Replace the working set with a fully joined result
    pub fn load_succeeded(&mut self, items: Vec<CatalogItem>) {
        info!(count = items.len(), "catalog loaded");
        self.items = items;
        self.error = None;
        self.selected = None;
        self.is_loading = false;
    }

    /// Record a failed load; no partial data is kept
    pub fn load_failed(&mut self, error: LoadError) {
        self.items.clear();
        self.selected = None;
        self.error = Some(error);
        self.is_loading = false;
    }

    /// Select the item with `id`.
    ///
    /// Returns `false` (and changes nothing) when `id` is not in the working set.
    pub fn select(&mut self, id: i64) -> bool {
        if self.items.iter().any(|item| item.id == id) {
            self.selected = Some(id);
            true
        } else {
            false
        }
    }

    pub fn phase(&self) -> Phase<'_> {
        if self.is_loading {
            Phase::Loading
        } else if let Some(error) = &self.error {
            Phase::Failed(error)
        } else {
            Phase::Loaded
        }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&LoadError> {
        self.error.as_ref()
    }

    pub fn selected_item(&self) -> Option<&CatalogItem> {
        let id = self.selected?;
        self.items.iter().find(|item| item.id == id)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn item(id: i64, name: &str, categories: &[&str]) -> CatalogItem {
        CatalogItem {
            id,
            name: name.to_string(),
            order: id,
            categories: categories.iter().map(|c| c.to_string()).collect(),
            sprite_url: Some(format!("https://example.test/showdown/{id}.gif")),
            artwork_url: Some(format!("https://example.test/home/{id}.png")),
            height_dm: 7,
            weight_hg: 69,
        }
    }

    fn loaded() -> CatalogState {
        let mut state = CatalogState::new();
        state.start_load();
        state.load_succeeded(vec![
            item(1, "bulbasaur", &["grass", "poison"]),
            item(4, "charmander", &["fire"]),
        ]);
        state
    }

    #[test]
    fn fresh_state_is_empty_and_loading() {
        let state = CatalogState::new();

        assert_eq!(state.phase(), Phase::Loading);
        assert!(state.items().is_empty());
        assert!(state.error().is_none());
        assert!(state.selected_item().is_none());
    }

    #[test]
    fn loading_is_cleared_on_success() {
        let mut state = CatalogState::new();
        state.start_load();
        assert!(state.is_loading());
        assert_eq!(state.phase(), Phase::Loading);

        state.load_succeeded(vec![item(1, "bulbasaur", &["grass"])]);

        assert!(!state.is_loading());
        assert_eq!(state.phase(), Phase::Loaded);
        assert_eq!(state.items().len(), 1);
    }

    #[test]
    fn loading_is_cleared_on_failure() {
        let mut state = CatalogState::new();
        state.start_load();

        state.load_failed(LoadError::Network("connection refused".to_string()));

        assert!(!state.is_loading());
        assert!(state.items().is_empty());
        assert!(matches!(state.phase(), Phase::Failed(LoadError::Network(_))));
    }

    #[test]
    fn select_replaces_previous_selection() {
        let mut state = loaded();

        assert!(state.select(1));
        assert_eq!(state.selected_item().map(|i| i.name.as_str()), Some("bulbasaur"));

        assert!(state.select(4));
        assert_eq!(state.selected_item().map(|i| i.name.as_str()), Some("charmander"));
    }

    #[test]
    fn select_is_idempotent() {
        let mut state = loaded();
        state.select(4);
        let before = state.clone();

        state.select(4);

        assert_eq!(state, before);
    }

    #[test]
    fn select_on_empty_working_set_is_noop() {
        let mut state = CatalogState::new();
        state.start_load();
        state.load_succeeded(vec![]);

        assert!(!state.select(1));
        assert!(state.selected_item().is_none());
    }

    #[test]
    fn select_unknown_id_keeps_selection() {
        let mut state = loaded();
        state.select(1);

        assert!(!state.select(999));
        assert_eq!(state.selected_item().map(|i| i.id), Some(1));
    }

    #[test]
    fn new_load_clears_selection_and_working_set() {
        let mut state = loaded();
        state.select(1);

        let generation = state.start_load();

        assert!(state.selected_item().is_none());
        assert!(state.items().is_empty());
        assert!(state.is_current(generation));
        assert!(!state.is_current(generation - 1));
    }

    #[test]
    fn failed_reload_drops_previous_data() {
        let mut state = loaded();
        state.select(4);

        state.start_load();
        state.load_failed(LoadError::Unclassified("bad json".to_string()));

        assert!(state.items().is_empty());
        assert!(state.selected_item().is_none());
        assert!(state.error().is_some());
    }
}
