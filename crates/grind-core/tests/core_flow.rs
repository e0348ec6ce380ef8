use std::collections::{BTreeMap, BTreeSet};

use grind_core::store::COMPLETED_STORAGE_KEY;
use grind_core::view::{filtered_links, grouped_by_category, progress, visible_categories};
use grind_core::{
    Catalog, Category, DashboardState, KeyValueStore, LinkItem, MemoryStore, Persistence,
};
use tracing_subscriber::EnvFilter;

fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

fn link(id: &str, category: Category, tags: &[&str]) -> LinkItem {
    LinkItem {
        id: id.to_string(),
        title: id.to_uppercase(),
        url: format!("https://example.com/{id}"),
        category,
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        recommended: false,
    }
}

fn two_category_catalog() -> Catalog {
    Catalog::new(
        vec![
            link("a1", Category::Games, &["Game"]),
            link("a2", Category::Games, &["Game", "Rare"]),
            link("a3", Category::Games, &["Game"]),
            link("b1", Category::Social, &["Social"]),
            link("b2", Category::Social, &["Social"]),
        ],
        BTreeMap::new(),
    )
    .expect("catalog")
}

#[test]
fn progress_filter_and_grouping_scenario() {
    init_test_tracing();
    let catalog = two_category_catalog();
    let mut persistence = Persistence::new(MemoryStore::new());
    let mut state = DashboardState::load(&persistence);

    state.toggle_link_complete("a1", &mut persistence);
    state.toggle_link_complete("b1", &mut persistence);

    let p = progress(&state.completed, &catalog);
    assert_eq!(p.percent, 40);
    assert_eq!(p.level, 1);

    state.select_tag(Some("Rare"));
    let filtered = filtered_links(&catalog, state.selected_tag.as_deref());
    let ids: Vec<&str> = filtered.iter().map(|link| link.id.as_str()).collect();
    assert_eq!(ids, vec!["a2"]);

    let groups = grouped_by_category(&filtered);
    let games: Vec<&str> = groups[&Category::Games]
        .iter()
        .map(|link| link.id.as_str())
        .collect();
    assert_eq!(games, vec!["a2"]);
    assert!(groups.contains_key(&Category::Social));
    assert!(groups[&Category::Social].is_empty());

    assert_eq!(
        visible_categories(&groups, state.selected_tag.as_deref()),
        vec![Category::Games]
    );
}

#[test]
fn completed_links_survive_reload() {
    init_test_tracing();
    let mut store = MemoryStore::new();
    store
        .set(COMPLETED_STORAGE_KEY, r#"["a1"]"#)
        .expect("seed store");

    let persistence = Persistence::new(store);
    let state = DashboardState::load(&persistence);

    let expected: BTreeSet<String> = ["a1".to_string()].into_iter().collect();
    assert_eq!(state.completed, expected);
    assert_eq!(state.selected_tag, None);
}

#[test]
fn session_then_reload_then_reset() {
    init_test_tracing();
    let catalog = Catalog::builtin().expect("builtin catalog");
    let first = catalog.links()[0].id.clone();
    let second = catalog.links()[1].id.clone();

    let mut persistence = Persistence::new(MemoryStore::new());
    let mut state = DashboardState::load(&persistence);
    assert!(state.mark_visited(&first, &mut persistence));
    assert!(state.toggle_link_complete(&second, &mut persistence));
    state.toggle_theme(&mut persistence);

    let store = persistence.into_inner();
    let mut persistence = Persistence::new(store);
    let mut reloaded = DashboardState::load(&persistence);
    assert!(reloaded.is_dark());
    assert_eq!(reloaded.completed, state.completed);
    assert_eq!(progress(&reloaded.completed, &catalog).completed, 2);

    assert!(!reloaded.reset_progress(|| false, &mut persistence));
    assert_eq!(reloaded.completed.len(), 2);

    assert!(reloaded.reset_progress(|| true, &mut persistence));
    assert!(reloaded.completed.is_empty());
    assert!(persistence.store().get(COMPLETED_STORAGE_KEY).expect("read").is_none());
    assert_eq!(DashboardState::load(&persistence).completed.len(), 0);
}
