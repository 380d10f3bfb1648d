// SPDX-License-Identifier: MPL-2.0
use folio_fx::app::persisted_state::{FileStorage, MemoryStorage};
use folio_fx::app::{Content, Event, Message, Mount, Page};
use folio_fx::config::{self, Config};
use folio_fx::content::Fallback;
use folio_fx::geometry::Viewport;
use folio_fx::ui::carousel::{Carousel, Settings, Testimonial};
use folio_fx::ui::gallery::{Categorized, CategoryFilter, Gallery, Project};
use folio_fx::ui::quick_view::{QuickView, Status};
use folio_fx::ui::reveal::ObservationSupport;
use folio_fx::ui::state::CloseDelay;
use folio_fx::ui::theming::{Theme, ThemeEngine, Timing};
use proptest::prelude::*;
use std::time::{Duration, Instant};
use tempfile::tempdir;

const CATEGORIES: [&str; 4] = ["web", "uiux", "mobile", "multimedia"];

fn project(id: usize, category: &str) -> Project {
    Project {
        id: id.to_string(),
        category: Some(category.to_string()),
        ..Project::default()
    }
}

fn page_with_storage(storage: FileStorage, now: Instant) -> Page {
    Page::mount(
        Mount {
            config: Config::default(),
            storage: Box::new(storage),
            content: Content::default(),
            viewport: Viewport::new(1024.0, 768.0),
            observation: ObservationSupport::Available,
        },
        now,
    )
}

#[test]
fn theme_survives_a_remount_through_file_storage() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let base = Some(dir.path().to_path_buf());
    let t0 = Instant::now();

    let mut page = page_with_storage(FileStorage::open(base.clone()).expect("open store"), t0);
    assert_eq!(page.theme().theme(), Theme::Dark);
    let events = page.update(Message::ToggleTheme { origin: None }, t0);
    assert_eq!(events, vec![Event::ThemeChanged(Theme::Light)]);
    page.teardown();
    drop(page);

    let page = page_with_storage(FileStorage::open(base).expect("reopen store"), t0);
    assert_eq!(page.theme().theme(), Theme::Light);
    assert_eq!(page.theme().root_attribute(), Some("light"));
}

#[test]
fn settings_file_overrides_controller_timings() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "[quick_view]\nclose_delay_ms = 500\n\n[carousel]\nloop_enabled = false\n",
    )
    .expect("Failed to write settings");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(config.close_delay().value(), 500);
    assert!(!config.carousel_settings().loop_enabled);
}

#[test]
fn broken_settings_file_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[theme\nsettle_ms = ")
        .expect("Failed to write settings");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert!(warning.is_some());
}

#[test]
fn fallback_content_drives_a_full_page() {
    let t0 = Instant::now();
    let mut page = Page::mount(
        Mount {
            config: Config::default(),
            storage: Box::new(MemoryStorage::new()),
            content: Content {
                projects: Vec::new(),
                testimonials: Testimonial::fallback(),
            },
            viewport: Viewport::new(1024.0, 768.0),
            observation: ObservationSupport::Unavailable,
        },
        t0,
    );

    // Without visibility support everything shows up on the first tick.
    let events = page.update(Message::Tick, t0);
    assert!(events.iter().filter(|e| matches!(e, Event::Reveal(_))).count() >= 6);
    assert_eq!(page.gallery().items().len(), Project::fallback().len());
}

proptest! {
    #[test]
    fn settled_toggles_alternate_the_theme(toggles in 0usize..12) {
        let mut engine = ThemeEngine::new(Box::new(MemoryStorage::new()), Timing::default());
        engine.init();
        let viewport = Viewport::new(800.0, 600.0);
        let mut now = Instant::now();

        for _ in 0..toggles {
            prop_assert!(engine.toggle(None, viewport, now));
            now += Duration::from_secs(1);
        }

        let expected = if toggles % 2 == 0 { Theme::Dark } else { Theme::Light };
        prop_assert_eq!(engine.theme(), expected);
    }

    #[test]
    fn filtering_keeps_source_order(
        categories in prop::collection::vec(0usize..CATEGORIES.len(), 0..20),
        pick in 0usize..CATEGORIES.len(),
    ) {
        let items: Vec<Project> = categories
            .iter()
            .enumerate()
            .map(|(id, &c)| project(id, CATEGORIES[c]))
            .collect();
        let mut gallery = Gallery::new(items.clone());
        gallery.set_filter(CategoryFilter::from_id(CATEGORIES[pick]));

        let expected: Vec<String> = items
            .iter()
            .filter(|item| item.category() == CATEGORIES[pick])
            .map(|item| item.id().to_string())
            .collect();
        prop_assert_eq!(gallery.visible_ids(), expected.clone());
        prop_assert_eq!(gallery.is_empty_state(), expected.is_empty());

        gallery.set_filter(CategoryFilter::All);
        prop_assert_eq!(gallery.visible_ids().len(), items.len());
    }

    #[test]
    fn looping_carousel_wraps_modulo_length(len in 1usize..8, steps in 0usize..40) {
        let now = Instant::now();
        let mut carousel = Carousel::new(vec![(); len], Settings::default(), now);

        for _ in 0..steps {
            carousel.next(now);
        }
        prop_assert_eq!(carousel.current_index(), steps % len);

        for _ in 0..steps {
            carousel.prev(now);
        }
        prop_assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn closed_quick_view_clears_after_the_delay(delay in 50u64..2_000) {
        let t0 = Instant::now();
        let mut view = QuickView::new(CloseDelay::new(delay));
        view.open(project(1, "web"));
        view.close(t0);

        view.tick(t0 + Duration::from_millis(delay - 1));
        prop_assert_eq!(view.status(), Status::Closing);
        prop_assert!(view.selected().is_some());

        view.tick(t0 + Duration::from_millis(delay));
        prop_assert_eq!(view.status(), Status::Closed);
        prop_assert!(view.selected().is_none());
    }
}
