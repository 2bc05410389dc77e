use std::rc::Rc;

use george_portfolio::content::find_category;
use george_portfolio::gallery::{GalleryAction, GalleryPhase, GalleryState};
use yew::prelude::Reducible;

fn dispatch(state: Rc<GalleryState>, action: GalleryAction) -> Rc<GalleryState> {
    state.reduce(action)
}

#[test]
fn test_open_category_selects_and_opens() {
    let mut gallery = GalleryState::default();
    assert!(gallery.open_category("branding"));
    assert!(gallery.is_open());
    assert_eq!(gallery.selected_category().map(|c| c.id), Some("branding"));
}

#[test]
fn test_unknown_category_is_ignored() {
    let mut gallery = GalleryState::default();
    assert!(!gallery.open_category("sculpture"));
    assert_eq!(*gallery.phase(), GalleryPhase::Closed);
}

#[test]
fn test_close_keeps_category_until_clear() {
    let mut gallery = GalleryState::default();
    gallery.open_category("estate");
    assert!(gallery.close());

    assert!(!gallery.is_open());
    assert_eq!(gallery.selected_category().map(|c| c.id), Some("estate"));

    let generation = gallery.pending_clear().unwrap();
    assert!(gallery.clear_selection(generation));
    assert_eq!(gallery.selected_category(), None);
    assert_eq!(gallery.pending_clear(), None);
}

#[test]
fn test_reopen_before_clear_keeps_new_selection() {
    let mut gallery = GalleryState::default();
    gallery.open_category("estate");
    gallery.close();
    let stale = gallery.pending_clear().unwrap();

    gallery.open_category("travels");
    assert!(!gallery.clear_selection(stale));

    assert!(gallery.is_open());
    assert_eq!(gallery.selected_category().map(|c| c.id), Some("travels"));
}

#[test]
fn test_switching_categories_directly_settles_on_last() {
    let state = Rc::new(GalleryState::default());
    let state = dispatch(state, GalleryAction::OpenCategory("estate".into()));
    let state = dispatch(state, GalleryAction::OpenCategory("logistics".into()));

    assert_eq!(state.pending_clear(), None);
    assert_eq!(state.selected_category().map(|c| c.id), Some("logistics"));
}

#[test]
fn test_stale_clear_from_earlier_close_is_ignored() {
    let mut gallery = GalleryState::default();
    gallery.open_category("estate");
    gallery.close();
    let first = gallery.pending_clear().unwrap();

    gallery.open_category("restaurant");
    gallery.close();
    let second = gallery.pending_clear().unwrap();
    assert_ne!(first, second);

    assert!(!gallery.clear_selection(first));
    assert_eq!(gallery.selected_category().map(|c| c.id), Some("restaurant"));
    assert!(gallery.clear_selection(second));
}

#[test]
fn test_close_twice_is_noop() {
    let mut gallery = GalleryState::default();
    gallery.open_category("estate");
    assert!(gallery.close());
    let generation = gallery.pending_clear();
    assert!(!gallery.close());
    assert_eq!(gallery.pending_clear(), generation);
}

#[test]
fn test_fullscreen_requires_open_category() {
    let mut gallery = GalleryState::default();
    assert!(!gallery.open_fullscreen("/george_portfolio/images/Estate_1.jpg"));
    assert_eq!(gallery.fullscreen_image(), None);
}

#[test]
fn test_fullscreen_rejects_image_from_other_category() {
    let mut gallery = GalleryState::default();
    gallery.open_category("estate");
    assert!(!gallery.open_fullscreen("/george_portfolio/images/Travels_1.jpg"));
    assert_eq!(gallery.fullscreen_image(), None);
}

#[test]
fn test_close_fullscreen_returns_to_gallery() {
    let mut gallery = GalleryState::default();
    gallery.open_category("travels");
    assert!(gallery.open_fullscreen("/george_portfolio/images/Travels_2.jpg"));
    assert_eq!(gallery.fullscreen_image(), Some("/george_portfolio/images/Travels_2.jpg"));

    assert!(gallery.close_fullscreen());
    assert!(gallery.is_open());
    assert_eq!(gallery.fullscreen_image(), None);
}

#[test]
fn test_escape_closes_modal_and_fullscreen() {
    let state = Rc::new(GalleryState::default());
    let state = dispatch(state, GalleryAction::OpenCategory("branding".into()));
    let state = dispatch(
        state,
        GalleryAction::OpenFullscreen("/george_portfolio/images/Branding_3.png".into()),
    );
    let state = dispatch(state, GalleryAction::Escape);

    assert!(!state.is_open());
    assert_eq!(state.fullscreen_image(), None);
    assert!(state.pending_clear().is_some());
}

#[test]
fn test_noop_action_keeps_same_state() {
    let state = Rc::new(GalleryState::default());
    let next = dispatch(state.clone(), GalleryAction::CloseFullscreen);
    assert!(Rc::ptr_eq(&state, &next));
}

#[test]
fn test_viewing_does_not_alter_image_sequence() {
    let expected: Vec<&str> = find_category("restaurant").unwrap().images.to_vec();

    let mut gallery = GalleryState::default();
    gallery.open_category("restaurant");
    gallery.open_fullscreen(expected[3]);
    gallery.apply(GalleryAction::Escape);
    let generation = gallery.pending_clear().unwrap();
    gallery.clear_selection(generation);
    gallery.open_category("restaurant");

    let images: Vec<&str> = gallery.selected_category().unwrap().images.to_vec();
    assert_eq!(images, expected);
}
