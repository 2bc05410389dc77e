use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::config::MODAL_EXIT_MS;
use crate::content::{find_category, PROJECT_CATEGORIES};
use crate::scroll_lock::lock_body;
use crate::types::ProjectCategory;

/// Where the gallery overlay is in its lifecycle.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum GalleryPhase {
    #[default]
    Closed,
    Open {
        category: &'static ProjectCategory,
    },
    Fullscreen {
        category: &'static ProjectCategory,
        image: &'static str,
    },
    /// Overlay dismissed; the category is kept until the exit animation ends.
    Closing {
        category: &'static ProjectCategory,
        generation: u32,
    },
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct GalleryState {
    phase: GalleryPhase,
    closes: u32,
}

pub enum GalleryAction {
    OpenCategory(String),
    Close,
    /// Escape key: closes the overlay together with any fullscreen view.
    Escape,
    ClearSelection(u32),
    OpenFullscreen(String),
    CloseFullscreen,
}

impl GalleryState {
    pub fn phase(&self) -> &GalleryPhase {
        &self.phase
    }

    pub fn is_open(&self) -> bool {
        matches!(
            self.phase,
            GalleryPhase::Open { .. } | GalleryPhase::Fullscreen { .. }
        )
    }

    pub fn selected_category(&self) -> Option<&'static ProjectCategory> {
        match self.phase {
            GalleryPhase::Closed => None,
            GalleryPhase::Open { category }
            | GalleryPhase::Fullscreen { category, .. }
            | GalleryPhase::Closing { category, .. } => Some(category),
        }
    }

    pub fn fullscreen_image(&self) -> Option<&'static str> {
        match self.phase {
            GalleryPhase::Fullscreen { image, .. } => Some(image),
            _ => None,
        }
    }

    /// Generation of the deferred clear waiting to fire, if any.
    pub fn pending_clear(&self) -> Option<u32> {
        match self.phase {
            GalleryPhase::Closing { generation, .. } => Some(generation),
            _ => None,
        }
    }

    /// Selects and opens a category. Unknown ids are ignored.
    pub fn open_category(&mut self, id: &str) -> bool {
        let Some(category) = find_category(id) else {
            return false;
        };
        self.phase = GalleryPhase::Open { category };
        true
    }

    pub fn close(&mut self) -> bool {
        match self.phase {
            GalleryPhase::Open { category } | GalleryPhase::Fullscreen { category, .. } => {
                self.closes = self.closes.wrapping_add(1);
                self.phase = GalleryPhase::Closing {
                    category,
                    generation: self.closes,
                };
                true
            }
            GalleryPhase::Closed | GalleryPhase::Closing { .. } => false,
        }
    }

    /// Finishes a close. Ignored unless `generation` is still the one pending.
    pub fn clear_selection(&mut self, generation: u32) -> bool {
        if self.pending_clear() == Some(generation) {
            self.phase = GalleryPhase::Closed;
            true
        } else {
            false
        }
    }

    /// Only reachable from an open gallery, and only for one of its images.
    pub fn open_fullscreen(&mut self, image: &str) -> bool {
        let GalleryPhase::Open { category } = self.phase else {
            return false;
        };
        match category.find_image(image) {
            Some(image) => {
                self.phase = GalleryPhase::Fullscreen { category, image };
                true
            }
            None => false,
        }
    }

    pub fn close_fullscreen(&mut self) -> bool {
        match self.phase {
            GalleryPhase::Fullscreen { category, .. } => {
                self.phase = GalleryPhase::Open { category };
                true
            }
            _ => false,
        }
    }

    pub fn apply(&mut self, action: GalleryAction) -> bool {
        match action {
            GalleryAction::OpenCategory(id) => self.open_category(&id),
            GalleryAction::Close | GalleryAction::Escape => self.close(),
            GalleryAction::ClearSelection(generation) => self.clear_selection(generation),
            GalleryAction::OpenFullscreen(image) => self.open_fullscreen(&image),
            GalleryAction::CloseFullscreen => self.close_fullscreen(),
        }
    }
}

impl Reducible for GalleryState {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            next.into()
        } else {
            self
        }
    }
}

/// Owns the gallery state plus the scroll lock, Escape listener and deferred clear it implies.
#[hook]
pub fn use_gallery() -> UseReducerHandle<GalleryState> {
    let state = use_reducer(GalleryState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with(state.is_open(), move |open| {
            let guards = open.then(|| {
                let lock = lock_body();
                let listener = web_sys::window()
                    .and_then(|window| window.document())
                    .map(|document| {
                        EventListener::new(&document, "keydown", move |event| {
                            let is_escape = event
                                .dyn_ref::<KeyboardEvent>()
                                .is_some_and(|event| event.key() == "Escape");
                            if is_escape {
                                dispatcher.dispatch(GalleryAction::Escape);
                            }
                        })
                    });
                (lock, listener)
            });

            move || drop(guards)
        });
    }

    {
        let dispatcher = state.dispatcher();
        use_effect_with(state.pending_clear(), move |pending| {
            let timer = pending.map(|generation| {
                Timeout::new(MODAL_EXIT_MS, move || {
                    dispatcher.dispatch(GalleryAction::ClearSelection(generation));
                })
            });

            move || drop(timer)
        });
    }

    state
}

#[function_component(WorkSection)]
pub fn work_section() -> Html {
    let gallery = use_gallery();

    let on_close = {
        let gallery = gallery.clone();
        Callback::from(move |_: MouseEvent| gallery.dispatch(GalleryAction::Close))
    };
    let on_close_fullscreen = {
        let gallery = gallery.clone();
        Callback::from(move |_: MouseEvent| gallery.dispatch(GalleryAction::CloseFullscreen))
    };
    let stop_propagation = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <section id="work" class="section work-section">
            <div class="container-wide">
                <div class="section-header">
                    <div class="section-tag">{"Portfolio"}</div>
                    <h2 class="section-title">{"Featured "}<span>{"Projects"}</span></h2>
                    <p class="section-subtitle">
                        {"Explore my work across different design disciplines. Click on any category to view the full collection."}
                    </p>
                </div>

                <div class="categories-grid">
                    {
                        PROJECT_CATEGORIES.iter().map(|category| {
                            let onclick = {
                                let gallery = gallery.clone();
                                let id = category.id;
                                Callback::from(move |_: MouseEvent| {
                                    gallery.dispatch(GalleryAction::OpenCategory(id.to_string()));
                                })
                            };
                            html! {
                                <div key={category.id} class="category-card" {onclick}>
                                    <div class="category-image-wrapper">
                                        <img src={category.cover_image} alt={category.name} class="category-image" loading="lazy" />
                                        <div class={format!("category-overlay gradient-{}", category.accent)}>
                                            <div class="category-content">
                                                <h3 class="category-title">{category.name}</h3>
                                                <p class="category-description">{category.description}</p>
                                                <div class="category-count">{category.count_label()}</div>
                                            </div>
                                            <div class="category-view-btn">
                                                <span>{"View Gallery"}</span>
                                            </div>
                                        </div>
                                    </div>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>

            if let Some(category) = gallery.selected_category() {
                <div
                    class={classes!("modal-overlay", (!gallery.is_open()).then_some("modal-closing"))}
                    onclick={on_close.clone()}
                >
                    <div class="modal-content" onclick={stop_propagation.clone()}>
                        <button class="modal-close" onclick={on_close} aria-label="Close gallery">{"✕"}</button>

                        <div class="modal-header">
                            <h2 class="modal-title">{category.name}</h2>
                            <p class="modal-subtitle">{category.description}</p>
                        </div>

                        <div class="modal-gallery">
                            {
                                category.images.iter().enumerate().map(|(index, image)| {
                                    let onclick = {
                                        let gallery = gallery.clone();
                                        let image = *image;
                                        Callback::from(move |_: MouseEvent| {
                                            gallery.dispatch(GalleryAction::OpenFullscreen(image.to_string()));
                                        })
                                    };
                                    html! {
                                        <div key={index} class="gallery-item" {onclick}>
                                            <img
                                                src={*image}
                                                alt={format!("{} {}", category.name, index + 1)}
                                                class="gallery-image"
                                                loading="lazy"
                                            />
                                            <div class="gallery-item-overlay">
                                                <span>{"View Full Size"}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                </div>
            }

            if let Some(image) = gallery.fullscreen_image() {
                <div class="fullscreen-overlay" onclick={on_close_fullscreen.clone()}>
                    <button class="fullscreen-close" onclick={on_close_fullscreen} aria-label="Close image">{"✕"}</button>
                    <img src={image} alt="Fullscreen view" class="fullscreen-image" onclick={stop_propagation} />
                </div>
            }
        </section>
    }
}
