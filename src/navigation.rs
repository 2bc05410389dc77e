use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::config::{ACTIVE_SECTION_LINE_PX, SCROLLED_THRESHOLD_PX};
use crate::content::BRAND;
use crate::types::Section;

/// Vertical extent of a section relative to the viewport top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn spans(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD_PX
}

/// First section, in priority order, straddling the reference line.
/// Sections whose bounds are unknown never match.
pub fn resolve_active_section<F>(mut bounds_of: F) -> Option<Section>
where
    F: FnMut(Section) -> Option<SectionBounds>,
{
    Section::ALL.into_iter().find(|section| {
        bounds_of(*section).is_some_and(|bounds| bounds.spans(ACTIVE_SECTION_LINE_PX))
    })
}

/// One measurement taken on mount or on a scroll event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    pub scroll_y: f64,
    pub active: Option<Section>,
}

#[derive(Clone, PartialEq, Debug)]
pub struct NavigationState {
    pub active: Section,
    pub scrolled: bool,
    pub menu_open: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active: Section::Home,
            scrolled: false,
            menu_open: false,
        }
    }
}

pub enum NavigationAction {
    Track(ScrollSample),
    ToggleMenu,
    CloseMenu,
}

impl NavigationState {
    /// Applies a scroll sample. Without a matching section the previous one stays active.
    pub fn track(&mut self, sample: ScrollSample) {
        self.scrolled = is_scrolled(sample.scroll_y);
        if let Some(active) = sample.active {
            self.active = active;
        }
    }
}

impl Reducible for NavigationState {
    type Action = NavigationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NavigationAction::Track(sample) => next.track(sample),
            NavigationAction::ToggleMenu => next.menu_open = !next.menu_open,
            NavigationAction::CloseMenu => next.menu_open = false,
        }
        if next == *self {
            self
        } else {
            next.into()
        }
    }
}

fn section_bounds(document: &Document, section: Section) -> Option<SectionBounds> {
    let rect = document
        .get_element_by_id(section.id())?
        .get_bounding_client_rect();
    Some(SectionBounds {
        top: rect.top(),
        bottom: rect.bottom(),
    })
}

fn sample_scroll() -> Option<ScrollSample> {
    let window = web_sys::window()?;
    let document = window.document()?;
    Some(ScrollSample {
        scroll_y: window.scroll_y().unwrap_or_default(),
        active: resolve_active_section(|section| section_bounds(&document, section)),
    })
}

/// Smooth-scrolls to `section`. Returns false when its element is not in the document.
pub fn scroll_to_section(section: Section) -> bool {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(section.id()))
    else {
        gloo::console::log!(format!("No element for section '{}'", section.id()));
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Tracks the scroll position for the lifetime of the calling component.
#[hook]
pub fn use_navigation() -> UseReducerHandle<NavigationState> {
    let state = use_reducer(NavigationState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            let track = move || {
                if let Some(sample) = sample_scroll() {
                    dispatcher.dispatch(NavigationAction::Track(sample));
                }
            };
            track();

            let listener = web_sys::window()
                .map(|window| EventListener::new(&window, "scroll", move |_| track()));

            move || drop(listener)
        });
    }

    state
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub state: NavigationState,
    pub on_navigate: Callback<Section>,
    pub on_toggle_menu: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let on_toggle = props.on_toggle_menu.reform(|_: MouseEvent| ());

    let nav_link = |section: Section, class: &'static str| {
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_navigate.emit(section));
        let active = class == "nav-link" && props.state.active == section;
        html! {
            <button {onclick} class={classes!(class, active.then_some("nav-link-active"))}>
                {section.label()}
            </button>
        }
    };

    html! {
        <nav class={classes!("nav", props.state.scrolled.then_some("nav-scrolled"))}>
            <div class="nav-container">
                <a href="#home" class="logo">
                    <span class="logo-icon">{"🎨"}</span>
                    <span>{BRAND}</span>
                </a>

                <div class="nav-menu">
                    { for Section::ALL.into_iter().map(|section| nav_link(section, "nav-link")) }
                </div>

                <button class="mobile-menu-toggle" onclick={on_toggle} aria-label="Toggle menu">
                    if props.state.menu_open {
                        {"✕"}
                    } else {
                        {"☰"}
                    }
                </button>
            </div>

            if props.state.menu_open {
                <div class="mobile-menu">
                    { for Section::ALL.into_iter().map(|section| nav_link(section, "mobile-menu-link")) }
                </div>
            }
        </nav>
    }
}
