use yew::prelude::*;

use crate::about::About;
use crate::contact::ContactSection;
use crate::footer::Footer;
use crate::gallery::WorkSection;
use crate::hero::Hero;
use crate::navigation::{scroll_to_section, use_navigation, NavigationAction, Navbar};
use crate::reveal::use_reveal_on_scroll;
use crate::services::Services;
use crate::toast::{use_toast, Notice, Toast, ToastAction};
use crate::types::Section;

#[function_component(App)]
pub fn app() -> Html {
    let navigation = use_navigation();
    let toast = use_toast();
    use_reveal_on_scroll();

    let on_navigate = {
        let navigation = navigation.clone();
        Callback::from(move |section: Section| {
            if scroll_to_section(section) {
                navigation.dispatch(NavigationAction::CloseMenu);
            }
        })
    };

    let on_toggle_menu = {
        let navigation = navigation.clone();
        Callback::from(move |_: ()| navigation.dispatch(NavigationAction::ToggleMenu))
    };

    let on_notify = {
        let toast = toast.clone();
        Callback::from(move |notice: Notice| toast.dispatch(ToastAction::Show(notice)))
    };

    let on_dismiss = {
        let toast = toast.clone();
        Callback::from(move |_: ()| toast.dispatch(ToastAction::Dismiss))
    };

    html! {
        <div class="portfolio">
            <Navbar
                state={(*navigation).clone()}
                on_navigate={on_navigate.clone()}
                on_toggle_menu={on_toggle_menu}
            />
            <Hero on_navigate={on_navigate.clone()} />
            <About />
            <WorkSection />
            <Services />
            <ContactSection on_notify={on_notify} on_navigate={on_navigate} />
            <Footer />
            <Toast notice={toast.current().cloned()} on_dismiss={on_dismiss} />
        </div>
    }
}
