use yew::prelude::*;

use crate::content::BRAND;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="container">
                <div class="footer-content">
                    <div class="footer-brand">
                        <span class="footer-icon">{"🎨"}</span>
                        <span>{BRAND}</span>
                    </div>
                    <p class="footer-text">{"© 2026 George. Crafted with passion & precision."}</p>
                </div>
            </div>
        </footer>
    }
}
