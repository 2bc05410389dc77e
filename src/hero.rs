use yew::prelude::*;

use crate::types::Section;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_navigate: Callback<Section>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let on_view_work = props.on_navigate.reform(|_: MouseEvent| Section::Work);
    let on_talk = props.on_navigate.reform(|_: MouseEvent| Section::Contact);

    let stats = [
        ("200+", "Projects Completed"),
        ("15+", "Happy Clients"),
        ("3+", "Years Experience"),
    ];

    html! {
        <section id="home" class="hero">
            <div class="hero-bg">
                <div class="hero-gradient hero-gradient-1"></div>
                <div class="hero-gradient hero-gradient-2"></div>
                <div class="hero-gradient hero-gradient-3"></div>
            </div>

            <div class="hero-content">
                <div class="hero-badge">
                    <span class="hero-badge-dot"></span>
                    {"Available for Freelance Projects"}
                </div>

                <h1 class="hero-title">
                    <span class="hero-title-line">{"Crafting Visual"}</span>
                    <span class="hero-title-line hero-title-accent">{"Experiences"}</span>
                </h1>

                <p class="hero-subtitle">{"Hello, I'm George. A graphic designer and junior developer."}</p>

                <div class="hero-cta">
                    <button onclick={on_view_work} class="btn btn-primary">
                        <span>{"View Portfolio"}</span>
                        <span>{"→"}</span>
                    </button>
                    <button onclick={on_talk} class="btn btn-secondary">{"Let's Talk"}</button>
                </div>

                <div class="hero-stats">
                    {
                        stats.iter().map(|(number, label)| html! {
                            <div class="hero-stat stat-card">
                                <div class="hero-stat-number">{*number}</div>
                                <div class="hero-stat-label">{*label}</div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <div class="scroll-indicator">
                <div class="scroll-indicator-line"></div>
            </div>
        </section>
    }
}
