use yew::prelude::*;

use crate::content::{SERVICES, TESTIMONIALS};

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="section services-section">
            <div class="container">
                <div class="section-header">
                    <div class="section-tag">{"Services"}</div>
                    <h2 class="section-title">{"What I "}<span>{"Offer"}</span></h2>
                </div>

                <div class="services-grid">
                    {
                        SERVICES.iter().map(|service| html! {
                            <div key={service.title} class="service-card">
                                <div class="service-icon">{service.icon}</div>
                                <h3 class="service-title">{service.title}</h3>
                                <p class="service-description">{service.description}</p>
                                <ul class="service-list">
                                    { for service.offerings.iter().map(|offering| html! { <li>{*offering}</li> }) }
                                </ul>
                            </div>
                        }).collect::<Html>()
                    }
                </div>

                <div class="testimonials-section">
                    <h3 class="testimonials-title">{"What Clients Say"}</h3>
                    <div class="testimonials-grid">
                        {
                            TESTIMONIALS.iter().map(|testimonial| html! {
                                <div key={testimonial.author} class="testimonial-card">
                                    <p class="testimonial-text">{format!("\"{}\"", testimonial.text)}</p>
                                    <div class="testimonial-author">
                                        <div class="testimonial-info">
                                            <div class="testimonial-name">{testimonial.author}</div>
                                            <div class="testimonial-role">{testimonial.role}</div>
                                        </div>
                                    </div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>
        </section>
    }
}
