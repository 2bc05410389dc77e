use yew::prelude::*;

use crate::content::{SKILLS, TOOLS};

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "🏆",
        "Professionalism",
        "I approach each brief with a strong understanding of the client's goals, translating ideas into visually compelling and functional designs. From concept to final delivery, I maintain consistency, accuracy, and a high standard of quality.",
    ),
    (
        "👥",
        "Client-Focused",
        "Every project I take on is driven by a deep understanding of the client's goals, audience, and vision. I believe great design starts with listening, ensuring that every creative decision aligns with the client's needs and objectives.",
    ),
    (
        "⚡",
        "Fast Turnaround",
        "I understand the importance of time in today's fast-moving digital world. That's why I prioritize efficiency without compromising quality, working with focus and precision to ensure projects are completed promptly and to a high standard.",
    ),
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="section about-section">
            <div class="container">
                <div class="section-header">
                    <div class="section-tag">{"About Me"}</div>
                    <h2 class="section-title">{"Creating Visuals That Tell "}<span>{"Your Story"}</span></h2>
                </div>

                <div class="about-grid">
                    <div class="about-content">
                        <p class="about-text">
                            {"I'm a passionate graphic designer with over 3 years of experience; transforming brands through thoughtful, strategic design. My work spans branding, editorial design, digital experiences, and everything in between."}
                        </p>
                        <p class="about-text">
                            {"I believe great design is more than just aesthetics. It's about solving problems, telling stories, and creating meaningful connections between brands and their audiences."}
                        </p>

                        <div class="about-features">
                            {
                                FEATURES.iter().map(|(icon, title, text)| html! {
                                    <div class="feature-card">
                                        <div class="feature-icon">{*icon}</div>
                                        <h3 class="feature-title">{*title}</h3>
                                        <p class="feature-text">{*text}</p>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>

                    <div class="about-skills">
                        <div class="tools-grid">
                            {
                                TOOLS.iter().map(|tool| html! {
                                    <div key={tool.name} class="tool-card">
                                        <span class="tool-icon">{tool.icon}</span>
                                        <span class="tool-name">{tool.name}</span>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>

                        <div class="skills-list">
                            <h3 class="skills-title">{"Skills"}</h3>
                            {
                                SKILLS.iter().map(|skill| html! {
                                    <div key={*skill} class="skill-item">
                                        <div class="skill-marker"></div>
                                        <span class="skill-text">{*skill}</span>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
