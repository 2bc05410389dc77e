//! Static page content. Loaded once, never mutated.

use crate::types::{ProjectCategory, Service, Testimonial, Tool};

pub const BRAND: &str = "georgedesignedit";
pub const CONTACT_EMAIL: &str = "linuson.g.linuson@gmail.com";
pub const WHATSAPP_URL: &str = "https://wa.me/2349054363890";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/yourprofile";
pub const GITHUB_URL: &str = "https://github.com/yourusername";
pub const RESUME_PATH: &str = "/george_portfolio/resume.pdf";
pub const RESUME_DOWNLOAD_NAME: &str = "Linuson_Resume.pdf";

pub static PROJECT_CATEGORIES: &[ProjectCategory] = &[
    ProjectCategory {
        id: "estate",
        name: "Real Estate",
        description: "Property branding and marketing materials",
        cover_image: "/george_portfolio/images/Estate_1.jpg",
        images: &[
            "/george_portfolio/images/Estate_1.jpg",
            "/george_portfolio/images/Estate_2.jpg",
            "/george_portfolio/images/Estate_2B.jpg",
            "/george_portfolio/images/Estate_3.jpg",
            "/george_portfolio/images/Estate_4.jpg",
            "/george_portfolio/images/Estate_5.jpg",
            "/george_portfolio/images/Estate_6.jpg",
        ],
        accent: "blue-cyan",
    },
    ProjectCategory {
        id: "logistics",
        name: "Logistics",
        description: "Transportation and supply chain branding",
        cover_image: "/george_portfolio/images/Logistics_1.jpg",
        images: &[
            "/george_portfolio/images/Logistics_1.jpg",
            "/george_portfolio/images/Logistics_2.jpg",
            "/george_portfolio/images/Logistics_3.jpg",
            "/george_portfolio/images/logistics-3-june3 (1).jpg",
            "/george_portfolio/images/Logistics_4.jpg",
            "/george_portfolio/images/Logistics_5.jpg",
        ],
        accent: "orange-red",
    },
    ProjectCategory {
        id: "branding",
        name: "Branding",
        description: "Visual identity and brand systems",
        cover_image: "/george_portfolio/images/Branding_1.jpg",
        images: &[
            "/george_portfolio/images/Branding_1.jpg",
            "/george_portfolio/images/Branding_2.jpg",
            "/george_portfolio/images/Branding_3.png",
            "/george_portfolio/images/Branding_4.jpg",
            "/george_portfolio/images/Branding_5.png",
        ],
        accent: "purple-pink",
    },
    ProjectCategory {
        id: "greeting",
        name: "Greeting & Events",
        description: "Event graphics and greeting designs",
        cover_image: "/george_portfolio/images/Event_1.jpg",
        images: &[
            "/george_portfolio/images/Event_1.jpg",
            "/george_portfolio/images/Event_2.jpg",
            "/george_portfolio/images/Event_3.jpg",
            "/george_portfolio/images/Event_4.jpg",
            "/george_portfolio/images/Event_5.jpg",
            "/george_portfolio/images/Event_6.jpg",
        ],
        accent: "emerald-teal",
    },
    ProjectCategory {
        id: "restaurant",
        name: "Restaurant",
        description: "Food and hospitality branding",
        cover_image: "/george_portfolio/images/Restaurant_1.jpg",
        images: &[
            "/george_portfolio/images/Restaurant_1.jpg",
            "/george_portfolio/images/Restaurant_2.jpg",
            "/george_portfolio/images/Restaurant_3.jpg",
            "/george_portfolio/images/Restaurant_4.jpg",
            "/george_portfolio/images/Restaurant_5.jpg",
            "/george_portfolio/images/Restaurant_6.jpg",
            "/george_portfolio/images/Restaurant_8.jpg",
            "/george_portfolio/images/Restaurant_9.jpg",
            "/george_portfolio/images/Restaurant_10.jpg",
            "/george_portfolio/images/Restaurant_11.jpg",
            "/george_portfolio/images/Restaurant_12.jpg",
        ],
        accent: "amber-orange",
    },
    ProjectCategory {
        id: "travels",
        name: "Travels",
        description: "Travel photography and travel-related branding",
        cover_image: "/george_portfolio/images/Travels_1.jpg",
        images: &[
            "/george_portfolio/images/Travels_1.jpg",
            "/george_portfolio/images/Travels_2.jpg",
            "/george_portfolio/images/Travels_3.jpg",
        ],
        accent: "sky-cyan",
    },
];

pub static TOOLS: &[Tool] = &[
    Tool {
        name: "Canva",
        icon: "🎨",
    },
    Tool {
        name: "Adobe Illustrator",
        icon: "✨",
    },
    Tool {
        name: "Adobe InDesign",
        icon: "📐",
    },
    Tool {
        name: "After Effects",
        icon: "🎬",
    },
];

pub static SKILLS: &[&str] = &[
    "Visual Communication",
    "Branding & Identity Design",
    "UI/UX Design Basics",
    "Web Design",
    "Illustration & Typography",
    "React Native Development",
    "Design Consistency & Branding Systems",
];

pub static SERVICES: &[Service] = &[
    Service {
        title: "Brand Identity",
        icon: "🎨",
        description: "Complete brand identity systems including logo design, color palettes, typography, and comprehensive brand guidelines that establish a strong visual presence.",
        offerings: &[
            "Logo Design & Variations",
            "Brand Style Guides",
            "Visual Identity Systems",
            "Brand Collateral",
        ],
    },
    Service {
        title: "Digital Design",
        icon: "🗂",
        description: "Modern, user-focused digital experiences from websites to mobile apps. Creating interfaces that are both beautiful and intuitive to use.",
        offerings: &[
            "Front End Design (UI/UX)",
            "Mobile App Interfaces",
            "Social Media Graphics",
            "Digital Campaigns",
        ],
    },
    Service {
        title: "Social Media",
        icon: "🔗",
        description: "Creative and strategic social media designs that help brands connect, engage, and grow their audience across platforms.",
        offerings: &[
            "Social Media Post Design",
            "Instagram & Facebook Graphics",
            "Campaign Visuals",
            "Content Branding",
        ],
    },
];

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        text: "An absolute pleasure to work with! The designs perfectly captured our brand essence.",
        author: "Engr. Quzeem Sarafdeen",
        role: "CEO, Quazard Global Limited",
    },
    Testimonial {
        text: "Incredible attention to detail and creative vision. Transformed our entire brand identity with great results.",
        author: "Mrs. Abimbola",
        role: "Director, TopBites Bakery and Foods",
    },
    Testimonial {
        text: "Professional, timely and talented. Every project deliverable was pixel-perfect and beyond what we imagined.",
        author: "Barr. Esther Linuson",
        role: "Founder, Linuson & Gold Attorneys",
    },
];

pub fn find_category(id: &str) -> Option<&'static ProjectCategory> {
    PROJECT_CATEGORIES.iter().find(|category| category.id == id)
}
