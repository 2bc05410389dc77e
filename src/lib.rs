pub mod about;
pub mod app;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod mailer;
pub mod navigation;
pub mod reveal;
pub mod scroll_lock;
pub mod services;
pub mod toast;
pub mod types;
