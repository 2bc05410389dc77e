/// Page sections, in the priority order used to pick the active one.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Section {
    Home,
    About,
    Work,
    Services,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Work,
        Section::Services,
        Section::Contact,
    ];

    /// DOM id of the `<section>` element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Work => "work",
            Section::Services => "services",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Work => "Work",
            Section::Services => "Services",
            Section::Contact => "Contact",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct ProjectCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub cover_image: &'static str,
    pub images: &'static [&'static str],
    /// Gradient token, rendered as `gradient-{accent}`.
    pub accent: &'static str,
}

impl ProjectCategory {
    /// Returns the static reference for `image` if it belongs to this category.
    pub fn find_image(&self, image: &str) -> Option<&'static str> {
        self.images.iter().copied().find(|candidate| *candidate == image)
    }

    pub fn count_label(&self) -> String {
        let count = self.images.len();
        if count == 1 {
            format!("{} Project", count)
        } else {
            format!("{} Projects", count)
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Tool {
    pub name: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Testimonial {
    pub text: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Service {
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub offerings: &'static [&'static str],
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }
}
