use serde::Deserialize;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct SiteContent {
    pub company: String,
    pub hero: Hero,
    pub nav: Vec<Link>,
    pub services: Vec<Service>,
    pub stats: Vec<Stat>,
    pub testimonials: Vec<Testimonial>,
    pub contact: Vec<ContactItem>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub primary_cta: Link,
    pub secondary_cta: Link,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Service {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// A headline number. `value` is what the page shows once counting ends.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ContactItem {
    pub icon: String,
    pub title: String,
    pub detail: String,
}

impl SiteContent {
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The content compiled into the binary. Falls back to an empty page
    /// rather than failing to render.
    pub fn bundled() -> Self {
        match Self::parse(SITE_JSON) {
            Ok(content) => content,
            Err(e) => {
                gloo_console::error!("Failed to parse site content:", e.to_string());
                Self::default()
            }
        }
    }
}
