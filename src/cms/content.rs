//! Typed per-locale content bundle edited from the dashboard.
//!
//! The wire format stays camelCase to match what the site renderer and any
//! previously persisted drafts expect. Every section derives serde
//! defaults so older drafts with missing fields still load.

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

pub(crate) fn default_logo_src() -> String {
    "/images/brand/novapay-logo.png".to_string()
}

/// Site-wide identity fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default = "default_logo_src")]
    pub logo_src: String,
}

/// One headline number in the hero section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: String,
}

/// Hero copy and call-to-action labels
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cta: String,
    #[serde(default)]
    pub secondary: String,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

/// One sellable service card
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub icon_image: Option<String>,
    #[serde(default)]
    pub popular: bool,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub note: Option<String>,
}

/// One accepted payment method
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// One selling-point card
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub quote: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Closing call-to-action banner
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cta {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub primary_text: String,
    #[serde(default)]
    pub secondary_text: String,
}

/// Contact section copy plus the WhatsApp number the site links to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub whatsapp: String,
    #[serde(default)]
    pub features: Vec<String>,
}

/// The full per-locale bundle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    #[serde(default)]
    pub site: SiteInfo,
    #[serde(default)]
    pub hero: Hero,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub payments: Vec<PaymentMethod>,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub faq: Vec<FaqItem>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub logos: Vec<String>,
    #[serde(default)]
    pub cta: Cta,
    #[serde(default)]
    pub contact: ContactInfo,
}

/// Partial per-locale update; present sections replace, absent ones stay
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentPatch {
    pub site: Option<SiteInfo>,
    pub hero: Option<Hero>,
    pub services: Option<Vec<Service>>,
    pub payments: Option<Vec<PaymentMethod>>,
    pub features: Option<Vec<Feature>>,
    pub faq: Option<Vec<FaqItem>>,
    pub testimonials: Option<Vec<Testimonial>>,
    pub logos: Option<Vec<String>>,
    pub cta: Option<Cta>,
    pub contact: Option<ContactInfo>,
}

impl Bundle {
    /// Merge a partial update into this bundle, section by section
    pub fn apply(&mut self, patch: ContentPatch) {
        if let Some(site) = patch.site {
            self.site = site;
        }
        if let Some(hero) = patch.hero {
            self.hero = hero;
        }
        if let Some(services) = patch.services {
            self.services = services;
        }
        if let Some(payments) = patch.payments {
            self.payments = payments;
        }
        if let Some(features) = patch.features {
            self.features = features;
        }
        if let Some(faq) = patch.faq {
            self.faq = faq;
        }
        if let Some(testimonials) = patch.testimonials {
            self.testimonials = testimonials;
        }
        if let Some(logos) = patch.logos {
            self.logos = logos;
        }
        if let Some(cta) = patch.cta {
            self.cta = cta;
        }
        if let Some(contact) = patch.contact {
            self.contact = contact;
        }
    }
}

/// Partial update for one service entry
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub category: Option<String>,
    pub icon_image: Option<String>,
    pub popular: Option<bool>,
    pub active: Option<bool>,
    pub note: Option<String>,
}

impl Service {
    /// Merge a partial update into this service
    pub fn apply(&mut self, patch: ServicePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(icon_image) = patch.icon_image {
            self.icon_image = Some(icon_image);
        }
        if let Some(popular) = patch.popular {
            self.popular = popular;
        }
        if let Some(active) = patch.active {
            self.active = active;
        }
        if let Some(note) = patch.note {
            self.note = Some(note);
        }
    }
}
