//! Operator draft store.
//!
//! An explicit, versioned, serializable snapshot of everything the
//! dashboard edits: both locale bundles, the design/animation config and
//! the ordered section list. The draft is independent of the published
//! copy until an explicit publish; persistence is plain JSON with a
//! migration step that repairs older shapes on load.

pub mod blocks;
pub mod content;
pub mod defaults;
pub mod migrate;

pub use blocks::{BlockConfig, BlockKind};
pub use content::{Bundle, ContentPatch, Service, ServicePatch};
pub use migrate::migrate_state;

use serde::{Deserialize, Serialize};

use crate::models::Locale;

/// Persisted draft shape version; older drafts are migrated on load
pub const CMS_STATE_VERSION: u32 = 4;

fn default_true() -> bool {
    true
}

fn default_intensity() -> f64 {
    1.0
}

fn default_parallax() -> f64 {
    14.0
}

/// Animation tuning for the public site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimConfig {
    #[serde(default = "default_true")]
    pub enable_reveal: bool,
    #[serde(default = "default_intensity")]
    pub intensity: f64,
    #[serde(default = "default_parallax")]
    pub parallax: f64,
}

impl Default for AnimConfig {
    fn default() -> Self {
        AnimConfig {
            enable_reveal: true,
            intensity: 1.0,
            parallax: 14.0,
        }
    }
}

/// Design configuration published alongside the content bundles
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Design {
    #[serde(default)]
    pub palette: Option<String>,
    #[serde(default)]
    pub anim: AnimConfig,
}

/// Partial design update; the anim sub-object merges field by field
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DesignPatch {
    pub palette: Option<String>,
    pub anim: Option<AnimPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimPatch {
    pub enable_reveal: Option<bool>,
    pub intensity: Option<f64>,
    pub parallax: Option<f64>,
}

/// Both locale bundles of the draft
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocaleContent {
    pub ar: Bundle,
    pub en: Bundle,
}

impl LocaleContent {
    pub fn get(&self, locale: Locale) -> &Bundle {
        match locale {
            Locale::Ar => &self.ar,
            Locale::En => &self.en,
        }
    }

    pub fn get_mut(&mut self, locale: Locale) -> &mut Bundle {
        match locale {
            Locale::Ar => &mut self.ar,
            Locale::En => &mut self.en,
        }
    }
}

/// The whole draft owned by a dashboard session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CmsState {
    pub version: u32,
    #[serde(default)]
    pub locale: Locale,
    pub design: Design,
    pub blocks: Vec<BlockConfig>,
    pub content: LocaleContent,
}

impl Default for CmsState {
    fn default() -> Self {
        defaults::default_state()
    }
}

impl CmsState {
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Merge a partial design update, anim fields individually
    pub fn set_design(&mut self, patch: DesignPatch) {
        if let Some(palette) = patch.palette {
            self.design.palette = Some(palette);
        }
        if let Some(anim) = patch.anim {
            if let Some(enable_reveal) = anim.enable_reveal {
                self.design.anim.enable_reveal = enable_reveal;
            }
            if let Some(intensity) = anim.intensity {
                self.design.anim.intensity = intensity;
            }
            if let Some(parallax) = anim.parallax {
                self.design.anim.parallax = parallax;
            }
        }
    }

    /// Reorder sections to the given id sequence; ids that do not match an
    /// existing block are dropped
    pub fn reorder_blocks(&mut self, ids: &[String]) {
        let mut remaining: Vec<Option<BlockConfig>> =
            self.blocks.drain(..).map(Some).collect();

        let mut next = Vec::with_capacity(remaining.len());
        for id in ids {
            let pos = remaining
                .iter()
                .position(|slot| slot.as_ref().is_some_and(|b| &b.id == id));
            if let Some(pos) = pos {
                if let Some(block) = remaining[pos].take() {
                    next.push(block);
                }
            }
        }

        self.blocks = next;
    }

    /// Enable or disable one section without changing the order
    pub fn toggle_block(&mut self, id: &str, enabled: bool) {
        for block in &mut self.blocks {
            if block.id == id {
                block.enabled = enabled;
            }
        }
    }

    /// Merge a partial content update into one locale bundle
    pub fn set_content(&mut self, locale: Locale, patch: ContentPatch) {
        self.content.get_mut(locale).apply(patch);
    }

    pub fn add_service(&mut self, locale: Locale, service: Service) {
        self.content.get_mut(locale).services.push(service);
    }

    /// Merge a partial update into the service at `index`; returns false
    /// when the index is out of bounds
    pub fn update_service(&mut self, locale: Locale, index: usize, patch: ServicePatch) -> bool {
        match self.content.get_mut(locale).services.get_mut(index) {
            Some(service) => {
                service.apply(patch);
                true
            }
            None => false,
        }
    }

    pub fn remove_service(&mut self, locale: Locale, index: usize) -> Option<Service> {
        let services = &mut self.content.get_mut(locale).services;
        if index < services.len() {
            Some(services.remove(index))
        } else {
            None
        }
    }

    /// Rearrange services so position i holds the service previously at
    /// `order[i]`; out-of-range indices are dropped
    pub fn reorder_services(&mut self, locale: Locale, order: &[usize]) {
        let services = &mut self.content.get_mut(locale).services;
        let mut old: Vec<Option<Service>> = services.drain(..).map(Some).collect();

        let mut next = Vec::with_capacity(old.len());
        for &i in order {
            if let Some(slot) = old.get_mut(i) {
                if let Some(service) = slot.take() {
                    next.push(service);
                }
            }
        }

        *services = next;
    }

    /// Serialize the whole draft for export or persistence
    pub fn export_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("draft state serializes")
    }

    /// Load a draft from persisted JSON, migrating older shapes
    pub fn import_json(raw: &str) -> CmsState {
        match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(value) => migrate_state(value),
            Err(_) => CmsState::default(),
        }
    }

    /// Discard all edits
    pub fn reset(&mut self) {
        *self = CmsState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_has_every_block_once() {
        let state = CmsState::default();
        assert_eq!(state.version, CMS_STATE_VERSION);
        assert_eq!(state.blocks.len(), BlockKind::ALL.len());
        for kind in BlockKind::ALL {
            assert_eq!(
                state.blocks.iter().filter(|b| b.kind == kind).count(),
                1,
                "block {:?} missing or duplicated",
                kind
            );
        }
    }

    #[test]
    fn test_set_design_merges_anim_fields() {
        let mut state = CmsState::default();
        state.set_design(DesignPatch {
            anim: Some(AnimPatch {
                parallax: Some(20.0),
                ..Default::default()
            }),
            ..Default::default()
        });

        assert_eq!(state.design.anim.parallax, 20.0);
        // untouched fields keep their defaults
        assert!(state.design.anim.enable_reveal);
        assert_eq!(state.design.anim.intensity, 1.0);
    }

    #[test]
    fn test_reorder_blocks_drops_unknown_ids() {
        let mut state = CmsState::default();
        state.reorder_blocks(&[
            "faq".to_string(),
            "hero".to_string(),
            "bogus".to_string(),
        ]);

        let ids: Vec<&str> = state.blocks.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["faq", "hero"]);
    }

    #[test]
    fn test_toggle_block() {
        let mut state = CmsState::default();
        state.toggle_block("testimonials", false);
        let block = state
            .blocks
            .iter()
            .find(|b| b.id == "testimonials")
            .unwrap();
        assert!(!block.enabled);
    }

    #[test]
    fn test_set_content_touches_one_locale_only() {
        let mut state = CmsState::default();
        let en_title = state.content.en.hero.title.clone();

        state.set_content(
            Locale::Ar,
            ContentPatch {
                hero: Some(content::Hero {
                    title: "عنوان جديد".to_string(),
                    ..Default::default()
                }),
                ..Default::default()
            },
        );

        assert_eq!(state.content.ar.hero.title, "عنوان جديد");
        assert_eq!(state.content.en.hero.title, en_title);
    }

    #[test]
    fn test_service_add_update_remove() {
        let mut state = CmsState::default();
        let before = state.content.en.services.len();

        state.add_service(
            Locale::En,
            Service {
                name: "Skrill".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(state.content.en.services.len(), before + 1);

        assert!(state.update_service(
            Locale::En,
            before,
            ServicePatch {
                price: Some("$12".to_string()),
                ..Default::default()
            },
        ));
        assert_eq!(state.content.en.services[before].price, "$12");

        assert!(!state.update_service(Locale::En, 99, ServicePatch::default()));

        let removed = state.remove_service(Locale::En, before).unwrap();
        assert_eq!(removed.name, "Skrill");
        assert_eq!(state.remove_service(Locale::En, 99), None);
    }

    #[test]
    fn test_reorder_services() {
        let mut state = CmsState::default();
        let names: Vec<String> = state
            .content
            .en
            .services
            .iter()
            .map(|s| s.name.clone())
            .collect();
        assert!(names.len() >= 3);

        state.reorder_services(Locale::En, &[2, 0, 1]);

        let reordered: Vec<&str> = state
            .content
            .en
            .services
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(reordered, vec![&names[2][..], &names[0][..], &names[1][..]]);
    }

    #[test]
    fn test_export_import_round_trip() {
        let mut state = CmsState::default();
        state.set_locale(Locale::En);
        state.toggle_block("faq", false);

        let restored = CmsState::import_json(&state.export_json());
        assert_eq!(restored, state);
    }

    #[test]
    fn test_import_garbage_falls_back_to_default() {
        assert_eq!(CmsState::import_json("not json"), CmsState::default());
    }
}
