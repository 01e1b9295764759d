//! Repair of persisted draft shapes older than the current version.
//!
//! The persisted draft survived several shape changes: a legacy `media`
//! block type, bundles without testimonials/logos arrays, sites without a
//! logo path, services without the icon-image field. Loading always goes
//! through here; the output is a well-formed current-version state no
//! matter what was stored.

use serde_json::{json, Value};

use super::defaults;
use super::{CmsState, CMS_STATE_VERSION};
use crate::models::Locale;

/// Migrate a raw persisted value to the current draft shape
///
/// Anything unrecoverable falls back to the seed state rather than
/// erroring; a broken local draft must never lock the dashboard.
pub fn migrate_state(raw: Value) -> CmsState {
    let Value::Object(mut state) = raw else {
        return CmsState::default();
    };

    repair_blocks(&mut state);
    repair_content(&mut state);
    repair_design(&mut state);
    state.insert("version".to_string(), json!(CMS_STATE_VERSION));

    match serde_json::from_value(Value::Object(state)) {
        Ok(state) => state,
        Err(e) => {
            tracing::warn!("Unrecoverable draft shape, reseeding: {}", e);
            CmsState::default()
        }
    }
}

fn repair_blocks(state: &mut serde_json::Map<String, Value>) {
    let blocks_ok = match state.get_mut("blocks") {
        Some(Value::Array(blocks)) => {
            for block in blocks.iter_mut() {
                // Legacy block type from before the logos rename
                if block.get("type").and_then(Value::as_str) == Some("media") {
                    block["type"] = json!("logos");
                }
            }
            blocks
                .iter()
                .all(|b| serde_json::from_value::<super::BlockConfig>(b.clone()).is_ok())
        }
        _ => false,
    };

    if !blocks_ok {
        let defaults =
            serde_json::to_value(defaults::default_blocks()).unwrap_or(Value::Array(vec![]));
        state.insert("blocks".to_string(), defaults);
    }
}

fn repair_content(state: &mut serde_json::Map<String, Value>) {
    if !state.get("content").is_some_and(Value::is_object) {
        state.insert("content".to_string(), json!({}));
    }
    let Some(content) = state.get_mut("content").and_then(Value::as_object_mut) else {
        return;
    };

    let seed_state = CmsState::default();
    for locale in Locale::ALL {
        let seed = match locale {
            Locale::Ar => &seed_state.content.ar,
            Locale::En => &seed_state.content.en,
        };

        if !content.get(locale.as_str()).is_some_and(Value::is_object) {
            content.insert(
                locale.as_str().to_string(),
                serde_json::to_value(seed).unwrap_or(json!({})),
            );
            continue;
        }

        let Some(bundle) = content
            .get_mut(locale.as_str())
            .and_then(Value::as_object_mut)
        else {
            continue;
        };

        ensure_object(bundle, "hero");
        if let Some(hero) = bundle.get_mut("hero").and_then(Value::as_object_mut) {
            ensure_array(hero, "stats");
        }
        ensure_array(bundle, "logos");
        ensure_array(bundle, "testimonials");

        ensure_object(bundle, "site");
        if let Some(site) = bundle.get_mut("site").and_then(Value::as_object_mut) {
            let missing_logo = !site
                .get("logoSrc")
                .and_then(Value::as_str)
                .is_some_and(|s| !s.is_empty());
            if missing_logo {
                site.insert(
                    "logoSrc".to_string(),
                    json!(super::content::default_logo_src()),
                );
            }
        }

        match bundle.get_mut("services") {
            Some(Value::Array(services)) => {
                for service in services.iter_mut() {
                    if let Some(obj) = service.as_object_mut() {
                        obj.entry("iconImage").or_insert(Value::Null);
                    }
                }
            }
            _ => {
                bundle.insert(
                    "services".to_string(),
                    serde_json::to_value(&seed.services).unwrap_or(json!([])),
                );
            }
        }
    }
}

fn repair_design(state: &mut serde_json::Map<String, Value>) {
    if !state.get("design").is_some_and(Value::is_object) {
        state.insert("design".to_string(), json!({}));
    }
    // Anim defaults are filled field by field at deserialization; only the
    // object itself has to exist
    if let Some(design) = state.get_mut("design").and_then(Value::as_object_mut) {
        if !design.get("anim").is_some_and(Value::is_object) {
            design.insert("anim".to_string(), json!({}));
        }
    }
}

fn ensure_object(map: &mut serde_json::Map<String, Value>, key: &str) {
    if !map.get(key).is_some_and(Value::is_object) {
        map.insert(key.to_string(), json!({}));
    }
}

fn ensure_array(map: &mut serde_json::Map<String, Value>, key: &str) {
    if !map.get(key).is_some_and(Value::is_array) {
        map.insert(key.to_string(), json!([]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_becomes_default() {
        assert_eq!(migrate_state(Value::Null), CmsState::default());
        assert_eq!(migrate_state(json!("draft")), CmsState::default());
    }

    #[test]
    fn test_legacy_media_block_renamed() {
        let raw = json!({
            "locale": "ar",
            "blocks": [
                { "id": "hero", "type": "hero", "enabled": true },
                { "id": "media", "type": "media", "enabled": false }
            ]
        });

        let state = migrate_state(raw);
        assert_eq!(state.blocks.len(), 2);
        assert_eq!(state.blocks[1].kind, super::super::BlockKind::Logos);
        assert!(!state.blocks[1].enabled);
    }

    #[test]
    fn test_invalid_blocks_replaced_with_defaults() {
        let raw = json!({ "locale": "en", "blocks": "oops" });
        let state = migrate_state(raw);
        assert_eq!(state.blocks, defaults::default_blocks());
    }

    #[test]
    fn test_missing_arrays_backfilled() {
        let raw = json!({
            "locale": "en",
            "content": {
                "en": {
                    "hero": { "title": "kept" },
                    "site": { "name": "KYC Trust" }
                }
            }
        });

        let state = migrate_state(raw);
        assert_eq!(state.content.en.hero.title, "kept");
        assert!(state.content.en.hero.stats.is_empty());
        assert!(state.content.en.logos.is_empty());
        assert!(state.content.en.testimonials.is_empty());
        // missing locale falls back to the seed bundle
        assert_eq!(state.content.ar, CmsState::default().content.ar);
    }

    #[test]
    fn test_missing_logo_src_backfilled() {
        let raw = json!({
            "locale": "en",
            "content": { "en": { "site": { "name": "KYC Trust", "logoSrc": "" } } }
        });

        let state = migrate_state(raw);
        assert_eq!(
            state.content.en.site.logo_src,
            super::super::content::default_logo_src()
        );
    }

    #[test]
    fn test_services_keep_data_and_gain_icon_field() {
        let raw = json!({
            "locale": "en",
            "content": {
                "en": {
                    "services": [ { "name": "Wise", "price": "$5" } ]
                }
            }
        });

        let state = migrate_state(raw);
        assert_eq!(state.content.en.services.len(), 1);
        assert_eq!(state.content.en.services[0].name, "Wise");
        assert_eq!(state.content.en.services[0].icon_image, None);
        assert!(state.content.en.services[0].active);
    }

    #[test]
    fn test_version_stamped_to_current() {
        let raw = json!({ "locale": "ar", "version": 2 });
        assert_eq!(migrate_state(raw).version, CMS_STATE_VERSION);
    }

    #[test]
    fn test_anim_defaults_merged_into_partial_design() {
        let raw = json!({
            "locale": "ar",
            "design": { "anim": { "parallax": 30.0 } }
        });

        let state = migrate_state(raw);
        assert_eq!(state.design.anim.parallax, 30.0);
        assert!(state.design.anim.enable_reveal);
        assert_eq!(state.design.anim.intensity, 1.0);
    }

    #[test]
    fn test_current_state_round_trips_unchanged() {
        let state = CmsState::default();
        let raw = serde_json::to_value(&state).unwrap();
        assert_eq!(migrate_state(raw), state);
    }
}
