//! Behavior tests for the operator draft store: editing operations,
//! import/export, and migration of older persisted shapes.

use serde_json::json;

use kyctrust_server::cms::{
    content::{ContentPatch, Hero, Service},
    migrate_state, BlockKind, CmsState, ServicePatch,
};
use kyctrust_server::models::Locale;

#[test]
fn test_draft_edits_do_not_leak_across_locales() {
    let mut draft = CmsState::default();

    draft.set_content(
        Locale::En,
        ContentPatch {
            hero: Some(Hero {
                title: "Launch week pricing".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        },
    );

    assert_eq!(draft.content.en.hero.title, "Launch week pricing");
    assert_ne!(draft.content.ar.hero.title, "Launch week pricing");
}

#[test]
fn test_partial_merge_keeps_other_sections() {
    let mut draft = CmsState::default();
    let faq_before = draft.content.en.faq.clone();
    let payments_before = draft.content.en.payments.clone();

    draft.set_content(
        Locale::En,
        ContentPatch {
            logos: Some(vec!["/logos/wise.svg".to_string()]),
            ..Default::default()
        },
    );

    assert_eq!(draft.content.en.logos, vec!["/logos/wise.svg".to_string()]);
    assert_eq!(draft.content.en.faq, faq_before);
    assert_eq!(draft.content.en.payments, payments_before);
}

#[test]
fn test_block_reorder_and_toggle_survive_export() {
    let mut draft = CmsState::default();
    draft.toggle_block("faq", false);
    draft.reorder_blocks(&[
        "services".to_string(),
        "hero".to_string(),
        "faq".to_string(),
    ]);

    let restored = CmsState::import_json(&draft.export_json());

    let ids: Vec<&str> = restored.blocks.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["services", "hero", "faq"]);
    assert!(!restored.blocks[2].enabled);
}

#[test]
fn test_service_operations_end_to_end() {
    let mut draft = CmsState::default();
    let base = draft.content.ar.services.len();

    draft.add_service(
        Locale::Ar,
        Service {
            name: "نتلر".to_string(),
            price: "20$".to_string(),
            ..Default::default()
        },
    );
    assert!(draft.update_service(
        Locale::Ar,
        base,
        ServicePatch {
            popular: Some(true),
            ..Default::default()
        },
    ));
    assert!(draft.content.ar.services[base].popular);

    // Move the new service to the front
    let order: Vec<usize> = std::iter::once(base).chain(0..base).collect();
    draft.reorder_services(Locale::Ar, &order);
    assert_eq!(draft.content.ar.services[0].name, "نتلر");
    assert_eq!(draft.content.ar.services.len(), base + 1);
}

#[test]
fn test_import_of_version_2_draft() {
    // A shape the dashboard persisted before the logos rename and before
    // testimonials existed
    let legacy = json!({
        "version": 2,
        "locale": "ar",
        "blocks": [
            { "id": "hero", "type": "hero", "enabled": true },
            { "id": "media", "type": "media", "enabled": true },
            { "id": "faq", "type": "faq", "enabled": false }
        ],
        "design": {},
        "content": {
            "ar": {
                "site": { "name": "كي واي سي ترست" },
                "hero": { "title": "عنوان قديم" },
                "services": [ { "name": "بايونير", "price": "30$" } ]
            },
            "en": {
                "site": { "name": "KYC Trust" },
                "hero": { "title": "Old title", "stats": [] },
                "services": []
            }
        }
    });

    let draft = migrate_state(legacy);

    assert_eq!(draft.version, kyctrust_server::cms::CMS_STATE_VERSION);
    assert_eq!(draft.blocks[1].kind, BlockKind::Logos);
    assert!(!draft.blocks[2].enabled);

    // Old copy survives, missing pieces are repaired
    assert_eq!(draft.content.ar.hero.title, "عنوان قديم");
    assert_eq!(draft.content.ar.services[0].name, "بايونير");
    assert!(draft.content.ar.services[0].active);
    assert!(draft.content.ar.testimonials.is_empty());
    assert!(!draft.content.ar.site.logo_src.is_empty());
    assert!(draft.design.anim.enable_reveal);
}

#[test]
fn test_reset_returns_to_seed() {
    let mut draft = CmsState::default();
    draft.set_locale(Locale::En);
    draft.toggle_block("hero", false);

    draft.reset();
    assert_eq!(draft, CmsState::default());
}
