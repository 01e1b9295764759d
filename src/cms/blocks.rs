use serde::{Deserialize, Serialize};

/// Section kinds the public site knows how to render
///
/// A closed set matched exhaustively; unknown kinds are rejected at
/// deserialization instead of falling through a string dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Hero,
    Services,
    Payments,
    Features,
    Faq,
    Testimonials,
    Logos,
    Cta,
    Contact,
}

impl BlockKind {
    pub const ALL: [BlockKind; 9] = [
        BlockKind::Hero,
        BlockKind::Services,
        BlockKind::Payments,
        BlockKind::Features,
        BlockKind::Faq,
        BlockKind::Testimonials,
        BlockKind::Logos,
        BlockKind::Cta,
        BlockKind::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Hero => "hero",
            BlockKind::Services => "services",
            BlockKind::Payments => "payments",
            BlockKind::Features => "features",
            BlockKind::Faq => "faq",
            BlockKind::Testimonials => "testimonials",
            BlockKind::Logos => "logos",
            BlockKind::Cta => "cta",
            BlockKind::Contact => "contact",
        }
    }
}

/// One entry in the ordered section list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockConfig {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: BlockKind,
    pub enabled: bool,
}

impl BlockConfig {
    /// Default entry for a kind, enabled, with the kind name as id
    pub fn of(kind: BlockKind) -> Self {
        BlockConfig {
            id: kind.as_str().to_string(),
            kind,
            enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serde_uses_lowercase_names() {
        for kind in BlockKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            assert_eq!(serde_json::from_str::<BlockKind>(&json).unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_kind_rejected() {
        assert!(serde_json::from_str::<BlockKind>("\"media\"").is_err());
        assert!(serde_json::from_str::<BlockKind>("\"banner\"").is_err());
    }

    #[test]
    fn test_block_config_tag_field() {
        let block = BlockConfig::of(BlockKind::Hero);
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "hero");
        assert_eq!(json["id"], "hero");
        assert_eq!(json["enabled"], true);
    }
}
