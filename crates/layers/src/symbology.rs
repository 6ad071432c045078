use catalog::Category;
use serde::Serialize;

/// Bundled default marker assets, resolved by the host against its asset root.
pub const DEFAULT_PIN_URL: &str = "marker-icon.png";
pub const DEFAULT_PIN_RETINA_URL: &str = "marker-icon-2x.png";
pub const DEFAULT_PIN_SHADOW_URL: &str = "marker-shadow.png";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum IconKind {
    Category,
    DefaultPin,
}

/// Marker icon as the map host should rasterize it.
///
/// `anchor` is the pixel of the image placed on the marker position;
/// `popup_anchor` is relative to `anchor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconSpec {
    pub kind: IconKind,
    pub url: String,
    pub retina_url: Option<String>,
    pub size: [u32; 2],
    pub anchor: [i32; 2],
    pub popup_anchor: Option<[i32; 2]>,
    pub shadow_url: Option<String>,
}

impl IconSpec {
    pub fn category(url: &str) -> Self {
        Self {
            kind: IconKind::Category,
            url: url.to_string(),
            retina_url: None,
            size: [30, 30],
            anchor: [15, 30],
            popup_anchor: Some([0, -30]),
            shadow_url: None,
        }
    }

    pub fn default_pin() -> Self {
        Self {
            kind: IconKind::DefaultPin,
            url: DEFAULT_PIN_URL.to_string(),
            retina_url: Some(DEFAULT_PIN_RETINA_URL.to_string()),
            size: [25, 41],
            anchor: [12, 41],
            popup_anchor: None,
            shadow_url: Some(DEFAULT_PIN_SHADOW_URL.to_string()),
        }
    }
}

/// Icon for a spot given its category. Total: no category, or a category
/// without an icon, falls back to the default pin.
pub fn resolve_icon(category: Option<&Category>) -> IconSpec {
    match category.and_then(|c| c.icon_url.as_deref()) {
        Some(url) => IconSpec::category(url),
        None => IconSpec::default_pin(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineStyle {
    /// CSS color string.
    pub color: String,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: "#c04722".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foundation::CategoryId;

    fn cat(icon: Option<&str>) -> Category {
        Category {
            id: CategoryId::new(1),
            name: "Parks".into(),
            icon_url: icon.map(str::to_string),
        }
    }

    #[test]
    fn category_icon_is_30px_bottom_anchored() {
        let c = cat(Some("http://x/icons/park.png"));
        let icon = resolve_icon(Some(&c));
        assert_eq!(icon.kind, IconKind::Category);
        assert_eq!(icon.url, "http://x/icons/park.png");
        assert_eq!(icon.size, [30, 30]);
        assert_eq!(icon.anchor, [15, 30]);
        assert_eq!(icon.popup_anchor, Some([0, -30]));
        assert_eq!(icon.shadow_url, None);
    }

    #[test]
    fn missing_icon_falls_back_to_default_pin() {
        let c = cat(None);
        for icon in [resolve_icon(None), resolve_icon(Some(&c))] {
            assert_eq!(icon.kind, IconKind::DefaultPin);
            assert_eq!(icon.size, [25, 41]);
            assert_eq!(icon.anchor, [12, 41]);
            assert_eq!(icon.shadow_url.as_deref(), Some(DEFAULT_PIN_SHADOW_URL));
        }
    }
}
