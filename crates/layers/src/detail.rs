use catalog::{Repository, SpotImage};
use foundation::SpotId;
use serde::Serialize;
use tracing::debug;

use crate::markers::category_for;

/// Category label for spots without a category.
pub const UNCATEGORIZED_LABEL: &str = "None";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpotDetail {
    /// Changes whenever the shown spot changes, so the host can cross-fade.
    pub key: SpotId,
    pub name: String,
    pub description: String,
    pub category_name: String,
    pub images: Vec<SpotImage>,
}

/// Detail for the active spot, or `None` when no spot is selected or the
/// selected id does not resolve.
pub fn spot_detail(repository: &Repository, active: Option<SpotId>) -> Option<SpotDetail> {
    let id = active?;
    let Some(spot) = repository.spot(id) else {
        debug!(spot = %id, "active spot does not resolve; no detail");
        return None;
    };
    let category_name = category_for(spot, repository)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| UNCATEGORIZED_LABEL.to_string());
    Some(SpotDetail {
        key: spot.id,
        name: spot.name.clone(),
        description: spot.description.clone(),
        category_name,
        images: spot.images.clone(),
    })
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct CarouselSettings {
    pub dots: bool,
    pub infinite: bool,
    pub speed_ms: u32,
    pub slides_to_show: u32,
    pub slides_to_scroll: u32,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            dots: true,
            infinite: true,
            speed_ms: 500,
            slides_to_show: 1,
            slides_to_scroll: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slide {
    pub url: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Carousel {
    pub slides: Vec<Slide>,
    pub settings: CarouselSettings,
}

/// Slides in image order. No images, no carousel.
pub fn carousel(images: &[SpotImage]) -> Option<Carousel> {
    if images.is_empty() {
        return None;
    }
    let slides = images
        .iter()
        .enumerate()
        .map(|(i, img)| Slide {
            url: img.url.clone(),
            alt: img.caption.clone().unwrap_or_else(|| format!("slide-{i}")),
        })
        .collect();
    Some(Carousel {
        slides,
        settings: CarouselSettings::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slides_use_caption_or_positional_alt() {
        let images = vec![
            SpotImage {
                url: "a.jpg".into(),
                caption: Some("Gate".into()),
            },
            SpotImage {
                url: "b.jpg".into(),
                caption: None,
            },
        ];
        let c = carousel(&images).unwrap();
        let alts: Vec<&str> = c.slides.iter().map(|s| s.alt.as_str()).collect();
        assert_eq!(alts, vec!["Gate", "slide-1"]);
        assert_eq!(c.settings.speed_ms, 500);
    }

    #[test]
    fn no_images_no_carousel() {
        assert!(carousel(&[]).is_none());
    }
}
