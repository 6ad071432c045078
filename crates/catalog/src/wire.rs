//! Decoding of service payloads into validated records.
//!
//! A payload must be a JSON array. Each element is decoded on its own; an
//! element that fails validation is quarantined as a [`MalformedRecord`] and
//! the remaining elements still load.

use foundation::{CategoryId, LatLng, RouteId, SpotId};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::error::{CollectionKind, FetchError, FetchErrorKind, MalformedRecord};
use crate::model::{Category, Route, Spot, SpotImage};

/// A record type that can be decoded from one element of a collection payload.
pub trait Record: Sized {
    const KIND: CollectionKind;

    type Id: Copy + Ord + std::fmt::Debug + std::fmt::Display;

    fn id(&self) -> Self::Id;

    fn from_value(value: Value) -> Result<Self, String>;
}

#[derive(Debug)]
pub struct Decoded<T> {
    pub records: Vec<T>,
    pub quarantined: Vec<MalformedRecord>,
}

pub fn decode_collection<T: Record>(payload: &[u8]) -> Result<Decoded<T>, FetchError> {
    let value: Value = serde_json::from_slice(payload).map_err(|e| {
        FetchError::with_source(
            T::KIND,
            FetchErrorKind::Malformed,
            "payload is not valid JSON",
            e,
        )
    })?;
    let Value::Array(items) = value else {
        return Err(FetchError::malformed(T::KIND, "payload is not a JSON array"));
    };

    let mut out = Decoded {
        records: Vec::with_capacity(items.len()),
        quarantined: Vec::new(),
    };
    for (index, item) in items.into_iter().enumerate() {
        match T::from_value(item) {
            Ok(record) => out.records.push(record),
            Err(reason) => {
                let rec = MalformedRecord {
                    collection: T::KIND,
                    index,
                    reason,
                };
                warn!("{rec}");
                out.quarantined.push(rec);
            }
        }
    }
    Ok(out)
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.trim().is_empty())
}

#[derive(Deserialize)]
struct WireCategory {
    id: CategoryId,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    icon_url: Option<String>,
}

impl From<WireCategory> for Category {
    fn from(w: WireCategory) -> Self {
        Category {
            id: w.id,
            name: w.name.unwrap_or_default(),
            icon_url: non_empty(w.icon_url),
        }
    }
}

#[derive(Deserialize)]
struct WireImage {
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    caption: Option<String>,
}

#[derive(Deserialize)]
struct WireSpot {
    id: SpotId,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lng: Option<f64>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    category: Option<Value>,
    #[serde(default)]
    images: Option<Vec<Value>>,
}

#[derive(Deserialize)]
struct WireRoute {
    id: RouteId,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    coordinates: Option<Value>,
}

impl Record for Category {
    const KIND: CollectionKind = CollectionKind::Categories;

    type Id = CategoryId;

    fn id(&self) -> CategoryId {
        self.id
    }

    fn from_value(value: Value) -> Result<Self, String> {
        serde_json::from_value::<WireCategory>(value)
            .map(Category::from)
            .map_err(|e| e.to_string())
    }
}

impl Record for Spot {
    const KIND: CollectionKind = CollectionKind::Spots;

    type Id = SpotId;

    fn id(&self) -> SpotId {
        self.id
    }

    fn from_value(value: Value) -> Result<Self, String> {
        let w: WireSpot = serde_json::from_value(value).map_err(|e| e.to_string())?;
        let (Some(lat), Some(lng)) = (w.lat, w.lng) else {
            return Err(format!("spot {} has no position", w.id));
        };
        let position = LatLng::try_new(lat, lng)
            .ok_or_else(|| format!("spot {} has invalid position ({lat}, {lng})", w.id))?;

        // A broken embedded category degrades the spot to uncategorized.
        let category = match w.category {
            None | Some(Value::Null) => None,
            Some(v) => match serde_json::from_value::<WireCategory>(v) {
                Ok(c) => Some(Category::from(c)),
                Err(e) => {
                    warn!(spot = %w.id, "embedded category ignored: {e}");
                    None
                }
            },
        };

        let spot_id = w.id;
        let images = w
            .images
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .filter_map(|(index, v)| match serde_json::from_value::<WireImage>(v) {
                Ok(img) => Some(img),
                Err(e) => {
                    warn!(spot = %spot_id, index, "image entry ignored: {e}");
                    None
                }
            })
            .filter_map(|img| {
                let url = non_empty(img.image_url)?;
                Some(SpotImage {
                    url,
                    caption: non_empty(img.caption),
                })
            })
            .collect();

        Ok(Spot {
            id: w.id,
            position,
            name: w.name.unwrap_or_default(),
            description: w.description.unwrap_or_default(),
            category,
            images,
        })
    }
}

fn vertex(value: &Value) -> Option<LatLng> {
    match value.as_array()?.as_slice() {
        [lat, lng] => LatLng::try_new(lat.as_f64()?, lng.as_f64()?),
        _ => None,
    }
}

impl Record for Route {
    const KIND: CollectionKind = CollectionKind::Routes;

    type Id = RouteId;

    fn id(&self) -> RouteId {
        self.id
    }

    fn from_value(value: Value) -> Result<Self, String> {
        let w: WireRoute = serde_json::from_value(value).map_err(|e| e.to_string())?;
        let coordinates = match w.coordinates {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(raw)) => {
                let kept: Vec<LatLng> = raw.iter().filter_map(vertex).collect();
                if kept.len() != raw.len() {
                    warn!(
                        route = %w.id,
                        dropped = raw.len() - kept.len(),
                        "route vertices without a valid [lat, lng] pair dropped"
                    );
                }
                kept
            }
            Some(_) => return Err(format!("route {} coordinates are not a list", w.id)),
        };
        Ok(Route {
            id: w.id,
            name: w.name.unwrap_or_default(),
            coordinates,
        })
    }
}
