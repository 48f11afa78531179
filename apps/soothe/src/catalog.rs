//! Compiled-in content shown on the home screen.

use thiserror::Error;
use url::Url;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentItem {
    pub label: &'static str,
    pub image_ref: &'static str,
}

const fn item(label: &'static str, image_ref: &'static str) -> ContentItem {
    ContentItem { label, image_ref }
}

static FAVORITES: [ContentItem; 6] = [
    item(
        "Short mantras",
        "https://images.pexels.com/photos/1825206/pexels-photo-1825206.jpeg?auto=compress&cs=tinysrgb&dpr=1&w=500",
    ),
    item(
        "Nature meditations",
        "https://images.pexels.com/photos/3571551/pexels-photo-3571551.jpeg?auto=compress&cs=tinysrgb&h=750&w=1260",
    ),
    item(
        "Stress and anxiety",
        "https://images.pexels.com/photos/1557238/pexels-photo-1557238.jpeg?auto=compress&cs=tinysrgb&h=750&w=1260",
    ),
    item(
        "Self-massage",
        "https://images.pexels.com/photos/1029604/pexels-photo-1029604.jpeg?auto=compress&cs=tinysrgb&dpr=2&h=750&w=1260",
    ),
    item(
        "Overwhelmed",
        "https://images.pexels.com/photos/3560044/pexels-photo-3560044.jpeg?auto=compress&cs=tinysrgb&h=750&w=1260",
    ),
    item(
        "Nightly wind down",
        "https://images.pexels.com/photos/924824/pexels-photo-924824.jpeg?auto=compress&cs=tinysrgb&h=750&w=1260",
    ),
];

static ALIGN_BODY: [ContentItem; 6] = [
    item(
        "Inversions",
        "https://images.pexels.com/photos/317157/pexels-photo-317157.jpeg?auto=compress&cs=tinysrgb&h=750&w=1260",
    ),
    item(
        "Quick yoga",
        "https://images.pexels.com/photos/1812964/pexels-photo-1812964.jpeg?auto=compress&cs=tinysrgb&h=750&w=1260",
    ),
    item(
        "Stretching",
        "https://images.pexels.com/photos/4056723/pexels-photo-4056723.jpeg?auto=compress&cs=tinysrgb&h=750&w=1260",
    ),
    item(
        "Tabata",
        "https://images.pexels.com/photos/4662438/pexels-photo-4662438.jpeg?auto=compress&cs=tinysrgb&h=750&w=1260",
    ),
    item(
        "HIIT",
        "https://images.pexels.com/photos/999309/pexels-photo-999309.jpeg?auto=compress&cs=tinysrgb&h=750&w=1260",
    ),
    item(
        "Pre-natal yoga",
        "https://images.pexels.com/photos/396133/pexels-photo-396133.jpeg?auto=compress&cs=tinysrgb&h=750&w=1260",
    ),
];

static ALIGN_MIND: [ContentItem; 6] = [
    item(
        "Meditate",
        "https://images.pexels.com/photos/3822622/pexels-photo-3822622.jpeg?auto=compress&cs=tinysrgb&h=750&w=1260",
    ),
    item(
        "With kids",
        "https://images.pexels.com/photos/3094230/pexels-photo-3094230.jpeg?auto=compress&cs=tinysrgb&h=750&w=1260",
    ),
    item(
        "Aromatherapy",
        "https://images.pexels.com/photos/4498318/pexels-photo-4498318.jpeg?auto=compress&cs=tinysrgb&h=750&w=1260",
    ),
    item(
        "On the go",
        "https://images.pexels.com/photos/1241348/pexels-photo-1241348.jpeg?auto=compress&cs=tinysrgb&dpr=2&h=750&w=1260",
    ),
    item(
        "With pets",
        "https://images.pexels.com/photos/4056535/pexels-photo-4056535.jpeg?auto=compress&cs=tinysrgb&dpr=2&h=750&w=1260",
    ),
    item(
        "High stress",
        "https://images.pexels.com/photos/897817/pexels-photo-897817.jpeg?auto=compress&cs=tinysrgb&h=750&w=1260",
    ),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CollectionId {
    Favorites,
    AlignBody,
    AlignMind,
}

impl CollectionId {
    pub const ALL: [CollectionId; 3] = [
        CollectionId::Favorites,
        CollectionId::AlignBody,
        CollectionId::AlignMind,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CollectionId::Favorites => "favorites",
            CollectionId::AlignBody => "alignBody",
            CollectionId::AlignMind => "alignMind",
        }
    }

    pub fn from_name(name: &str) -> Option<CollectionId> {
        match name {
            "favorites" => Some(CollectionId::Favorites),
            "alignBody" | "align_body" => Some(CollectionId::AlignBody),
            "alignMind" | "align_mind" => Some(CollectionId::AlignMind),
            _ => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown collection `{0}`")]
    UnknownCollection(String),
    #[error("collection `{0}` is empty")]
    EmptyCollection(&'static str),
    #[error("`{label}` in `{collection}` has an invalid image ref: {reason}")]
    InvalidImageRef {
        collection: &'static str,
        label: &'static str,
        reason: String,
    },
}

/// Read-only access to the three collections.
#[derive(Clone, Copy, Debug, Default)]
pub struct Catalog;

impl Catalog {
    pub fn new() -> Self {
        Catalog
    }

    pub fn get_collection(&self, id: CollectionId) -> &'static [ContentItem] {
        match id {
            CollectionId::Favorites => &FAVORITES,
            CollectionId::AlignBody => &ALIGN_BODY,
            CollectionId::AlignMind => &ALIGN_MIND,
        }
    }

    pub fn get_collection_by_name(
        &self,
        name: &str,
    ) -> Result<&'static [ContentItem], CatalogError> {
        CollectionId::from_name(name)
            .map(|id| self.get_collection(id))
            .ok_or_else(|| CatalogError::UnknownCollection(name.to_string()))
    }

    pub fn collections(&self) -> impl Iterator<Item = (CollectionId, &'static [ContentItem])> {
        CollectionId::ALL
            .into_iter()
            .map(move |id| (id, self.get_collection(id)))
    }

    /// Every collection non-empty, every image ref an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (id, items) in self.collections() {
            if items.is_empty() {
                return Err(CatalogError::EmptyCollection(id.name()));
            }
            for it in items {
                check_image_ref(it.image_ref).map_err(|reason| {
                    CatalogError::InvalidImageRef {
                        collection: id.name(),
                        label: it.label,
                        reason,
                    }
                })?;
            }
        }
        Ok(())
    }
}

fn check_image_ref(image_ref: &str) -> Result<(), String> {
    let url = Url::parse(image_ref).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" if url.host_str().is_some() => Ok(()),
        "http" | "https" => Err("missing host".into()),
        other => Err(format!("unsupported scheme `{other}`")),
    }
}

/// Groups favorites into two-item columns for the favorites grid. An odd
/// trailing item gets a column of its own.
pub fn favorite_columns(items: &[ContentItem]) -> Vec<&[ContentItem]> {
    items.chunks(2).collect()
}
