//! Shared wire-schema DTOs for the advertisement mutation boundary.
//!
//! DESIGN
//! ======
//! These types intentionally mirror the backend's GraphQL payloads so serde
//! round-trips stay lossless. Field renames track the wire casing
//! (`_id`, `mediaUrl`, `startDate`); Rust-side names stay snake_case.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Placement style of an advertisement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdvertisementKind {
    /// Shown as a modal popup.
    #[default]
    #[serde(rename = "POPUP")]
    Popup,
    /// Shown as an inline banner.
    #[serde(rename = "BANNER")]
    Banner,
}

impl AdvertisementKind {
    /// Wire string for this kind (`"POPUP"` / `"BANNER"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Popup => "POPUP",
            Self::Banner => "BANNER",
        }
    }

    /// Parse the wire string; unknown values map to `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "POPUP" => Some(Self::Popup),
            "BANNER" => Some(Self::Banner),
            _ => None,
        }
    }
}

impl fmt::Display for AdvertisementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An advertisement as represented in the wire protocol.
///
/// Dates are `YYYY-MM-DD` strings at this boundary; parsing into calendar
/// types is the backend's concern.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvertisementRecord {
    /// Unique advertisement identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Placement style.
    #[serde(rename = "type")]
    pub kind: AdvertisementKind,
    /// First day the advertisement runs (`YYYY-MM-DD`).
    #[serde(rename = "startDate")]
    pub start_date: String,
    /// Last day the advertisement runs (`YYYY-MM-DD`).
    #[serde(rename = "endDate")]
    pub end_date: String,
    /// Reference to an external media asset; empty string means no media.
    #[serde(rename = "mediaUrl", default)]
    pub media_url: String,
    /// Organization that owns this advertisement. Mutation responses omit
    /// it, so it defaults to empty and callers preserve their own copy.
    #[serde(rename = "organizationId", default)]
    pub organization_id: String,
}

impl AdvertisementRecord {
    /// Whether a media asset is attached.
    pub fn has_media(&self) -> bool {
        !self.media_url.is_empty()
    }
}

/// Variables for the delete mutation. The payload is exactly `{ id }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAdvertisementVariables {
    pub id: String,
}

/// Variables for the update mutation.
///
/// `id` is always present; the remaining fields are serialized only when
/// they changed relative to the committed record (partial-update
/// contract — see `util::diff`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAdvertisementVariables {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<AdvertisementKind>,
    #[serde(rename = "startDate", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl UpdateAdvertisementVariables {
    /// True when no field besides `id` would be sent.
    pub fn is_id_only(&self) -> bool {
        self.name.is_none() && self.kind.is_none() && self.start_date.is_none() && self.end_date.is_none()
    }
}

/// Variables for the create mutation. All fields are required; the media
/// reference travels under the wire key `file`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAdvertisementVariables {
    #[serde(rename = "organizationId")]
    pub organization_id: String,
    pub name: String,
    pub file: String,
    #[serde(rename = "type")]
    pub kind: AdvertisementKind,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
}

/// Response envelope for the update mutation.
///
/// A missing `data` payload is a legal degenerate response: callers treat
/// it as "nothing to commit" rather than an error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAdvertisementResponse {
    #[serde(default)]
    pub data: Option<UpdateAdvertisementData>,
}

/// `data` payload of the update mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAdvertisementData {
    #[serde(rename = "updateAdvertisement")]
    pub update_advertisement: UpdateAdvertisementResult,
}

/// Inner result of the update mutation carrying the persisted record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAdvertisementResult {
    pub advertisement: AdvertisementRecord,
}

/// Response envelope for the create mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAdvertisementResponse {
    #[serde(default)]
    pub data: Option<CreateAdvertisementData>,
}

/// `data` payload of the create mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAdvertisementData {
    #[serde(rename = "createAdvertisement")]
    pub create_advertisement: CreatedAdvertisement,
}

/// Inner result of the create mutation: just the new record's id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedAdvertisement {
    #[serde(rename = "_id")]
    pub id: String,
}
