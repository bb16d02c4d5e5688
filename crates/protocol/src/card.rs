//! Card records owned by the board.
//!
//! A [`Card`] is the unit of work rendered by the card widget. The widget
//! never owns it: the board passes it in, and receives a [`CardUpdate`] back
//! when an edit is committed.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::duration::time_summary;
use crate::error::{ProtocolError, Result};
use crate::field::CardField;

/// Opaque identifier of a card, assigned by the board.
///
/// # Examples
///
/// ```
/// use lanecard_protocol::CardId;
///
/// let id = CardId::new("card-1");
/// assert_eq!(id.as_str(), "card-1");
/// assert_ne!(CardId::generate(), CardId::generate());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Creates an identifier from an existing value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Creates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Opaque identifier of the lane containing a card.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LaneId(String);

impl LaneId {
    /// Creates an identifier from an existing value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LaneId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A tag attached to a card.
///
/// The title doubles as the tag's key, so titles must be unique within one
/// card. Colors are color names or hex codes (`"red"`, `"#ff8800"`); the tag
/// widget decides how to render unknown values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// Text of the tag.
    pub title: String,
    /// Foreground color override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Background color override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
}

impl Tag {
    /// Creates a tag with default colors.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            color: None,
            bg_color: None,
        }
    }

    /// Sets the foreground and background colors.
    #[must_use]
    pub fn with_colors(mut self, color: impl Into<String>, bg_color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self.bg_color = Some(bg_color.into());
        self
    }
}

/// A card on a lane.
///
/// # Examples
///
/// ```
/// use lanecard_protocol::{Card, Tag};
///
/// let card = Card::new("card-1", "planned")
///     .with_title("Write specs")
///     .with_time("60min", "25min")
///     .with_tags([Tag::new("docs")]);
///
/// assert_eq!(card.time_summary().as_deref(), Some("Left: 35 min"));
/// assert!(!card.editable);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Unique identifier for this card.
    pub id: CardId,
    /// Lane currently holding this card.
    pub lane_id: LaneId,
    /// Short summary of the card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Time allotted, usually `"<n>min"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allotted: Option<String>,
    /// Time spent so far, usually `"<n>min"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spent: Option<String>,
    /// Tags in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    /// Whether the card widget may enter edit mode.
    #[serde(default)]
    pub editable: bool,
    /// Host data carried along with the card and never read by the widget.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl Card {
    /// Creates an empty, read-only card.
    #[must_use]
    pub fn new(id: impl Into<CardId>, lane_id: impl Into<LaneId>) -> Self {
        Self {
            id: id.into(),
            lane_id: lane_id.into(),
            title: None,
            description: None,
            allotted: None,
            spent: None,
            tags: Vec::new(),
            editable: false,
            metadata: None,
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the allotted and spent times.
    #[must_use]
    pub fn with_time(mut self, allotted: impl Into<String>, spent: impl Into<String>) -> Self {
        self.allotted = Some(allotted.into());
        self.spent = Some(spent.into());
        self
    }

    /// Replaces the tags.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Sets whether the card can be edited.
    #[must_use]
    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    /// Returns the current value of a text field.
    #[must_use]
    pub fn field(&self, field: CardField) -> Option<&str> {
        match field {
            CardField::Title => self.title.as_deref(),
            CardField::Description => self.description.as_deref(),
            CardField::Allotted => self.allotted.as_deref(),
            CardField::Spent => self.spent.as_deref(),
        }
    }

    /// Returns the summary shown in the time region.
    ///
    /// See [`time_summary`] for the rules.
    #[must_use]
    pub fn time_summary(&self) -> Option<String> {
        time_summary(self.allotted.as_deref(), self.spent.as_deref())
    }

    /// Returns the record handed to the board on commit, with the current values.
    #[must_use]
    pub fn to_update(&self) -> CardUpdate {
        CardUpdate {
            id: self.id.clone(),
            lane_id: self.lane_id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            allotted: self.allotted.clone(),
            spent: self.spent.clone(),
            tags: self.tags.clone(),
        }
    }

    /// Merges a committed update into this card.
    ///
    /// Presentation fields (`editable`, `metadata`) are left untouched.
    pub fn apply(&mut self, update: CardUpdate) {
        let CardUpdate {
            id,
            lane_id,
            title,
            description,
            allotted,
            spent,
            tags,
        } = update;
        self.id = id;
        self.lane_id = lane_id;
        self.title = title;
        self.description = description;
        self.allotted = allotted;
        self.spent = spent;
        self.tags = tags;
    }
}

/// The full record passed to the update callback when an edit is committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardUpdate {
    /// Identifier of the edited card.
    pub id: CardId,
    /// Lane of the edited card.
    pub lane_id: LaneId,
    /// Title after the edit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Description after the edit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Allotted time after the edit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allotted: Option<String>,
    /// Spent time after the edit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spent: Option<String>,
    /// Tags, unchanged by the widget.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

impl CardUpdate {
    /// Overwrites one text field.
    pub fn set_field(&mut self, field: CardField, value: String) {
        let slot = match field {
            CardField::Title => &mut self.title,
            CardField::Description => &mut self.description,
            CardField::Allotted => &mut self.allotted,
            CardField::Spent => &mut self.spent,
        };
        *slot = Some(value);
    }

    /// Serializes the update to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::SerializationFailed`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(ProtocolError::SerializationFailed)
    }

    /// Parses an update from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::DeserializationFailed`] if the input is not a
    /// valid update record.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(ProtocolError::DeserializationFailed)
    }
}
