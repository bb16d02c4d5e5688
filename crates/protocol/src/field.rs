//! Card field names.
//!
//! A card exposes four text fields that can carry staged edits, and three
//! regions that can be clicked to start editing. The time region edits both
//! `allotted` and `spent` at once, which is why [`EditTarget`] and
//! [`CardField`] are distinct types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// A text field of a card that can hold a staged value.
///
/// # Examples
///
/// ```
/// use lanecard_protocol::CardField;
///
/// let field: CardField = "spent".parse().unwrap();
/// assert_eq!(field, CardField::Spent);
/// assert_eq!(field.as_str(), "spent");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardField {
    /// The card title.
    Title,
    /// The free-form description.
    Description,
    /// Time allotted to the card, e.g. `"60min"`.
    Allotted,
    /// Time already spent on the card, e.g. `"25min"`.
    Spent,
}

impl CardField {
    /// Returns the field name as used in field tags.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Allotted => "allotted",
            Self::Spent => "spent",
        }
    }

    /// Returns the edit target whose session carries this field.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanecard_protocol::{CardField, EditTarget};
    ///
    /// assert_eq!(CardField::Spent.edit_target(), EditTarget::Allotted);
    /// assert_eq!(CardField::Title.edit_target(), EditTarget::Title);
    /// ```
    #[must_use]
    pub const fn edit_target(self) -> EditTarget {
        match self {
            Self::Title => EditTarget::Title,
            Self::Description => EditTarget::Description,
            Self::Allotted | Self::Spent => EditTarget::Allotted,
        }
    }
}

impl fmt::Display for CardField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardField {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::Title),
            "description" => Ok(Self::Description),
            "allotted" => Ok(Self::Allotted),
            "spent" => Ok(Self::Spent),
            other => Err(ProtocolError::UnknownField(other.to_string())),
        }
    }
}

/// A clickable card region that enters edit mode.
///
/// At most one target is edited at a time. Editing [`EditTarget::Allotted`]
/// exposes two inputs, one for the allotted time and one for the time spent.
///
/// # Examples
///
/// ```
/// use lanecard_protocol::{CardField, EditTarget};
///
/// assert_eq!(
///     EditTarget::Allotted.fields(),
///     &[CardField::Allotted, CardField::Spent]
/// );
/// assert!("spent".parse::<EditTarget>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditTarget {
    /// The title region in the card header.
    Title,
    /// The description line.
    Description,
    /// The time summary in the card header.
    Allotted,
}

impl EditTarget {
    /// Returns all edit targets in display order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Title, Self::Allotted, Self::Description]
    }

    /// Returns the field tag of this region.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.field().as_str()
    }

    /// Returns the field named by this target.
    #[must_use]
    pub const fn field(self) -> CardField {
        match self {
            Self::Title => CardField::Title,
            Self::Description => CardField::Description,
            Self::Allotted => CardField::Allotted,
        }
    }

    /// Returns every field staged while this target is edited, in input order.
    #[must_use]
    pub const fn fields(self) -> &'static [CardField] {
        match self {
            Self::Title => &[CardField::Title],
            Self::Description => &[CardField::Description],
            Self::Allotted => &[CardField::Allotted, CardField::Spent],
        }
    }
}

impl fmt::Display for EditTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EditTarget {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::Title),
            "description" => Ok(Self::Description),
            "allotted" => Ok(Self::Allotted),
            other => Err(ProtocolError::UnknownField(other.to_string())),
        }
    }
}
