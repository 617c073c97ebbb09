//! The fixed label catalog
//!
//! Labels are a closed set of six kinds - not user-extensible at runtime, so
//! they are an enum rather than an id-keyed entity.

use serde::{Deserialize, Serialize};

/// A label categorizing a card.
///
/// Each kind carries display text and a 6-character hex color tag (without
/// `#`), suitable as a pill background in a board UI.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Front,
    Back,
    Bug,
    Feature,
    Ui,
    Review,
}

impl Label {
    /// Every label kind, in catalog order
    pub const ALL: [Label; 6] = [
        Label::Front,
        Label::Back,
        Label::Bug,
        Label::Feature,
        Label::Ui,
        Label::Review,
    ];

    /// The catalog key (what serializes over the wire)
    pub fn key(&self) -> &'static str {
        match self {
            Label::Front => "front",
            Label::Back => "back",
            Label::Bug => "bug",
            Label::Feature => "feature",
            Label::Ui => "ui",
            Label::Review => "review",
        }
    }

    /// Display text
    pub fn text(&self) -> &'static str {
        match self {
            Label::Front => "Frontend",
            Label::Back => "Backend",
            Label::Bug => "Bug",
            Label::Feature => "Feature",
            Label::Ui => "UI/UX",
            Label::Review => "Review",
        }
    }

    /// 6-character hex color code without #
    pub fn color(&self) -> &'static str {
        match self {
            Label::Front => "38bdf8",
            Label::Back => "34d399",
            Label::Bug => "fb7185",
            Label::Feature => "a78bfa",
            Label::Ui => "fbbf24",
            Label::Review => "9ca3af",
        }
    }

    /// Look up a label by its catalog key
    pub fn from_key(key: &str) -> Option<Label> {
        Label::ALL.into_iter().find(|l| l.key() == key)
    }
}
