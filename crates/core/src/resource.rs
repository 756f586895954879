//! Per-resource field tables.
//!
//! Each resource exposes its updatable fields as a closed enum, so the set of
//! legal field names is fixed at compile time. The JSON key for a field is
//! its [`ResourceField::name`].

use std::fmt;

use crate::validation::FieldRule;

/// Longest title or email the store accepts.
pub const MAX_TEXT_LENGTH: usize = 255;

/// Longest priority label the store accepts.
pub const MAX_PRIORITY_LENGTH: usize = 55;

/// An updatable field of one resource type.
pub trait ResourceField: Copy + Ord + fmt::Debug + 'static {
    /// Entity label used in not-found messages (`"Activity with ID 1 Not Found"`).
    const RESOURCE: &'static str;

    /// Every field, in declaration order. Creation reports the first failing
    /// field in this order.
    const ALL: &'static [Self];

    /// JSON key of the field.
    fn name(self) -> &'static str;

    /// Validation rule the raw value must satisfy.
    fn rule(self) -> FieldRule;

    /// Look a field up by its JSON key.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.name() == name)
    }
}

// ---------------------------------------------------------------------------
// Activity groups
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActivityGroupField {
    Title,
    Email,
}

impl ResourceField for ActivityGroupField {
    const RESOURCE: &'static str = "Activity";
    const ALL: &'static [Self] = &[Self::Title, Self::Email];

    fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Email => "email",
        }
    }

    fn rule(self) -> FieldRule {
        match self {
            Self::Title => FieldRule::NonEmptyText {
                max: MAX_TEXT_LENGTH,
            },
            Self::Email => FieldRule::Email {
                max: MAX_TEXT_LENGTH,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Todo items
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TodoItemField {
    ActivityGroupId,
    Title,
    IsActive,
    Priority,
}

impl ResourceField for TodoItemField {
    const RESOURCE: &'static str = "Todo";
    const ALL: &'static [Self] = &[
        Self::ActivityGroupId,
        Self::Title,
        Self::IsActive,
        Self::Priority,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::ActivityGroupId => "activity_group_id",
            Self::Title => "title",
            Self::IsActive => "is_active",
            Self::Priority => "priority",
        }
    }

    fn rule(self) -> FieldRule {
        match self {
            Self::ActivityGroupId => FieldRule::PositiveId,
            Self::Title => FieldRule::NonEmptyText {
                max: MAX_TEXT_LENGTH,
            },
            Self::Priority => FieldRule::NonEmptyText {
                max: MAX_PRIORITY_LENGTH,
            },
            Self::IsActive => FieldRule::Boolean,
        }
    }
}
