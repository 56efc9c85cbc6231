//! Closed value sets and defaults shared by several tools.

use serde::{Deserialize, Serialize};

/// Publication status of a post or page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Publish,
    Future,
    #[default]
    Draft,
    Pending,
    Private,
    Trash,
}

impl PostStatus {
    /// Returns the REST API spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Publish => "publish",
            Self::Future => "future",
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Private => "private",
            Self::Trash => "trash",
        }
    }

    /// JSON Schema `enum` values.
    pub const VALUES: [&'static str; 6] =
        ["publish", "future", "draft", "pending", "private", "trash"];
}

/// Moderation status of a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStatus {
    Approve,
    Hold,
    Spam,
    Trash,
}

impl CommentStatus {
    /// Returns the REST API spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Hold => "hold",
            Self::Spam => "spam",
            Self::Trash => "trash",
        }
    }

    /// JSON Schema `enum` values.
    pub const VALUES: [&'static str; 4] = ["approve", "hold", "spam", "trash"];
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Activation filter for plugins and themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationStatus {
    Active,
    Inactive,
}

impl ActivationStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

/// Media library type filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    Audio,
    Application,
}

impl MediaType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Application => "application",
        }
    }
}

/// Sort key for post listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PostOrderBy {
    #[default]
    Date,
    Title,
    Modified,
    Id,
}

impl PostOrderBy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Title => "title",
            Self::Modified => "modified",
            Self::Id => "id",
        }
    }
}

/// Sort key for page listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageOrderBy {
    Date,
    Title,
    Modified,
    #[default]
    MenuOrder,
}

impl PageOrderBy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Title => "title",
            Self::Modified => "modified",
            Self::MenuOrder => "menu_order",
        }
    }
}

/// Kind of object a navigation menu item points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuObjectType {
    #[default]
    Custom,
    PostType,
    Taxonomy,
}

pub(crate) const fn page_one() -> u64 {
    1
}

pub(crate) const fn per_page_10() -> u64 {
    10
}

pub(crate) const fn per_page_20() -> u64 {
    20
}

pub(crate) const fn per_page_50() -> u64 {
    50
}

pub(crate) const fn per_page_100() -> u64 {
    100
}

pub(crate) const fn yes() -> bool {
    true
}

pub(crate) const fn desc() -> SortOrder {
    SortOrder::Desc
}

pub(crate) const fn asc() -> SortOrder {
    SortOrder::Asc
}

/// Encodes a `force` flag the way the REST API expects it.
pub(crate) fn force_flag(force: bool) -> u32 {
    u32::from(force)
}
