//! Source and projected record types, one pair per entity kind.
//!
//! Source types mirror the REST API response with every field optional, so
//! a sparse response still deserialises. Projected types hold only what a
//! tool caller needs; absent pass-through fields are omitted when serialised.

use serde::{Deserialize, Serialize};

use crate::projection::text::{plain_summary, rich_text, strip_and_trim, RichText};

/// Maximum excerpt length, in characters, after tag stripping.
pub const EXCERPT_MAX_CHARS: usize = 200;

/// Maximum comment content length, in characters, after tag stripping.
pub const COMMENT_MAX_CHARS: usize = 300;

// ==================== Posts ====================

/// A post as returned by `/wp/v2/posts`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostSource {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: Option<RichText>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub modified: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub excerpt: Option<RichText>,
    #[serde(default)]
    pub content: Option<RichText>,
    #[serde(default)]
    pub author: Option<u64>,
    #[serde(default)]
    pub categories: Option<Vec<u64>>,
    #[serde(default)]
    pub tags: Option<Vec<u64>>,
    #[serde(default)]
    pub featured_media: Option<u64>,
}

/// Compact post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectedPost {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Plain text, at most [`EXCERPT_MAX_CHARS`] characters.
    pub excerpt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<u64>>,
    /// `null` when the post has no featured image.
    pub featured_media: Option<u64>,
    /// Full rendered HTML, only when explicitly requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Projects an excerpt: tags stripped, trimmed, then cut to 200 characters.
#[must_use]
pub fn project_excerpt(excerpt: Option<&RichText>) -> String {
    plain_summary(excerpt, EXCERPT_MAX_CHARS)
}

/// Projects a post.
#[must_use]
pub fn project_post(post: &PostSource) -> ProjectedPost {
    ProjectedPost {
        id: post.id,
        title: rich_text(post.title.as_ref()),
        slug: post.slug.clone(),
        status: post.status.clone(),
        date: post.date.clone(),
        modified: post.modified.clone(),
        link: post.link.clone(),
        excerpt: project_excerpt(post.excerpt.as_ref()),
        author: post.author,
        categories: post.categories.clone(),
        tags: post.tags.clone(),
        featured_media: post.featured_media.filter(|id| *id != 0),
        content: None,
    }
}

// ==================== Pages ====================

/// A page as returned by `/wp/v2/pages`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageSource {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: Option<RichText>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub modified: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub content: Option<RichText>,
    #[serde(default)]
    pub parent: Option<u64>,
    #[serde(default)]
    pub menu_order: Option<i64>,
}

/// Compact page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectedPage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub parent: u64,
    pub menu_order: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Projects a page.
#[must_use]
pub fn project_page(page: &PageSource) -> ProjectedPage {
    ProjectedPage {
        id: page.id,
        title: rich_text(page.title.as_ref()),
        slug: page.slug.clone(),
        status: page.status.clone(),
        date: page.date.clone(),
        modified: page.modified.clone(),
        link: page.link.clone(),
        parent: page.parent.unwrap_or(0),
        menu_order: page.menu_order.unwrap_or(0),
        content: None,
    }
}

// ==================== Users ====================

/// A user as returned by `/wp/v2/users`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserSource {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub roles: Option<Vec<String>>,
}

/// Compact user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectedUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
}

/// Projects a user.
#[must_use]
pub fn project_user(user: &UserSource) -> ProjectedUser {
    ProjectedUser {
        id: user.id,
        name: user.name.clone(),
        slug: user.slug.clone(),
        email: user.email.clone(),
        roles: user.roles.clone(),
    }
}

// ==================== Media ====================

/// A media item as returned by `/wp/v2/media`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaSource {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: Option<RichText>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Compact media item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectedMedia {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    pub alt_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Projects a media item.
#[must_use]
pub fn project_media(media: &MediaSource) -> ProjectedMedia {
    ProjectedMedia {
        id: media.id,
        title: rich_text(media.title.as_ref()),
        source_url: media.source_url.clone(),
        mime_type: media.mime_type.clone(),
        alt_text: media.alt_text.clone().unwrap_or_default(),
        date: media.date.clone(),
    }
}

// ==================== Plugins ====================

/// A plugin as returned by `/wp/v2/plugins`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PluginSource {
    /// Identifier such as `akismet/akismet.php`.
    #[serde(default)]
    pub plugin: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub author: Option<RichText>,
}

/// Compact plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectedPlugin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub author: String,
}

/// Projects a plugin.
#[must_use]
pub fn project_plugin(plugin: &PluginSource) -> ProjectedPlugin {
    ProjectedPlugin {
        plugin: plugin.plugin.clone(),
        name: plugin.name.clone(),
        status: plugin.status.clone(),
        version: plugin.version.clone(),
        author: stripped_author(plugin.author.as_ref()),
    }
}

// ==================== Themes ====================

/// A theme as returned by `/wp/v2/themes`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeSource {
    #[serde(default)]
    pub stylesheet: Option<String>,
    #[serde(default)]
    pub name: Option<RichText>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub author: Option<RichText>,
}

/// Compact theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectedTheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stylesheet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub author: String,
}

/// Projects a theme.
#[must_use]
pub fn project_theme(theme: &ThemeSource) -> ProjectedTheme {
    ProjectedTheme {
        stylesheet: theme.stylesheet.clone(),
        name: rich_text(theme.name.as_ref()),
        status: theme.status.clone(),
        version: theme.version.clone(),
        author: stripped_author(theme.author.as_ref()),
    }
}

fn stripped_author(author: Option<&RichText>) -> String {
    author
        .and_then(RichText::text)
        .map(strip_and_trim)
        .unwrap_or_default()
}

// ==================== Comments ====================

/// A comment as returned by `/wp/v2/comments`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentSource {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub post: Option<u64>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub content: Option<RichText>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Compact comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectedComment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    /// Plain text, at most [`COMMENT_MAX_CHARS`] characters.
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Projects comment content: tags stripped, trimmed, then cut to 300 characters.
#[must_use]
pub fn project_comment_content(content: Option<&RichText>) -> String {
    plain_summary(content, COMMENT_MAX_CHARS)
}

/// Projects a comment.
#[must_use]
pub fn project_comment(comment: &CommentSource) -> ProjectedComment {
    ProjectedComment {
        id: comment.id,
        post: comment.post,
        author_name: comment.author_name.clone(),
        content: project_comment_content(comment.content.as_ref()),
        date: comment.date.clone(),
        status: comment.status.clone(),
    }
}

// ==================== Taxonomies ====================

/// A category as returned by `/wp/v2/categories`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategorySource {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub parent: Option<u64>,
    #[serde(default)]
    pub count: Option<u64>,
}

/// Compact category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectedCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub parent: u64,
    pub count: u64,
}

/// Projects a category.
#[must_use]
pub fn project_category(category: &CategorySource) -> ProjectedCategory {
    ProjectedCategory {
        id: category.id,
        name: category.name.clone(),
        slug: category.slug.clone(),
        parent: category.parent.unwrap_or(0),
        count: category.count.unwrap_or(0),
    }
}

/// A tag as returned by `/wp/v2/tags`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TagSource {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
}

/// Compact tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectedTag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub count: u64,
}

/// Projects a tag.
#[must_use]
pub fn project_tag(tag: &TagSource) -> ProjectedTag {
    ProjectedTag {
        id: tag.id,
        name: tag.name.clone(),
        slug: tag.slug.clone(),
        count: tag.count.unwrap_or(0),
    }
}

// ==================== Site ====================

/// A UTC offset, which WordPress reports as either a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GmtOffset {
    /// Numeric offset in hours, e.g. `5.5`.
    Number(serde_json::Number),
    /// Textual offset, e.g. `"2"`.
    Text(String),
}

/// The site's timezone: a named zone or a raw offset, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Timezone {
    /// IANA zone name such as `Europe/Berlin`.
    Name(String),
    /// Raw offset from UTC.
    Offset(GmtOffset),
}

/// The REST API index returned by `/wp-json/`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteInfoSource {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub home: Option<String>,
    #[serde(default)]
    pub timezone_string: Option<String>,
    #[serde(default)]
    pub gmt_offset: Option<GmtOffset>,
    #[serde(default)]
    pub namespaces: Option<Vec<String>>,
}

/// Compact site information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectedSiteInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<Timezone>,
    /// Number of registered namespaces; the list itself is dropped.
    pub namespaces: usize,
}

/// Resolves the timezone, preferring a non-empty zone name over the offset.
#[must_use]
pub fn resolve_timezone(
    timezone_string: Option<&str>,
    gmt_offset: Option<&GmtOffset>,
) -> Option<Timezone> {
    match timezone_string.filter(|s| !s.is_empty()) {
        Some(name) => Some(Timezone::Name(name.to_string())),
        None => gmt_offset
            .filter(|offset| !matches!(offset, GmtOffset::Text(s) if s.is_empty()))
            .cloned()
            .map(Timezone::Offset),
    }
}

/// Projects the site index.
#[must_use]
pub fn project_site_info(info: &SiteInfoSource) -> ProjectedSiteInfo {
    ProjectedSiteInfo {
        name: info.name.clone(),
        description: info.description.clone(),
        url: info.url.clone(),
        home: info.home.clone(),
        timezone: resolve_timezone(info.timezone_string.as_deref(), info.gmt_offset.as_ref()),
        namespaces: info.namespaces.as_ref().map_or(0, Vec::len),
    }
}

/// Site settings as returned by `/wp/v2/settings`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsSource {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub timezone_string: Option<String>,
    #[serde(default)]
    pub date_format: Option<String>,
    #[serde(default)]
    pub time_format: Option<String>,
    #[serde(default)]
    pub posts_per_page: Option<u64>,
    /// Active theme, echoed back after switching themes.
    #[serde(default)]
    pub stylesheet: Option<String>,
}

/// Compact site settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectedSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posts_per_page: Option<u64>,
}

/// Projects the full settings view.
#[must_use]
pub fn project_settings(settings: &SettingsSource) -> ProjectedSettings {
    ProjectedSettings {
        title: settings.title.clone(),
        description: settings.description.clone(),
        timezone: settings.timezone_string.clone(),
        date_format: settings.date_format.clone(),
        time_format: settings.time_format.clone(),
        posts_per_page: settings.posts_per_page,
    }
}

/// Projects the settings echoed back after an update: title, description, timezone.
#[must_use]
pub fn project_settings_update(settings: &SettingsSource) -> ProjectedSettings {
    ProjectedSettings {
        date_format: None,
        time_format: None,
        posts_per_page: None,
        ..project_settings(settings)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn from<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> T {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn post_full_shape() {
        let source: PostSource = from(json!({
            "id": 7,
            "title": {"rendered": "Hello &amp; welcome"},
            "slug": "hello",
            "status": "publish",
            "date": "2024-01-01T10:00:00",
            "modified": "2024-01-02T10:00:00",
            "link": "https://example.com/hello",
            "excerpt": {"rendered": "<p>Short intro</p>\n", "protected": false},
            "content": {"rendered": "<p>Body</p>"},
            "author": 1,
            "categories": [3, 4],
            "tags": [],
            "featured_media": 12,
            "guid": {"rendered": "https://example.com/?p=7"},
            "_links": {}
        }));

        let post = project_post(&source);
        assert_eq!(post.id, Some(7));
        assert_eq!(post.title.as_deref(), Some("Hello &amp; welcome"));
        assert_eq!(post.excerpt, "Short intro");
        assert_eq!(post.categories, Some(vec![3, 4]));
        assert_eq!(post.featured_media, Some(12));
        assert!(post.content.is_none());
    }

    #[test]
    fn post_featured_media_zero_is_null() {
        let post = project_post(&from(json!({"id": 1, "featured_media": 0})));
        assert_eq!(post.featured_media, None);

        let value = serde_json::to_value(&post).unwrap();
        assert!(value["featured_media"].is_null());
        assert!(value.get("title").is_none());
        assert_eq!(value["excerpt"], "");
    }

    #[test]
    fn excerpt_truncates_plain_text_to_200() {
        let long = "a".repeat(250);
        let excerpt = project_excerpt(Some(&RichText::Plain(long.clone())));
        assert_eq!(excerpt.chars().count(), 200);
        assert_eq!(excerpt, &long[..200]);
    }

    #[test]
    fn excerpt_strips_before_truncating() {
        // 180 visible characters wrapped in enough markup to exceed 200.
        let visible = "b".repeat(180);
        let html = format!("<p class=\"intro-paragraph\"><strong>{visible}</strong></p>");
        assert!(html.len() > 200);

        let excerpt = project_excerpt(Some(&RichText::Structured {
            rendered: Some(html),
            raw: None,
        }));
        assert_eq!(excerpt, visible);
    }

    #[test]
    fn comment_content_truncates_to_300() {
        let html = format!("<p>{}</p>", "c".repeat(400));
        let comment = project_comment(&from(json!({
            "id": 5,
            "post": 7,
            "author_name": "Ann",
            "content": {"rendered": html},
            "status": "approved"
        })));
        assert_eq!(comment.content.chars().count(), 300);
        assert!(comment.content.chars().all(|c| c == 'c'));
        assert_eq!(comment.post, Some(7));
    }

    #[test]
    fn comment_without_content_is_empty() {
        let comment = project_comment(&CommentSource::default());
        assert_eq!(comment.content, "");
        assert!(comment.id.is_none());
    }

    #[test]
    fn page_defaults() {
        let page = project_page(&from(json!({"id": 2, "title": "About"})));
        assert_eq!(page.parent, 0);
        assert_eq!(page.menu_order, 0);
        assert_eq!(page.title.as_deref(), Some("About"));
    }

    #[test]
    fn media_alt_text_default() {
        let media = project_media(&from(json!({
            "id": 9,
            "title": {"rendered": "Logo"},
            "source_url": "https://example.com/logo.png",
            "mime_type": "image/png"
        })));
        assert_eq!(media.alt_text, "");
        assert_eq!(media.title.as_deref(), Some("Logo"));
    }

    #[test]
    fn user_pass_through() {
        let user = project_user(&from(json!({
            "id": 1,
            "name": "Admin",
            "slug": "admin",
            "roles": ["administrator"],
            "avatar_urls": {"24": "x"}
        })));
        assert_eq!(user.roles, Some(vec!["administrator".to_string()]));
        assert!(user.email.is_none());

        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("email").is_none());
    }

    #[test]
    fn plugin_author_is_stripped() {
        let plugin = project_plugin(&from(json!({
            "plugin": "akismet/akismet",
            "name": "Akismet",
            "status": "active",
            "version": "5.3",
            "author": "<a href=\"https://automattic.com\">Automattic</a> "
        })));
        assert_eq!(plugin.author, "Automattic");
        assert_eq!(plugin.plugin.as_deref(), Some("akismet/akismet"));
    }

    #[test]
    fn theme_handles_rendered_and_plain_author() {
        let rendered = project_theme(&from(json!({
            "stylesheet": "twentytwentyfour",
            "name": {"raw": "Twenty Twenty-Four", "rendered": "Twenty Twenty-Four"},
            "author": {"raw": "the WordPress team", "rendered": "<a href=\"x\">the WordPress team</a>"}
        })));
        assert_eq!(rendered.author, "the WordPress team");
        assert_eq!(rendered.name.as_deref(), Some("Twenty Twenty-Four"));

        let plain = project_theme(&from(json!({"stylesheet": "t", "author": "Someone"})));
        assert_eq!(plain.author, "Someone");

        let missing = project_theme(&ThemeSource::default());
        assert_eq!(missing.author, "");
    }

    #[test]
    fn taxonomy_defaults() {
        let category = project_category(&from(json!({"id": 1, "name": "News", "slug": "news"})));
        assert_eq!(category.parent, 0);
        assert_eq!(category.count, 0);

        let tag = project_tag(&from(json!({"id": 2, "name": "rust", "count": 4})));
        assert_eq!(tag.count, 4);
    }

    #[test]
    fn site_info_prefers_timezone_name() {
        let info = project_site_info(&from(json!({
            "name": "Blog",
            "timezone_string": "Europe/Berlin",
            "gmt_offset": 1,
            "namespaces": ["oembed/1.0", "wp/v2", "wp-site-health/v1"]
        })));
        assert_eq!(info.timezone, Some(Timezone::Name("Europe/Berlin".to_string())));
        assert_eq!(info.namespaces, 3);
    }

    #[test]
    fn site_info_falls_back_to_offset() {
        let info = project_site_info(&from(json!({"timezone_string": "", "gmt_offset": "2"})));
        assert_eq!(info.timezone, Some(Timezone::Offset(GmtOffset::Text("2".to_string()))));
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["timezone"], "2");
    }

    #[test]
    fn site_info_without_timezone() {
        let info = project_site_info(&SiteInfoSource::default());
        assert!(info.timezone.is_none());
        assert_eq!(info.namespaces, 0);

        let value = serde_json::to_value(&info).unwrap();
        assert!(value.get("timezone").is_none());
        assert!(value.get("namespaces").is_some());
    }

    #[test]
    fn numeric_offset_serialises_as_number() {
        let info = project_site_info(&from(json!({"gmt_offset": 5.5})));
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["timezone"], json!(5.5));
    }

    #[test]
    fn settings_update_drops_formats() {
        let source: SettingsSource = from(json!({
            "title": "Blog",
            "description": "Tagline",
            "timezone_string": "UTC",
            "date_format": "F j, Y",
            "time_format": "g:i a",
            "posts_per_page": 10
        }));
        let full = project_settings(&source);
        assert_eq!(full.posts_per_page, Some(10));

        let update = project_settings_update(&source);
        assert_eq!(update.title.as_deref(), Some("Blog"));
        assert!(update.date_format.is_none());
        assert!(update.posts_per_page.is_none());
    }

    #[test]
    fn projection_is_deterministic() {
        let source: PostSource = from(json!({
            "id": 3,
            "excerpt": {"rendered": "<em>x</em>"}
        }));
        assert_eq!(project_post(&source), project_post(&source));
    }
}
