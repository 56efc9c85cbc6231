//! Response slimming.
//!
//! The REST API returns several kilobytes per record (embedded links, GUIDs,
//! meta, block data). Tool callers get a few hundred bytes instead: a fixed
//! field selection per entity kind, with HTML stripped from summary fields,
//! summaries truncated, and numeric fields defaulted.
//!
//! Projection is pure. It never performs I/O and never fails; a sparse source
//! record yields a projected record with defaults or omitted fields.

pub mod entities;
pub mod text;

pub use entities::{
    project_category, project_comment, project_comment_content, project_excerpt, project_media,
    project_page, project_plugin, project_post, project_settings, project_settings_update,
    project_site_info, project_tag, project_theme, project_user, resolve_timezone, CategorySource,
    CommentSource, GmtOffset, MediaSource, PageSource, PluginSource, PostSource,
    ProjectedCategory, ProjectedComment, ProjectedMedia, ProjectedPage, ProjectedPlugin,
    ProjectedPost, ProjectedSettings, ProjectedSiteInfo, ProjectedTag, ProjectedTheme,
    ProjectedUser, SettingsSource, SiteInfoSource, TagSource, ThemeSource, Timezone, UserSource,
    COMMENT_MAX_CHARS, EXCERPT_MAX_CHARS,
};
pub use text::{rich_text, strip_and_trim, strip_tags, truncate_chars, RichText};
