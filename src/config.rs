//! Contest configuration.
//!
//! Handles loading, validating, and merging `contest.toml`. Every key is
//! optional: stock defaults describe the LMAC collage contest, and a user file
//! overrides just the values it names.
//!
//! ## Configuration Options
//!
//! ```toml
//! [feed]
//! node = "https://api.deathwing.me"   # Hive JSON-RPC node
//!
//! [entries]
//! canonical_host = "peakd.com"        # Mirror links are rewritten to this host
//! mirror_hosts = ["hive.blog", "ecency.com"]
//! community = "hive-174695"           # Category segment of entry links
//! fallback_image_url = "https://files.peakd.com/..."
//!
//! [moderation]
//! blocklist = ["..."]                 # Authors whose entries never count
//! moderators = ["lmac"]               # A vote from one of these accepts an entry
//!
//! [poster]
//! image_proxy = "https://images.hive.blog"
//! thumbnail_width = 160
//! columns = 20
//! margin = 10
//! skip_default_images = true
//! font = "MadhouseCC0.ttf"
//! font_size = 16.0
//! label_color = [255, 255, 255]
//! shadow_color = [0, 0, 0]
//! background = [0, 0, 0, 0]
//! output = "GeneratedThumbnailPoster.png"
//!
//! [document]
//! templates_dir = "templates"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Authors excluded from every contest round.
const DEFAULT_BLOCKLIST: &[&str] = &[
    "abdt", "abiproud", "adebayo22", "airscam00", "aliframadhan", "aniascs", "anne0208",
    "aris-indonesia", "artrage", "assegai", "ayahdindin", "belovedave", "boeh-u-leuping",
    "bulukat2seung", "camila-jhon", "captain70", "chipino", "daniella619", "danladi",
    "deep.crypto", "dreamchasers", "dwixer", "ellenklech", "emerline", "ferart01", "fibre1",
    "filipz", "findoutmark", "fudin-jfr", "fundin-jfr", "gabriella3594", "getovertools",
    "ghinamidrara", "giftjames", "gomessteem", "hafis", "hardiericsson", "herman-sbd",
    "holy.moly", "iamdenny", "icon-bassey", "jhokenecty", "kadyrova", "kalkulus001",
    "kamariah", "kater001", "khantika", "kingobonnaya", "lamboe", "lexi01", "lilpen", "loco88",
    "mawalampoehbujok", "mcaspectacular", "mcluz", "mizuno35", "mnzie01", "mochi3", "morenxo",
    "nabilswap", "nekbungoeng", "nellysteem", "nodzz", "nurudeen081", "oan-iata",
    "oliver-liam", "olenaginal", "ontarget0", "owleeya", "peazy001", "pictz", "poundrickshaw",
    "princedave12", "quimby-art", "raquel19", "realmaya", "sintiana", "starksteem", "steps100",
    "tailah.bayu1", "technoart", "techy22", "tember", "twenty4", "v0lga", "vareya",
    "weenyqueen", "weirdartist", "whizchick", "yoe1974",
];

/// Upper bounds on the poster grid; the canvas has to fit in memory.
pub const MAX_COLUMNS: u32 = 1000;
pub const MAX_THUMBNAIL_WIDTH: u32 = 4096;
pub const MAX_MARGIN: u32 = 1024;

const DEFAULT_FALLBACK_IMAGE_URL: &str = "https://files.peakd.com/file/peakd-hive/quantumg/23tSh9ZCk2m46Yy9XQeQErkwL99fsdQjsxH9A6T4WKyi7BCDs3y4Q6pE3zMfDF4ggv5TS.png";

/// Contest configuration loaded from `contest.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContestConfig {
    /// Where comments and votes are fetched from.
    pub feed: FeedConfig,
    /// How entry links are recognized and normalized.
    pub entries: EntriesConfig,
    /// Who may not enter and whose vote accepts an entry.
    pub moderation: ModerationConfig,
    /// Thumbnail poster layout and output.
    pub poster: PosterConfig,
    /// Text document templates.
    pub document: DocumentConfig,
}

impl ContestConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.feed.node.trim().is_empty() {
            return Err(ConfigError::Validation("feed.node must not be empty".into()));
        }
        if self.entries.canonical_host.trim().is_empty() {
            return Err(ConfigError::Validation(
                "entries.canonical_host must not be empty".into(),
            ));
        }
        if self.entries.fallback_image_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "entries.fallback_image_url must not be empty".into(),
            ));
        }
        if self.moderation.moderators.is_empty() {
            return Err(ConfigError::Validation(
                "moderation.moderators must not be empty".into(),
            ));
        }
        if self.poster.columns == 0 {
            return Err(ConfigError::Validation(
                "poster.columns must be at least 1".into(),
            ));
        }
        if self.poster.thumbnail_width == 0 {
            return Err(ConfigError::Validation(
                "poster.thumbnail_width must be at least 1".into(),
            ));
        }
        if self.poster.columns > MAX_COLUMNS {
            return Err(ConfigError::Validation(format!(
                "poster.columns must be at most {MAX_COLUMNS}"
            )));
        }
        if self.poster.thumbnail_width > MAX_THUMBNAIL_WIDTH {
            return Err(ConfigError::Validation(format!(
                "poster.thumbnail_width must be at most {MAX_THUMBNAIL_WIDTH}"
            )));
        }
        if self.poster.margin > MAX_MARGIN {
            return Err(ConfigError::Validation(format!(
                "poster.margin must be at most {MAX_MARGIN}"
            )));
        }
        if self.poster.canvas_width().is_none() {
            return Err(ConfigError::Validation(
                "poster canvas width overflows: columns * (thumbnail_width + margin) + margin"
                    .into(),
            ));
        }
        if self.poster.font_size.is_nan() || self.poster.font_size <= 0.0 {
            return Err(ConfigError::Validation(
                "poster.font_size must be positive".into(),
            ));
        }
        if self.poster.image_proxy.trim().is_empty() {
            return Err(ConfigError::Validation(
                "poster.image_proxy must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Hive API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeedConfig {
    /// JSON-RPC endpoint of a Hive API node.
    pub node: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            node: "https://api.deathwing.me".to_string(),
        }
    }
}

/// Entry link recognition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EntriesConfig {
    /// Front-end host all submission links are normalized to.
    pub canonical_host: String,
    /// Other front-ends whose links are accepted and rewritten.
    pub mirror_hosts: Vec<String>,
    /// Community category that prefixes entry links on the canonical host.
    pub community: String,
    /// Placeholder image for entries whose comment carried no image link.
    pub fallback_image_url: String,
}

impl EntriesConfig {
    /// `https://<canonical_host>/<community>/`, the prefix stripped from a
    /// submission link to get its lookup key.
    pub fn community_prefix(&self) -> String {
        if self.community.is_empty() {
            format!("https://{}/", self.canonical_host)
        } else {
            format!("https://{}/{}/", self.canonical_host, self.community)
        }
    }
}

impl Default for EntriesConfig {
    fn default() -> Self {
        Self {
            canonical_host: "peakd.com".to_string(),
            mirror_hosts: vec!["hive.blog".to_string(), "ecency.com".to_string()],
            community: "hive-174695".to_string(),
            fallback_image_url: DEFAULT_FALLBACK_IMAGE_URL.to_string(),
        }
    }
}

/// Moderation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModerationConfig {
    /// Authors whose entries are always dropped (exact, case-sensitive).
    pub blocklist: Vec<String>,
    /// Accounts whose vote on a submission marks it as accepted.
    pub moderators: Vec<String>,
}

impl ModerationConfig {
    pub fn blocklist_set(&self) -> HashSet<String> {
        self.blocklist.iter().cloned().collect()
    }

    pub fn moderator_set(&self) -> HashSet<String> {
        self.moderators.iter().cloned().collect()
    }
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            blocklist: DEFAULT_BLOCKLIST.iter().map(|s| s.to_string()).collect(),
            moderators: vec!["lmac".to_string()],
        }
    }
}

/// Thumbnail poster settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PosterConfig {
    /// Resize proxy; images are requested as `<proxy>/<width>x0/<url>`.
    pub image_proxy: String,
    /// Target thumbnail width in pixels.
    pub thumbnail_width: u32,
    /// Thumbnails per row.
    pub columns: u32,
    /// Gap around and between thumbnails in pixels.
    pub margin: u32,
    /// Leave entries that only have the fallback image off the poster.
    pub skip_default_images: bool,
    /// TrueType font for the author captions.
    pub font: PathBuf,
    /// Caption height in pixels.
    pub font_size: f32,
    /// Caption fill color (RGB).
    pub label_color: [u8; 3],
    /// Caption outline color (RGB), drawn one pixel down-right of the label.
    pub shadow_color: [u8; 3],
    /// Canvas background (RGBA); transparent by default.
    pub background: [u8; 4],
    /// Poster file name.
    pub output: PathBuf,
}

impl PosterConfig {
    /// `columns * (thumbnail_width + margin) + margin`, or `None` when it
    /// overflows `u32`.
    pub fn canvas_width(&self) -> Option<u32> {
        self.thumbnail_width
            .checked_add(self.margin)?
            .checked_mul(self.columns)?
            .checked_add(self.margin)
    }
}

impl Default for PosterConfig {
    fn default() -> Self {
        Self {
            image_proxy: "https://images.hive.blog".to_string(),
            thumbnail_width: 160,
            columns: 20,
            margin: 10,
            skip_default_images: true,
            font: PathBuf::from("MadhouseCC0.ttf"),
            font_size: 16.0,
            label_color: [255, 255, 255],
            shadow_color: [0, 0, 0],
            background: [0, 0, 0, 0],
            output: PathBuf::from("GeneratedThumbnailPoster.png"),
        }
    }
}

/// Text document settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocumentConfig {
    /// Directory holding the `template_{html,md}_{body,image}.tpl` files.
    pub templates_dir: PathBuf,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            templates_dir: PathBuf::from("templates"),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(ContestConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely, so a user
///   `blocklist` replaces the stock list rather than extending it.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<ContestConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: ContestConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load `contest.toml` from `path`, falling back to stock defaults when the
/// file is absent.
pub fn load_config(path: &Path) -> Result<ContestConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(path)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `contest.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Contest Thumbnailer Configuration
# =================================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Comment feed
# ---------------------------------------------------------------------------
[feed]
# Hive API node used for replies and votes.
node = "https://api.deathwing.me"

# ---------------------------------------------------------------------------
# Entry links
# ---------------------------------------------------------------------------
[entries]
# Submission links on any of these hosts are accepted; mirror hosts are
# rewritten to the canonical host.
canonical_host = "peakd.com"
mirror_hosts = ["hive.blog", "ecency.com"]

# Community category in front of entry links (https://peakd.com/<community>/@a/p).
community = "hive-174695"

# Placeholder for entries whose comment has no image link.
fallback_image_url = "https://files.peakd.com/file/peakd-hive/quantumg/23tSh9ZCk2m46Yy9XQeQErkwL99fsdQjsxH9A6T4WKyi7BCDs3y4Q6pE3zMfDF4ggv5TS.png"

# ---------------------------------------------------------------------------
# Moderation
# ---------------------------------------------------------------------------
[moderation]
# Accounts whose vote on a submission accepts it as an entry.
moderators = ["lmac"]

# Authors whose entries are always dropped. Setting this replaces the
# built-in list entirely.
# blocklist = ["someone", "someone-else"]

# ---------------------------------------------------------------------------
# Thumbnail poster
# ---------------------------------------------------------------------------
[poster]
# Resize proxy, requested as <proxy>/<width>x0/<image url>.
image_proxy = "https://images.hive.blog"

# Grid in pixels. Limits: thumbnail_width 1-4096, columns 1-1000, margin 0-1024.
thumbnail_width = 160
columns = 20
margin = 10

# Leave entries without their own image off the poster.
skip_default_images = true

# Caption font (TrueType). Captions are skipped if it cannot be loaded.
font = "MadhouseCC0.ttf"
font_size = 16.0
label_color = [255, 255, 255]
shadow_color = [0, 0, 0]

# RGBA; fully transparent by default.
background = [0, 0, 0, 0]

output = "GeneratedThumbnailPoster.png"

# ---------------------------------------------------------------------------
# Text documents
# ---------------------------------------------------------------------------
[document]
# Holds template_html_body.tpl, template_html_image.tpl,
# template_md_body.tpl and template_md_image.tpl.
templates_dir = "templates"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_matches_contest() {
        let config = ContestConfig::default();
        assert_eq!(config.feed.node, "https://api.deathwing.me");
        assert_eq!(config.entries.canonical_host, "peakd.com");
        assert_eq!(config.entries.mirror_hosts, vec!["hive.blog", "ecency.com"]);
        assert_eq!(config.moderation.moderators, vec!["lmac"]);
        assert_eq!(config.poster.thumbnail_width, 160);
        assert_eq!(config.poster.columns, 20);
        assert_eq!(config.poster.margin, 10);
        assert!(config.poster.skip_default_images);
        assert_eq!(config.poster.background, [0, 0, 0, 0]);
    }

    #[test]
    fn default_blocklist_is_populated() {
        let blocklist = ContestConfig::default().moderation.blocklist_set();
        assert!(blocklist.contains("abdt"));
        assert!(blocklist.contains("yoe1974"));
        assert!(!blocklist.contains("shaka"));
    }

    #[test]
    fn community_prefix_includes_category() {
        let entries = EntriesConfig::default();
        assert_eq!(entries.community_prefix(), "https://peakd.com/hive-174695/");
    }

    #[test]
    fn community_prefix_without_category() {
        let entries = EntriesConfig {
            community: String::new(),
            ..EntriesConfig::default()
        };
        assert_eq!(entries.community_prefix(), "https://peakd.com/");
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
[poster]
columns = 8
"#;
        let config: ContestConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.poster.columns, 8);
        // Defaults preserved
        assert_eq!(config.poster.thumbnail_width, 160);
        assert_eq!(config.entries.canonical_host, "peakd.com");
    }

    #[test]
    fn user_blocklist_replaces_stock_list() {
        let base = stock_defaults_value().unwrap();
        let overlay: toml::Value = toml::from_str(
            r#"
[moderation]
blocklist = ["spammer"]
"#,
        )
        .unwrap();
        let config = resolve_config(base, Some(overlay)).unwrap();
        assert_eq!(config.moderation.blocklist, vec!["spammer"]);
        assert_eq!(config.moderation.moderators, vec!["lmac"]);
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("contest.toml")).unwrap();
        assert_eq!(config.poster.columns, 20);
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("contest.toml");
        fs::write(
            &path,
            r#"
[feed]
node = "https://api.hive.blog"

[poster]
thumbnail_width = 200
label_color = [255, 255, 0]
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.feed.node, "https://api.hive.blog");
        assert_eq!(config.poster.thumbnail_width, 200);
        assert_eq!(config.poster.label_color, [255, 255, 0]);
        assert_eq!(config.poster.margin, 10);
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("contest.toml");
        fs::write(&path, "this is not valid toml [[[").unwrap();

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("contest.toml");
        fs::write(
            &path,
            r#"
[poster]
columns = 0
"#,
        )
        .unwrap();

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_table_merge() {
        let base: toml::Value = toml::from_str(
            r#"
[poster]
columns = 20
margin = 10
"#,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r#"
[poster]
columns = 5
"#,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let poster = merged.get("poster").unwrap();
        assert_eq!(poster.get("columns").unwrap().as_integer(), Some(5));
        assert_eq!(poster.get("margin").unwrap().as_integer(), Some(10));
    }

    #[test]
    fn merge_toml_array_is_replaced() {
        let base: toml::Value = toml::from_str(r#"hosts = ["a", "b"]"#).unwrap();
        let overlay: toml::Value = toml::from_str(r#"hosts = ["c"]"#).unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("hosts").unwrap().as_array().unwrap().len(), 1);
    }

    // =========================================================================
    // Unknown key rejection tests
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let toml_str = r#"
[poster]
colums = 5
"#;
        let result: Result<ContestConfig, _> = toml::from_str(toml_str);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        let result: Result<ContestConfig, _> = toml::from_str("[postr]\ncolumns = 5\n");
        assert!(result.is_err());
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(ContestConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_zero_thumbnail_width() {
        let mut config = ContestConfig::default();
        config.poster.thumbnail_width = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("thumbnail_width"));
    }

    #[test]
    fn validate_empty_moderators() {
        let mut config = ContestConfig::default();
        config.moderation.moderators.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_empty_fallback() {
        let mut config = ContestConfig::default();
        config.entries.fallback_image_url = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_oversized_columns() {
        let mut config = ContestConfig::default();
        config.poster.columns = 30_000_000;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("columns"));
    }

    #[test]
    fn validate_oversized_thumbnail_width_and_margin() {
        let mut config = ContestConfig::default();
        config.poster.thumbnail_width = u32::MAX;
        assert!(config.validate().is_err());

        let mut config = ContestConfig::default();
        config.poster.margin = u32::MAX;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("margin"));
    }

    #[test]
    fn validate_accepts_grid_at_the_limits() {
        let mut config = ContestConfig::default();
        config.poster.columns = MAX_COLUMNS;
        config.poster.thumbnail_width = MAX_THUMBNAIL_WIDTH;
        config.poster.margin = MAX_MARGIN;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn canvas_width_matches_grid_formula() {
        let poster = PosterConfig::default();
        assert_eq!(poster.canvas_width(), Some(20 * (160 + 10) + 10));
    }

    #[test]
    fn canvas_width_overflow_is_none() {
        let poster = PosterConfig {
            columns: 30_000_000,
            ..PosterConfig::default()
        };
        assert_eq!(poster.canvas_width(), None);
    }

    #[test]
    fn validate_font_size() {
        let mut config = ContestConfig::default();
        config.poster.font_size = 0.0;
        assert!(config.validate().is_err());
    }

    // =========================================================================
    // stock_config_toml tests
    // =========================================================================

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: ContestConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = ContestConfig::default();
        assert_eq!(config.feed.node, defaults.feed.node);
        assert_eq!(config.entries.fallback_image_url, defaults.entries.fallback_image_url);
        assert_eq!(config.entries.community, defaults.entries.community);
        assert_eq!(config.moderation.blocklist, defaults.moderation.blocklist);
        assert_eq!(config.poster.font, defaults.poster.font);
        assert_eq!(config.poster.output, defaults.poster.output);
        assert_eq!(config.document.templates_dir, defaults.document.templates_dir);
    }

    #[test]
    fn stock_config_toml_contains_all_sections() {
        let content = stock_config_toml();
        for section in ["[feed]", "[entries]", "[moderation]", "[poster]", "[document]"] {
            assert!(content.contains(section), "missing {section}");
        }
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let val = stock_defaults_value().unwrap();
        for key in ["feed", "entries", "moderation", "poster", "document"] {
            assert!(val.get(key).is_some(), "missing {key}");
        }
    }
}
