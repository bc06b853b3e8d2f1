/// Default statistics document location, relative to the working directory
pub(crate) const DEFAULT_STATS_PATH: &str = "../output.json";

/// Environment variable overriding the media root of the export
pub(crate) const SOURCE_DIR_ENV: &str = "TGRECAP_SOURCE_DIR";

/// Subdirectories of a Telegram export searched for media, in priority order
pub(crate) const MEDIA_SUBDIRS: [&str; 4] = ["stickers", "video_files", "files", "photos"];

/// Animated sticker format that cannot be embedded inline
pub(crate) const SKIPPED_MEDIA_EXTENSION: &str = "tgs";

/// Prefix Telegram writes instead of a path when media was not exported
pub(crate) const FILE_NOT_INCLUDED_PREFIX: &str = "(File not included";

/// Assumed typing speed used for the typing-time estimate
pub(crate) const TYPING_CHARS_PER_MINUTE: u64 = 80;

pub(crate) const TIME_PLACEHOLDER: &str = "--:--";
pub(crate) const FIRST_MESSAGE_FALLBACK: &str = "С новым годом!";
pub(crate) const LONGEST_CHAT_OPENER_FALLBACK: &str = "как дела?";
pub(crate) const TOP_EMOJI_FALLBACK: &str = "❤️";

pub(crate) const MINUTES_UNIT: &str = "минут";
pub(crate) const HOURS_UNIT: &str = "часов";
