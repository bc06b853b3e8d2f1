//! Statistics document types
//!
//! Mirrors the JSON written by the export analyzer. Every section and
//! counter defaults when absent, so partial documents still load; only
//! values of the wrong JSON type fail to parse.

use serde::Deserialize;

use crate::consts::FILE_NOT_INCLUDED_PREFIX;

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub(crate) struct StatisticsDocument {
    pub(crate) year: Option<i32>,
    pub(crate) source_dir: Option<String>,
    pub(crate) chat_stats: ChatStats,
    pub(crate) occurrences: MessagesStats,
    pub(crate) longest_conversation: MessagesStats,
    pub(crate) calls_stats: CallsStats,
    pub(crate) most_used_sticker: MostUsedSticker,
    pub(crate) emoji_stats: EmojiStats,
    pub(crate) word_stats: WordStats,
    pub(crate) avg_messages_per_day: f64,
    pub(crate) streak: Streak,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub(crate) struct ChatStats {
    pub(crate) messages_stats: MessagesStats,
    pub(crate) additional_messages_stats: AdditionalMessagesStats,
}

/// Message counts for a window of the chat, split by participant
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub(crate) struct MessagesStats {
    pub(crate) first_message: Option<MessageSnapshot>,
    pub(crate) last_message: Option<MessageSnapshot>,
    pub(crate) total_messages_count: u64,
    pub(crate) owner_messages_count: u64,
    pub(crate) member_messages_count: u64,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub(crate) struct AdditionalMessagesStats {
    pub(crate) total_characters_count: u64,
    pub(crate) owner_characters_count: u64,
    pub(crate) member_characters_count: u64,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub(crate) struct CallsStats {
    pub(crate) total_calls_durations_sec: u64,
    pub(crate) total_calls_durations_min: u64,
    /// The longest call itself, despite the key name
    pub(crate) longest_call_durations_min: Option<MessageSnapshot>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub(crate) struct MostUsedSticker {
    pub(crate) owner_most_used_sticker_count: u64,
    pub(crate) owner_most_used_sticker: Option<MessageSnapshot>,
    pub(crate) member_most_used_sticker_count: u64,
    pub(crate) member_most_used_sticker: Option<MessageSnapshot>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub(crate) struct EmojiStats {
    pub(crate) top_emoji: Option<String>,
    pub(crate) top_emoji_count: u64,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub(crate) struct WordStats {
    pub(crate) top_words: Vec<WordCount>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub(crate) struct WordCount {
    pub(crate) word: String,
    pub(crate) count: u64,
}

/// Longest run of consecutive days with messages; dates are `YYYY-MM-DD`
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub(crate) struct Streak {
    pub(crate) count: u64,
    pub(crate) start: Option<String>,
    pub(crate) end: Option<String>,
}

/// A single message or call event referenced by a statistic.
///
/// Only the parts shown on the page are kept; other message keys
/// (`id`, `from`, `type`, `media_type`, ...) are ignored on load.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub(crate) struct MessageSnapshot {
    pub(crate) text: MessageText,
    pub(crate) date: Option<String>,
    pub(crate) duration_seconds: Option<i64>,
    pub(crate) file: Option<String>,
    pub(crate) file_name: Option<String>,
}

impl MessageSnapshot {
    /// Flattened message text, `None` when the message carries no text
    pub(crate) fn plain_text(&self) -> Option<String> {
        let text = self.text.to_plain();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Identifier used to look the attached media up in the export tree.
    ///
    /// Prefers `file`; falls back to `file_name` when Telegram skipped the
    /// file during export.
    pub(crate) fn media_identifier(&self) -> Option<&str> {
        match self.file.as_deref() {
            Some(path) if !path.is_empty() && !path.starts_with(FILE_NOT_INCLUDED_PREFIX) => {
                Some(path)
            }
            _ => self.file_name.as_deref().filter(|name| !name.is_empty()),
        }
    }
}

/// Telegram stores text either as a plain string or as a list of
/// formatted fragments.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum MessageText {
    Plain(String),
    Entities(Vec<TextEntity>),
}

impl Default for MessageText {
    fn default() -> Self {
        MessageText::Plain(String::new())
    }
}

impl MessageText {
    pub(crate) fn to_plain(&self) -> String {
        match self {
            MessageText::Plain(text) => text.clone(),
            MessageText::Entities(entities) => entities
                .iter()
                .map(|entity| match entity {
                    TextEntity::Text(text) => text.as_str(),
                    TextEntity::Entity(entity) => entity.text.as_str(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum TextEntity {
    Text(String),
    Entity(FormattedText),
}

/// A formatted fragment (`{"type": "bold", "text": ...}`); only the text is kept
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct FormattedText {
    pub(crate) text: String,
}
