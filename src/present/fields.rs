//! Statistics document → display values
//!
//! Each field is derived by a small function with its own literal fallback,
//! so the resulting [`DisplayFields`] is always fully populated.

use serde::Serialize;

use crate::consts::{FIRST_MESSAGE_FALLBACK, LONGEST_CHAT_OPENER_FALLBACK, TOP_EMOJI_FALLBACK};
use crate::media::{MediaResolver, ResolvedMedia};
use crate::stats::{MessageSnapshot, MessagesStats, MostUsedSticker, StatisticsDocument};
use crate::utils::debug_enabled;

use super::format::Formatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Side {
    Owner,
    Member,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct WordRow {
    pub(crate) word: String,
    pub(crate) count: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct StickerPanel {
    pub(crate) side: Side,
    pub(crate) count: String,
    pub(crate) media: Option<ResolvedMedia>,
    /// Shown next to the sticker, or instead of it when the file is missing
    pub(crate) caption: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct DisplayFields {
    pub(crate) year: i32,

    pub(crate) total_messages: String,
    pub(crate) owner_messages: String,
    pub(crate) member_messages: String,
    pub(crate) avg_messages_per_day: String,

    pub(crate) total_chars: String,
    pub(crate) owner_chars: String,
    pub(crate) member_chars: String,
    pub(crate) owner_typing_time: String,
    pub(crate) member_typing_time: String,

    pub(crate) first_message_text: String,
    pub(crate) first_message_time: String,

    pub(crate) streak_days: String,
    pub(crate) streak_start: String,
    pub(crate) streak_end: String,

    pub(crate) longest_chat_date: String,
    pub(crate) longest_chat_text: String,
    pub(crate) longest_chat_time: String,
    pub(crate) longest_chat_messages: String,
    pub(crate) longest_chat_duration: String,

    pub(crate) call_minutes: String,
    pub(crate) longest_call_minutes: String,
    pub(crate) longest_call_time: String,

    pub(crate) love_you_count: String,
    pub(crate) love_me_count: String,

    pub(crate) top_emoji: String,
    pub(crate) top_emoji_count: String,
    pub(crate) top_words: Vec<WordRow>,

    pub(crate) owner_sticker: StickerPanel,
    pub(crate) member_sticker: StickerPanel,
    pub(crate) top_sticker: StickerPanel,
}

fn first_date(stats: &MessagesStats) -> Option<&str> {
    stats.first_message.as_ref()?.date.as_deref()
}

fn last_date(stats: &MessagesStats) -> Option<&str> {
    stats.last_message.as_ref()?.date.as_deref()
}

/// Explicit year, else the year of the first message in the display zone, else 0
pub(crate) fn year(doc: &StatisticsDocument, fmt: &Formatter) -> i32 {
    doc.year
        .or_else(|| fmt.year_of(first_date(&doc.chat_stats.messages_stats)?))
        .unwrap_or(0)
}

pub(crate) fn first_message_text(doc: &StatisticsDocument) -> String {
    doc.chat_stats
        .messages_stats
        .first_message
        .as_ref()
        .and_then(MessageSnapshot::plain_text)
        .unwrap_or_else(|| FIRST_MESSAGE_FALLBACK.to_string())
}

pub(crate) fn longest_chat_text(doc: &StatisticsDocument) -> String {
    doc.longest_conversation
        .first_message
        .as_ref()
        .and_then(MessageSnapshot::plain_text)
        .unwrap_or_else(|| LONGEST_CHAT_OPENER_FALLBACK.to_string())
}

pub(crate) fn top_emoji(doc: &StatisticsDocument) -> String {
    doc.emoji_stats
        .top_emoji
        .as_deref()
        .map(str::trim)
        .filter(|emoji| !emoji.is_empty())
        .unwrap_or(TOP_EMOJI_FALLBACK)
        .to_string()
}

/// Longest call length in whole minutes, rounded
pub(crate) fn longest_call_minutes(doc: &StatisticsDocument) -> u64 {
    let seconds = doc
        .calls_stats
        .longest_call_durations_min
        .as_ref()
        .and_then(|call| call.duration_seconds)
        .unwrap_or(0)
        .max(0);
    (seconds as f64 / 60.0).round() as u64
}

/// The side whose most used sticker was used more, with its count; the owner wins ties
pub(crate) fn top_sticker(stickers: &MostUsedSticker) -> (Side, u64) {
    let owner = stickers.owner_most_used_sticker_count;
    let member = stickers.member_most_used_sticker_count;
    if owner >= member {
        (Side::Owner, owner)
    } else {
        (Side::Member, member)
    }
}

fn sticker_caption(count: &str, found: bool) -> String {
    if found {
        format!("использован {count} раз")
    } else {
        format!("файл не найден, но использован {count} раз")
    }
}

fn sticker_panel(
    fmt: &Formatter,
    side: Side,
    count: u64,
    media: Option<ResolvedMedia>,
) -> StickerPanel {
    let count = fmt.int(count);
    let caption = sticker_caption(&count, media.is_some());
    StickerPanel {
        side,
        count,
        media,
        caption,
    }
}

fn sticker_panels(
    doc: &StatisticsDocument,
    fmt: &Formatter,
    resolver: &MediaResolver,
) -> (StickerPanel, StickerPanel, StickerPanel) {
    let stickers = &doc.most_used_sticker;
    let (owner_media, member_media) = rayon::join(
        || resolver.resolve_snapshot(stickers.owner_most_used_sticker.as_ref()),
        || resolver.resolve_snapshot(stickers.member_most_used_sticker.as_ref()),
    );

    if debug_enabled() {
        eprintln!(
            "[DEBUG] Sticker media: owner {}, member {}",
            if owner_media.is_some() { "found" } else { "missing" },
            if member_media.is_some() { "found" } else { "missing" },
        );
    }

    let (side, top_count) = top_sticker(stickers);
    let top_media = match side {
        Side::Owner => owner_media.clone(),
        Side::Member => member_media.clone(),
    };

    (
        sticker_panel(
            fmt,
            Side::Owner,
            stickers.owner_most_used_sticker_count,
            owner_media,
        ),
        sticker_panel(
            fmt,
            Side::Member,
            stickers.member_most_used_sticker_count,
            member_media,
        ),
        sticker_panel(fmt, side, top_count, top_media),
    )
}

/// Map a statistics document to display values, resolving sticker media
pub(crate) fn build_fields(
    doc: &StatisticsDocument,
    fmt: &Formatter,
    resolver: &MediaResolver,
) -> DisplayFields {
    let messages = &doc.chat_stats.messages_stats;
    let chars = &doc.chat_stats.additional_messages_stats;
    let conversation = &doc.longest_conversation;
    let calls = &doc.calls_stats;
    let (owner_sticker, member_sticker, top_sticker) = sticker_panels(doc, fmt, resolver);

    DisplayFields {
        year: year(doc, fmt),

        total_messages: fmt.int(messages.total_messages_count),
        owner_messages: fmt.int(messages.owner_messages_count),
        member_messages: fmt.int(messages.member_messages_count),
        avg_messages_per_day: fmt.float(doc.avg_messages_per_day),

        total_chars: fmt.int(chars.total_characters_count),
        owner_chars: fmt.int(chars.owner_characters_count),
        member_chars: fmt.int(chars.member_characters_count),
        owner_typing_time: fmt.typing_time(chars.owner_characters_count),
        member_typing_time: fmt.typing_time(chars.member_characters_count),

        first_message_text: first_message_text(doc),
        first_message_time: fmt.time(first_date(messages)),

        streak_days: fmt.int(doc.streak.count),
        streak_start: fmt.day_month(doc.streak.start.as_deref()),
        streak_end: fmt.day_month(doc.streak.end.as_deref()),

        longest_chat_date: fmt.day_month(first_date(conversation)),
        longest_chat_text: longest_chat_text(doc),
        longest_chat_time: fmt.time(first_date(conversation)),
        longest_chat_messages: fmt.int(conversation.total_messages_count),
        longest_chat_duration: fmt.duration(first_date(conversation), last_date(conversation)),

        call_minutes: fmt.int(calls.total_calls_durations_min),
        longest_call_minutes: fmt.int(longest_call_minutes(doc)),
        longest_call_time: fmt.time(
            calls
                .longest_call_durations_min
                .as_ref()
                .and_then(|call| call.date.as_deref()),
        ),

        love_you_count: fmt.int(doc.occurrences.owner_messages_count),
        love_me_count: fmt.int(doc.occurrences.member_messages_count),

        top_emoji: top_emoji(doc),
        top_emoji_count: fmt.int(doc.emoji_stats.top_emoji_count),
        top_words: doc
            .word_stats
            .top_words
            .iter()
            .map(|w| WordRow {
                word: w.word.clone(),
                count: fmt.int(w.count),
            })
            .collect(),

        owner_sticker,
        member_sticker,
        top_sticker,
    }
}
