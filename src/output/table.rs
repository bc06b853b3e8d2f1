//! Terminal overview of the display fields

use comfy_table::{
    Attribute, Cell, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::present::{DisplayFields, StickerPanel};

fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}

fn sticker_summary(panel: &StickerPanel) -> String {
    match &panel.media {
        Some(media) if media.is_video => format!("video · {}", panel.caption),
        Some(_) => format!("image · {}", panel.caption),
        None => panel.caption.clone(),
    }
}

/// Label/value rows in page order
fn field_rows(fields: &DisplayFields) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Year", fields.year.to_string()),
        ("Messages", fields.total_messages.clone()),
        ("Owner messages", fields.owner_messages.clone()),
        ("Member messages", fields.member_messages.clone()),
        ("Messages per day", fields.avg_messages_per_day.clone()),
        ("Characters", fields.total_chars.clone()),
        (
            "Owner characters",
            format!("{} ({})", fields.owner_chars, fields.owner_typing_time),
        ),
        (
            "Member characters",
            format!("{} ({})", fields.member_chars, fields.member_typing_time),
        ),
        (
            "First message",
            format!("{} [{}]", fields.first_message_text, fields.first_message_time),
        ),
        (
            "Streak",
            format!(
                "{} ({} – {})",
                fields.streak_days, fields.streak_start, fields.streak_end
            ),
        ),
        (
            "Longest chat",
            format!(
                "{}: {} messages in {}",
                fields.longest_chat_date, fields.longest_chat_messages, fields.longest_chat_duration
            ),
        ),
        (
            "Longest chat opener",
            format!("{} [{}]", fields.longest_chat_text, fields.longest_chat_time),
        ),
        ("Call minutes", fields.call_minutes.clone()),
        (
            "Longest call",
            format!(
                "{} min [{}]",
                fields.longest_call_minutes, fields.longest_call_time
            ),
        ),
        (
            "Tracked phrase",
            format!("{} / {}", fields.love_you_count, fields.love_me_count),
        ),
        (
            "Top emoji",
            format!("{} × {}", fields.top_emoji, fields.top_emoji_count),
        ),
    ];
    for row in &fields.top_words {
        rows.push(("Top word", format!("{} × {}", row.word, row.count)));
    }
    rows.push(("Owner sticker", sticker_summary(&fields.owner_sticker)));
    rows.push(("Member sticker", sticker_summary(&fields.member_sticker)));
    rows.push(("Top sticker", sticker_summary(&fields.top_sticker)));
    rows
}

pub(crate) fn render_fields_table(fields: &DisplayFields, use_color: bool) -> String {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Field", use_color),
        header_cell("Value", use_color),
    ]);
    for (label, value) in field_rows(fields) {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }
    format!("{table}\n")
}
