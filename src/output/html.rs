//! Story-card HTML page
//!
//! Markup only; styling is limited to what keeps the cards legible.

use std::fmt::Write as _;

use crate::present::{DisplayFields, StickerPanel};

const STYLE: &str = "body{margin:0;background:#0a2e18;color:#fff;font-family:sans-serif}\
main{display:flex;flex-wrap:wrap;gap:2rem;justify-content:center;padding:3rem 1rem}\
.card{width:380px;min-height:560px;padding:2rem;border-radius:24px;background:#1b5c34}\
.bubble{display:inline-block;max-width:260px;padding:.5rem 1rem;border-radius:18px;background:#e6f7cf;color:#052e16}\
.bubble time{display:block;text-align:right;font-size:10px}\
.big{font-size:3rem;font-weight:700}\
.sticker{width:192px;height:192px;object-fit:contain;border-radius:12px}\
.missing{display:flex;align-items:center;justify-content:center;background:#ffffff1a;font-size:11px}";

/// Escape text for HTML
fn esc(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

fn bubble(text: &str, time: &str) -> String {
    format!(
        r#"<div class="bubble"><div>{}</div><time>{} ✓✓</time></div>"#,
        esc(text),
        esc(time)
    )
}

fn sticker(panel: &StickerPanel) -> String {
    match &panel.media {
        Some(media) if media.is_video => format!(
            r#"<video class="sticker" src="{}" autoplay loop muted playsinline></video>"#,
            esc(&media.data_uri)
        ),
        Some(media) => format!(
            r#"<img class="sticker" src="{}" alt="Самый частый стикер">"#,
            esc(&media.data_uri)
        ),
        None => r#"<div class="sticker missing">нет файла</div>"#.to_string(),
    }
}

fn card(out: &mut String, body: &str) {
    let _ = write!(out, r#"<section class="card">{body}</section>"#);
}

/// Render the full page for one set of display fields
pub(crate) fn render_page(fields: &DisplayFields) -> String {
    let mut cards = String::with_capacity(16 * 1024);

    card(
        &mut cards,
        &format!(
            "<p>{}</p><h2>С Новым Годом, любимая!</h2>\
             <p>Я подготовил небольшие итоги года о нас и нашей переписке.</p>",
            fields.year
        ),
    );

    card(
        &mut cards,
        &format!(
            "<p>Самым первым сообщением в этом году было мое поздравление.</p>{}\
             <p>За год мы написали <b>{}</b> сообщений, в среднем {} в день.</p>\
             <p><b>{}</b> из них написала ты — это {} символов, что заняло бы {}.</p>\
             <p>У тебя лапки не устали?</p>",
            bubble(&fields.first_message_text, &fields.first_message_time),
            esc(&fields.total_messages),
            esc(&fields.avg_messages_per_day),
            esc(&fields.member_messages),
            esc(&fields.member_chars),
            esc(&fields.member_typing_time),
        ),
    );

    card(
        &mut cards,
        &format!(
            r#"<div class="big">🔥 {}</div><p>С {} по {} наша серия ни разу не прервалась — мы не забывали друг о друге ни на день.</p>"#,
            esc(&fields.streak_days),
            esc(&fields.streak_start),
            esc(&fields.streak_end),
        ),
    );

    card(
        &mut cards,
        &format!(
            r#"<p>Мы много общались, а самый длинный разговор был {}.</p>{}<p>За {} мы успели написать</p><div class="big">{}</div><p>сообщений подряд</p>"#,
            esc(&fields.longest_chat_date),
            bubble(&fields.longest_chat_text, &fields.longest_chat_time),
            esc(&fields.longest_chat_duration),
            esc(&fields.longest_chat_messages),
        ),
    );

    card(
        &mut cards,
        &format!(
            r#"<p>В этом году мы не только писали, но и разговаривали по телефону — {} минут за год.</p><div class="bubble">📞 {} · {} мин</div><p>Я очень люблю слышать твой голос</p>"#,
            esc(&fields.call_minutes),
            esc(&fields.longest_call_time),
            esc(&fields.longest_call_minutes),
        ),
    );

    let mut words = String::new();
    for row in &fields.top_words {
        let _ = write!(words, "<li>{} — {}</li>", esc(&row.word), esc(&row.count));
    }
    card(
        &mut cards,
        &format!(
            r#"<div class="big">{}</div><p>{} раз за год</p><ol>{}</ol>"#,
            esc(&fields.top_emoji),
            esc(&fields.top_emoji_count),
            words,
        ),
    );

    card(
        &mut cards,
        &format!(
            "<p>Самый частый стикер</p>{}<p>{}</p>",
            sticker(&fields.top_sticker),
            esc(&fields.top_sticker.caption),
        ),
    );

    card(
        &mut cards,
        &format!(
            "<h2>Я люблю тебя</h2><p>{} раз я говорил это в прошедшем году, а ты — {} раз.</p>\
             <p>Я бесконечно сильно тебя люблю. Спасибо, что была со мной весь год.</p>",
            esc(&fields.love_you_count),
            esc(&fields.love_me_count),
        ),
    );

    format!(
        r#"<!DOCTYPE html>
<html lang="ru">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Итоги {year}</title>
<style>{STYLE}</style>
</head>
<body>
<main>{cards}</main>
</body>
</html>
"#,
        year = fields.year,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{MediaResolver, ResolvedMedia};
    use crate::present::{Formatter, NumberFormat, build_fields};
    use crate::stats::parse_stats;
    use crate::utils::Timezone;

    fn fields(json: &str) -> DisplayFields {
        let fmt = Formatter::new(NumberFormat::default(), Timezone::Named(chrono_tz::UTC));
        build_fields(&parse_stats(json).unwrap(), &fmt, &MediaResolver::default())
    }

    #[test]
    fn escapes_message_text() {
        assert_eq!(esc(r#"<b>"x" & 'y'</b>"#), "&lt;b&gt;&quot;x&quot; &amp; &#x27;y&#x27;&lt;/b&gt;");
        let page = render_page(&fields(
            r#"{"chat_stats":{"messages_stats":{"first_message":{"id":1,"text":"<script>"}}}}"#,
        ));
        assert!(page.contains("&lt;script&gt;"));
        assert!(!page.contains("<script>"));
    }

    #[test]
    fn page_contains_formatted_values() {
        let page = render_page(&fields(
            r#"{"year":2024,
                "chat_stats":{"messages_stats":{"total_messages_count":12345}},
                "word_stats":{"top_words":[{"word":"привет","count":42}]}}"#,
        ));
        assert!(page.contains("<title>Итоги 2024</title>"));
        assert!(page.contains("<b>12 345</b>"));
        assert!(page.contains("<li>привет — 42</li>"));
        assert!(page.contains("С новым годом!"));
    }

    #[test]
    fn missing_sticker_renders_placeholder() {
        let page = render_page(&fields("{}"));
        assert!(page.contains("нет файла"));
        assert!(page.contains("файл не найден, но использован 0 раз"));
    }

    #[test]
    fn sticker_markup_by_media_kind() {
        let mut panel = fields("{}").top_sticker;
        panel.media = Some(ResolvedMedia {
            data_uri: "data:video/webm;base64,AAAA".to_string(),
            is_video: true,
        });
        assert!(sticker(&panel).starts_with("<video"));

        panel.media = Some(ResolvedMedia {
            data_uri: "data:image/png;base64,AAAA".to_string(),
            is_video: false,
        });
        assert!(sticker(&panel).starts_with("<img"));
    }
}
