use crate::present::DisplayFields;

/// Display fields as pretty JSON, for feeding an external view
pub(crate) fn output_fields_json(fields: &DisplayFields) -> String {
    serde_json::to_string_pretty(fields).unwrap_or_else(|e| {
        eprintln!("Failed to serialize JSON output: {}", e);
        "{}".to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaResolver;
    use crate::present::{Formatter, NumberFormat, build_fields};
    use crate::stats::parse_stats;
    use crate::utils::Timezone;

    #[test]
    fn json_exposes_every_field() {
        let doc = parse_stats(
            r#"{"year":2024,"streak":{"count":365,"start":"2024-01-01","end":"2024-12-30"}}"#,
        )
        .unwrap();
        let fmt = Formatter::new(NumberFormat::default(), Timezone::Named(chrono_tz::UTC));
        let fields = build_fields(&doc, &fmt, &MediaResolver::default());

        let value: serde_json::Value = serde_json::from_str(&output_fields_json(&fields)).unwrap();
        assert_eq!(value["year"].as_i64(), Some(2024));
        assert_eq!(value["streak_days"].as_str(), Some("365"));
        assert_eq!(value["streak_start"].as_str(), Some("1 января"));
        assert_eq!(value["streak_end"].as_str(), Some("30 декабря"));
        assert_eq!(value["top_sticker"]["side"].as_str(), Some("owner"));
        assert!(value["top_sticker"]["media"].is_null());
    }
}
