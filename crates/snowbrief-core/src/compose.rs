//! Post composition.
//!
//! Turns a [`MarketSnapshot`] into the fixed-shape text block handed to the
//! publisher. Composition never fails: missing fields render as empty
//! segments and short rankings render fewer lines.

use time::OffsetDateTime;

use crate::domain::{format_minute, MarketSnapshot};

/// Ranked lines rendered per section.
///
/// Sources fetch up to 10 entries, but the target channel applies a
/// weighted length limit to non-Latin scripts, so only the top 5 of each
/// ranking is rendered.
pub const MAX_RANKED_LINES: usize = 5;

const TITLE_PREFIX: &str = "A股 盘中速览";
const TURNOVER_HEADER: &str = "成交额Top5:";
const SECTOR_HEADER: &str = "涨幅Top5板块:";

/// Composes the post text for a snapshot at the given local timestamp.
///
/// Deterministic: the same snapshot and the same minute yield
/// byte-identical output.
pub fn compose_post(snapshot: &MarketSnapshot, as_of: OffsetDateTime) -> String {
    let mut lines = Vec::with_capacity(5 + 2 * MAX_RANKED_LINES);

    lines.push(format!("{TITLE_PREFIX} ({})", format_minute(as_of)));
    lines.push(String::new());

    lines.push(TURNOVER_HEADER.to_owned());
    for (index, entry) in snapshot.turnover_top.iter().take(MAX_RANKED_LINES).enumerate() {
        let symbol = if entry.symbol.is_empty() {
            String::new()
        } else {
            format!("({})", entry.symbol)
        };
        let line = format!("{}. {}{} {}", index + 1, entry.name, symbol, entry.turnover);
        lines.push(line.trim().to_owned());
    }

    lines.push(String::new());

    lines.push(SECTOR_HEADER.to_owned());
    for (index, entry) in snapshot.sector_top.iter().take(MAX_RANKED_LINES).enumerate() {
        let line = format!("{}. {} {}", index + 1, entry.name, entry.pct);
        lines.push(line.trim().to_owned());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use time::{Date, Month, PrimitiveDateTime, Time, UtcOffset};

    use crate::domain::{SectorEntry, TurnoverEntry};

    use super::*;

    fn at_cst(year: i32, month: Month, day: u8, hour: u8, minute: u8) -> OffsetDateTime {
        let date = Date::from_calendar_date(year, month, day).expect("valid date");
        let time = Time::from_hms(hour, minute, 0).expect("valid time");
        PrimitiveDateTime::new(date, time)
            .assume_offset(UtcOffset::from_hms(8, 0, 0).expect("valid offset"))
    }

    fn ranked_snapshot(count: usize) -> MarketSnapshot {
        let turnover = (1..=count)
            .map(|rank| TurnoverEntry::new(format!("60{rank:04}"), format!("股票{rank}"), "1.0亿"))
            .collect();
        let sectors = (1..=count)
            .map(|rank| SectorEntry::new(format!("板块{rank}"), "+1.0%"))
            .collect();
        MarketSnapshot::new(turnover, sectors)
    }

    #[test]
    fn title_embeds_minute_precision_timestamp() {
        let post = compose_post(&ranked_snapshot(2), at_cst(2024, Month::May, 20, 10, 30));
        assert!(post.starts_with("A股 盘中速览 (2024-05-20 10:30)"));
    }

    #[test]
    fn renders_at_most_five_lines_per_section() {
        let post = compose_post(&ranked_snapshot(10), at_cst(2024, Month::May, 20, 10, 30));
        let numbered = post
            .lines()
            .filter(|line| line.chars().next().is_some_and(|ch| ch.is_ascii_digit()))
            .count();
        assert_eq!(numbered, 10, "5 turnover lines + 5 sector lines");
        assert!(!post.contains("6."));
    }

    #[test]
    fn short_rankings_render_fewer_lines_without_error() {
        let post = compose_post(&ranked_snapshot(2), at_cst(2024, Month::May, 20, 10, 30));
        assert!(post.contains("2. "));
        assert!(!post.contains("3. "));
    }

    #[test]
    fn empty_rankings_render_headers_only() {
        let snapshot = MarketSnapshot::new(Vec::new(), Vec::new());
        let post = compose_post(&snapshot, at_cst(2024, Month::May, 20, 10, 30));
        let lines: Vec<&str> = post.lines().collect();
        assert_eq!(
            lines,
            vec![
                "A股 盘中速览 (2024-05-20 10:30)",
                "",
                "成交额Top5:",
                "",
                "涨幅Top5板块:",
            ]
        );
    }

    #[test]
    fn empty_symbol_omits_parentheses_and_double_space() {
        let snapshot = MarketSnapshot::new(
            vec![TurnoverEntry::new("", "贵州茅台", "12.3亿")],
            Vec::new(),
        );
        let post = compose_post(&snapshot, at_cst(2024, Month::May, 20, 10, 30));
        let line = post
            .lines()
            .find(|line| line.starts_with("1. "))
            .expect("ranked line rendered");
        assert_eq!(line, "1. 贵州茅台 12.3亿");
        assert!(!line.contains('('));
        assert!(!line.contains("  "));
    }

    #[test]
    fn symbol_is_rendered_in_parentheses_when_present() {
        let snapshot = MarketSnapshot::new(
            vec![TurnoverEntry::new("600519", "贵州茅台", "12.3亿")],
            Vec::new(),
        );
        let post = compose_post(&snapshot, at_cst(2024, Month::May, 20, 10, 30));
        assert!(post.contains("1. 贵州茅台(600519) 12.3亿"));
    }

    #[test]
    fn composition_is_idempotent_for_the_same_minute() {
        let snapshot = ranked_snapshot(7);
        let ts = at_cst(2024, Month::May, 20, 10, 30);
        assert_eq!(compose_post(&snapshot, ts), compose_post(&snapshot, ts));
    }

    #[test]
    fn trailing_whitespace_is_trimmed_from_ranked_lines() {
        let snapshot = MarketSnapshot::new(
            vec![TurnoverEntry::new("600519", "贵州茅台", "")],
            vec![SectorEntry::new("半导体", "")],
        );
        let post = compose_post(&snapshot, at_cst(2024, Month::May, 20, 10, 30));
        for line in post.lines() {
            assert_eq!(line, line.trim_end());
        }
    }
}
