//! Cell sanitizers for the two numeric columns.
//!
//! Upstream spreadsheet exports mangle both columns in predictable ways:
//! heat scores turned into date strings, "8/10"-style fractions, SHU ranges
//! like "500-1000", thousands separators, stray unit suffixes. Both
//! functions are total: any input maps to a finite float, with 0.0 as the
//! recovery value, so the filter layer never sees a non-numeric cell.

/// Clean a raw Scoville-units cell.
///
/// "1,000" → 1000.0, "500-1000" → 750.0 (range average), "5,000 SHU" →
/// 5000.0. Anything unparsable maps to 0.0.
///
/// Policy: a hyphen is always read as a range separator. Negative numbers
/// and ISO dates therefore parse as ranges. The source data contains no
/// legitimate negatives; tests pin this assumption.
pub fn clean_shu(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else { return 0.0 };
    let s = raw.replace(',', "").trim().to_lowercase();
    if s.is_empty() {
        return 0.0;
    }

    if s.contains('-') {
        let parsed: Vec<f64> = s.split('-').filter_map(plain_decimal).collect();
        if parsed.is_empty() {
            return 0.0;
        }
        return parsed.iter().sum::<f64>() / parsed.len() as f64;
    }

    let digits: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Clean a raw 0–10 heat-score cell.
///
/// A hyphen marks a spreadsheet-date artifact ("2026-02-10"): the score
/// survives in the month slot, so segment index 1 is parsed. Otherwise a
/// "/<digits>" denominator and "+" suffixes are dropped before parsing.
/// Any failure maps to 0.0.
pub fn sanitize_heat_score(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else { return 0.0 };
    let s = raw.trim().to_lowercase();
    if s.is_empty() {
        return 0.0;
    }

    if s.contains('-') {
        let mut segments = s.split('-');
        segments.next();
        return segments
            .next()
            .and_then(|seg| seg.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .unwrap_or(0.0);
    }

    let mut s = s;
    if let Some(pos) = s.find('/') {
        if s[pos + 1..].chars().all(|c| c.is_ascii_digit()) {
            s.truncate(pos);
        }
    }
    let s = s.replace('+', "");
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Parse a segment that is a plain non-negative decimal ("500", "12.5").
/// Signs, exponents, and anything non-numeric are rejected.
fn plain_decimal(segment: &str) -> Option<f64> {
    let segment = segment.trim();
    if segment.is_empty() || !segment.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    segment.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shu_strips_thousands_separators() {
        assert_eq!(clean_shu(Some("1,000")), 1000.0);
        assert_eq!(clean_shu(Some(" 1,569,300 ")), 1_569_300.0);
    }

    #[test]
    fn shu_averages_ranges() {
        assert_eq!(clean_shu(Some("500-1000")), 750.0);
        assert_eq!(clean_shu(Some("100,000-350,000")), 225_000.0);
    }

    #[test]
    fn shu_drops_unit_suffixes() {
        assert_eq!(clean_shu(Some("5,000 shu")), 5000.0);
        assert_eq!(clean_shu(Some("about 3.5")), 3.5);
    }

    #[test]
    fn shu_recovers_from_garbage() {
        assert_eq!(clean_shu(Some("abc")), 0.0);
        assert_eq!(clean_shu(Some("")), 0.0);
        assert_eq!(clean_shu(Some("1.2.3")), 0.0);
        assert_eq!(clean_shu(None), 0.0);
    }

    #[test]
    fn shu_reads_hyphens_as_ranges_even_for_minus_signs() {
        // Data-quality assumption: the source never contains legitimate
        // negatives, so "-5" parses as the one-segment range {5}.
        assert_eq!(clean_shu(Some("-5")), 5.0);
    }

    #[test]
    fn heat_score_parses_plain_values() {
        assert_eq!(sanitize_heat_score(Some("7")), 7.0);
        assert_eq!(sanitize_heat_score(Some("7.5")), 7.5);
    }

    #[test]
    fn heat_score_drops_denominator_and_plus() {
        assert_eq!(sanitize_heat_score(Some("8/10")), 8.0);
        assert_eq!(sanitize_heat_score(Some("9+")), 9.0);
    }

    #[test]
    fn heat_score_takes_month_slot_of_date_artifacts() {
        assert_eq!(sanitize_heat_score(Some("2026-02-10")), 2.0);
        assert_eq!(sanitize_heat_score(Some("2026-08-10")), 8.0);
    }

    #[test]
    fn heat_score_recovers_from_garbage() {
        assert_eq!(sanitize_heat_score(Some("")), 0.0);
        assert_eq!(sanitize_heat_score(Some("hot")), 0.0);
        assert_eq!(sanitize_heat_score(Some("n/a")), 0.0);
        assert_eq!(sanitize_heat_score(Some("10-")), 0.0);
        assert_eq!(sanitize_heat_score(None), 0.0);
    }
}
