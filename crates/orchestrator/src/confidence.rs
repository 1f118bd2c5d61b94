//! Heuristic confidence score for a generated reply.

/// Score before any length credit.
pub const BASE_CONFIDENCE: f64 = 0.7;

/// Maximum credit earned from reply length.
pub const LENGTH_WEIGHT: f64 = 0.2;

/// Reply length (characters) that earns the full length credit.
pub const LENGTH_SCALE: f64 = 2000.0;

/// Cap applied to base + length credit.
pub const LENGTH_CAP: f64 = 0.95;

/// Flat bonus when the caller supplied company context.
pub const COMPANY_CONTEXT_BONUS: f64 = 0.05;

/// Confidence for a reply of `reply` text.
///
/// The cap applies before the company-context bonus, so the result can
/// reach 1.0.
pub fn confidence(reply: &str, has_company_context: bool) -> f64 {
    let length = reply.chars().count() as f64;
    let mut score = (BASE_CONFIDENCE + (length / LENGTH_SCALE) * LENGTH_WEIGHT).min(LENGTH_CAP);
    if has_company_context {
        score += COMPANY_CONTEXT_BONUS;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_reply() {
        assert!(approx(confidence("", false), 0.7));
    }

    #[test]
    fn test_length_scales_linearly() {
        let reply = "x".repeat(1000);
        assert!(approx(confidence(&reply, false), 0.8));
    }

    #[test]
    fn test_length_credit_capped() {
        let reply = "x".repeat(4000);
        assert!(approx(confidence(&reply, false), 0.95));
    }

    #[test]
    fn test_bonus_applied_after_cap() {
        let reply = "x".repeat(4000);
        let score = confidence(&reply, true);
        assert!(approx(score, 1.0));
        assert!(score > LENGTH_CAP);
    }

    #[test]
    fn test_bonus_on_short_reply() {
        assert!(approx(confidence("", true), 0.75));
    }

    #[test]
    fn test_length_counts_characters() {
        let ascii = "a".repeat(500);
        let accented = "é".repeat(500);
        assert!(approx(confidence(&ascii, false), confidence(&accented, false)));
    }
}
