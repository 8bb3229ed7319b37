/// Length ratio at or below which the metric saturates at 1.0.
const TARGET_RATIO: f64 = 0.7;
/// Metric value when the improved prompt is exactly as long as the raw prompt.
const UNCHANGED_SCORE: f64 = 0.6;

/// Map the improved/raw token-count ratio to [0.0, 1.0].
///
/// Piecewise linear and monotonic non-increasing in the ratio:
/// - ratio <= 0.7: 1.0
/// - 0.7 < ratio <= 1.0: linear from 1.0 down to 0.6
/// - ratio > 1.0: 0.6 - (ratio - 1.0), floored at 0.0 (reaches 0 at 1.6)
///
/// A raw token count of zero scores 1.0; boundary validation normally
/// prevents that case from arising.
pub fn length_score(raw_tokens: usize, improved_tokens: usize) -> f64 {
    if raw_tokens == 0 {
        return 1.0;
    }

    let ratio = improved_tokens as f64 / raw_tokens as f64;
    if ratio <= TARGET_RATIO {
        1.0
    } else if ratio <= 1.0 {
        1.0 - (ratio - TARGET_RATIO) / (1.0 - TARGET_RATIO) * (1.0 - UNCHANGED_SCORE)
    } else {
        (UNCHANGED_SCORE - (ratio - 1.0)).max(0.0)
    }
}
