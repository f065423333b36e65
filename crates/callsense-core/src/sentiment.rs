//! Sentiment score bucketing
//!
//! Two threshold sets live side by side: the call-level verdict buckets a
//! mean score at 0.6/0.4, while per-line badges bucket a single score at
//! 0.7/0.35. They feed different displays and are deliberately kept as
//! distinct constants.

use crate::types::{OverallSentiment, Sentiment, TranscriptLine};

/// Mean score at or above this is a satisfied call
pub const SATISFIED_THRESHOLD: f64 = 0.6;

/// Mean score at or above this (and below satisfied) is a neutral call
pub const NEUTRAL_THRESHOLD: f64 = 0.4;

/// Single line score at or above this gets a positive badge
pub const BADGE_POSITIVE_THRESHOLD: f64 = 0.7;

/// Single line score at or below this gets a negative badge
pub const BADGE_NEGATIVE_THRESHOLD: f64 = 0.35;

/// Bucket a mean score into the call-level verdict
#[must_use]
pub fn bucket_mean(mean: f64) -> OverallSentiment {
    if mean >= SATISFIED_THRESHOLD {
        OverallSentiment::Satisfied
    } else if mean >= NEUTRAL_THRESHOLD {
        OverallSentiment::Neutral
    } else {
        OverallSentiment::Unsatisfied
    }
}

/// Derive the overall verdict for a transcript
///
/// Returns `None` for an empty transcript; otherwise the mean of all line
/// scores, bucketed by [`bucket_mean`].
#[must_use]
pub fn overall_sentiment(lines: &[TranscriptLine]) -> Option<OverallSentiment> {
    if lines.is_empty() {
        return None;
    }

    #[allow(clippy::cast_precision_loss)]
    let mean = lines.iter().map(|line| line.score).sum::<f64>() / lines.len() as f64;
    Some(bucket_mean(mean))
}

/// Badge label for a single line score
#[must_use]
pub fn score_badge(score: f64) -> Sentiment {
    if score >= BADGE_POSITIVE_THRESHOLD {
        Sentiment::Positive
    } else if score <= BADGE_NEGATIVE_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use crate::types::Speaker;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    fn line(score: f64) -> TranscriptLine {
        TranscriptLine::new(Speaker::Agent, "text", score, "00:01")
    }

    #[rstest]
    #[case(0.39, OverallSentiment::Unsatisfied)]
    #[case(0.40, OverallSentiment::Neutral)]
    #[case(0.59, OverallSentiment::Neutral)]
    #[case(0.60, OverallSentiment::Satisfied)]
    fn test_bucket_mean_boundaries(#[case] mean: f64, #[case] expected: OverallSentiment) {
        assert_eq!(bucket_mean(mean), expected);
    }

    #[test]
    fn test_overall_sentiment_empty() {
        assert_eq!(overall_sentiment(&[]), None);
    }

    #[test]
    fn test_overall_sentiment_mean() {
        // 0.8 and 0.2 average to exactly 0.5
        let lines = vec![line(0.8), line(0.2)];
        assert_eq!(overall_sentiment(&lines), Some(OverallSentiment::Neutral));
    }

    #[test]
    fn test_overall_sentiment_satisfied() {
        let lines = vec![line(0.78), line(0.81), line(0.55)];
        assert_eq!(overall_sentiment(&lines), Some(OverallSentiment::Satisfied));
    }

    #[rstest]
    #[case(0.7, Sentiment::Positive)]
    #[case(0.69, Sentiment::Neutral)]
    #[case(0.36, Sentiment::Neutral)]
    #[case(0.35, Sentiment::Negative)]
    #[case(0.0, Sentiment::Negative)]
    fn test_score_badge(#[case] score: f64, #[case] expected: Sentiment) {
        assert_eq!(score_badge(score), expected);
    }

    proptest! {
        #[test]
        fn test_bucket_mean_total(mean in 0.0f64..=1.0f64) {
            let bucket = bucket_mean(mean);
            if mean >= 0.6 {
                prop_assert_eq!(bucket, OverallSentiment::Satisfied);
            } else if mean >= 0.4 {
                prop_assert_eq!(bucket, OverallSentiment::Neutral);
            } else {
                prop_assert_eq!(bucket, OverallSentiment::Unsatisfied);
            }
        }

        #[test]
        fn test_overall_sentiment_never_panics(scores in proptest::collection::vec(0.0f64..=1.0f64, 0..32)) {
            let lines: Vec<TranscriptLine> = scores.into_iter().map(line).collect();
            let verdict = overall_sentiment(&lines);
            prop_assert_eq!(verdict.is_none(), lines.is_empty());
        }
    }
}
