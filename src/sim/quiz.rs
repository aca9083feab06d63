//! Average-velocity quiz
//!
//! After a run stops, the user is asked to compute the average velocity
//! from the straight-line distance and the elapsed time. The evaluator is
//! pure: it never touches simulation state and may be re-invoked with new
//! guesses for the same completed run.

use serde::{Deserialize, Serialize};

use crate::consts::QUIZ_TOLERANCE;

/// Outcome of a quiz submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QuizFeedback {
    /// Within tolerance of the reference answer (carried for display)
    Correct { reference: f32 },
    /// Out of tolerance, or not a number at all
    Incorrect,
}

impl QuizFeedback {
    /// Feedback line shown under the answer field
    pub fn message(&self) -> String {
        match self {
            QuizFeedback::Correct { reference } => {
                format!("Correct! The average velocity is {reference:.2} m/s")
            }
            QuizFeedback::Incorrect => {
                "Try again! Remember: velocity = distance / time".to_string()
            }
        }
    }

    #[inline]
    pub fn is_correct(&self) -> bool {
        matches!(self, QuizFeedback::Correct { .. })
    }
}

/// Reference answer: straight-line distance over elapsed time.
///
/// Invariant, not a handled error: callers only reach this from the Stopped
/// phase, where elapsed is strictly positive.
#[inline]
pub fn reference_velocity(distance: f32, elapsed: f32) -> f32 {
    debug_assert!(elapsed > 0.0, "quiz requires a completed run");
    distance / elapsed
}

/// Judge a user-entered answer against the reference, within 1% relative
/// tolerance. Unparseable text is judged incorrect rather than raised as a
/// fault; the retry prompt is the only failure mode the quiz has.
pub fn check_answer(answer: &str, distance: f32, elapsed: f32) -> QuizFeedback {
    let reference = reference_velocity(distance, elapsed);
    match answer.trim().parse::<f32>() {
        Ok(value) if (value - reference).abs() < QUIZ_TOLERANCE * reference => {
            QuizFeedback::Correct { reference }
        }
        _ => QuizFeedback::Incorrect,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_velocity() {
        // Final position (100, 0) after 5s -> 20 m/s
        assert_eq!(reference_velocity(100.0, 5.0), 20.0);
    }

    #[test]
    fn test_exact_answer_correct() {
        let feedback = check_answer("20", 100.0, 5.0);
        assert!(feedback.is_correct());
        assert_eq!(feedback, QuizFeedback::Correct { reference: 20.0 });
    }

    #[test]
    fn test_wrong_answer_incorrect() {
        assert_eq!(check_answer("25", 100.0, 5.0), QuizFeedback::Incorrect);
    }

    #[test]
    fn test_tolerance_is_one_percent_relative() {
        // reference 20, tolerance band is (19.8, 20.2) exclusive
        assert!(check_answer("20.19", 100.0, 5.0).is_correct());
        assert!(check_answer("19.81", 100.0, 5.0).is_correct());
        assert!(!check_answer("20.2", 100.0, 5.0).is_correct());
        assert!(!check_answer("19.8", 100.0, 5.0).is_correct());
    }

    #[test]
    fn test_malformed_input_is_incorrect_not_a_fault() {
        for junk in ["", "  ", "fast", "20 m/s", "1,5", "NaN"] {
            assert_eq!(check_answer(junk, 100.0, 5.0), QuizFeedback::Incorrect);
        }
    }

    #[test]
    fn test_whitespace_tolerated() {
        assert!(check_answer("  20  ", 100.0, 5.0).is_correct());
    }

    #[test]
    fn test_feedback_messages() {
        let ok = QuizFeedback::Correct { reference: 12.345 };
        assert!(ok.message().contains("12.35"));
        assert!(QuizFeedback::Incorrect.message().contains("distance / time"));
    }
}
