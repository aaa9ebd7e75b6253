//! Password strength scoring for the field strength meter.
//!
//! The score is a pure function of the current text. Nothing is cached, so the
//! meter can never disagree with the value it sits under.

/// Awarded once the value reaches [`MIN_LENGTH`] characters.
const LENGTH_POINTS: u8 = 25;
/// Awarded on top of [`LENGTH_POINTS`] once the value reaches [`LONG_LENGTH`].
const LONG_LENGTH_POINTS: u8 = 15;
/// Awarded per character class present (lowercase, uppercase, digit, symbol).
/// Classes use Unicode properties, so any numeric character counts as a digit.
const CLASS_POINTS: u8 = 15;

const MIN_LENGTH: usize = 8;
const LONG_LENGTH: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
/// Qualitative band for a strength score.
pub enum StrengthLevel {
    /// No value entered; the meter shows no label.
    Empty,
    /// Score below 30.
    Weak,
    /// Score below 60.
    Fair,
    /// Score below 80.
    Good,
    /// Score of 80 or more.
    Strong,
}

impl Default for StrengthLevel {
    fn default() -> Self {
        Self::Empty
    }
}

impl StrengthLevel {
    fn from_score(score: u8) -> Self {
        match score {
            0..=29 => Self::Weak,
            30..=59 => Self::Fair,
            60..=79 => Self::Good,
            _ => Self::Strong,
        }
    }

    /// User-facing label, empty for [`StrengthLevel::Empty`].
    pub fn label(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Strong => "Strong",
        }
    }

    /// Color tone token consumed by the meter's `data-ui-tone` attribute.
    pub fn tone(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::Weak => "danger",
            Self::Fair => "warning",
            Self::Good => "accent",
            Self::Strong => "success",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Derived password strength: a 0-100 score and its band.
pub struct PasswordStrength {
    /// Score in `0..=100`.
    pub score: u8,
    /// Band the score falls into.
    pub level: StrengthLevel,
}

impl PasswordStrength {
    /// Scores `value`. Length is counted in characters, not bytes.
    pub fn estimate(value: &str) -> Self {
        if value.is_empty() {
            return Self::default();
        }

        let length = value.chars().count();
        let mut score = 0;
        if length >= MIN_LENGTH {
            score += LENGTH_POINTS;
        }
        if length >= LONG_LENGTH {
            score += LONG_LENGTH_POINTS;
        }

        let classes: [fn(char) -> bool; 4] = [
            char::is_lowercase,
            char::is_uppercase,
            char::is_numeric,
            |ch| !ch.is_alphanumeric() && !ch.is_whitespace(),
        ];
        for class in classes {
            if value.chars().any(class) {
                score += CLASS_POINTS;
            }
        }

        Self {
            score,
            level: StrengthLevel::from_score(score),
        }
    }

    /// Meter fill width as a percentage.
    pub fn percent(self) -> u8 {
        self.score.min(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_has_no_label() {
        let strength = PasswordStrength::estimate("");
        assert_eq!(strength.score, 0);
        assert_eq!(strength.level, StrengthLevel::Empty);
        assert_eq!(strength.level.label(), "");
        assert_eq!(strength.level.tone(), "");
    }

    #[test]
    fn short_lowercase_value_is_weak() {
        let strength = PasswordStrength::estimate("abc");
        assert_eq!(strength.score, 15);
        assert_eq!(strength.level, StrengthLevel::Weak);
        assert_eq!(strength.level.tone(), "danger");
    }

    #[test]
    fn every_contribution_reaches_one_hundred() {
        let strength = PasswordStrength::estimate("Correct-Horse9");
        assert_eq!(strength.score, 100);
        assert_eq!(strength.level, StrengthLevel::Strong);
        assert_eq!(strength.percent(), 100);
    }

    #[test]
    fn band_thresholds() {
        assert_eq!(StrengthLevel::from_score(29), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(30), StrengthLevel::Fair);
        assert_eq!(StrengthLevel::from_score(59), StrengthLevel::Fair);
        assert_eq!(StrengthLevel::from_score(60), StrengthLevel::Good);
        assert_eq!(StrengthLevel::from_score(79), StrengthLevel::Good);
        assert_eq!(StrengthLevel::from_score(80), StrengthLevel::Strong);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Eight two-byte characters.
        let strength = PasswordStrength::estimate("éééééééé");
        assert_eq!(strength.score, LENGTH_POINTS + CLASS_POINTS);
    }

    #[test]
    fn score_never_decreases_as_criteria_are_added() {
        // Each step keeps every earlier criterion true and adds one more.
        let steps = [
            "a",              // lowercase
            "aA",             // + uppercase
            "aA1",            // + digit
            "aA1!",           // + symbol
            "aA1!aaaa",       // + length >= 8
            "aA1!aaaaaaaa",   // + length >= 12
        ];
        let mut previous = 0;
        for step in steps {
            let score = PasswordStrength::estimate(step).score;
            assert!(score >= previous, "{step:?} scored {score} after {previous}");
            previous = score;
        }
        assert_eq!(previous, 100);
    }

    #[test]
    fn whitespace_is_not_a_symbol() {
        assert_eq!(PasswordStrength::estimate("a b").score, CLASS_POINTS);
    }

    #[test]
    fn non_ascii_digits_count_as_digits() {
        assert_eq!(
            PasswordStrength::estimate("a\u{663}").score,
            PasswordStrength::estimate("a3").score
        );
        assert_eq!(PasswordStrength::estimate("\u{663}").score, CLASS_POINTS);
    }
}
