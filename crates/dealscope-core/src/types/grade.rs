//! Letter grades and graded deal results.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DealError, DealResult};

/// Letter grade for an investment deal, A best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// Score 85 and above.
    A,
    /// Score 70 to 84.
    B,
    /// Score 55 to 69.
    C,
    /// Score 40 to 54.
    D,
    /// Score below 40.
    F,
}

impl Grade {
    /// All grades from best to worst.
    pub const ALL: [Grade; 5] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::F];

    /// Maps a 0-100 score to a grade. Thresholds are inclusive lower bounds.
    pub fn from_score(score: u32) -> Self {
        if score >= 85 {
            Grade::A
        } else if score >= 70 {
            Grade::B
        } else if score >= 55 {
            Grade::C
        } else if score >= 40 {
            Grade::D
        } else {
            Grade::F
        }
    }

    /// Lowest score that earns this grade.
    pub fn min_score(&self) -> u32 {
        match self {
            Grade::A => 85,
            Grade::B => 70,
            Grade::C => 55,
            Grade::D => 40,
            Grade::F => 0,
        }
    }

    /// Ordinal rank where higher is better (F = 0, A = 4).
    pub fn rank(&self) -> u8 {
        match self {
            Grade::A => 4,
            Grade::B => 3,
            Grade::C => 2,
            Grade::D => 1,
            Grade::F => 0,
        }
    }

    /// Returns true if this grade is at least as good as `other`.
    pub fn is_at_least(&self, other: Grade) -> bool {
        self.rank() >= other.rank()
    }

    /// Single-letter label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = DealError;

    fn from_str(s: &str) -> DealResult<Self> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(Grade::A),
            "B" => Ok(Grade::B),
            "C" => Ok(Grade::C),
            "D" => Ok(Grade::D),
            "F" => Ok(Grade::F),
            _ => Err(DealError::InvalidGrade(s.to_string())),
        }
    }
}

/// Lowest grade an investor is willing to consider.
///
/// Defaults to B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MinimumGrade {
    /// Accept every grade.
    Any,
    /// Accept this grade or better.
    AtLeast(Grade),
}

impl Default for MinimumGrade {
    fn default() -> Self {
        Self::AtLeast(Grade::B)
    }
}

impl MinimumGrade {
    /// The minimum as a grade, `None` for [`MinimumGrade::Any`].
    pub fn grade(&self) -> Option<Grade> {
        match self {
            Self::Any => None,
            Self::AtLeast(g) => Some(*g),
        }
    }

    /// Returns true if `grade` satisfies this minimum.
    pub fn admits(&self, grade: Grade) -> bool {
        self.grade().map_or(true, |min| grade.is_at_least(min))
    }
}

impl PartialEq<Grade> for MinimumGrade {
    fn eq(&self, other: &Grade) -> bool {
        self.grade() == Some(*other)
    }
}

impl From<Grade> for MinimumGrade {
    fn from(grade: Grade) -> Self {
        Self::AtLeast(grade)
    }
}

impl fmt::Display for MinimumGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.grade() {
            Some(g) => write!(f, "{g}"),
            None => f.write_str("any"),
        }
    }
}

impl FromStr for MinimumGrade {
    type Err = DealError;

    fn from_str(s: &str) -> DealResult<Self> {
        if s.trim().eq_ignore_ascii_case("any") {
            return Ok(Self::Any);
        }
        Grade::from_str(s).map(Self::AtLeast)
    }
}

impl TryFrom<String> for MinimumGrade {
    type Error = DealError;

    fn try_from(s: String) -> DealResult<Self> {
        s.parse()
    }
}

impl From<MinimumGrade> for String {
    fn from(min: MinimumGrade) -> Self {
        min.to_string()
    }
}

/// Points awarded per metric when grading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Cap rate points (0-25).
    pub cap_rate: u32,
    /// Cash flow points (0-25).
    pub cash_flow: u32,
    /// ROI points (0-20).
    pub roi: u32,
    /// Risk points (0-20).
    pub risk: u32,
    /// DSCR points (0-10).
    pub dscr: u32,
}

impl ScoreBreakdown {
    /// Sum of all components.
    pub fn total(&self) -> u32 {
        self.cap_rate + self.cash_flow + self.roi + self.risk + self.dscr
    }
}

/// Graded assessment of a deal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealGrade {
    /// Letter grade.
    pub grade: Grade,
    /// Score from 0 to 100.
    pub score: u32,
    /// One-sentence summary of the grade.
    pub explanation: String,
    /// Favorable findings, in metric order.
    pub strengths: Vec<String>,
    /// Unfavorable findings, in metric order.
    pub weaknesses: Vec<String>,
    /// Suggested actions, in metric order.
    pub recommendations: Vec<String>,
    /// Points per metric.
    pub breakdown: ScoreBreakdown,
}
