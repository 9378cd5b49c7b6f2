/// Oldest year the official archive goes back to.
pub const MIN_YEAR: u16 = 2007;
/// Sanity ceiling for year input.
pub const MAX_YEAR: u16 = 2100;

pub fn year_in_range(year: u16) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&year)
}

/// Exam paper number. The exam has exactly two papers per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum Paper {
    #[name = "Paper 1"]
    One,
    #[name = "Paper 2"]
    Two,
}

impl Paper {
    /// Digit used in archive filenames.
    pub fn digit(self) -> &'static str {
        match self {
            Paper::One => "1",
            Paper::Two => "2",
        }
    }
}

/// A candidate that probed positive.
#[derive(Debug, Clone)]
pub struct FoundPaper {
    /// The matched candidate URL.
    pub url: String,
    /// Final path segment of the URL, used as the attachment name.
    pub filename: String,
    /// PDF bytes, present only when direct delivery is enabled.
    pub payload: Option<Vec<u8>>,
}

/// Terminal outcome of a resolution run. The presentation layer renders
/// exactly these two cases; nothing else escapes the core.
#[derive(Debug)]
pub enum ResolutionOutcome {
    Found(FoundPaper),
    Exhausted { attempted: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_bounds() {
        assert!(!year_in_range(1999));
        assert!(!year_in_range(2006));
        assert!(year_in_range(2007));
        assert!(year_in_range(2014));
        assert!(year_in_range(2100));
        assert!(!year_in_range(2101));
    }

    #[test]
    fn paper_digits() {
        assert_eq!(Paper::One.digit(), "1");
        assert_eq!(Paper::Two.digit(), "2");
    }
}
