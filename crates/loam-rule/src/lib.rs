//! Rulestring parsing and canonical serialization for Loam.
//!
//! A rulestring names a Life-like transition rule in `B<digits>/S<digits>`
//! form: the digits after `B` are the neighbor counts that make a dead
//! cell come alive, the digits after `S` are the counts that let a live
//! cell survive. Classic Conway is `B3/S23`.
//!
//! Parsing is an explicit scanner, not a regex: literal `B`, a non-empty
//! digit run, literal `/`, literal `S`, a non-empty digit run, end of
//! input. Digits may repeat and appear in any order; the parsed sets are
//! deduplicated and [`canonical`](Rulestring::canonical) re-emits them
//! sorted ascending.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod digits;
pub mod error;

pub use digits::DigitSet;
pub use error::RuleError;

use std::fmt;
use std::str::FromStr;

/// A parsed Life-like rule: birth and survival neighbor-count sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rulestring {
    birth: DigitSet,
    survive: DigitSet,
}

impl Rulestring {
    /// Parse a `B<digits>/S<digits>` rulestring.
    ///
    /// The letters are literal and case-sensitive. Each digit run must be
    /// non-empty; every other shape is rejected with
    /// [`RuleError::Malformed`].
    ///
    /// ```
    /// use loam_rule::Rulestring;
    ///
    /// let rule = Rulestring::parse("B764/S29342").unwrap();
    /// assert_eq!(rule.canonical(), "B467/S2349");
    /// ```
    pub fn parse(text: &str) -> Result<Self, RuleError> {
        let mut scanner = Scanner::new(text);
        scanner.literal('B')?;
        let birth = scanner.digit_run()?;
        scanner.literal('/')?;
        scanner.literal('S')?;
        let survive = scanner.digit_run()?;
        scanner.end()?;
        Ok(Self { birth, survive })
    }

    /// Build a rule from explicit digit sets.
    pub fn new(birth: DigitSet, survive: DigitSet) -> Self {
        Self { birth, survive }
    }

    /// Neighbor counts that bring a dead cell to life.
    pub fn birth(&self) -> DigitSet {
        self.birth
    }

    /// Neighbor counts that keep a live cell alive.
    pub fn survive(&self) -> DigitSet {
        self.survive
    }

    /// `true` when a dead cell with `count` live neighbors is born.
    pub fn born(&self, count: u8) -> bool {
        self.birth.contains(count)
    }

    /// `true` when a live cell with `count` live neighbors survives.
    pub fn survives(&self, count: u8) -> bool {
        self.survive.contains(count)
    }

    /// Canonical text: digits deduplicated and sorted ascending.
    pub fn canonical(&self) -> String {
        format!("B{}/S{}", self.birth, self.survive)
    }
}

impl Default for Rulestring {
    /// Classic Conway rules, `B3/S23`.
    fn default() -> Self {
        Self {
            birth: DigitSet::from_digits(&[3]),
            survive: DigitSet::from_digits(&[2, 3]),
        }
    }
}

impl fmt::Display for Rulestring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B{}/S{}", self.birth, self.survive)
    }
}

impl FromStr for Rulestring {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Character-at-a-time scanner over a rulestring.
struct Scanner<'a> {
    text: &'a str,
    rest: std::str::Chars<'a>,
    peeked: Option<char>,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        let mut rest = text.chars();
        let peeked = rest.next();
        Self { text, rest, peeked }
    }

    fn bump(&mut self) {
        self.peeked = self.rest.next();
    }

    fn malformed(&self, expected: &'static str) -> RuleError {
        RuleError::Malformed {
            text: self.text.to_string(),
            expected,
        }
    }

    fn literal(&mut self, c: char) -> Result<(), RuleError> {
        let expected = match c {
            'B' => "literal 'B'",
            '/' => "literal '/'",
            'S' => "literal 'S'",
            _ => "literal",
        };
        if self.peeked != Some(c) {
            return Err(self.malformed(expected));
        }
        self.bump();
        Ok(())
    }

    fn digit_run(&mut self) -> Result<DigitSet, RuleError> {
        let mut set = DigitSet::empty();
        while let Some(c) = self.peeked {
            match c.to_digit(10) {
                Some(d) => {
                    set.insert(d as u8);
                    self.bump();
                }
                None => break,
            }
        }
        if set.is_empty() {
            return Err(self.malformed("at least one digit"));
        }
        Ok(set)
    }

    fn end(&mut self) -> Result<(), RuleError> {
        if self.peeked.is_some() {
            return Err(self.malformed("end of input"));
        }
        Ok(())
    }
}
