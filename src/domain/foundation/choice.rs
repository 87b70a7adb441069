//! Binary choice, list axis and row label value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// One binary allocation decision: the varied option or the equal-payoff anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    /// The varied allocation (own payoff changes row to row).
    #[serde(rename = "L")]
    Left,
    /// The equal-payoff anchor `(e, e)`.
    #[serde(rename = "R")]
    Right,
}

impl Choice {
    /// Returns the 0/1 encoding used by the consistency check (Left = 0, Right = 1).
    pub fn encoded(&self) -> u8 {
        match self {
            Choice::Left => 0,
            Choice::Right => 1,
        }
    }

    /// Decodes a 0/1 value.
    pub fn try_from_encoded(value: u8) -> Result<Self, ValidationError> {
        match value {
            0 => Ok(Choice::Left),
            1 => Ok(Choice::Right),
            _ => Err(ValidationError::out_of_range("choice", 0, 1, value as i32)),
        }
    }

    pub fn is_left(&self) -> bool {
        matches!(self, Choice::Left)
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Choice::Right)
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::Left => write!(f, "L"),
            Choice::Right => write!(f, "R"),
        }
    }
}

impl FromStr for Choice {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L" | "l" | "Left" | "left" => Ok(Choice::Left),
            "R" | "r" | "Right" | "right" => Ok(Choice::Right),
            other => Err(ValidationError::invalid_format(
                "choice",
                format!("expected L or R, got '{}'", other),
            )),
        }
    }
}

/// The two decision lists of the test.
///
/// The x-list probes the domain of disadvantageous inequality (the counterpart
/// gets more than `e`), the y-list the domain of advantageous inequality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Both axes in canonical order.
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    /// Returns the row label prefix ("x" or "y").
    pub fn prefix(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-list", self.prefix())
    }
}

/// Label of a decision row, e.g. `x_1` or `y_5`.
///
/// The displayed number is 1-based; `index` is the 0-based position in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowLabel {
    pub axis: Axis,
    pub index: usize,
}

impl RowLabel {
    pub fn new(axis: Axis, index: usize) -> Self {
        Self { axis, index }
    }

    pub fn x(index: usize) -> Self {
        Self::new(Axis::X, index)
    }

    pub fn y(index: usize) -> Self {
        Self::new(Axis::Y, index)
    }
}

impl fmt::Display for RowLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.axis.prefix(), self.index + 1)
    }
}

impl FromStr for RowLabel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, number) = s
            .split_once('_')
            .ok_or_else(|| ValidationError::invalid_format("row_label", "missing '_' separator"))?;

        let axis = match prefix {
            "x" => Axis::X,
            "y" => Axis::Y,
            other => {
                return Err(ValidationError::invalid_format(
                    "row_label",
                    format!("unknown list prefix '{}'", other),
                ))
            }
        };

        let number: usize = number
            .parse()
            .map_err(|_| ValidationError::invalid_format("row_label", "row number is not an integer"))?;
        if number == 0 {
            return Err(ValidationError::invalid_format(
                "row_label",
                "row numbers start at 1",
            ));
        }

        Ok(Self::new(axis, number - 1))
    }
}

impl Serialize for RowLabel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RowLabel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_encodes_left_as_zero_and_right_as_one() {
        assert_eq!(Choice::Left.encoded(), 0);
        assert_eq!(Choice::Right.encoded(), 1);
    }

    #[test]
    fn choice_decodes_valid_values() {
        assert_eq!(Choice::try_from_encoded(0).unwrap(), Choice::Left);
        assert_eq!(Choice::try_from_encoded(1).unwrap(), Choice::Right);
    }

    #[test]
    fn choice_rejects_out_of_range_encoding() {
        assert!(Choice::try_from_encoded(2).is_err());
    }

    #[test]
    fn choice_parses_short_and_long_forms() {
        assert_eq!("L".parse::<Choice>().unwrap(), Choice::Left);
        assert_eq!("right".parse::<Choice>().unwrap(), Choice::Right);
        assert!("maybe".parse::<Choice>().is_err());
    }

    #[test]
    fn choice_serializes_as_single_letter() {
        assert_eq!(serde_json::to_string(&Choice::Left).unwrap(), "\"L\"");
        assert_eq!(serde_json::to_string(&Choice::Right).unwrap(), "\"R\"");
    }

    #[test]
    fn row_label_displays_one_based() {
        assert_eq!(RowLabel::x(0).to_string(), "x_1");
        assert_eq!(RowLabel::y(4).to_string(), "y_5");
    }

    #[test]
    fn row_label_parses_display_form() {
        assert_eq!("x_1".parse::<RowLabel>().unwrap(), RowLabel::x(0));
        assert_eq!("y_12".parse::<RowLabel>().unwrap(), RowLabel::y(11));
    }

    #[test]
    fn row_label_rejects_malformed_input() {
        assert!("x1".parse::<RowLabel>().is_err());
        assert!("z_1".parse::<RowLabel>().is_err());
        assert!("x_0".parse::<RowLabel>().is_err());
        assert!("x_a".parse::<RowLabel>().is_err());
    }

    #[test]
    fn row_label_round_trips_through_json() {
        let json = serde_json::to_string(&RowLabel::y(2)).unwrap();
        assert_eq!(json, "\"y_3\"");
        let back: RowLabel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RowLabel::y(2));
    }

    #[test]
    fn row_labels_order_x_before_y() {
        assert!(RowLabel::x(9) < RowLabel::y(0));
        assert!(RowLabel::x(0) < RowLabel::x(1));
    }
}
