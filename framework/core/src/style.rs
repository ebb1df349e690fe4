use crate::error::ModelError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// An RGB colour for a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Color {
    type Err = ModelError;

    /// Accepts single letter colour codes, a few colour names and `#RRGGBB` hex values.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let color = match s {
            "r" | "red" => Color::rgb(255, 0, 0),
            "g" | "green" => Color::rgb(0, 128, 0),
            "b" | "blue" => Color::rgb(0, 0, 255),
            "c" | "cyan" => Color::rgb(0, 191, 191),
            "m" | "magenta" => Color::rgb(191, 0, 191),
            "y" | "yellow" => Color::rgb(191, 191, 0),
            "k" | "black" => Color::rgb(0, 0, 0),
            "w" | "white" => Color::rgb(255, 255, 255),
            "gray" | "grey" => Color::rgb(128, 128, 128),
            hex if hex.len() == 7 && hex.is_ascii() && hex.starts_with('#') => {
                let channel = |range: std::ops::Range<usize>| {
                    u8::from_str_radix(&hex[range], 16).map_err(|_| unknown("color", s))
                };
                Color::rgb(channel(1..3)?, channel(3..5)?, channel(5..7)?)
            }
            _ => return Err(unknown("color", s)),
        };

        Ok(color)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// The style of the line drawn between markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinePattern {
    Solid,
    Dashed,
    Dotted,
}

impl FromStr for LinePattern {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" | "-" => Ok(LinePattern::Solid),
            "dashed" | "--" => Ok(LinePattern::Dashed),
            "dotted" | ":" => Ok(LinePattern::Dotted),
            _ => Err(unknown("line style", s)),
        }
    }
}

/// The glyph drawn at each data point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Circle,
    TriangleDown,
    TriangleUp,
    Diamond,
    Square,
    Plus,
    Cross,
    Star,
}

impl FromStr for Marker {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "o" | "circle" => Ok(Marker::Circle),
            "v" | "triangle_down" => Ok(Marker::TriangleDown),
            "^" | "triangle_up" => Ok(Marker::TriangleUp),
            "D" | "diamond" => Ok(Marker::Diamond),
            "s" | "square" => Ok(Marker::Square),
            "P" | "plus" => Ok(Marker::Plus),
            "X" | "cross" => Ok(Marker::Cross),
            "*" | "star" => Ok(Marker::Star),
            _ => Err(unknown("marker", s)),
        }
    }
}

/// How a curve should appear on a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineStyle {
    pub color: Color,
    pub pattern: LinePattern,
    pub marker: Marker,
}

impl LineStyle {
    pub fn new(color: Color, pattern: LinePattern, marker: Marker) -> Self {
        Self {
            color,
            pattern,
            marker,
        }
    }

    /// Build a style from its colour, line style and marker tokens.
    pub fn parse(color: &str, pattern: &str, marker: &str) -> Result<Self, ModelError> {
        Ok(Self::new(color.parse()?, pattern.parse()?, marker.parse()?))
    }
}

fn unknown(kind: &'static str, token: &str) -> ModelError {
    ModelError::UnknownStyleToken {
        kind,
        token: token.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_color_codes_and_hex() {
        assert_eq!(Color::from_str("r").unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(Color::from_str("k").unwrap(), Color::rgb(0, 0, 0));
        assert_eq!(Color::from_str("#6E6E6E").unwrap(), Color::rgb(110, 110, 110));
        assert_eq!(Color::rgb(110, 110, 110).to_string(), "#6E6E6E");
    }

    #[test]
    fn should_reject_bad_hex() {
        assert!(Color::from_str("#6E6E6G").is_err());
        assert!(Color::from_str("#6E6").is_err());
    }

    #[test]
    fn should_parse_full_style() {
        let style = LineStyle::parse("g", "solid", "D").unwrap();
        assert_eq!(style.color, Color::rgb(0, 128, 0));
        assert_eq!(style.pattern, LinePattern::Solid);
        assert_eq!(style.marker, Marker::Diamond);
    }

    #[test]
    fn should_name_the_unknown_token() {
        let err = LineStyle::parse("r", "wavy", "o").unwrap_err();
        assert_eq!(err.to_string(), "Unknown line style token 'wavy'");
    }
}
