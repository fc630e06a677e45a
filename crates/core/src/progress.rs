//! Progress meter rendering: a red → yellow → green gradient keyed on a percentage.

use std::fmt;

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const RED: Rgb = Rgb::new(255, 0, 0);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Map a percentage to the meter color.
///
/// Everything up to 50% is pure red. Above that the upper half is stretched
/// to 0..=100: green ramps up to yellow first, then red ramps down to green.
#[must_use]
pub fn color_for_percentage(percentage: f64) -> Rgb {
    let percentage = clamp_percentage(percentage);
    if percentage <= 50.0 {
        return Rgb::RED;
    }

    let adjusted = (percentage - 50.0) * 2.0;
    if adjusted < 50.0 {
        Rgb::new(255, channel(5.1 * adjusted), 0)
    } else {
        Rgb::new(channel(510.0 - 5.1 * adjusted), 255, 0)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

fn clamp_percentage(percentage: f64) -> f64 {
    if percentage.is_nan() {
        return 0.0;
    }
    percentage.clamp(0.0, 100.0)
}

/// Number of decimals used for percentage labels on the meters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayPrecision {
    Whole,
    #[default]
    Hundredths,
}

impl DisplayPrecision {
    /// Accepts `0` or `2`; other decimal counts are not offered.
    #[must_use]
    pub fn from_decimals(decimals: u8) -> Option<Self> {
        match decimals {
            0 => Some(Self::Whole),
            2 => Some(Self::Hundredths),
            _ => None,
        }
    }

    #[must_use]
    pub fn decimals(self) -> usize {
        match self {
            Self::Whole => 0,
            Self::Hundredths => 2,
        }
    }

    #[must_use]
    pub fn format(self, value: f64) -> String {
        format!("{value:.prec$}", prec = self.decimals())
    }
}

/// Everything a view needs to draw one meter.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBar {
    pub fill_percent: f64,
    pub color: Rgb,
    pub label: String,
}

impl ProgressBar {
    #[must_use]
    pub fn new(percentage: f64, precision: DisplayPrecision) -> Self {
        let fill_percent = clamp_percentage(percentage);
        Self {
            fill_percent,
            color: color_for_percentage(fill_percent),
            label: format!("{}%", precision.format(fill_percent)),
        }
    }

    /// Inline style for the fill element.
    #[must_use]
    pub fn fill_style(&self) -> String {
        format!("width: {}%; background-color: {};", self.fill_percent, self.color)
    }
}
