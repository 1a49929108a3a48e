// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display metrics and colors.

use crate::error::Error;

/// An 8-bit sRGB color with straight alpha.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha, `255` is opaque.
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Creates a color from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

/// Metrics and colors used to lay out and paint rows.
///
/// Geometry is in logical pixels. Only `row_height` and `indent_width` affect layout;
/// the chevron fields also shape hit testing.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    /// Height of every row.
    pub row_height: f64,
    /// Horizontal indent per depth level.
    pub indent_width: f64,
    /// Width of the chevron glyph.
    pub chevron_size: f64,
    /// Space after the chevron glyph that still belongs to the chevron hit region.
    pub chevron_margin: f64,
    /// Gap between the chevron area and the label text.
    pub label_padding: f64,
    /// Width of the active row's accent bar.
    pub accent_width: f64,
    /// Pixels scrolled per unit of wheel delta.
    pub scroll_speed: f64,
    /// Row background when idle.
    pub background: Rgba,
    /// Row background under the pointer.
    pub hover_background: Rgba,
    /// Row background of the active node.
    pub active_background: Rgba,
    /// Label color when idle.
    pub text: Rgba,
    /// Label color of the active node.
    pub active_text: Rgba,
    /// Accent bar color.
    pub accent: Rgba,
    /// Focus ring color.
    pub focus_ring: Rgba,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            row_height: 28.0,
            indent_width: 16.0,
            chevron_size: 12.0,
            chevron_margin: 8.0,
            label_padding: 8.0,
            accent_width: 3.0,
            scroll_speed: 1.0,
            background: Rgba::TRANSPARENT,
            hover_background: Rgba::rgb(0x2a, 0x2d, 0x2e),
            active_background: Rgba::rgb(0x37, 0x37, 0x3d),
            text: Rgba::rgb(0xcc, 0xcc, 0xcc),
            active_text: Rgba::rgb(0xff, 0xff, 0xff),
            accent: Rgba::rgb(0x00, 0x7a, 0xcc),
            focus_ring: Rgba::rgb(0x00, 0x7f, 0xd4),
        }
    }
}

impl Theme {
    /// Width of the chevron hit region measured from a row's left edge.
    pub fn chevron_extent(&self) -> f64 {
        self.chevron_size + self.chevron_margin
    }

    /// Checks that every metric is finite and in range.
    ///
    /// `row_height` must be positive; the other lengths must be non-negative.
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.row_height.is_finite() && self.row_height > 0.0) {
            return Err(Error::invalid_metric("row_height", self.row_height));
        }
        let lengths = [
            ("indent_width", self.indent_width),
            ("chevron_size", self.chevron_size),
            ("chevron_margin", self.chevron_margin),
            ("label_padding", self.label_padding),
            ("accent_width", self.accent_width),
        ];
        for (name, value) in lengths {
            if !(value.is_finite() && value >= 0.0) {
                return Err(Error::invalid_metric(name, value));
            }
        }
        if !self.scroll_speed.is_finite() {
            return Err(Error::invalid_metric("scroll_speed", self.scroll_speed));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_valid() {
        assert_eq!(Theme::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_metrics() {
        let theme = Theme {
            row_height: 0.0,
            ..Theme::default()
        };
        assert_eq!(
            theme.validate(),
            Err(Error::InvalidMetric {
                name: "row_height",
                value: 0.0
            })
        );

        let theme = Theme {
            indent_width: -1.0,
            ..Theme::default()
        };
        assert!(matches!(
            theme.validate(),
            Err(Error::InvalidMetric {
                name: "indent_width",
                ..
            })
        ));
    }
}
