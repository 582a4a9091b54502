//! Report color palette, matching the figure style used in the document.

use plotters::style::RGBColor;

pub const CORAL: RGBColor = RGBColor(0xFF, 0x6B, 0x6B); // Primary accent
pub const TEAL: RGBColor = RGBColor(0x4E, 0xCD, 0xC4);
pub const SKY: RGBColor = RGBColor(0x45, 0xB7, 0xD1);
pub const SAGE: RGBColor = RGBColor(0x96, 0xCE, 0xB4);

/// Device breakdown slices (Mobile, Desktop, Tablet).
pub const DEVICE_COLORS: [RGBColor; 3] = [CORAL, TEAL, SKY];

/// Satisfaction buckets, best to worst.
pub const SATISFACTION_COLORS: [RGBColor; 5] = [
    RGBColor(0x4C, 0xAF, 0x50), // Very satisfied
    RGBColor(0x8B, 0xC3, 0x4A),
    RGBColor(0xFF, 0xC1, 0x07),
    RGBColor(0xFF, 0x98, 0x00),
    RGBColor(0xF4, 0x43, 0x36), // Very dissatisfied
];

/// Performance metric rows in the system metrics diagram.
pub const METRIC_ROW_COLORS: [RGBColor; 4] = [CORAL, TEAL, SKY, SAGE];

/// Quality indicator rows in the system metrics diagram.
pub const QUALITY_ROW_COLORS: [RGBColor; 4] = [
    RGBColor(0xFF, 0x9F, 0x43), // Orange
    RGBColor(0x10, 0xAC, 0x84), // Green
    RGBColor(0x5F, 0x27, 0xCD), // Purple
    RGBColor(0x00, 0xD2, 0xD3), // Cyan
];

pub const ARROW_COLOR: RGBColor = RGBColor(0x2C, 0x3E, 0x50);
pub const SUBTITLE_COLOR: RGBColor = RGBColor(0x7F, 0x8C, 0x8D);
