/// Colors used across the page

use iced::Color;

pub const WHITE: Color = Color::WHITE;

/// Page background
pub const BACKGROUND: Color = rgb(1.0, 1.0, 1.0);

/// Bottom of the featured section gradient
pub const MUTED: Color = rgb(0.945, 0.961, 0.976);

/// Body text
pub const FOREGROUND: Color = rgb(0.008, 0.031, 0.09);

/// Secondary text
pub const MUTED_FOREGROUND: Color = rgb(0.392, 0.455, 0.545);

/// Card surface
pub const CARD: Color = Color::WHITE;

pub const BORDER: Color = rgb(0.886, 0.91, 0.941);

/// Tag chip fill, text and ring
pub const CHIP_FILL: Color = rgb(0.937, 0.965, 1.0);
pub const CHIP_TEXT: Color = rgb(0.114, 0.306, 0.847);
pub const CHIP_RING: Color = rgba(0.114, 0.306, 0.847, 0.1);

/// Hero overlay gradient accents
pub const ACCENT_BLUE: Color = rgba(0.231, 0.51, 0.965, 0.2);
pub const ACCENT_PURPLE: Color = rgba(0.659, 0.333, 0.969, 0.2);
pub const ACCENT_PINK: Color = rgba(0.925, 0.282, 0.6, 0.2);

const fn rgb(r: f32, g: f32, b: f32) -> Color {
    Color { r, g, b, a: 1.0 }
}

const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Color {
    Color { r, g, b, a }
}

/// Same color with its alpha scaled by `opacity`
pub fn fade(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

/// Straight-alpha blend of `top` over `bottom`
pub fn mix(bottom: Color, top: Color, amount: f32) -> Color {
    let t = amount.clamp(0.0, 1.0);
    Color {
        r: bottom.r + (top.r - bottom.r) * t,
        g: bottom.g + (top.g - bottom.g) * t,
        b: bottom.b + (top.b - bottom.b) * t,
        a: bottom.a,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_scales_alpha_only() {
        let faded = fade(CHIP_TEXT, 0.5);
        assert_eq!(faded.r, CHIP_TEXT.r);
        assert_eq!(faded.a, 0.5);
        assert_eq!(fade(WHITE, 3.0).a, 1.0);
    }

    #[test]
    fn test_mix_endpoints() {
        assert_eq!(mix(WHITE, Color::BLACK, 0.0), WHITE);
        assert_eq!(mix(WHITE, Color::BLACK, 1.0), Color::BLACK);
    }
}
