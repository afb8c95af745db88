/// A colour, expressed in the RGB or grey colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub const fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new colour in the Gray space, g ranges from 0.0 to 1.0
    pub const fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }
}

impl<T: Into<f32>> From<(T, T, T)> for Colour {
    fn from(c: (T, T, T)) -> Self {
        Colour::RGB {
            r: c.0.into(),
            g: c.1.into(),
            b: c.2.into(),
        }
    }
}

/// The fixed palette of the résumé layout
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };

    /// `#edf2f7`, the sidebar tint
    pub const SIDEBAR: Colour = Colour::RGB {
        r: 237.0 / 255.0,
        g: 242.0 / 255.0,
        b: 247.0 / 255.0,
    };
    /// Timeline guide lines and markers
    pub const GUIDE: Colour = Colour::new_rgb(0.3, 0.3, 0.3);
    /// Company / institution lines under a timeline heading
    pub const SECONDARY_HEADING: Colour = Colour::new_rgb(0.3, 0.3, 1.0);

    /// Contact icon colours, cycled in order over the contact lines
    pub const ICONS: [Colour; 4] = [
        Colour::new_rgb(0.2, 0.4, 0.8),
        Colour::new_rgb(0.2, 0.7, 0.2),
        Colour::new_rgb(0.8, 0.3, 0.3),
        Colour::new_rgb(0.5, 0.3, 0.7),
    ];
}
