// Simple color struct holding an RGB triple, plus the fixed palette particles pick from

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

// amber, purple, cyan, emerald, rose
pub const PALETTE: [Color; 5] = [
    Color::rgb(251, 191, 36),
    Color::rgb(192, 132, 252),
    Color::rgb(34, 211, 238),
    Color::rgb(110, 231, 183),
    Color::rgb(253, 164, 175),
];

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    // Channel-wise average, rounded down
    pub fn blend(self, other: Color) -> Color {
        let mix = |a: u8, b: u8| ((a as u16 + b as u16) / 2) as u8;
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }

    // CSS color string usable as a canvas fill/stroke style or gradient stop
    pub fn rgba(self, alpha: f64) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, alpha)
    }
}
