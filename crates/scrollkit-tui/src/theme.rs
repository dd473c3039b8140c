use ratatui::style::Color;

/// Gruvbox Material palette used across the UI
pub struct GruvboxMaterial;

impl GruvboxMaterial {
    // Background colors
    pub const BG0: Color = Color::Rgb(0x28, 0x28, 0x28);
    pub const BG1: Color = Color::Rgb(0x32, 0x30, 0x2f);
    pub const BG2: Color = Color::Rgb(0x45, 0x40, 0x3d);

    // Foreground colors
    pub const FG0: Color = Color::Rgb(0xd4, 0xbe, 0x98);
    pub const FG1: Color = Color::Rgb(0xdd, 0xc7, 0xa1);
    pub const GREY0: Color = Color::Rgb(0x7c, 0x6f, 0x64);
    pub const GREY1: Color = Color::Rgb(0x92, 0x83, 0x74);
    pub const GREY2: Color = Color::Rgb(0xa8, 0x99, 0x84);

    // Palette colors
    pub const YELLOW: Color = Color::Rgb(0xd8, 0xa6, 0x57);
    pub const GREEN: Color = Color::Rgb(0xa9, 0xb6, 0x65);
    pub const AQUA: Color = Color::Rgb(0x89, 0xb4, 0x82);
    pub const BLUE: Color = Color::Rgb(0x7d, 0xae, 0xa3);

    // Semantic colors
    pub const SELECTION: Color = Color::Rgb(0x45, 0x40, 0x3d);
    pub const ACCENT: Color = Color::Rgb(0x89, 0xb4, 0x82);
}
