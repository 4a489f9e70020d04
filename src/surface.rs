//! Drawing surface abstraction
//!
//! Layers and entities draw through [`Surface`] so the core never touches a
//! canvas directly. The browser implementation lives in `platform::web`;
//! [`RecordingSurface`] captures draw calls for headless runs and tests.

/// Axis-aligned rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// RGBA colour (alpha 0.0 - 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    /// Subtitle cyan
    pub const CYAN: Color = Color::rgb(0x3f, 0xd9, 0xdd);
    /// Score red
    pub const RED: Color = Color::rgb(0xc0, 0x2b, 0x0e);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS colour string for canvas fill styles
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("rgb({},{},{})", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        }
    }
}

/// Horizontal text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Font, colour and alignment for a text draw
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// CSS font shorthand, e.g. `14px joystix`
    pub font: String,
    pub color: Color,
    pub align: TextAlign,
}

impl TextStyle {
    pub fn new(font: &str, color: Color, align: TextAlign) -> Self {
        Self {
            font: font.to_string(),
            color,
            align,
        }
    }
}

/// Something the game can draw onto
pub trait Surface {
    /// Width in pixels
    fn width(&self) -> f32;
    /// Height in pixels
    fn height(&self) -> f32;
    /// Blit `src` from the sprite sheet image into `dest`
    fn draw_sprite(&mut self, src: Rect, dest: Rect);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle);
    /// Push the current drawing state
    fn save(&mut self);
    /// Pop the last saved drawing state
    fn restore(&mut self);
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Sprite { src: Rect, dest: Rect },
    FillRect { rect: Rect, color: Color },
    Text { text: String, x: f32, y: f32, style: TextStyle },
    Save,
    Restore,
}

/// Headless surface that records every draw call
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    commands: Vec<DrawCommand>,
    saved_depth: usize,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
            saved_depth: 0,
        }
    }

    /// Draw calls since the last [`RecordingSurface::clear`]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Number of save() calls not yet matched by restore()
    pub fn saved_depth(&self) -> usize {
        self.saved_depth
    }

    /// Recorded sprite blits, in draw order
    pub fn sprite_draws(&self) -> impl Iterator<Item = (&Rect, &Rect)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Sprite { src, dest } => Some((src, dest)),
            _ => None,
        })
    }

    /// Recorded text, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn draw_sprite(&mut self, src: Rect, dest: Rect) {
        self.commands.push(DrawCommand::Sprite { src, dest });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            style: style.clone(),
        });
    }

    fn save(&mut self) {
        self.saved_depth += 1;
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        // Unbalanced restore is a no-op, as on a canvas
        self.saved_depth = self.saved_depth.saturating_sub(1);
        self.commands.push(DrawCommand::Restore);
    }
}
