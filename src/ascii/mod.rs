pub mod builtin_font;
pub mod density;
pub mod glyph_render;
pub mod search;
