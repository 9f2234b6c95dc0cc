//! Block-glyph font and label layout for the intro canvas
//!
//! The canvas works in virtual pixels (a terminal cell is CELL_W x CELL_H
//! of them). The label is drawn with a 5-row block font when the canvas is
//! wide enough, otherwise as a single row of plain characters; both follow
//! the same proportional-size-with-cap rule.

/// Virtual pixels per terminal cell
pub const CELL_W: f32 = 8.0;
pub const CELL_H: f32 = 16.0;

/// Rows a big glyph occupies
pub const GLYPH_ROWS: usize = 5;

/// Font size cap in virtual pixels
const MAX_FONT_PX: f32 = 120.0;

/// Glyphs for the letters the label needs; anything else renders as a
/// solid column via FALLBACK
const GLYPHS: &[(char, [&str; GLYPH_ROWS])] = &[
    (
        'M',
        [
            "██   ██", //
            "███ ███",
            "██ █ ██",
            "██   ██",
            "██   ██",
        ],
    ),
    (
        'I',
        [
            "██████", //
            "  ██  ",
            "  ██  ",
            "  ██  ",
            "██████",
        ],
    ),
    (
        'C',
        [
            " █████", //
            "██    ",
            "██    ",
            "██    ",
            " █████",
        ],
    ),
    (
        'H',
        [
            "██  ██", //
            "██  ██",
            "██████",
            "██  ██",
            "██  ██",
        ],
    ),
    (
        'E',
        [
            "██████", //
            "██    ",
            "█████ ",
            "██    ",
            "██████",
        ],
    ),
    (
        'L',
        [
            "██    ", //
            "██    ",
            "██    ",
            "██    ",
            "██████",
        ],
    ),
    (
        'U',
        [
            "██  ██", //
            "██  ██",
            "██  ██",
            "██  ██",
            " ████ ",
        ],
    ),
    (
        ' ',
        [
            "    ", //
            "    ",
            "    ",
            "    ",
            "    ",
        ],
    ),
];

const FALLBACK: [&str; GLYPH_ROWS] = ["████", "████", "████", "████", "████"];

/// Columns between adjacent glyphs
const LETTER_SPACING: usize = 1;

pub fn glyph(c: char) -> &'static [&'static str; GLYPH_ROWS] {
    GLYPHS
        .iter()
        .find(|(g, _)| *g == c)
        .map(|(_, rows)| rows)
        .unwrap_or(&FALLBACK)
}

/// Width of the label in cells when set in the block font
pub fn big_width(label: &str) -> usize {
    let glyphs: usize = label.chars().map(|c| glyph(c)[0].chars().count()).sum();
    let gaps = label.chars().count().saturating_sub(1) * LETTER_SPACING;
    glyphs + gaps
}

/// Per-frame placement of the label on the canvas, in virtual pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelLayout {
    pub center_x: f32,
    pub center_y: f32,
    /// Measured width of the rendered label
    pub text_width: f32,
    /// Effective font size (glyph height)
    pub font_px: f32,
    /// Whether the block font fits at this canvas width
    pub big: bool,
}

impl LabelLayout {
    /// Compute placement for a canvas of the given size in virtual pixels.
    /// Font size is proportional to canvas width, capped; the block font is
    /// used whenever that size reaches the block glyph height.
    pub fn compute(label: &str, canvas_w: f32, canvas_h: f32) -> Self {
        let font_px = (canvas_w / 8.0).min(MAX_FONT_PX);
        let block_px = GLYPH_ROWS as f32 * CELL_H;
        let big_cells = big_width(label) as f32;

        let big = font_px >= block_px && big_cells * CELL_W <= canvas_w;
        let (text_width, font_px) = if big {
            (big_cells * CELL_W, block_px)
        } else {
            (label.chars().count() as f32 * CELL_W, CELL_H)
        };

        Self {
            center_x: canvas_w / 2.0,
            center_y: canvas_h / 2.0,
            text_width,
            font_px,
            big,
        }
    }

    /// Where particles spawn: the label's bounding box, height scaled to
    /// roughly the glyph ink extent
    pub fn spawn_box(&self) -> super::particle::SpawnBox {
        super::particle::SpawnBox {
            center_x: self.center_x,
            center_y: self.center_y,
            width: self.text_width,
            height: self.font_px * 0.6,
        }
    }

    /// Iterate the filled cells of the big label as (col, row) offsets from
    /// the label's top-left cell
    pub fn big_cells(label: &str) -> impl Iterator<Item = (usize, usize)> + '_ {
        let mut cells = Vec::new();
        let mut col = 0usize;
        for c in label.chars() {
            let rows = glyph(c);
            for (row_idx, row) in rows.iter().enumerate() {
                for (col_idx, ch) in row.chars().enumerate() {
                    if ch != ' ' {
                        cells.push((col + col_idx, row_idx));
                    }
                }
            }
            col += rows[0].chars().count() + LETTER_SPACING;
        }
        cells.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs_have_uniform_row_widths() {
        for (c, rows) in GLYPHS {
            let width = rows[0].chars().count();
            for row in rows {
                assert_eq!(row.chars().count(), width, "ragged glyph {:?}", c);
            }
        }
    }

    #[test]
    fn test_big_width_counts_spacing() {
        // M(7) + 1 + I(6) = 14
        assert_eq!(big_width("MI"), 14);
        assert_eq!(big_width(""), 0);
    }

    #[test]
    fn test_layout_uses_big_font_when_wide() {
        // 120 cols x 40 rows
        let layout = LabelLayout::compute("MICHELLE LU", 960.0, 640.0);
        assert!(layout.big);
        assert_eq!(layout.font_px, 80.0);
        assert_eq!(layout.center_x, 480.0);
        assert_eq!(layout.text_width, big_width("MICHELLE LU") as f32 * 8.0);
    }

    #[test]
    fn test_layout_falls_back_on_narrow_canvas() {
        // 40 cols: 40 * 8 / 8 = 40 px font, below the 80 px block height
        let layout = LabelLayout::compute("MICHELLE LU", 320.0, 384.0);
        assert!(!layout.big);
        assert_eq!(layout.font_px, CELL_H);
        assert_eq!(layout.text_width, 11.0 * CELL_W);
    }

    #[test]
    fn test_spawn_box_tracks_label() {
        let layout = LabelLayout::compute("MICHELLE LU", 960.0, 640.0);
        let bbox = layout.spawn_box();
        assert_eq!(bbox.width, layout.text_width);
        assert_eq!(bbox.height, layout.font_px * 0.6);
    }

    #[test]
    fn test_big_cells_within_measured_width() {
        let width = big_width("MICHELLE LU");
        for (col, row) in LabelLayout::big_cells("MICHELLE LU") {
            assert!(col < width);
            assert!(row < GLYPH_ROWS);
        }
    }
}
