//! Intro canvas - projects the sequence onto the terminal buffer
//!
//! Per frame, in order: background fill, label, particle erase pass, fade
//! overlay, then the sequencer's completion check. Particles only ever
//! subtract label coverage (the destination-out analog); the fade overlay
//! mixes every painted cell back toward the background color.

use std::time::Instant;

use rand::Rng;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::StatefulWidget;

use crate::tui::themes::Theme;

use super::font::{LabelLayout, CELL_H, CELL_W, GLYPH_ROWS};
use super::particle::RADIUS_PX;
use super::sequencer::{IntroSequencer, LABEL};

pub struct IntroCanvas<'a> {
    theme: &'a Theme,
    now: Instant,
}

impl<'a> IntroCanvas<'a> {
    pub fn new(theme: &'a Theme, now: Instant) -> Self {
        Self { theme, now }
    }
}

impl StatefulWidget for IntroCanvas<'_> {
    type State = IntroSequencer;

    fn render(self, area: Rect, buf: &mut Buffer, seq: &mut IntroSequencer) {
        let Some(elapsed) = seq.begin_frame(self.now) else {
            return;
        };

        fill_background(area, buf, self.theme.bg);

        // a zero-area canvas still advances on wall-clock time, so the host
        // is never stuck waiting on a surface that cannot draw
        if area.width == 0 || area.height == 0 {
            seq.finish_frame(elapsed);
            return;
        }

        let canvas_w = f32::from(area.width) * CELL_W;
        let canvas_h = f32::from(area.height) * CELL_H;
        let layout = LabelLayout::compute(LABEL, canvas_w, canvas_h);

        if seq.reduced_motion() {
            // skip path: plain background only, no label flash
            seq.finish_frame(elapsed);
            return;
        }

        // label first, then the particle erase pass, then one paint of
        // whatever coverage survives
        let mut label = LabelCells::place(&layout, area);
        seq.step_particles(elapsed, &layout);
        erase_particles(seq, &mut label);
        label.paint(buf, self.theme.bg, self.theme.label);

        let fade = seq.fade_progress(elapsed);
        if fade > 0.0 {
            apply_fade(area, buf, self.theme.bg, fade);
        }

        seq.finish_frame(elapsed);
    }
}

fn fill_background(area: Rect, buf: &mut Buffer, bg: Color) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.reset();
                cell.set_bg(bg);
            }
        }
    }
}

/// The label's cells with their remaining coverage (1.0 = fully inked)
struct LabelCells {
    area: Rect,
    /// label origin in area-local cells; particle canvas space shares this
    /// origin, so erasure maps straight through
    origin_col: u16,
    origin_row: u16,
    width: usize,
    rows: usize,
    /// row-major coverage; 0.0 cells were never part of a glyph or are
    /// fully eroded
    coverage: Vec<f32>,
    /// character painted per cell for the small-font path
    chars: Vec<char>,
}

impl LabelCells {
    fn place(layout: &LabelLayout, area: Rect) -> Self {
        if layout.big {
            let width = super::font::big_width(LABEL);
            let rows = GLYPH_ROWS;
            let mut coverage = vec![0.0; width * rows];
            let chars = vec!['█'; width * rows];
            for (col, row) in LabelLayout::big_cells(LABEL) {
                coverage[row * width + col] = 1.0;
            }
            Self {
                area,
                origin_col: area.width.saturating_sub(width as u16) / 2,
                origin_row: area.height.saturating_sub(rows as u16) / 2,
                width,
                rows,
                coverage,
                chars,
            }
        } else {
            let chars: Vec<char> = LABEL.chars().collect();
            let width = chars.len();
            let coverage = chars
                .iter()
                .map(|&c| if c == ' ' { 0.0 } else { 1.0 })
                .collect();
            Self {
                area,
                origin_col: area.width.saturating_sub(width as u16) / 2,
                origin_row: area.height / 2,
                width,
                rows: 1,
                coverage,
                chars,
            }
        }
    }

    fn paint(&self, buf: &mut Buffer, bg: Color, ink: Color) {
        for row in 0..self.rows {
            for col in 0..self.width {
                let c = self.coverage[row * self.width + col];
                if c <= 0.0 {
                    continue;
                }
                let x = self.area.left() + self.origin_col + col as u16;
                let y = self.area.top() + self.origin_row + row as u16;
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(self.chars[row * self.width + col]);
                    cell.set_fg(mix(bg, ink, c));
                    cell.set_bg(bg);
                }
            }
        }
    }

    /// Subtract coverage inside a circle of `radius` virtual pixels around
    /// a point in canvas space
    fn erase(&mut self, px: f32, py: f32, radius: f32, alpha: f32) {
        if alpha <= 0.0 {
            return;
        }
        let reach_cols = (radius / CELL_W).ceil() as i32;
        let reach_rows = (radius / CELL_H).ceil() as i32;
        let center_col = (px / CELL_W) as i32 - i32::from(self.origin_col);
        let center_row = (py / CELL_H) as i32 - i32::from(self.origin_row);

        for dr in -reach_rows..=reach_rows {
            for dc in -reach_cols..=reach_cols {
                let col = center_col + dc;
                let row = center_row + dr;
                if col < 0 || row < 0 || col as usize >= self.width || row as usize >= self.rows {
                    continue;
                }
                // distance from the particle to the cell center, in px
                let dx = dc as f32 * CELL_W;
                let dy = dr as f32 * CELL_H;
                if dx * dx + dy * dy > radius * radius {
                    continue;
                }
                let slot = &mut self.coverage[row as usize * self.width + col as usize];
                *slot = (*slot - alpha).max(0.0);
            }
        }
    }
}

fn erase_particles(seq: &IntroSequencer, label: &mut LabelCells) {
    if seq.particles().is_empty() {
        return;
    }
    let mut rng = rand::thread_rng();
    for p in seq.particles() {
        // radius is rolled per draw, like the choreography calls for
        let radius = rng.gen_range(RADIUS_PX);
        label.erase(p.x, p.y, radius, p.alpha());
    }
}

/// Full-canvas overlay in the background color at the given alpha
fn apply_fade(area: Rect, buf: &mut Buffer, bg: Color, fade: f32) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                if fade >= 1.0 {
                    cell.reset();
                    cell.set_bg(bg);
                } else {
                    let faded = mix(cell.fg, bg, fade);
                    cell.set_fg(faded);
                }
            }
        }
    }
}

/// Linear blend between two RGB colors; non-RGB colors (terminal palette
/// themes) snap at the halfway point
pub fn mix(from: Color, to: Color, t: f32) -> Color {
    use palette::{LinSrgb, Mix, Srgb};

    let (Color::Rgb(fr, fg, fb), Color::Rgb(tr, tg, tb)) = (from, to) else {
        return if t < 0.5 { from } else { to };
    };
    let a: LinSrgb<f32> = Srgb::new(fr, fg, fb).into_format::<f32>().into_linear();
    let b: LinSrgb<f32> = Srgb::new(tr, tg, tb).into_format::<f32>().into_linear();
    let mixed: Srgb<f32> = Srgb::from_linear(a.mix(b, t.clamp(0.0, 1.0)));
    let out = mixed.into_format::<u8>();
    Color::Rgb(out.red, out.green, out.blue)
}
