//! Paints clockcore draw instructions with an egui painter

use clockcore::geometry::{DrawInstruction, Point, Viewport};
use egui::{Align2, FontId, Painter, Pos2, Rect, Shape, Stroke};

use crate::theme::role_color;

/// Fit the 200x200 face into `rect`.
pub fn viewport_for(rect: Rect) -> Viewport {
    Viewport::fit_rect(rect.min.x, rect.min.y, rect.width(), rect.height())
}

fn screen_pos(viewport: &Viewport, p: Point) -> Pos2 {
    let s = viewport.to_screen(p);
    Pos2::new(s.x, s.y)
}

pub fn paint_clock(painter: &Painter, rect: Rect, instructions: impl IntoIterator<Item = DrawInstruction>) {
    let viewport = viewport_for(rect);
    let line_width = viewport.scale_length(1.0).max(1.0);

    for instruction in instructions {
        let color = role_color(instruction.role());
        match instruction {
            DrawInstruction::Tick { from, to, .. } => {
                painter.line_segment(
                    [screen_pos(&viewport, from), screen_pos(&viewport, to)],
                    Stroke::new(line_width, color),
                );
            }
            DrawInstruction::Numeral { text, anchor, font_size, .. } => {
                painter.text(
                    screen_pos(&viewport, anchor),
                    Align2::LEFT_BOTTOM,
                    text,
                    FontId::proportional(viewport.scale_length(font_size)),
                    color,
                );
            }
            DrawInstruction::Hand { points, .. } => {
                let points = points.iter().map(|p| screen_pos(&viewport, *p)).collect();
                painter.add(Shape::convex_polygon(points, color, Stroke::NONE));
            }
        }
    }
}
