//! Executes game_core draw lists with macroquad

use game_core::render::{draw_list, DrawCommand, Tint};
use game_core::Game;
use macroquad::prelude::*;

fn color(tint: Tint) -> Color {
    match tint {
        Tint::White => WHITE,
        Tint::Gray => GRAY,
        Tint::LightGray => LIGHTGRAY,
        Tint::Green => GREEN,
        Tint::Red => RED,
    }
}

pub fn draw_frame(game: &Game) {
    clear_background(BLACK);

    for command in draw_list(game) {
        match command {
            DrawCommand::Text {
                text,
                x,
                y,
                size,
                tint,
            } => {
                // macroquad positions text by its baseline
                let dims = measure_text(&text, None, size as u16, 1.0);
                draw_text(&text, x, y + dims.offset_y, size, color(tint));
            }
            DrawCommand::Rect { x, y, w, h, tint } => draw_rectangle(x, y, w, h, color(tint)),
            DrawCommand::Circle {
                x,
                y,
                radius,
                tint,
            } => draw_circle(x, y, radius, color(tint)),
        }
    }
}
