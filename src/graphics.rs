//! Drawing helpers for the macroquad front end.
//!
//! Everything here reads simulation state through the library's accessors;
//! the core never depends on rendering.

use evodrive::simulation::evaluation::Generation;
use evodrive::simulation::params::Params;
use evodrive::simulation::track::TrackMap;
use macroquad::prelude::*;

const RADAR_COLOR: Color = GREEN;
const HUD_COLOR: Color = BLUE;

/// Rasterizes the track map into a texture once at startup.
pub fn track_texture(map: &TrackMap) -> Texture2D {
    let mut image = Image::gen_image_color(map.width() as u16, map.height() as u16, DARKGRAY);
    for y in 0..map.height() {
        for x in 0..map.width() {
            if map.boundary_at(x as i32, y as i32) {
                image.set_pixel(x as u32, y as u32, WHITE);
            }
        }
    }
    Texture2D::from_image(&image)
}

/// Draws the track background.
pub fn draw_track(texture: &Texture2D) {
    draw_texture(texture, 0.0, 0.0, WHITE);
}

/// Draws every live vehicle with its radar fan.
pub fn draw_vehicles(generation: &Generation, params: &Params) {
    for vehicle in generation.vehicles() {
        if !vehicle.is_alive() {
            continue;
        }

        for reading in &vehicle.radars {
            draw_line(
                vehicle.center[0],
                vehicle.center[1],
                reading.endpoint[0],
                reading.endpoint[1],
                1.0,
                RADAR_COLOR,
            );
            draw_circle(reading.endpoint[0], reading.endpoint[1], 5.0, RADAR_COLOR);
        }

        // The heading convention negates the angle for screen coordinates,
        // so the drawn rotation is the negated heading as well.
        draw_rectangle_ex(
            vehicle.center[0],
            vehicle.center[1],
            params.car_width,
            params.car_height,
            DrawRectangleParams {
                offset: vec2(0.5, 0.5),
                rotation: (-vehicle.heading).to_radians(),
                color: SKYBLUE,
            },
        );
    }
}

/// Generation index and alive count, drawn as two text lines.
pub fn draw_hud(generation: &Generation, params: &Params) {
    let x = params.bounds_width / 2.0 - 60.0;
    draw_text(
        &format!("Generation: {}", generation.index()),
        x,
        450.0,
        30.0,
        HUD_COLOR,
    );
    draw_text(
        &format!("Still Alive: {}", generation.alive_count()),
        x,
        490.0,
        20.0,
        HUD_COLOR,
    );
}
