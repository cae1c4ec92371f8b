//! Rendering.
//!
//! [`render_system`] is an exclusive system: it borrows the raylib handle out
//! of the world for the duration of the frame, queries the world for what to
//! draw and puts the handle back.
//!
//! Draw order while playing: background layers (back to front), player,
//! obstacles. Once the round is over: background layers, then the status
//! message centred in the window.

use std::ffi::CString;

use bevy_ecs::prelude::*;
use log::warn;
use raylib::ffi;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::obstacle::Obstacle;
use crate::components::player::Player;
use crate::components::scrollinglayer::ScrollingLayer;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::debugmode::DebugMode;
use crate::resources::gamestate::GameState;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;

const STATUS_FONT_SIZE: i32 = 20;
const HINT_FONT_SIZE: i32 = 10;
const RESTART_HINT: &str = "Press ENTER to try again";

pub fn render_system(world: &mut World) {
    let Some(mut rl) = world.remove_non_send_resource::<RaylibHandle>() else {
        return;
    };
    let Some(thread) = world.remove_non_send_resource::<RaylibThread>() else {
        world.insert_non_send_resource(rl);
        return;
    };

    {
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::RAYWHITE);

        draw_layers(world, &mut d);

        let state = world.resource::<GameState>().get();
        match state.status_message() {
            None => {
                draw_sprites::<Player>(world, &mut d);
                draw_sprites::<Obstacle>(world, &mut d);
            }
            Some(message) => draw_status(world, &mut d, message),
        }

        if world.contains_resource::<DebugMode>() {
            draw_debug(world, &mut d);
        }
    }

    world.insert_non_send_resource(thread);
    world.insert_non_send_resource(rl);
}

/// Pixel width of `text` in raylib's default font. Text with an interior NUL
/// cannot be measured and reports 0.
fn measure_text_width(text: &str, font_size: i32) -> i32 {
    match CString::new(text) {
        Ok(c_text) => unsafe { ffi::MeasureText(c_text.as_ptr(), font_size) },
        Err(e) => {
            warn!("Cannot measure {:?}: {}", text, e);
            0
        }
    }
}

fn draw_layers(world: &mut World, d: &mut RaylibDrawHandle) {
    let mut layers: Vec<(ScrollingLayer, ZIndex)> = {
        let mut q = world.query::<(&ScrollingLayer, &ZIndex)>();
        q.iter(world).map(|(l, z)| (l.clone(), *z)).collect()
    };
    layers.sort_by_key(|(_, z)| *z);

    let textures = world.resource::<TextureStore>();
    for (layer, _z) in layers.iter() {
        if let Some(tex) = textures.get(&layer.tex_key) {
            d.draw_texture_pro(
                tex,
                layer.source(),
                layer.dest(),
                Vector2::zero(),
                0.0,
                Color::WHITE,
            );
        }
    }
}

/// Draw the current frame of every sprite on entities tagged with `T`.
/// Sprites whose texture is not in the store are skipped.
fn draw_sprites<T: Component>(world: &mut World, d: &mut RaylibDrawHandle) {
    let to_draw: Vec<(Sprite, MapPosition)> = {
        let mut q = world.query_filtered::<(&Sprite, &MapPosition), With<T>>();
        q.iter(world).map(|(s, p)| (s.clone(), *p)).collect()
    };

    let textures = world.resource::<TextureStore>();
    for (sprite, pos) in to_draw.iter() {
        if let Some(tex) = textures.get(&sprite.tex_key) {
            let dest = Rectangle {
                x: pos.pos.x,
                y: pos.pos.y,
                width: sprite.width,
                height: sprite.height,
            };
            d.draw_texture_pro(
                tex,
                sprite.source(),
                dest,
                Vector2::zero(),
                0.0,
                Color::WHITE,
            );
        }
    }
}

fn draw_status(world: &World, d: &mut RaylibDrawHandle, message: &str) {
    let screen = *world.resource::<ScreenSize>();

    let width = measure_text_width(message, STATUS_FONT_SIZE);
    d.draw_text(
        message,
        (screen.w - width) / 2,
        screen.h / 2,
        STATUS_FONT_SIZE,
        Color::WHITE,
    );

    let hint_width = measure_text_width(RESTART_HINT, HINT_FONT_SIZE);
    d.draw_text(
        RESTART_HINT,
        (screen.w - hint_width) / 2,
        screen.h / 2 + STATUS_FONT_SIZE + 4,
        HINT_FONT_SIZE,
        Color::LIGHTGRAY,
    );
}

fn draw_debug(world: &mut World, d: &mut RaylibDrawHandle) {
    let mut players = world.query_filtered::<(&BoxCollider, &MapPosition), With<Player>>();
    for (collider, position) in players.iter(world) {
        let rect = collider.rect(position.pos);
        d.draw_rectangle_lines(
            rect.x as i32,
            rect.y as i32,
            rect.width as i32,
            rect.height as i32,
            Color::RED,
        );
    }

    let mut obstacles = world.query::<(&Obstacle, &BoxCollider, &MapPosition)>();
    for (obstacle, footprint, position) in obstacles.iter(world) {
        let (center, radius) = obstacle.collision_circle(position.pos, footprint);
        d.draw_circle_lines(center.x as i32, center.y as i32, radius, Color::GREEN);
    }

    let state = world.resource::<GameState>().get();
    let fps = d.get_fps();
    let text = format!("DEBUG (F11) | FPS: {} | {:?}", fps, state);
    d.draw_text(&text, 10, 10, 10, Color::BLACK);
}
