//! Rendering: draws the game scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It reads game state and produces pixels; it never mutates the game.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::Camera;
use crate::consts::GRID_SPACING;
use crate::game::GameCore;
use crate::geom::{Point, Rect};

const BACKGROUND: &str = "#101418";
const OUT_OF_BOUNDS: &str = "#07090b";
const GRID: &str = "rgba(255, 255, 255, 0.06)";
const BORDER: &str = "#3a4550";
const OBSTACLE_FILL: &str = "#5b6770";
const OBSTACLE_EDGE: &str = "#2a3238";
const PLAYER_FILL: &str = "#f5a524";
const PLAYER_EDGE: &str = "#fff4dc";
const HUD_TEXT: &str = "rgba(255, 255, 255, 0.8)";

/// Draw the full scene: world, obstacles, cube, then the HUD.
///
/// `dpr` is the device pixel ratio; the viewport comes from the camera, in CSS pixels.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw(ctx: &CanvasRenderingContext2d, game: &GameCore, dpr: f64) -> Result<(), JsValue> {
    let camera = &game.camera;
    let world = &game.world;

    // Layer 1: clear in screen space.
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.set_fill_style_str(OUT_OF_BOUNDS);
    ctx.fill_rect(0.0, 0.0, camera.viewport_width, camera.viewport_height);

    // Layer 2: world space.
    ctx.save();
    apply_camera(ctx, camera)?;

    let bounds = world.bounds();
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(bounds.x, bounds.y, bounds.width, bounds.height);
    draw_grid(ctx, camera, bounds);
    ctx.set_stroke_style_str(BORDER);
    ctx.set_line_width(2.0 / camera.zoom());
    ctx.stroke_rect(bounds.x, bounds.y, bounds.width, bounds.height);

    for block in visible(camera, &world.obstacles) {
        draw_block(ctx, block, OBSTACLE_FILL, OBSTACLE_EDGE, camera.zoom());
    }
    draw_block(ctx, &world.player, PLAYER_FILL, PLAYER_EDGE, camera.zoom());
    ctx.restore();

    // Layer 3: HUD in screen space.
    draw_hud(ctx, game)
}

fn apply_camera(ctx: &CanvasRenderingContext2d, camera: &Camera) -> Result<(), JsValue> {
    ctx.translate(camera.viewport_width * 0.5, camera.viewport_height * 0.5)?;
    ctx.scale(camera.zoom(), camera.zoom())?;
    ctx.translate(-camera.center.x, -camera.center.y)
}

/// World-space rectangle currently on screen.
fn view_rect(camera: &Camera) -> Rect {
    let top_left = camera.screen_to_world(Point::new(0.0, 0.0));
    let bottom_right = camera.screen_to_world(Point::new(camera.viewport_width, camera.viewport_height));
    Rect::new(top_left.x, top_left.y, bottom_right.x - top_left.x, bottom_right.y - top_left.y)
}

fn visible<'a>(camera: &Camera, blocks: &'a [Rect]) -> impl Iterator<Item = &'a Rect> {
    let view = view_rect(camera);
    blocks.iter().filter(move |block| block.overlaps(&view))
}

fn draw_grid(ctx: &CanvasRenderingContext2d, camera: &Camera, bounds: Rect) {
    let view = view_rect(camera);
    let left = view.x.max(bounds.x);
    let right = view.right().min(bounds.right());
    let top = view.y.max(bounds.y);
    let bottom = view.bottom().min(bounds.bottom());
    if left >= right || top >= bottom {
        return;
    }

    ctx.begin_path();
    let mut x = (left / GRID_SPACING).ceil() * GRID_SPACING;
    while x <= right {
        ctx.move_to(x, top);
        ctx.line_to(x, bottom);
        x += GRID_SPACING;
    }
    let mut y = (top / GRID_SPACING).ceil() * GRID_SPACING;
    while y <= bottom {
        ctx.move_to(left, y);
        ctx.line_to(right, y);
        y += GRID_SPACING;
    }
    ctx.set_stroke_style_str(GRID);
    ctx.set_line_width(1.0 / camera.zoom());
    ctx.stroke();
}

fn draw_block(ctx: &CanvasRenderingContext2d, block: &Rect, fill: &str, edge: &str, zoom: f64) {
    ctx.set_fill_style_str(fill);
    ctx.fill_rect(block.x, block.y, block.width, block.height);
    ctx.set_stroke_style_str(edge);
    ctx.set_line_width(1.5 / zoom);
    ctx.stroke_rect(block.x, block.y, block.width, block.height);
}

fn draw_hud(ctx: &CanvasRenderingContext2d, game: &GameCore) -> Result<(), JsValue> {
    ctx.set_font("12px ui-monospace, monospace");
    ctx.set_fill_style_str(HUD_TEXT);
    let lines = [
        format!("seed {}  blocks {}", game.config.seed, game.world.obstacles.len()),
        format!("zoom {:.2}x", game.camera.zoom()),
    ];
    for (row, line) in (0_u32..).zip(lines.iter()) {
        ctx.fill_text(line, 12.0, 20.0 + f64::from(row) * 16.0)?;
    }
    Ok(())
}
