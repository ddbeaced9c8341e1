//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! World coordinates have their origin at the bottom-left and `y` growing
//! upwards; terminal rows grow downwards. The top row is reserved for the
//! HUD and the playfield is stretched over the remaining rows.

use crate::core::{GameConfig, GameSnapshot, HalfExtents, HitboxConfig};
use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const HUD_ROWS: u16 = 1;

/// Road edges sit this far in from each side of the playfield (world units).
const ROAD_SIDE_MARGIN: f32 = 150.0;
/// Vertical distance between lane dashes.
const STRIPE_SPACING: f32 = 80.0;
/// Lane dash half-length.
const STRIPE_HALF_WIDTH: f32 = 40.0;

const SKY: Rgb = Rgb::new(135, 206, 235);
const ROAD: Rgb = Rgb::new(128, 128, 128);
const HUD_BG: Rgb = Rgb::new(0, 0, 0);
const WHITE: Rgb = Rgb::new(255, 255, 255);
const YELLOW: Rgb = Rgb::new(255, 255, 0);
const RED: Rgb = Rgb::new(220, 40, 40);
const GOLD: Rgb = Rgb::new(255, 200, 40);
const BARRICADE: Rgb = Rgb::new(230, 110, 30);
const RUNNER: Rgb = Rgb::new(40, 60, 200);

/// Coin frames, indexed by quarter turns of the spin angle.
const COIN_FRAMES: [char; 4] = ['●', '◐', '│', '◑'];

pub const PLAYER_GLYPH: char = '█';
pub const OBSTACLE_GLYPH: char = '▓';
pub const STRIPE_GLYPH: char = '─';
pub const LANE_GLYPH: char = '│';

/// A lightweight terminal renderer for the runner.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Sprite sizes in world units; drawn the same size as their hit boxes.
    sprites: HitboxConfig,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(HitboxConfig::default())
    }
}

/// World → terminal cell mapping for one frame.
#[derive(Debug, Clone, Copy)]
struct Projection {
    width: u16,
    top: u16,
    rows: u16,
    screen_w: f32,
    screen_h: f32,
}

impl Projection {
    fn col(&self, x: f32) -> i32 {
        (x * self.width as f32 / self.screen_w).floor() as i32
    }

    fn row(&self, y: f32) -> i32 {
        self.top as i32 + ((self.screen_h - y) * self.rows as f32 / self.screen_h).floor() as i32
    }

    fn clamp_col(&self, c: i32) -> Option<u16> {
        (c >= 0 && c < self.width as i32).then_some(c as u16)
    }

    fn clamp_row(&self, r: i32) -> Option<u16> {
        let bottom = self.top as i32 + self.rows as i32;
        (r >= self.top as i32 && r < bottom).then_some(r as u16)
    }

    /// Cell rectangle covering a world box, clipped to the playfield.
    fn rect(&self, cx: f32, cy: f32, half: HalfExtents) -> Option<(u16, u16, u16, u16)> {
        let c0 = self.col(cx - half.x).max(0);
        let c1 = self.col(cx + half.x).min(self.width as i32 - 1);
        let r0 = self.row(cy + half.y).max(self.top as i32);
        let r1 = self
            .row(cy - half.y)
            .min(self.top as i32 + self.rows as i32 - 1);
        if c0 > c1 || r0 > r1 {
            return None;
        }
        Some((
            c0 as u16,
            r0 as u16,
            (c1 - c0 + 1) as u16,
            (r1 - r0 + 1) as u16,
        ))
    }
}

impl GameView {
    pub fn new(sprites: HitboxConfig) -> Self {
        Self { sprites }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.hitboxes.clone())
    }

    /// Render the current frame into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(WHITE, SKY).cell(' '));

        if viewport.height <= HUD_ROWS || viewport.width == 0 || snap.screen_height <= 0.0 {
            self.draw_hud(fb, snap, viewport);
            return;
        }

        let proj = Projection {
            width: viewport.width,
            top: HUD_ROWS,
            rows: viewport.height - HUD_ROWS,
            screen_w: snap.screen_width,
            screen_h: snap.screen_height,
        };

        self.draw_road(fb, snap, &proj);

        let coin_style = CellStyle::new(GOLD, ROAD).bold();
        for coin in &snap.coins {
            if let Some((x, y, w, h)) = proj.rect(coin.x, coin.y, self.sprites.coin) {
                fb.fill_rect(x, y, w, h, coin_frame(coin.angle), coin_style);
            }
        }

        let obstacle_style = CellStyle::new(BARRICADE, ROAD).bold();
        for obstacle in &snap.obstacles {
            if let Some((x, y, w, h)) = proj.rect(obstacle.x, obstacle.y, self.sprites.obstacle) {
                fb.fill_rect(x, y, w, h, OBSTACLE_GLYPH, obstacle_style);
            }
        }

        let player_style = CellStyle::new(RUNNER, ROAD);
        if let Some((x, y, w, h)) = proj.rect(snap.player.x, snap.player.y, self.sprites.player) {
            fb.fill_rect(x, y, w, h, PLAYER_GLYPH, player_style);
        }

        self.draw_hud(fb, snap, viewport);

        if snap.game_over {
            self.draw_game_over(fb, snap, &proj);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_road(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, proj: &Projection) {
        let road = CellStyle::new(WHITE, ROAD);
        let c0 = proj.col(ROAD_SIDE_MARGIN).max(0);
        let c1 = proj
            .col(snap.screen_width - ROAD_SIDE_MARGIN)
            .min(proj.width as i32);
        if c1 > c0 {
            fb.fill_rect(c0 as u16, proj.top, (c1 - c0) as u16, proj.rows, ' ', road);
        }

        // Lane lines.
        for &lane_x in &snap.lanes {
            if let Some(c) = proj.clamp_col(proj.col(lane_x)) {
                for r in proj.top..proj.top + proj.rows {
                    fb.put_char(c, r, LANE_GLYPH, road);
                }
            }
        }

        // Dashes scroll with the road phase and repeat every STRIPE_SPACING.
        let stripe = CellStyle::new(YELLOW, ROAD);
        let mut y = snap.road_offset.rem_euclid(STRIPE_SPACING);
        while y <= snap.screen_height {
            if let Some(r) = proj.clamp_row(proj.row(y)) {
                for &lane_x in &snap.lanes {
                    let s0 = proj.col(lane_x - STRIPE_HALF_WIDTH).max(0);
                    let s1 = proj
                        .col(lane_x + STRIPE_HALF_WIDTH)
                        .min(proj.width as i32 - 1);
                    for c in s0..=s1 {
                        fb.put_char(c as u16, r, STRIPE_GLYPH, stripe);
                    }
                }
            }
            y += STRIPE_SPACING;
        }
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        if viewport.height == 0 {
            return;
        }
        let bar = CellStyle::new(WHITE, HUD_BG);
        fb.fill_rect(0, 0, viewport.width, HUD_ROWS, ' ', bar);

        let score = CellStyle::new(YELLOW, HUD_BG).bold();
        fb.put_str(1, 0, "SCORE ", score);
        fb.put_u32(7, 0, snap.score as u32, score);

        // "DISTANCE <n>m", right-aligned with a one-column margin.
        let distance = snap.distance as u32;
        let len = 9 + digit_count(distance) + 1;
        let x = viewport.width.saturating_sub(1 + len);
        if x > 7 + digit_count(snap.score as u32) {
            fb.put_str(x, 0, "DISTANCE ", bar);
            let n = fb.put_u32(x + 9, 0, distance, bar);
            fb.put_char(x + 9 + n, 0, 'm', bar);
        }

        // Speed multiplier with two decimals, centered when there is room.
        if viewport.width >= 60 {
            let hundredths = (snap.game_speed * 100.0).round() as u32;
            let speed = CellStyle::new(WHITE, HUD_BG).dim();
            let cx = viewport.width / 2 - 3;
            fb.put_char(cx, 0, 'x', speed);
            let n = fb.put_u32(cx + 1, 0, hundredths / 100, speed);
            fb.put_char(cx + 1 + n, 0, '.', speed);
            let frac = hundredths % 100;
            fb.put_u32(cx + 2 + n, 0, frac / 10, speed);
            fb.put_u32(cx + 3 + n, 0, frac % 10, speed);
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, proj: &Projection) {
        let panel_w = proj.width.min(30);
        let panel_h = proj.rows.min(5);
        let x = (proj.width - panel_w) / 2;
        let y = proj.top + (proj.rows - panel_h) / 2;
        let panel = CellStyle::new(WHITE, HUD_BG);
        fb.fill_rect(x, y, panel_w, panel_h, ' ', panel);

        let center = |len: u16| x + panel_w.saturating_sub(len) / 2;

        let title = "GAME OVER";
        fb.put_str(center(9), y + 1, title, CellStyle::new(RED, HUD_BG).bold());

        if panel_h >= 3 {
            let score = snap.score as u32;
            let sx = center(7 + digit_count(score));
            let style = CellStyle::new(YELLOW, HUD_BG);
            fb.put_str(sx, y + 2, "Score: ", style);
            fb.put_u32(sx + 7, y + 2, score, style);
        }
        if panel_h >= 4 {
            fb.put_str(center(15), y + 3, "SPACE - restart", panel);
        }
    }
}

fn coin_frame(angle: f32) -> char {
    let quarter = (angle.rem_euclid(360.0) / 90.0) as usize;
    COIN_FRAMES[quarter.min(COIN_FRAMES.len() - 1)]
}

fn digit_count(mut n: u32) -> u16 {
    let mut len = 1;
    while n >= 10 {
        n /= 10;
        len += 1;
    }
    len
}
