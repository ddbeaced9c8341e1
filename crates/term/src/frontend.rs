//! Terminal front end: the [`FrameSink`] the game loop presents into.

use std::io::{self, Write};
use std::time::Instant;

use anyhow::Result;

use crate::core::GameSnapshot;
use crate::engine::FrameSink;
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::render_throttle::RenderThrottle;
use crate::renderer::TerminalRenderer;

/// Static screens are repainted at least this often.
const STATIC_REFRESH_MS: u64 = 250;

pub struct TerminalFrontend<W: Write = io::Stdout> {
    renderer: TerminalRenderer<W>,
    view: GameView,
    fb: FrameBuffer,
    throttle: RenderThrottle,
    started: Instant,
    /// Fixed size for headless use; `None` queries the terminal every frame.
    fixed_viewport: Option<Viewport>,
}

impl TerminalFrontend<io::Stdout> {
    pub fn new(view: GameView) -> Self {
        Self::with_renderer(TerminalRenderer::new(), view, None)
    }
}

impl<W: Write> TerminalFrontend<W> {
    pub fn with_renderer(
        renderer: TerminalRenderer<W>,
        view: GameView,
        fixed_viewport: Option<Viewport>,
    ) -> Self {
        Self {
            renderer,
            view,
            fb: FrameBuffer::new(0, 0),
            throttle: RenderThrottle::new(STATIC_REFRESH_MS),
            started: Instant::now(),
            fixed_viewport,
        }
    }

    pub fn renderer(&self) -> &TerminalRenderer<W> {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut TerminalRenderer<W> {
        &mut self.renderer
    }

    /// Force a full repaint on the next frame (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.renderer.invalidate();
        self.throttle.reset();
    }

    fn viewport(&self) -> Viewport {
        self.fixed_viewport.unwrap_or_else(|| {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            Viewport::new(w, h)
        })
    }
}

impl<W: Write> FrameSink for TerminalFrontend<W> {
    type Error = anyhow::Error;

    fn present(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        let now_ms = self.started.elapsed().as_millis() as u64;
        if !self
            .throttle
            .should_render(now_ms, snapshot.fingerprint(), snapshot.game_over)
        {
            return Ok(());
        }

        let viewport = self.viewport();
        self.view.render_into(snapshot, viewport, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}
