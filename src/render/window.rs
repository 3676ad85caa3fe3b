use crate::chart::ChartPlan;
use crate::render::plot::draw_chart;

use anyhow::anyhow;
use minifb::{Key, Window, WindowOptions};
use plotters::prelude::*;
use tracing::{debug, info};

const TARGET_FPS: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    fn pixels(self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Draw `plan` into a packed RGB buffer (3 bytes per pixel, row-major).
pub fn rasterize(plan: &ChartPlan, size: WindowSize) -> anyhow::Result<Vec<u8>> {
    let mut rgb = vec![0u8; size.pixels() * 3];
    {
        let root =
            BitMapBackend::with_buffer(&mut rgb, (size.width, size.height)).into_drawing_area();
        draw_chart(&root, plan)?;
    }
    Ok(rgb)
}

/// Show `plan` in a window and block until the user closes it (or presses Esc).
pub fn show_chart(plan: &ChartPlan, title: &str, size: WindowSize) -> anyhow::Result<()> {
    let frame = to_frame(&rasterize(plan, size)?);
    let (width, height) = (size.width as usize, size.height as usize);

    let mut window = Window::new(title, width, height, WindowOptions::default())
        .map_err(|e| anyhow!("open chart window: {}", e))?;
    window.set_target_fps(TARGET_FPS);
    info!(title, width, height, "chart window open; close it to exit");

    while window.is_open() && !window.is_key_down(Key::Escape) {
        window
            .update_with_buffer(&frame, width, height)
            .map_err(|e| anyhow!("update chart window: {}", e))?;
    }

    debug!("chart window closed");
    Ok(())
}

/// Pack RGB bytes into the 0RGB words the window expects.
fn to_frame(rgb: &[u8]) -> Vec<u32> {
    rgb.chunks_exact(3)
        .map(|p| (u32::from(p[0]) << 16) | (u32::from(p[1]) << 8) | u32::from(p[2]))
        .collect()
}
