use crate::application::read_models::{ScreenView, StatusBanner};
use crate::ports::outbound::MapRenderer;
use crate::radar::services::MarkerProjector;
use crate::shared::Result;
use std::fmt::Write;

/// Cell drawn when more than one pin lands on it
const COLLISION_PIN: char = '*';

/// Cell drawn for pins numbered past 9
const OVERFLOW_PIN: char = '#';

const EMPTY_CELL: char = ' ';

/// TextMapRenderer adapter for drawing the radar as a character grid
///
/// Pins inside the viewport are plotted with their 1-based legend number;
/// markers outside are listed in the legend only. A screen without a map
/// renders just its status.
pub struct TextMapRenderer {
    width: usize,
    height: usize,
}

impl TextMapRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    fn pin_char(index: usize) -> char {
        match index + 1 {
            n @ 1..=9 => char::from(b'0' + n as u8),
            _ => OVERFLOW_PIN,
        }
    }

    fn render_header(&self, view: &ScreenView, out: &mut String) -> std::fmt::Result {
        let count = view.developer_count();
        let noun = if count == 1 { "developer" } else { "developers" };
        let live = if view.live { " · live" } else { "" };
        writeln!(out, "devradar · {} · {} {}{}", view.state, count, noun, live)?;

        let filter = view.filter.trim();
        if filter.is_empty() {
            writeln!(out, "Techs: (any)")?;
        } else {
            writeln!(out, "Techs: {}", filter)?;
        }

        if let Some(viewport) = &view.viewport {
            writeln!(
                out,
                "Viewport: {} (span {:.4} x {:.4})",
                viewport.center(),
                viewport.latitude_delta,
                viewport.longitude_delta
            )?;
        }
        Ok(())
    }

    fn render_grid(&self, view: &ScreenView, out: &mut String) -> std::fmt::Result {
        let Some(viewport) = &view.viewport else {
            return Ok(());
        };

        let mut grid = vec![vec![EMPTY_CELL; self.width]; self.height];
        let projection = MarkerProjector::project(viewport, &view.markers, self.width, self.height);
        for pin in &projection.plotted {
            let cell = &mut grid[pin.row][pin.col];
            *cell = if *cell == EMPTY_CELL {
                Self::pin_char(pin.index)
            } else {
                COLLISION_PIN
            };
        }

        let border = "-".repeat(self.width);
        writeln!(out, "+{}+", border)?;
        for row in grid {
            writeln!(out, "|{}|", row.into_iter().collect::<String>())?;
        }
        writeln!(out, "+{}+", border)?;

        for (number, marker) in view.markers.iter().enumerate().map(|(i, m)| (i + 1, m)) {
            let callout = &marker.callout;
            let offscreen = if projection.offscreen.contains(&(number - 1)) {
                " (off map)"
            } else {
                ""
            };
            writeln!(
                out,
                " [{}] {} (@{}){}",
                number, callout.name, callout.github_username, offscreen
            )?;
            if !callout.techs_line.is_empty() {
                writeln!(out, "     {}", callout.techs_line)?;
            }
            if !callout.bio.trim().is_empty() {
                writeln!(out, "     {}", callout.bio.trim())?;
            }
        }
        Ok(())
    }

    fn render_status(status: &StatusBanner, out: &mut String) -> std::fmt::Result {
        writeln!(out, "⚠️  {}", status.label)?;
        for line in status.message.lines() {
            writeln!(out, "   {}", line)?;
        }
        Ok(())
    }
}

impl MapRenderer for TextMapRenderer {
    fn render(&self, view: &ScreenView) -> Result<String> {
        let mut out = String::new();

        if !view.shows_map {
            match &view.status {
                Some(status) => Self::render_status(status, &mut out)?,
                None => writeln!(out, "devradar · {}", view.state)?,
            }
            return Ok(out);
        }

        self.render_header(view, &mut out)?;
        self.render_grid(view, &mut out)?;
        if let Some(status) = &view.status {
            Self::render_status(status, &mut out)?;
        }
        Ok(out)
    }
}
