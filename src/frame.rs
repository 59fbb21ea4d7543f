// SPDX: CC0-1.0

use crate::{
    axis::AxisRenderer,
    config::{PlotConfig, MAX_SIDE},
    coords::{CoordinateSystem, ViewState},
    grid::GridRenderer,
    plotter::FunctionPlotter,
    surface::DrawingContext,
    Number, PlotError,
};

/// Draws whole frames: grid, then axes, then the function on top.
#[derive(Clone, Debug, Default)]
pub struct PlotSurface {
    config: PlotConfig,
}

impl PlotSurface {
    pub const fn new(config: PlotConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &PlotConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut PlotConfig {
        &mut self.config
    }

    /// Clears `ctx` to the configured size and renders `f` for `view`.
    /// Returns the coordinate system the frame was drawn with.
    pub fn render_frame<C, F>(
        &self,
        ctx: &mut C,
        view: &ViewState,
        f: F,
    ) -> Result<CoordinateSystem, PlotError>
    where
        C: DrawingContext + ?Sized,
        F: FnMut(Number) -> Number,
    {
        let size = self.config.size;
        if size.is_empty() {
            return Err(PlotError::EmptySurface {
                width: size.width,
                height: size.height,
            });
        }
        if size.width > MAX_SIDE || size.height > MAX_SIDE {
            return Err(PlotError::SurfaceTooLarge {
                width: size.width,
                height: size.height,
                max: MAX_SIDE,
            });
        }
        ctx.reset(size)?;

        // the surface may not honour the requested size exactly
        let coords = CoordinateSystem::new(
            ctx.size(),
            view,
            self.config.base_scale,
            self.config.include_negative_x,
        );

        GridRenderer::new(self.config.grid_color).draw(ctx, &coords);
        AxisRenderer::new(self.config.axes_color, self.config.label_font.clone())
            .draw(ctx, &coords, view)?;
        let drawn = FunctionPlotter::new(self.config.function, self.config.sample_stride)
            .plot(ctx, &coords, f);

        tracing::debug!(
            zoom_ticks = view.zoom_ticks(),
            scale = coords.scale(),
            size = %coords.size(),
            drawn,
            "rendered frame"
        );
        Ok(coords)
    }
}
