//! Scatter chart rendering using egui_plot
//!
//! # Main Types
//!
//! - [`ChartLayout`] - Pure geometry: axis scales, marker and label positions,
//!   hit testing. Pixel coordinates are relative to the inner drawing area,
//!   with y growing downward.
//! - [`ChartView`] - Renders the layout with egui_plot and reports clicks
//!
//! The plot frame covers exactly the inner area (total size minus margins)
//! and tick labels are painted into the margins. Both axes start at zero and
//! end at the largest coordinate, rounded out to a tick boundary. The chart is
//! redrawn from the current points every frame, so removed points never leave
//! markers behind.

use crate::config::{ChartConfig, Margin};
use crate::scale::{clamp_tick_count, domain_max, LinearScale};
use crate::types::Point;
use egui::{pos2, vec2, Align2, CursorIcon, FontId, Rect, RichText, Sense, Ui, UiBuilder, Vec2};
use egui_plot::{
    GridMark, MarkerShape, Plot, PlotBounds, PlotPoint, PlotPoints, PlotTransform, Points, Text,
};

/// Axis scales for a set of points drawn into a fixed inner area
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub x: LinearScale,
    pub y: LinearScale,
    pub tick_count: usize,
}

impl ChartLayout {
    /// Layout for a chart of total size `width` x `height` minus `margin`
    pub fn new(points: &[Point], width: f32, height: f32, margin: &Margin, tick_count: usize) -> Self {
        let inner_width = (width - margin.horizontal()).max(0.0);
        let inner_height = (height - margin.vertical()).max(0.0);
        Self::for_inner_size(points, inner_width, inner_height, tick_count)
    }

    /// Layout for an inner drawing area of known size
    pub fn for_inner_size(
        points: &[Point],
        inner_width: f32,
        inner_height: f32,
        tick_count: usize,
    ) -> Self {
        let tick_count = clamp_tick_count(tick_count);
        let x_max = domain_max(points.iter().map(|p| p.x));
        let y_max = domain_max(points.iter().map(|p| p.y));

        Self {
            x: axis_scale(x_max, [0.0, inner_width as f64], tick_count),
            y: axis_scale(y_max, [inner_height as f64, 0.0], tick_count),
            tick_count,
        }
    }

    /// Size of the inner drawing area in pixels
    pub fn inner_size(&self) -> [f64; 2] {
        [self.x.range[1], self.y.range[0]]
    }

    /// Marker centre in inner-area pixels
    pub fn marker_position(&self, point: &Point) -> [f64; 2] {
        [self.x.map(point.x), self.y.map(point.y)]
    }

    /// Label anchor in inner-area pixels
    pub fn label_position(&self, point: &Point, offset: [f32; 2]) -> [f64; 2] {
        let [mx, my] = self.marker_position(point);
        [mx + offset[0] as f64, my + offset[1] as f64]
    }

    pub fn x_ticks(&self) -> Vec<f64> {
        self.x.ticks(self.tick_count)
    }

    pub fn y_ticks(&self) -> Vec<f64> {
        self.y.ticks(self.tick_count)
    }

    /// Plot-space bounds as `(min, max)` corners
    pub fn plot_bounds(&self) -> ([f64; 2], [f64; 2]) {
        let (x0, x1) = self.x.domain_extent();
        let (y0, y1) = self.y.domain_extent();
        ([x0, y0], [x1, y1])
    }

    /// Find the point whose marker contains `pos`
    ///
    /// Later points are drawn on top, so they win when markers overlap.
    /// Points with non-finite coordinates are not drawn and never hit.
    pub fn hit_test<'a>(&self, points: &'a [Point], pos: [f64; 2], radius: f64) -> Option<&'a Point> {
        topmost_hit(points, pos, radius, |p| self.marker_position(p))
    }
}

/// Zero-based nice scale, ascending, never degenerate
///
/// A domain that collapses to a single value is widened to one unit so the
/// plot still has an extent.
fn axis_scale(max: f64, range: [f64; 2], tick_count: usize) -> LinearScale {
    let nice = LinearScale::new([0.0, max], range).nice(tick_count);
    let (lo, hi) = nice.domain_extent();
    let domain = if lo == hi { [lo, lo + 1.0] } else { [lo, hi] };
    LinearScale::new(domain, range)
}

fn grid_marks(ticks: Vec<f64>, step_size: f64) -> Vec<GridMark> {
    ticks
        .into_iter()
        .map(|value| GridMark { value, step_size })
        .collect()
}

/// Topmost finite point whose marker, placed by `position`, contains `pos`
fn topmost_hit<'a>(
    points: &'a [Point],
    pos: [f64; 2],
    radius: f64,
    position: impl Fn(&Point) -> [f64; 2],
) -> Option<&'a Point> {
    points.iter().rev().filter(|p| p.is_finite()).find(|p| {
        let [px, py] = position(p);
        (px - pos[0]).hypot(py - pos[1]) <= radius
    })
}

/// Tick label text, with just enough decimals for the tick step
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step < 1.0 {
        (-step.log10().floor()) as usize
    } else {
        0
    };
    format!("{:.*}", decimals, value)
}

/// Gap between the plot frame and tick labels, in pixels
const TICK_LABEL_GAP: f32 = 4.0;

/// Scatter chart view state
#[derive(Debug, Default)]
pub struct ChartView {
    /// Screen rect of the plot frame from the last render
    last_frame: Option<Rect>,
}

impl ChartView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout matching what the chart draws for `points`
    pub fn layout(&self, points: &[Point], config: &ChartConfig) -> ChartLayout {
        ChartLayout::new(
            points,
            config.width,
            config.height,
            &config.margin,
            config.tick_count,
        )
    }

    /// Screen rect of the inner drawing area as last rendered
    pub fn last_frame(&self) -> Option<Rect> {
        self.last_frame
    }

    /// Render the chart
    ///
    /// Allocates `width` x `height`, draws the plot into the area left after
    /// the margins and paints tick labels into the margins. Returns a copy of
    /// the point whose marker was clicked this frame.
    pub fn show(&mut self, ui: &mut Ui, points: &[Point], config: &ChartConfig) -> Option<Point> {
        let layout = self.layout(points, config);
        let tick_count = layout.tick_count;
        let radius = config.marker_radius;
        let (min, max) = layout.plot_bounds();
        let [inner_width, inner_height] = layout.inner_size();

        let (outer, _) = ui.allocate_exact_size(
            vec2(config.width.max(0.0), config.height.max(0.0)),
            Sense::hover(),
        );
        let inner = Rect::from_min_size(
            outer.min + vec2(config.margin.left, config.margin.top),
            vec2(inner_width as f32, inner_height as f32),
        );

        let x_ticks = layout.x_ticks();
        let y_ticks = layout.y_ticks();
        let x_step = layout.x.tick_step(tick_count);
        let y_step = layout.y.tick_step(tick_count);
        let x_marks = grid_marks(x_ticks.clone(), x_step);
        let y_marks = grid_marks(y_ticks.clone(), y_step);

        let marker_color = ui.visuals().selection.bg_fill;
        let label_color = ui.visuals().text_color();

        // No built-in axes: they would take space out of the frame
        let plot = Plot::new("scatter_chart")
            .width(inner.width())
            .height(inner.height())
            .min_size(Vec2::ZERO)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .show_x(false)
            .show_y(false)
            .show_axes(false)
            .show_grid(config.show_grid)
            .x_grid_spacer(move |_| x_marks.clone())
            .y_grid_spacer(move |_| y_marks.clone());

        let response = ui
            .scope_builder(UiBuilder::new().max_rect(inner), |ui| {
                plot.show(ui, |plot_ui| {
                    plot_ui.set_plot_bounds(PlotBounds::from_min_max(min, max));

                    let coords: Vec<[f64; 2]> = points
                        .iter()
                        .filter(|p| p.is_finite())
                        .map(|p| [p.x, p.y])
                        .collect();

                    plot_ui.points(
                        Points::new("points", PlotPoints::from(coords))
                            .shape(MarkerShape::Circle)
                            .filled(true)
                            .radius(radius)
                            .color(marker_color),
                    );

                    for point in points.iter().filter(|p| p.is_finite()) {
                        let [lx, ly] = layout.label_position(point, config.label_offset);
                        let anchor = PlotPoint::new(layout.x.invert(lx), layout.y.invert(ly));
                        plot_ui.text(
                            Text::new(
                                point.id.as_str(),
                                anchor,
                                RichText::new(&point.label).color(label_color),
                            )
                            .anchor(Align2::LEFT_CENTER),
                        );
                    }
                })
            })
            .inner;

        let frame = *response.transform.frame();
        if self.last_frame != Some(frame) {
            tracing::trace!("Chart frame at {:?}", frame);
            self.last_frame = Some(frame);
        }

        paint_axes(ui, frame, &response.transform, &x_ticks, x_step, &y_ticks, y_step);

        let transform = &response.transform;
        let hovered = response.response.hover_pos().and_then(|pos| {
            topmost_hit(points, [pos.x as f64, pos.y as f64], radius as f64, |p| {
                let screen = transform.position_from_point(&PlotPoint::new(p.x, p.y));
                [screen.x as f64, screen.y as f64]
            })
        });

        if hovered.is_some() {
            ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
        }

        if response.response.clicked() {
            if let Some(point) = hovered {
                tracing::debug!("Marker clicked: {}", point.id);
                return Some(point.clone());
            }
        }

        None
    }
}

/// Axis lines along the bottom and left of the frame, tick labels in the margins
fn paint_axes(
    ui: &Ui,
    frame: Rect,
    transform: &PlotTransform,
    x_ticks: &[f64],
    x_step: f64,
    y_ticks: &[f64],
    y_step: f64,
) {
    let painter = ui.painter();
    let stroke = ui.visuals().widgets.noninteractive.fg_stroke;
    let color = ui.visuals().text_color();
    let font = FontId::proportional(11.0);

    painter.line_segment([frame.left_bottom(), frame.right_bottom()], stroke);
    painter.line_segment([frame.left_top(), frame.left_bottom()], stroke);

    for &tick in x_ticks {
        let x = transform.position_from_point_x(tick);
        painter.text(
            pos2(x, frame.bottom() + TICK_LABEL_GAP),
            Align2::CENTER_TOP,
            format_tick(tick, x_step),
            font.clone(),
            color,
        );
    }

    for &tick in y_ticks {
        let y = transform.position_from_point_y(tick);
        painter.text(
            pos2(frame.left() - TICK_LABEL_GAP, y),
            Align2::RIGHT_CENTER,
            format_tick(tick, y_step),
            font.clone(),
            color,
        );
    }
}
