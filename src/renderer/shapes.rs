//! Shape and layout generation for the chart
//!
//! Builds triangle lists in a virtual canvas space (origin top-left,
//! y down) from the current trajectory log. The pipeline maps virtual
//! coordinates to NDC; everything here is pure geometry.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::{Vertex, colors};
use crate::consts::REGION_HALF;
use crate::settings::Settings;
use crate::sim::SimState;

/// Virtual canvas dimensions the layout is designed against
pub const CANVAS_W: f32 = 720.0;
pub const CANVAS_H: f32 = 400.0;

/// Stroke widths in virtual units
const GRID_WIDTH: f32 = 1.0;
const SERIES_WIDTH: f32 = 2.5;
const EDGE_WIDTH: f32 = 2.0;

/// Maps (time, position-value) pairs into the chart plot area.
///
/// The value domain is fixed at ±REGION_HALF so the clamp range is always
/// in view; the time domain follows the run like the classic `[0, dataMax]`.
#[derive(Debug, Clone, Copy)]
pub struct ChartLayout {
    /// Top-left of the plot area
    pub origin: Vec2,
    /// Plot area extent
    pub size: Vec2,
    /// Right edge of the time domain, seconds
    pub t_max: f32,
}

impl ChartLayout {
    pub fn new(t_max: f32) -> Self {
        Self {
            origin: Vec2::new(45.0, 20.0),
            size: Vec2::new(400.0, 360.0),
            t_max: t_max.max(1.0),
        }
    }

    /// Map a sample to virtual canvas coordinates
    pub fn point(&self, time: f32, value: f32) -> Vec2 {
        let tx = (time / self.t_max).clamp(0.0, 1.0);
        // +value at the top, -value at the bottom
        let ty = (REGION_HALF - value) / (2.0 * REGION_HALF);
        self.origin + Vec2::new(tx * self.size.x, ty.clamp(0.0, 1.0) * self.size.y)
    }
}

/// Maps physical positions into the square region view beside the chart
#[derive(Debug, Clone, Copy)]
pub struct RegionView {
    /// Top-left of the view square
    pub origin: Vec2,
    /// View square edge length
    pub size: f32,
}

impl RegionView {
    pub fn new() -> Self {
        Self {
            origin: Vec2::new(475.0, 80.0),
            size: 240.0,
        }
    }

    /// Map a physical position (y up) into the view (y down)
    pub fn point(&self, pos: Vec2) -> Vec2 {
        let tx = (pos.x + REGION_HALF) / (2.0 * REGION_HALF);
        let ty = (REGION_HALF - pos.y) / (2.0 * REGION_HALF);
        self.origin + Vec2::new(tx, ty) * self.size
    }
}

impl Default for RegionView {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a stroked polyline as a triangle list (quad per segment)
pub fn polyline(points: &[Vec2], width: f32, color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 2 {
        return Vec::new();
    }

    let half = width / 2.0;
    let mut vertices = Vec::with_capacity((points.len() - 1) * 6);

    for pair in points.windows(2) {
        let (p1, p2) = (pair[0], pair[1]);
        let dir = (p2 - p1).normalize_or_zero();
        let perp = Vec2::new(-dir.y, dir.x);

        let v1a = p1 + perp * half;
        let v1b = p1 - perp * half;
        let v2a = p2 + perp * half;
        let v2b = p2 - perp * half;

        vertices.push(Vertex::new(v1a.x, v1a.y, color));
        vertices.push(Vertex::new(v1b.x, v1b.y, color));
        vertices.push(Vertex::new(v2a.x, v2a.y, color));

        vertices.push(Vertex::new(v2a.x, v2a.y, color));
        vertices.push(Vertex::new(v1b.x, v1b.y, color));
        vertices.push(Vertex::new(v2b.x, v2b.y, color));
    }

    vertices
}

/// Single stroked line segment
pub fn segment(a: Vec2, b: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    polyline(&[a, b], width, color)
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Stroked rectangle outline from corner to corner
pub fn rect_outline(min: Vec2, max: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let corners = [
        min,
        Vec2::new(max.x, min.y),
        max,
        Vec2::new(min.x, max.y),
        min,
    ];
    polyline(&corners, width, color)
}

/// Assemble the full frame: chart grid, both position series, the region
/// outline, the traced path, and the current-position marker.
pub fn frame_vertices(state: &SimState, settings: &Settings) -> Vec<Vertex> {
    let layout = ChartLayout::new(state.params.duration);
    let view = RegionView::new();
    let mut vertices = Vec::new();

    // Chart grid: five horizontal bands plus the zero axis, time divisions
    if settings.show_grid {
        for i in 0..=4 {
            let value = -REGION_HALF + i as f32 * (REGION_HALF / 2.0);
            let a = layout.point(0.0, value);
            let b = layout.point(layout.t_max, value);
            let color = if value == 0.0 { colors::AXIS } else { colors::GRID };
            vertices.extend(segment(a, b, GRID_WIDTH, color));
        }
        for i in 0..=4 {
            let t = layout.t_max * i as f32 / 4.0;
            let a = layout.point(t, REGION_HALF);
            let b = layout.point(t, -REGION_HALF);
            vertices.extend(segment(a, b, GRID_WIDTH, colors::GRID));
        }
    }

    // Position-over-time series from the trajectory log
    let log = state.trajectory();
    if settings.show_x_series {
        let points: Vec<Vec2> = log.iter().map(|s| layout.point(s.time, s.x)).collect();
        vertices.extend(polyline(&points, SERIES_WIDTH, colors::SERIES_X));
    }
    if settings.show_y_series {
        let points: Vec<Vec2> = log.iter().map(|s| layout.point(s.time, s.y)).collect();
        vertices.extend(polyline(&points, SERIES_WIDTH, colors::SERIES_Y));
    }

    // Region view: boundary square, traced path, current position
    let region_max = view.origin + Vec2::splat(view.size);
    vertices.extend(rect_outline(view.origin, region_max, EDGE_WIDTH, colors::REGION_EDGE));

    let path: Vec<Vec2> = log
        .iter()
        .map(|s| view.point(Vec2::new(s.x, s.y)))
        .collect();
    vertices.extend(polyline(&path, SERIES_WIDTH, colors::SERIES_X));

    let marker = view.point(state.physical_position());
    vertices.extend(circle(marker, 5.0, colors::MARKER, 24));

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_layout_corners() {
        let layout = ChartLayout::new(5.0);
        let top_left = layout.point(0.0, REGION_HALF);
        assert!((top_left - layout.origin).length() < 1e-4);

        let bottom_right = layout.point(5.0, -REGION_HALF);
        let expected = layout.origin + layout.size;
        assert!((bottom_right - expected).length() < 1e-4);
    }

    #[test]
    fn test_chart_layout_clamps_overshoot() {
        let layout = ChartLayout::new(5.0);
        let p = layout.point(99.0, 0.0);
        assert!(p.x <= layout.origin.x + layout.size.x + 1e-4);
    }

    #[test]
    fn test_region_view_centers_origin() {
        let view = RegionView::new();
        let center = view.point(Vec2::ZERO);
        let expected = view.origin + Vec2::splat(view.size / 2.0);
        assert!((center - expected).length() < 1e-4);
    }

    #[test]
    fn test_polyline_vertex_count() {
        let points = [Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)];
        let vertices = polyline(&points, 2.0, [1.0; 4]);
        assert_eq!(vertices.len(), 12);

        assert!(polyline(&points[..1], 2.0, [1.0; 4]).is_empty());
    }

    #[test]
    fn test_frame_has_marker_even_when_idle() {
        let state = SimState::new();
        let settings = Settings::default();
        let vertices = frame_vertices(&state, &settings);
        assert!(!vertices.is_empty());
    }
}
