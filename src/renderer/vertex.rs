//! Vertex types for 2D chart rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for chart elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.97, 0.97, 0.98, 1.0];
    pub const GRID: [f32; 4] = [0.85, 0.85, 0.87, 1.0];
    pub const AXIS: [f32; 4] = [0.55, 0.55, 0.6, 1.0];
    /// X-position series (matches the classic recharts purple)
    pub const SERIES_X: [f32; 4] = [0.53, 0.52, 0.85, 1.0];
    /// Y-position series (green)
    pub const SERIES_Y: [f32; 4] = [0.51, 0.79, 0.62, 1.0];
    /// Current-position marker in the region view
    pub const MARKER: [f32; 4] = [0.93, 0.33, 0.24, 1.0];
    /// Region outline in the region view
    pub const REGION_EDGE: [f32; 4] = [0.4, 0.6, 0.8, 1.0];
}
