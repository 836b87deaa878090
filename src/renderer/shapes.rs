//! Shape primitives - vertices for circles and lines
//!
//! Builders append into a shared vertex list so one frame's geometry
//! lands in a single buffer write.

/// Vertex structure for rendering colored shapes
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2,
        1 => Float32x4
    ];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Append a filled circle (triangle fan) at clip-space (cx, cy)
pub fn push_circle(
    out: &mut Vec<Vertex>,
    cx: f32,
    cy: f32,
    radius: f32,
    color: [f32; 4],
    segments: u32,
) {
    for i in 0..segments {
        let a1 = (i as f32 / segments as f32) * std::f32::consts::TAU;
        let a2 = ((i + 1) as f32 / segments as f32) * std::f32::consts::TAU;

        out.push(Vertex { position: [cx, cy], color });
        out.push(Vertex {
            position: [cx + radius * a1.cos(), cy + radius * a1.sin()],
            color,
        });
        out.push(Vertex {
            position: [cx + radius * a2.cos(), cy + radius * a2.sin()],
            color,
        });
    }
}

/// Append a line segment rendered as a thin quad
pub fn push_line(
    out: &mut Vec<Vertex>,
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    width: f32,
    color: [f32; 4],
) {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let len = (dx * dx + dy * dy).sqrt();
    if len < 0.001 {
        return;
    }

    // Perpendicular direction for line thickness
    let px = -dy / len * width;
    let py = dx / len * width;

    out.push(Vertex { position: [x1 - px, y1 - py], color });
    out.push(Vertex { position: [x1 + px, y1 + py], color });
    out.push(Vertex { position: [x2 + px, y2 + py], color });

    out.push(Vertex { position: [x1 - px, y1 - py], color });
    out.push(Vertex { position: [x2 + px, y2 + py], color });
    out.push(Vertex { position: [x2 - px, y2 - py], color });
}
