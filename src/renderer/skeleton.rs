//! Hand skeleton rendering - draws landmarks, bones, and fingertips

use super::shapes::{push_circle, push_line, Vertex};
use super::state::GPU_STATE;
use crate::bridge;
use crate::demo::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::gesture::hand::{Frame, FINGERTIPS, HAND_SKELETON};

/// Colors for different visualization elements
mod colors {
    /// Landmark dots and bones
    pub const GREEN: [f32; 4] = [0.0, 1.0, 0.53, 1.0];
    /// Bone lines, slightly translucent
    pub const GREEN_DIM: [f32; 4] = [0.0, 1.0, 0.53, 0.7];
    /// Fingertip highlights
    pub const RED: [f32; 4] = [1.0, 0.42, 0.42, 1.0];
    /// Background, dark slate
    pub const BACKGROUND: wgpu::Color = wgpu::Color {
        r: 0.118,
        g: 0.161,
        b: 0.231,
        a: 1.0,
    };
}

const DOT_RADIUS: f32 = 0.012;
const FINGERTIP_RADIUS: f32 = 0.020;
const BONE_WIDTH: f32 = 0.005;
const CIRCLE_SEGMENTS: u32 = 12;

/// Convert image-space pixels to clip space (-1 to 1), flip Y
fn to_clip_space(x: f32, y: f32) -> (f32, f32) {
    (
        x / CANVAS_WIDTH * 2.0 - 1.0,
        -(y / CANVAS_HEIGHT * 2.0 - 1.0),
    )
}

/// Build one frame's hand geometry: bones first so dots draw on top
fn build_hand_vertices(frame: &Frame) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    for (start_idx, end_idx) in HAND_SKELETON.iter() {
        if let (Some(start), Some(end)) = (frame[*start_idx], frame[*end_idx]) {
            let (x1, y1) = to_clip_space(start.x, start.y);
            let (x2, y2) = to_clip_space(end.x, end.y);
            push_line(&mut vertices, x1, y1, x2, y2, BONE_WIDTH, colors::GREEN_DIM);
        }
    }

    for (idx, slot) in frame.iter().enumerate() {
        if let Some(lm) = slot {
            let (x, y) = to_clip_space(lm.x, lm.y);
            push_circle(&mut vertices, x, y, DOT_RADIUS, colors::GREEN, CIRCLE_SEGMENTS);
            if FINGERTIPS.contains(&idx) {
                push_circle(&mut vertices, x, y, FINGERTIP_RADIUS, colors::RED, CIRCLE_SEGMENTS);
            }
        }
    }

    vertices
}

/// Render one frame with the current landmarks
pub fn render_frame() {
    GPU_STATE.with(|state_cell| {
        let state_ref = state_cell.borrow();
        let state = match state_ref.as_ref() {
            Some(s) => s,
            None => return,
        };

        let vertices = match bridge::current_frame() {
            Some(frame) => build_hand_vertices(&frame),
            // No hand: clear to background only
            None => Vec::new(),
        };

        let output = match state.surface.get_current_texture() {
            Ok(t) => t,
            Err(_) => return,
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = state
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        if !vertices.is_empty() {
            state
                .queue
                .write_buffer(&state.vertex_buffer, 0, bytemuck::cast_slice(&vertices));
        }

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Hand Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(colors::BACKGROUND),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if !vertices.is_empty() {
                pass.set_pipeline(&state.render_pipeline);
                pass.set_vertex_buffer(0, state.vertex_buffer.slice(..));
                pass.draw(0..vertices.len() as u32, 0..1);
            }
        }

        state.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    });
}
