use macroquad::prelude::{BLACK, Color, Vec2, draw_line, draw_triangle, vec2};

use crate::error::{Error, Result};

use super::buffers::{ArrayHandle, BufferHandle, BufferUsage, GpuSink, Primitive, VertexLayout};

/// Grid line color
pub const LINE_COLOR: Color = BLACK;
/// Live cell fill color
pub const CELL_COLOR: Color = Color::new(0.5, 0.5, 0.5, 1.0);

/// Sink drawing through macroquad's batched GPU renderer.
///
/// Vertex data arrives y-up with row 0 at the bottom; macroquad's screen space
/// is y-down, so every vertex is flipped against the viewport height.
pub struct MacroquadSink {
    buffers: Vec<Vec<f32>>,
    arrays: Vec<(BufferHandle, VertexLayout)>,
    viewport_height: f32,
    line_thickness: f32,
}

impl MacroquadSink {
    pub fn new(viewport_height: f32) -> Self {
        Self {
            buffers: Vec::new(),
            arrays: Vec::new(),
            viewport_height,
            line_thickness: 1.0,
        }
    }

    fn to_screen(&self, x: f32, y: f32) -> Vec2 {
        vec2(x, self.viewport_height - y)
    }

    fn vertices(&self, array: ArrayHandle) -> Result<(&[f32], usize)> {
        let (buffer, layout) = self
            .arrays
            .get(array.0 as usize)
            .ok_or(Error::UnknownVertexArray(array))?;
        let data = self
            .buffers
            .get(buffer.0 as usize)
            .ok_or(Error::UnknownBuffer(*buffer))?;
        Ok((data, layout.components))
    }
}

impl GpuSink for MacroquadSink {
    fn create_buffer(&mut self) -> Result<BufferHandle> {
        self.buffers.push(Vec::new());
        Ok(BufferHandle(self.buffers.len() as u32 - 1))
    }

    fn create_vertex_array(
        &mut self,
        buffer: BufferHandle,
        layout: VertexLayout,
    ) -> Result<ArrayHandle> {
        if buffer.0 as usize >= self.buffers.len() {
            return Err(Error::UnknownBuffer(buffer));
        }
        self.arrays.push((buffer, layout));
        Ok(ArrayHandle(self.arrays.len() as u32 - 1))
    }

    fn upload(&mut self, buffer: BufferHandle, data: &[f32], _usage: BufferUsage) -> Result<()> {
        let slot = self
            .buffers
            .get_mut(buffer.0 as usize)
            .ok_or(Error::UnknownBuffer(buffer))?;
        slot.clear();
        slot.extend_from_slice(data);
        Ok(())
    }

    fn draw_arrays(
        &mut self,
        array: ArrayHandle,
        primitive: Primitive,
        vertex_count: usize,
    ) -> Result<()> {
        let (data, components) = self.vertices(array)?;
        let data = &data[..(vertex_count * components).min(data.len())];

        match primitive {
            Primitive::Lines => {
                for segment in data.chunks_exact(2 * components) {
                    let a = self.to_screen(segment[0], segment[1]);
                    let b = self.to_screen(segment[components], segment[components + 1]);
                    draw_line(a.x, a.y, b.x, b.y, self.line_thickness, LINE_COLOR);
                }
            }
            // The 1-vertex empty placeholder yields no full triangle and draws nothing
            Primitive::Triangles => {
                for triangle in data.chunks_exact(3 * components) {
                    let v1 = self.to_screen(triangle[0], triangle[1]);
                    let v2 = self.to_screen(triangle[components], triangle[components + 1]);
                    let v3 = self.to_screen(triangle[2 * components], triangle[2 * components + 1]);
                    draw_triangle(v1, v2, v3, CELL_COLOR);
                }
            }
        }
        Ok(())
    }

    fn set_viewport(&mut self, _width: f32, height: f32) {
        self.viewport_height = height;
    }
}
