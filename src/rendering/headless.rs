use crate::error::{Error, Result};

use super::buffers::{ArrayHandle, BufferHandle, BufferUsage, GpuSink, Primitive, VertexLayout};

/// A draw issued against a `HeadlessSink`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawCall {
    pub array: ArrayHandle,
    pub primitive: Primitive,
    pub vertex_count: usize,
}

/// In-memory sink with no graphics context behind it.
/// Keeps the last upload per buffer and records every draw, which makes it
/// usable for tests, benchmarks and running the simulation without a window.
#[derive(Debug, Default)]
pub struct HeadlessSink {
    buffers: Vec<Vec<f32>>,
    arrays: Vec<(BufferHandle, VertexLayout)>,
    draws: Vec<DrawCall>,
    uploads: usize,
    redraw_requests: usize,
    viewport: Option<(f32, f32)>,
    context_lost: bool,
}

impl HeadlessSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer_count(&self) -> usize {
        self.buffers.len()
    }

    /// Layouts of all vertex arrays, in creation order
    pub fn layouts(&self) -> Vec<VertexLayout> {
        self.arrays.iter().map(|(_, layout)| *layout).collect()
    }

    pub fn contents(&self, buffer: BufferHandle) -> Option<&[f32]> {
        self.buffers.get(buffer.0 as usize).map(Vec::as_slice)
    }

    /// Contents of the buffer behind `array`
    pub fn array_contents(&self, array: ArrayHandle) -> Option<&[f32]> {
        let (buffer, _) = self.arrays.get(array.0 as usize)?;
        self.contents(*buffer)
    }

    pub fn draws(&self) -> &[DrawCall] {
        &self.draws
    }

    pub fn clear_draws(&mut self) {
        self.draws.clear();
    }

    pub fn uploads(&self) -> usize {
        self.uploads
    }

    pub fn redraw_requests(&self) -> usize {
        self.redraw_requests
    }

    /// Last viewport size reported through `set_viewport`
    pub fn viewport(&self) -> Option<(f32, f32)> {
        self.viewport
    }

    /// Make every later upload and draw fail
    pub fn lose_context(&mut self) {
        self.context_lost = true;
    }

    fn check_context(&self) -> Result<()> {
        if self.context_lost {
            return Err(Error::ContextLost("headless context marked lost".to_string()));
        }
        Ok(())
    }
}

impl GpuSink for HeadlessSink {
    fn create_buffer(&mut self) -> Result<BufferHandle> {
        self.check_context()?;
        self.buffers.push(Vec::new());
        Ok(BufferHandle(self.buffers.len() as u32 - 1))
    }

    fn create_vertex_array(
        &mut self,
        buffer: BufferHandle,
        layout: VertexLayout,
    ) -> Result<ArrayHandle> {
        self.check_context()?;
        if buffer.0 as usize >= self.buffers.len() {
            return Err(Error::UnknownBuffer(buffer));
        }
        self.arrays.push((buffer, layout));
        Ok(ArrayHandle(self.arrays.len() as u32 - 1))
    }

    fn upload(&mut self, buffer: BufferHandle, data: &[f32], _usage: BufferUsage) -> Result<()> {
        self.check_context()?;
        let slot = self
            .buffers
            .get_mut(buffer.0 as usize)
            .ok_or(Error::UnknownBuffer(buffer))?;
        slot.clear();
        slot.extend_from_slice(data);
        self.uploads += 1;
        Ok(())
    }

    fn draw_arrays(
        &mut self,
        array: ArrayHandle,
        primitive: Primitive,
        vertex_count: usize,
    ) -> Result<()> {
        self.check_context()?;
        if array.0 as usize >= self.arrays.len() {
            return Err(Error::UnknownVertexArray(array));
        }
        self.draws.push(DrawCall { array, primitive, vertex_count });
        Ok(())
    }

    fn request_redraw(&mut self) {
        self.redraw_requests += 1;
    }

    fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Some((width, height));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_handles_rejected() {
        let mut sink = HeadlessSink::new();
        assert!(matches!(
            sink.upload(BufferHandle(0), &[0.0, 0.0], BufferUsage::Dynamic),
            Err(Error::UnknownBuffer(BufferHandle(0)))
        ));
        assert!(matches!(
            sink.create_vertex_array(BufferHandle(4), VertexLayout::FLOAT2),
            Err(Error::UnknownBuffer(_))
        ));
        assert!(matches!(
            sink.draw_arrays(ArrayHandle(1), Primitive::Lines, 2),
            Err(Error::UnknownVertexArray(ArrayHandle(1)))
        ));
    }

    #[test]
    fn test_array_contents_follow_buffer() -> Result<()> {
        let mut sink = HeadlessSink::new();
        let buffer = sink.create_buffer()?;
        let array = sink.create_vertex_array(buffer, VertexLayout::FLOAT2)?;
        sink.upload(buffer, &[3.0, 4.0], BufferUsage::Dynamic)?;
        assert_eq!(sink.array_contents(array), Some(&[3.0, 4.0][..]));
        assert_eq!(sink.uploads(), 1);
        Ok(())
    }
}
