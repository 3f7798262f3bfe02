//! GPU-side vertex buffers for the grid and the live cells.
//!
//! `RenderBufferSync` owns one buffer and one vertex array per primitive and
//! talks to the graphics context only through the `GpuSink` trait.

use crate::error::{Error, Result};

use super::geometry::{COMPONENTS, EMPTY_PLACEHOLDER};

/// Opaque buffer handle issued by a sink
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BufferHandle(pub u32);

/// Opaque vertex array handle issued by a sink
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ArrayHandle(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Primitive {
    /// Every two vertices form a segment
    Lines,
    /// Every three vertices form a filled triangle
    Triangles,
}

/// Hint about how often a buffer's contents are replaced.
/// Both buffers are rewritten wholesale on every refresh.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferUsage {
    Dynamic,
}

/// Attribute layout of a vertex array
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexLayout {
    pub components: usize,
    pub stride_bytes: usize,
}

impl VertexLayout {
    /// Tightly packed `vec2<f32>` positions
    pub const FLOAT2: Self = Self {
        components: COMPONENTS,
        stride_bytes: COMPONENTS * std::mem::size_of::<f32>(),
    };
}

/// The graphics context as seen by the buffer owner.
/// Calls must be made from the thread that owns the context.
pub trait GpuSink {
    fn create_buffer(&mut self) -> Result<BufferHandle>;

    /// Describe how `buffer` is read as vertices
    fn create_vertex_array(
        &mut self,
        buffer: BufferHandle,
        layout: VertexLayout,
    ) -> Result<ArrayHandle>;

    /// Replace the whole contents of `buffer`
    fn upload(&mut self, buffer: BufferHandle, data: &[f32], usage: BufferUsage) -> Result<()>;

    fn draw_arrays(
        &mut self,
        array: ArrayHandle,
        primitive: Primitive,
        vertex_count: usize,
    ) -> Result<()>;

    /// Ask the owning surface to repaint
    fn request_redraw(&mut self) {}

    /// The drawable area changed size
    fn set_viewport(&mut self, _width: f32, _height: f32) {}
}

/// One buffer with its vertex array and current vertex count
#[derive(Clone, Copy, Debug)]
struct Binding {
    buffer: BufferHandle,
    array: ArrayHandle,
    vertex_count: usize,
}

impl Binding {
    fn create<S: GpuSink>(sink: &mut S) -> Result<Self> {
        let buffer = sink.create_buffer()?;
        let array = sink.create_vertex_array(buffer, VertexLayout::FLOAT2)?;
        Ok(Self { buffer, array, vertex_count: 0 })
    }
}

/// Owns the grid and cell buffers and keeps them in step with uploaded geometry.
pub struct RenderBufferSync<S> {
    sink: S,
    grid: Binding,
    cells: Binding,
}

impl<S: GpuSink> RenderBufferSync<S> {
    /// Allocate both buffers. The cell buffer starts with the empty placeholder.
    pub fn new(mut sink: S) -> Result<Self> {
        let grid = Binding::create(&mut sink)?;
        let cells = Binding::create(&mut sink)?;
        let mut sync = Self { sink, grid, cells };
        sync.upload_cells(&EMPTY_PLACEHOLDER)?;
        Ok(sync)
    }

    /// Replace the grid-line buffer wholesale
    pub fn upload_grid(&mut self, vertices: &[f32]) -> Result<()> {
        Self::upload(&mut self.sink, &mut self.grid, vertices)
    }

    /// Replace the cell buffer wholesale
    pub fn upload_cells(&mut self, vertices: &[f32]) -> Result<()> {
        Self::upload(&mut self.sink, &mut self.cells, vertices)
    }

    fn upload(sink: &mut S, binding: &mut Binding, vertices: &[f32]) -> Result<()> {
        if vertices.len() % COMPONENTS != 0 {
            return Err(Error::MalformedVertexData { len: vertices.len() });
        }
        sink.upload(binding.buffer, vertices, BufferUsage::Dynamic)?;
        binding.vertex_count = vertices.len() / COMPONENTS;
        sink.request_redraw();
        Ok(())
    }

    /// Forward a viewport change to the sink
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.sink.set_viewport(width, height);
    }

    /// Grid lines first, cells on top
    pub fn draw(&mut self) -> Result<()> {
        self.sink.draw_arrays(self.grid.array, Primitive::Lines, self.grid.vertex_count)?;
        self.sink.draw_arrays(self.cells.array, Primitive::Triangles, self.cells.vertex_count)?;
        Ok(())
    }

    pub fn grid_vertex_count(&self) -> usize {
        self.grid.vertex_count
    }

    pub fn cell_vertex_count(&self) -> usize {
        self.cells.vertex_count
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
