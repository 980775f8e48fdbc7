//! Typed GPU buffers for vertices, indices, instances and uniforms.
//!
//! Geometry and material buffers are uploaded once. Instance buffers are
//! rewritten every frame and grow to the next power of two item count when
//! a write no longer fits.

use std::marker::PhantomData;

use wgpu::util::DeviceExt;

/// Item capacity after growing to hold `needed` items.
#[must_use]
pub fn grown_capacity(current: usize, needed: usize) -> usize {
    if needed <= current {
        current
    } else {
        needed.next_power_of_two()
    }
}

/// A GPU buffer holding a slice of `T`.
pub struct TypedBuffer<T> {
    buffer: wgpu::Buffer,
    label: String,
    usage: wgpu::BufferUsages,
    capacity: usize,
    len: usize,
    _marker: PhantomData<T>,
}

impl<T: bytemuck::Pod> TypedBuffer<T> {
    /// Buffer initialized with `data`; its capacity is exactly `data.len()`.
    #[must_use]
    pub fn from_slice(
        device: &wgpu::Device,
        label: &str,
        data: &[T],
        usage: wgpu::BufferUsages,
    ) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(data),
            usage: usage | wgpu::BufferUsages::COPY_DST,
        });
        Self {
            buffer,
            label: label.to_owned(),
            usage,
            capacity: data.len(),
            len: data.len(),
            _marker: PhantomData,
        }
    }

    /// Empty buffer with room for `capacity` items (at least one).
    #[must_use]
    pub fn with_capacity(
        device: &wgpu::Device,
        label: &str,
        capacity: usize,
        usage: wgpu::BufferUsages,
    ) -> Self {
        let capacity = capacity.max(1);
        Self {
            buffer: Self::allocate(device, label, capacity, usage),
            label: label.to_owned(),
            usage,
            capacity,
            len: 0,
            _marker: PhantomData,
        }
    }

    fn allocate(
        device: &wgpu::Device,
        label: &str,
        capacity: usize,
        usage: wgpu::BufferUsages,
    ) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: (capacity * size_of::<T>()) as wgpu::BufferAddress,
            usage: usage | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    /// Replace the contents, reallocating when `data` exceeds the capacity.
    ///
    /// Returns `true` if the buffer was reallocated.
    pub fn write(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, data: &[T]) -> bool {
        let capacity = grown_capacity(self.capacity, data.len());
        let reallocated = capacity != self.capacity;
        if reallocated {
            self.buffer = Self::allocate(device, &self.label, capacity, self.usage);
            self.capacity = capacity;
        }
        if !data.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(data));
        }
        self.len = data.len();
        reallocated
    }

    /// The underlying GPU buffer.
    #[must_use]
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Items written by the last upload.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the last upload was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
