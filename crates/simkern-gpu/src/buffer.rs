//! Vec3 storage buffers: upload, download, staging.

use simkern::Vec3;
use tracing::trace;

use crate::device::{GpuDevice, GpuError};

/// Bytes per element: a `Vec3<f32>` is one 16-byte WGSL `vec3<f32>` slot.
const STRIDE: u64 = std::mem::size_of::<Vec3<f32>>() as u64;

/// A GPU storage buffer holding `Vec3<f32>` values.
pub struct Vec3Buffer {
    pub(crate) buffer: wgpu::Buffer,
    pub(crate) len: usize,
}

impl Vec3Buffer {
    /// Create a storage buffer initialized from a slice.
    pub fn from_slice(device: &GpuDevice, data: &[Vec3<f32>]) -> Self {
        use wgpu::util::DeviceExt;
        let buffer = device
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("simkern-gpu vec3 input"),
                contents: bytemuck::cast_slice(data),
                usage: wgpu::BufferUsages::STORAGE
                    | wgpu::BufferUsages::COPY_SRC
                    | wgpu::BufferUsages::COPY_DST,
            });
        Self {
            buffer,
            len: data.len(),
        }
    }

    /// Create a zero-filled storage buffer of `len` vectors.
    pub fn uninit(device: &GpuDevice, len: usize) -> Self {
        let buffer = device.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("simkern-gpu vec3 output"),
            size: len as u64 * STRIDE,
            usage: wgpu::BufferUsages::STORAGE
                | wgpu::BufferUsages::COPY_SRC
                | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        Self { buffer, len }
    }

    /// Download buffer contents to CPU. The padding lane is dropped.
    pub async fn to_vec(&self, device: &GpuDevice) -> Result<Vec<Vec3<f32>>, GpuError> {
        let size = self.byte_size();
        let staging = device.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("simkern-gpu staging"),
            size,
            usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let mut encoder = device
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("simkern-gpu download"),
            });
        encoder.copy_buffer_to_buffer(&self.buffer, 0, &staging, 0, size);
        device.queue.submit(std::iter::once(encoder.finish()));

        let slice = staging.slice(..);
        let (tx, rx) = std::sync::mpsc::channel();
        slice.map_async(wgpu::MapMode::Read, move |result| {
            tx.send(result).ok();
        });
        device.device.poll(wgpu::Maintain::Wait);
        rx.recv()
            .map_err(|_| GpuError::BufferMap("map callback dropped".into()))??;

        let data = slice.get_mapped_range();
        let lanes: &[[f32; 4]] = bytemuck::cast_slice(&data);
        let result = lanes.iter().map(|l| Vec3::from_lanes(*l)).collect();
        drop(data);
        staging.unmap();
        trace!("downloaded {} vectors ({size} bytes)", self.len);
        Ok(result)
    }

    /// Download buffer contents synchronously.
    pub fn to_vec_sync(&self, device: &GpuDevice) -> Result<Vec<Vec3<f32>>, GpuError> {
        pollster::block_on(self.to_vec(device))
    }

    /// Number of vectors.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Size in bytes.
    pub fn byte_size(&self) -> u64 {
        self.len as u64 * STRIDE
    }
}
