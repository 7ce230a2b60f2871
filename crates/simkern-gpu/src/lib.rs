//! GPU-resident backend for simkern via wgpu.
//!
//! The `Vec3` (and `Vec2`) operation library ported to WGSL and evaluated
//! over batches:
//! upload two `Vec3<f32>` slices, pick an [`Op`], read back one `Vec3<f32>`
//! per element. `Vec3<f32>` is already laid out like WGSL `vec3<f32>` in a
//! storage array (16-byte stride), so buffers are plain byte casts.
//!
//! Single precision only; WGSL has no portable f64.

mod buffer;
mod device;
mod kernel;
mod ops;

pub use buffer::Vec3Buffer;
pub use device::{GpuDevice, GpuError};
pub use kernel::{Vec3Kernels, VEC3_WGSL};
pub use ops::Op;
