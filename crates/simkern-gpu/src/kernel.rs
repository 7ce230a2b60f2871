//! WGSL port of the `Vec3` operation library plus the pipeline cache that
//! dispatches it.

use std::collections::HashMap;

use simkern::Vec3;
use tracing::debug;

use crate::buffer::Vec3Buffer;
use crate::device::{GpuDevice, GpuError};
use crate::ops::Op;

const WORKGROUP_SIZE: u32 = 64;
const MAX_WORKGROUPS_X: u32 = 65_535;

/// Shared WGSL prelude: bindings, tolerances and the `Vec3`/`Vec2` helpers
/// each [`Op`] kernel calls into. Semantics track `simkern` for `f32`.
pub const VEC3_WGSL: &str = r#"
struct Params {
    count: u32,
    s: f32,
    row: u32,
    _pad: u32,
}

@group(0) @binding(0) var<storage, read> in_a: array<vec3<f32>>;
@group(0) @binding(1) var<storage, read> in_b: array<vec3<f32>>;
@group(0) @binding(2) var<storage, read_write> result: array<vec4<f32>>;
@group(0) @binding(3) var<uniform> params: Params;

const EPSILON: f32 = 1.1920929e-7;
const EPSILON_SQ: f32 = EPSILON * EPSILON;
const F32_MAX: f32 = 3.40282347e38;

fn vector(v: vec3<f32>) -> vec4<f32> {
    return vec4<f32>(v, 0.0);
}

fn scalar(x: f32) -> vec4<f32> {
    return vec4<f32>(x, 0.0, 0.0, 0.0);
}

// a < b ? a : b per lane; builtin min/max leave NaN open.
fn min3(a: vec3<f32>, b: vec3<f32>) -> vec3<f32> {
    return select(b, a, a < b);
}

fn max3(a: vec3<f32>, b: vec3<f32>) -> vec3<f32> {
    return select(b, a, a > b);
}

fn min1(a: f32, b: f32) -> f32 {
    return select(b, a, a < b);
}

fn max1(a: f32, b: f32) -> f32 {
    return select(b, a, a > b);
}

fn hmin(v: vec3<f32>) -> f32 {
    return min1(v.x, min1(v.y, v.z));
}

fn hmax(v: vec3<f32>) -> f32 {
    return max1(v.x, max1(v.y, v.z));
}

fn dot3(a: vec3<f32>, b: vec3<f32>) -> f32 {
    return (a.x * b.x + a.y * b.y) + a.z * b.z;
}

fn length3(v: vec3<f32>) -> f32 {
    return sqrt(dot3(v, v));
}

fn normalize3(v: vec3<f32>) -> vec3<f32> {
    return v / sqrt(dot3(v, v));
}

fn safe_length3(v: vec3<f32>) -> f32 {
    let m = hmax(abs(v));
    if m == 0.0 || m > F32_MAX {
        return m;
    }
    return m * length3(v / m);
}

fn safe_normalize3(v: vec3<f32>, fallback: vec3<f32>) -> vec3<f32> {
    let len2 = dot3(v, v);
    if len2 < EPSILON_SQ {
        return fallback;
    }
    return v / sqrt(len2);
}

fn sign3(v: vec3<f32>) -> vec3<f32> {
    let zero = vec3<f32>(0.0);
    let one = vec3<f32>(1.0);
    return select(zero, one, v > zero) - select(zero, one, v < zero);
}

// Half away from zero. Builtin round() breaks ties to even.
fn round3(v: vec3<f32>) -> vec3<f32> {
    let t = trunc(v);
    return select(t, t + sign3(v), abs(v - t) >= vec3<f32>(0.5));
}

// Compared and rescaled in max-lane units so squares cannot overflow.
fn clamp_length3(v: vec3<f32>, max_length: f32) -> vec3<f32> {
    if safe_length3(v) > max_length {
        let unit = v / hmax(abs(v));
        return unit * (max_length / length3(unit));
    }
    return v;
}

fn orthogonal3(v: vec3<f32>) -> vec3<f32> {
    let a = abs(v);
    if a.x < a.y {
        if a.x < a.z {
            return cross(v, vec3<f32>(1.0, 0.0, 0.0));
        }
        return cross(v, vec3<f32>(0.0, 0.0, 1.0));
    }
    if a.y < a.z {
        return cross(v, vec3<f32>(0.0, 1.0, 0.0));
    }
    return cross(v, vec3<f32>(0.0, 0.0, 1.0));
}

fn is_zero3(v: vec3<f32>) -> f32 {
    return select(0.0, 1.0, all(abs(v) < vec3<f32>(EPSILON)));
}

fn vector2(v: vec2<f32>) -> vec4<f32> {
    return vec4<f32>(v, 0.0, 0.0);
}

fn min2(a: vec2<f32>, b: vec2<f32>) -> vec2<f32> {
    return select(b, a, a < b);
}

fn max2(a: vec2<f32>, b: vec2<f32>) -> vec2<f32> {
    return select(b, a, a > b);
}

fn dot2(a: vec2<f32>, b: vec2<f32>) -> f32 {
    return a.x * b.x + a.y * b.y;
}

fn normalize2(v: vec2<f32>) -> vec2<f32> {
    return v / sqrt(dot2(v, v));
}
"#;

/// Full compute shader for one op: the prelude plus a `main` that applies
/// the op's expression to element `i`.
pub(crate) fn kernel_source(op: Op) -> String {
    format!(
        "{VEC3_WGSL}
@compute @workgroup_size({WORKGROUP_SIZE})
fn main(@builtin(global_invocation_id) gid: vec3<u32>) {{
    let i = gid.x + gid.y * params.row;
    if i >= params.count {{
        return;
    }}
    let a = in_a[i];
    let b = in_b[i];
    let s = params.s;
    result[i] = {};
}}
",
        op.wgsl_expr()
    )
}

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct Params {
    count: u32,
    s: f32,
    /// Threads per dispatch row (`gid.y` stride).
    row: u32,
    _pad: u32,
}

struct CachedPipeline {
    pipeline: wgpu::ComputePipeline,
    bind_group_layout: wgpu::BindGroupLayout,
}

/// Compiled `Vec3` kernels, one pipeline per [`Op`], built on first use.
///
/// Takes `&mut self` to fill the cache; use one instance per thread.
#[derive(Default)]
pub struct Vec3Kernels {
    pipelines: HashMap<Op, CachedPipeline>,
}

impl Vec3Kernels {
    /// Create an empty kernel cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ops compiled so far.
    pub fn compiled(&self) -> usize {
        self.pipelines.len()
    }

    fn get_or_compile(&mut self, device: &GpuDevice, op: Op) -> &CachedPipeline {
        self.pipelines
            .entry(op)
            .or_insert_with(|| Self::compile(device, op))
    }

    fn compile(device: &GpuDevice, op: Op) -> CachedPipeline {
        debug!("compiling vec3 kernel {op:?}");
        let wgsl = kernel_source(op);
        let module = device
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("simkern-gpu vec3 kernel"),
                source: wgpu::ShaderSource::Wgsl(wgsl.into()),
            });

        fn storage_entry(binding: u32, read_only: bool) -> wgpu::BindGroupLayoutEntry {
            wgpu::BindGroupLayoutEntry {
                binding,
                visibility: wgpu::ShaderStages::COMPUTE,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Storage { read_only },
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }
        }

        let bind_group_layout =
            device
                .device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("simkern-gpu bgl"),
                    entries: &[
                        storage_entry(0, true),
                        storage_entry(1, true),
                        storage_entry(2, false),
                        wgpu::BindGroupLayoutEntry {
                            binding: 3,
                            visibility: wgpu::ShaderStages::COMPUTE,
                            ty: wgpu::BindingType::Buffer {
                                ty: wgpu::BufferBindingType::Uniform,
                                has_dynamic_offset: false,
                                min_binding_size: None,
                            },
                            count: None,
                        },
                    ],
                });

        let pipeline_layout =
            device
                .device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("simkern-gpu pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    push_constant_ranges: &[],
                });

        let pipeline =
            device
                .device
                .create_compute_pipeline(&wgpu::ComputePipelineDescriptor {
                    label: Some("simkern-gpu pipeline"),
                    layout: Some(&pipeline_layout),
                    module: &module,
                    entry_point: Some("main"),
                    compilation_options: Default::default(),
                    cache: None,
                });

        CachedPipeline {
            pipeline,
            bind_group_layout,
        }
    }

    /// Record and submit `op` over buffers already on the device.
    ///
    /// `a`, `b` and `output` must hold the same number of vectors.
    pub fn dispatch(
        &mut self,
        device: &GpuDevice,
        op: Op,
        a: &Vec3Buffer,
        b: &Vec3Buffer,
        output: &Vec3Buffer,
        s: f32,
    ) -> Result<(), GpuError> {
        if a.len() != b.len() {
            return Err(GpuError::LengthMismatch { a: a.len(), b: b.len() });
        }
        if a.len() != output.len() {
            return Err(GpuError::LengthMismatch {
                a: a.len(),
                b: output.len(),
            });
        }
        if a.is_empty() {
            return Ok(());
        }

        let count = u32::try_from(a.len()).map_err(|_| GpuError::BatchTooLarge(a.len()))?;
        let groups = count.div_ceil(WORKGROUP_SIZE);
        let groups_x = groups.min(MAX_WORKGROUPS_X);
        let groups_y = groups.div_ceil(groups_x);
        if groups_y > MAX_WORKGROUPS_X {
            return Err(GpuError::BatchTooLarge(a.len()));
        }
        let params = Params {
            count,
            s,
            row: groups_x * WORKGROUP_SIZE,
            _pad: 0,
        };
        debug!("dispatch {op:?} over {count} vectors ({groups_x}x{groups_y} workgroups)");

        let cached = self.get_or_compile(device, op);

        use wgpu::util::DeviceExt;
        let params_buf = device
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("simkern-gpu params"),
                contents: bytemuck::bytes_of(&params),
                usage: wgpu::BufferUsages::UNIFORM,
            });

        let bind_group = device.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("simkern-gpu bind group"),
            layout: &cached.bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: a.buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: b.buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: output.buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: params_buf.as_entire_binding(),
                },
            ],
        });

        let mut encoder = device
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("simkern-gpu dispatch"),
            });

        {
            let mut pass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
                label: Some("simkern-gpu compute"),
                timestamp_writes: None,
            });
            pass.set_pipeline(&cached.pipeline);
            pass.set_bind_group(0, &bind_group, &[]);
            pass.dispatch_workgroups(groups_x, groups_y, 1);
        }

        device.queue.submit(std::iter::once(encoder.finish()));
        Ok(())
    }

    /// Upload `a` and `b`, evaluate `op` element-wise and read the results back.
    pub fn run(
        &mut self,
        device: &GpuDevice,
        op: Op,
        a: &[Vec3<f32>],
        b: &[Vec3<f32>],
        s: f32,
    ) -> Result<Vec<Vec3<f32>>, GpuError> {
        if a.len() != b.len() {
            return Err(GpuError::LengthMismatch { a: a.len(), b: b.len() });
        }
        if a.is_empty() {
            return Ok(Vec::new());
        }
        let a_buf = Vec3Buffer::from_slice(device, a);
        let b_buf = Vec3Buffer::from_slice(device, b);
        let out = Vec3Buffer::uninit(device, a.len());
        self.dispatch(device, op, &a_buf, &b_buf, &out, s)?;
        out.to_vec_sync(device)
    }
}
