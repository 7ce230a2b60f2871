//! Batched `Vec3` and `Vec2` operations and their CPU reference.

use simkern::{Vec2, Vec3};

/// One vector operation evaluated element-wise over a batch.
///
/// Every op reads `a[i]`; binary ops also read `b[i]`, and the scalar-operand
/// ops read the batch scalar `s`. Scalar results land in `x` with `y = z = 0`;
/// `IsZero` returns 1.0 or 0.0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    /// `-a`
    Neg,
    /// `a + s`, and likewise for the other `*Scalar` ops.
    AddScalar,
    SubScalar,
    MulScalar,
    DivScalar,
    /// `s / a` per lane.
    ScalarDiv,
    Cross,
    Dot,
    Length,
    Length2,
    SafeLength,
    Normalize,
    /// Falls back to `b[i]` below the length tolerance.
    SafeNormalize,
    Abs,
    Sign,
    Round,
    Sqrt,
    Min,
    Max,
    /// Each lane against `s`.
    MinScalar,
    MaxScalar,
    /// Per-lane clamp of `a[i]` to the box `[b[i], b[i] + s]`.
    Clamp,
    /// `a[i] + (b[i] - a[i]) * s`
    Lerp,
    MaxElement,
    MinElement,
    /// Caps `|a[i]|` at `s`.
    ClampLength,
    Orthogonal,
    UnitOrthogonal,
    IsZero,

    // `Vec2` on the x, y lanes; z of the inputs is ignored, z of the output is 0.
    Vec2Add,
    Vec2Sub,
    Vec2Mul,
    Vec2Div,
    Vec2Neg,
    Vec2Scale,
    Vec2Dot,
    Vec2Length,
    Vec2Length2,
    Vec2Normalize,
    Vec2Min,
    Vec2Max,
}

impl Op {
    pub const ALL: [Op; 45] = [
        Op::Add,
        Op::Sub,
        Op::Mul,
        Op::Div,
        Op::Neg,
        Op::AddScalar,
        Op::SubScalar,
        Op::MulScalar,
        Op::DivScalar,
        Op::ScalarDiv,
        Op::Cross,
        Op::Dot,
        Op::Length,
        Op::Length2,
        Op::SafeLength,
        Op::Normalize,
        Op::SafeNormalize,
        Op::Abs,
        Op::Sign,
        Op::Round,
        Op::Sqrt,
        Op::Min,
        Op::Max,
        Op::MinScalar,
        Op::MaxScalar,
        Op::Clamp,
        Op::Lerp,
        Op::MaxElement,
        Op::MinElement,
        Op::ClampLength,
        Op::Orthogonal,
        Op::UnitOrthogonal,
        Op::IsZero,
        Op::Vec2Add,
        Op::Vec2Sub,
        Op::Vec2Mul,
        Op::Vec2Div,
        Op::Vec2Neg,
        Op::Vec2Scale,
        Op::Vec2Dot,
        Op::Vec2Length,
        Op::Vec2Length2,
        Op::Vec2Normalize,
        Op::Vec2Min,
        Op::Vec2Max,
    ];

    /// Whether the result is a scalar packed into `x`.
    pub fn is_scalar(self) -> bool {
        matches!(
            self,
            Op::Dot
                | Op::Length
                | Op::Length2
                | Op::SafeLength
                | Op::MaxElement
                | Op::MinElement
                | Op::IsZero
                | Op::Vec2Dot
                | Op::Vec2Length
                | Op::Vec2Length2
        )
    }

    /// WGSL expression producing the `vec4<f32>` output slot from `a`, `b`, `s`.
    pub(crate) fn wgsl_expr(self) -> &'static str {
        match self {
            Op::Add => "vector(a + b)",
            Op::Sub => "vector(a - b)",
            Op::Mul => "vector(a * b)",
            Op::Div => "vector(a / b)",
            Op::Neg => "vector(-a)",
            Op::AddScalar => "vector(a + s)",
            Op::SubScalar => "vector(a - s)",
            Op::MulScalar => "vector(a * s)",
            Op::DivScalar => "vector(a / s)",
            Op::ScalarDiv => "vector(s / a)",
            Op::Cross => "vector(cross(a, b))",
            Op::Dot => "scalar(dot3(a, b))",
            Op::Length => "scalar(length3(a))",
            Op::Length2 => "scalar(dot3(a, a))",
            Op::SafeLength => "scalar(safe_length3(a))",
            Op::Normalize => "vector(normalize3(a))",
            Op::SafeNormalize => "vector(safe_normalize3(a, b))",
            Op::Abs => "vector(abs(a))",
            Op::Sign => "vector(sign3(a))",
            Op::Round => "vector(round3(a))",
            Op::Sqrt => "vector(sqrt(a))",
            Op::Min => "vector(min3(a, b))",
            Op::Max => "vector(max3(a, b))",
            Op::MinScalar => "vector(min3(a, vec3<f32>(s)))",
            Op::MaxScalar => "vector(max3(a, vec3<f32>(s)))",
            Op::Clamp => "vector(min3(max3(a, b), b + s))",
            Op::Lerp => "vector(a + (b - a) * s)",
            Op::MaxElement => "scalar(hmax(a))",
            Op::MinElement => "scalar(hmin(a))",
            Op::ClampLength => "vector(clamp_length3(a, s))",
            Op::Orthogonal => "vector(orthogonal3(a))",
            Op::UnitOrthogonal => "vector(normalize3(orthogonal3(a)))",
            Op::IsZero => "scalar(is_zero3(a))",
            Op::Vec2Add => "vector2(a.xy + b.xy)",
            Op::Vec2Sub => "vector2(a.xy - b.xy)",
            Op::Vec2Mul => "vector2(a.xy * b.xy)",
            Op::Vec2Div => "vector2(a.xy / b.xy)",
            Op::Vec2Neg => "vector2(-a.xy)",
            Op::Vec2Scale => "vector2(a.xy * s)",
            Op::Vec2Dot => "scalar(dot2(a.xy, b.xy))",
            Op::Vec2Length => "scalar(sqrt(dot2(a.xy, a.xy)))",
            Op::Vec2Length2 => "scalar(dot2(a.xy, a.xy))",
            Op::Vec2Normalize => "vector2(normalize2(a.xy))",
            Op::Vec2Min => "vector2(min2(a.xy, b.xy))",
            Op::Vec2Max => "vector2(max2(a.xy, b.xy))",
        }
    }

    /// The same operation on the CPU through `simkern::Vec3` / `simkern::Vec2`.
    pub fn eval_cpu(self, a: Vec3<f32>, b: Vec3<f32>, s: f32) -> Vec3<f32> {
        let scalar = |x: f32| Vec3::new(x, 0.0, 0.0);
        let (a2, b2) = (Vec2::new(a.x, a.y), Vec2::new(b.x, b.y));
        let vector2 = |v: Vec2<f32>| Vec3::new(v.x, v.y, 0.0);
        match self {
            Op::Add => a + b,
            Op::Sub => a - b,
            Op::Mul => a * b,
            Op::Div => a / b,
            Op::Neg => -a,
            Op::AddScalar => a + s,
            Op::SubScalar => a - s,
            Op::MulScalar => a * s,
            Op::DivScalar => a / s,
            Op::ScalarDiv => s / a,
            Op::Cross => a.cross(b),
            Op::Dot => scalar(a.dot(b)),
            Op::Length => scalar(a.length()),
            Op::Length2 => scalar(a.length2()),
            Op::SafeLength => scalar(a.safe_length()),
            Op::Normalize => a.normalize(),
            Op::SafeNormalize => a.safe_normalize(b),
            Op::Abs => a.abs(),
            Op::Sign => a.sign(),
            Op::Round => a.round(),
            Op::Sqrt => a.sqrt(),
            Op::Min => a.component_min(b),
            Op::Max => a.component_max(b),
            Op::MinScalar => a.min_scalar(s),
            Op::MaxScalar => a.max_scalar(s),
            Op::Clamp => a.clamp(b, b + s),
            Op::Lerp => a.lerp(b, s),
            Op::MaxElement => scalar(a.max_element()),
            Op::MinElement => scalar(a.min_element()),
            Op::ClampLength => a.clamp_length(s),
            Op::Orthogonal => a.orthogonal(),
            Op::UnitOrthogonal => a.unit_orthogonal(),
            Op::IsZero => scalar(if a.is_zero() { 1.0 } else { 0.0 }),
            Op::Vec2Add => vector2(a2 + b2),
            Op::Vec2Sub => vector2(a2 - b2),
            Op::Vec2Mul => vector2(a2 * b2),
            Op::Vec2Div => vector2(a2 / b2),
            Op::Vec2Neg => vector2(-a2),
            Op::Vec2Scale => vector2(a2 * s),
            Op::Vec2Dot => scalar(a2.dot(b2)),
            Op::Vec2Length => scalar(a2.length()),
            Op::Vec2Length2 => scalar(a2.length2()),
            Op::Vec2Normalize => vector2(a2.normalize()),
            Op::Vec2Min => vector2(a2.component_min(b2)),
            Op::Vec2Max => vector2(a2.component_max(b2)),
        }
    }
}
