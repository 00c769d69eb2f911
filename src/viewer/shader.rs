//! WGSL source for the point-sprite pipeline.

/// Billboard point-sprite shader.
///
/// Expands each particle into a camera-facing quad in clip space and shades
/// it as a soft additive dot. The whole-field yaw lives in the model matrix,
/// so particle positions stay untouched by rotation.
pub const POINT_SHADER: &str = r#"struct Uniforms {
    view_proj: mat4x4<f32>,
    model: mat4x4<f32>,
    color: vec3<f32>,
    point_size: f32,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec3<f32>,
    @location(1) uv: vec2<f32>,
};

@vertex
fn vs_main(
    @builtin(vertex_index) vertex_index: u32,
    @location(0) particle_pos: vec3<f32>,
) -> VertexOutput {
    var quad_vertices = array<vec2<f32>, 6>(
        vec2<f32>(-1.0, -1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>( 1.0,  1.0),
    );

    let quad_pos = quad_vertices[vertex_index];
    let world_pos = uniforms.model * vec4<f32>(particle_pos, 1.0);
    var clip_pos = uniforms.view_proj * world_pos;

    clip_pos.x += quad_pos.x * uniforms.point_size * clip_pos.w;
    clip_pos.y += quad_pos.y * uniforms.point_size * clip_pos.w;

    var out: VertexOutput;
    out.clip_position = clip_pos;
    out.color = uniforms.color;
    out.uv = quad_pos;

    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let dist = length(in.uv);
    if dist > 1.0 {
        discard;
    }
    let alpha = (1.0 - smoothstep(0.3, 1.0, dist)) * 0.8;
    return vec4<f32>(in.color, alpha);
}
"#;
