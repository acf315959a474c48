/// WGSL shader for the whole dial: projection/view/model transform in the
/// vertex stage, Phong lighting (ambient + diffuse + specular) against a
/// flat per-draw color in the fragment stage.
pub const CLOCK_SHADER: &str = r#"
struct SceneUniforms {
    projection: mat4x4<f32>,
    view: mat4x4<f32>,
    model: mat4x4<f32>,
    light_pos: vec4<f32>,
    light_color: vec4<f32>,
    view_pos: vec4<f32>,
};

struct MaterialUniforms {
    color: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> scene: SceneUniforms;

@group(0) @binding(1)
var<uniform> material: MaterialUniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) frag_pos: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    let world_pos = scene.model * vec4<f32>(in.position, 1.0);

    var out: VertexOutput;
    out.frag_pos = world_pos.xyz;
    out.normal = (scene.model * vec4<f32>(in.normal, 0.0)).xyz;
    out.clip_position = scene.projection * scene.view * world_pos;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let light_color = scene.light_color.rgb;

    // Ambient
    let ambient = 0.15 * light_color;

    // Diffuse
    let n = normalize(in.normal);
    let light_dir = normalize(scene.light_pos.xyz - in.frag_pos);
    let diff = max(dot(n, light_dir), 0.0);
    let diffuse = diff * light_color;

    // Specular
    let view_dir = normalize(scene.view_pos.xyz - in.frag_pos);
    let reflect_dir = reflect(-light_dir, n);
    let spec = pow(max(dot(view_dir, reflect_dir), 0.0), 32.0);
    let specular = 0.5 * spec * light_color;

    let result = (ambient + diffuse + specular) * material.color.rgb;
    return vec4<f32>(result, 1.0);
}
"#;
