//! Shader Tests
//!
//! Tests for:
//! - Every embedded WGSL template renders and validates
//! - Template context: strict undefined variables, light-array size
//! - Run-time compilation from files next to the executable
//! - Diagnostics for broken sources

use primer::primer_core::lighting::MAX_LIGHTS;
use primer::primer_render::deferred::{GEOMETRY_PASS, LIGHTING_PASS};
use primer::primer_render::shader::{ShaderCompiler, ShaderLibrary, context, validate_wgsl};
use primer::PrimerError;

fn entry_point_names(module: &naga::Module) -> Vec<&str> {
    module.entry_points.iter().map(|e| e.name.as_str()).collect()
}

// ============================================================================
// Embedded Shaders
// ============================================================================

#[test]
fn embedded_shaders_are_present() {
    let names = ShaderLibrary::embedded_names();
    for expected in [
        "color.wgsl",
        "lit.wgsl",
        "textured.wgsl",
        "deferred_geometry.wgsl",
        "deferred_lighting.wgsl",
    ] {
        assert!(names.iter().any(|n| n == expected), "missing {expected}");
    }
}

#[test]
fn every_embedded_shader_validates() {
    for name in ShaderLibrary::embedded_names() {
        let source = ShaderLibrary::render_source(&name, context! { max_lights => MAX_LIGHTS })
            .unwrap_or_else(|e| panic!("{name}: {e}"));
        let module = validate_wgsl(&name, &source).unwrap_or_else(|e| panic!("{e}"));

        let entries = entry_point_names(&module);
        assert!(entries.contains(&"vs_main"), "{name} lacks vs_main");
        assert!(entries.contains(&"fs_main"), "{name} lacks fs_main");
    }
}

#[test]
fn names_resolve_with_or_without_extension() {
    let a = ShaderLibrary::render_source("color", context! {}).unwrap();
    let b = ShaderLibrary::render_source("color.wgsl", context! {}).unwrap();
    assert_eq!(a, b);
}

#[test]
fn unknown_template_is_an_error() {
    let err = ShaderLibrary::render_source("does_not_exist", context! {}).unwrap_err();
    assert!(matches!(err, PrimerError::TemplateError(_)));
}

#[test]
fn lighting_template_sizes_light_array() {
    let source = ShaderLibrary::render_source(LIGHTING_PASS, context! { max_lights => MAX_LIGHTS }).unwrap();
    assert!(source.contains(&format!("array<Light, {MAX_LIGHTS}>")));
    assert!(!source.contains("{{"));
}

#[test]
fn lighting_template_requires_light_count() {
    let err = ShaderLibrary::render_source(LIGHTING_PASS, context! {}).unwrap_err();
    assert!(matches!(err, PrimerError::TemplateError(_)));
}

#[test]
fn geometry_pass_writes_three_targets() {
    let source = ShaderLibrary::render_source(GEOMETRY_PASS, context! {}).unwrap();
    let module = validate_wgsl(GEOMETRY_PASS, &source).unwrap();

    let fragment = module
        .entry_points
        .iter()
        .find(|e| e.stage == naga::ShaderStage::Fragment)
        .expect("fragment entry point");
    let result_ty = fragment.function.result.as_ref().expect("fragment output").ty;
    match &module.types[result_ty].inner {
        naga::TypeInner::Struct { members, .. } => assert_eq!(members.len(), 3),
        other => panic!("expected G-buffer struct, got {other:?}"),
    }
}

#[test]
fn library_starts_empty() {
    let library = ShaderLibrary::new();
    assert!(library.is_empty());
    assert_eq!(library.len(), 0);
    assert!(matches!(
        library.get(GEOMETRY_PASS),
        Err(PrimerError::ShaderNotFound(ref name)) if name == GEOMETRY_PASS
    ));
}

// ============================================================================
// Run-time Compilation
// ============================================================================

#[test]
fn runtime_shader_file_validates() {
    let module = ShaderCompiler::check_file("runtime/textured.wgsl").unwrap();
    let entries = entry_point_names(&module);
    assert_eq!(entries.len(), 2);
    assert!(entries.contains(&"vs_main"));
    assert!(entries.contains(&"fs_main"));
}

#[test]
fn missing_runtime_shader_names_the_file() {
    let err = ShaderCompiler::check_file("runtime/missing.wgsl").unwrap_err();
    assert!(matches!(err, PrimerError::FileNotFound(_)));
    assert!(err.to_string().contains("missing.wgsl"));
}

#[test]
fn syntax_error_reports_diagnostics() {
    let source = "@vertex\nfn vs_main() -> @builtin(position) vec4<f32> {\n    return vec4<f32>(0.0)\n}\n";
    let err = validate_wgsl("broken.wgsl", source).unwrap_err();
    match err {
        PrimerError::ShaderCompile { name, diagnostics } => {
            assert_eq!(name, "broken.wgsl");
            assert!(!diagnostics.is_empty());
        }
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn validation_error_reports_diagnostics() {
    // Parses, but returns the wrong type.
    let source = "@fragment\nfn fs_main() -> @location(0) vec4<f32> {\n    return vec3<f32>(1.0);\n}\n";
    let err = validate_wgsl("mismatch.wgsl", source).unwrap_err();
    assert!(matches!(err, PrimerError::ShaderCompile { .. }));
    assert!(err.to_string().contains("mismatch.wgsl"));
}
