//! Shaders
//!
//! Two ways to obtain a `wgpu::ShaderModule`:
//!
//! | Type | Source | Use case |
//! |------|--------|----------|
//! | [`ShaderLibrary`]  | WGSL embedded at build time, rendered as a minijinja template | every sample's fixed shaders |
//! | [`ShaderCompiler`] | WGSL text read from disk at run time | the dynamic-compile sample |
//!
//! Both validate the final WGSL on the CPU before handing it to the device,
//! so a broken shader surfaces as [`PrimerError::ShaderCompile`] with
//! readable diagnostics instead of a device error.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use minijinja::{Environment, Error, ErrorKind, syntax::SyntaxConfig};
use rust_embed::RustEmbed;

use primer_core::errors::{PrimerError, Result};
use primer_core::io;

/// Builds the template context passed to [`ShaderLibrary::load`].
pub use minijinja::context;

static SHADER_ENV: OnceLock<Environment<'static>> = OnceLock::new();

#[derive(RustEmbed)]
#[folder = "../../assets/shaders"]
struct ShaderAssets;

#[cfg(debug_assertions)]
const SHADER_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../assets/shaders");

fn get_env() -> &'static Environment<'static> {
    SHADER_ENV.get_or_init(|| {
        let mut env = Environment::new();

        // Delimiters that cannot collide with WGSL attribute or brace syntax.
        match SyntaxConfig::builder()
            .block_delimiters("{$", "$}")
            .variable_delimiters("{{", "}}")
            .line_statement_prefix("$$")
            .build()
        {
            Ok(syntax) => env.set_syntax(syntax),
            Err(e) => log::error!("Invalid shader template syntax: {e}"),
        }
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_undefined_behavior(minijinja::UndefinedBehavior::Strict);
        env.set_loader(shader_loader);

        env
    })
}

fn shader_filename(name: &str) -> Cow<'_, str> {
    if Path::new(name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("wgsl"))
    {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("{name}.wgsl"))
    }
}

fn shader_loader(name: &str) -> std::result::Result<Option<String>, Error> {
    let filename = shader_filename(name);

    #[cfg(debug_assertions)]
    {
        let path = Path::new(SHADER_DIR).join(filename.as_ref());
        if path.exists() {
            return std::fs::read_to_string(&path).map(Some).map_err(|e| {
                Error::new(
                    ErrorKind::TemplateNotFound,
                    format!("Failed to read {}: {e}", path.display()),
                )
            });
        }
    }

    if let Some(file) = ShaderAssets::get(&filename)
        && let Ok(source) = std::str::from_utf8(file.data.as_ref())
    {
        return Ok(Some(source.to_string()));
    }

    Ok(None)
}

// ─── Validation ──────────────────────────────────────────────────────────────

/// Parses and validates WGSL, returning formatted diagnostics on failure.
pub fn validate_wgsl(name: &str, source: &str) -> Result<naga::Module> {
    let module = naga::front::wgsl::parse_str(source).map_err(|e| PrimerError::ShaderCompile {
        name: name.to_string(),
        diagnostics: e.emit_to_string(source),
    })?;

    naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::default(),
    )
    .validate(&module)
    .map_err(|e| PrimerError::ShaderCompile {
        name: name.to_string(),
        diagnostics: e.emit_to_string(source),
    })?;

    Ok(module)
}

/// Creates the device module for already validated WGSL and logs whatever
/// the backend compiler reports.
fn create_validated_module(device: &wgpu::Device, label: &str, source: String) -> wgpu::ShaderModule {
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(Cow::Owned(source)),
    });

    let info = pollster::block_on(module.get_compilation_info());
    for message in &info.messages {
        let location = message
            .location
            .as_ref()
            .map(|l| format!("{label}:{}:{}", l.line_number, l.line_position))
            .unwrap_or_else(|| label.to_string());
        match message.message_type {
            wgpu::CompilationMessageType::Error => log::error!("{location}: {}", message.message),
            wgpu::CompilationMessageType::Warning => log::warn!("{location}: {}", message.message),
            _ => log::info!("{location}: {}", message.message),
        }
    }

    module
}

// ─── ShaderLibrary ───────────────────────────────────────────────────────────

/// Embedded shaders, rendered from templates and kept by name.
///
/// Modules are created once at sample initialisation and looked up by name
/// (for example `deferred_geometry`) when pipelines are built.
#[derive(Default)]
pub struct ShaderLibrary {
    modules: HashMap<String, wgpu::ShaderModule>,
}

impl ShaderLibrary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the template `name` with `context` and returns the WGSL text.
    pub fn render_source(name: &str, context: minijinja::Value) -> Result<String> {
        let filename = shader_filename(name);
        let template = get_env().get_template(&filename)?;
        Ok(template.render(context)?)
    }

    /// Names of every embedded shader file.
    #[must_use]
    pub fn embedded_names() -> Vec<String> {
        let mut names: Vec<String> = ShaderAssets::iter().map(|n| n.into_owned()).collect();
        names.sort();
        names
    }

    /// Renders, validates and creates the module `name`, replacing any module
    /// previously loaded under that name.
    pub fn load(
        &mut self,
        device: &wgpu::Device,
        name: &str,
        context: minijinja::Value,
    ) -> Result<&wgpu::ShaderModule> {
        let source = Self::render_source(name, context)?;
        if let Err(e) = validate_wgsl(name, &source) {
            log::error!("{e}");
            return Err(e);
        }
        log::info!("Loaded shader '{name}'");

        let module = create_validated_module(device, &format!("Shader {name}"), source);
        self.modules.insert(name.to_string(), module);
        self.get(name)
    }

    /// A module loaded earlier with [`load`](Self::load).
    pub fn get(&self, name: &str) -> Result<&wgpu::ShaderModule> {
        self.modules
            .get(name)
            .ok_or_else(|| PrimerError::ShaderNotFound(name.to_string()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

// ─── ShaderCompiler ──────────────────────────────────────────────────────────

/// Compiles WGSL source text found next to the executable at run time.
pub struct ShaderCompiler;

impl ShaderCompiler {
    /// Validates and creates a module from source text.
    ///
    /// Diagnostics are logged at error level and returned in the error.
    pub fn compile_source(device: &wgpu::Device, name: &str, source: &str) -> Result<wgpu::ShaderModule> {
        match validate_wgsl(name, source) {
            Ok(module) => {
                log::info!(
                    "Compiled '{name}': {} entry point(s), {} function(s)",
                    module.entry_points.len(),
                    module.functions.len()
                );
            }
            Err(e) => {
                log::error!("{e}");
                return Err(e);
            }
        }
        Ok(create_validated_module(device, name, source.to_string()))
    }

    /// Reads `relative` from beside the executable and compiles it.
    pub fn compile_file(device: &wgpu::Device, relative: impl AsRef<Path>) -> Result<wgpu::ShaderModule> {
        let relative = relative.as_ref();
        let path = io::resolve_asset(relative)?;
        let source = io::load_text_file(&path)?;
        log::info!("Compiling shader {}", path.display());
        Self::compile_source(device, &relative.display().to_string(), &source)
    }

    /// Parses and validates a file without a device.
    pub fn check_file(relative: impl AsRef<Path>) -> Result<naga::Module> {
        let relative = relative.as_ref();
        let source = io::load_asset_text(relative)?;
        validate_wgsl(&relative.display().to_string(), &source)
    }
}
