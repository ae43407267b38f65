//! Render pipeline construction.
//!
//! Every sample pipeline uses `vs_main` / `fs_main` from a single module, one
//! vertex stream, and the same fixed-function switches: topology, culling,
//! blending and depth testing. [`PipelineBuilder`] collects those switches
//! and creates the layout and pipeline in one call.
//!
//! Front faces are clockwise in screen space, matching the winding of the
//! static geometry.

/// Fixed-function state of a pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineState {
    pub topology: wgpu::PrimitiveTopology,
    pub front_face: wgpu::FrontFace,
    pub cull_mode: Option<wgpu::Face>,
    pub blend: Option<wgpu::BlendState>,
    /// `None` disables the depth test.
    pub depth_format: Option<wgpu::TextureFormat>,
    pub depth_write: bool,
    pub depth_compare: wgpu::CompareFunction,
}

impl Default for PipelineState {
    fn default() -> Self {
        Self {
            topology: wgpu::PrimitiveTopology::TriangleList,
            front_face: wgpu::FrontFace::Cw,
            cull_mode: Some(wgpu::Face::Back),
            blend: None,
            depth_format: None,
            depth_write: true,
            depth_compare: wgpu::CompareFunction::LessEqual,
        }
    }
}

pub struct PipelineBuilder<'a> {
    label: &'a str,
    module: &'a wgpu::ShaderModule,
    vertex_layouts: Vec<wgpu::VertexBufferLayout<'a>>,
    bind_group_layouts: Vec<&'a wgpu::BindGroupLayout>,
    color_formats: Vec<wgpu::TextureFormat>,
    state: PipelineState,
}

impl<'a> PipelineBuilder<'a> {
    #[must_use]
    pub fn new(label: &'a str, module: &'a wgpu::ShaderModule) -> Self {
        Self {
            label,
            module,
            vertex_layouts: Vec::new(),
            bind_group_layouts: Vec::new(),
            color_formats: Vec::new(),
            state: PipelineState::default(),
        }
    }

    #[must_use]
    pub fn vertex_layout(mut self, layout: wgpu::VertexBufferLayout<'a>) -> Self {
        self.vertex_layouts.push(layout);
        self
    }

    /// Appends a bind group layout; groups are numbered in call order.
    #[must_use]
    pub fn bind_group_layout(mut self, layout: &'a wgpu::BindGroupLayout) -> Self {
        self.bind_group_layouts.push(layout);
        self
    }

    /// Appends a colour target; targets are numbered in call order.
    #[must_use]
    pub fn color_target(mut self, format: wgpu::TextureFormat) -> Self {
        self.color_formats.push(format);
        self
    }

    #[must_use]
    pub fn topology(mut self, topology: wgpu::PrimitiveTopology) -> Self {
        self.state.topology = topology;
        self
    }

    #[must_use]
    pub fn cull_mode(mut self, cull_mode: Option<wgpu::Face>) -> Self {
        self.state.cull_mode = cull_mode;
        self
    }

    /// Source-alpha / inverse-source-alpha blending on every target.
    #[must_use]
    pub fn alpha_blending(mut self) -> Self {
        self.state.blend = Some(wgpu::BlendState::ALPHA_BLENDING);
        self
    }

    #[must_use]
    pub fn depth(mut self, format: wgpu::TextureFormat, write: bool) -> Self {
        self.state.depth_format = Some(format);
        self.state.depth_write = write;
        self
    }

    #[must_use]
    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    #[must_use]
    pub fn build(self, device: &wgpu::Device) -> wgpu::RenderPipeline {
        let bind_group_layouts: Vec<Option<&wgpu::BindGroupLayout>> =
            self.bind_group_layouts.iter().copied().map(Some).collect();
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some(self.label),
            bind_group_layouts: &bind_group_layouts,
            immediate_size: 0,
        });

        let targets: Vec<Option<wgpu::ColorTargetState>> = self
            .color_formats
            .iter()
            .map(|&format| {
                Some(wgpu::ColorTargetState {
                    format,
                    blend: self.state.blend,
                    write_mask: wgpu::ColorWrites::ALL,
                })
            })
            .collect();

        let depth_stencil = self.state.depth_format.map(|format| wgpu::DepthStencilState {
            format,
            depth_write_enabled: Some(self.state.depth_write),
            depth_compare: Some(self.state.depth_compare),
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        });

        let strip_index_format = matches!(
            self.state.topology,
            wgpu::PrimitiveTopology::TriangleStrip | wgpu::PrimitiveTopology::LineStrip
        )
        .then_some(wgpu::IndexFormat::Uint16);

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(self.label),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: self.module,
                entry_point: Some("vs_main"),
                buffers: &self.vertex_layouts,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: self.module,
                entry_point: Some("fs_main"),
                targets: &targets,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: self.state.topology,
                strip_index_format,
                front_face: self.state.front_face,
                cull_mode: self.state.cull_mode,
                ..Default::default()
            },
            depth_stencil,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        })
    }
}
