use primer_core::geometry::MeshData;
use primer_core::vertex::Vertex;
use wgpu::util::DeviceExt;

/// Immutable vertex (and optional index) buffers for one mesh.
pub struct GpuMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: Option<wgpu::Buffer>,
    pub vertex_count: u32,
    pub index_count: u32,
}

impl GpuMesh {
    /// Uploads `data` once; the buffers are never written again.
    #[must_use]
    pub fn upload<V: Vertex>(device: &wgpu::Device, label: &str, data: &MeshData<V>) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Vertices")),
            contents: data.vertex_bytes(),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = data.is_indexed().then(|| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} Indices")),
                contents: data.index_bytes(),
                usage: wgpu::BufferUsages::INDEX,
            })
        });

        log::debug!(
            "Uploaded mesh '{label}': {} vertices, {} indices",
            data.vertex_count(),
            data.index_count()
        );

        Self {
            vertex_buffer,
            index_buffer,
            vertex_count: data.vertex_count(),
            index_count: data.index_count(),
        }
    }

    /// Binds the buffers to slot 0 and issues one draw.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        match &self.index_buffer {
            Some(indices) => {
                pass.set_index_buffer(indices.slice(..), wgpu::IndexFormat::Uint16);
                pass.draw_indexed(0..self.index_count, 0, 0..1);
            }
            None => pass.draw(0..self.vertex_count, 0..1),
        }
    }
}
