//! Handle to a host owned font.

/// An opaque reference to a font loaded by the host renderer.
///
/// Loading and unloading fonts is the host's job. The toolkit only stores the
/// handle, forwards it to the renderer and reads its base size.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Font {
    /// Host specific identifier. `0` means "no font".
    pub id: u32,
    /// Pixel size the font was rasterized at.
    pub base_size: u32,
}

impl Font {
    /// Create a handle.
    pub const fn new(id: u32, base_size: u32) -> Self {
        Self { id, base_size }
    }

    /// Whether the handle points at a loaded font.
    pub const fn is_loaded(&self) -> bool {
        self.id > 0
    }
}
