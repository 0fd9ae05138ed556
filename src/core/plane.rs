use super::error::{CarouselError, Result};
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Anything that can report the pixel size of a decoded image.
///
/// Implemented by the GPU texture wrapper on the web and by plain test doubles
/// on the host.
pub trait TextureSource {
    fn dimensions(&self) -> (u32, u32);
}

/// A flat rectangle displaying one image.
#[derive(Clone, Debug)]
pub struct ImagePlane<T> {
    pub position: Vec3,
    pub rotation: Vec3,
    pub width: f32,
    pub height: f32,
    pub texture: T,
}

impl<T: TextureSource> ImagePlane<T> {
    /// Build a plane `plane_height` units tall whose width preserves the
    /// texture's aspect ratio. Fails if the texture has not finished decoding
    /// (zero width or height).
    pub fn from_texture(texture: T, plane_height: f32) -> Result<Self> {
        let (w, h) = texture.dimensions();
        if w == 0 || h == 0 {
            return Err(CarouselError::InvalidTexture {
                width: w,
                height: h,
            });
        }
        let aspect = w as f32 / h as f32;
        Ok(Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            width: aspect * plane_height,
            height: plane_height,
            texture,
        })
    }
}

impl<T> ImagePlane<T> {
    /// World transform for a unit quad centred on the origin.
    pub fn model_matrix(&self) -> Mat4 {
        let rot = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(
            Vec3::new(self.width, self.height, 1.0),
            rot,
            self.position,
        )
    }
}
