// Host-side tests for the texture registry, plane factory and camera.

use glam::{Vec3, Vec4};
use plane_carousel::core::*;

#[derive(Debug)]
struct Tex(u32, u32);

impl TextureSource for Tex {
    fn dimensions(&self) -> (u32, u32) {
        (self.0, self.1)
    }
}

#[test]
fn default_registry_has_five_sets_of_three() {
    let r = TextureRegistry::default();
    assert_eq!(r.len(), 5);
    for i in 0..r.len() {
        assert_eq!(r.get(i).unwrap().len(), 3);
    }
    assert_eq!(
        r.get(5).unwrap_err(),
        CarouselError::OutOfRange { index: 5, len: 5 }
    );
}

#[test]
fn default_registry_points_at_bundled_files() {
    let r = TextureRegistry::default();
    assert_eq!(
        r.get(0).unwrap().sources(),
        ["assets/thum.png", "assets/thum7.png", "assets/thum5.jpg"]
    );
    assert_eq!(
        r.get(3).unwrap().sources(),
        ["assets/thum5.jpg", "assets/thumbnail.jpg", "assets/tum.jpeg"]
    );
}

#[test]
fn registry_preserves_source_order() {
    let r = TextureRegistry::new(vec![TextureSet::new(["c.png", "a.png", "b.png"])]);
    assert_eq!(r.get(0).unwrap().sources(), ["c.png", "a.png", "b.png"]);
}

#[test]
fn empty_registry_rejects_every_index() {
    let r = TextureRegistry::new(Vec::new());
    assert!(r.is_empty());
    assert!(r.get(0).is_err());
}

#[test]
fn plane_width_follows_aspect_ratio() {
    let wide = ImagePlane::from_texture(Tex(1920, 1080), 10.0).unwrap();
    assert!((wide.width - 17.777_779).abs() < 1e-3);
    assert_eq!(wide.height, 10.0);

    let tall = ImagePlane::from_texture(Tex(500, 1000), 10.0).unwrap();
    assert_eq!(tall.width, 5.0);
    assert_eq!(tall.position, Vec3::ZERO);
    assert_eq!(tall.rotation, Vec3::ZERO);
}

#[test]
fn plane_rejects_undecoded_texture() {
    assert_eq!(
        ImagePlane::from_texture(Tex(0, 0), 10.0).unwrap_err(),
        CarouselError::InvalidTexture {
            width: 0,
            height: 0
        }
    );
    assert!(ImagePlane::from_texture(Tex(640, 0), 10.0).is_err());
    assert!(ImagePlane::from_texture(Tex(0, 480), 10.0).is_err());
}

#[test]
fn model_matrix_scales_and_translates_unit_quad() {
    let mut p = ImagePlane::from_texture(Tex(2, 1), 10.0).unwrap();
    p.position = Vec3::new(120.0, 0.0, 0.0);
    let corner = p.model_matrix() * Vec4::new(0.5, 0.5, 0.0, 1.0);
    assert!((corner.x - 130.0).abs() < 1e-4);
    assert!((corner.y - 5.0).abs() < 1e-4);
    assert!(corner.z.abs() < 1e-4);
}

#[test]
fn model_matrix_applies_y_rotation() {
    let mut p = ImagePlane::from_texture(Tex(1, 1), 10.0).unwrap();
    p.rotation.y = std::f32::consts::FRAC_PI_2;
    // right edge swings onto -Z
    let edge = p.model_matrix() * Vec4::new(0.5, 0.0, 0.0, 1.0);
    assert!(edge.x.abs() < 1e-4);
    assert!((edge.z + 5.0).abs() < 1e-4);
}

#[test]
fn camera_projects_origin_to_screen_centre() {
    let cam = Camera::looking_down_z(CAMERA_Z, 16.0 / 9.0);
    assert_eq!(cam.eye, Vec3::new(0.0, 0.0, CAMERA_Z));
    let clip = cam.view_projection() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-5);
    assert!(ndc.y.abs() < 1e-5);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn neighbour_plane_is_off_screen() {
    let cam = Camera::looking_down_z(CAMERA_Z, 16.0 / 9.0);
    let clip = cam.view_projection() * Vec4::new(IMAGE_DISTANCE, 0.0, 0.0, 1.0);
    let ndc_x = clip.x / clip.w;
    assert!(ndc_x > 1.0);
}
