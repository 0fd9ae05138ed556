//! Carousel state and the slide controller.
//!
//! `Carousel` owns the loaded planes, the active index, the render set and the
//! running tweens. Everything is driven explicitly by the caller: input
//! handlers call [`Carousel::slide`], the loader calls
//! [`Carousel::begin_load`] / [`Carousel::complete_load`], and the frame loop
//! calls [`Carousel::tick`].

use super::constants::*;
use super::error::Result;
use super::input::Direction;
use super::plane::{ImagePlane, TextureSource};
use super::registry::TextureRegistry;
use super::tween::{Channel, Ease, TweenSet};
use super::window::{visible_window, RenderDiff, RenderSet};
use glam::Vec3;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct CarouselConfig {
    pub image_distance: f32,
    pub plane_height: f32,
    pub visible_range: usize,
    pub slide_duration: Duration,
    pub slide_rotation: f32,
    pub camera_z: f32,
    pub ease: Ease,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            image_distance: IMAGE_DISTANCE,
            plane_height: PLANE_HEIGHT,
            visible_range: VISIBLE_RANGE,
            slide_duration: Duration::from_secs_f32(SLIDE_DURATION_SEC),
            slide_rotation: SLIDE_ROTATION_RAD,
            camera_z: CAMERA_Z,
            ease: Ease::default(),
        }
    }
}

/// A set load that has been started but not yet applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadRequest {
    pub generation: u64,
    pub set_index: usize,
    pub sources: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied { count: usize },
    /// A newer load was started after this one; the result was discarded.
    Stale,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SlideOutcome {
    Moved { from: usize, to: usize },
    Locked,
    AtEdge,
}

pub struct Carousel<T> {
    config: CarouselConfig,
    registry: TextureRegistry,
    planes: Vec<ImagePlane<T>>,
    active_index: usize,
    locked: bool,
    render_set: RenderSet,
    tweens: TweenSet,
    generation: u64,
    camera_z: f32,
}

impl<T: TextureSource> Carousel<T> {
    pub fn new(config: CarouselConfig, registry: TextureRegistry) -> Self {
        let camera_z = config.camera_z;
        Self {
            config,
            registry,
            planes: Vec::new(),
            active_index: 0,
            locked: false,
            render_set: RenderSet::default(),
            tweens: TweenSet::default(),
            generation: 0,
            camera_z,
        }
    }

    /// Start loading `set_index`. Any load begun earlier becomes stale.
    pub fn begin_load(&mut self, set_index: usize) -> Result<LoadRequest> {
        let set = self.registry.get(set_index)?;
        let sources = set.sources().to_vec();
        self.generation += 1;
        Ok(LoadRequest {
            generation: self.generation,
            set_index,
            sources,
        })
    }

    /// Apply decoded textures for the load identified by `generation`.
    ///
    /// Planes are built before anything is replaced, so an invalid texture
    /// leaves the current set on screen.
    pub fn complete_load(&mut self, generation: u64, textures: Vec<T>) -> Result<LoadOutcome> {
        if generation != self.generation {
            return Ok(LoadOutcome::Stale);
        }
        let mut planes = textures
            .into_iter()
            .map(|t| ImagePlane::from_texture(t, self.config.plane_height))
            .collect::<Result<Vec<_>>>()?;
        for (i, p) in planes.iter_mut().enumerate() {
            p.position = Vec3::new(i as f32 * self.config.image_distance, 0.0, 0.0);
        }

        self.render_set.clear();
        self.tweens.clear();
        self.locked = false;
        self.planes = planes;
        self.active_index = 0;
        self.camera_z = self.config.camera_z;
        self.update_visible();
        Ok(LoadOutcome::Applied {
            count: self.planes.len(),
        })
    }
}

impl<T> Carousel<T> {
    /// Move one plane in `direction`, animating the outgoing and incoming
    /// planes. The active index and render set change immediately; the lock is
    /// held until the tweens finish.
    pub fn slide(&mut self, direction: Direction) -> SlideOutcome {
        if self.locked {
            return SlideOutcome::Locked;
        }
        let from = self.active_index;
        let next = from as isize + direction.step();
        if next < 0 || next as usize >= self.planes.len() {
            return SlideOutcome::AtEdge;
        }
        let to = next as usize;
        let dir = direction.sign();
        let distance = self.config.image_distance;
        let duration = self.config.slide_duration;
        let ease = self.config.ease;

        self.tweens.start(
            &self.planes,
            from,
            Channel::PositionX,
            dir * -distance,
            duration,
            ease,
        );
        self.tweens.start(
            &self.planes,
            from,
            Channel::RotationY,
            dir * self.config.slide_rotation,
            duration,
            ease,
        );

        self.planes[to].position.x = dir * distance;
        self.tweens
            .start(&self.planes, to, Channel::PositionX, 0.0, duration, ease);
        self.tweens
            .start(&self.planes, to, Channel::RotationY, 0.0, duration, ease);

        self.active_index = to;
        self.update_visible();
        // A zero duration still completes on the next tick, never synchronously.
        self.locked = true;
        SlideOutcome::Moved { from, to }
    }

    /// Advance running tweens. Returns true when this tick released the
    /// transition lock.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.tweens.is_empty() && !self.locked {
            return false;
        }
        self.tweens.tick(dt, &mut self.planes);
        if self.locked && self.tweens.is_empty() {
            self.locked = false;
            return true;
        }
        false
    }

    /// Bring the render set in line with the window around the active index.
    pub fn update_visible(&mut self) -> RenderDiff {
        let total = self.planes.len();
        let window = visible_window(self.active_index, self.config.visible_range, total);
        self.render_set.apply(window, total)
    }

    /// Planes in the render set, in index order.
    pub fn visible_planes(&self) -> impl Iterator<Item = (usize, &ImagePlane<T>)> + '_ {
        self.render_set
            .sorted()
            .into_iter()
            .filter_map(move |i| self.planes.get(i).map(|p| (i, p)))
    }

    pub fn planes(&self) -> &[ImagePlane<T>] {
        &self.planes
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn render_set(&self) -> &RenderSet {
        &self.render_set
    }

    pub fn tweens(&self) -> &TweenSet {
        &self.tweens
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn camera_z(&self) -> f32 {
        self.camera_z
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn registry(&self) -> &TextureRegistry {
        &self.registry
    }
}
