//! Minimal property tweening for plane transitions.
//!
//! A [`Tween`] interpolates one scalar channel of one plane from the value it
//! had when the tween started to a target value. [`TweenSet`] owns all running
//! tweens and writes the interpolated values back on every tick.

use super::plane::ImagePlane;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// Quadratic ease-out; fast start, gentle settle.
    #[default]
    Power1Out,
    SmoothStep,
}

impl Ease {
    /// Map normalized time `t` in [0, 1] to normalized progress.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::SmoothStep => t * t * (3.0 - 2.0 * t),
        }
    }
}

/// Which plane property a tween drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    PositionX,
    RotationY,
}

impl Channel {
    fn read<T>(self, plane: &ImagePlane<T>) -> f32 {
        match self {
            Channel::PositionX => plane.position.x,
            Channel::RotationY => plane.rotation.y,
        }
    }

    fn write<T>(self, plane: &mut ImagePlane<T>, value: f32) {
        match self {
            Channel::PositionX => plane.position.x = value,
            Channel::RotationY => plane.rotation.y = value,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Tween {
    pub plane: usize,
    pub channel: Channel,
    from: f32,
    to: f32,
    elapsed: Duration,
    duration: Duration,
    ease: Ease,
}

impl Tween {
    pub fn new(
        plane: usize,
        channel: Channel,
        from: f32,
        to: f32,
        duration: Duration,
        ease: Ease,
    ) -> Self {
        Self {
            plane,
            channel,
            from,
            to,
            elapsed: Duration::ZERO,
            duration,
            ease,
        }
    }

    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn value(&self) -> f32 {
        self.from + (self.to - self.from) * self.ease.apply(self.progress())
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn advance(&mut self, dt: Duration) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }
}

/// Running tweens for one carousel.
#[derive(Clone, Debug, Default)]
pub struct TweenSet {
    tweens: Vec<Tween>,
}

impl TweenSet {
    /// Start a tween on `plane`, capturing its current channel value as the
    /// starting point. Out-of-range plane indices are ignored.
    pub fn start<T>(
        &mut self,
        planes: &[ImagePlane<T>],
        plane: usize,
        channel: Channel,
        to: f32,
        duration: Duration,
        ease: Ease,
    ) {
        let Some(p) = planes.get(plane) else {
            return;
        };
        let from = channel.read(p);
        self.tweens
            .push(Tween::new(plane, channel, from, to, duration, ease));
    }

    /// Advance every tween by `dt` and write the new values into `planes`.
    /// Finished tweens are written one final time at their target and dropped.
    /// Returns how many tweens finished on this tick.
    pub fn tick<T>(&mut self, dt: Duration, planes: &mut [ImagePlane<T>]) -> usize {
        let before = self.tweens.len();
        for tw in &mut self.tweens {
            tw.advance(dt);
            if let Some(p) = planes.get_mut(tw.plane) {
                tw.channel.write(p, tw.value());
            }
        }
        self.tweens.retain(|tw| !tw.is_finished());
        before - self.tweens.len()
    }

    pub fn clear(&mut self) {
        self.tweens.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }
}
