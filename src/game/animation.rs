// Frame animations for sprites

use crate::core::IntRect;
use crate::engine::renderer::Sprite;

/// A named sequence of texture rects shown one after another
#[derive(Debug, Clone)]
pub struct Animation {
    /// Name of the animation (e.g., "idle", "run")
    name: String,
    /// Texture rect of each frame, in display order
    frames: Vec<IntRect>,
    /// Duration of each frame in seconds
    frame_time: f32,
    /// Time accumulated toward the next frame
    current_time: f32,
    /// Index of the frame last written to the sprite
    current_frame: usize,
    /// Stored for callers; playback always wraps around
    looping: bool,
}

impl Animation {
    pub fn new(name: &str, frame_time: f32) -> Self {
        Self {
            name: name.to_string(),
            frames: Vec::new(),
            frame_time,
            current_time: 0.0,
            current_frame: 0,
            looping: true,
        }
    }

    /// Append a frame
    pub fn add_frame(&mut self, frame: IntRect) {
        self.frames.push(frame);
    }

    /// Builder form of [`Animation::add_frame`] for several frames
    pub fn with_frames(mut self, frames: impl IntoIterator<Item = IntRect>) -> Self {
        self.frames.extend(frames);
        self
    }

    /// Accumulate `dt` and, once a full frame time has built up, step to the
    /// next frame and show it on `sprite`.
    ///
    /// At most one frame is advanced per call and the accumulator restarts
    /// from zero, so time beyond one frame is dropped.
    pub fn update(&mut self, dt: f32, sprite: &mut Sprite) {
        if self.frames.is_empty() {
            return;
        }

        self.current_time += dt;
        if self.current_time >= self.frame_time {
            self.current_time = 0.0;
            self.current_frame = (self.current_frame + 1) % self.frames.len();
            sprite.set_texture_rect(self.frames[self.current_frame]);
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frames(&self) -> &[IntRect] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frame_time(&self) -> f32 {
        self.frame_time
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }
}

/// The animations owned by one entity, plus which one is playing
///
/// Selecting an animation only moves the `current` index; every animation
/// stays in the set and keeps its own playback position.
#[derive(Debug, Clone, Default)]
pub struct AnimationSet {
    animations: Vec<Animation>,
    current: Option<usize>,
}

impl AnimationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an animation, replacing any existing one with the same name
    pub fn add(&mut self, animation: Animation) {
        match self.index_of(animation.name()) {
            Some(index) => self.animations[index] = animation,
            None => self.animations.push(animation),
        }
    }

    /// Make `name` the current animation. Unknown names leave the selection unchanged.
    pub fn play(&mut self, name: &str) {
        if let Some(index) = self.index_of(name) {
            self.current = Some(index);
        }
    }

    /// Tick the current animation
    pub fn update(&mut self, dt: f32, sprite: &mut Sprite) {
        if let Some(animation) = self.current.and_then(|i| self.animations.get_mut(i)) {
            animation.update(dt, sprite);
        }
    }

    pub fn current(&self) -> Option<&Animation> {
        self.current.and_then(|i| self.animations.get(i))
    }

    pub fn current_name(&self) -> Option<&str> {
        self.current().map(Animation::name)
    }

    pub fn get(&self, name: &str) -> Option<&Animation> {
        self.index_of(name).map(|i| &self.animations[i])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Animation> {
        let index = self.index_of(name)?;
        Some(&mut self.animations[index])
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.animations.iter().position(|a| a.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_frame(name: &str, frame_time: f32) -> Animation {
        Animation::new(name, frame_time)
            .with_frames([IntRect::new(0, 0, 16, 16), IntRect::new(16, 0, 16, 16)])
    }

    #[test]
    fn test_empty_animation_is_noop() {
        let mut animation = Animation::new("idle", 0.1);
        let mut sprite = Sprite::new();
        animation.update(1.0, &mut sprite);
        assert_eq!(animation.current_frame(), 0);
        assert_eq!(sprite.texture_rect(), IntRect::default());
    }

    #[test]
    fn test_frame_advances_after_frame_time() {
        let mut animation = two_frame("run", 0.1);
        let mut sprite = Sprite::new();

        animation.update(0.05, &mut sprite);
        assert_eq!(animation.current_frame(), 0);

        animation.update(0.05, &mut sprite);
        assert_eq!(animation.current_frame(), 1);
        assert_eq!(sprite.texture_rect(), IntRect::new(16, 0, 16, 16));
    }

    #[test]
    fn test_long_dt_advances_only_one_frame() {
        let mut animation = two_frame("run", 0.1);
        let mut sprite = Sprite::new();

        animation.update(0.25, &mut sprite);
        assert_eq!(animation.current_frame(), 1);

        // The extra 0.15s was dropped: a short step does not advance again
        animation.update(0.05, &mut sprite);
        assert_eq!(animation.current_frame(), 1);
    }

    #[test]
    fn test_frames_wrap_around() {
        let mut animation = two_frame("run", 0.1);
        let mut sprite = Sprite::new();

        animation.update(0.1, &mut sprite);
        animation.update(0.1, &mut sprite);
        assert_eq!(animation.current_frame(), 0);
        assert_eq!(sprite.texture_rect(), IntRect::new(0, 0, 16, 16));
        assert!(animation.is_looping());
    }

    #[test]
    fn test_set_plays_selected_animation() {
        let mut set = AnimationSet::new();
        set.add(two_frame("idle", 0.2));
        set.add(two_frame("run", 0.1));
        assert_eq!(set.current_name(), None);

        set.play("run");
        assert_eq!(set.current_name(), Some("run"));

        let mut sprite = Sprite::new();
        set.update(0.1, &mut sprite);
        assert_eq!(set.get("run").unwrap().current_frame(), 1);
        assert_eq!(set.get("idle").unwrap().current_frame(), 0);
    }

    #[test]
    fn test_switching_back_keeps_animation() {
        let mut set = AnimationSet::new();
        set.add(two_frame("idle", 0.2));
        set.add(two_frame("run", 0.1));

        set.play("idle");
        set.play("run");
        set.play("idle");

        assert_eq!(set.current_name(), Some("idle"));
        assert_eq!(set.len(), 2);
        assert!(set.get("run").is_some());
    }

    #[test]
    fn test_unknown_name_keeps_selection() {
        let mut set = AnimationSet::new();
        set.add(two_frame("idle", 0.2));
        set.play("idle");
        set.play("swim");
        assert_eq!(set.current_name(), Some("idle"));
    }

    #[test]
    fn test_add_same_name_replaces() {
        let mut set = AnimationSet::new();
        set.add(Animation::new("idle", 0.2));
        set.play("idle");
        set.add(two_frame("idle", 0.5));

        assert_eq!(set.len(), 1);
        assert_eq!(set.current().unwrap().frame_time(), 0.5);
        assert_eq!(set.current().unwrap().frame_count(), 2);
    }

    #[test]
    fn test_get_mut_adds_frames() {
        let mut set = AnimationSet::new();
        set.add(Animation::new("idle", 0.2));
        set.get_mut("idle").unwrap().add_frame(IntRect::new(0, 0, 8, 8));
        assert_eq!(set.get("idle").unwrap().frames(), &[IntRect::new(0, 0, 8, 8)]);
    }
}
