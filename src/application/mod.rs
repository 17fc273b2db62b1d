pub mod composer;
pub mod intro;

pub use composer::{FrameOutput, GridLayer, SceneComposer, TextLayer};
pub use intro::{INTRO_DURATION_FRAMES, IntroConfig, IntroFrame, IntroOverrides};
