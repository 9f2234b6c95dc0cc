//! Landing intro - name label dissolving into particles, then a fade
//!
//! `IntroSequencer` owns the timing and particle state; `IntroCanvas`
//! projects one frame of it onto the terminal. The host passes a
//! completion callback at construction and owns the switch to the main
//! view when it fires.

pub mod canvas;
pub mod font;
pub mod particle;
pub mod sequencer;

pub use canvas::IntroCanvas;
pub use sequencer::IntroSequencer;
