//! Composable building blocks for the tone voice's signal graph.
//!
//! Graph nodes wrap the low-level DSP primitives with what the voice needs:
//! block-based rendering, modulation and resets between sessions. The
//! `extensions` module adds fluent helpers so the chain reads in signal order.

/// Fluent combinators (`.through()`, `.modulate()`).
pub mod extensions;
/// Resonant low-pass filter node.
pub mod filter;
/// Output level with linear fades.
pub mod gain;
/// Low frequency oscillators for parameter modulation.
pub mod lfo;
/// Connect modulation sources to node parameters.
pub mod modulate;
/// Core traits shared by all graph nodes.
pub mod node;
/// Gliding audio-band oscillator.
pub mod oscillator;
/// Serial chaining of two nodes (source → effect).
pub mod through;

pub use node::{GraphNode, Modulatable, RenderCtx};
