use crate::{
    dsp::OscillatorWaveform,
    graph::{
        extensions::NodeExt,
        filter::FilterNode,
        gain::GainNode,
        lfo::LfoNode,
        modulate::Modulate,
        node::{GraphNode, RenderCtx},
        oscillator::{OscNode, OscParam},
        through::Through,
    },
    synth::message::{MessageReceiver, ToneMessage},
};

/// Oscillator with vibrato, through a low-pass, through the output gain.
pub type ToneGraph = Through<Through<Modulate<OscNode, LfoNode>, FilterNode>, GainNode>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceState {
    Free,   // Silent, nothing allocated to a session
    Active, // Playing, gain at or fading toward the session level
    /// Fading out; frees itself after `remaining` more samples
    Releasing { remaining: usize },
}

/// The single voice behind the player.
///
/// Built once with its whole graph, so handling messages and rendering never
/// allocate. Lives on the audio thread.
pub struct ToneVoice {
    state: VoiceState,
    session: Option<u64>,
    sample_rate: f32,
    graph: ToneGraph,
}

impl ToneVoice {
    pub fn new(sample_rate: f32) -> Self {
        let graph = OscNode::sine()
            .modulate(LfoNode::sine(0.0), OscParam::Frequency, 0.0)
            .through(FilterNode::lowpass(1_000.0))
            .through(GainNode::new(0.0));

        Self {
            state: VoiceState::Free,
            session: None,
            sample_rate,
            graph,
        }
    }

    /// Drain every pending message, in order.
    pub fn process_messages<R: MessageReceiver + ?Sized>(&mut self, rx: &mut R) {
        while let Some(msg) = rx.pop() {
            self.handle(msg);
        }
    }

    pub fn handle(&mut self, msg: ToneMessage) {
        if let ToneMessage::Start {
            session,
            waveform,
            base_hz,
            lfo_hz,
            vibrato_depth_hz,
            cutoff_hz,
            q,
            level,
            fade_in_secs,
        } = msg
        {
            // Whatever was playing (or releasing) is gone before the new tone exists
            self.stop();
            self.session = Some(session);
            self.state = VoiceState::Active;

            let sample_rate = self.sample_rate;
            let vibrato = self.graph.source_mut().source_mut();
            vibrato.set_depth(vibrato_depth_hz);
            vibrato.lfo_mut().set_frequency(lfo_hz);
            vibrato.source_mut().set_waveform(waveform);
            vibrato.source_mut().set_frequency(base_hz);

            let filter = self.graph.source_mut().effect_mut();
            filter.set_cutoff(cutoff_hz);
            filter.set_q(q);

            self.graph.effect_mut().ramp_to(level, fade_in_secs, sample_rate);
            return;
        }

        if self.session != Some(msg.session()) || self.state == VoiceState::Free {
            return;
        }

        match msg {
            ToneMessage::Glide {
                frequency_hz, secs, ..
            } => {
                let sample_rate = self.sample_rate;
                self.osc_mut().glide_to(frequency_hz, secs, sample_rate);
            }
            ToneMessage::SetLevel { level, secs, .. } => {
                // A releasing voice stays on its way out
                if self.state == VoiceState::Active {
                    let sample_rate = self.sample_rate;
                    self.graph.effect_mut().ramp_to(level, secs, sample_rate);
                }
            }
            ToneMessage::Release {
                fade_secs,
                grace_secs,
                ..
            } => {
                if self.state == VoiceState::Active {
                    let sample_rate = self.sample_rate;
                    self.graph.effect_mut().ramp_to(0.0, fade_secs, sample_rate);

                    // The grace period is counted from the start of the fade
                    // and never cuts the fade short
                    let hold = grace_secs.max(fade_secs).max(0.0);
                    let remaining = (hold * sample_rate).round() as usize;
                    self.state = VoiceState::Releasing { remaining };
                }
            }
            ToneMessage::Start { .. } => {}
        }
    }

    /// Render one mono block. Silence when free.
    pub fn render(&mut self, out: &mut [f32]) {
        let ctx = RenderCtx::new(self.sample_rate);

        match self.state {
            VoiceState::Free => out.fill(0.0),
            VoiceState::Active => self.graph.render_block(out, &ctx),
            VoiceState::Releasing { remaining } => {
                let audible = remaining.min(out.len());
                let (head, tail) = out.split_at_mut(audible);
                self.graph.render_block(head, &ctx);
                tail.fill(0.0);

                let remaining = remaining - audible;
                if remaining == 0 {
                    self.stop();
                } else {
                    self.state = VoiceState::Releasing { remaining };
                }
            }
        }
    }

    /// Drop the current session immediately, with no fade.
    pub fn stop(&mut self) {
        self.graph.reset();
        self.graph.effect_mut().set_level(0.0);
        self.state = VoiceState::Free;
        self.session = None;
    }

    pub fn is_active(&self) -> bool {
        self.state != VoiceState::Free
    }

    pub fn state(&self) -> VoiceState {
        self.state
    }

    pub fn session(&self) -> Option<u64> {
        self.session
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Base frequency without vibrato (mid-glide value if gliding).
    pub fn frequency(&self) -> f32 {
        self.osc().frequency()
    }

    pub fn target_frequency(&self) -> f32 {
        self.osc().target_frequency()
    }

    pub fn waveform(&self) -> OscillatorWaveform {
        self.osc().waveform()
    }

    pub fn level(&self) -> f32 {
        self.graph.effect().level()
    }

    pub fn target_level(&self) -> f32 {
        self.graph.effect().target_level()
    }

    pub fn cutoff(&self) -> f32 {
        self.graph.source().effect().cutoff()
    }

    pub fn vibrato_rate(&self) -> f32 {
        self.graph.source().source().lfo().frequency()
    }

    pub fn vibrato_depth(&self) -> f32 {
        self.graph.source().source().depth()
    }

    fn osc(&self) -> &OscNode {
        self.graph.source().source().source()
    }

    fn osc_mut(&mut self) -> &mut OscNode {
        self.graph.source_mut().source_mut().source_mut()
    }
}
