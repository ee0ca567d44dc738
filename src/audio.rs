use crate::constants::{CUE_GAIN_FLOOR, CUE_MASTER_GAIN};
use anyhow::anyhow;
use triswap_core::{Cue, CuePlayer, CueSpec, CUE_ATTACK_SEC};
use web_sys as web;

fn create_gain(audio_ctx: &web::AudioContext, value: f32, label: &str) -> anyhow::Result<web::GainNode> {
    let g = web::GainNode::new(audio_ctx).map_err(|e| anyhow!("{} GainNode error: {:?}", label, e))?;
    g.gain().set_value(value);
    Ok(g)
}

// One sounding cue: oscillator -> envelope gain -> master
struct CueVoice {
    osc: web::OscillatorNode,
    env: web::GainNode,
}

impl CueVoice {
    #[allow(deprecated)]
    fn silence(self) {
        _ = self.osc.stop();
        _ = self.osc.disconnect();
        _ = self.env.disconnect();
    }
}

/// WebAudio cue output. Each cue has a single slot; retriggering stops the
/// voice in that slot and starts a new one from zero.
pub struct WebCuePlayer {
    audio_ctx: web::AudioContext,
    master: web::GainNode,
    select: Option<CueVoice>,
    transition: Option<CueVoice>,
}

impl WebCuePlayer {
    pub fn new() -> anyhow::Result<Self> {
        let audio_ctx = web::AudioContext::new().map_err(|e| anyhow!("AudioContext error: {:?}", e))?;
        let master = create_gain(&audio_ctx, CUE_MASTER_GAIN, "Master")?;
        master
            .connect_with_audio_node(&audio_ctx.destination())
            .map_err(|e| anyhow!("master connect error: {:?}", e))?;
        Ok(Self {
            audio_ctx,
            master,
            select: None,
            transition: None,
        })
    }

    /// Browsers keep the context suspended until a user gesture.
    pub fn resume(&self) {
        _ = self.audio_ctx.resume();
    }

    fn slot(&mut self, cue: Cue) -> &mut Option<CueVoice> {
        match cue {
            Cue::Select => &mut self.select,
            Cue::Transition => &mut self.transition,
        }
    }

    #[allow(deprecated)]
    fn start_voice(&self, spec: CueSpec) -> Option<CueVoice> {
        let osc = match web::OscillatorNode::new(&self.audio_ctx) {
            Ok(o) => o,
            Err(e) => {
                log::error!("OscillatorNode error: {:?}", e);
                return None;
            }
        };
        let env = match create_gain(&self.audio_ctx, CUE_GAIN_FLOOR, "Cue envelope") {
            Ok(g) => g,
            Err(e) => {
                log::error!("{}", e);
                return None;
            }
        };
        osc.set_type(web::OscillatorType::Triangle);

        let t0 = self.audio_ctx.current_time() + 0.005;
        let t_end = t0 + spec.duration_sec as f64;
        let freq = osc.frequency();
        _ = freq.set_value_at_time(spec.start_hz, t0);
        _ = freq.exponential_ramp_to_value_at_time(spec.end_hz, t_end);
        let gain = env.gain();
        _ = gain.set_value_at_time(CUE_GAIN_FLOOR, t0);
        _ = gain.linear_ramp_to_value_at_time(spec.gain, t0 + CUE_ATTACK_SEC as f64);
        _ = gain.exponential_ramp_to_value_at_time(CUE_GAIN_FLOOR, t_end);

        _ = osc.connect_with_audio_node(&env);
        _ = env.connect_with_audio_node(&self.master);
        _ = osc.start_with_when(t0);
        _ = osc.stop_with_when(t_end + 0.02);
        Some(CueVoice { osc, env })
    }
}

impl CuePlayer for WebCuePlayer {
    fn play(&mut self, cue: Cue) {
        if let Some(previous) = self.slot(cue).take() {
            previous.silence();
        }
        let voice = self.start_voice(cue.spec());
        *self.slot(cue) = voice;
    }
}
