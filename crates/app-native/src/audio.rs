use anyhow::{anyhow, bail};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::Sample;
use std::sync::{Arc, Mutex};
use triswap_core::{Cue, CuePlayer, CueSpec, CUE_ATTACK_SEC};

const TAU: f32 = 2.0 * std::f32::consts::PI;

#[derive(Clone)]
struct CueVoice {
    spec: CueSpec,
    phase: f32,
    samples_emitted: u32,
    total_samples: u32,
    attack_samples: u32,
}

impl CueVoice {
    fn new(spec: CueSpec, sample_rate: f32) -> Self {
        let total = ((spec.duration_sec * sample_rate) as u32).max(1);
        Self {
            spec,
            phase: 0.0,
            samples_emitted: 0,
            total_samples: total,
            attack_samples: ((CUE_ATTACK_SEC * sample_rate) as u32).clamp(1, total),
        }
    }

    fn is_done(&self) -> bool {
        self.samples_emitted >= self.total_samples
    }

    fn next_sample(&mut self, sample_rate: f32) -> f32 {
        let n = self.samples_emitted;
        let p = n as f32 / self.total_samples as f32;
        // exponential pitch glide, linear attack, quadratic release
        let freq = self.spec.start_hz * (self.spec.end_hz / self.spec.start_hz).powf(p);
        let env = if n < self.attack_samples {
            n as f32 / self.attack_samples as f32
        } else {
            (1.0 - p).powi(2)
        };
        // triangle wave from phase
        let t = self.phase / TAU;
        let raw = 4.0 * (t - (t + 0.5).floor()).abs() - 1.0;
        self.phase = (self.phase + TAU * freq / sample_rate) % TAU;
        self.samples_emitted += 1;
        raw * env * self.spec.gain
    }
}

struct AudioState {
    sample_rate: f32,
    select: Option<CueVoice>,
    transition: Option<CueVoice>,
}

impl AudioState {
    fn slot(&mut self, cue: Cue) -> &mut Option<CueVoice> {
        match cue {
            Cue::Select => &mut self.select,
            Cue::Transition => &mut self.transition,
        }
    }

    fn mix_sample(&mut self) -> f32 {
        let sr = self.sample_rate;
        let mut mix = 0.0f32;
        for slot in [&mut self.select, &mut self.transition] {
            let done = match slot.as_mut() {
                Some(v) => {
                    mix += v.next_sample(sr);
                    v.is_done()
                }
                None => false,
            };
            if done {
                *slot = None;
            }
        }
        mix.tanh()
    }
}

/// cpal cue output. Each cue owns one slot; retriggering replaces the voice
/// in that slot so playback restarts from zero. Silent when no output device
/// is available.
pub struct NativeCuePlayer {
    state: Arc<Mutex<AudioState>>,
    _stream: Option<cpal::Stream>,
}

impl NativeCuePlayer {
    pub fn start() -> Self {
        let state = Arc::new(Mutex::new(AudioState {
            sample_rate: 48_000.0,
            select: None,
            transition: None,
        }));
        let stream = match open_stream(Arc::clone(&state)) {
            Ok(s) => Some(s),
            Err(e) => {
                log::warn!("audio disabled: {:#}", e);
                None
            }
        };
        Self {
            state,
            _stream: stream,
        }
    }
}

impl CuePlayer for NativeCuePlayer {
    fn play(&mut self, cue: Cue) {
        match self.state.lock() {
            Ok(mut guard) => {
                let voice = CueVoice::new(cue.spec(), guard.sample_rate);
                *guard.slot(cue) = Some(voice);
            }
            Err(_) => log::warn!("audio state poisoned; dropping {:?} cue", cue),
        }
    }
}

fn open_stream(state: Arc<Mutex<AudioState>>) -> anyhow::Result<cpal::Stream> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| anyhow!("no output device"))?;
    let supported = device.default_output_config()?;
    let channels = supported.channels() as usize;
    state
        .lock()
        .map_err(|_| anyhow!("audio state poisoned"))?
        .sample_rate = supported.sample_rate().0 as f32;

    let config = supported.config();
    let stream = match supported.sample_format() {
        cpal::SampleFormat::F32 => build_stream::<f32>(&device, &config, channels, state)?,
        cpal::SampleFormat::I16 => build_stream::<i16>(&device, &config, channels, state)?,
        cpal::SampleFormat::U16 => build_stream::<u16>(&device, &config, channels, state)?,
        other => bail!("unsupported sample format {:?}", other),
    };
    stream.play()?;
    log::info!(
        "[audio] output {} Hz, {} channel(s)",
        config.sample_rate.0,
        channels
    );
    Ok(stream)
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    channels: usize,
    state: Arc<Mutex<AudioState>>,
) -> Result<cpal::Stream, cpal::BuildStreamError>
where
    T: cpal::SizedSample + cpal::FromSample<f32>,
{
    let err_fn = |err: cpal::StreamError| log::error!("audio stream error: {}", err);
    device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            let Ok(mut guard) = state.lock() else {
                data.fill(T::EQUILIBRIUM);
                return;
            };
            for frame in data.chunks_mut(channels.max(1)) {
                let v = <T as Sample>::from_sample(guard.mix_sample());
                frame.fill(v);
            }
        },
        err_fn,
        None,
    )
}
