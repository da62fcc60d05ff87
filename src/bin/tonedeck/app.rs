//! Audio device setup and the top-level run loop

use color_eyre::eyre::{bail, eyre, Result as EyreResult, WrapErr};
use cpal::{
    traits::{DeviceTrait, HostTrait, StreamTrait},
    SampleFormat,
};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use rtrb::{Producer, RingBuffer};
use tracing::{error, info, warn};

use tonedeck::{Player, PlayerConfig, SilentSink, ToneMessage, ToneSink, ToneVoice, MAX_BLOCK_SIZE};

use super::ui::UiApp;

/// Control messages that can be in flight to the audio thread
const MESSAGE_CAPACITY: usize = 256;

/// A running output stream and the sending end of its message ring
struct AudioOutput {
    stream: cpal::Stream,
    tx: Producer<ToneMessage>,
    sample_rate: f32,
}

fn open_output() -> EyreResult<AudioOutput> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| eyre!("no default output device available"))?;
    let config = device
        .default_output_config()
        .wrap_err("failed to fetch default output config")?;

    if config.sample_format() != SampleFormat::F32 {
        bail!("unsupported sample format {:?}", config.sample_format());
    }

    let sample_rate = config.sample_rate().0 as f32;
    let channels = config.channels() as usize;

    let (tx, mut rx) = RingBuffer::<ToneMessage>::new(MESSAGE_CAPACITY);
    let mut voice = ToneVoice::new(sample_rate);
    let mut block = vec![0.0f32; MAX_BLOCK_SIZE];

    let stream = device
        .build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| {
                voice.process_messages(&mut rx);

                for out in data.chunks_mut(MAX_BLOCK_SIZE * channels) {
                    let frames = out.len() / channels;
                    let mono = &mut block[..frames];
                    voice.render(mono);

                    // Copy to output (mono to all channels)
                    for (frame, &sample) in out.chunks_mut(channels).zip(mono.iter()) {
                        frame.fill(sample);
                    }
                }
            },
            |err| error!(error = %err, "audio stream error"),
            None,
        )
        .wrap_err("failed to build output stream")?;

    stream.play().wrap_err("failed to start output stream")?;

    info!(sample_rate, channels, "audio output running");
    Ok(AudioOutput {
        stream,
        tx,
        sample_rate,
    })
}

/// Open audio (or fall back to silence), then hand the terminal to the UI.
pub fn run() -> EyreResult<()> {
    let mut sample_rate = None;
    let mut _stream = None;
    let sink: Box<dyn ToneSink> = match open_output() {
        Ok(output) => {
            sample_rate = Some(output.sample_rate);
            _stream = Some(output.stream);
            Box::new(output.tx)
        }
        Err(err) => {
            warn!(error = ?err, "no usable audio output, running silent");
            Box::new(SilentSink)
        }
    };

    let player = Player::with_config(sink, PlayerConfig::default());
    let mut app = UiApp::new(player, sample_rate);

    let mut terminal = ratatui::init();
    let result = execute!(std::io::stdout(), EnableMouseCapture)
        .wrap_err("failed to enable mouse capture")
        .and_then(|()| app.run(&mut terminal));

    // Terminal is restored even when the UI loop failed
    if let Err(err) = execute!(std::io::stdout(), DisableMouseCapture) {
        warn!(error = ?err, "failed to disable mouse capture");
    }
    ratatui::restore();

    // Player drops here, releasing the tone before the stream stops
    drop(app);
    result
}
