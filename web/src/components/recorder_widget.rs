//! Simulated voice-note recorder with playback and submit.

use leptos::ev;
use leptos::prelude::*;

use vanmitra_common::recorder::{self, Recorder, RECENT_NOTES};

use crate::app::use_app;
use crate::timer::{OwnedInterval, OwnedTimeout};

#[component]
pub fn RecorderWidget() -> impl IntoView {
    let config = use_app().config;
    let timing = &config.timing;
    let state = RwSignal::new(Recorder::default());
    let (banner, set_banner) = signal(false);

    let ticker = OwnedInterval::new();
    let playback = OwnedTimeout::new();
    let banner_timer = OwnedTimeout::new();

    let start = move |_: ev::MouseEvent| {
        playback.cancel();
        state.update(Recorder::start);
        ticker.start(timing.recorder_tick(), move || state.update(Recorder::tick));
    };
    let stop = move |_: ev::MouseEvent| {
        ticker.stop();
        state.update(Recorder::stop);
    };
    let play = move |_: ev::MouseEvent| {
        let Some(length) = state.try_update(Recorder::play).flatten() else {
            return;
        };
        playback.schedule(length, move || state.update(Recorder::playback_finished));
    };
    let delete = move |_: ev::MouseEvent| {
        ticker.stop();
        playback.cancel();
        state.update(Recorder::delete);
    };
    let submit = move |_: ev::MouseEvent| {
        playback.cancel();
        if state.try_update(Recorder::submit).unwrap_or(false) {
            set_banner.set(true);
            banner_timer.schedule(timing.banner(), move || set_banner.set(false));
        }
    };

    let is_recording = move || state.with(Recorder::is_recording);
    let has_recording = move || state.with(Recorder::has_recording);
    let is_playing = move || state.with(Recorder::is_playing);

    let recent = RECENT_NOTES
        .into_iter()
        .map(|note| {
            view! {
                <li class="recent-note">
                    <span class="recent-note-icon">"🎤"</span>
                    <div class="recent-note-text">
                        <p>{format!("Voice Note #{}", note.id)}</p>
                        <p class="muted">{format!("{} • {}", note.duration, note.status)}</p>
                    </div>
                    <span class=note.sentiment.css_class() title=note.sentiment.label()>
                        {note.sentiment.emoji()}
                    </span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="recorder-widget">
            <Show when=move || banner.get()>
                <div class="banner banner-success">"✅ Voice note submitted successfully!"</div>
            </Show>

            <div class="recorder-display">
                <p class="recorder-time">{move || state.with(Recorder::display_time)}</p>
                <p class="recorder-status">{move || state.with(|r| r.status_text())}</p>
                <Show when=is_recording>
                    <div class="waveform">{waveform()}</div>
                </Show>
            </div>

            <div class="recorder-controls">
                <Show
                    when=is_recording
                    fallback=move || {
                        view! {
                            <button class="record-btn" title="Start recording" on:click=start>
                                "🎙️"
                            </button>
                        }
                    }
                >
                    <button class="record-btn recording" title="Stop recording" on:click=stop>
                        "⏹️"
                    </button>
                </Show>
            </div>

            <Show when=has_recording>
                <div class="recorder-actions">
                    <button class="btn btn-secondary" on:click=play disabled=is_playing>
                        {move || if is_playing() { "🔊 Playing..." } else { "▶️ Play" }}
                    </button>
                    <button class="btn btn-danger" on:click=delete>"🗑️ Delete"</button>
                    <button class="btn btn-primary" on:click=submit>"📤 Submit"</button>
                </div>
            </Show>

            <div class="recent-notes">
                <h4 class="panel-heading">"Recent Voice Notes"</h4>
                <ul>{recent}</ul>
            </div>
        </div>
    }
}

fn waveform() -> impl IntoView {
    recorder::waveform_heights()
        .into_iter()
        .enumerate()
        .map(|(i, h)| {
            view! {
                <span
                    class="wave-bar"
                    style=format!("height: {h}px; animation-delay: {:.1}s", i as f64 * 0.1)
                ></span>
            }
        })
        .collect_view()
}
