// SPDX-License-Identifier: MPL-2.0
//! Headless driver: mounts the page, plays a short scripted session on a
//! frame clock and logs every event the page emits.

use folio_fx::app::layout::Section;
use folio_fx::app::paths;
use folio_fx::app::persisted_state::{FileStorage, MemoryStorage, Storage};
use folio_fx::app::{Content, Event, Message, Mount, Page};
use folio_fx::config;
use folio_fx::geometry::Viewport;
use folio_fx::logging;
use folio_fx::ui::contact::{ContactSubmission, SubmitResponse};
use folio_fx::ui::gallery::CategoryFilter;
use folio_fx::ui::navbar::{self, NavItem};
use folio_fx::ui::reveal::{Intersection, ObservationSupport};
use iced_core::Point;
use std::time::{Duration, Instant};
use tokio::time::{interval, MissedTickBehavior};

const FRAME: Duration = Duration::from_millis(16);
const DEFAULT_SECONDS: u64 = 6;

struct Flags {
    data_dir: Option<String>,
    config_dir: Option<String>,
    seconds: u64,
}

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    Ok(Flags {
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        seconds: args
            .opt_value_from_str("--seconds")?
            .unwrap_or(DEFAULT_SECONDS),
    })
}

fn open_storage() -> Box<dyn Storage> {
    match FileStorage::open(None) {
        Ok(storage) => {
            tracing::debug!(path = %storage.path().display(), "using file storage");
            Box::new(storage)
        }
        Err(err) => {
            tracing::warn!(error = %err, "persistent storage unavailable, theme will not be saved");
            Box::new(MemoryStorage::new())
        }
    }
}

/// Message the scripted session sends on the given frame, if any.
fn scripted(frame: u64) -> Option<Message> {
    let message = match frame {
        5 => Message::Visibility(Intersection {
            element: Section::Projects.heading()[0],
            is_intersecting: true,
            ratio: 1.0,
        }),
        10 => Message::ToggleTheme {
            origin: Some(Point::new(1200.0, 32.0)),
        },
        40 => Message::Navbar(navbar::Message::ToggleMenu),
        45 => Message::Navbar(navbar::Message::Select(NavItem::Projects)),
        60 => Message::SetFilter(CategoryFilter::from_id("web")),
        90 => Message::QuickView("1".to_string()),
        110 => Message::QuickViewEntered,
        150 => Message::CloseQuickView,
        180 => Message::CarouselNext,
        200 => Message::SubmitContact(ContactSubmission {
            name: "Visitor".to_string(),
            email: "visitor@example.com".to_string(),
            subject: None,
            message: "Hello from the driver".to_string(),
        }),
        _ => return None,
    };
    Some(message)
}

fn log_event(event: &Event) {
    // Sparkles change every few frames.
    if matches!(event, Event::Sparkles(_)) {
        tracing::trace!(?event, "page event");
    } else {
        tracing::info!(?event, "page event");
    }
}

async fn run(mut page: Page, seconds: u64) {
    let mut ticker = interval(FRAME);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let deadline = Instant::now() + Duration::from_secs(seconds);
    let mut frame: u64 = 0;

    loop {
        ticker.tick().await;
        let now = Instant::now();
        if now >= deadline {
            break;
        }

        let mut events = Vec::new();
        if let Some(message) = scripted(frame) {
            events.extend(page.update(message, now));
        }
        events.extend(page.update(Message::Tick, now));

        let mut replies = Vec::new();
        for event in &events {
            log_event(event);
            // Stand-in for the contact endpoint.
            if let Event::SendContact(body) = event {
                tracing::info!(%body, "submitting contact form");
                replies.push(Message::ContactResponse(SubmitResponse {
                    status: 201,
                    body: r#"{"success":true,"id":"local-1"}"#.to_string(),
                }));
            }
        }
        for reply in replies {
            for event in page.update(reply, now) {
                log_event(&event);
            }
        }

        frame += 1;
    }

    page.teardown();
    tracing::info!(frames = frame, ?page, "session finished");
}

fn main() -> std::process::ExitCode {
    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("invalid arguments: {err}");
            return std::process::ExitCode::FAILURE;
        }
    };

    paths::init_cli_overrides(flags.data_dir, flags.config_dir);

    if let Err(err) = logging::init() {
        eprintln!("{err}");
    }

    let (config, warning) = config::load();
    if let Some(warning) = warning {
        tracing::warn!(%warning, "using default settings");
    }

    let page = Page::mount(
        Mount {
            config,
            storage: open_storage(),
            content: Content::default(),
            viewport: Viewport::new(1280.0, 800.0),
            observation: ObservationSupport::Available,
        },
        Instant::now(),
    );

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            tracing::error!(error = %err, "failed to start runtime");
            return std::process::ExitCode::FAILURE;
        }
    };
    runtime.block_on(run(page, flags.seconds));

    std::process::ExitCode::SUCCESS
}
