//! Interactive countdown demo.
//!
//! ```text
//! cargo run --example countdown
//! COUNTDOWN_PARAMS=params.toml RUST_LOG=debug cargo run --example countdown 2>countdown.log
//! ```
//!
//! `space` starts and pauses, `r` resets, `q` quits.

use bubbletea_rs::{quit, Cmd, KeyMsg, Model as BubbleTeaModel, Msg, Program};
use countdown_widget::config;
use countdown_widget::prelude::*;
use crossterm::event::{KeyCode, KeyModifiers};
use tracing_subscriber::EnvFilter;

struct App {
    countdown: CountdownWidget,
    completions: usize,
}

impl BubbleTeaModel for App {
    fn init() -> (Self, Option<Cmd>) {
        let params = config::load_from_env().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "using default parameters");
            Parameters::default()
        });

        let mut countdown = CountdownWidget::new(MemoryHost::new(params));
        countdown.focus();
        let cmd = countdown.init();
        (
            Self {
                countdown,
                completions: 0,
            },
            cmd,
        )
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            let ctrl_c = key_msg.key == KeyCode::Char('c')
                && key_msg.modifiers.contains(KeyModifiers::CONTROL);
            if key_msg.key == KeyCode::Char('q') || key_msg.key == KeyCode::Esc || ctrl_c {
                return Some(quit());
            }
        }

        if let Some(done) = msg.downcast_ref::<CompleteMsg>() {
            if done.id == self.countdown.id() {
                self.completions += 1;
            }
            return None;
        }

        self.countdown.update(msg)
    }

    fn view(&self) -> String {
        let events = self.countdown.host().events().len();
        format!(
            "{}\n\n  completions: {}  host events: {}  (q to quit)\n",
            self.countdown.view(),
            self.completions,
            events
        )
    }
}

fn install_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    install_tracing();

    let program = Program::<App>::builder().alt_screen(true).build()?;
    program.run().await?;
    Ok(())
}
