//! Interactive command loop driving the enrollment wizard from a terminal.

use std::str::FromStr;

use anyhow::Context;
use te_app::EnrollmentOrchestrator;
use te_core::enrollment::{EnrollmentEvent, WizardState, WizardStep};
use tracing::{debug, info};

use crate::adapters::{render_state, TerminalIo};

const PROMPT: &str = "> ";
const BUSY: &str = "Waiting for the identity provider. [x] cancel  [q] quit";

/// One line of user input mapped to a wizard intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Open,
    Continue,
    Generate,
    Fetch,
    Rescan,
    Close,
    Quit,
    Help,
}

impl Command {
    /// The wizard event this command dispatches, if any.
    pub fn intent(self) -> Option<EnrollmentEvent> {
        match self {
            Command::Open => Some(EnrollmentEvent::Open),
            Command::Continue => Some(EnrollmentEvent::Advance),
            Command::Generate => Some(EnrollmentEvent::RefreshSecret),
            Command::Fetch => Some(EnrollmentEvent::FetchSecret),
            Command::Rescan => Some(EnrollmentEvent::RetryFromScan),
            Command::Close => Some(EnrollmentEvent::Close),
            Command::Quit | Command::Help => None,
        }
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "o" | "open" => Ok(Command::Open),
            "c" | "continue" | "" => Ok(Command::Continue),
            "g" | "generate" => Ok(Command::Generate),
            "f" | "fetch" => Ok(Command::Fetch),
            "r" | "rescan" => Ok(Command::Rescan),
            "x" | "close" | "cancel" => Ok(Command::Close),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            "h" | "help" | "?" => Ok(Command::Help),
            other => Err(format!("unknown command: {other}")),
        }
    }
}

pub fn help_lines() -> Vec<&'static str> {
    vec![
        "Commands:",
        "  o  open the wizard",
        "  c  continue / verify / done (Enter)",
        "  g  generate a new QR code",
        "  f  fetch the QR code again",
        "  r  scan the QR code again after a failed verification",
        "  x  cancel and close the wizard",
        "  q  quit",
    ]
}

enum Settled {
    State(WizardState),
    Quit(WizardState),
}

/// Dispatch `event` while still listening for `x` and `q`.
///
/// Closing or quitting abandons the pending operation; the orchestrator drops
/// any result it would have produced. Other input is refused until the
/// operation settles. End of input counts as quit.
async fn settle(
    orchestrator: &EnrollmentOrchestrator,
    io: &TerminalIo,
    event: EnrollmentEvent,
) -> anyhow::Result<Settled> {
    let operation = orchestrator.dispatch(event);
    tokio::pin!(operation);

    loop {
        tokio::select! {
            biased;
            state = &mut operation => return Ok(Settled::State(state)),
            line = io.read_line() => {
                let Some(line) = line.context("Failed to read command")? else {
                    debug!("command input closed with an operation pending");
                    return Ok(Settled::Quit(orchestrator.get_state().await));
                };
                match line.parse::<Command>() {
                    Ok(Command::Close) => {
                        info!("closing wizard with an operation pending");
                        return Ok(Settled::State(orchestrator.close().await));
                    }
                    Ok(Command::Quit) => {
                        return Ok(Settled::Quit(orchestrator.get_state().await));
                    }
                    _ => io.write_line(BUSY).context("Failed to write to terminal")?,
                }
            }
        }
    }
}

/// Run the wizard until the user quits, input ends, or enrollment finishes.
///
/// Returns the last wizard state.
pub async fn run_session(
    orchestrator: &EnrollmentOrchestrator,
    io: &TerminalIo,
    auto_open: bool,
) -> anyhow::Result<WizardState> {
    let mut state = if auto_open {
        match settle(orchestrator, io, EnrollmentEvent::Open).await? {
            Settled::State(state) => state,
            Settled::Quit(state) => return Ok(state),
        }
    } else {
        let state = orchestrator.get_state().await;
        io.write_lines(render_state(&state, &[]))
            .context("Failed to write to terminal")?;
        state
    };

    loop {
        let Some(line) = io.prompt(PROMPT).await.context("Failed to read command")? else {
            debug!("command input closed");
            return Ok(state);
        };

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(message) => {
                io.write_line(&message)
                    .and_then(|_| io.write_lines(help_lines()))
                    .context("Failed to write to terminal")?;
                continue;
            }
        };
        debug!(?command, "host command");

        let Some(event) = command.intent() else {
            if command == Command::Quit {
                return Ok(state);
            }
            io.write_lines(help_lines())
                .context("Failed to write to terminal")?;
            continue;
        };

        let was_completed = state.is_at(WizardStep::Completed);
        state = match settle(orchestrator, io, event).await? {
            Settled::State(next) => next,
            Settled::Quit(last) => return Ok(last),
        };

        if was_completed && !state.is_open {
            info!("authenticator app enrolled");
            io.write_line("Authenticator app enrolled.")
                .context("Failed to write to terminal")?;
            return Ok(state);
        }
    }
}
