//! IDCARE console client
//!
//! Each line typed is submitted to the conversation. `/clear` empties the
//! log and `/quit` exits.

use idcare_chat::config::ClientConfig;
use idcare_chat::runtime::{spawn_conversation, HttpRelayClient};
use idcare_chat::state_machine::{ConvState, Role, Turn, SUGGESTED_PROMPTS};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();
    let handle = spawn_conversation(config.context(), HttpRelayClient::new(&config.relay_url));
    let mut updates = handle.subscribe();
    let mut view = View::default();

    print_welcome();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match line.trim() {
                    "/quit" => break,
                    "/clear" => handle.clear().await?,
                    _ => {
                        let state = handle.state();
                        if state.can_submit(&line) {
                            handle.submit(line).await?;
                        } else if state.awaiting_reply {
                            println!("(still waiting for a reply)");
                        }
                    }
                }
            }
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().clone();
                view.render(&state);
            }
        }
    }

    Ok(())
}

fn print_welcome() {
    println!("Welcome to IDCARE!");
    println!("Start a conversation by typing your message below. I'm here to help!");
    println!("Try asking: {}", SUGGESTED_PROMPTS.join(", "));
    println!("Commands: /clear, /quit");
}

/// Tracks what has already been printed so each update only adds new lines
#[derive(Default)]
struct View {
    printed: usize,
    /// Last turn printed; if it is no longer at its index the log was cleared
    last: Option<Turn>,
    thinking: bool,
    banner: Option<String>,
}

impl View {
    /// Turns not yet printed, and whether the log was cleared since the last call.
    /// Snapshots can skip intermediate states, so a clear followed by new turns
    /// may leave the log no shorter than before.
    fn unseen<'a>(&mut self, turns: &'a [Turn]) -> (bool, &'a [Turn]) {
        let cleared = match &self.last {
            Some(last) => turns.get(self.printed - 1) != Some(last),
            None => false,
        };
        if cleared {
            self.printed = 0;
        }
        let fresh = &turns[self.printed..];
        self.printed = turns.len();
        self.last = turns.last().cloned();
        (cleared, fresh)
    }

    fn render(&mut self, state: &ConvState) {
        let (cleared, fresh) = self.unseen(&state.turns);
        if cleared {
            println!("-- conversation cleared --");
            if state.turns.is_empty() {
                print_welcome();
            }
        }
        for turn in fresh {
            print_turn(turn);
        }

        if state.awaiting_reply && !self.thinking {
            println!("IDCARE is typing...");
        }
        self.thinking = state.awaiting_reply;

        if state.last_error != self.banner {
            if let Some(banner) = &state.last_error {
                eprintln!("! {banner}");
            }
            self.banner.clone_from(&state.last_error);
        }
    }
}

fn print_turn(turn: &Turn) {
    let who = match turn.role {
        Role::User => "You",
        Role::Assistant if turn.is_error => "IDCARE (error)",
        Role::Assistant => "IDCARE",
    };
    let time = turn.timestamp.with_timezone(&chrono::Local).format("%H:%M");
    println!("[{time}] {who}: {}", turn.content);
}
