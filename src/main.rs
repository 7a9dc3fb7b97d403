mod cli;

use anyhow::{anyhow, Result};
use clap::Parser;
use std::{
    io::{self, BufRead},
    sync::mpsc::{self, Receiver, Sender},
    thread::{self, JoinHandle},
};

use cli::{Cli, Command};
use ringlink::{
    cqueue::CircularQueue,
    display::{run_display, DisplayEvent},
    engine::{Engine, ListsSession, QueueSession},
};

fn run_input_reader_thread(input_event_sender: Sender<String>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if input_event_sender.send(line).is_err() {
                break;
            }
        }
    });
}

fn run_display_thread(display_event_receiver: Receiver<DisplayEvent>) -> JoinHandle<Result<()>> {
    thread::spawn(move || run_display(display_event_receiver, io::stdout()))
}

fn run_interactive(mut engine: Engine, display_event_sender: &Sender<DisplayEvent>) -> Result<()> {
    let (input_event_sender, input_event_receiver) = mpsc::channel();
    run_input_reader_thread(input_event_sender);
    engine.run(&input_event_receiver, display_event_sender)
}

fn run(command: Command, display_event_sender: &Sender<DisplayEvent>) -> Result<()> {
    match command {
        Command::Lists { node_limit } => {
            run_interactive(Engine::new(ListsSession::seeded(node_limit)?), display_event_sender)
        }
        Command::Queue {
            capacity,
            policy,
            demo,
        } => {
            let mut session = QueueSession::new(CircularQueue::with_policy(capacity, policy.into())?);
            if demo {
                session.run_demo(display_event_sender)
            } else {
                run_interactive(Engine::new(session), display_event_sender)
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (display_event_sender, display_event_receiver) = mpsc::channel();
    let display = run_display_thread(display_event_receiver);
    let outcome = run(cli.command, &display_event_sender);
    // The display thread drains what's queued once every sender is gone.
    drop(display_event_sender);
    display
        .join()
        .map_err(|_| anyhow!("Display thread panicked."))??;
    outcome
}
