use anyhow::Result;
use std::sync::mpsc::Sender;

use crate::{
    cqueue::{CircularQueue, QueueError, Violation},
    display::DisplayEvent,
};

use super::{parse_number, EngineState, Prompt, INVALID_NUMBER};

pub(super) const MENU: (&str, &[&str]) = (
    "******** CIRCULAR QUEUE MENU ********",
    &["1. Enqueue", "2. Dequeue", "3. Display", "4. Exit"],
);

fn report(err: &QueueError) -> String {
    match err {
        QueueError::CapacityViolation(Violation::Full) => "Queue is full!".into(),
        QueueError::CapacityViolation(Violation::Empty) => "Queue is empty!".into(),
        QueueError::InvalidCapacity { .. } => err.to_string(),
    }
}

pub struct QueueSession {
    queue: CircularQueue,
}

impl QueueSession {
    pub fn new(queue: CircularQueue) -> Self {
        Self { queue }
    }

    fn enqueue(&mut self, value: i32, display_event_sender: &Sender<DisplayEvent>) -> Result<()> {
        let event = match self.queue.enqueue(value) {
            Ok(()) => DisplayEvent::Notice(format!("Enqueued: {value}")),
            Err(err) => DisplayEvent::Failure(report(&err)),
        };
        display_event_sender.send(event)?;
        Ok(())
    }

    fn dequeue(&mut self, display_event_sender: &Sender<DisplayEvent>) -> Result<()> {
        let event = match self.queue.dequeue() {
            Ok(value) => DisplayEvent::Notice(format!("Dequeued: {value}")),
            Err(err) => DisplayEvent::Failure(report(&err)),
        };
        display_event_sender.send(event)?;
        Ok(())
    }

    fn show(&self, display_event_sender: &Sender<DisplayEvent>) -> Result<()> {
        display_event_sender.send(DisplayEvent::Text(self.queue.display()))?;
        Ok(())
    }

    /// Replays the fixed script: fill, drain two, then overfill past the wrap.
    pub fn run_demo(&mut self, display_event_sender: &Sender<DisplayEvent>) -> Result<()> {
        self.queue.initialize();
        for value in [10, 20, 30, 40] {
            self.enqueue(value, display_event_sender)?;
        }
        self.show(display_event_sender)?;
        self.dequeue(display_event_sender)?;
        self.dequeue(display_event_sender)?;
        self.show(display_event_sender)?;
        for value in [50, 60, 70] {
            self.enqueue(value, display_event_sender)?;
        }
        self.show(display_event_sender)
    }

    pub(super) fn handle_input_event(
        &mut self,
        state: EngineState,
        input: &str,
        display_event_sender: &Sender<DisplayEvent>,
    ) -> Result<Option<EngineState>> {
        match state {
            EngineState::Menu => {
                let Some(choice) = parse_number(input) else {
                    display_event_sender.send(DisplayEvent::Failure(INVALID_NUMBER.into()))?;
                    return Ok(None);
                };
                match choice {
                    1 => return Ok(Some(EngineState::Prompt(Prompt::EnqueueValue))),
                    2 => self.dequeue(display_event_sender)?,
                    3 => self.show(display_event_sender)?,
                    4 => {
                        display_event_sender
                            .send(DisplayEvent::Text("Exiting program.".into()))?;
                        return Ok(Some(EngineState::Quit));
                    }
                    _ => {
                        display_event_sender.send(DisplayEvent::Failure(
                            "Invalid choice. Please enter a choice between 1-4.".into(),
                        ))?;
                    }
                }
                Ok(None)
            }
            EngineState::Prompt(Prompt::EnqueueValue) => {
                match parse_number(input) {
                    Some(value) => self.enqueue(value, display_event_sender)?,
                    None => {
                        display_event_sender.send(DisplayEvent::Failure(INVALID_NUMBER.into()))?
                    }
                }
                Ok(Some(EngineState::Menu))
            }
            EngineState::Prompt(Prompt::InsertData | Prompt::InsertTarget(_))
            | EngineState::Quit => unreachable!(),
        }
    }
}
