mod lists;
mod queue;

use anyhow::Result;
use std::sync::mpsc::{Receiver, Sender};

use crate::display::DisplayEvent;

pub use lists::ListsSession;
pub use queue::QueueSession;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Prompt {
    InsertData,
    InsertTarget(i32),
    EnqueueValue,
}

impl Prompt {
    fn text(&self) -> &'static str {
        match self {
            Prompt::InsertData => "Enter data to insert: ",
            Prompt::InsertTarget(_) => "Insert into (1 or 2): ",
            Prompt::EnqueueValue => "Enter value to enqueue: ",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EngineState {
    Menu,
    Prompt(Prompt),
    Quit,
}

pub enum Session {
    Lists(ListsSession),
    Queue(QueueSession),
}

impl From<ListsSession> for Session {
    fn from(session: ListsSession) -> Self {
        Session::Lists(session)
    }
}

impl From<QueueSession> for Session {
    fn from(session: QueueSession) -> Self {
        Session::Queue(session)
    }
}

fn parse_number(input: &str) -> Option<i32> {
    input.trim().parse().ok()
}

const INVALID_NUMBER: &str = "Invalid input. Please enter a number.";

/// Line-driven menu loop. Every input line is one answer, either a menu
/// choice or the value a pending prompt asked for.
pub struct Engine {
    state: EngineState,
    session: Session,
}

impl Engine {
    pub fn new(session: impl Into<Session>) -> Self {
        Self {
            state: EngineState::Menu,
            session: session.into(),
        }
    }

    fn send_menu(&self, display_event_sender: &Sender<DisplayEvent>) -> Result<()> {
        let (title, items) = match &self.session {
            Session::Lists(_) => lists::MENU,
            Session::Queue(_) => queue::MENU,
        };
        display_event_sender.send(DisplayEvent::Heading(title.into()))?;
        for item in items {
            display_event_sender.send(DisplayEvent::Text((*item).into()))?;
        }
        display_event_sender.send(DisplayEvent::Prompt("Enter your choice: ".into()))?;
        Ok(())
    }

    fn handle_input_event(
        &mut self,
        input: &str,
        display_event_sender: &Sender<DisplayEvent>,
    ) -> Result<Option<EngineState>> {
        match &mut self.session {
            Session::Lists(session) => {
                session.handle_input_event(self.state, input, display_event_sender)
            }
            Session::Queue(session) => {
                session.handle_input_event(self.state, input, display_event_sender)
            }
        }
    }

    pub fn run(
        &mut self,
        input_event_receiver: &Receiver<String>,
        display_event_sender: &Sender<DisplayEvent>,
    ) -> Result<()> {
        if let Session::Lists(session) = &self.session {
            session.show_initial_state(display_event_sender)?;
        }
        self.send_menu(display_event_sender)?;
        for input in input_event_receiver {
            if let Some(next_state) = self.handle_input_event(&input, display_event_sender)? {
                if next_state == EngineState::Quit {
                    break;
                }
                self.state = next_state;
            }
            match self.state {
                EngineState::Menu => self.send_menu(display_event_sender)?,
                EngineState::Prompt(prompt) => {
                    display_event_sender.send(DisplayEvent::Prompt(prompt.text().into()))?
                }
                EngineState::Quit => unreachable!(),
            }
        }
        Ok(())
    }
}
