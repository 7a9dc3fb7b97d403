use anyhow::{Context, Result};
use std::sync::mpsc::Sender;

use crate::{
    display::DisplayEvent,
    slist::{Concat, ListId, ListManager, Sorted},
};

use super::{parse_number, EngineState, Prompt, INVALID_NUMBER};

pub(super) const MENU: (&str, &[&str]) = (
    "******** LINKED LIST OPERATIONS MENU ********",
    &[
        "1. Concatenate List 2 onto List 1",
        "2. Reverse List 1",
        "3. Sort List 1 (Ascending)",
        "4. Display List 1",
        "5. Display List 2",
        "6. Insert Node (Utility)",
        "7. Exit",
    ],
);

/// The two-list drill: List 1 is the one every operation rewrites, List 2 only
/// feeds concatenation and inserts.
pub struct ListsSession {
    lists: ListManager,
    first: ListId,
    second: ListId,
}

impl ListsSession {
    /// List 1 starts as `10 45 5 20` and List 2 as `66 33 99`, both built by
    /// prepending.
    pub fn seeded(node_limit: Option<usize>) -> Result<Self> {
        let mut lists = node_limit.map_or_else(ListManager::new, ListManager::with_node_limit);
        let first = lists.add_list();
        let second = lists.add_list();
        for value in [20, 5, 45, 10] {
            lists
                .insert_at_beginning(first, value)
                .context("Failed to seed List 1.")?;
        }
        for value in [99, 33, 66] {
            lists
                .insert_at_beginning(second, value)
                .context("Failed to seed List 2.")?;
        }
        Ok(Self {
            lists,
            first,
            second,
        })
    }

    fn show(
        &self,
        id: ListId,
        label: &str,
        display_event_sender: &Sender<DisplayEvent>,
    ) -> Result<()> {
        let rendered = self.lists.display(id, label);
        let (title, body) = rendered.split_once('\n').unwrap_or((rendered.as_str(), ""));
        display_event_sender.send(DisplayEvent::Heading(title.into()))?;
        display_event_sender.send(DisplayEvent::Text(body.into()))?;
        Ok(())
    }

    fn show_both(&self, display_event_sender: &Sender<DisplayEvent>) -> Result<()> {
        self.show(self.first, "List 1", display_event_sender)?;
        self.show(self.second, "List 2", display_event_sender)
    }

    pub(super) fn show_initial_state(
        &self,
        display_event_sender: &Sender<DisplayEvent>,
    ) -> Result<()> {
        display_event_sender.send(DisplayEvent::Heading(
            "--- Initial Linked List State ---".into(),
        ))?;
        self.show(self.first, "List 1 (head1)", display_event_sender)?;
        self.show(self.second, "List 2 (head2)", display_event_sender)
    }

    fn handle_choice(
        &mut self,
        input: &str,
        display_event_sender: &Sender<DisplayEvent>,
    ) -> Result<Option<EngineState>> {
        let Some(choice) = parse_number(input) else {
            display_event_sender.send(DisplayEvent::Failure(INVALID_NUMBER.into()))?;
            return Ok(None);
        };
        match choice {
            1 => {
                let report = match self.lists.concatenate(self.first, self.second) {
                    Concat::AdoptedSecond => DisplayEvent::Notice(
                        "Concatenation complete: List 1 was empty, List 1 now equals List 2."
                            .into(),
                    ),
                    Concat::SecondEmpty => DisplayEvent::Notice(
                        "Concatenation complete: List 2 was empty, no changes to List 1.".into(),
                    ),
                    Concat::Appended => DisplayEvent::Notice(
                        "Concatenation successful: List 2 added to the end of List 1.".into(),
                    ),
                    Concat::SameList => {
                        DisplayEvent::Failure("Cannot concatenate a list onto itself.".into())
                    }
                };
                display_event_sender.send(report)?;
                self.show(self.first, "List 1 (Concatenated)", display_event_sender)?;
                self.show(self.second, "List 2 (Remaining)", display_event_sender)?;
            }
            2 => {
                self.lists.reverse(self.first);
                display_event_sender.send(DisplayEvent::Notice(
                    "List 1 has been successfully reversed.".into(),
                ))?;
                self.show(self.first, "List 1 (Reversed)", display_event_sender)?;
            }
            3 => {
                let report = match self.lists.sort(self.first) {
                    Sorted::Empty => {
                        DisplayEvent::Failure("Cannot sort: List 1 is empty.".into())
                    }
                    Sorted::Done => DisplayEvent::Notice(
                        "List 1 has been successfully sorted in ascending order.".into(),
                    ),
                };
                display_event_sender.send(report)?;
                self.show(self.first, "List 1 (Sorted)", display_event_sender)?;
            }
            4 => self.show(self.first, "List 1", display_event_sender)?,
            5 => self.show(self.second, "List 2", display_event_sender)?,
            6 => return Ok(Some(EngineState::Prompt(Prompt::InsertData))),
            7 => {
                display_event_sender.send(DisplayEvent::Text("Exiting program.".into()))?;
                return Ok(Some(EngineState::Quit));
            }
            _ => {
                display_event_sender.send(DisplayEvent::Failure(
                    "Invalid choice. Please enter a choice between 1-7.".into(),
                ))?;
            }
        }
        Ok(None)
    }

    fn insert(
        &mut self,
        value: i32,
        input: &str,
        display_event_sender: &Sender<DisplayEvent>,
    ) -> Result<()> {
        let target = match parse_number(input) {
            Some(1) => self.first,
            Some(2) => self.second,
            _ => {
                display_event_sender
                    .send(DisplayEvent::Failure("Invalid list number.".into()))?;
                return Ok(());
            }
        };
        if let Err(err) = self.lists.insert_at_beginning(target, value) {
            display_event_sender.send(DisplayEvent::Failure(err.to_string()))?;
        }
        self.show_both(display_event_sender)
    }

    pub(super) fn handle_input_event(
        &mut self,
        state: EngineState,
        input: &str,
        display_event_sender: &Sender<DisplayEvent>,
    ) -> Result<Option<EngineState>> {
        match state {
            EngineState::Menu => self.handle_choice(input, display_event_sender),
            EngineState::Prompt(Prompt::InsertData) => match parse_number(input) {
                Some(value) => Ok(Some(EngineState::Prompt(Prompt::InsertTarget(value)))),
                None => {
                    display_event_sender.send(DisplayEvent::Failure(INVALID_NUMBER.into()))?;
                    Ok(Some(EngineState::Menu))
                }
            },
            EngineState::Prompt(Prompt::InsertTarget(value)) => {
                self.insert(value, input, display_event_sender)?;
                Ok(Some(EngineState::Menu))
            }
            EngineState::Prompt(Prompt::EnqueueValue) | EngineState::Quit => unreachable!(),
        }
    }
}
