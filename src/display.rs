use anyhow::Result;
use crossterm::{
    queue,
    style::{self, Attribute, Color},
};
use std::{io::Write, sync::mpsc::Receiver};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayEvent {
    /// Menu banners and section titles.
    Heading(String),
    Text(String),
    /// An operation went through.
    Notice(String),
    /// An operation was refused or the input made no sense.
    Failure(String),
    /// Printed without a trailing newline, the cursor waits after it.
    Prompt(String),
}

impl DisplayEvent {
    pub fn text(&self) -> &str {
        match self {
            DisplayEvent::Heading(s)
            | DisplayEvent::Text(s)
            | DisplayEvent::Notice(s)
            | DisplayEvent::Failure(s)
            | DisplayEvent::Prompt(s) => s,
        }
    }
}

fn print_colored<W: Write>(out: &mut W, text: &str, color: Color) -> Result<()> {
    queue!(
        out,
        style::SetForegroundColor(color),
        style::Print(text),
        style::ResetColor,
        style::Print("\n")
    )?;
    Ok(())
}

pub fn run_display<W: Write>(display_event_receiver: Receiver<DisplayEvent>, mut out: W) -> Result<()> {
    for display_event in display_event_receiver {
        match display_event {
            DisplayEvent::Heading(text) => {
                queue!(
                    out,
                    style::Print("\n"),
                    style::SetAttribute(Attribute::Bold),
                    style::Print(text),
                    style::SetAttribute(Attribute::Reset),
                    style::Print("\n")
                )?;
            }
            DisplayEvent::Text(text) => {
                queue!(out, style::Print(text), style::Print("\n"))?;
            }
            DisplayEvent::Notice(text) => print_colored(&mut out, &text, Color::Green)?,
            DisplayEvent::Failure(text) => print_colored(&mut out, &text, Color::Red)?,
            DisplayEvent::Prompt(text) => {
                queue!(out, style::Print(text))?;
            }
        }
        out.flush()?;
    }
    Ok(())
}
