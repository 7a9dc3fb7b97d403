use clap::{Parser, Subcommand, ValueEnum};
use ringlink::cqueue::{CapacityPolicy, DEFAULT_CAPACITY};

#[derive(Parser)]
#[command(
    name = "ringlink",
    about = "Console drills for a singly linked list and a circular queue",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Concatenate, reverse, sort and insert into two seeded linked lists.
    Lists {
        /// Maximum number of nodes alive at once.
        #[arg(long = "node-limit")]
        node_limit: Option<usize>,
    },
    /// Enqueue, dequeue and display on a fixed-capacity circular queue.
    Queue {
        #[arg(long, default_value_t = DEFAULT_CAPACITY)]
        capacity: usize,
        #[arg(long, value_enum, default_value_t = PolicyArg::ReserveSlot)]
        policy: PolicyArg,
        /// Run the scripted walkthrough instead of the menu.
        #[arg(long)]
        demo: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    ReserveSlot,
    Counted,
}

impl From<PolicyArg> for CapacityPolicy {
    fn from(policy: PolicyArg) -> Self {
        match policy {
            PolicyArg::ReserveSlot => CapacityPolicy::ReserveSlot,
            PolicyArg::Counted => CapacityPolicy::Counted,
        }
    }
}
