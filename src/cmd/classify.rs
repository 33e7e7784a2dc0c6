use crate::cmd::{parse_client, DEFAULT_CLIENT};
use clap::Parser;
use color_eyre::eyre::Result;
use netboot_common::MachineEvent;
use netboot_tftp::{BootHandler, TransferHandler, TransferKind};
use serde::Serialize;
use std::net::SocketAddr;

/// Show how a finished transfer would be recorded
#[derive(Parser, Debug)]
pub struct ClassifyArgs {
    /// Request path as sent by the client
    pub path: String,

    /// Client transport address
    #[arg(long, value_parser = parse_client, default_value = DEFAULT_CLIENT)]
    pub client: SocketAddr,

    /// Treat the transfer as failed with this error
    #[arg(long, value_name = "ERROR")]
    pub failed: Option<String>,
}

#[derive(Serialize)]
struct Classification {
    transfer: TransferKind,
    event: Option<MachineEvent>,
}

pub fn run_classify(args: ClassifyArgs, handler: &BootHandler) -> Result<()> {
    let mut events = handler.subscribe();

    let transfer = match &args.failed {
        Some(error) => handler.transfer_finished(&args.path, args.client, Err(error)),
        None => handler.transfer_finished(&args.path, args.client, Ok(())),
    };
    let event = events.try_recv().ok();

    let output = Classification { transfer, event };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
