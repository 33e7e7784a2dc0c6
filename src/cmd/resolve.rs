use crate::cmd::{parse_client, DEFAULT_CLIENT};
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use netboot_tftp::{BootHandler, BootSource, TransferHandler};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

/// Show which boot file a TFTP read request would be served
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Request path as sent by the client
    pub path: String,

    /// Client transport address
    #[arg(long, value_parser = parse_client, default_value = DEFAULT_CLIENT)]
    pub client: SocketAddr,

    /// Write the resolved bytes to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run_resolve(args: ResolveArgs, handler: &BootHandler) -> Result<()> {
    let file = handler.resolve(&args.path, args.client)?;

    let source = match file.source() {
        BootSource::Firmware(fw) => format!("boot loader for {} (code {})", fw, fw.code()),
        BootSource::Arm64Override => "ARM64 boot loader".to_string(),
        BootSource::File(name) => format!("boot file {}", name),
    };
    println!("{}: {} bytes", source, file.size());

    if let Some(output) = args.output {
        std::fs::write(&output, file.data())
            .wrap_err_with(|| format!("Failed to write {}", output.display()))?;
        info!(path = %output.display(), "Wrote boot file");
    }

    Ok(())
}
