use crate::config::NetbootConfig;
use color_eyre::eyre::Result;
use netboot_common::Firmware;
use netboot_tftp::BootHandler;

/// Print which firmware kinds have a boot loader, and the boot file table
pub fn run_firmware(config: &NetbootConfig, handler: &BootHandler) -> Result<()> {
    let registry = handler.dispatcher().firmware();

    for fw in Firmware::ALL {
        let asset = config.firmware.asset_for(fw).unwrap_or("-");
        let status = match registry.get(fw) {
            Some(data) => format!("{} bytes", data.len()),
            None => "missing".to_string(),
        };
        println!("{:>2} {:<10} {:<40} {}", fw.code(), fw, asset, status);
    }

    let files = handler.dispatcher().files();
    println!("{} boot files", files.len());
    for name in files.names() {
        println!("   {}", name);
    }

    Ok(())
}
