use std::error::Error;

use qrmatrix::{ECLevel, QRBuilder, RenderOptions};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let data = "Hello, world! 🌏";
    let qr = QRBuilder::new(data.as_bytes()).ec_level(ECLevel::M).build()?;
    println!("{}", qr.to_str(1));

    let opts = *RenderOptions::new().size(420, 420).dark_hex("#202040")?;
    qr.to_image(&opts).save("./simple_qr.png")?;
    std::fs::write("./simple_qr.svg", qr.to_svg(&opts))?;

    println!("QR code saved to: simple_qr.png, simple_qr.svg");
    Ok(())
}
