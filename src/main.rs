use std::io::Write;

const OUTPUT_PATH: &str = "assets/icon.ico";
const ICON: [u8; const_ico::FILE_BYTES] = const_ico::encode(const_ico::render());

fn main() -> Result<(), std::io::Error> {
    let mut file = std::fs::File::create(OUTPUT_PATH)?;
    file.write_all(&ICON)?;
    println!("Wrote {OUTPUT_PATH} ({} bytes)", ICON.len());
    Ok(())
}
