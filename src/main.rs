use std::path::Path;

fn main() -> placeholder_gen::Result<()> {
    env_logger::init();

    // Every path in the manifest is relative to the working directory
    placeholder_gen::run(Path::new("."))?;
    println!("Images created successfully!");
    Ok(())
}
