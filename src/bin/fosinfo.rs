#[path = "../logging.rs"]
mod logging;

use fossave::{read_save, write_file_report, SaveReport};
use std::{
    env,
    io::{stdout, BufWriter, Write},
    path::Path,
    process,
};
use tracing::debug;

fn usage() {
    eprintln!("Usage: fosinfo [options] [files]");
    eprintln!(" options: -h, --help: Print this help message");
}

fn report_file(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_save(path)?;
    let report = SaveReport::from_slice(&data)?;

    let stdout = stdout();
    let mut buf_stdout = BufWriter::new(stdout.lock());
    write_file_report(&mut buf_stdout, path, &report)?;
    buf_stdout.flush()?;
    Ok(())
}

fn main() {
    logging::init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() || args.iter().any(|x| x == "-h" || x == "--help") {
        usage();
        process::exit(1);
    }

    for arg in &args {
        let path = Path::new(arg);
        if let Err(e) = report_file(path) {
            debug!(path = %path.display(), "skipping save");
            eprintln!("{}: {}", path.display(), e);
        }
    }
}
