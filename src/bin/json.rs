#[path = "../logging.rs"]
mod logging;

use fossave::{read_save, SaveReport};
use std::{
    env,
    io::{stdout, BufWriter, Write},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_tracing();

    let args: Vec<String> = env::args().collect();
    let path = args.get(1).ok_or("usage: json <file>")?;
    let data = read_save(path)?;
    let report = SaveReport::from_slice(&data)?;

    let stdout = stdout();
    let mut buf_stdout = BufWriter::new(stdout.lock());
    serde_json::to_writer_pretty(&mut buf_stdout, &report)?;
    writeln!(buf_stdout)?;
    buf_stdout.flush()?;
    Ok(())
}
