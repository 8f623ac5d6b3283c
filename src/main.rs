use mpt_digits::mpt::{dump, utils};
use mpt_digits::{MptError, ReaderOptions};
use std::env;
use std::io::{self, Write};

const DEFAULT_DIGIT_COUNT: u64 = 50;

fn print_usage() {
    println!(
        "usage: mptdump filename base pos [nb_digits]\n\
         \n\
         Dump digits of a number stored in MPT format.\n\
         base is 10 or a power of two up to 32; pos starts at 1 and may use\n\
         scientific notation (e.g. 1e9).\n\
         Example to display 50 digits starting from position 1:\n\
         mptdump pi_base10 10 1"
    );
}

/// Reads `MPT_BUFFER_LIMBS` from the environment, if set.
fn reader_options() -> Result<ReaderOptions, MptError> {
    let options = ReaderOptions::default();
    match env::var("MPT_BUFFER_LIMBS") {
        Ok(value) => {
            let limbs = value.trim().parse::<usize>().map_err(|_| {
                MptError::InvalidOption(format!("MPT_BUFFER_LIMBS must be a limb count, got '{}'", value))
            })?;
            Ok(options.with_buffer_limbs(limbs))
        }
        Err(_) => Ok(options),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        print_usage();
        std::process::exit(1);
    }

    let filename = &args[1];
    let (Ok(base), Ok(position)) = (args[2].parse::<u32>(), utils::parse_position(&args[3])) else {
        print_usage();
        std::process::exit(1);
    };
    let count = match args.get(4).map(|s| s.parse::<u64>()) {
        Some(Ok(count)) => count,
        Some(Err(_)) => {
            print_usage();
            std::process::exit(1);
        }
        None => DEFAULT_DIGIT_COUNT,
    };

    let options = match reader_options() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    };

    let mut reader = match dump::open_at(filename, base, position, options) {
        Ok(reader) => reader,
        Err(e) => {
            eprintln!("{}: cannot display at this position ({})", filename, e);
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let result = dump::write_digits(&mut reader, &mut out, count)
        .and_then(|_| writeln!(out).map_err(MptError::from))
        .and_then(|_| out.flush().map_err(MptError::from));
    reader.close();

    if let Err(e) = result {
        eprintln!("{}: {}", filename, e);
        std::process::exit(1);
    }
}
