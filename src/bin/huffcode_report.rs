use std::io::Read;
use std::process::ExitCode;

use clap::App;
use clap::Arg;
use clap::ArgMatches;

use huffcode::Session;

fn app() -> App<'static, 'static> {
    App::new("huffcode-report")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Builds a Huffman code for some text and reports the codes, \
                the encoded bits and the compression stats.")
        .arg(Arg::with_name("TEXT")
             .help("Text to compress, joined by spaces; read from stdin when absent")
             .multiple(true))
}

/// The text named on the command line, `None` if stdin should be read.
fn text_arg(matches: &ArgMatches) -> Option<String> {
    matches
        .values_of("TEXT")
        .map(|values| values.collect::<Vec<_>>().join(" "))
}

fn main() -> ExitCode {
    env_logger::init();

    let matches = app().get_matches();

    let text = match text_arg(&matches) {
        Some(text) => text,
        None => {
            let mut text = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut text) {
                log::error!("failed to read stdin: {}", e);
                return ExitCode::FAILURE;
            }
            text
        }
    };

    let session = Session::compress_str(&text);

    println!("symbol  count  code");
    for (symbol, code) in session.codebook().iter() {
        let count = session.table().get(&symbol).unwrap_or(0);
        println!("{:<6?}  {:>5}  {}", symbol, count, code);
    }

    let stats = session.stats();
    println!();
    println!("encoded:         {}", session.encoded());
    println!("original bits:   {}", stats.original_bits);
    println!("compressed bits: {}", stats.compressed_bits);
    println!("ratio:           {:.2}%", stats.ratio_percent);
    println!("saved bits:      {}", stats.saved_bits);

    if session.decode_string() != text {
        log::error!("round-trip mismatch");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
