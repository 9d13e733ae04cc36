use clap::Parser;

use notify::RecursiveMode;
use notify_debouncer_mini::new_debouncer;
use std::fs::{self, File};
use std::io::BufReader;
use std::{path::Path, sync::mpsc::channel, time::Duration};
use tempfile::NamedTempFile;

use crate::constants::STDIO_PATH;
use crate::errors::{Error, Result};
use crate::path::{parse_path_data, write_path_data};
use crate::{transform_file, transform_stream, TransformConfig};

/// Command line arguments
#[derive(Parser)]
#[command(author, version, about, long_about=None)] // Read from Cargo.toml
struct Arguments {
    /// File to process ('-' for stdin)
    #[arg(default_value = "-")]
    file: String,

    /// Target output file ('-' for stdout)
    #[arg(short, long, default_value = "-")]
    output: String,

    /// Watch file for changes; update output on change. (FILE must be given)
    #[arg(short, long, requires = "file")]
    watch: bool,

    /// Leave `<path>` data as written rather than normalizing it
    #[arg(long)]
    no_normalize: bool,

    /// Merge sibling `<line>` elements with matching attributes into paths
    #[arg(long)]
    join_lines: bool,

    /// Normalize the given path data and print it, instead of processing a file
    #[arg(short = 'd', long, allow_hyphen_values = true, conflicts_with = "watch")]
    path_data: Option<String>,
}

/// Top-level configuration used by the `svgdata` command-line process.
#[derive(Debug, Clone)]
pub struct Config {
    /// path to input file, or "-" for stdin
    pub input_path: String,
    /// path to output file, or "-" for stdout
    pub output_path: String,
    /// watch input file for changes and regenerate output
    pub watch: bool,
    /// single path data string to normalize
    pub path_data: Option<String>,
    /// transform config options
    pub transform: TransformConfig,
}

impl Config {
    fn from_args(args: Arguments) -> Result<Self> {
        if args.watch && args.file == STDIO_PATH {
            // Should already be enforced by clap validation
            return Err(Error::Cli(
                "A non-stdin file must be provided with -w/--watch argument".into(),
            ));
        }
        if args.file != STDIO_PATH && args.output != STDIO_PATH {
            let in_path = Path::new(&args.file);
            let out_path = Path::new(&args.output);
            if out_path.exists()
                && out_path.canonicalize().map_err(Error::from_err)?
                    == in_path.canonicalize().map_err(Error::from_err)?
            {
                return Err(Error::Cli(
                    "Output path must not refer to the same file as the input file.".into(),
                ));
            }
        }
        Ok(Self {
            input_path: args.file,
            output_path: args.output,
            watch: args.watch,
            path_data: args.path_data,
            transform: TransformConfig {
                normalize_paths: !args.no_normalize,
                join_lines: args.join_lines,
            },
        })
    }

    /// Create a `Config` object set up given a command line string.
    ///
    /// The string is parsed using `shlex::split()`, so values containing
    /// spaces or quotes should be quoted or escaped appropriately.
    pub fn from_cmdline(args: &str) -> Result<Self> {
        let args = shlex::split(args).unwrap_or_default();
        let args = Arguments::try_parse_from(args.iter()).map_err(Error::from_err)?;
        Self::from_args(args)
    }
}

/// Create a `Config` object from process arguments.
pub fn get_config() -> Result<Config> {
    let args = Arguments::parse();
    Config::from_args(args)
}

/// Transform `input` to `output`, staging file output in a temporary file.
///
/// The target file is only written once the whole document has been
/// transformed successfully.
fn transform_to_target(input: &str, output: &str, config: &TransformConfig) -> Result<()> {
    if input == STDIO_PATH || output == STDIO_PATH {
        return transform_file(input, output, config);
    }
    let mut in_reader = BufReader::new(File::open(input)?);
    let mut out_temp = NamedTempFile::new()?;
    transform_stream(&mut in_reader, &mut out_temp, config)?;
    // Copy content rather than rename (by .persist()) since this
    // could cross filesystems.
    fs::copy(out_temp.path(), output)?;
    Ok(())
}

/// Run the `svgdata` program with a given `Config`.
pub fn run(config: Config) -> Result<()> {
    if let Some(data) = &config.path_data {
        let subpaths = parse_path_data(data)?;
        println!("{}", write_path_data(&subpaths));
    } else if !config.watch {
        transform_to_target(&config.input_path, &config.output_path, &config.transform)?;
    } else if config.input_path != STDIO_PATH {
        let watch = config.input_path;
        let (tx, rx) = channel();
        let mut watcher = new_debouncer(Duration::from_millis(250), tx).map_err(Error::from_err)?;
        let watch_path = Path::new(&watch);
        watcher
            .watcher()
            .watch(watch_path, RecursiveMode::NonRecursive)
            .map_err(Error::from_err)?;
        transform_to_target(&watch, &config.output_path, &config.transform).unwrap_or_else(|e| {
            eprintln!("transform failed: {e}");
        });
        eprintln!("Watching {watch} for changes");
        loop {
            match rx.recv() {
                Ok(Ok(events)) => {
                    for event in events {
                        if event.path.canonicalize().map_err(Error::Io)?
                            == watch_path.canonicalize().map_err(Error::Io)?
                        {
                            eprintln!("{} changed", event.path.to_string_lossy());
                            transform_to_target(&watch, &config.output_path, &config.transform)
                                .unwrap_or_else(|e| {
                                    eprintln!("transform failed: {e}");
                                });
                        }
                    }
                }
                Ok(Err(e)) => eprintln!("Watch error {e:?}"),
                Err(e) => eprintln!("Channel error: {e:?}"),
            }
        }
    }

    Ok(())
}
