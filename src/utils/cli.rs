use super::Config;
use crate::LifeError;
use std::path::PathBuf;

const BIN: &str = "sparse-life";

/// What the binary was asked to do.
#[derive(Debug, PartialEq)]
pub enum Command {
    Run(Config),
    Usage(Config),
    Help,
    About,
}

/// Parses `-h <height> -w <width> -f <fps> --file <path> --seed <u64>` and the
/// informational flags `--usage`, `--help`, `--about`.
///
/// Short options accept the value attached (`-h10`) or as the next argument,
/// long options as `--file=<path>` or `--file <path>`. All arguments are checked
/// before an informational flag takes effect; the first one given wins.
pub fn parse_args<I, S>(args: I) -> Result<Command, LifeError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut config = Config::default();
    let mut info: Option<fn(Config) -> Command> = None;

    while let Some(arg) = args.next() {
        let (name, inline) = split_inline_value(&arg);
        let mut value = || {
            inline
                .clone()
                .or_else(|| args.next())
                .ok_or_else(|| LifeError::MissingValue(name.clone()))
        };

        match name.as_str() {
            "-h" => config.height = positive(&name, value()?)?,
            "-w" => config.width = positive(&name, value()?)?,
            "-f" => config.fps = positive(&name, value()?)?,
            "--file" => config.input = Some(PathBuf::from(value()?)),
            "--seed" => {
                let v = value()?;
                config.seed = Some(v.parse().map_err(|_| LifeError::InvalidNumber {
                    option: name.clone(),
                    value: v,
                })?);
            }
            "--usage" | "--help" | "--about" if inline.is_some() => {
                return Err(LifeError::InvalidOption(arg));
            }
            "--usage" => {
                info.get_or_insert(Command::Usage);
            }
            "--help" => {
                info.get_or_insert(|_| Command::Help);
            }
            "--about" => {
                info.get_or_insert(|_| Command::About);
            }
            _ => return Err(LifeError::InvalidOption(arg)),
        }
    }
    Ok(match info {
        Some(command) => command(config),
        None => Command::Run(config),
    })
}

/// `--name=value` and `-nvalue` forms.
fn split_inline_value(arg: &str) -> (String, Option<String>) {
    if arg.starts_with("--") {
        if let Some((name, value)) = arg.split_once('=') {
            return (name.to_string(), Some(value.to_string()));
        }
    } else if arg.starts_with('-') && arg.len() > 2 && arg.is_char_boundary(2) {
        return (arg[..2].to_string(), Some(arg[2..].to_string()));
    }
    (arg.to_string(), None)
}

fn positive<T>(option: &str, value: String) -> Result<T, LifeError>
where
    T: std::str::FromStr + PartialOrd + From<u8>,
{
    match value.parse::<T>() {
        Ok(v) if v >= T::from(1) => Ok(v),
        _ => Err(LifeError::InvalidNumber {
            option: option.to_string(),
            value,
        }),
    }
}

pub fn about() -> String {
    format!(
        "DESCRIPTION:\n\
         1. Simulates Conway's Game of Life (rules B3/S23) on a bounded field\n\
         2. Rules: https://en.wikipedia.org/wiki/Conway%27s_Game_of_Life#Rules\n\
         3. The initial field is either random or read from a text file\n\
         4. The file holds a matrix of space separated 0/1 values, one row per line\n\
         5. For the options and controls run:\n\t{BIN} --usage\n"
    )
}

pub fn help() -> String {
    format!(
        "For usage of this program run:\n\t{BIN} --usage\n\
         For a description of this program run:\n\t{BIN} --about\n"
    )
}

pub fn usage(config: &Config) -> String {
    format!(
        "USAGE:\n\t{BIN} [OPTIONS]\n\n\
         OPTIONS:\n\
         \t-h <height>\t\tfield height in cells\n\
         \t-w <width>\t\tfield width in cells\n\
         \t-f <fps>\t\tgenerations per second\n\
         \t--file <path>\t\tread the initial field from a text file (overrides -h and -w)\n\
         \t--seed <u64>\t\tseed for the random initial field\n\
         \t--usage\t\t\tprint this manual\n\
         \t--help\t\t\tprint where to find help\n\
         \t--about\t\t\tprint the description\n\n\
         EXAMPLE:\n\t{BIN} -h 10 -w 10 -f 5 --file data.txt\n\n\
         DEFAULTS:\n\
         \theight = {}\n\
         \twidth = {}\n\
         \tfps = {}\n\
         \tinitial field = random {}x{} matrix\n\n\
         CONTROLS:\n\
         \tStart / Stop\t\trun or pause the simulation\n\
         \tNext step\t\tadvance one generation while paused\n\
         \tLoad / Save\t\tread or write the field as a text matrix\n\
         \tRandomize\t\treplace the field with a random one of the same size\n\
         \tSpace, E\t\tnext step, start/stop\n",
        config.height, config.width, config.fps, config.height, config.width,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, LifeError> {
        parse_args(args.iter().copied())
    }

    #[test]
    fn defaults() {
        assert_eq!(parse(&[]).unwrap(), Command::Run(Config::default()));
    }

    #[test]
    fn short_and_long_options() {
        let args = ["-h", "10", "-w20", "-f", "5", "--file=in.txt", "--seed", "7"];
        let Command::Run(config) = parse(&args).unwrap() else {
            panic!("expected run");
        };
        assert_eq!((config.height, config.width, config.fps), (10, 20, 5));
        assert_eq!(config.input, Some(PathBuf::from("in.txt")));
        assert_eq!(config.seed, Some(7));

        let Command::Run(config) = parse(&["--file", "grid.txt"]).unwrap() else {
            panic!("expected run");
        };
        assert_eq!(config.input, Some(PathBuf::from("grid.txt")));
    }

    #[test]
    fn informational_flags() {
        assert_eq!(parse(&["--help"]).unwrap(), Command::Help);
        assert_eq!(parse(&["--about", "--help"]).unwrap(), Command::About);
        let Command::Usage(config) = parse(&["-h", "4", "--usage"]).unwrap() else {
            panic!("expected usage");
        };
        assert_eq!(config.height, 4);
        assert!(usage(&config).contains("height = 4"));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(parse(&["-x"]), Err(LifeError::InvalidOption(_))));
        assert!(matches!(parse(&["stray"]), Err(LifeError::InvalidOption(_))));
        assert!(matches!(parse(&["-h"]), Err(LifeError::MissingValue(_))));
        for args in [&["-w", "0"], &["-f", "-3"], &["--seed", "abc"]] {
            assert!(matches!(parse(args), Err(LifeError::InvalidNumber { .. })));
        }
        // errors win over informational flags
        assert!(parse(&["--help", "-q"]).is_err());
    }
}
