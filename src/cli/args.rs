/// Flags that are only honoured as the sole argument
pub const STANDALONE_FLAGS: [&str; 4] = ["-V", "--version", "-h", "--help"];

/// How the process was invoked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// A lone `-V`, `--version`, `-h` or `--help`
    Flag(String),
    /// Everything else is a move list, taken verbatim
    Play(Vec<String>),
}

/// Split program arguments (without the program name) into a flag or a move list.
///
/// A lone flag can never be a valid move list, so it is read as a flag. Any
/// longer list, including names like `-V` or `--`, is played as given.
pub fn classify_args<I, S>(args: I) -> Invocation
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args: Vec<String> = args.into_iter().map(Into::into).collect();
    if args.len() == 1 && STANDALONE_FLAGS.contains(&args[0].as_str()) {
        return Invocation::Flag(args.remove(0));
    }
    Invocation::Play(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lone_flags() {
        for flag in STANDALONE_FLAGS {
            assert_eq!(classify_args([flag]), Invocation::Flag(flag.to_string()));
        }
    }

    #[test]
    fn test_flag_like_moves_are_played() {
        for args in [
            vec!["-V", "a", "b"],
            vec!["--help", "a", "b"],
            vec!["--", "a", "b"],
            vec!["a", "b", "--version"],
        ] {
            let expected: Vec<String> = args.iter().map(|s| s.to_string()).collect();
            assert_eq!(classify_args(args), Invocation::Play(expected));
        }
    }

    #[test]
    fn test_empty_and_single_move() {
        assert_eq!(classify_args(Vec::<String>::new()), Invocation::Play(vec![]));
        assert_eq!(classify_args(["--"]), Invocation::Play(vec!["--".to_string()]));
        assert_eq!(classify_args(["rock"]), Invocation::Play(vec!["rock".to_string()]));
    }
}
