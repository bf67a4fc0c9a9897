//! Splitting raw process arguments into a command token and its arguments.

/// Separate the command token from any subsequent arguments and return
/// both.
///
/// `tokens` is the argument vector excluding the program's own path. The
/// returned argument slice is always concrete, possibly empty, so callers
/// never need to distinguish "no arguments" from "empty arguments".
pub fn split_args(tokens: &[String]) -> (&str, &[String]) {
    match tokens {
        [] => ("", &[]),
        [command, rest @ ..] => (command.as_str(), rest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_split_args_empty() {
        let (command, rest) = split_args(&[]);
        assert_eq!(command, "");
        assert!(rest.is_empty());
    }

    #[test]
    fn test_split_args_command_only() {
        let tokens = strings(&["cat"]);
        let (command, rest) = split_args(&tokens);
        assert_eq!(command, "cat");
        assert!(rest.is_empty());
    }

    #[test]
    fn test_split_args_one_argument() {
        let tokens = strings(&["cat", "file1"]);
        let (command, rest) = split_args(&tokens);
        assert_eq!(command, "cat");
        assert_eq!(rest, strings(&["file1"]));
    }

    #[test]
    fn test_split_args_many_arguments() {
        let tokens = strings(&["cat", "file1", "file2"]);
        let (command, rest) = split_args(&tokens);
        assert_eq!(command, "cat");
        assert_eq!(rest, strings(&["file1", "file2"]));
    }
}
