use crate::error::*;
use snafu::{ensure, OptionExt, ResultExt};
use std::io::{BufRead, Write};
use tracing::{debug, trace};
use word_trie_core::{write_word_list, Trie};

/// A query read from the input stream.
#[derive(Debug, Eq, PartialEq)]
enum Command<'a> {
    /// Insert a word.
    Add(&'a str),
    /// Check whether a word has been inserted.
    Find(&'a str),
    /// List the words containing a substring.
    Contains(&'a str),
    /// List the words starting with a prefix.
    Prefix(&'a str),
    /// Dump all the words, one per line.
    Print,
    /// Count the words.
    Count,
}

/// Return an error if an argument has been given to an action which does not take any.
fn ensure_no_argument(line: &str, argument: Option<&str>) -> Result<()> {
    ensure!(
        argument.is_none(),
        CommandParse {
            line,
            cause: "This action does not take an argument",
        }
    );
    Ok(())
}

/// Parse a command line, without its line terminator.
///
/// The argument is everything after the first space, kept as is so that
/// words containing spaces can be queried. A missing argument is the empty string.
fn parse_command_line(line: &str) -> Result<Command<'_>> {
    let (action, argument) = match line.find(' ') {
        Some(index) => (&line[..index], Some(&line[index + 1..])),
        None => (line, None),
    };

    ensure!(
        !action.is_empty(),
        CommandParse {
            line,
            cause: "No action found",
        }
    );

    let command = match action {
        "add" => Command::Add(argument.unwrap_or_default()),
        "find" => Command::Find(argument.unwrap_or_default()),
        "contains" => Command::Contains(argument.unwrap_or_default()),
        "prefix" => Command::Prefix(argument.unwrap_or_default()),
        "print" => {
            ensure_no_argument(line, argument)?;
            Command::Print
        }
        "count" => {
            ensure_no_argument(line, argument)?;
            Command::Count
        }
        _ => None.context(CommandParse {
            line,
            cause: "Action not recognized",
        })?,
    };

    Ok(command)
}

/// Write a list of words as a JSON array on a single line.
fn write_json_words<W: Write>(words: &[&str], output: &mut W) -> Result<()> {
    let json = serde_json::to_string(words).context(JsonFormat)?;
    writeln!(output, "{}", json).context(OutputWrite)
}

/// Execute a command on the trie and write its result in the output stream.
fn process_command<W: Write>(trie: &mut Trie, command: Command, output: &mut W) -> Result<()> {
    trace!(?command, "processing command");
    match command {
        Command::Add(word) => trie.insert(word),
        Command::Find(word) => writeln!(output, "{}", trie.contains(word)).context(OutputWrite)?,
        Command::Contains(substring) => {
            write_json_words(&trie.words_containing(substring), output)?
        }
        Command::Prefix(prefix) => write_json_words(&trie.words_with_prefix(prefix), output)?,
        Command::Print => write_word_list(&trie.all_words(), output).context(Output)?,
        Command::Count => writeln!(output, "{}", trie.len()).context(OutputWrite)?,
    }
    output.flush().context(OutputWrite)
}

/// Process the queries received in the input stream until its end,
/// and write their results in the output stream.
///
/// Malformed commands are reported in the [standard error stream](std::io::stderr)
/// and do not stop the processing.
pub fn process_queries<R: BufRead, W: Write>(
    trie: &mut Trie,
    mut input: R,
    mut output: W,
) -> Result<()> {
    const LINE_CAP: usize = 30;

    let mut line = String::with_capacity(LINE_CAP);
    let mut nb_queries = 0usize;
    loop {
        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => break, // EOF reached
            Ok(_) => {
                let command_line = line.trim_end_matches(&['\r', '\n'][..]);
                let command = match parse_command_line(command_line) {
                    Ok(c) => c,
                    Err(e) => {
                        eprintln!("> {}", e);
                        continue;
                    }
                };

                process_command(trie, command, &mut output)?;
                nb_queries += 1;
            }
            Err(e) => Err(e).context(Stdin)?,
        }
    }

    debug!(queries = nb_queries, words = trie.len(), "input stream closed");
    Ok(())
}

/// Process the queries received in the [standard input stream](std::io::stdin)
/// and write their results in the [standard output stream](std::io::stdout).
pub fn process_stdin_queries(trie: &mut Trie) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    process_queries(trie, stdin.lock(), stdout.lock())
}

#[cfg(test)]
mod test {
    use super::*;

    fn run(trie: &mut Trie, input: &str) -> String {
        let mut output = Vec::new();
        process_queries(trie, input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!(parse_command_line("add isaia").unwrap(), Command::Add("isaia"));
        assert_eq!(parse_command_line("find new york").unwrap(), Command::Find("new york"));
        assert_eq!(parse_command_line("contains").unwrap(), Command::Contains(""));
        assert_eq!(parse_command_line("contains ").unwrap(), Command::Contains(""));
        assert_eq!(parse_command_line("prefix is").unwrap(), Command::Prefix("is"));
        assert_eq!(parse_command_line("print").unwrap(), Command::Print);
        assert_eq!(parse_command_line("count").unwrap(), Command::Count);
    }

    #[test]
    fn parse_invalid_commands() {
        assert!(matches!(
            parse_command_line(""),
            Err(Error::CommandParse { .. })
        ));
        assert!(matches!(
            parse_command_line(" isaia"),
            Err(Error::CommandParse { .. })
        ));
        assert!(matches!(
            parse_command_line("delete isaia"),
            Err(Error::CommandParse { .. })
        ));
        assert!(matches!(
            parse_command_line("print all"),
            Err(Error::CommandParse { .. })
        ));
        assert!(matches!(
            parse_command_line("count "),
            Err(Error::CommandParse { .. })
        ));
    }

    #[test]
    fn isaia_session() {
        let mut trie = Trie::new();
        let output = run(
            &mut trie,
            "add isaia\nadd isaias\nadd isaiat\nfind max\nfind isaia\nprint\ncontains a\ncount\n",
        );

        assert_eq!(
            output,
            "false\ntrue\nisaia\nisaias\nisaiat\n[\"isaia\",\"isaias\",\"isaiat\"]\n3\n"
        );
        assert!(!trie.contains("max"));
        assert_eq!(trie.node_count(), 8);
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let mut trie: Trie = vec!["cat", "concat"].into_iter().collect();
        let output = run(&mut trie, "oops\r\ncontains cat\r\n\nprefix co\r\nprefix x");

        assert_eq!(output, "[\"cat\",\"concat\"]\n[\"concat\"]\n[]\n");
    }

    #[test]
    fn empty_word_and_escaping() {
        let mut trie = Trie::new();
        let output = run(&mut trie, "add \nadd say \"hi\"\nfind \ncontains\n");

        assert_eq!(output, "true\n[\"\",\"say \\\"hi\\\"\"]\n");
    }
}
