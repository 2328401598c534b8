use std::env;
use std::io::{self, Read};

use palindrome_dp::{EmptyPolicy, Longest, PalindromeFinderBuilder, DEFAULT_MAX_LEN};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("longest_palindrome: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    let token = match options.input.clone() {
        Some(token) => token.into_bytes(),
        None => match read_first_token(io::stdin().lock()) {
            Ok(token) => token,
            Err(err) => {
                eprintln!("longest_palindrome: failed to read stdin: {err}");
                std::process::exit(1);
            }
        },
    };

    let outcome = if options.chars {
        run_chars(&options, &token)
    } else {
        run_bytes(&options, &token)
    };

    match outcome {
        Ok((longest, text)) => options.format.print(longest, options.show.then_some(text.as_str())),
        Err(err) => {
            eprintln!("longest_palindrome: {err}");
            std::process::exit(1);
        }
    }
}

struct Options {
    input: Option<String>,
    chars: bool,
    max_len: usize,
    reject: Option<char>,
    empty_policy: EmptyPolicy,
    format: OutputFormat,
    show: bool,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut options = Options {
            input: None,
            chars: false,
            max_len: DEFAULT_MAX_LEN,
            reject: None,
            empty_policy: EmptyPolicy::Empty,
            format: OutputFormat::Plain,
            show: false,
        };

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if arg == "--chars" {
                options.chars = true;
            } else if arg == "--show" {
                options.show = true;
            } else if arg == "--legacy-empty" {
                options.empty_policy = EmptyPolicy::Legacy;
            } else if let Some(value) = arg.strip_prefix("--input=") {
                options.input = Some(value.to_string());
            } else if arg == "--input" {
                options.input = Some(next_value(&mut args, "--input")?);
            } else if let Some(value) = arg.strip_prefix("--max-len=") {
                options.max_len = parse_max_len(value)?;
            } else if arg == "--max-len" {
                options.max_len = parse_max_len(&next_value(&mut args, "--max-len")?)?;
            } else if let Some(value) = arg.strip_prefix("--reject=") {
                options.reject = Some(parse_reject(value)?);
            } else if arg == "--reject" {
                options.reject = Some(parse_reject(&next_value(&mut args, "--reject")?)?);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                options.format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                options.format = OutputFormat::from_str(&next_value(&mut args, "--format")?)?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        if !options.chars {
            if let Some(c) = options.reject {
                if !c.is_ascii() {
                    return Err(format!("--reject '{c}' is not a single byte; use --chars"));
                }
            }
        }

        Ok(options)
    }

    fn print_help() {
        println!(
            "\
Usage: longest_palindrome [options] [< input]

Reads the first whitespace-delimited token from stdin (or --input) and prints
the 0-based start and the length of its longest palindromic substring.

Options:
  --input <TOKEN>           Use TOKEN instead of reading stdin
  --chars                   Compare Unicode scalar values instead of bytes
  --max-len <N>             Reject inputs longer than N symbols (default: {DEFAULT_MAX_LEN})
  --reject <C>              Reject inputs containing the symbol C (e.g. '#')
  --legacy-empty            Report '0 1' for empty input instead of '0 0'
  --format <plain|json>     Output format (default: plain)
  --show                    Also print the palindrome itself
  -h, --help                Print this help message

Examples:
  echo babad | longest_palindrome
  longest_palindrome --chars --show --input 'xyzénéq'
"
        );
    }
}

fn next_value<I, T>(args: &mut I, flag: &str) -> Result<String, String>
where
    I: Iterator<Item = T>,
    T: Into<String>,
{
    args.next()
        .map(Into::into)
        .ok_or_else(|| format!("missing value after {flag}"))
}

fn parse_max_len(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err("max length must be a positive integer".to_string()),
    }
}

fn parse_reject(value: &str) -> Result<char, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("--reject expects a single symbol, got '{value}'")),
    }
}

#[derive(Clone, Copy)]
enum OutputFormat {
    Plain,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "plain" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn print(self, longest: Longest, text: Option<&str>) {
        match self {
            OutputFormat::Plain => {
                println!("{} {}", longest.start, longest.length);
                if let Some(text) = text {
                    println!("{text}");
                }
            }
            OutputFormat::Json => {
                let text = match text {
                    Some(t) => format!(",\"text\":\"{}\"", escape_json(t)),
                    None => String::new(),
                };
                println!(
                    "{{\"start\":{},\"length\":{}{}}}",
                    longest.start, longest.length, text
                );
            }
        }
    }
}

fn escape_json(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// First run of non-whitespace bytes; the input need not be UTF-8.
fn read_first_token<R: Read>(mut reader: R) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    Ok(buf
        .split(|b| b.is_ascii_whitespace())
        .find(|token| !token.is_empty())
        .unwrap_or_default()
        .to_vec())
}

fn run_bytes(options: &Options, token: &[u8]) -> Result<(Longest, String), String> {
    let mut builder = PalindromeFinderBuilder::new()
        .with_max_len(options.max_len)
        .with_empty_policy(options.empty_policy);
    if let Some(c) = options.reject {
        // ASCII-only, checked in Options::parse.
        builder = builder.with_reserved(c as u8);
    }
    let finder = builder.build();
    let longest = finder.find(token).map_err(|e| e.to_string())?;
    let end = longest.end().min(token.len());
    let text = String::from_utf8_lossy(&token[longest.start.min(end)..end]).into_owned();
    Ok((longest, text))
}

fn run_chars(options: &Options, token: &[u8]) -> Result<(Longest, String), String> {
    let token = std::str::from_utf8(token)
        .map_err(|e| format!("--chars needs UTF-8 input: {e}"))?;
    let mut builder = PalindromeFinderBuilder::new()
        .with_max_len(options.max_len)
        .with_empty_policy(options.empty_policy);
    if let Some(c) = options.reject {
        builder = builder.with_reserved(c);
    }
    let finder = builder.build();
    if token.len() > options.max_len {
        finder
            .check_len(token.chars().count())
            .map_err(|e| e.to_string())?;
    }
    let chars: Vec<char> = token.chars().collect();
    let longest = finder.find(&chars).map_err(|e| e.to_string())?;
    let end = longest.end().min(chars.len());
    let text: String = chars[longest.start.min(end)..end].iter().collect();
    Ok((longest, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Options, String> {
        Options::parse(args.iter().copied())
    }

    #[test]
    fn defaults_without_arguments() {
        let options = parse(&[]).unwrap();
        assert_eq!(options.input, None);
        assert!(!options.chars);
        assert!(!options.show);
        assert_eq!(options.max_len, DEFAULT_MAX_LEN);
        assert_eq!(options.reject, None);
        assert_eq!(options.empty_policy, EmptyPolicy::Empty);
        assert!(matches!(options.format, OutputFormat::Plain));
    }

    #[test]
    fn equals_and_separate_value_forms_agree() {
        let joined = parse(&["--input=abba", "--max-len=7", "--reject=#", "--format=json"]).unwrap();
        let split = parse(&[
            "--input", "abba", "--max-len", "7", "--reject", "#", "--format", "json",
        ])
        .unwrap();
        for options in [joined, split] {
            assert_eq!(options.input.as_deref(), Some("abba"));
            assert_eq!(options.max_len, 7);
            assert_eq!(options.reject, Some('#'));
            assert!(matches!(options.format, OutputFormat::Json));
        }
    }

    #[test]
    fn flags_are_recognised() {
        let options = parse(&["--chars", "--show", "--legacy-empty"]).unwrap();
        assert!(options.chars);
        assert!(options.show);
        assert_eq!(options.empty_policy, EmptyPolicy::Legacy);
    }

    #[test]
    fn zero_max_len_is_rejected() {
        assert!(parse(&["--max-len", "0"]).is_err());
        assert!(parse(&["--max-len=0"]).is_err());
        assert!(parse(&["--max-len", "many"]).is_err());
    }

    #[test]
    fn missing_values_and_unknown_arguments_fail() {
        assert!(parse(&["--input"]).is_err());
        assert!(parse(&["--format", "xml"]).is_err());
        assert!(parse(&["--reject", "ab"]).is_err());
        assert!(parse(&["--bogus"]).is_err());
    }

    #[test]
    fn non_ascii_reject_needs_chars_mode() {
        assert!(parse(&["--reject", "é"]).is_err());
        let options = parse(&["--chars", "--reject", "é"]).unwrap();
        assert_eq!(options.reject, Some('é'));
    }

    #[test]
    fn json_escaping() {
        assert_eq!(escape_json("plain"), "plain");
        assert_eq!(escape_json(r#"a"b\c"#), r#"a\"b\\c"#);
        assert_eq!(escape_json("x\ny\u{1}"), "x\\u000ay\\u0001");
        assert_eq!(escape_json("日本"), "日本");
    }

    #[test]
    fn first_token_skips_leading_whitespace_and_keeps_raw_bytes() {
        let token = read_first_token(&b"  \n a\xffa rest"[..]).unwrap();
        assert_eq!(token, b"a\xffa");
        assert!(read_first_token(&b" \t\n"[..]).unwrap().is_empty());
    }

    #[test]
    fn bytes_mode_accepts_invalid_utf8() {
        let options = parse(&[]).unwrap();
        let (longest, _) = run_bytes(&options, b"a\xffa").unwrap();
        assert_eq!(longest, Longest::new(0, 3));
    }

    #[test]
    fn chars_mode_rejects_invalid_utf8() {
        let options = parse(&["--chars"]).unwrap();
        assert!(run_chars(&options, b"a\xffa").is_err());
    }

    #[test]
    fn legacy_empty_reports_one_with_empty_text() {
        let options = parse(&["--legacy-empty"]).unwrap();
        let (longest, text) = run_bytes(&options, b"").unwrap();
        assert_eq!(longest, Longest::new(0, 1));
        assert_eq!(text, "");

        let options = parse(&["--legacy-empty", "--chars"]).unwrap();
        let (longest, text) = run_chars(&options, b"").unwrap();
        assert_eq!(longest, Longest::new(0, 1));
        assert_eq!(text, "");
    }

    #[test]
    fn run_modes_apply_limits_and_reserved_symbols() {
        let options = parse(&["--max-len", "3"]).unwrap();
        assert!(run_bytes(&options, b"abba").is_err());

        let options = parse(&["--chars", "--max-len", "2"]).unwrap();
        // Four bytes, two chars.
        let (longest, text) = run_chars(&options, "éé".as_bytes()).unwrap();
        assert_eq!(longest, Longest::new(0, 2));
        assert_eq!(text, "éé");
        assert!(run_chars(&options, "ééé".as_bytes()).is_err());

        let options = parse(&["--reject", "#"]).unwrap();
        let err = run_bytes(&options, b"a#a").unwrap_err();
        assert!(err.contains("position 1"), "{err}");
    }
}
