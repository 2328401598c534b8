use std::collections::BTreeMap;
use std::env;
use std::time::Instant;

use palindrome_dp::utils::{is_palindrome, naive_longest};
use palindrome_dp::{Longest, PalindromeFinder};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

const SIZES: &[usize] = &[1 << 10, 1 << 12, 1 << 14, 1 << 16, 1 << 18, 1 << 20];

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("scale_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Longest-Palindrome Scaling Probe");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("Runs the linear sweep over several input families and sizes:");
    eprintln!(
        "  • Correctness: results match a quadratic center-expansion baseline (up to size {})",
        options.verify_limit
    );
    eprintln!("  • Performance: wall time should grow linearly with input size");
    eprintln!("  • Memory: RSS delta should stay proportional to input size");
    eprintln!();
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut sys = System::new();
    let finder = PalindromeFinder::with_max_len(*SIZES.last().unwrap_or(&1) * 2);
    let families: &[(&'static str, fn(usize) -> Vec<u8>)] = &[
        ("cyclic_dna", cyclic_dna),
        ("all_equal", all_equal),
        ("alternating", alternating),
        ("fibonacci_word", fibonacci_word),
        ("mirrored_block", mirrored_block),
    ];

    let mut measurements = Vec::new();
    for (idx, &(name, generate)) in families.iter().enumerate() {
        eprintln!("[{}/{}] Family {}...", idx + 1, families.len(), name);
        measurements.extend(run_family(&options, &finder, &mut sys, name, generate));
        eprintln!();
    }

    print_summary(&measurements, &options);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("scale_probe output error: {err}");
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 4096usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = parse_limit(value)?;
            } else if arg == "--verify-limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --verify-limit".to_string())?
                    .into();
                verify_limit = parse_limit(&value)?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            verify_limit,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --release --bin scale_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Maximum input length to verify against the quadratic baseline; 0 disables (default: 4096)
  -h, --help                    Print this help message
"
        );
    }
}

fn parse_limit(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| "verify limit must be a non-negative integer (0 disables verification)".to_string())
}

#[derive(Clone, Copy)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

struct Measurement {
    family: &'static str,
    len: usize,
    result: Longest,
    wall_s: f64,
    rss_delta_kib: u64,
    status: VerificationStatus,
    detail: Option<String>,
}

#[derive(Clone, Copy)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

fn run_family(
    options: &Options,
    finder: &PalindromeFinder<u8>,
    sys: &mut System,
    family: &'static str,
    generate: fn(usize) -> Vec<u8>,
) -> Vec<Measurement> {
    let total = SIZES.len();
    SIZES
        .iter()
        .enumerate()
        .map(|(idx, &len)| {
            eprint!("      [{}/{}] size {}... ", idx + 1, total, len);
            let input = generate(len);

            let before = rss_kib(sys);
            let start = Instant::now();
            let outcome = finder.find(&input);
            let wall_s = start.elapsed().as_secs_f64();
            let rss_delta_kib = rss_kib(sys).saturating_sub(before);

            let (result, status, detail) = match outcome {
                Ok(found) => {
                    let (status, detail) = verify(options, &input, found);
                    (found, status, detail)
                }
                Err(err) => (
                    Longest::default(),
                    VerificationStatus::Failed,
                    Some(err.to_string()),
                ),
            };
            eprintln!(
                "{} start={}, length={}, time={:.3}s, status={}",
                status.icon(),
                result.start,
                result.length,
                wall_s,
                status.label()
            );
            Measurement {
                family,
                len,
                result,
                wall_s,
                rss_delta_kib,
                status,
                detail,
            }
        })
        .collect()
}

fn verify(options: &Options, input: &[u8], found: Longest) -> (VerificationStatus, Option<String>) {
    if found.end() > input.len() || !is_palindrome(found.slice(input)) {
        return (
            VerificationStatus::Failed,
            Some(format!("({}, {}) is not a palindrome of the input", found.start, found.length)),
        );
    }
    if input.len() > options.verify_limit {
        return (VerificationStatus::NotChecked, None);
    }
    let baseline = naive_longest(input);
    if baseline == found {
        (VerificationStatus::Passed, None)
    } else {
        (
            VerificationStatus::Failed,
            Some(format!(
                "expected ({}, {}), got ({}, {})",
                baseline.start, baseline.length, found.start, found.length
            )),
        )
    }
}

fn print_summary(measurements: &[Measurement], options: &Options) {
    eprintln!("{}", "=".repeat(80));
    eprintln!("Summary");
    eprintln!("{}", "=".repeat(80));

    let mut passed = 0;
    let mut failed = 0;
    let mut not_checked = 0;
    for m in measurements {
        match m.status {
            VerificationStatus::Passed => passed += 1,
            VerificationStatus::Failed => failed += 1,
            VerificationStatus::NotChecked => not_checked += 1,
        }
    }
    eprintln!("  ✓ Passed: {passed}");
    eprintln!("  ✗ Failed: {failed}");
    eprintln!(
        "  ○ Not checked (size > {}): {not_checked}",
        options.verify_limit
    );
    for m in measurements {
        if matches!(m.status, VerificationStatus::Failed) {
            eprintln!(
                "  ✗ {} (len={}): {}",
                m.family,
                m.len,
                m.detail.as_deref().unwrap_or("")
            );
        }
    }
    eprintln!();

    let mut by_family: BTreeMap<&str, Vec<&Measurement>> = BTreeMap::new();
    for m in measurements {
        by_family.entry(m.family).or_default().push(m);
    }
    for (family, ms) in &by_family {
        // Time per symbol should stay flat for a linear algorithm.
        let ns_per_symbol: Vec<String> = ms
            .iter()
            .map(|m| format!("{:.1}", m.wall_s * 1e9 / m.len.max(1) as f64))
            .collect();
        let max_mem = ms.iter().map(|m| m.rss_delta_kib).max().unwrap_or(0);
        eprintln!("  {family}:");
        eprintln!("    ns/symbol: {}", ns_per_symbol.join(", "));
        eprintln!("    max RSS delta: {max_mem} KiB");
    }
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("family,len,start,length,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{},{},{:.6},{},{},\"{}\"",
            m.family,
            m.len,
            m.result.start,
            m.result.length,
            m.wall_s,
            m.rss_delta_kib,
            m.status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let col1 = measurements
        .iter()
        .map(|m| m.family.len())
        .max()
        .unwrap_or(0)
        .max("family".len());

    println!(
        "{:<col1$}  {:>8}  {:>8}  {:>8}  {:>10}  {:>14}  {:>12}  detail",
        "family", "len", "start", "length", "wall_s", "rss_delta_kib", "status",
    );
    println!("{:-<width$}", "", width = col1 + 82);
    for m in measurements {
        println!(
            "{:<col1$}  {:>8}  {:>8}  {:>8}  {:>10.6}  {:>14}  {:>12}  {}",
            m.family,
            m.len,
            m.result.start,
            m.result.length,
            m.wall_s,
            m.rss_delta_kib,
            m.status.label(),
            m.detail.as_deref().unwrap_or(""),
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = m.detail.as_ref().map(|s| s.replace('"', "'"));
        println!(
            "  {{\"family\":\"{}\",\"len\":{},\"start\":{},\"length\":{},\"wall_s\":{:.6},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.family,
            m.len,
            m.result.start,
            m.result.length,
            m.wall_s,
            m.rss_delta_kib,
            m.status.label(),
            match detail {
                Some(ref d) => format!("\"{d}\""),
                None => "null".to_string(),
            },
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory()
    } else {
        0
    }
}

fn cyclic_dna(len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len).map(|i| ALPHABET[(i * i + i / 7) % ALPHABET.len()]).collect()
}

fn all_equal(len: usize) -> Vec<u8> {
    vec![b'a'; len]
}

fn alternating(len: usize) -> Vec<u8> {
    (0..len).map(|i| if i % 2 == 0 { b'a' } else { b'b' }).collect()
}

/// Prefix of the infinite Fibonacci word, rich in long palindromes.
fn fibonacci_word(len: usize) -> Vec<u8> {
    let mut prev = vec![b'b'];
    let mut cur = vec![b'a'];
    while cur.len() < len {
        let mut next = cur.clone();
        next.extend_from_slice(&prev);
        prev = cur;
        cur = next;
    }
    cur.truncate(len);
    cur
}

/// Noise around a mirrored block in the middle third.
fn mirrored_block(len: usize) -> Vec<u8> {
    let mut v = cyclic_dna(len);
    let third = len / 3;
    let (lo, hi) = (third, len - third);
    for i in 0..(hi - lo) / 2 {
        v[hi - 1 - i] = v[lo + i];
    }
    v
}
