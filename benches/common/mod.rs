//! Input generators and memory sampling shared by the benches.

#![allow(dead_code)]

use rand::{rngs::StdRng, Rng, SeedableRng};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

/// Random symbols over an alphabet of `alphabet` letters starting at `b'a'`,
/// with `planted` mirrored windows of length `window` overwritten in place.
///
/// Short-radius noise exercises the mirror-seeded path; the planted windows
/// force long extensions that push the right edge in big jumps.
pub fn planted_mirrors(seed: u64, len: usize, alphabet: u8, planted: usize, window: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut s: Vec<u8> = (0..len).map(|_| b'a' + rng.gen_range(0..alphabet)).collect();
    if window < 2 || window > len {
        return s;
    }
    for _ in 0..planted {
        let lo = rng.gen_range(0..=len - window);
        for d in 0..window / 2 {
            s[lo + window - 1 - d] = s[lo + d];
        }
    }
    s
}

/// Resident set size of this process in the units sysinfo reports.
pub fn rss(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    get_current_pid()
        .ok()
        .and_then(|pid| sys.process(pid))
        .map(|p| p.memory())
        .unwrap_or(0)
}
