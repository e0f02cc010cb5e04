use crate::error::ApiError;
use crate::models::{MemoryUsage, RuntimeInfo};
use std::env::consts::{ARCH, OS};

/// `rustc --version` of the compiler that built this binary, e.g.
/// `rustc 1.85.0 (4d91de4e4 2025-02-17)`.
pub const RUNTIME_VERSION: &str = env!("RUSTC_VERSION");

#[cfg(target_os = "linux")]
const PROC_STATUS: &str = "/proc/self/status";

/// Reads the runtime version, platform and memory counters of this process.
pub fn runtime_info() -> Result<RuntimeInfo, ApiError> {
    Ok(RuntimeInfo::new(RUNTIME_VERSION, OS, ARCH, memory_usage()?))
}

#[cfg(target_os = "linux")]
pub fn memory_usage() -> Result<MemoryUsage, ApiError> {
    let status = std::fs::read_to_string(PROC_STATUS)?;
    parse_proc_status(&status)
}

// No supported counter source; every field stays 0.
#[cfg(not(target_os = "linux"))]
pub fn memory_usage() -> Result<MemoryUsage, ApiError> {
    Ok(MemoryUsage::default())
}

/// Parses the `Vm*` lines of a Linux `/proc/<pid>/status` file.
///
/// Values are reported by the kernel in kB and converted to bytes. Lines that
/// are absent leave the matching counter at 0; a tracked line whose value is
/// not `<number> kB` is an error.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
pub fn parse_proc_status(status: &str) -> Result<MemoryUsage, ApiError> {
    let mut usage = MemoryUsage::default();

    for line in status.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };

        let field = match key.trim() {
            "VmRSS" => &mut usage.rss,
            "VmSize" => &mut usage.heap_total,
            "VmData" => &mut usage.heap_used,
            "VmHWM" => &mut usage.peak_rss,
            _ => continue,
        };

        *field = parse_kilobytes(value)
            .ok_or_else(|| ApiError::MalformedMemoryStats(line.to_string()))?;
    }

    Ok(usage)
}

fn parse_kilobytes(value: &str) -> Option<u64> {
    let kilobytes = value.trim().strip_suffix("kB")?.trim().parse::<u64>().ok()?;
    kilobytes.checked_mul(1024)
}
