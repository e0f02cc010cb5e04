use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Runtime Information
///
/// Snapshot of the running process: which runtime built it, which platform
/// it runs on, and how much memory it holds.
///
/// `nodeVersion` carries the same value as `runtimeVersion`; existing clients
/// of this API read the former.
///
/// ## Example JSON
/// ```json
/// {
///   "runtimeVersion": "rustc 1.85.0 (4d91de4e4 2025-02-17)",
///   "nodeVersion": "rustc 1.85.0 (4d91de4e4 2025-02-17)",
///   "platform": "linux",
///   "arch": "x86_64",
///   "memory": {
///     "rss": 9437184,
///     "heapTotal": 1123876864,
///     "heapUsed": 42532864,
///     "external": 0,
///     "arrayBuffers": 0,
///     "peakRss": 9437184
///   }
/// }
/// ```
#[derive(Serialize, Debug, Clone, PartialEq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeInfo {
    pub runtime_version: String,
    pub node_version: String,
    pub platform: String,
    pub arch: String,
    pub memory: MemoryUsage,
}

impl RuntimeInfo {
    pub fn new(
        runtime_version: impl Into<String>,
        platform: impl Into<String>,
        arch: impl Into<String>,
        memory: MemoryUsage,
    ) -> Self {
        let runtime_version = runtime_version.into();
        Self {
            node_version: runtime_version.clone(),
            runtime_version,
            platform: platform.into(),
            arch: arch.into(),
            memory,
        }
    }
}

/// Memory counters for the current process, in bytes.
///
/// - `rss`: resident set size
/// - `heapTotal`: virtual memory reserved by the process
/// - `heapUsed`: data segment (heap and anonymous mappings)
/// - `external`, `arrayBuffers`: always 0, there is no managed heap
/// - `peakRss`: high-water mark of the resident set
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemoryUsage {
    pub rss: u64,
    pub heap_total: u64,
    pub heap_used: u64,
    pub external: u64,
    pub array_buffers: u64,
    pub peak_rss: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_info_uses_camel_case_keys() {
        let info = RuntimeInfo::new(
            "rustc 1.85.0 (4d91de4e4 2025-02-17)",
            "linux",
            "x86_64",
            MemoryUsage {
                rss: 4096,
                heap_total: 8192,
                heap_used: 2048,
                ..MemoryUsage::default()
            },
        );

        let json = serde_json::to_value(&info).expect("Should serialize to JSON");

        assert_eq!(json["runtimeVersion"], "rustc 1.85.0 (4d91de4e4 2025-02-17)");
        assert_eq!(json["nodeVersion"], "rustc 1.85.0 (4d91de4e4 2025-02-17)");
        assert_eq!(json["platform"], "linux");
        assert_eq!(json["arch"], "x86_64");
        assert_eq!(json["memory"]["rss"], 4096);
        assert_eq!(json["memory"]["heapTotal"], 8192);
        assert_eq!(json["memory"]["heapUsed"], 2048);
        assert_eq!(json["memory"]["external"], 0);
        assert_eq!(json["memory"]["arrayBuffers"], 0);
        assert_eq!(json["memory"]["peakRss"], 0);
    }
}
