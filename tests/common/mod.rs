//! Common test utilities for Apkset integration tests

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

/// A test directory holding an APK Set fixture and device spec files
#[allow(dead_code)]
pub struct TestApkSet {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the fixture root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestApkSet {
    /// Create a new empty fixture directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write an APK Set zip with the given toc.json and one dummy entry per
    /// artifact path
    pub fn write_archive(&self, name: &str, toc: &str, entries: &[&str]) -> PathBuf {
        let archive_path = self.path.join(name);
        let file = File::create(&archive_path).expect("Failed to create archive file");
        let mut writer = zip::ZipWriter::new(file);
        writer
            .start_file("toc.json", SimpleFileOptions::default())
            .expect("Failed to start toc.json entry");
        writer
            .write_all(toc.as_bytes())
            .expect("Failed to write toc.json");
        for entry in entries {
            writer
                .start_file(*entry, SimpleFileOptions::default())
                .expect("Failed to start artifact entry");
            writer
                .write_all(format!("fake apk bytes for {entry}").as_bytes())
                .expect("Failed to write artifact entry");
        }
        writer.finish().expect("Failed to finish archive");
        archive_path
    }

    /// Write an extracted (directory) APK Set with the same layout
    pub fn write_directory_archive(&self, name: &str, toc: &str, entries: &[&str]) -> PathBuf {
        let root = self.path.join(name);
        std::fs::create_dir_all(&root).expect("Failed to create archive directory");
        std::fs::write(root.join("toc.json"), toc).expect("Failed to write toc.json");
        for entry in entries {
            let entry_path = root.join(entry);
            if let Some(parent) = entry_path.parent() {
                std::fs::create_dir_all(parent).expect("Failed to create entry directory");
            }
            std::fs::write(&entry_path, format!("fake apk bytes for {entry}"))
                .expect("Failed to write artifact entry");
        }
        root
    }

    /// Write a device spec file
    pub fn write_device_spec(&self, name: &str, content: &str) -> PathBuf {
        let spec_path = self.path.join(name);
        std::fs::write(&spec_path, content).expect("Failed to write device spec");
        spec_path
    }

    /// A directory for extraction output
    pub fn output_dir(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}

/// A two-variant APK Set: a legacy variant below SDK 21 with only the base
/// default, and a split variant from SDK 21 with ABI and language splits plus
/// an on-demand module depending on a second on-demand module.
#[allow(dead_code)]
pub const SPLIT_TOC: &str = r#"{
    "variants": [
        {
            "sdk": { "min": 1, "max": 21 },
            "artifactSets": [
                {
                    "module": "base",
                    "artifacts": [
                        { "path": "splits/legacy/base-master.apk", "size": 640000 }
                    ]
                }
            ]
        },
        {
            "sdk": { "min": 21 },
            "artifactSets": [
                {
                    "module": "base",
                    "artifacts": [
                        { "path": "splits/base-master.apk", "size": 100000 },
                        {
                            "targeting": { "abi": "arm64-v8a" },
                            "path": "splits/base-arm64_v8a.apk",
                            "size": 520000
                        },
                        {
                            "targeting": { "abi": "armeabi-v7a" },
                            "path": "splits/base-armeabi_v7a.apk",
                            "size": 480000
                        },
                        {
                            "targeting": { "language": "en" },
                            "path": "splits/base-en.apk",
                            "size": 10000
                        },
                        {
                            "targeting": { "language": "fr" },
                            "path": "splits/base-fr.apk",
                            "size": 12000
                        }
                    ]
                },
                {
                    "module": "maps",
                    "artifacts": [
                        { "path": "splits/maps-master.apk", "size": 50000 }
                    ]
                },
                {
                    "module": "offline_tiles",
                    "artifacts": [
                        { "path": "splits/offline_tiles-master.apk", "size": 30000 }
                    ]
                }
            ]
        }
    ],
    "modules": [
        { "name": "base", "delivery": "install-time" },
        { "name": "maps", "delivery": "on-demand", "dependencies": ["offline_tiles"] },
        { "name": "offline_tiles", "delivery": "on-demand" }
    ]
}"#;

/// Every artifact path referenced by [`SPLIT_TOC`]
#[allow(dead_code)]
pub const SPLIT_ENTRIES: &[&str] = &[
    "splits/legacy/base-master.apk",
    "splits/base-master.apk",
    "splits/base-arm64_v8a.apk",
    "splits/base-armeabi_v7a.apk",
    "splits/base-en.apk",
    "splits/base-fr.apk",
    "splits/maps-master.apk",
    "splits/offline_tiles-master.apk",
];

/// A full device spec matching the split variant with arm64 and English
#[allow(dead_code)]
pub const ARM64_EN_DEVICE: &str = r#"{
    "sdkVersion": 30,
    "supportedAbis": ["arm64-v8a", "armeabi-v7a"],
    "screenDensity": 480,
    "supportedLocales": ["en-US"]
}"#;
