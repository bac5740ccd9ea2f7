//! CSV export integration tests
//!
//! Exercises the file output end to end against the built-in registry.

use std::fs;
use std::path::Path;

use cmap::{export, CmapError, ColormapRegistry, ExportOptions, Exporter};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn parse_line(line: &str) -> Vec<f64> {
    line.split(',')
        .map(|field| field.parse::<f64>().unwrap())
        .collect()
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

fn assert_rows(name: &str, lines: &[&str], rows: &[(usize, [f64; 3])]) {
    for (index, expected) in rows {
        let got = parse_line(lines[*index]);
        for (g, want) in got.iter().zip(expected) {
            assert!(
                (g - want).abs() <= 1.0 / 255.0,
                "{} row {}: {} vs {}",
                name,
                index,
                g,
                want
            );
        }
    }
}

fn exporter_in(dir: &Path, options: ExportOptions) -> Exporter {
    let options = ExportOptions {
        output_dir: Some(dir.to_path_buf()),
        ..options
    };
    Exporter::new(ColormapRegistry::builtin().unwrap(), options)
}

// =============================================================================
// Output format
// =============================================================================

mod format_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_viridis_export() {
        let temp = TempDir::new().unwrap();
        let stem = temp.path().join("viridis");

        let path = export("viridis", &stem).unwrap();
        assert_eq!(path, temp.path().join("viridis.csv"));

        let content = read(&path);
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 256);
        assert_eq!(parse_line(lines[0]).len(), 3);

        assert_rows(
            "viridis",
            &lines,
            &[
                (0, [0.267004, 0.004874, 0.329415]),
                (64, [0.229739, 0.322361, 0.545706]),
                (128, [0.127568, 0.566949, 0.550556]),
                (192, [0.369214, 0.788888, 0.382914]),
                (255, [0.993248, 0.906157, 0.143936]),
            ],
        );
    }

    #[test]
    fn test_reference_rows_of_float_tables() {
        let temp = TempDir::new().unwrap();
        let exporter = exporter_in(temp.path(), ExportOptions::default());
        let cases: [(&str, &[(usize, [f64; 3])]); 4] = [
            (
                "turbo",
                &[
                    (0, [0.18995, 0.07176, 0.23217]),
                    (128, [0.64362, 0.98999, 0.23356]),
                    (255, [0.47960, 0.01583, 0.01055]),
                ],
            ),
            ("magma", &[(128, [0.716387, 0.214982, 0.475290])]),
            ("inferno", &[(128, [0.735683, 0.215906, 0.330245])]),
            ("plasma", &[(128, [0.798216, 0.280197, 0.469538])]),
        ];

        for (name, rows) in cases {
            let summary = exporter.export(name, name).unwrap();
            assert_eq!(summary.entries, 256, "{}", name);
            let content = read(&summary.path);
            let lines: Vec<&str> = content.lines().collect();
            assert_rows(name, &lines, rows);
        }
    }

    #[test]
    fn test_every_line_is_three_channels_in_range() {
        let temp = TempDir::new().unwrap();
        let registry = ColormapRegistry::builtin().unwrap();
        let exporter = exporter_in(temp.path(), ExportOptions::default());

        for name in registry.names() {
            let summary = exporter.export(name, name).unwrap();
            let content = read(&summary.path);
            assert!(content.ends_with('\n'), "{} lacks trailing newline", name);
            assert_eq!(content.lines().count(), summary.entries, "{}", name);

            for line in content.lines() {
                let channels = parse_line(line);
                assert_eq!(channels.len(), 3, "{}: {}", name, line);
                assert!(
                    channels.iter().all(|v| (0.0..=1.0).contains(v)),
                    "{}: {}",
                    name,
                    line
                );
            }
        }
    }

    #[test]
    fn test_no_header_no_quotes() {
        let temp = TempDir::new().unwrap();
        let exporter = exporter_in(temp.path(), ExportOptions::default());
        let summary = exporter.export("set1", "set1").unwrap();

        let content = read(&summary.path);
        assert!(!content.contains('"'));
        assert!(!content.contains('\r'));
        assert_eq!(content.lines().next(), Some("0.8941176470588236,0.10196078431372549,0.10980392156862745"));
    }

    #[test]
    fn test_alpha_and_precision() {
        let temp = TempDir::new().unwrap();
        let options = ExportOptions {
            format: cmap::ChannelFormat::Fixed(4),
            include_alpha: true,
            ..ExportOptions::default()
        };
        let exporter = exporter_in(temp.path(), options);
        let summary = exporter.export("clear_to_black", "ctb").unwrap();

        let content = read(&summary.path);
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 256);
        assert_eq!(lines[0], "0.0000,0.0000,0.0000,0.0000");
        assert_eq!(lines[255], "0.0000,0.0000,0.0000,1.0000");
    }
}

// =============================================================================
// Determinism and naming
// =============================================================================

mod behavior_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reexport_is_byte_identical() {
        let temp = TempDir::new().unwrap();
        let stem = temp.path().join("magma");

        let path = export("magma", &stem).unwrap();
        let first = fs::read(&path).unwrap();
        export("magma", &stem).unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_reversed_export() {
        let temp = TempDir::new().unwrap();
        let forward = read(&export("plasma", temp.path().join("fwd")).unwrap());
        let backward = read(&export("plasma_r", temp.path().join("back")).unwrap());

        let mut reversed: Vec<&str> = forward.lines().collect();
        reversed.reverse();
        assert_eq!(backward.lines().collect::<Vec<_>>(), reversed);
    }

    #[test]
    fn test_levels_option() {
        let temp = TempDir::new().unwrap();
        let options = ExportOptions {
            levels: Some(5),
            ..ExportOptions::default()
        };
        let exporter = exporter_in(temp.path(), options);

        let summary = exporter.export("set1", "five").unwrap();
        assert_eq!(summary.entries, 5);
        assert_eq!(read(&summary.path).lines().count(), 5);
    }

    #[test]
    fn test_batch_export_writes_each_file() {
        let temp = TempDir::new().unwrap();
        let exporter = exporter_in(temp.path(), ExportOptions::default());

        let results = exporter.export_all(&["viridis", "jet", "tableau10"], |_| {});
        assert!(results.iter().all(|(_, r)| r.is_ok()));
        for name in ["viridis", "jet", "tableau10"] {
            assert!(temp.path().join(format!("{}.csv", name)).is_file());
        }
    }
}

// =============================================================================
// Failures
// =============================================================================

mod error_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unknown_name_leaves_no_file() {
        let temp = TempDir::new().unwrap();
        let stem = temp.path().join("nope");

        let err = export("not_a_colormap", &stem).unwrap_err();
        match &err {
            CmapError::UnknownColormap { name, supported } => {
                assert_eq!(name, "not_a_colormap");
                assert!(supported.contains("viridis"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(fs::read_dir(temp.path()).unwrap().next().is_none());
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let temp = TempDir::new().unwrap();
        let stem = temp.path().join("no").join("such").join("dir");

        let err = export("viridis", &stem).unwrap_err();
        assert!(matches!(err, CmapError::Io { .. }), "{:?}", err);
    }

    #[test]
    fn test_directory_in_the_way_is_io_error() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("taken.csv")).unwrap();

        let err = export("viridis", temp.path().join("taken")).unwrap_err();
        match err {
            CmapError::Io { path, .. } => assert_eq!(path, temp.path().join("taken.csv")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
