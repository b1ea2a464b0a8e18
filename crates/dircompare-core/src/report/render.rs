//! Plain text rendering of a comparison result

use chrono::Local;

use crate::comparison::ComparisonResult;
use crate::scanner::FileSet;

/// Report renderer
pub struct ReportRenderer;

impl ReportRenderer {
    /// Current local time in the report header format
    #[must_use]
    pub fn timestamp_now() -> String {
        Local::now().format("%Y-%m-%d %H:%M:%S%.6f").to_string()
    }

    /// Render the full report
    ///
    /// Every listing is sorted by path. The output does not end with a newline.
    #[must_use]
    pub fn render(result: &ComparisonResult, timestamp: &str) -> String {
        let counts = result.counts();
        let mut lines: Vec<String> = Vec::new();

        lines.push("--- 📊 COMPARISON REPORT ---".to_string());
        lines.push(format!("Generated on: {timestamp}\n"));
        lines.push(format!("Directory A: {}", result.root_a.display()));
        lines.push(format!("Directory B: {}\n", result.root_b.display()));
        lines.push(format!("Total files in A           : {}", counts.files_in_a));
        lines.push(format!("Total files in B           : {}", counts.files_in_b));
        lines.push(format!("Matched file paths         : {}", counts.matched));
        lines.push(format!("  └── Identical content    : {}", counts.identical));
        lines.push(format!("  └── Different content    : {}", counts.different));
        lines.push(format!("Missing in B (A-only)      : {}", counts.missing_in_b));
        lines.push(format!("Extra in B (Not in A)      : {}\n", counts.extra_in_b));

        lines.push("✅ IDENTICAL FILES:".to_string());
        push_listing(&mut lines, "✓", &result.identical);

        lines.push("\n❗DIFFERENT FILES (same path, different content):".to_string());
        push_listing(&mut lines, "⚠", &result.different);

        lines.push("\n🚫 MISSING IN B (present in A):".to_string());
        push_listing(&mut lines, "✗", &result.missing_in_b);

        lines.push("\n➕ EXTRA IN B (not in A):".to_string());
        push_listing(&mut lines, "+", &result.extra_in_b);

        lines.push("\nERROR FILES (could not be compared):".to_string());
        if result.errored.is_empty() {
            lines.push("  None".to_string());
        } else {
            lines.extend(
                result
                    .errored
                    .iter()
                    .map(|(path, reason)| format!("  ⚠ {path}: {reason}")),
            );
        }

        lines.join("\n")
    }
}

fn push_listing(lines: &mut Vec<String>, marker: &str, files: &FileSet) {
    lines.extend(files.iter().map(|path| format!("  {marker} {path}")));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::RelativePath;
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    fn set(paths: &[&str]) -> FileSet {
        paths.iter().copied().map(RelativePath::from).collect()
    }

    fn sample() -> ComparisonResult {
        let mut errored = BTreeMap::new();
        errored.insert(
            RelativePath::from("locked.bin"),
            "Directory A (/a/locked.bin): Permission denied (os error 13)".to_string(),
        );

        ComparisonResult {
            root_a: PathBuf::from("/a"),
            root_b: PathBuf::from("/b"),
            files_in_a: 5,
            files_in_b: 5,
            identical: set(&["z.txt", "a.txt"]),
            different: set(&["sub/changed.txt"]),
            missing_in_b: set(&["gone.txt"]),
            extra_in_b: set(&["new.txt"]),
            errored,
            scan_errors: Vec::new(),
        }
    }

    #[test]
    fn test_render_exact_layout() {
        let report = ReportRenderer::render(&sample(), "2024-01-02 03:04:05.000006");

        let expected = "\
--- 📊 COMPARISON REPORT ---
Generated on: 2024-01-02 03:04:05.000006

Directory A: /a
Directory B: /b

Total files in A           : 5
Total files in B           : 5
Matched file paths         : 4
  └── Identical content    : 2
  └── Different content    : 1
Missing in B (A-only)      : 1
Extra in B (Not in A)      : 1

✅ IDENTICAL FILES:
  ✓ a.txt
  ✓ z.txt

❗DIFFERENT FILES (same path, different content):
  ⚠ sub/changed.txt

🚫 MISSING IN B (present in A):
  ✗ gone.txt

➕ EXTRA IN B (not in A):
  + new.txt

ERROR FILES (could not be compared):
  ⚠ locked.bin: Directory A (/a/locked.bin): Permission denied (os error 13)";

        assert_eq!(report, expected);
    }

    #[test]
    fn test_render_empty_listings() {
        let result = ComparisonResult {
            root_a: PathBuf::from("left"),
            root_b: PathBuf::from("right"),
            files_in_a: 0,
            files_in_b: 0,
            identical: FileSet::new(),
            different: FileSet::new(),
            missing_in_b: FileSet::new(),
            extra_in_b: FileSet::new(),
            errored: BTreeMap::new(),
            scan_errors: Vec::new(),
        };

        let report = ReportRenderer::render(&result, "t");

        assert!(report.contains("✅ IDENTICAL FILES:\n\n❗DIFFERENT FILES"));
        assert!(report.contains("➕ EXTRA IN B (not in A):\n\nERROR FILES"));
        assert!(report.ends_with("  None"));
    }

    #[test]
    fn test_timestamp_format() {
        let stamp = ReportRenderer::timestamp_now();

        // YYYY-MM-DD HH:MM:SS.ffffff
        assert_eq!(stamp.len(), 26);
        assert_eq!(&stamp[4..5], "-");
        assert_eq!(&stamp[19..20], ".");
    }
}
