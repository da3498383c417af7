//! The patch run: read, edit, report, write

use std::path::Path;

use cleanup_fs::NormalizedPath;
use cleanup_text::{Document, PatchPlan, StatusLine};

use crate::error::Result;
use crate::output;

/// Patch one file relative to `cwd`.
///
/// `path` overrides the plan's target and `plan_file` replaces the built-in
/// plan. Feature-level problems are printed as status lines; only I/O and
/// plan errors are returned.
pub fn run_patch(cwd: &Path, path: Option<&Path>, plan_file: Option<&Path>) -> Result<()> {
    let plan = match plan_file {
        Some(file) => PatchPlan::load(&NormalizedPath::new(cwd.join(file)))?,
        None => PatchPlan::default(),
    };

    let target = match path {
        Some(path) => NormalizedPath::new(cwd.join(path)),
        None => NormalizedPath::new(cwd.join(&plan.target)),
    };
    tracing::debug!(target = %target, "patching");

    let mut document = Document::load(&target)?;
    let report = plan.apply(&mut document);
    for line in report.status_lines(&plan) {
        output::print(&line);
    }

    document.save(&target)?;

    let file_name = target.file_name().unwrap_or(target.as_str());
    output::print(&StatusLine::info(format!("Done with {file_name} cleanup")));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    const SERVICE: &str = "export class ResumeService {\n  // ===== Technology Icon Mapping =====\n  getTechIcon(t: string) {\n    return t;\n  }\n}\n";

    fn create_service(dir: &Path, content: &str) -> std::path::PathBuf {
        let app = dir.join("src").join("app");
        fs::create_dir_all(&app).unwrap();
        let file = app.join("resume-service.ts");
        fs::write(&file, content).unwrap();
        file
    }

    #[test]
    fn test_patches_default_target() {
        let temp = TempDir::new().unwrap();
        let file = create_service(temp.path(), SERVICE);

        run_patch(temp.path(), None, None).unwrap();

        assert_eq!(
            fs::read_to_string(file).unwrap(),
            "export class ResumeService {\n}\n"
        );
    }

    #[test]
    fn test_explicit_path_overrides_target() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("other.ts");
        fs::write(&file, SERVICE).unwrap();

        run_patch(temp.path(), Some(Path::new("other.ts")), None).unwrap();

        assert_eq!(
            fs::read_to_string(file).unwrap(),
            "export class ResumeService {\n}\n"
        );
    }

    #[test]
    fn test_missing_target_is_an_error() {
        let temp = TempDir::new().unwrap();
        assert!(run_patch(temp.path(), None, None).is_err());
    }

    #[test]
    fn test_missing_plan_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        create_service(temp.path(), SERVICE);

        let result = run_patch(temp.path(), None, Some(Path::new("plan.toml")));
        assert!(result.is_err());
        assert_eq!(
            fs::read_to_string(temp.path().join("src/app/resume-service.ts")).unwrap(),
            SERVICE
        );
    }
}
