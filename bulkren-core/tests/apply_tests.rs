use bulkren_core::{
    apply_renames, apply_renames_with, build_preview, collect_files, ApplyMode, FileMover,
    FsMover, RenameSettings, RenameStatus,
};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn prefix_rule(find: &str, replace: &str) -> RenameSettings {
    RenameSettings {
        apply_mode: ApplyMode::PrefixOnly,
        find_text: find.to_string(),
        replace_text: replace.to_string(),
        ..Default::default()
    }
}

fn touch(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// Delegates to the real filesystem but fails for one source path
struct FailingOn {
    path: PathBuf,
    inner: FsMover,
}

impl FileMover for FailingOn {
    fn move_file(&mut self, from: &Path, to: &Path) -> io::Result<()> {
        if from == self.path {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "simulated"));
        }
        self.inner.move_file(from, to)
    }
}

#[test]
fn test_apply_renames_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "SM_Rock.fbx", "rock");
    touch(temp_dir.path(), "props/SM_Tree.fbx", "tree");

    let settings = prefix_rule("SM_", "Prop_");
    let files = collect_files(temp_dir.path(), &settings).unwrap();
    let previews = build_preview(&files, &settings);

    assert_eq!(apply_renames(&previews, &settings), 2);
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("Prop_Rock.fbx")).unwrap(),
        "rock"
    );
    assert!(temp_dir.path().join("props").join("Prop_Tree.fbx").exists());
    assert!(!temp_dir.path().join("SM_Rock.fbx").exists());
}

#[test]
fn test_collision_skipped_by_default() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "SM_Weapon.fbx", "sm");
    touch(temp_dir.path(), "Hero_Weapon.fbx", "hero");

    let settings = prefix_rule("SM_", "Hero_");
    let files = collect_files(temp_dir.path(), &settings).unwrap();
    let previews = build_preview(&files, &settings);

    assert_eq!(apply_renames(&previews, &settings), 0);
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("Hero_Weapon.fbx")).unwrap(),
        "hero"
    );
    assert!(temp_dir.path().join("SM_Weapon.fbx").exists());
}

#[test]
fn test_collision_attempted_but_refused_by_fs_mover() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "SM_Weapon.fbx", "sm");
    touch(temp_dir.path(), "Hero_Weapon.fbx", "hero");

    let settings = RenameSettings {
        skip_if_collision: false,
        ..prefix_rule("SM_", "Hero_")
    };
    let files = collect_files(temp_dir.path(), &settings).unwrap();
    let previews = build_preview(&files, &settings);

    let report = apply_renames_with(&previews, &settings, &mut FsMover);
    assert_eq!(report.attempted, 1);
    assert_eq!(report.renamed, 0);
    assert_eq!(report.failed(), 1);
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("Hero_Weapon.fbx")).unwrap(),
        "hero"
    );
}

#[test]
fn test_collision_with_other_extension_can_be_forced() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "SM_Rock.fbx", "mesh");
    touch(temp_dir.path(), "Hero_Rock.png", "texture");

    let settings = RenameSettings {
        skip_if_collision: false,
        ..prefix_rule("SM_", "Hero_")
    };
    let files = collect_files(temp_dir.path(), &settings).unwrap();
    let previews = build_preview(&files, &settings);

    let rock = previews.iter().find(|p| p.old_stem == "SM_Rock").unwrap();
    assert_eq!(rock.status, RenameStatus::Collision);

    assert_eq!(apply_renames(&previews, &settings), 1);
    assert!(temp_dir.path().join("Hero_Rock.fbx").exists());
    assert!(temp_dir.path().join("Hero_Rock.png").exists());
}

#[test]
fn test_partial_failure_is_contained() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "A_1.txt", "1");
    let blocked = touch(temp_dir.path(), "A_2.txt", "2");
    touch(temp_dir.path(), "A_3.txt", "3");

    let settings = prefix_rule("A_", "B_");
    let files = collect_files(temp_dir.path(), &settings).unwrap();
    let previews = build_preview(&files, &settings);

    let mut mover = FailingOn {
        path: blocked.clone(),
        inner: FsMover,
    };
    let report = apply_renames_with(&previews, &settings, &mut mover);

    assert_eq!(report.attempted, 3);
    assert_eq!(report.renamed, 2);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].path, blocked);
    assert!(temp_dir.path().join("B_1.txt").exists());
    assert!(temp_dir.path().join("A_2.txt").exists());
    assert!(temp_dir.path().join("B_3.txt").exists());
}

#[test]
fn test_file_removed_after_preview_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let gone = touch(temp_dir.path(), "SM_Gone.fbx", "");
    touch(temp_dir.path(), "SM_Kept.fbx", "");

    let settings = prefix_rule("SM_", "Hero_");
    let files = collect_files(temp_dir.path(), &settings).unwrap();
    let previews = build_preview(&files, &settings);
    fs::remove_file(&gone).unwrap();

    let report = apply_renames_with(&previews, &settings, &mut FsMover);
    assert_eq!(report.renamed, 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].path, gone);
    assert!(temp_dir.path().join("Hero_Kept.fbx").exists());
}

#[test]
fn test_identity_rule_renames_nothing() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "SM_Rock.fbx", "");
    touch(temp_dir.path(), "Hero.fbx", "");

    let settings = RenameSettings {
        skip_if_no_change: false,
        skip_if_collision: false,
        ..prefix_rule("SM_", "SM_")
    };
    let files = collect_files(temp_dir.path(), &settings).unwrap();
    let previews = build_preview(&files, &settings);

    assert!(previews.iter().all(|p| p.status == RenameStatus::NoChange));
    assert_eq!(apply_renames(&previews, &settings), 0);
    assert!(temp_dir.path().join("SM_Rock.fbx").exists());
}

#[test]
fn test_extension_filter_limits_batch() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "SM_Rock.fbx", "");
    touch(temp_dir.path(), "SM_Rock.txt", "");

    let settings = RenameSettings {
        extension_filter: "FBX".to_string(),
        ..prefix_rule("SM_", "Prop_")
    };
    let files = collect_files(temp_dir.path(), &settings).unwrap();
    let previews = build_preview(&files, &settings);

    assert_eq!(apply_renames(&previews, &settings), 1);
    assert!(temp_dir.path().join("Prop_Rock.fbx").exists());
    assert!(temp_dir.path().join("SM_Rock.txt").exists());
}

#[cfg(unix)]
#[test]
fn test_non_utf8_name_is_never_moved() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp_dir = TempDir::new().unwrap();
    let odd = temp_dir
        .path()
        .join(OsStr::from_bytes(b"SM_\xffRock.fbx"));
    fs::write(&odd, "odd").unwrap();
    touch(temp_dir.path(), "SM_Tree.fbx", "tree");

    let settings = RenameSettings {
        skip_if_no_change: false,
        ..prefix_rule("SM_", "Hero_")
    };
    let files = collect_files(temp_dir.path(), &settings).unwrap();
    let previews = build_preview(&files, &settings);

    let report = apply_renames_with(&previews, &settings, &mut FsMover);
    assert_eq!(report.renamed, 1);
    assert_eq!(report.unchanged, 1);
    assert_eq!(fs::read_to_string(&odd).unwrap(), "odd");
    assert!(temp_dir.path().join("Hero_Tree.fbx").exists());
}
