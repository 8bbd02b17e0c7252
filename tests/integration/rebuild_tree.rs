use std::fs;

use tempfile::TempDir;
use vx_rebuild::NodeConfig;

use crate::integration::support::{names, read_json, run_cli};

fn build_notebook(temp: &TempDir) -> std::path::PathBuf {
    let root = temp.path().join("notebook");
    fs::create_dir_all(root.join("Projects/Deep")).unwrap();
    fs::create_dir_all(root.join("Notes_Assets")).unwrap();
    fs::create_dir_all(root.join("vx_recycle_bin")).unwrap();
    fs::create_dir_all(root.join(".git")).unwrap();
    fs::create_dir_all(root.join("vx_notebook")).unwrap();
    fs::create_dir_all(root.join("foo_assets/vx_attachments/img1")).unwrap();
    for note in ["B.md", "a.md", "C.md", "foo.md"] {
        fs::write(root.join(note), "# note").unwrap();
    }
    fs::write(root.join("picture.png"), [0u8; 4]).unwrap();
    fs::write(root.join("Projects/plan.md"), "# plan").unwrap();
    fs::write(root.join("Projects/Deep/inner.md"), "# inner").unwrap();
    root
}

#[test]
fn rebuild_writes_parseable_sidecars_for_included_folders_only() {
    let temp = TempDir::new().unwrap();
    let root = build_notebook(&temp);

    let (summary, out) = run_cli(&root, &[]);
    assert_eq!(summary.configs, 3);
    assert_eq!(summary.folders, 2);
    assert_eq!(summary.notes, 6);
    assert!(out.contains("Rebuilt vx.json count: 3"));
    assert!(out.contains("Scanned folder count: 2"));
    assert!(out.contains("Scanned markdown count: 6"));

    for dir in ["", "Projects", "Projects/Deep"] {
        let text = fs::read_to_string(root.join(dir).join("vx.json")).unwrap();
        let parsed: NodeConfig = serde_json::from_str(&text).unwrap();
        assert_ne!(parsed.signature, "0");
        assert!(parsed.created_time.ends_with('Z'));
    }
    for excluded in ["Notes_Assets", "vx_recycle_bin", ".git", "vx_notebook", "foo_assets"] {
        assert!(!root.join(excluded).join("vx.json").exists());
    }

    let top = read_json(&root.join("vx.json"));
    assert_eq!(names(&top["files"]), vec!["a.md", "B.md", "C.md", "foo.md"]);
    assert_eq!(names(&top["folders"]), vec!["Projects"]);
    assert_eq!(top["version"], 3);
    assert_eq!(top["id"], "0");
}

#[test]
fn attachment_folder_is_inferred_from_single_subfolder() {
    let temp = TempDir::new().unwrap();
    let root = build_notebook(&temp);

    run_cli(&root, &[]);
    let top = read_json(&root.join("vx.json"));
    let files = top["files"].as_array().unwrap();
    let foo = files.iter().find(|f| f["name"] == "foo.md").unwrap();
    let a = files.iter().find(|f| f["name"] == "a.md").unwrap();
    assert_eq!(foo["attachment_folder"], "img1");
    assert_eq!(a["attachment_folder"], "");

    fs::create_dir_all(root.join("foo_assets/vx_attachments/img2")).unwrap();
    fs::remove_file(root.join("vx.json")).unwrap();
    run_cli(&root, &[]);
    let top = read_json(&root.join("vx.json"));
    let foo = top["files"]
        .as_array()
        .unwrap()
        .iter()
        .find(|f| f["name"] == "foo.md")
        .unwrap()
        .clone();
    assert_eq!(foo["attachment_folder"], "");
}

#[test]
fn existing_entries_are_merged() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("nb");
    fs::create_dir_all(root.join("Sub")).unwrap();
    fs::write(root.join("a.md"), "x").unwrap();
    fs::write(
        root.join("vx.json"),
        r##"{
  "version": 2,
  "id": 15,
  "signature": "0",
  "created_time": "2021-02-03T04:05:06Z",
  "background_color": "#123456",
  "files": [
    {"name": "a.md", "id": "42", "tags": ["x", "", 5], "name_color": ""},
    {"name": "a.md", "id": "43"},
    {"name": "deleted.md", "id": "44"}
  ],
  "folders": [{"name": "Sub", "border_color": "green"}, {"name": "Gone"}]
}"##,
    )
    .unwrap();

    run_cli(&root, &[]);
    let top = read_json(&root.join("vx.json"));
    assert_eq!(top["version"], 2);
    assert_eq!(top["id"], "15");
    assert_ne!(top["signature"], "0");
    assert_eq!(top["created_time"], "2021-02-03T04:05:06Z");
    assert_eq!(top["background_color"], "#123456");
    assert_eq!(names(&top["folders"]), vec!["Sub"]);
    assert_eq!(top["folders"][0]["border_color"], "green");

    let files = top["files"].as_array().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0]["id"], "42");
    assert_eq!(files[0]["tags"], serde_json::json!(["x"]));
    assert!(files[0].get("name_color").is_none());
    let sig: u64 = files[0]["signature"].as_str().unwrap().parse().unwrap();
    assert!(sig > 0);
}

#[test]
fn second_run_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let root = build_notebook(&temp);

    run_cli(&root, &[]);
    let first: Vec<_> = ["", "Projects", "Projects/Deep"]
        .iter()
        .map(|d| read_json(&root.join(d).join("vx.json")))
        .collect();

    run_cli(&root, &[]);
    for (dir, before) in ["", "Projects", "Projects/Deep"].iter().zip(&first) {
        let after = read_json(&root.join(dir).join("vx.json"));
        assert_eq!(after["files"], before["files"], "files changed in {dir:?}");
        assert_eq!(after["folders"], before["folders"]);
        assert_eq!(after["id"], before["id"]);
        assert_eq!(after["signature"], before["signature"]);
        assert_eq!(after["created_time"], before["created_time"]);
    }
}

#[test]
fn dry_run_leaves_disk_untouched() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("nb");
    fs::create_dir_all(root.join("child")).unwrap();
    fs::write(root.join("one.md"), "x").unwrap();
    fs::write(root.join("two.md"), "x").unwrap();
    fs::write(root.join("vx.json"), "{\"id\": \"7\"}").unwrap();

    let (summary, out) = run_cli(&root, &["--dry-run"]);
    assert_eq!(summary.configs, 2);

    let first_line = out.lines().next().unwrap();
    assert!(first_line.ends_with("vx.json  folders=1 md=2"), "{first_line}");
    assert!(out.contains("Dry-run vx.json count: 2"));
    assert_eq!(fs::read_to_string(root.join("vx.json")).unwrap(), "{\"id\": \"7\"}");
    assert!(!root.join("child/vx.json").exists());
}

#[test]
fn verbose_reports_each_directory() {
    let temp = TempDir::new().unwrap();
    let root = build_notebook(&temp);

    let (_, out) = run_cli(&root, &["--verbose"]);
    let report: Vec<&str> = out.lines().filter(|l| l.contains("  folders=")).collect();
    assert_eq!(report.len(), 3);
    assert!(report[0].ends_with("folders=1 md=4"));
    assert!(report[1].ends_with("folders=1 md=1"));
    assert!(report[2].ends_with("folders=0 md=1"));
}
