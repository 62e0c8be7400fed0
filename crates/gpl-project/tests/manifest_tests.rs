//! Tests for the project manifest model.

use gpl_fs::NormalizedPath;
use gpl_project::{DEFAULT_PROJECT_NAME, DEFAULT_START_MODULE, ProjectManifest};
use gpl_test_utils::project::TestProject;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn manifest_at(project: &TestProject, path: &str) -> ProjectManifest {
    ProjectManifest::new(NormalizedPath::new(project.path(path)))
}

#[test]
fn test_add_source_twice_keeps_one_entry() {
    let mut manifest = ProjectManifest::new("Project.gpr");

    assert!(manifest.add_source("A.gpl"));
    assert!(!manifest.add_source("A.gpl"));

    assert_eq!(manifest.sources().iter().collect::<Vec<_>>(), vec!["A.gpl"]);
}

#[test]
fn test_load_missing_file_keeps_defaults() {
    let project = TestProject::new();
    let mut manifest = manifest_at(&project, "SplitGplModules/Project.gpr");

    manifest.load().unwrap();

    assert_eq!(manifest.project_name, DEFAULT_PROJECT_NAME);
    assert_eq!(manifest.start_module, DEFAULT_START_MODULE);
    assert!(manifest.sources().is_empty());
    project.assert_file_not_exists("SplitGplModules/Project.gpr");
}

#[test]
fn test_load_reads_all_keys() {
    let project = TestProject::new();
    project.write(
        "Project.gpr",
        "'01/02/2024, 09:00:00 AM\r\nProjectBegin\r\nProjectName=\"Cell7\"\r\nProjectStart=\"Boot\"\r\nProjectSource=\"Boot.gpl\"\r\nProjectSource=\"Arm.gpl\"\r\nProjectEnd\r\n",
    );
    let mut manifest = manifest_at(&project, "Project.gpr");

    manifest.load().unwrap();

    assert_eq!(manifest.project_name, "Cell7");
    assert_eq!(manifest.start_module, "Boot");
    assert_eq!(
        manifest.sources().iter().collect::<Vec<_>>(),
        vec!["Boot.gpl", "Arm.gpl"]
    );
}

#[rstest]
#[case::lf("ProjectBegin\nProjectSource=\"B.gpl\"\nProjectName=\"X\"\nProjectSource=\"A.gpl\"\nProjectEnd\n")]
#[case::crlf("ProjectBegin\r\nProjectSource=\"B.gpl\"\r\nProjectName=\"X\"\r\nProjectSource=\"A.gpl\"\r\nProjectEnd\r\n")]
#[case::indented("  ProjectBegin\n\tProjectSource = \"B.gpl\"\n    ProjectName=\"X\"\n ProjectSource=\"A.gpl\"  \nProjectEnd")]
fn test_parse_tolerates_layout(#[case] content: &str) {
    let mut manifest = ProjectManifest::new("Project.gpr");

    manifest.parse(content);

    assert_eq!(manifest.project_name, "X");
    assert_eq!(manifest.start_module, DEFAULT_START_MODULE);
    assert_eq!(manifest.sources().len(), 2);
    assert_eq!(manifest.sources().iter().collect::<Vec<_>>(), vec!["B.gpl", "A.gpl"]);
}

#[test]
fn test_parse_first_name_wins() {
    let mut manifest = ProjectManifest::new("Project.gpr");
    manifest.parse("ProjectName=\"First\"\nProjectName=\"Second\"\n");
    assert_eq!(manifest.project_name, "First");
}

#[test]
fn test_load_merges_with_registered_sources() {
    let project = TestProject::new();
    project.write("Project.gpr", "ProjectBegin\nProjectSource=\"Old.gpl\"\nProjectSource=\"Shared.gpl\"\nProjectEnd\n");
    let mut manifest = manifest_at(&project, "Project.gpr");
    manifest.add_source("Shared.gpl");

    manifest.load().unwrap();

    assert_eq!(
        manifest.sources().iter().collect::<Vec<_>>(),
        vec!["Shared.gpl", "Old.gpl"]
    );
}

#[test]
fn test_render_layout() {
    let mut manifest = ProjectManifest::new("Project.gpr");
    manifest.add_source("MAIN.gpl");
    manifest.add_source("Gripper.gpl");

    let rendered = manifest.render("03/07/2024, 02:05:09 PM");

    assert_eq!(
        rendered,
        "'03/07/2024, 02:05:09 PM\r\n\
         ProjectBegin\r\n\
         ProjectName=\"MergeCode\"\r\n\
         ProjectStart=\"MAIN\"\r\n\
         ProjectSource=\"MAIN.gpl\"\r\n\
         ProjectSource=\"Gripper.gpl\"\r\n\
         ProjectEnd\r\n"
    );
}

#[test]
fn test_save_then_load_restores_state() {
    let project = TestProject::new();
    let mut manifest = ProjectManifest::with_defaults(
        NormalizedPath::new(project.path("Project.gpr")),
        "Cell7",
        "Boot",
    );
    manifest.add_source("Boot.gpl");
    manifest.add_source("Arm.gpl");
    manifest.save().unwrap();

    let mut reloaded = manifest_at(&project, "Project.gpr");
    reloaded.load().unwrap();

    assert_eq!(reloaded.project_name, "Cell7");
    assert_eq!(reloaded.start_module, "Boot");
    assert_eq!(reloaded.sources(), manifest.sources());
    let first_line = project.read("Project.gpr").lines().next().unwrap().to_string();
    assert!(first_line.starts_with('\''));
}

#[test]
fn test_save_overwrites_whole_file() {
    let project = TestProject::new();
    project.write("Project.gpr", "garbage that must disappear\n".repeat(50).as_str());
    let manifest = manifest_at(&project, "Project.gpr");

    manifest.save().unwrap();

    let content = project.read("Project.gpr");
    assert!(!content.contains("garbage"));
    assert!(content.ends_with("ProjectEnd\r\n"));
}

#[test]
fn test_load_unreadable_path_is_error() {
    let project = TestProject::new();
    std::fs::create_dir(project.path("Project.gpr")).unwrap();
    let mut manifest = manifest_at(&project, "Project.gpr");

    assert!(manifest.load().is_err());
}

#[test]
fn test_save_failure_keeps_state() {
    let project = TestProject::new();
    std::fs::create_dir(project.path("Project.gpr")).unwrap();
    let mut manifest = manifest_at(&project, "Project.gpr");
    manifest.add_source("A.gpl");

    assert!(manifest.save().is_err());
    assert_eq!(manifest.sources().iter().collect::<Vec<_>>(), vec!["A.gpl"]);
}
