// tests/propagation_test.rs
//
// End-to-end propagation scenarios through the library: load the manifest,
// compute the new version, write it back, and rewrite every marker file.

use std::fs;
use std::path::Path;

use release_bump::manifest::Manifest;
use release_bump::propagate::propagate;
use release_bump::version::{BumpRequest, Version};
use tempfile::TempDir;

const NUSPEC: &str = r#"<?xml version="1.0"?>
<package>
  <metadata>
    <id>Widget</id>
    <version>1.2.3-alpha</version>
    <authors>Release Team</authors>
    <description>A widget library.</description>
    <releaseNotes>v1.2.3: alpha release</releaseNotes>
  </metadata>
</package>
"#;

const ASSEMBLY_INFO: &str = r#"using System.Reflection;

[assembly: AssemblyTitle("Widget")]
[assembly: AssemblyVersion("1.2.3")]
[assembly: AssemblyFileVersion("1.2.3")]
"#;

fn setup_project(dir: &Path) {
    fs::write(dir.join("Package.nuspec"), NUSPEC).unwrap();
    fs::write(dir.join("AssemblyInfo.cs"), ASSEMBLY_INFO).unwrap();

    let module = dir.join("src").join("module");
    fs::create_dir_all(&module).unwrap();
    fs::write(module.join("AssemblyInfo.cs"), ASSEMBLY_INFO).unwrap();
    fs::write(module.join("Widget.cs"), "class Widget {}\n").unwrap();
}

#[test]
fn test_label_bump_end_to_end() {
    let dir = TempDir::new().unwrap();
    setup_project(dir.path());

    let mut manifest = Manifest::load(dir.path().join("Package.nuspec")).unwrap();
    let current = manifest.current_version().unwrap();
    assert_eq!(current.to_string(), "1.2.3-alpha");

    let new_version = current.bump(&BumpRequest::Label).unwrap();
    assert_eq!(new_version.to_string(), "1.2.3-alpha2");

    manifest.set_version(&new_version).unwrap();
    manifest.save().unwrap();

    let updated = propagate(dir.path(), "AssemblyInfo.cs", &new_version).unwrap();
    assert_eq!(updated.len(), 2);

    let manifest_content = fs::read_to_string(dir.path().join("Package.nuspec")).unwrap();
    assert!(manifest_content.contains("<version>1.2.3-alpha2</version>"));

    for marker in [
        dir.path().join("AssemblyInfo.cs"),
        dir.path().join("src").join("module").join("AssemblyInfo.cs"),
    ] {
        let content = fs::read_to_string(marker).unwrap();
        assert!(content.contains(r#"AssemblyVersion("1.2.3-alpha2")"#));
        assert!(content.contains(r#"AssemblyFileVersion("1.2.3-alpha2")"#));
    }
}

#[test]
fn test_major_bump_end_to_end() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("Package.nuspec"),
        NUSPEC.replace("1.2.3-alpha", "1.2.3"),
    )
    .unwrap();
    fs::write(dir.path().join("AssemblyInfo.cs"), ASSEMBLY_INFO).unwrap();

    let mut manifest = Manifest::load(dir.path().join("Package.nuspec")).unwrap();
    let new_version = manifest
        .current_version()
        .unwrap()
        .bump(&BumpRequest::Major)
        .unwrap();
    assert_eq!(new_version.to_string(), "2.0.0");

    manifest.set_version(&new_version).unwrap();
    manifest.save().unwrap();
    propagate(dir.path(), "AssemblyInfo.cs", &new_version).unwrap();

    let manifest_content = fs::read_to_string(dir.path().join("Package.nuspec")).unwrap();
    assert!(manifest_content.contains("<version>2.0.0</version>"));
    let marker = fs::read_to_string(dir.path().join("AssemblyInfo.cs")).unwrap();
    assert!(marker.contains(r#"AssemblyVersion("2.0.0")"#));
}

#[test]
fn test_manifest_rewrite_preserves_other_fields() {
    let dir = TempDir::new().unwrap();
    setup_project(dir.path());

    let mut manifest = Manifest::load(dir.path().join("Package.nuspec")).unwrap();
    let new_version = Version::parse("1.2.3-alpha2").unwrap();
    manifest.set_version(&new_version).unwrap();
    manifest.save().unwrap();

    let content = fs::read_to_string(dir.path().join("Package.nuspec")).unwrap();
    assert_eq!(content, NUSPEC.replace("1.2.3-alpha<", "1.2.3-alpha2<"));
}

#[test]
fn test_release_note_prepended_after_version_write() {
    let dir = TempDir::new().unwrap();
    setup_project(dir.path());

    let mut manifest = Manifest::load(dir.path().join("Package.nuspec")).unwrap();
    let new_version = manifest
        .current_version()
        .unwrap()
        .bump(&BumpRequest::Label)
        .unwrap();
    manifest.set_version(&new_version).unwrap();
    manifest.save().unwrap();

    manifest
        .prepend_release_note(&new_version, "second alpha")
        .unwrap();
    manifest.save().unwrap();

    let content = fs::read_to_string(dir.path().join("Package.nuspec")).unwrap();
    assert!(content.contains(
        "<releaseNotes>v1.2.3: second alpha\n\nv1.2.3: alpha release</releaseNotes>"
    ));
    assert!(content.contains("<version>1.2.3-alpha2</version>"));
}
