//! Tests for installer dispatch, source selection, container unwrapping and shims

use std::path::{Path, PathBuf};

use super::container;
use super::shims::ShimCreator;
use super::source::{artifact_dir, fetch_installer, select_installer_url};
use super::*;
use crate::arch::Arch;
use crate::config::{Container, Installer, Package, Shortcut};
use crate::error::InstallError;
use crate::fetch::HttpFetcher;
use crate::template::{Environment, UndefinedPolicy};
use crate::temp::ScratchSpace;
use crate::test_fixtures::{
    FakeExtractor, RecordingFetcher, RecordingLinks, RecordingRunner, create_temp_dir,
};

const HOST_64: Host = Host { is_64bit: true };

fn expander_with(root: &Path) -> TemplateExpander {
    TemplateExpander::new(
        Environment::from_pairs([
            ("ProgramFiles", root.join("Program Files").display().to_string()),
            ("SystemDrive", root.display().to_string()),
        ]),
        UndefinedPolicy::Empty,
    )
}

fn package(kind: &str, x86: &str, x86_64: &str) -> Package {
    Package {
        version: "1.2.3".to_string(),
        installer: Installer {
            kind: kind.to_string(),
            x86: x86.to_string(),
            x86_64: x86_64.to_string(),
            interactive: false,
            options: None,
        },
    }
}

struct Harness {
    expander: TemplateExpander,
    runner: RecordingRunner,
    archives: FakeExtractor,
    links: RecordingLinks,
    start_menu: PathBuf,
}

impl Harness {
    fn new(root: &Path) -> Self {
        Self {
            expander: expander_with(root),
            runner: RecordingRunner::new(),
            archives: FakeExtractor::new(),
            links: RecordingLinks::new(),
            start_menu: root.join("Start Menu"),
        }
    }

    fn ctx(&self) -> InstallContext<'_> {
        InstallContext {
            expander: &self.expander,
            runner: &self.runner,
            archives: &self.archives,
            links: &self.links,
            start_menu: &self.start_menu,
            host: HOST_64,
        }
    }
}

// Source selection

#[test]
fn test_select_prefers_x86_64_on_64bit() {
    let temp = create_temp_dir();
    let pkg = package("msi", "https://e.test/32-${version}.msi", "https://e.test/64-${version}.msi");

    let url = select_installer_url(&pkg, Arch::X86_64, &expander_with(temp.path())).unwrap();
    assert_eq!(url, "https://e.test/64-1.2.3.msi");

    let url = select_installer_url(&pkg, Arch::X86, &expander_with(temp.path())).unwrap();
    assert_eq!(url, "https://e.test/32-1.2.3.msi");
}

#[test]
fn test_select_falls_back_to_x86() {
    let temp = create_temp_dir();
    let pkg = package("msi", "https://e.test/32.msi", "");

    let url = select_installer_url(&pkg, Arch::X86_64, &expander_with(temp.path())).unwrap();
    assert_eq!(url, "https://e.test/32.msi");
}

#[test]
fn test_select_without_any_installer() {
    let temp = create_temp_dir();
    let pkg = package("msi", "", "");

    for arch in [Arch::X86, Arch::X86_64] {
        let err = select_installer_url(&pkg, arch, &expander_with(temp.path())).unwrap_err();
        assert!(matches!(err, InstallError::MissingInstallers));
    }
}

#[test]
fn test_select_x86_without_32bit_installer() {
    let temp = create_temp_dir();
    let pkg = package("msi", "", "https://e.test/64.msi");

    let err = select_installer_url(&pkg, Arch::X86, &expander_with(temp.path())).unwrap_err();
    assert!(matches!(err, InstallError::Missing32BitInstaller));
}

#[test]
fn test_select_treats_blank_urls_as_missing() {
    let temp = create_temp_dir();
    let ex = expander_with(temp.path());

    let pkg = package("copy", "https://e.test/foo32.exe", "   ");
    assert_eq!(
        select_installer_url(&pkg, Arch::X86_64, &ex).unwrap(),
        "https://e.test/foo32.exe"
    );

    let pkg = package("copy", " \t", "https://e.test/foo64.exe");
    assert!(matches!(
        select_installer_url(&pkg, Arch::X86, &ex),
        Err(InstallError::Missing32BitInstaller)
    ));

    let pkg = package("copy", " ", "\n");
    assert!(matches!(
        select_installer_url(&pkg, Arch::X86_64, &ex),
        Err(InstallError::MissingInstallers)
    ));
}

#[test]
fn test_artifact_dir_is_per_package_version() {
    let downloads = Path::new("downloads");

    assert_eq!(
        artifact_dir(downloads, "putty", "0.73"),
        downloads.join("putty").join("0.73")
    );
    assert_eq!(
        artifact_dir(downloads, "odd/name", "1:2"),
        downloads.join("odd_name").join("1_2")
    );
}

#[test]
fn test_packages_sharing_url_basename_get_their_own_artifact() {
    let temp = create_temp_dir();
    let ex = expander_with(temp.path());
    let downloads = temp.path().join("downloads");
    let fetcher = HttpFetcher::new();

    let mut sources = Vec::new();
    for (name, body) in [("alpha", "ALPHA"), ("beta", "BETA")] {
        let dir = temp.path().join("sources").join(name);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("download"), body).unwrap();
        sources.push(dir.join("download").display().to_string());
    }

    let alpha = package("as-is", &sources[0], "");
    let beta = package("as-is", &sources[1], "");

    let alpha_path =
        fetch_installer("alpha", &alpha, Arch::X86, &ex, &fetcher, &downloads, false).unwrap();
    let beta_path =
        fetch_installer("beta", &beta, Arch::X86, &ex, &fetcher, &downloads, false).unwrap();

    assert_ne!(alpha_path, beta_path);
    assert_eq!(std::fs::read_to_string(&alpha_path).unwrap(), "ALPHA");
    assert_eq!(std::fs::read_to_string(&beta_path).unwrap(), "BETA");

    // A cached artifact is only reused by the package version that owns it.
    let beta_again =
        fetch_installer("beta", &beta, Arch::X86, &ex, &fetcher, &downloads, false).unwrap();
    assert_eq!(std::fs::read_to_string(beta_again).unwrap(), "BETA");
}

#[test]
fn test_fetch_installer_passes_flags() {
    let temp = create_temp_dir();
    let fetcher = RecordingFetcher::new();
    let pkg = package("as-is", "https://e.test/tool-${version}.exe", "");
    let downloads = temp.path().join("downloads");

    let path = fetch_installer(
        "tool",
        &pkg,
        Arch::X86_64,
        &expander_with(temp.path()),
        &fetcher,
        &downloads,
        true,
    )
    .unwrap();

    assert_eq!(path, downloads.join("tool").join("1.2.3").join("tool-1.2.3.exe"));
    let calls = fetcher.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "https://e.test/tool-1.2.3.exe");
    assert!(calls[0].1.overwrite);
    assert!(calls[0].1.progress);
}

#[test]
fn test_fetch_installer_reports_template_errors() {
    let temp = create_temp_dir();
    let fetcher = RecordingFetcher::new();
    let pkg = package("as-is", "https://e.test/${bad name}.exe", "");

    let err = fetch_installer(
        "broken",
        &pkg,
        Arch::X86,
        &expander_with(temp.path()),
        &fetcher,
        temp.path(),
        false,
    )
    .unwrap_err();

    assert!(matches!(err, InstallError::TemplateExpansionFailed { .. }));
    assert!(fetcher.calls().is_empty());
}

// Container unwrapping

fn container_options(kind: &str, installer: &str) -> Options {
    Options {
        container: Some(Container {
            kind: kind.to_string(),
            installer: installer.to_string(),
        }),
        ..Options::default()
    }
}

#[test]
fn test_unwrap_without_container_is_noop() {
    let temp = create_temp_dir();
    let archives = FakeExtractor::new();
    let mut scratch = ScratchSpace::in_dir(temp.path());
    let artifact = temp.path().join("setup.exe");

    let path = container::unwrap(&artifact, None, &archives, &mut scratch).unwrap();
    assert_eq!(path, artifact);

    let path =
        container::unwrap(&artifact, Some(&Options::default()), &archives, &mut scratch).unwrap();
    assert_eq!(path, artifact);
    assert!(archives.calls().is_empty());
}

#[test]
fn test_unwrap_zip_container() {
    let temp = create_temp_dir();
    let archives = FakeExtractor::new().with_entry("setup.exe");
    let mut scratch = ScratchSpace::in_dir(temp.path());
    let artifact = temp.path().join("bundle.zip");
    let options = container_options("zip", "setup.exe");

    let path = container::unwrap(&artifact, Some(&options), &archives, &mut scratch).unwrap();

    assert!(path.ends_with("bundle.zip_extracted/setup.exe"));
    assert!(path.is_file());
    let calls = archives.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, artifact);
    assert_eq!(calls[0].1, path.parent().unwrap());
}

#[test]
fn test_unwrap_empty_installer_path() {
    let temp = create_temp_dir();
    let archives = FakeExtractor::new();
    let mut scratch = ScratchSpace::in_dir(temp.path());
    let options = container_options("zip", "  ");

    let err = container::unwrap(Path::new("a.zip"), Some(&options), &archives, &mut scratch)
        .unwrap_err();
    assert!(matches!(err, InstallError::EmptyContainerInstallerPath));
}

#[test]
fn test_unwrap_unsupported_kind() {
    let temp = create_temp_dir();
    let archives = FakeExtractor::new();
    let mut scratch = ScratchSpace::in_dir(temp.path());
    let options = container_options("7z", "setup.exe");

    let err = container::unwrap(Path::new("a.7z"), Some(&options), &archives, &mut scratch)
        .unwrap_err();
    assert!(matches!(err, InstallError::UnsupportedContainerKind { kind } if kind == "7z"));
    assert!(archives.calls().is_empty());
}

#[test]
fn test_unwrap_extraction_failure() {
    let temp = create_temp_dir();
    let archives = FakeExtractor::new().failing();
    let mut scratch = ScratchSpace::in_dir(temp.path());
    let options = container_options("zip", "setup.exe");

    let err = container::unwrap(Path::new("a.zip"), Some(&options), &archives, &mut scratch)
        .unwrap_err();
    assert!(matches!(err, InstallError::ExtractionFailed { .. }));
}

// Dispatch

#[test]
fn test_copy_installs_to_expanded_destination() {
    let temp = create_temp_dir();
    let harness = Harness::new(temp.path());
    let artifact = temp.path().join("foo-1.2.3.exe");
    std::fs::write(&artifact, b"foo").unwrap();
    let options = Options {
        destination: "${PROGRAMFILES}/Foo/foo.exe".to_string(),
        ..Options::default()
    };

    Dispatcher::new()
        .install(&artifact, "copy", Some(&options), &harness.ctx())
        .unwrap();

    let installed = temp.path().join("Program Files").join("Foo").join("foo.exe");
    assert_eq!(std::fs::read(installed).unwrap(), b"foo");
}

#[test]
fn test_copy_requires_options_and_destination() {
    let temp = create_temp_dir();
    let harness = Harness::new(temp.path());
    let dispatcher = Dispatcher::new();

    let err = dispatcher
        .install(Path::new("a.exe"), "copy", None, &harness.ctx())
        .unwrap_err();
    assert!(matches!(err, InstallError::MissingOptions { kind } if kind == "copy"));

    let options = Options {
        destination: "   ".to_string(),
        ..Options::default()
    };
    let err = dispatcher
        .install(Path::new("a.exe"), "copy", Some(&options), &harness.ctx())
        .unwrap_err();
    assert!(matches!(err, InstallError::MissingDestination { kind } if kind == "copy"));
}

#[test]
fn test_copy_missing_artifact() {
    let temp = create_temp_dir();
    let harness = Harness::new(temp.path());
    let options = Options {
        destination: temp.path().join("out.exe").display().to_string(),
        ..Options::default()
    };

    let err = Dispatcher::new()
        .install(&temp.path().join("missing.exe"), "copy", Some(&options), &harness.ctx())
        .unwrap_err();
    assert!(matches!(err, InstallError::CopyFailed { .. }));
}

#[test]
fn test_custom_expands_installer_override() {
    let temp = create_temp_dir();
    let harness = Harness::new(temp.path());
    let options = Options {
        arguments: vec![
            "${installer}".to_string(),
            "/D=${PROGRAMFILES}\\Tool".to_string(),
        ],
        ..Options::default()
    };

    Dispatcher::new()
        .install(Path::new("tool.exe"), "custom", Some(&options), &harness.ctx())
        .unwrap();

    let expected_dir = format!("/D={}\\Tool", temp.path().join("Program Files").display());
    assert_eq!(
        harness.runner.calls(),
        vec![vec!["tool.exe".to_string(), expected_dir]]
    );
}

#[test]
fn test_custom_without_arguments_never_runs() {
    let temp = create_temp_dir();
    let harness = Harness::new(temp.path());

    let err = Dispatcher::new()
        .install(
            Path::new("tool.exe"),
            "custom",
            Some(&Options::default()),
            &harness.ctx(),
        )
        .unwrap_err();

    assert!(matches!(err, InstallError::MissingArguments));
    assert!(harness.runner.calls().is_empty());
}

#[test]
fn test_custom_process_failure() {
    let temp = create_temp_dir();
    let mut harness = Harness::new(temp.path());
    harness.runner = RecordingRunner::new().failing_on("tool.exe");
    let options = Options {
        arguments: vec!["${installer}".to_string()],
        ..Options::default()
    };

    let err = Dispatcher::new()
        .install(Path::new("tool.exe"), "custom", Some(&options), &harness.ctx())
        .unwrap_err();
    assert!(matches!(err, InstallError::ProcessFailed { .. }));
}

#[test]
fn test_zip_without_destination_touches_nothing() {
    let temp = create_temp_dir();
    let harness = Harness::new(temp.path());
    let options = Options::default();

    let err = Dispatcher::new()
        .install(Path::new("tool.zip"), "zip", Some(&options), &harness.ctx())
        .unwrap_err();

    assert!(matches!(err, InstallError::MissingDestination { kind } if kind == "zip"));
    assert!(harness.archives.calls().is_empty());
    assert!(harness.links.calls().is_empty());
}

#[test]
fn test_zip_extracts_and_creates_shortcuts() {
    let temp = create_temp_dir();
    let harness = Harness::new(temp.path());
    let options = Options {
        destination: "${SYSTEMDRIVE}/Tools/tool".to_string(),
        shortcuts: vec![Shortcut {
            name: "Tool".to_string(),
            target: "${SYSTEMDRIVE}/Tools/tool/tool.exe".to_string(),
        }],
        ..Options::default()
    };

    Dispatcher::new()
        .install(Path::new("tool.zip"), "zip", Some(&options), &harness.ctx())
        .unwrap();

    let destination = format!("{}/Tools/tool", temp.path().display());
    assert_eq!(
        harness.archives.calls(),
        vec![(PathBuf::from("tool.zip"), PathBuf::from(&destination))]
    );
    assert_eq!(
        harness.links.calls(),
        vec![(
            PathBuf::from(format!("{}/tool.exe", destination)),
            harness.start_menu.join("Tool.lnk"),
        )]
    );
}

#[test]
fn test_native_kind_runs_command() {
    let temp = create_temp_dir();
    let harness = Harness::new(temp.path());

    Dispatcher::new()
        .install(Path::new("setup.exe"), "nsis", None, &harness.ctx())
        .unwrap();

    assert_eq!(
        harness.runner.calls(),
        vec![vec![
            "setup.exe".to_string(),
            "/S".to_string(),
            "/NCRC".to_string()
        ]]
    );
}

#[test]
fn test_unknown_kind() {
    let temp = create_temp_dir();
    let harness = Harness::new(temp.path());

    let err = Dispatcher::new()
        .install(Path::new("setup.exe"), "wix", None, &harness.ctx())
        .unwrap_err();

    assert!(matches!(err, InstallError::UnknownInstallerKind { kind } if kind == "wix"));
    assert!(harness.runner.calls().is_empty());
}

/// Claims the `msi` tag to check that registered strategies shadow native kinds
struct LoggingMsi;

impl InstallStrategy for LoggingMsi {
    fn kind(&self) -> &'static str {
        "msi"
    }

    fn install(
        &self,
        _artifact: &Path,
        _options: Option<&Options>,
        ctx: &InstallContext,
    ) -> Result<()> {
        ctx.runner.run(&["custom-msi".to_string()])
    }
}

#[test]
fn test_registered_strategy_wins_over_native_kind() {
    let temp = create_temp_dir();
    let harness = Harness::new(temp.path());
    let mut dispatcher = Dispatcher::new();
    dispatcher.register(Box::new(LoggingMsi));

    dispatcher
        .install(Path::new("a.msi"), "msi", None, &harness.ctx())
        .unwrap();

    assert_eq!(harness.runner.calls(), vec![vec!["custom-msi".to_string()]]);
}

#[test]
fn test_empty_dispatcher_rejects_bespoke_kinds() {
    let temp = create_temp_dir();
    let harness = Harness::new(temp.path());

    let err = Dispatcher::empty()
        .install(Path::new("a.exe"), "copy", None, &harness.ctx())
        .unwrap_err();
    assert!(matches!(err, InstallError::UnknownInstallerKind { .. }));
}

// Shims

fn exeproxy_in(root: &Path) -> PathBuf {
    let exeproxy = root.join("exeproxy.exe");
    std::fs::write(&exeproxy, b"").unwrap();
    exeproxy
}

#[test]
fn test_shims_require_exeproxy() {
    let temp = create_temp_dir();
    let runner = RecordingRunner::new();
    let expander = expander_with(temp.path());
    let creator = ShimCreator::new(
        temp.path().join("missing.exe"),
        temp.path().join("Shims"),
        &runner,
        &expander,
    );

    let err = creator.create(&["tool.exe".to_string()], "1.0").unwrap_err();
    assert!(matches!(err, InstallError::ShimToolMissing { .. }));
    assert!(!temp.path().join("Shims").exists());
}

#[test]
fn test_shims_are_created_in_order() {
    let temp = create_temp_dir();
    let runner = RecordingRunner::new();
    let expander = expander_with(temp.path());
    let exeproxy = exeproxy_in(temp.path());
    let shims_dir = temp.path().join("Shims");
    let creator = ShimCreator::new(exeproxy.clone(), shims_dir.clone(), &runner, &expander);

    creator
        .create(
            &[
                "C:\\Tools\\tool-${version}\\tool.exe".to_string(),
                "C:\\Tools\\other.exe".to_string(),
            ],
            "2.0",
        )
        .unwrap();

    assert!(shims_dir.is_dir());
    let calls = runner.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(
        calls[0],
        vec![
            exeproxy.display().to_string(),
            "exeproxy-copy".to_string(),
            shims_dir.join("tool.exe").display().to_string(),
            "C:\\Tools\\tool-2.0\\tool.exe".to_string(),
        ]
    );
    assert_eq!(calls[1][2], shims_dir.join("other.exe").display().to_string());
}

#[test]
fn test_existing_shim_is_replaced() {
    let temp = create_temp_dir();
    let runner = RecordingRunner::new();
    let expander = expander_with(temp.path());
    let shims_dir = temp.path().join("Shims");
    std::fs::create_dir_all(&shims_dir).unwrap();
    std::fs::write(shims_dir.join("tool.exe"), b"old").unwrap();
    let creator = ShimCreator::new(exeproxy_in(temp.path()), shims_dir.clone(), &runner, &expander);

    creator.create(&["C:\\Tools\\tool.exe".to_string()], "1").unwrap();

    assert!(!shims_dir.join("tool.exe").exists());
    assert_eq!(runner.calls().len(), 1);
}

#[test]
fn test_shim_failure_stops_remaining_shims() {
    let temp = create_temp_dir();
    let runner = RecordingRunner::new().failing_on("first.exe");
    let expander = expander_with(temp.path());
    let creator = ShimCreator::new(
        exeproxy_in(temp.path()),
        temp.path().join("Shims"),
        &runner,
        &expander,
    );

    let err = creator
        .create(
            &["C:\\first.exe".to_string(), "C:\\second.exe".to_string()],
            "1",
        )
        .unwrap_err();

    assert!(matches!(err, InstallError::ShimCreationFailed { .. }));
    assert_eq!(runner.calls().len(), 1);
}
