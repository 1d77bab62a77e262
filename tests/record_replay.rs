//! Executor scenarios replayed from cassettes.
//!
//! Replay is strict, so every scenario also proves the exact argument vector
//! the executor produced.

use std::path::{Path, PathBuf};

use gcloud_jobs::cassette::format::Outcome;
use gcloud_jobs::cassette::recorder::CassetteRecorder;
use gcloud_jobs::context::ServiceContext;
use gcloud_jobs::ports::{Command, ProcessResult};
use gcloud_jobs::{GcloudConfig, GcloudError, GcloudExecutor, JobQuery, JobRef};

const JOB_LIST: &str = include_str!("fixtures/job-list.json");

fn temp_cassette(name: &str) -> (PathBuf, PathBuf) {
    let dir = std::env::temp_dir().join(format!("gcloud_jobs_it_{name}"));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("gcloud.cassette.yaml");
    (dir, path)
}

fn ok(output: &str) -> Outcome {
    Outcome::Ok(ProcessResult { exit_code: 0, output: output.into(), stderr: String::new() })
}

fn gcloud(args: &[&str]) -> Command {
    Command::new("gcloud", args.iter().copied())
}

fn write_cassette(path: &Path, executions: Vec<(Command, Outcome)>) {
    let mut recorder = CassetteRecorder::new(path, "integration");
    for (command, outcome) in executions {
        recorder.record(command, outcome);
    }
    recorder.finish().expect("recording should succeed");
}

#[test]
fn list_with_all_optional_arguments() {
    let (dir, path) = temp_cassette("list_all");
    write_cassette(
        &path,
        vec![(
            gcloud(&[
                "dataproc",
                "jobs",
                "list",
                "--format=json",
                "--project=<project>",
                "--region=<region>",
                "--filter=<filterkey>=<filtervalue>",
                "--limit=99",
                "--sort-by=<sortby>",
            ]),
            ok(JOB_LIST),
        )],
    );

    let ctx = ServiceContext::replaying(&path).unwrap();
    let executor = GcloudExecutor::new(ctx.process.as_ref());
    let query = JobQuery::new("<project>", "<region>")
        .filter("<filterkey>", "<filtervalue>")
        .limit(99)
        .sort_by("<sortby>");

    let jobs = executor.list_jobs(&query).unwrap();
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].id(), "wordcount-1");
    assert_eq!(jobs[0].state(), "DONE");
    assert_eq!(jobs[0].status_history.len(), 3);
    assert_eq!(jobs[1].id(), "pi-2");
    assert_eq!(jobs[1].placement.cluster_name, "etl-cluster");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn list_without_optional_arguments() {
    let (dir, path) = temp_cassette("list_required");
    write_cassette(
        &path,
        vec![(
            gcloud(&[
                "dataproc",
                "jobs",
                "list",
                "--format=json",
                "--project=<project>",
                "--region=<region>",
            ]),
            ok(JOB_LIST),
        )],
    );

    let ctx = ServiceContext::replaying(&path).unwrap();
    let executor = GcloudExecutor::new(ctx.process.as_ref());
    let jobs = executor.list_jobs(&JobQuery::new("<project>", "<region>")).unwrap();
    assert_eq!(jobs.len(), 2);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn failing_tool_surfaces_exit_code_and_output() {
    let (dir, path) = temp_cassette("list_fails");
    write_cassette(
        &path,
        vec![(
            gcloud(&["dataproc", "jobs", "list", "--format=json", "--project=p", "--region=r"]),
            Outcome::Ok(ProcessResult {
                exit_code: 1,
                output: "not json".into(),
                stderr: "ERROR: (gcloud.dataproc.jobs.list) PERMISSION_DENIED".into(),
            }),
        )],
    );

    let ctx = ServiceContext::replaying(&path).unwrap();
    let executor = GcloudExecutor::new(ctx.process.as_ref());
    let err = executor.list_jobs(&JobQuery::new("p", "r")).unwrap_err();
    match err {
        GcloudError::ExternalToolFailure { exit_code, output, stderr } => {
            assert_eq!(exit_code, 1);
            assert_eq!(output, "not json");
            assert!(stderr.contains("PERMISSION_DENIED"));
        }
        other => panic!("expected ExternalToolFailure, got {other:?}"),
    }

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn session_of_describe_then_cancel_with_global_flags() {
    let (dir, path) = temp_cassette("describe_cancel");
    let job = r#"{"reference": {"projectId": "p", "jobId": "pi-2"}, "status": {"state": "RUNNING"}}"#;
    let cancelled =
        r#"{"reference": {"projectId": "p", "jobId": "pi-2"}, "status": {"state": "CANCEL_PENDING"}}"#;
    write_cassette(
        &path,
        vec![
            (
                Command::new(
                    "/opt/gcloud",
                    [
                        "dataproc",
                        "jobs",
                        "describe",
                        "pi-2",
                        "--format=json",
                        "--project=p",
                        "--region=r",
                        "--configuration=prod",
                    ],
                ),
                ok(job),
            ),
            (
                Command::new(
                    "/opt/gcloud",
                    [
                        "dataproc",
                        "jobs",
                        "kill",
                        "pi-2",
                        "--format=json",
                        "--project=p",
                        "--region=r",
                        "--quiet",
                        "--configuration=prod",
                    ],
                ),
                ok(cancelled),
            ),
        ],
    );

    let ctx = ServiceContext::replaying(&path).unwrap();
    let config = GcloudConfig::new("/opt/gcloud").with_configuration("prod");
    let executor = GcloudExecutor::with_config(ctx.process.as_ref(), config);
    let job_ref = JobRef::new("p", "r", "pi-2");

    assert_eq!(executor.describe_job(&job_ref).unwrap().state(), "RUNNING");
    assert_eq!(executor.cancel_job(&job_ref).unwrap().state(), "CANCEL_PENDING");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn unexpected_command_fails_as_process_error() {
    let (dir, path) = temp_cassette("mismatch");
    write_cassette(
        &path,
        vec![(
            gcloud(&["dataproc", "jobs", "list", "--format=json", "--project=p", "--region=r"]),
            ok("[]"),
        )],
    );

    let ctx = ServiceContext::replaying(&path).unwrap();
    let executor = GcloudExecutor::new(ctx.process.as_ref());
    let err = executor.list_jobs(&JobQuery::new("p", "r").limit(5)).unwrap_err();
    assert!(matches!(err, GcloudError::Process(_)));
    assert!(err.to_string().contains("Cassette mismatch"));

    let _ = std::fs::remove_dir_all(&dir);
}
